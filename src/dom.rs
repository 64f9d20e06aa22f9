//! Browser side of the page: a signal-backed [`MatchView`] and form readers.

use std::rc::Rc;
use std::time::Duration;

use js_sys::{Array, ArrayBuffer, Uint8Array};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, HtmlFormElement};

use crate::api::{HttpApi, ResumeUpload, SelectedFile, RESUME_FIELD};
use crate::controller::MatchController;
use crate::error::ApiError;
use crate::models::JobDraft;
use crate::notify::{NoticeKind, NoticeStack};
use crate::render::{FileSummary, MatchBoard, ResumeSummary};
use crate::view::MatchView;

pub type PageController = MatchController<HttpApi, SignalView>;

/// Controller handle placed in context by the page.
///
/// Widgets look it up with `use_context`; a widget mounted without one
/// renders but does nothing when used.
#[derive(Clone, Copy)]
pub struct ControllerContext(StoredValue<Rc<PageController>, LocalStorage>);

impl ControllerContext {
    pub fn new(controller: PageController) -> Self {
        Self(StoredValue::new_local(Rc::new(controller)))
    }

    pub fn get(&self) -> Rc<PageController> {
        self.0.get_value()
    }
}

/// Reactive state the components render from.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub loading: RwSignal<bool>,
    pub selected_file: RwSignal<Option<FileSummary>>,
    pub resume: RwSignal<Option<ResumeSummary>>,
    pub job_skills: RwSignal<Option<Vec<String>>>,
    pub matches: RwSignal<Option<MatchBoard>>,
    pub notices: RwSignal<NoticeStack>,
}

impl SignalView {
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            loading: RwSignal::new(false),
            selected_file: RwSignal::new(None),
            resume: RwSignal::new(None),
            job_skills: RwSignal::new(None),
            matches: RwSignal::new(None),
            notices: RwSignal::new(NoticeStack::new(notice_ttl)),
        }
    }
}

impl MatchView for SignalView {
    fn set_loading(&self, visible: bool) {
        self.loading.set(visible);
    }

    fn show_selected_file(&self, file: FileSummary) {
        self.selected_file.set(Some(file));
    }

    fn show_resume(&self, summary: ResumeSummary) {
        self.resume.set(Some(summary));
    }

    fn show_job_skills(&self, skills: Vec<String>) {
        self.job_skills.set(Some(skills));
    }

    fn show_matches(&self, board: MatchBoard) {
        self.matches.set(Some(board));
    }

    fn notify(&self, kind: NoticeKind, message: String) {
        let now = js_sys::Date::now() as u64;
        let notices = self.notices;
        let Some((id, ttl)) = notices.try_update(|stack| (stack.push(kind, message, now), stack.ttl()))
        else {
            return;
        };
        set_timeout(
            move || {
                notices.try_update(|stack| stack.dismiss(id));
            },
            ttl,
        );
    }

    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!("No window to navigate to {}", url);
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            tracing::error!("Navigation to {} failed: {:?}", url, e);
        }
    }
}

// -- Form readers --

fn js_error(e: wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn form_data(form: &HtmlFormElement) -> Result<FormData, ApiError> {
    FormData::new_with_form(form).map_err(|e| ApiError::File(js_error(e)))
}

/// Read a `File` into memory.
pub async fn read_file_bytes(file: &File) -> Result<Vec<u8>, ApiError> {
    let buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::File(js_error(e)))?
        .dyn_into()
        .map_err(|_| ApiError::File("not an ArrayBuffer".to_string()))?;

    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Collect the resume form: the `resume` file plus every text field.
pub async fn read_resume_form(form: HtmlFormElement) -> Result<ResumeUpload, ApiError> {
    let data = form_data(&form)?;
    let mut fields = Vec::new();
    let mut file = None;

    let entries = js_sys::try_iter(&data)
        .map_err(|e| ApiError::File(js_error(e)))?
        .ok_or_else(|| ApiError::File("form data is not iterable".to_string()))?;

    for entry in entries {
        let entry: Array = entry.map_err(|e| ApiError::File(js_error(e)))?.unchecked_into();
        let name = entry.get(0).as_string().unwrap_or_default();
        let value = entry.get(1);
        if let Some(text) = value.as_string() {
            fields.push((name, text));
        } else if name == RESUME_FIELD {
            if let Ok(f) = value.dyn_into::<File>() {
                file = Some(f);
            }
        }
    }

    let file = file.ok_or_else(|| ApiError::File("no file selected".to_string()))?;
    let bytes = read_file_bytes(&file).await?;
    let mime = file.type_();

    Ok(ResumeUpload {
        file: SelectedFile {
            name: file.name(),
            mime: if mime.is_empty() { None } else { Some(mime) },
            bytes,
        },
        fields,
    })
}

/// Build a job draft from the job form's named fields.
pub fn read_job_form(form: &HtmlFormElement) -> Result<JobDraft, ApiError> {
    let data = form_data(form)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(JobDraft::from_fields(
        &field("title"),
        &field("company"),
        &field("description"),
        &field("required_experience"),
    ))
}
