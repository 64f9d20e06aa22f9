use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement};

use crate::dom::{read_resume_form, ControllerContext, SignalView};

const IDLE_ICON: &str = "fas fa-cloud-upload-alt text-4xl text-gray-400";
const SELECTED_ICON: &str = "fas fa-file-alt text-4xl text-blue-500";
const IDLE_LABEL: &str = "Click to choose a resume";

/// Resume form with a dashed drop zone that previews the picked file.
#[component]
pub fn ResumeUploadForm(state: SignalView) -> impl IntoView {
    let controller = use_context::<ControllerContext>();

    let on_file_change = move |ev: web_sys::Event| {
        let Some(ctx) = controller else {
            return;
        };
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            ctx.get().select_file(&file.name(), file.size() as u64);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(ctx) = controller else {
            warn!("Resume form mounted without a controller");
            return;
        };
        let Some(form) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        let controller = ctx.get();
        spawn_local(async move {
            controller.submit_resume(read_resume_form(form)).await;
        });
    };

    let icon = move || {
        if state.selected_file.with(Option::is_some) {
            SELECTED_ICON
        } else {
            IDLE_ICON
        }
    };
    let label = move || {
        state
            .selected_file
            .get()
            .map(|file| file.label())
            .unwrap_or_else(|| IDLE_LABEL.to_string())
    };

    view! {
        <form id="resumeForm" class="space-y-4" on:submit=on_submit>
            <div>
                <label for="candidateName" class="block text-sm font-medium text-gray-700 mb-1">
                    "Candidate name"
                </label>
                <input
                    type="text"
                    id="candidateName"
                    name="name"
                    placeholder="Jane Doe"
                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                />
            </div>

            <label
                for="resumeFile"
                class="flex flex-col items-center justify-center border-2 border-dashed border-gray-300 rounded-lg p-6 cursor-pointer hover:border-blue-400"
            >
                <i class=icon></i>
                <span class="mt-2 text-sm text-gray-600">{label}</span>
                <span class="text-xs text-gray-400">"PDF or DOCX, up to 16 MB"</span>
                <input
                    type="file"
                    id="resumeFile"
                    name="resume"
                    accept=".pdf,.docx"
                    class="hidden"
                    on:change=on_file_change
                />
            </label>

            <button
                type="submit"
                class="w-full px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
            >
                <i class="fas fa-upload mr-2"></i>
                "Upload & Parse"
            </button>
        </form>
    }
}
