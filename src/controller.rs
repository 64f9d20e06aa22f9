//! Page controller: turns form submissions into backend calls and view updates.
//!
//! The controller is single-threaded and shared behind an `Rc`. Flows may
//! overlap (a second submission while one is in flight), so:
//! - the loading indicator is reference counted through [`LoadingGuard`],
//! - each flow carries a generation [`Ticket`]; a successful response is
//!   applied only when no newer response of the same flow was applied first.
//!   A late, older response is not rendered and does not touch the session.

use std::cell::{Cell, RefCell};
use std::future::Future;

use tracing::{debug, info, warn};

use crate::api::{MatchApi, ResumeUpload};
use crate::error::ApiError;
use crate::models::{JobDraft, JobId};
use crate::notify::NoticeKind;
use crate::render::{FileSummary, MatchBoard, ResumeSummary};
use crate::view::MatchView;

pub const RESUME_SAVED: &str = "Resume uploaded and parsed successfully!";
pub const JOB_SAVED: &str = "Job description saved successfully!";
pub const CANDIDATES_MATCHED: &str = "Candidates matched successfully!";
pub const NO_JOB_SELECTED: &str = "No job selected for download";

/// State that outlives a single flow. Lives until the page is reloaded.
#[derive(Debug, Clone, Default, PartialEq)]
struct SessionState {
    job_id: Option<JobId>,
}

// -- Loading indicator --

/// Counts flows that currently want the loading indicator.
#[derive(Debug, Default)]
pub struct LoadingTracker {
    in_flight: Cell<usize>,
}

impl LoadingTracker {
    /// Show the indicator (if this is the first flow) until the guard drops.
    pub fn begin<'a, V: MatchView>(&'a self, view: &'a V) -> LoadingGuard<'a, V> {
        let count = self.in_flight.get() + 1;
        self.in_flight.set(count);
        if count == 1 {
            view.set_loading(true);
        }
        LoadingGuard {
            tracker: self,
            view,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }
}

/// Releases one loading slot on drop, hiding the indicator when it was the last.
pub struct LoadingGuard<'a, V: MatchView> {
    tracker: &'a LoadingTracker,
    view: &'a V,
}

impl<V: MatchView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        let count = self.tracker.in_flight.get().saturating_sub(1);
        self.tracker.in_flight.set(count);
        if count == 0 {
            self.view.set_loading(false);
        }
    }
}

// -- Generations --

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out increasing tickets and remembers the newest one applied.
/// Failed requests never commit, so they cannot hide an older success.
#[derive(Debug, Default)]
pub struct FlowGate {
    issued: Cell<u64>,
    committed: Cell<u64>,
}

impl FlowGate {
    pub fn issue(&self) -> Ticket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Ticket(next)
    }

    /// Record `ticket` as applied unless a newer one already was.
    pub fn try_commit(&self, ticket: Ticket) -> bool {
        if ticket.0 <= self.committed.get() {
            return false;
        }
        self.committed.set(ticket.0);
        true
    }
}

// -- Controller --

pub struct MatchController<A, V> {
    api: A,
    view: V,
    session: RefCell<SessionState>,
    loading: LoadingTracker,
    resume_flow: FlowGate,
    job_flow: FlowGate,
    match_flow: FlowGate,
}

impl<A: MatchApi, V: MatchView> MatchController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            session: RefCell::new(SessionState::default()),
            loading: LoadingTracker::default(),
            resume_flow: FlowGate::default(),
            job_flow: FlowGate::default(),
            match_flow: FlowGate::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn current_job(&self) -> Option<JobId> {
        self.session.borrow().job_id.clone()
    }

    pub fn loading(&self) -> &LoadingTracker {
        &self.loading
    }

    /// Preview a picked file in the drop zone. No type or size checks: the
    /// server enforces those.
    pub fn select_file(&self, name: &str, size_bytes: u64) -> FileSummary {
        let summary = FileSummary::new(name, size_bytes);
        debug!("Selected resume file: {}", summary.label());
        self.view.show_selected_file(summary.clone());
        summary
    }

    /// Upload the resume form. `upload` reads the form (and the file bytes);
    /// it runs under the loading indicator and its errors are reported like
    /// transport failures.
    pub async fn submit_resume<F>(&self, upload: F)
    where
        F: Future<Output = Result<ResumeUpload, ApiError>>,
    {
        let ticket = self.resume_flow.issue();
        let _loading = self.loading.begin(&self.view);
        debug!("Uploading resume");

        let result = match upload.await {
            Ok(upload) => self.api.upload_resume(upload).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(uploaded) => {
                info!(
                    "Resume parsed (candidate {:?}, {} skill categories)",
                    uploaded.candidate_id,
                    uploaded.parsed_data.skills.len()
                );
                if self.resume_flow.try_commit(ticket) {
                    self.view
                        .show_resume(ResumeSummary::from_parsed(&uploaded.parsed_data));
                } else {
                    debug!("Dropping stale resume result");
                }
                self.view.notify(NoticeKind::Success, RESUME_SAVED.to_string());
            }
            Err(ApiError::Rejected(message)) => {
                warn!("Resume upload rejected: {}", message);
                self.view
                    .notify(NoticeKind::Error, format!("Error: {}", message));
            }
            Err(e) => {
                warn!("Resume upload failed: {}", e);
                self.view
                    .notify(NoticeKind::Error, format!("Error uploading resume: {}", e));
            }
        }
    }

    /// Save a job description, then match candidates against it.
    ///
    /// The extracted skills are shown before matching starts; matching is
    /// awaited before this returns.
    pub async fn submit_job(&self, draft: JobDraft) {
        let ticket = self.job_flow.issue();
        let _loading = self.loading.begin(&self.view);
        debug!("Saving job description '{}'", draft.title);

        match self.api.save_job(&draft).await {
            Ok(saved) => {
                info!(
                    "Job {} saved with {} skills",
                    saved.job_id,
                    saved.extracted_skills.len()
                );
                if !self.job_flow.try_commit(ticket) {
                    debug!("Dropping stale job save for {}", saved.job_id);
                    self.view.notify(NoticeKind::Success, JOB_SAVED.to_string());
                    return;
                }
                self.session.borrow_mut().job_id = Some(saved.job_id.clone());
                self.view.show_job_skills(saved.extracted_skills);
                self.view.notify(NoticeKind::Success, JOB_SAVED.to_string());

                self.match_candidates(&saved.job_id).await;
            }
            Err(ApiError::Rejected(message)) => {
                warn!("Job description rejected: {}", message);
                self.view
                    .notify(NoticeKind::Error, format!("Error: {}", message));
            }
            Err(e) => {
                warn!("Saving job description failed: {}", e);
                self.view.notify(
                    NoticeKind::Error,
                    format!("Error saving job description: {}", e),
                );
            }
        }
    }

    pub async fn match_candidates(&self, job_id: &JobId) {
        let ticket = self.match_flow.issue();
        let _loading = self.loading.begin(&self.view);
        debug!("Matching candidates for job {}", job_id);

        match self.api.match_candidates(job_id).await {
            Ok(report) => {
                info!("Job {} matched {} candidates", job_id, report.matches.len());
                if self.match_flow.try_commit(ticket) {
                    self.view.show_matches(MatchBoard::from_report(&report));
                } else {
                    debug!("Dropping stale match results for job {}", job_id);
                }
                self.view
                    .notify(NoticeKind::Success, CANDIDATES_MATCHED.to_string());
            }
            Err(e) => {
                warn!("Matching candidates for job {} failed: {}", job_id, e);
                self.view.notify(
                    NoticeKind::Error,
                    format!("Error matching candidates: {}", e),
                );
            }
        }
    }

    /// Navigate to the results file for the current job, if there is one.
    pub fn download(&self) {
        let Some(job_id) = self.current_job() else {
            warn!("Download requested without a saved job");
            self.view
                .notify(NoticeKind::Error, NO_JOB_SELECTED.to_string());
            return;
        };

        match self.api.download_url(&job_id) {
            Ok(url) => {
                info!("Downloading results for job {}", job_id);
                self.view.navigate(&url);
            }
            Err(e) => {
                warn!("Cannot build download address for job {}: {}", job_id, e);
                self.view
                    .notify(NoticeKind::Error, format!("Error downloading results: {}", e));
            }
        }
    }
}
