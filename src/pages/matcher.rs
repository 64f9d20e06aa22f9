use leptos::prelude::*;

use crate::api::HttpApi;
use crate::components::job_form::JobForm;
use crate::components::job_results::JobResults;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::match_results::MatchResults;
use crate::components::notification_tray::NotificationTray;
use crate::components::resume_results::ResumeResults;
use crate::components::resume_upload::ResumeUploadForm;
use crate::config::ClientConfig;
use crate::controller::MatchController;
use crate::dom::{ControllerContext, SignalView};

/// Resume upload, job description and candidate matches on one page.
#[component]
pub fn MatcherPage(config: ClientConfig) -> impl IntoView {
    let state = SignalView::new(config.notice_ttl);
    let controller = MatchController::new(HttpApi::new(config.api_base), state);
    provide_context(ControllerContext::new(controller));

    view! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <header class="text-center mb-10">
                <h1 class="text-3xl font-bold text-gray-800">"Resume Screener"</h1>
                <p class="text-gray-600 mt-2">
                    "Upload resumes, describe the role, and rank the candidates."
                </p>
            </header>

            <div class="grid md:grid-cols-2 gap-8 mb-8">
                <section class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-semibold text-gray-800 mb-4">
                        <i class="fas fa-file-upload text-blue-500 mr-2"></i>
                        "Upload Resume"
                    </h2>
                    <ResumeUploadForm state=state />
                    <ResumeResults state=state />
                </section>

                <section class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-semibold text-gray-800 mb-4">
                        <i class="fas fa-briefcase text-green-500 mr-2"></i>
                        "Job Description"
                    </h2>
                    <JobForm />
                    <JobResults state=state />
                </section>
            </div>

            <MatchResults state=state />
            <LoadingSpinner state=state />
            <NotificationTray state=state />
        </div>
    }
}
