use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;

use crate::dom::{read_job_form, ControllerContext};
use crate::notify::NoticeKind;
use crate::view::MatchView;

#[component]
pub fn JobForm() -> impl IntoView {
    let controller = use_context::<ControllerContext>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(ctx) = controller else {
            warn!("Job form mounted without a controller");
            return;
        };
        let Some(form) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        let controller = ctx.get();
        match read_job_form(&form) {
            Ok(draft) => spawn_local(async move {
                controller.submit_job(draft).await;
            }),
            Err(e) => controller.view().notify(
                NoticeKind::Error,
                format!("Error saving job description: {}", e),
            ),
        }
    };

    view! {
        <form id="jobForm" class="space-y-4" on:submit=on_submit>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label for="jobTitle" class="block text-sm font-medium text-gray-700 mb-1">
                        "Job title"
                    </label>
                    <input
                        type="text"
                        id="jobTitle"
                        name="title"
                        required
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                    />
                </div>
                <div>
                    <label for="company" class="block text-sm font-medium text-gray-700 mb-1">
                        "Company"
                    </label>
                    <input
                        type="text"
                        id="company"
                        name="company"
                        required
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                    />
                </div>
            </div>
            <div>
                <label for="requiredExperience" class="block text-sm font-medium text-gray-700 mb-1">
                    "Required experience (years)"
                </label>
                <input
                    type="number"
                    id="requiredExperience"
                    name="required_experience"
                    min="0"
                    placeholder="0"
                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                />
            </div>
            <div>
                <label for="jobDescription" class="block text-sm font-medium text-gray-700 mb-1">
                    "Description"
                </label>
                <textarea
                    id="jobDescription"
                    name="description"
                    rows="8"
                    required
                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                ></textarea>
            </div>
            <button
                type="submit"
                class="w-full px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700"
            >
                <i class="fas fa-search mr-2"></i>
                "Save & Match Candidates"
            </button>
        </form>
    }
}
