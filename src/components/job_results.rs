use leptos::prelude::*;

use crate::components::skill_tag::{SkillTags, TagTone};
use crate::dom::SignalView;

/// Skills the server extracted from the saved job description.
#[component]
pub fn JobResults(state: SignalView) -> impl IntoView {
    view! {
        <div
            id="jobResults"
            class="mt-6 border-t pt-4"
            class:hidden=move || state.job_skills.with(Option::is_none)
        >
            <h3 class="text-lg font-semibold text-gray-800 mb-3">"Required Skills"</h3>
            <div id="extractedSkills">
                {move || {
                    state
                        .job_skills
                        .get()
                        .map(|skills| view! { <SkillTags skills=skills tone=TagTone::Job /> })
                }}
            </div>
        </div>
    }
}
