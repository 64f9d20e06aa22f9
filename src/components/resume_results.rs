use leptos::prelude::*;

use crate::components::skill_tag::{SkillTags, TagTone};
use crate::dom::SignalView;
use crate::render::ResumeSummary;

/// Parsed resume details; hidden until the first successful upload.
#[component]
pub fn ResumeResults(state: SignalView) -> impl IntoView {
    view! {
        <div
            id="resumeResults"
            class="mt-6 border-t pt-4"
            class:hidden=move || state.resume.with(Option::is_none)
        >
            <h3 class="text-lg font-semibold text-gray-800 mb-3">"Parsed Information"</h3>
            <div id="parsedInfo">
                {move || state.resume.get().map(|summary| view! { <ResumeDetails summary=summary /> })}
            </div>
        </div>
    }
}

#[component]
fn ResumeDetails(summary: ResumeSummary) -> impl IntoView {
    let education = (!summary.education.is_empty()).then(|| {
        view! {
            <div class="mt-4">
                <h4 class="font-semibold mb-2">"Education:"</h4>
                <ul class="list-disc list-inside text-sm text-gray-700">
                    {summary
                        .education
                        .into_iter()
                        .map(|entry| view! { <li>{entry}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    view! {
        <div class="space-y-3">
            <ContactRow icon="fas fa-envelope text-blue-500" label="Email:" value=summary.email />
            <ContactRow icon="fas fa-phone text-green-500" label="Phone:" value=summary.phone />
            <ContactRow
                icon="fas fa-map-marker-alt text-red-500"
                label="Location:"
                value=summary.location
            />
            <ContactRow
                icon="fas fa-calendar text-purple-500"
                label="Experience:"
                value=summary.experience
            />
        </div>

        <div class="mt-4">
            <h4 class="font-semibold mb-2">"Extracted Skills:"</h4>
            <SkillTags skills=summary.skills tone=TagTone::Resume />
        </div>

        {education}
    }
}

#[component]
fn ContactRow(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <i class=icon></i>
            <span>
                <strong>{label}</strong>
                " "
                {value}
            </span>
        </div>
    }
}
