use leptos::prelude::*;

/// Colour scheme for a skill tag, by the section it appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTone {
    Resume,
    Job,
    Matched,
    Missing,
}

impl TagTone {
    fn class(self) -> &'static str {
        match self {
            TagTone::Resume => "px-2 py-1 bg-blue-100 text-blue-800 rounded-full text-sm",
            TagTone::Job => "px-2 py-1 bg-green-100 text-green-800 rounded-full text-sm",
            TagTone::Matched => "px-2 py-1 bg-green-100 text-green-700 rounded text-xs",
            TagTone::Missing => "px-2 py-1 bg-red-100 text-red-700 rounded text-xs",
        }
    }
}

#[component]
pub fn SkillTag(#[prop(into)] skill: String, tone: TagTone) -> impl IntoView {
    view! { <span class=tone.class()>{skill}</span> }
}

/// A wrapped row of tags.
#[component]
pub fn SkillTags(
    skills: Vec<String>,
    tone: TagTone,
    #[prop(default = "flex flex-wrap gap-2")] layout: &'static str,
) -> impl IntoView {
    view! {
        <div class=layout>
            {skills
                .into_iter()
                .map(|skill| view! { <SkillTag skill=skill tone=tone /> })
                .collect_view()}
        </div>
    }
}
