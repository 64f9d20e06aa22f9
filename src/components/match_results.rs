use leptos::prelude::*;

use crate::components::download_button::DownloadButton;
use crate::components::skill_tag::{SkillTags, TagTone};
use crate::dom::SignalView;
use crate::render::{CandidateCard, MatchBoard, NO_CANDIDATES};

#[component]
pub fn MatchResults(state: SignalView) -> impl IntoView {
    view! {
        <section
            id="matchSection"
            class="bg-white rounded-lg shadow p-6"
            class:hidden=move || state.matches.with(Option::is_none)
        >
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold text-gray-800">"Candidate Matches"</h2>
                <DownloadButton />
            </div>
            <div id="matchResults">
                {move || state.matches.get().map(|board| view! { <MatchBoardView board=board /> })}
            </div>
        </section>
    }
}

#[component]
fn MatchBoardView(board: MatchBoard) -> impl IntoView {
    let body = if board.is_empty() {
        view! {
            <div class="text-center py-12">
                <i class="fas fa-users-slash text-6xl text-gray-300 mb-4"></i>
                <p class="text-gray-500">{NO_CANDIDATES}</p>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="space-y-4">
                {board
                    .cards
                    .into_iter()
                    .map(|card| view! { <CandidateCardView card=card /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="mb-6 p-4 bg-blue-50 rounded-lg">
            <h3 class="text-lg font-semibold text-blue-800">{board.heading}</h3>
            <p class="text-blue-600">{board.found}</p>
        </div>
        {body}
    }
}

#[component]
fn CandidateCardView(card: CandidateCard) -> impl IntoView {
    let overall_class = format!("text-2xl font-bold mb-1 {}", card.tier.text_class());

    view! {
        <div class="border border-gray-200 rounded-lg p-4 hover:shadow-md transition-shadow">
            <div class="flex justify-between items-start mb-3">
                <div>
                    <h4 class="text-lg font-semibold text-gray-800">{card.name}</h4>
                    <p class="text-gray-600">{card.email}</p>
                    <p class="text-sm text-gray-500">{card.location}</p>
                </div>
                <div class="text-right">
                    <div class=overall_class>{format!("{}%", card.overall)}</div>
                    <div class="text-sm text-gray-500">"Overall Match"</div>
                </div>
            </div>

            {card.explanation.map(|text| view! { <p class="text-sm text-gray-600 mb-3">{text}</p> })}

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-4">
                {card
                    .breakdown
                    .into_iter()
                    .map(|score| {
                        view! {
                            <div class="text-center">
                                <div class=format!(
                                    "text-lg font-semibold {}",
                                    score.text_class,
                                )>{format!("{}%", score.percent)}</div>
                                <div class="text-xs text-gray-500">{score.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="border-t pt-3">
                <div class="grid md:grid-cols-2 gap-4">
                    <div>
                        <h5 class="font-semibold text-green-700 mb-2">"Matched Skills:"</h5>
                        <SkillTags
                            skills=card.matched_skills
                            tone=TagTone::Matched
                            layout="flex flex-wrap gap-1"
                        />
                    </div>
                    <div>
                        <h5 class="font-semibold text-red-700 mb-2">"Missing Skills:"</h5>
                        <SkillTags
                            skills=card.missing_skills
                            tone=TagTone::Missing
                            layout="flex flex-wrap gap-1"
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
