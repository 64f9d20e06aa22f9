use leptos::prelude::*;

use crate::dom::SignalView;

#[component]
pub fn LoadingSpinner(state: SignalView) -> impl IntoView {
    view! {
        <div
            id="loadingSpinner"
            class="fixed inset-0 bg-black bg-opacity-30 flex items-center justify-center z-40"
            class:hidden=move || !state.loading.get()
        >
            <div class="bg-white rounded-lg p-6 flex items-center space-x-3 shadow-lg">
                <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                <span class="text-gray-700">"Processing..."</span>
            </div>
        </div>
    }
}
