use leptos::prelude::*;
use tracing::warn;

use crate::dom::ControllerContext;

#[component]
pub fn DownloadButton() -> impl IntoView {
    let controller = use_context::<ControllerContext>();

    let on_click = move |_| match controller {
        Some(ctx) => ctx.get().download(),
        None => warn!("Download button mounted without a controller"),
    };

    view! {
        <button
            id="downloadBtn"
            type="button"
            class="px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700"
            on:click=on_click
        >
            <i class="fas fa-download mr-2"></i>
            "Download Results"
        </button>
    }
}
