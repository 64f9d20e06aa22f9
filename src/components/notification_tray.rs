use leptos::prelude::*;

use crate::dom::SignalView;
use crate::notify::Notice;

/// Stacked toasts in the top-right corner. Each one is removed by the timer
/// `SignalView::notify` schedules.
#[component]
pub fn NotificationTray(state: SignalView) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            <For
                each=move || state.notices.with(|stack| stack.notices().to_vec())
                key=|notice: &Notice| notice.id
                children=move |notice: Notice| {
                    view! {
                        <div class=notice.kind.container_class() role="status">
                            <div class="flex items-center">
                                <i class=notice.kind.icon_class()></i>
                                <span>{notice.message}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
