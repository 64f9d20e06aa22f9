use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::ClientConfig;
use crate::pages::matcher::MatcherPage;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    view! {
        <Router>
            <main class="min-h-screen bg-gray-50">
                <Routes fallback=|| view! { <p class="p-8 text-center text-gray-500">"Page not found"</p> }>
                    <Route
                        path=path!("/")
                        view=move || view! { <MatcherPage config=config.clone() /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
