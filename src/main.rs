use leptos::prelude::*;
use tracing::{error, info};

use resume_matcher_ui::app::App;
use resume_matcher_ui::config::{ClientConfig, DEFAULT_LOG_FILTER};
use resume_matcher_ui::logging;

fn main() {
    let configured = ClientConfig::from_document();
    logging::init(
        configured
            .as_ref()
            .map(|c| c.log_filter.as_str())
            .unwrap_or(DEFAULT_LOG_FILTER),
    );

    let config = match configured {
        Ok(config) => config,
        Err(e) => {
            error!("Ignoring page configuration: {}", e);
            match ClientConfig::from_window_origin() {
                Ok(config) => config,
                Err(e) => {
                    error!("Cannot start: {}", e);
                    return;
                }
            }
        }
    };

    info!("Resume matcher using API at {}", config.api_base);
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
