pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod logging;
pub mod models;
pub mod notify;
pub mod pages;
pub mod render;
pub mod view;

pub use api::{HttpApi, MatchApi, ResumeUpload, SelectedFile};
pub use controller::MatchController;
pub use error::{ApiError, ConfigError};
pub use view::MatchView;
