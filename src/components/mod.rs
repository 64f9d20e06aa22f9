pub mod download_button;
pub mod job_form;
pub mod job_results;
pub mod loading_spinner;
pub mod match_results;
pub mod notification_tray;
pub mod resume_results;
pub mod resume_upload;
pub mod skill_tag;
