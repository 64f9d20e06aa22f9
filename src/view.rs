use crate::notify::NoticeKind;
use crate::render::{FileSummary, MatchBoard, ResumeSummary};

/// What the controller needs from the page.
///
/// Result sections start hidden; each `show_*` call reveals its section with
/// the new content. Implementations must not call back into the controller.
pub trait MatchView {
    fn set_loading(&self, visible: bool);

    fn show_selected_file(&self, file: FileSummary);

    fn show_resume(&self, summary: ResumeSummary);

    fn show_job_skills(&self, skills: Vec<String>);

    fn show_matches(&self, board: MatchBoard);

    fn notify(&self, kind: NoticeKind, message: String);

    /// Send the browser to `url`, leaving the page.
    fn navigate(&self, url: &str);
}
