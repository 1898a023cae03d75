use crate::app::mode::AppMode;
use crate::engine::ParseReport;
use crate::vocabulary::Vocabulary;

/// What the front end should draw after an event
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    /// Pipeline output for one description
    Report {
        source: String,
        report: ParseReport,
    },
    Vocabulary(&'static Vocabulary),
    Help,
    Notice(String),
    Error(String),
    /// Nothing to draw; `mode` tells the loop whether to continue
    Idle(AppMode),
}

impl RenderState {
    pub fn is_error(&self) -> bool {
        matches!(self, RenderState::Error(_))
    }
}
