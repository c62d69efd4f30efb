mod capture_orchestrator;
mod selection_session;

pub use capture_orchestrator::{CaptureOrchestrator, CaptureOutcome, CaptureRequest};
pub use selection_session::SelectionSession;
