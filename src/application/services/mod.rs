mod transcription_dispatcher;
mod translation;

pub use transcription_dispatcher::{DispatchError, DispatchOutcome, TranscriptionDispatcher};
pub use translation::{attach_translation, translate_or_original};
