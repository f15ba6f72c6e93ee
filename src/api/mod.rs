//! Remote API clients
//!
//! Thin clients for the two external collaborators: speech-to-text and
//! chat completion. Both sit behind traits so the pipeline can be exercised
//! with local backends in tests.

mod completion;
mod error;
mod transcription;

pub use completion::{ChatCompletion, CompletionRequest, RemoteCompletion};
pub use error::ApiError;
pub use transcription::{RemoteTranscriber, Transcriber};
