//! AI integration module
//!
//! Sends rendered prompts to an OpenAI-compatible chat completion API and
//! cleans up the returned PR description.

pub mod completion;
pub mod prompts;

pub use completion::{clean_response, CompletionClient};
