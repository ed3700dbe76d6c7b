//! The Parley chat pipeline.
//!
//! Each user message goes through the same steps:
//!
//! 1. **Process** the raw text (normalize, annotate, classify)
//! 2. **Look up** a reference for the corrected text
//! 3. **Read** the windowed conversation history
//! 4. **Compose** the prompt and send it to the configured provider
//! 5. **Clean** the generated text and store the exchange
//!
//! A generation failure skips step 5's store and answers with a fixed
//! fallback reply instead.

pub mod composer;
pub mod service;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use composer::{SYSTEM_PROMPT, compose, postprocess};
pub use service::{ChatError, ChatReply, ChatService, FALLBACK_REPLY, GenerationSettings};
