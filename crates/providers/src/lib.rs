//! Text-generation provider implementations for Parley.
//!
//! All providers implement the `parley_core::Provider` trait.
//! [`build_from_config`] picks the one named in configuration.

mod http;
pub mod ollama;
pub mod openai_compat;
pub mod router;

pub use ollama::OllamaProvider;
pub use openai_compat::OpenAiCompatProvider;
pub use router::build_from_config;
