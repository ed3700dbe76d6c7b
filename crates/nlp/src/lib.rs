//! Rule-based message analysis for Parley.
//!
//! Turns a raw utterance into a [`ProcessedMessage`](parley_core::ProcessedMessage):
//!
//! 1. **Normalize**: lowercase and expand chat shorthand (`u` → `you`)
//! 2. **Annotate**: tokenize + part-of-speech tag via a [`Tagger`](parley_core::Tagger),
//!    then fold the tags into entity spans and key phrases
//! 3. **Classify**: pick a single coarse intent from leading-word and keyword rules
//!
//! Everything except the tagger is a pure function of its input.

pub mod annotator;
pub mod intent;
pub mod normalizer;
pub mod processor;
pub mod tagger;

pub use annotator::{
    Annotation, Annotator, ENTITY_LABEL, TagScheme, extract_entities, extract_key_phrases,
};
pub use intent::classify;
pub use normalizer::normalize;
pub use processor::MessageProcessor;
pub use tagger::LexiconTagger;
