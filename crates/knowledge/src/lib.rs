//! Reference lookup for Parley.
//!
//! A [`KnowledgeSource`](parley_core::KnowledgeSource) answers a query with a
//! short summary; the [`ReferenceRetriever`] wraps one and turns every
//! failure into "no reference".

pub mod noop;
pub mod retriever;
pub mod wikipedia;

pub use noop::NoopKnowledge;
pub use retriever::ReferenceRetriever;
pub use wikipedia::WikipediaSource;
