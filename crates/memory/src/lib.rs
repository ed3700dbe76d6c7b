//! Conversation history storage for Parley.

pub mod in_memory;

pub use in_memory::InMemoryConversationStore;
