//! ConversationStore trait: the only shared mutable state in the system.
//!
//! A store maps conversation identifiers to append-only turn histories.
//! It exposes exactly two operations: a bounded windowed read and an atomic
//! two-turn append.

use async_trait::async_trait;
use crate::message::{ConversationId, Turn};

/// How many of the most recent turns a windowed read returns by default.
pub const DEFAULT_MAX_CONTEXT_LENGTH: usize = 10;

/// The core ConversationStore trait.
///
/// Implementations must serialize appends to the same conversation, let
/// unrelated conversations proceed concurrently, and never expose a
/// half-appended exchange to readers.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// The store name (e.g., "in_memory").
    fn name(&self) -> &str;

    /// The most recent turns of a conversation, oldest first.
    ///
    /// Unknown identifiers are not an error: they yield an empty window.
    async fn get_context(&self, id: &ConversationId) -> Vec<Turn>;

    /// Append a user turn followed by an assistant turn as one unit.
    ///
    /// When `id` is `None` a fresh identifier is generated. Returns the
    /// identifier the exchange was stored under.
    async fn append_exchange(
        &self,
        id: Option<ConversationId>,
        user_text: &str,
        assistant_text: &str,
    ) -> ConversationId;
}
