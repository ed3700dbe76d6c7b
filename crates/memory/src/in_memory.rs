//! In-memory conversation store with one lock per conversation.
//!
//! The outer map lock is held only long enough to find or insert a
//! conversation handle; the turn history itself sits behind its own lock, so
//! appends to different conversations never wait on each other.

use async_trait::async_trait;
use parley_core::conversation::{ConversationStore, DEFAULT_MAX_CONTEXT_LENGTH};
use parley_core::message::{Conversation, ConversationId, Turn};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

type ConversationHandle = Arc<RwLock<Conversation>>;

/// Keeps every conversation for the lifetime of the process. Nothing is
/// evicted and nothing survives a restart.
pub struct InMemoryConversationStore {
    conversations: RwLock<HashMap<ConversationId, ConversationHandle>>,
    max_context_length: usize,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::with_max_context_length(DEFAULT_MAX_CONTEXT_LENGTH)
    }

    /// A store whose windowed reads return at most `max_context_length` turns.
    pub fn with_max_context_length(max_context_length: usize) -> Self {
        Self {
            conversations: RwLock::new(HashMap::new()),
            max_context_length,
        }
    }

    async fn handle(&self, id: &ConversationId) -> Option<ConversationHandle> {
        self.conversations.read().await.get(id).cloned()
    }

    async fn handle_or_create(&self, id: &ConversationId) -> ConversationHandle {
        if let Some(handle) = self.handle(id).await {
            return handle;
        }

        let mut conversations = self.conversations.write().await;
        conversations
            .entry(id.clone())
            .or_insert_with(|| {
                debug!(conversation_id = %id, "Starting conversation");
                Arc::new(RwLock::new(Conversation::new(id.clone())))
            })
            .clone()
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    async fn get_context(&self, id: &ConversationId) -> Vec<Turn> {
        match self.handle(id).await {
            Some(handle) => handle.read().await.window(self.max_context_length).to_vec(),
            None => Vec::new(),
        }
    }

    async fn append_exchange(
        &self,
        id: Option<ConversationId>,
        user_text: &str,
        assistant_text: &str,
    ) -> ConversationId {
        let id = id.unwrap_or_default();
        let handle = self.handle_or_create(&id).await;

        let mut conversation = handle.write().await;
        conversation.push_exchange(user_text, assistant_text);
        debug!(conversation_id = %id, turns = conversation.turns.len(), "Appended exchange");

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::message::TurnRole;
    use std::collections::HashSet;

    #[tokio::test]
    async fn unknown_conversation_has_empty_context() {
        let store = InMemoryConversationStore::new();
        let context = store.get_context(&ConversationId::from("never-used")).await;
        assert!(context.is_empty());
    }

    #[tokio::test]
    async fn new_conversations_get_fresh_ids() {
        let store = InMemoryConversationStore::new();
        let mut seen = HashSet::new();
        for i in 0..100 {
            let id = store.append_exchange(None, &format!("q{i}"), "a").await;
            assert!(seen.insert(id), "identifier issued twice");
        }
    }

    #[tokio::test]
    async fn window_is_bounded_and_chronological() {
        for n in 0..=8usize {
            let store = InMemoryConversationStore::new();
            let mut id = None;
            for i in 0..n {
                id = Some(store.append_exchange(id, &format!("q{i}"), &format!("a{i}")).await);
            }

            let context = match &id {
                Some(id) => store.get_context(id).await,
                None => Vec::new(),
            };
            assert_eq!(context.len(), (2 * n).min(10));

            if n > 0 {
                let last = context.last().unwrap();
                assert_eq!(last.role, TurnRole::Assistant);
                assert_eq!(last.content, format!("a{}", n - 1));
                assert!(context.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
                // A window of 10 starts on a user turn because exchanges are pairs.
                assert_eq!(context[0].role, TurnRole::User);
            }
        }
    }

    #[tokio::test]
    async fn reading_does_not_mutate() {
        let store = InMemoryConversationStore::new();
        let id = store.append_exchange(None, "hi", "hello").await;
        let first = store.get_context(&id).await;
        let second = store.get_context(&id).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn supplied_unknown_id_is_adopted() {
        let store = InMemoryConversationStore::new();
        let given = ConversationId::from("client-chosen");
        let id = store.append_exchange(Some(given.clone()), "hi", "hello").await;
        assert_eq!(id, given);
        assert_eq!(store.get_context(&given).await.len(), 2);
    }

    #[tokio::test]
    async fn custom_window_size() {
        let store = InMemoryConversationStore::with_max_context_length(3);
        let mut id = None;
        for i in 0..5 {
            id = Some(store.append_exchange(id, &format!("q{i}"), &format!("a{i}")).await);
        }
        let context = store.get_context(&id.unwrap()).await;
        let contents: Vec<_> = context.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["a3", "q4", "a4"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_to_one_conversation_never_interleave() {
        let store = Arc::new(InMemoryConversationStore::with_max_context_length(usize::MAX));
        let id = store.append_exchange(None, "seed-q", "seed-a").await;

        let mut tasks = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            let id = id.clone();
            tasks.push(tokio::spawn(async move {
                store
                    .append_exchange(Some(id), &format!("q{i}"), &format!("a{i}"))
                    .await
            }));
        }

        // Readers racing the writers only ever see whole exchanges.
        for _ in 0..50 {
            let len = store.get_context(&id).await.len();
            assert_eq!(len % 2, 0);
            tokio::task::yield_now().await;
        }

        for task in tasks {
            assert_eq!(task.await.unwrap(), id);
        }

        let turns = store.get_context(&id).await;
        assert_eq!(turns.len(), 102);
        for pair in turns.chunks(2) {
            assert_eq!(pair[0].role, TurnRole::User);
            assert_eq!(pair[1].role, TurnRole::Assistant);
            assert_eq!(pair[0].content[1..], pair[1].content[1..]);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn unrelated_conversations_append_concurrently() {
        let store = Arc::new(InMemoryConversationStore::new());
        let mut tasks = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let mut id = None;
                for j in 0..3 {
                    id = Some(
                        store
                            .append_exchange(id, &format!("q{i}-{j}"), &format!("a{i}-{j}"))
                            .await,
                    );
                }
                id.unwrap()
            }));
        }

        let mut ids = HashSet::new();
        for task in tasks {
            let id = task.await.unwrap();
            assert_eq!(store.get_context(&id).await.len(), 6);
            ids.insert(id);
        }
        assert_eq!(ids.len(), 20);
    }
}
