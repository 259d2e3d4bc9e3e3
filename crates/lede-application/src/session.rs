//! Reading session use case.
//!
//! A reading session ties one extracted article to one conversation record.
//! Opening a session resumes the conversation for the same URL started on the
//! same local calendar day, otherwise starts a fresh one. Replies are staged:
//! nothing is appended to the log or persisted until the assistant call has
//! succeeded, so a failed call leaves no half-written exchange behind.

use std::sync::Arc;

use chrono::{Local, Utc};
use lede_core::article::Article;
use lede_core::assistant::{Assistant, SummaryKind};
use lede_core::conversation::{Conversation, ConversationMessage, ConversationRepository};
use lede_core::error::Result;
use uuid::Uuid;

/// What the user is asking for in this exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRequest {
    /// Prose summary of the article
    Summarize,
    /// Bulleted key points
    KeyPoints,
    /// Free-form question about the article
    Ask(String),
}

impl SessionRequest {
    /// The text recorded as the user's side of the exchange.
    pub fn user_prompt(&self) -> &str {
        match self {
            Self::Summarize => "Summarize this article",
            Self::KeyPoints => "Give me the key points",
            Self::Ask(question) => question,
        }
    }
}

/// An in-progress reading session for one article.
#[derive(Debug, Clone)]
pub struct ReadingSession {
    pub article: Article,
    pub conversation_id: String,
    pub started_at: String,
    pub messages: Vec<ConversationMessage>,
}

impl ReadingSession {
    /// Whether this session picked up an existing conversation.
    pub fn is_resumed(&self) -> bool {
        !self.messages.is_empty()
    }
}

/// Orchestrates reading sessions against the assistant service and the
/// conversation store.
pub struct SessionController {
    assistant: Arc<dyn Assistant>,
    repository: Arc<dyn ConversationRepository>,
}

impl SessionController {
    pub fn new(assistant: Arc<dyn Assistant>, repository: Arc<dyn ConversationRepository>) -> Self {
        Self {
            assistant,
            repository,
        }
    }

    /// Opens a session for an article, resuming today's conversation for the
    /// same URL when one exists.
    pub async fn open(&self, article: Article) -> Result<ReadingSession> {
        let store = self.repository.load().await?;
        let today = Local::now().date_naive();

        if let Some(existing) = store.find_resumable(&article.url, today) {
            tracing::debug!(
                conversation_id = %existing.id,
                url = %article.url,
                "Resuming today's conversation"
            );
            return Ok(ReadingSession {
                article,
                conversation_id: existing.id.clone(),
                started_at: existing.started_at.clone(),
                messages: existing.messages.clone(),
            });
        }

        Ok(ReadingSession {
            article,
            conversation_id: Uuid::new_v4().to_string(),
            started_at: Utc::now().to_rfc3339(),
            messages: Vec::new(),
        })
    }

    /// Runs one exchange: calls the assistant, then records and persists the
    /// user/assistant message pair.
    ///
    /// On failure the session and the store are untouched; the caller can
    /// re-dispatch the same request.
    pub async fn dispatch(
        &self,
        session: &mut ReadingSession,
        request: SessionRequest,
    ) -> Result<String> {
        let reply = match &request {
            SessionRequest::Summarize => {
                self.assistant
                    .summarize(&session.article, SummaryKind::Summary, &session.conversation_id)
                    .await?
            }
            SessionRequest::KeyPoints => {
                self.assistant
                    .summarize(
                        &session.article,
                        SummaryKind::KeyPoints,
                        &session.conversation_id,
                    )
                    .await?
            }
            SessionRequest::Ask(question) => {
                self.assistant
                    .ask(&session.article, question, &session.conversation_id)
                    .await?
            }
        };

        session
            .messages
            .push(ConversationMessage::user(request.user_prompt()));
        session.messages.push(ConversationMessage::assistant(&reply));

        self.persist(session).await?;
        Ok(reply)
    }

    /// Writes the session's conversation back to the store.
    async fn persist(&self, session: &ReadingSession) -> Result<()> {
        if session.messages.is_empty() {
            return Ok(());
        }

        let mut store = self.repository.load().await?;
        let mut conversation = Conversation::new(
            session.conversation_id.clone(),
            session.article.title.clone(),
            session.article.url.clone(),
            session.started_at.clone(),
        );
        conversation.set_messages(session.messages.clone());
        conversation.last_updated = Utc::now().to_rfc3339();

        store.upsert(conversation);
        self.repository.save(&store).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lede_core::conversation::ConversationStore;
    use lede_core::error::LedeError;
    use std::sync::Mutex;

    struct StubAssistant {
        reply: std::result::Result<String, u16>,
    }

    #[async_trait]
    impl Assistant for StubAssistant {
        async fn summarize(
            &self,
            _article: &Article,
            _kind: SummaryKind,
            _conversation_id: &str,
        ) -> Result<String> {
            self.reply
                .clone()
                .map_err(|status| LedeError::api(Some(status), "stubbed failure", true))
        }

        async fn ask(
            &self,
            _article: &Article,
            _question: &str,
            _conversation_id: &str,
        ) -> Result<String> {
            self.reply
                .clone()
                .map_err(|status| LedeError::api(Some(status), "stubbed failure", true))
        }
    }

    struct InMemoryRepository {
        store: Mutex<ConversationStore>,
    }

    impl InMemoryRepository {
        fn new() -> Self {
            Self {
                store: Mutex::new(ConversationStore::new()),
            }
        }

        fn snapshot(&self) -> ConversationStore {
            self.store.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ConversationRepository for InMemoryRepository {
        async fn load(&self) -> Result<ConversationStore> {
            Ok(self.store.lock().unwrap().clone())
        }

        async fn save(&self, store: &ConversationStore) -> Result<()> {
            *self.store.lock().unwrap() = store.clone();
            Ok(())
        }
    }

    fn article() -> Article {
        Article::new(
            "Rust in Production",
            "A long look at shipping Rust services.",
            "https://example.com/rust",
            "",
        )
    }

    fn controller(
        reply: std::result::Result<String, u16>,
    ) -> (SessionController, Arc<InMemoryRepository>) {
        let repository = Arc::new(InMemoryRepository::new());
        let controller = SessionController::new(
            Arc::new(StubAssistant { reply }),
            repository.clone(),
        );
        (controller, repository)
    }

    #[tokio::test]
    async fn open_starts_fresh_session_for_new_url() {
        let (controller, _repo) = controller(Ok("fine".to_string()));
        let session = controller.open(article()).await.unwrap();

        assert!(!session.is_resumed());
        assert!(session.messages.is_empty());
        assert!(!session.conversation_id.is_empty());
    }

    #[tokio::test]
    async fn successful_exchange_appends_pair_and_persists() {
        let (controller, repo) = controller(Ok("Three main points.".to_string()));
        let mut session = controller.open(article()).await.unwrap();

        let reply = controller
            .dispatch(&mut session, SessionRequest::Summarize)
            .await
            .unwrap();

        assert_eq!(reply, "Three main points.");
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].content, "Summarize this article");
        assert_eq!(session.messages[1].content, "Three main points.");

        let store = repo.snapshot();
        let saved = store.find_by_id(&session.conversation_id).unwrap();
        assert_eq!(saved.message_count, 2);
        assert_eq!(saved.first_question, "Summarize this article");
    }

    #[tokio::test]
    async fn failed_exchange_leaves_session_and_store_untouched() {
        let (controller, repo) = controller(Err(500));
        let mut session = controller.open(article()).await.unwrap();

        let err = controller
            .dispatch(&mut session, SessionRequest::Ask("Why?".to_string()))
            .await
            .unwrap_err();

        assert!(err.is_retryable());
        assert!(session.messages.is_empty());
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn same_day_same_url_session_is_resumed() {
        let (controller, _repo) = controller(Ok("noted".to_string()));

        let mut first = controller.open(article()).await.unwrap();
        controller
            .dispatch(&mut first, SessionRequest::Ask("What stack?".to_string()))
            .await
            .unwrap();

        let second = controller.open(article()).await.unwrap();
        assert!(second.is_resumed());
        assert_eq!(second.conversation_id, first.conversation_id);
        assert_eq!(second.messages.len(), 2);
    }

    #[tokio::test]
    async fn different_url_gets_a_new_conversation() {
        let (controller, _repo) = controller(Ok("noted".to_string()));

        let mut first = controller.open(article()).await.unwrap();
        controller
            .dispatch(&mut first, SessionRequest::KeyPoints)
            .await
            .unwrap();

        let other = Article::new(
            "Another Piece",
            "Different text entirely.",
            "https://example.com/other",
            "",
        );
        let second = controller.open(other).await.unwrap();

        assert!(!second.is_resumed());
        assert_ne!(second.conversation_id, first.conversation_id);
    }

    #[tokio::test]
    async fn follow_up_extends_the_same_record() {
        let (controller, repo) = controller(Ok("sure".to_string()));
        let mut session = controller.open(article()).await.unwrap();

        controller
            .dispatch(&mut session, SessionRequest::Summarize)
            .await
            .unwrap();
        controller
            .dispatch(&mut session, SessionRequest::Ask("Go deeper.".to_string()))
            .await
            .unwrap();

        let store = repo.snapshot();
        assert_eq!(store.len(), 1);
        let saved = store.find_by_id(&session.conversation_id).unwrap();
        assert_eq!(saved.message_count, 4);
        // First question reflects the earliest user message
        assert_eq!(saved.first_question, "Summarize this article");
    }
}
