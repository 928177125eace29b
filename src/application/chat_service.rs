// Chat service - Conversation with the assistant backend
use crate::application::backend::{AssistantBackend, ClientError};
use crate::domain::chat::{ChatHistory, ChatMessage, ChatRole};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const CHAT_ERROR_TEXT: &str = "Error: could not reach the assistant";

pub struct ChatService {
    backend: Arc<dyn AssistantBackend>,
    history: Mutex<ChatHistory>,
}

impl ChatService {
    pub fn new(backend: Arc<dyn AssistantBackend>) -> Self {
        Self {
            backend,
            history: Mutex::new(ChatHistory::default()),
        }
    }

    /// Send `input` and record both sides of the exchange.
    ///
    /// Blank input is ignored: nothing is recorded and no request is made.
    /// Backend failures become an inline error message.
    pub async fn send(&self, input: &str) -> ChatHistory {
        let message = input.trim();
        if message.is_empty() {
            return self.history().await;
        }

        // lock is not held while the request is in flight
        self.history
            .lock()
            .await
            .push(ChatMessage::new(ChatRole::User, message));

        let answer = match self.backend.send_message(message).await {
            Ok(reply) => ChatMessage::new(ChatRole::Assistant, reply),
            Err(e) => {
                tracing::error!("Chat request failed: {}", e);
                ChatMessage::new(ChatRole::Error, CHAT_ERROR_TEXT)
            }
        };

        let mut history = self.history.lock().await;
        history.push(answer);
        history.clone()
    }

    pub async fn history(&self) -> ChatHistory {
        self.history.lock().await.clone()
    }

    pub async fn analysis(&self) -> Result<String, ClientError> {
        self.backend.fetch_analysis().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EchoBackend {
        calls: AtomicUsize,
        fail: bool,
    }

    impl EchoBackend {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait::async_trait]
    impl AssistantBackend for EchoBackend {
        async fn send_message(&self, message: &str) -> Result<String, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ClientError::Fetch {
                    endpoint: "/gemini-chat/".to_string(),
                    status: None,
                    reason: "connection refused".to_string(),
                });
            }
            Ok(format!("echo: {}", message))
        }

        async fn fetch_analysis(&self) -> Result<String, ClientError> {
            Ok("steady growth".to_string())
        }
    }

    #[tokio::test]
    async fn test_empty_input_is_ignored() {
        let backend = EchoBackend::new(false);
        let chat = ChatService::new(backend.clone());

        let history = chat.send("   ").await;

        assert!(history.is_empty());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_reply_is_recorded() {
        let chat = ChatService::new(EchoBackend::new(false));

        let history = chat.send(" what is rebalancing? ").await;

        let roles: Vec<ChatRole> = history.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant]);
        assert_eq!(history.messages()[0].text, "what is rebalancing?");
        assert_eq!(history.messages()[1].text, "echo: what is rebalancing?");
        assert_eq!(chat.history().await.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_becomes_inline_error() {
        let chat = ChatService::new(EchoBackend::new(true));

        let history = chat.send("hello").await;

        assert_eq!(history.len(), 2);
        assert_eq!(history.messages()[1].role, ChatRole::Error);
        assert_eq!(history.messages()[1].text, CHAT_ERROR_TEXT);
    }

    struct SlowBackend;

    #[async_trait::async_trait]
    impl AssistantBackend for SlowBackend {
        async fn send_message(&self, _message: &str) -> Result<String, ClientError> {
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            Ok("late".to_string())
        }

        async fn fetch_analysis(&self) -> Result<String, ClientError> {
            Ok(String::new())
        }
    }

    #[tokio::test]
    async fn test_history_readable_while_reply_pending() {
        let chat = Arc::new(ChatService::new(Arc::new(SlowBackend)));

        let sender = chat.clone();
        let pending = tokio::spawn(async move { sender.send("hi").await });
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let started = std::time::Instant::now();
        let history = chat.history().await;
        assert!(started.elapsed() < std::time::Duration::from_millis(500));
        assert_eq!(history.len(), 1);
        assert_eq!(history.messages()[0].role, ChatRole::User);

        // blank sends do not wait on the pending reply either
        let started = std::time::Instant::now();
        assert_eq!(chat.send("  ").await.len(), 1);
        assert!(started.elapsed() < std::time::Duration::from_millis(500));

        let done = pending.await.unwrap();
        assert_eq!(done.len(), 2);
        assert_eq!(done.messages()[1].text, "late");
    }

    #[tokio::test]
    async fn test_analysis_passes_through() {
        let chat = ChatService::new(EchoBackend::new(false));
        assert_eq!(chat.analysis().await.unwrap(), "steady growth");
    }
}
