use async_trait::async_trait;

use crate::{
    domain::{ChatId, JoinRequestId},
    messaging::types::TextFormat,
    Result,
};

/// Outbound actions the bot performs against the messaging platform.
///
/// Telegram is the only implementation; tests substitute a recording fake.
/// Implementations must not retry: a failed call is reported once and the
/// caller decides what to do with it.
#[async_trait]
pub trait PlatformPort: Send + Sync {
    /// Approve a pending join request.
    async fn approve_join_request(&self, request: JoinRequestId) -> Result<()>;

    /// Send a message to a chat. Direct messages use the user's private chat id.
    async fn send_message(&self, chat_id: ChatId, text: &str, format: TextFormat) -> Result<()>;
}
