//! Telegram adapter (teloxide).
//!
//! This crate implements the `autoaccept-core` PlatformPort over the Telegram
//! Bot API and wires update handlers into a teloxide dispatcher.

use async_trait::async_trait;

use teloxide::{prelude::*, types::ParseMode};

pub mod convert;
pub mod handlers;
pub mod router;

#[cfg(test)]
mod test_support;

use autoaccept_core::{
    domain::{ChatId, JoinRequestId, UserId},
    errors::Error,
    messaging::{port::PlatformPort, types::TextFormat},
    Result,
};

#[derive(Clone)]
pub struct TelegramPlatform {
    bot: Bot,
}

impl TelegramPlatform {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_user(user_id: UserId) -> teloxide::types::UserId {
        teloxide::types::UserId(user_id.0 as u64)
    }
}

#[async_trait]
impl PlatformPort for TelegramPlatform {
    async fn approve_join_request(&self, request: JoinRequestId) -> Result<()> {
        self.bot
            .approve_chat_join_request(
                Self::tg_chat(request.chat_id),
                Self::tg_user(request.user_id),
            )
            .await
            .map_err(|e| Error::Platform(format!("telegram error: {e}")))?;
        Ok(())
    }

    async fn send_message(&self, chat_id: ChatId, text: &str, format: TextFormat) -> Result<()> {
        let parse_mode = match format {
            TextFormat::Html => ParseMode::Html,
        };
        self.bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .parse_mode(parse_mode)
            .await
            .map_err(|e| Error::Delivery(format!("telegram error: {e}")))?;
        Ok(())
    }
}
