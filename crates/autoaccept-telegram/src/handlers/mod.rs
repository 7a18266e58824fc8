//! Telegram update handlers.
//!
//! Each handler converts the Telegram payload into core types and hands it to
//! the notifier. Handlers never fail: per-event errors are logged inside the
//! core and the dispatcher moves on to the next update.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{ChatJoinRequest, ChatMemberUpdated, Message},
};

use crate::router::AppState;

mod chat_member;
mod commands;
mod join_request;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    commands::handle_command(msg, state).await
}

pub async fn handle_join_request(
    req: ChatJoinRequest,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    join_request::handle_join_request(req, state).await
}

pub async fn handle_chat_member(
    update: ChatMemberUpdated,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    chat_member::handle_chat_member(update, state).await
}
