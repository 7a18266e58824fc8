use std::sync::Arc;

use teloxide::prelude::*;

use autoaccept_core::{
    commands::parse_command,
    domain::ChatId,
    messaging::{port::PlatformPort, types::TextFormat},
};

use crate::router::AppState;

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(cmd) = msg.text().and_then(parse_command) else {
        return Ok(());
    };

    let chat_id = ChatId(msg.chat.id.0);
    if let Err(e) = state
        .platform
        .send_message(chat_id, cmd.reply(), TextFormat::Html)
        .await
    {
        tracing::warn!(chat_id = chat_id.0, error = %e, "failed to answer {cmd:?}");
    }
    Ok(())
}
