use std::sync::Arc;

use teloxide::{prelude::*, types::ChatMemberUpdated};

use crate::{convert, router::AppState};

pub async fn handle_chat_member(
    update: ChatMemberUpdated,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let update = convert::membership_update(&update);
    let outcome = state.notifier.notify_departure(&update).await;
    tracing::debug!(
        user_id = update.user.id.0,
        chat_id = update.chat.id.0,
        outcome = ?outcome,
        "membership update handled"
    );
    Ok(())
}
