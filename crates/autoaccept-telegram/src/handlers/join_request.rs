use std::sync::Arc;

use teloxide::{prelude::*, types::ChatJoinRequest};

use crate::{convert, router::AppState};

pub async fn handle_join_request(req: ChatJoinRequest, state: Arc<AppState>) -> ResponseResult<()> {
    let request = convert::join_request(&req);
    let outcome = state.notifier.approve_and_welcome(&request).await;
    tracing::debug!(
        user_id = request.from.id.0,
        chat_id = request.chat.id.0,
        approved = outcome.is_approved(),
        "join request handled"
    );
    Ok(())
}
