//! Join-approval and departure notifications.
//!
//! Every operation here returns an outcome value instead of an error: a failed
//! platform call ends that one event and is logged, nothing more.

use std::sync::Arc;

use crate::{
    domain::{Chat, ChatId, JoinRequest, MembershipUpdate, User},
    errors::Error,
    messaging::{port::PlatformPort, types::TextFormat},
    template::MessageTemplate,
};

/// Welcome and farewell templates, validated at startup.
#[derive(Clone, Debug)]
pub struct Templates {
    pub welcome: MessageTemplate,
    pub farewell: MessageTemplate,
}

/// Result of a single direct-message attempt.
#[derive(Debug)]
pub enum Delivery {
    Sent,
    Failed(Error),
}

#[derive(Debug)]
pub enum JoinOutcome {
    /// Approved and the welcome message went out.
    Welcomed,
    /// Approved, but the welcome message could not be delivered.
    ApprovedWithoutWelcome(Error),
    /// Approval failed; nothing else was attempted.
    ApprovalFailed(Error),
}

impl JoinOutcome {
    pub fn is_approved(&self) -> bool {
        !matches!(self, JoinOutcome::ApprovalFailed(_))
    }
}

#[derive(Debug)]
pub enum DepartureOutcome {
    /// The transition was not a departure; no action taken.
    Ignored,
    FarewellSent,
    FarewellFailed(Error),
}

pub struct Notifier {
    platform: Arc<dyn PlatformPort>,
    templates: Templates,
}

impl Notifier {
    pub fn new(platform: Arc<dyn PlatformPort>, templates: Templates) -> Self {
        Self {
            platform,
            templates,
        }
    }

    /// Approve a join request, then DM the requester a welcome message.
    ///
    /// The welcome is only attempted once approval has succeeded.
    pub async fn approve_and_welcome(&self, request: &JoinRequest) -> JoinOutcome {
        let user = &request.from;
        let chat = &request.chat;

        if let Err(e) = self.platform.approve_join_request(request.id()).await {
            tracing::error!(
                user_id = user.id.0,
                chat_id = chat.id.0,
                error = %e,
                "failed to approve join request"
            );
            return JoinOutcome::ApprovalFailed(e);
        }
        tracing::info!(
            user_id = user.id.0,
            chat_id = chat.id.0,
            chat_title = chat.title.as_deref().unwrap_or_default(),
            "approved join request from {}",
            user.first_name
        );

        match self.deliver(&self.templates.welcome, user, chat, "welcome").await {
            Delivery::Sent => JoinOutcome::Welcomed,
            Delivery::Failed(e) => JoinOutcome::ApprovedWithoutWelcome(e),
        }
    }

    /// DM a farewell message if the update is a departure.
    pub async fn notify_departure(&self, update: &MembershipUpdate) -> DepartureOutcome {
        if !update.transition.is_departure() {
            tracing::debug!(
                user_id = update.user.id.0,
                chat_id = update.chat.id.0,
                prior = %update.transition.prior,
                new = %update.transition.new,
                "membership change is not a departure; ignoring"
            );
            return DepartureOutcome::Ignored;
        }

        match self
            .deliver(&self.templates.farewell, &update.user, &update.chat, "farewell")
            .await
        {
            Delivery::Sent => DepartureOutcome::FarewellSent,
            Delivery::Failed(e) => DepartureOutcome::FarewellFailed(e),
        }
    }

    /// Render `template` and send it to the user's private chat.
    pub async fn deliver(
        &self,
        template: &MessageTemplate,
        user: &User,
        chat: &Chat,
        kind: &str,
    ) -> Delivery {
        let text = template.render(user, chat);
        match self
            .platform
            .send_message(ChatId::from(user.id), &text, TextFormat::Html)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    user_id = user.id.0,
                    chat_id = chat.id.0,
                    "sent {kind} DM to {}",
                    user.first_name
                );
                Delivery::Sent
            }
            Err(e) => {
                // Users who blocked the bot or never started it end up here.
                tracing::warn!(
                    user_id = user.id.0,
                    chat_id = chat.id.0,
                    error = %e,
                    "could not send {kind} DM to {}",
                    user.first_name
                );
                Delivery::Failed(e)
            }
        }
    }
}
