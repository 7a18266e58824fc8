use std::sync::Arc;

use teloxide::{
    dispatching::{DefaultKey, Dispatcher, UpdateHandler},
    dptree,
    error_handlers::LoggingErrorHandler,
    prelude::*,
    types::AllowedUpdate,
    update_listeners::{webhooks, Polling},
    RequestError,
};

use autoaccept_core::{
    config::{Config, Transport, WebhookConfig},
    messaging::port::PlatformPort,
    notify::Notifier,
};

use crate::handlers;
use crate::TelegramPlatform;

/// Shared, immutable state handed to every handler.
pub struct AppState {
    pub notifier: Arc<Notifier>,
    pub platform: Arc<dyn PlatformPort>,
}

impl AppState {
    pub fn new(cfg: &Config, platform: Arc<dyn PlatformPort>) -> Self {
        Self {
            notifier: Arc::new(Notifier::new(platform.clone(), cfg.templates.clone())),
            platform,
        }
    }
}

/// Update kinds the bot subscribes to. Telegram only sends `chat_member`
/// updates when they are requested explicitly.
pub fn allowed_updates() -> Vec<AllowedUpdate> {
    vec![
        AllowedUpdate::Message,
        AllowedUpdate::ChatJoinRequest,
        AllowedUpdate::ChatMember,
    ]
}

pub fn schema() -> UpdateHandler<RequestError> {
    dptree::entry()
        .branch(Update::filter_chat_join_request().endpoint(handlers::handle_join_request))
        .branch(Update::filter_chat_member().endpoint(handlers::handle_chat_member))
        .branch(Update::filter_message().endpoint(handlers::handle_message))
}

/// Start the bot with the transport selected in `cfg`.
pub async fn run(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());
    let platform: Arc<dyn PlatformPort> = Arc::new(TelegramPlatform::new(bot.clone()));
    let state = Arc::new(AppState::new(&cfg, platform));

    let me = bot.get_me().await?;
    tracing::info!(
        transport = cfg.transport.name(),
        "@{} is starting; press Ctrl+C to stop",
        me.username()
    );

    match &cfg.transport {
        Transport::Polling => run_polling(bot, state).await,
        Transport::Webhook(webhook) => run_webhook(bot, state, webhook).await,
    }
}

/// Long-polling transport.
pub async fn run_polling(bot: Bot, state: Arc<AppState>) -> anyhow::Result<()> {
    // getUpdates is rejected while a webhook is registered.
    bot.delete_webhook().await?;

    let listener = Polling::builder(bot.clone())
        .allowed_updates(allowed_updates())
        .build();

    build_dispatcher(bot, state)
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("an error from the polling listener"),
        )
        .await;

    Ok(())
}

/// Webhook transport: Telegram pushes updates to `webhook.url`, served locally
/// on `webhook.listen_addr`.
pub async fn run_webhook(
    bot: Bot,
    state: Arc<AppState>,
    webhook: &WebhookConfig,
) -> anyhow::Result<()> {
    let url = webhook.url.clone();

    // Register the allowed update kinds first; the listener's own setWebhook
    // call leaves them untouched.
    bot.set_webhook(url.clone())
        .allowed_updates(allowed_updates())
        .await?;

    let mut options = webhooks::Options::new(webhook.listen_addr, url);
    if let Some(token) = &webhook.secret_token {
        options = options.secret_token(token.clone());
    }
    let listener = webhooks::axum(bot.clone(), options).await?;
    tracing::info!(listen_addr = %webhook.listen_addr, "webhook listener ready");

    build_dispatcher(bot, state)
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("an error from the webhook listener"),
        )
        .await;

    Ok(())
}

fn build_dispatcher(bot: Bot, state: Arc<AppState>) -> Dispatcher<Bot, RequestError, DefaultKey> {
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            tracing::trace!(update_id = ?upd.id, "ignoring unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{self as fixtures, FakePlatform};
    use autoaccept_core::domain::ChatId;
    use std::ops::ControlFlow;

    #[test]
    fn subscribes_to_member_updates() {
        let updates = allowed_updates();
        assert!(updates.contains(&AllowedUpdate::ChatMember));
        assert!(updates.contains(&AllowedUpdate::ChatJoinRequest));
        assert!(updates.contains(&AllowedUpdate::Message));
    }

    #[tokio::test]
    async fn schema_routes_join_request() {
        let platform = Arc::new(FakePlatform::default());
        let update = fixtures::update("chat_join_request", fixtures::join_request_json());

        let out = schema()
            .dispatch(dptree::deps![update, fixtures::state(&platform)])
            .await;

        assert!(matches!(out, ControlFlow::Break(Ok(()))));
        assert_eq!(platform.approvals().len(), 1);
        assert_eq!(platform.sends().len(), 1);
    }

    #[tokio::test]
    async fn schema_routes_chat_member() {
        let platform = Arc::new(FakePlatform::default());
        let update = fixtures::update(
            "chat_member",
            fixtures::member_update_json("restricted", "left"),
        );

        let out = schema()
            .dispatch(dptree::deps![update, fixtures::state(&platform)])
            .await;

        assert!(matches!(out, ControlFlow::Break(Ok(()))));
        assert!(platform.approvals().is_empty());
        assert_eq!(platform.sends(), vec![(ChatId(2), "Bye Bo".to_string())]);
    }
}
