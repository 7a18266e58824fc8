use std::{env, fs, net::SocketAddr, path::Path};

use url::Url;

use crate::{
    errors::Error,
    logging::parse_log_level,
    notify::Templates,
    template::MessageTemplate,
    Result,
};

/// Value `BOT_TOKEN` defaults to when nobody set it.
pub const TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN_HERE";

pub const DEFAULT_WELCOME_MESSAGE: &str = "🎉 <b>Welcome, {first_name}!</b>\n\n\
Your request to join <b>{chat_title}</b> has been approved.\n\
We're glad to have you here! Feel free to explore and enjoy. 🚀";

pub const DEFAULT_FAREWELL_MESSAGE: &str = "👋 <b>{first_name}</b> has left <b>{chat_title}</b>.\n\
We'll miss you! Goodbye and take care. 💙";

const DEFAULT_WEBHOOK_LISTEN_ADDR: &str = "0.0.0.0:8443";

/// How updates reach the bot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transport {
    Polling,
    Webhook(WebhookConfig),
}

impl Transport {
    pub fn name(&self) -> &'static str {
        match self {
            Transport::Polling => "polling",
            Transport::Webhook(_) => "webhook",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookConfig {
    /// Public URL Telegram posts updates to.
    pub url: Url,
    /// Local address the webhook server binds.
    pub listen_addr: SocketAddr,
    pub secret_token: Option<String>,
}

/// Process-wide configuration, loaded once at startup and read-only afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    pub templates: Templates,
    pub log_level: tracing::Level,
    pub transport: Transport,
}

impl Config {
    /// Load from the process environment, with `.env` filling in unset keys.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(env_str)
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("BOT_TOKEN")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| TOKEN_PLACEHOLDER.to_string());
        if bot_token.is_empty() || bot_token == TOKEN_PLACEHOLDER {
            return Err(Error::Config(
                "bot token not set: set the BOT_TOKEN environment variable (or put it in .env)"
                    .to_string(),
            ));
        }

        let welcome = parse_template(
            "WELCOME_MESSAGE",
            lookup("WELCOME_MESSAGE").unwrap_or_else(|| DEFAULT_WELCOME_MESSAGE.to_string()),
        )?;
        let farewell = parse_template(
            "FAREWELL_MESSAGE",
            lookup("FAREWELL_MESSAGE").unwrap_or_else(|| DEFAULT_FAREWELL_MESSAGE.to_string()),
        )?;

        let log_level = parse_log_level(&lookup("LOG_LEVEL").unwrap_or_else(|| "INFO".to_string()));

        let transport = match lookup("TRANSPORT")
            .map(|s| s.trim().to_lowercase())
            .as_deref()
        {
            None | Some("") | Some("polling") => Transport::Polling,
            Some("webhook") => Transport::Webhook(webhook_config(&lookup)?),
            Some(other) => {
                return Err(Error::Config(format!(
                    "TRANSPORT must be `polling` or `webhook`, got `{other}`"
                )))
            }
        };

        Ok(Self {
            bot_token,
            templates: Templates { welcome, farewell },
            log_level,
            transport,
        })
    }
}

fn parse_template(var: &'static str, raw: String) -> Result<MessageTemplate> {
    if raw.trim().is_empty() {
        return Err(Error::Config(format!("{var} must not be empty")));
    }
    MessageTemplate::parse(&raw).map_err(|source| Error::Template { var, source })
}

fn webhook_config(lookup: &impl Fn(&str) -> Option<String>) -> Result<WebhookConfig> {
    let raw_url = lookup("WEBHOOK_URL")
        .and_then(non_empty)
        .ok_or_else(|| {
            Error::Config("WEBHOOK_URL is required when TRANSPORT=webhook".to_string())
        })?;
    let url = Url::parse(raw_url.trim())
        .map_err(|e| Error::Config(format!("WEBHOOK_URL `{raw_url}` is invalid: {e}")))?;
    if !matches!(url.scheme(), "https" | "http") {
        return Err(Error::Config(format!(
            "WEBHOOK_URL must be an http(s) URL, got `{raw_url}`"
        )));
    }

    let raw_addr = lookup("WEBHOOK_LISTEN_ADDR")
        .and_then(non_empty)
        .unwrap_or_else(|| DEFAULT_WEBHOOK_LISTEN_ADDR.to_string());
    let listen_addr = raw_addr.trim().parse::<SocketAddr>().map_err(|e| {
        Error::Config(format!("WEBHOOK_LISTEN_ADDR `{raw_addr}` is invalid: {e}"))
    })?;

    let secret_token = lookup("WEBHOOK_SECRET_TOKEN").and_then(non_empty);

    Ok(WebhookConfig {
        url,
        listen_addr,
        secret_token,
    })
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim().trim_start_matches("export ").trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
