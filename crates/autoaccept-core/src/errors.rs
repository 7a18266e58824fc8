use crate::template::TemplateError;

/// Core error type for the bot.
///
/// Adapter crates map their client errors into this type. Configuration
/// variants are fatal at startup; `Platform` and `Delivery` only ever describe
/// a single event and are contained by the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid {var}: {source}")]
    Template {
        var: &'static str,
        #[source]
        source: TemplateError,
    },

    #[error("platform action failed: {0}")]
    Platform(String),

    #[error("delivery failed: {0}")]
    Delivery(String),
}

pub type Result<T> = std::result::Result<T, Error>;
