//! Text commands the bot answers.

/// Reply to `/start`, in Telegram HTML.
pub const START_GREETING: &str = "👋 <b>Hello!</b>\n\n\
I automatically approve join requests and send welcome / farewell messages.\n\
Add me as an <b>admin</b> in your channel or group to get started!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotCommand {
    Start,
}

impl BotCommand {
    pub fn reply(self) -> &'static str {
        match self {
            BotCommand::Start => START_GREETING,
        }
    }
}

/// Split `/cmd@botname args` into a lowercase command name and the rest.
pub fn split_command(text: &str) -> Option<(String, String)> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }

    let mut parts = text.splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    Some((cmd, rest))
}

/// Recognize a command the bot handles. Anything else is ignored.
pub fn parse_command(text: &str) -> Option<BotCommand> {
    let (cmd, _args) = split_command(text)?;
    match cmd.as_str() {
        "start" => Some(BotCommand::Start),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_variants() {
        assert_eq!(parse_command("/start"), Some(BotCommand::Start));
        assert_eq!(parse_command("  /START  "), Some(BotCommand::Start));
        assert_eq!(parse_command("/start@auto_accept_bot"), Some(BotCommand::Start));
        assert_eq!(parse_command("/start deep-link-payload"), Some(BotCommand::Start));
    }

    #[test]
    fn ignores_other_text() {
        assert_eq!(parse_command("start"), None);
        assert_eq!(parse_command("/help"), None);
        assert_eq!(parse_command("/starting"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn splits_args() {
        assert_eq!(
            split_command("/Start@bot  a b"),
            Some(("start".to_string(), "a b".to_string()))
        );
    }

    #[test]
    fn greeting_is_html() {
        assert!(BotCommand::Start.reply().contains("<b>admin</b>"));
    }
}
