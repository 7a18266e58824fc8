/// How outgoing text should be interpreted by the platform.
///
/// Every message the bot sends is Telegram HTML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextFormat {
    #[default]
    Html,
}
