//! Reply decoration.

use signal_client::RichText;

/// Prefix every reply with `(((`**bot**`)))` so it reads as coming from the bot.
pub fn decorate(payload: &str) -> RichText {
    RichText::new()
        .text("(((")
        .bold("bot")
        .text(")))")
        .text(format!(" {}", payload))
}
