// src/bot/commands.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Prices,
    Top5,
    Search10,
    Search100,
    Subscribe,
    Unsubscribe,
    /// A slash-command we don't know.
    Unknown(String),
}

impl Command {
    /// Parse the leading `/command` of a message.
    /// `None` means the text isn't a command at all (plain user input).
    /// Accepts `/cmd@SomeBot` and ignores anything after the first token.
    pub fn parse(text: &str) -> Option<Self> {
        let token = text.trim().split_whitespace().next()?;
        let body = token.strip_prefix('/')?;
        let name = body.split('@').next().unwrap_or(body);

        Some(match name {
            "start" => Command::Start,
            "help" => Command::Help,
            "prices" => Command::Prices,
            "top5" => Command::Top5,
            "search_10" => Command::Search10,
            "search_100" => Command::Search100,
            "subscribe" => Command::Subscribe,
            "unsubscribe" => Command::Unsubscribe,
            other => Command::Unknown(s!(other)),
        })
    }
}
