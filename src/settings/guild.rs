use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serenity::all::ChannelId;

/// Per-guild settings, everything a server owner can tweak about the bot.
///
/// A guild that was never configured gets the defaults below. `parameters`
/// is an opaque JSON object forwarded verbatim to the completion endpoint,
/// `None` meaning "endpoint defaults".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GuildSettings {
    pub model: String,
    pub reply_percent: f64,
    pub channels_whitelist: Vec<ChannelId>,
    pub removelist_regexes: Vec<String>,
    pub blocklist_regexes: Vec<String>,
    pub ignore_regex: Option<String>,
    pub public_forget: bool,
    pub parameters: Option<Map<String, Value>>,
}

impl Default for GuildSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            reply_percent: 0.5,
            channels_whitelist: Vec::new(),
            removelist_regexes: Vec::new(),
            blocklist_regexes: Vec::new(),
            ignore_regex: None,
            public_forget: false,
            parameters: None,
        }
    }
}
