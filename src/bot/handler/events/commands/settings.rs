use poise::CreateReply;
use serenity::all::CreateEmbed;

use crate::bot::handler::events::HandlerResult;
use crate::bot::handler::framework::Context;

/// Returns the current settings for this server
pub async fn settings(ctx: Context<'_>) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("this command can only be used in a server"))?;

        let settings = data.guilds.guild(guild_id).await;

        let channels = settings
            .channels_whitelist
            .iter()
            .map(|channel_id| format!("<#{channel_id}>"))
            .collect::<Vec<_>>();

        let embed = CreateEmbed::default()
            .color(0x77DD77)
            .title("AI User Settings")
            .field("Model", settings.model.clone(), true)
            .field(
                "Reply Percent",
                format!("{:.2}%", settings.reply_percent * 100.0),
                true,
            )
            .field(
                "Public Forget Command",
                settings.public_forget.to_string(),
                true,
            )
            .field(
                "Whitelisted Channels",
                match channels.is_empty() {
                    true => "None".to_string(),
                    false => channels.join(" "),
                },
                false,
            );

        let regex_embed = CreateEmbed::default()
            .color(0x77DD77)
            .title("AI User Regex Settings")
            .field(
                "Block list",
                format!("`{:?}`", shown_patterns(&settings.blocklist_regexes)),
                true,
            )
            .field(
                "Remove list",
                format!("`{:?}`", shown_patterns(&settings.removelist_regexes)),
                true,
            )
            .field("Ignore Regex", format!("`{:?}`", settings.ignore_regex), true);

        ctx.send(CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        ctx.send(CreateReply::default().embed(regex_embed).ephemeral(true))
            .await?;

        Ok(())
    }
    .await;

    match result {
        Ok(_) => HandlerResult::ok(()),
        Err(why) => HandlerResult::err(why, ctx),
    }
}

/// Caps the rendered pattern list at roughly one embed field's worth.
fn shown_patterns(patterns: &[String]) -> Vec<String> {
    let mut total_length = 0;
    let mut shown = Vec::new();

    for pattern in patterns {
        if total_length + pattern.len() > 1000 {
            shown.push("More regexes not shown...".to_string());
            break;
        }

        total_length += pattern.len();
        shown.push(pattern.clone());
    }

    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lists_are_shown_whole() {
        let patterns = vec!["^foo$".to_string(), "bar+".to_string()];

        assert_eq!(shown_patterns(&patterns), patterns);
    }

    #[test]
    fn long_lists_are_truncated() {
        let patterns = vec!["a".repeat(600), "b".repeat(600), "c".repeat(10)];

        let shown = shown_patterns(&patterns);

        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0], "a".repeat(600));
        assert_eq!(shown[1], "More regexes not shown...");
    }
}
