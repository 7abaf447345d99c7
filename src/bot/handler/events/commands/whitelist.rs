use poise::CreateReply;
use serenity::all::{ChannelId, CreateEmbed};

use crate::bot::handler::events::HandlerResult;
use crate::bot::handler::framework::Context;

/// Adds a channel to the whitelist
pub async fn add(ctx: Context<'_>, channel: ChannelId) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("this command can only be used in a server"))?;

        let mut whitelist = data.guilds.guild(guild_id).await.channels_whitelist;

        if !add_channel(&mut whitelist, channel) {
            ctx.send(
                CreateReply::default()
                    .content("Channel already in whitelist")
                    .ephemeral(true),
            )
            .await?;

            return Ok(());
        }

        let settings = data
            .guilds
            .update(guild_id, |settings| settings.channels_whitelist = whitelist)
            .await?;

        ctx.send(
            CreateReply::default()
                .embed(whitelist_embed(&settings.channels_whitelist))
                .ephemeral(true),
        )
        .await?;

        Ok(())
    }
    .await;

    match result {
        Ok(_) => HandlerResult::ok(()),
        Err(why) => HandlerResult::err(why, ctx),
    }
}

/// Removes a channel from the whitelist
pub async fn remove(ctx: Context<'_>, channel: ChannelId) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("this command can only be used in a server"))?;

        let mut whitelist = data.guilds.guild(guild_id).await.channels_whitelist;

        if !remove_channel(&mut whitelist, channel) {
            ctx.send(
                CreateReply::default()
                    .content("Channel not in whitelist")
                    .ephemeral(true),
            )
            .await?;

            return Ok(());
        }

        let settings = data
            .guilds
            .update(guild_id, |settings| settings.channels_whitelist = whitelist)
            .await?;

        ctx.send(
            CreateReply::default()
                .embed(whitelist_embed(&settings.channels_whitelist))
                .ephemeral(true),
        )
        .await?;

        Ok(())
    }
    .await;

    match result {
        Ok(_) => HandlerResult::ok(()),
        Err(why) => HandlerResult::err(why, ctx),
    }
}

/// Appends the channel unless it is already listed. `false` means the
/// whitelist was left untouched.
fn add_channel(whitelist: &mut Vec<ChannelId>, channel: ChannelId) -> bool {
    if whitelist.contains(&channel) {
        return false;
    }

    whitelist.push(channel);
    true
}

/// Drops the channel if it is listed. `false` means it was never there.
fn remove_channel(whitelist: &mut Vec<ChannelId>, channel: ChannelId) -> bool {
    let before = whitelist.len();
    whitelist.retain(|id| *id != channel);

    before != whitelist.len()
}

fn whitelist_embed(whitelist: &[ChannelId]) -> CreateEmbed {
    let channels = whitelist
        .iter()
        .map(|channel_id| format!("<#{channel_id}>"))
        .collect::<Vec<_>>();

    CreateEmbed::default()
        .color(0x77DD77)
        .title("The server whitelist is now:")
        .description(match channels.is_empty() {
            true => "None".to_string(),
            false => channels.join("\n"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicates() {
        let mut whitelist = vec![ChannelId::new(1)];

        assert!(!add_channel(&mut whitelist, ChannelId::new(1)));
        assert_eq!(whitelist, vec![ChannelId::new(1)]);

        assert!(add_channel(&mut whitelist, ChannelId::new(2)));
        assert_eq!(whitelist, vec![ChannelId::new(1), ChannelId::new(2)]);
    }

    #[test]
    fn remove_requires_membership() {
        let mut whitelist = vec![ChannelId::new(1)];

        assert!(!remove_channel(&mut whitelist, ChannelId::new(2)));
        assert_eq!(whitelist, vec![ChannelId::new(1)]);

        assert!(remove_channel(&mut whitelist, ChannelId::new(1)));
        assert!(whitelist.is_empty());

        assert!(!remove_channel(&mut whitelist, ChannelId::new(1)));
    }
}
