use poise::CreateReply;

use crate::bot::handler::events::HandlerResult;
use crate::bot::handler::framework::Context;

/// Forces the bot to forget the conversation up to this point
pub async fn forget(ctx: Context<'_>) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("this command can only be used in a server"))?;

        data.forget_after
            .write()
            .await
            .insert(guild_id, chrono::Utc::now());

        log::info!("forgetting conversation history for guild {guild_id}");

        ctx.send(
            CreateReply::default()
                .content("Forgot the conversation up to this point")
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

/// Toggles whether everyone on the server may use the forget command
pub async fn public_forget(ctx: Context<'_>, enabled: bool) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("this command can only be used in a server"))?;

        data.guilds
            .update(guild_id, |settings| settings.public_forget = enabled)
            .await?;

        let content = match enabled {
            true => "The forget command is now usable by everyone",
            false => "The forget command is now restricted",
        };

        ctx.send(CreateReply::default().content(content).ephemeral(true))
            .await?;

        Ok(())
    }
    .await;

    match result {
        Ok(_) => HandlerResult::ok(()),
        Err(why) => HandlerResult::err(why, ctx),
    }
}
