use poise::CreateReply;
use serenity::all::CreateEmbed;

use crate::bot::handler::events::HandlerResult;
use crate::bot::handler::framework::Context;

/// Changes the chat completion model for this server
///
/// The model name is stored as-is; whether the completion endpoint accepts
/// it is between the operator and the endpoint.
pub async fn model(ctx: Context<'_>, model: String) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("this command can only be used in a server"))?;

        let model = model.trim().to_string();

        if model.is_empty() {
            ctx.send(
                CreateReply::default()
                    .content("Please provide a model name")
                    .ephemeral(true),
            )
            .await?;

            return Ok(());
        }

        data.guilds
            .update(guild_id, |settings| settings.model = model.clone())
            .await?;

        let embed = CreateEmbed::default()
            .color(0x77DD77)
            .title("This server's chat model is now set to:")
            .description(model);

        ctx.send(CreateReply::default().embed(embed).ephemeral(true))
            .await?;

        Ok(())
    }
    .await;

    match result {
        Ok(_) => HandlerResult::ok(()),
        Err(why) => HandlerResult::err(why, ctx),
    }
}
