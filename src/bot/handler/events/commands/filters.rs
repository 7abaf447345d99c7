use poise::CreateReply;

use crate::bot::handler::events::HandlerResult;
use crate::bot::handler::framework::Context;
use crate::settings::GuildSettings;

/// Which of the two pattern lists a sub-command mutates.
#[derive(Debug, Clone, Copy)]
pub enum FilterList {
    /// Responses matching any of these are dropped entirely.
    Block,
    /// Matches of these are stripped out of responses.
    Remove,
}

impl FilterList {
    fn name(self) -> &'static str {
        match self {
            Self::Block => "block list",
            Self::Remove => "remove list",
        }
    }

    fn of(self, settings: &GuildSettings) -> &[String] {
        match self {
            Self::Block => &settings.blocklist_regexes,
            Self::Remove => &settings.removelist_regexes,
        }
    }

    fn of_mut(self, settings: &mut GuildSettings) -> &mut Vec<String> {
        match self {
            Self::Block => &mut settings.blocklist_regexes,
            Self::Remove => &mut settings.removelist_regexes,
        }
    }
}

/// Adds a pattern to one of the regex filter lists
pub async fn add(ctx: Context<'_>, list: FilterList, pattern: String) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("this command can only be used in a server"))?;

        if let Err(why) = validate_pattern(&pattern) {
            ctx.send(
                CreateReply::default()
                    .content(format!("Invalid regex pattern: {why}"))
                    .ephemeral(true),
            )
            .await?;

            return Ok(());
        }

        let settings = data.guilds.guild(guild_id).await;

        if list.of(&settings).contains(&pattern) {
            ctx.send(
                CreateReply::default()
                    .content(format!("Pattern already in the {}", list.name()))
                    .ephemeral(true),
            )
            .await?;

            return Ok(());
        }

        data.guilds
            .update(guild_id, |settings| {
                list.of_mut(settings).push(pattern.clone())
            })
            .await?;

        ctx.send(
            CreateReply::default()
                .content(format!("Added `{pattern}` to the {}", list.name()))
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

/// Removes a pattern from one of the regex filter lists
pub async fn remove(ctx: Context<'_>, list: FilterList, pattern: String) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("this command can only be used in a server"))?;

        let settings = data.guilds.guild(guild_id).await;

        if !list.of(&settings).contains(&pattern) {
            ctx.send(
                CreateReply::default()
                    .content(format!("Pattern not in the {}", list.name()))
                    .ephemeral(true),
            )
            .await?;

            return Ok(());
        }

        data.guilds
            .update(guild_id, |settings| {
                list.of_mut(settings).retain(|existing| *existing != pattern);
            })
            .await?;

        ctx.send(
            CreateReply::default()
                .content(format!("Removed `{pattern}` from the {}", list.name()))
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

/// Sets or clears the regex that makes the bot ignore matching messages
pub async fn ignore(ctx: Context<'_>, pattern: Option<String>) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("this command can only be used in a server"))?;

        if let Some(ref pattern) = pattern {
            if let Err(why) = validate_pattern(pattern) {
                ctx.send(
                    CreateReply::default()
                        .content(format!("Invalid regex pattern: {why}"))
                        .ephemeral(true),
                )
                .await?;

                return Ok(());
            }
        }

        let content = match pattern {
            Some(ref pattern) => format!("The ignore regex is now `{pattern}`"),
            None => "The ignore regex is now unset".to_string(),
        };

        data.guilds
            .update(guild_id, |settings| settings.ignore_regex = pattern)
            .await?;

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

fn validate_pattern(pattern: &str) -> Result<(), regex::Error> {
    regex::Regex::new(pattern).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_patterns_pass() {
        assert!(validate_pattern(r"^\d+$").is_ok());
        assert!(validate_pattern("hello|world").is_ok());
    }

    #[test]
    fn invalid_patterns_are_rejected() {
        assert!(validate_pattern("(unclosed").is_err());
        assert!(validate_pattern("*dangling").is_err());
    }

    #[test]
    fn filter_lists_select_the_right_field() {
        let mut settings = GuildSettings::default();

        FilterList::Block.of_mut(&mut settings).push("a".to_string());
        FilterList::Remove.of_mut(&mut settings).push("b".to_string());

        assert_eq!(settings.blocklist_regexes, vec!["a".to_string()]);
        assert_eq!(settings.removelist_regexes, vec!["b".to_string()]);
    }
}
