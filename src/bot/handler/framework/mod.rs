use std::{collections::HashMap, path::PathBuf, sync::Arc};

use chrono::{DateTime, Utc};
use serenity::all::{Framework, GuildId};

use tokio::sync::RwLock;

use crate::settings::GuildStore;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

mod filters;
mod forget;
mod model;
mod parameters;
mod percent;
mod settings;
mod whitelist;

pub struct InnerData {
    pub guilds: GuildStore,
    /// Per-guild "forget everything before this" marks, set by the forget
    /// command and consumed by the reply pipeline.
    pub forget_after: RwLock<HashMap<GuildId, DateTime<Utc>>>,
}
pub type Data = Arc<InnerData>;

pub fn framework(guilds: PathBuf) -> anyhow::Result<(impl Framework + 'static, Data)> {
    let data = Arc::new(InnerData {
        guilds: GuildStore::read(guilds)?,
        forget_after: RwLock::new(HashMap::new()),
    });

    Ok((
        poise::Framework::builder()
            .options(poise::FrameworkOptions {
                commands: vec![
                    settings::settings(),
                    percent::percent(),
                    model::model(),
                    whitelist::whitelist(),
                    filters::filters(),
                    parameters::parameters(),
                    forget::forget(),
                    forget::public_forget(),
                ],
                ..Default::default()
            })
            .setup({
                let data = data.clone();
                move |ctx, _ready, framework| {
                    Box::pin({
                        async move {
                            poise::builtins::register_globally(ctx, &framework.options().commands)
                                .await?;
                            Ok(data)
                        }
                    })
                }
            })
            .build(),
        data,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_a_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guilds.json");

        let (_framework, data) = framework(path.clone()).unwrap();

        assert_eq!(data.guilds.path, path);
        assert!(data.forget_after.try_read().unwrap().is_empty());
    }
}
