pub use framework::Data;
use serenity::{
    all::{Context, EventHandler, Ready},
    async_trait,
};

mod events;
pub mod framework;

pub struct Handler {
    pub data: Data,
}

impl Handler {
    pub fn new(data: Data) -> Self {
        Self { data }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        log::info!("{} is connected!", ready.user.name);
        log::info!(
            "guild settings stored at {}",
            self.data.guilds.path.display()
        );

        ctx.set_presence(None, serenity::all::OnlineStatus::Online);
    }
}
