//! Discord Rich Presence transport using discord-sdk

use std::time::{Duration, UNIX_EPOCH};

use async_trait::async_trait;
use beacon_common::PresenceError;
use discord_sdk::{
    activity::{ActivityBuilder, Assets},
    wheel::{UserState, Wheel},
    Discord, Subscriptions,
};

use crate::activity::ActivitySnapshot;
use crate::transport::PresenceTransport;

/// Presence transport over the local Discord IPC socket.
///
/// Construction only records the client id; the socket is opened by
/// [`PresenceTransport::login`].
pub struct DiscordTransport {
    client_id: i64,
    discord: Option<Discord>,
    // Keeps the event spokes alive for the lifetime of the connection.
    _wheel: Option<Wheel>,
}

impl DiscordTransport {
    pub fn new(client_id: i64) -> Self {
        Self {
            client_id,
            discord: None,
            _wheel: None,
        }
    }

    fn connected(&self) -> Result<&Discord, PresenceError> {
        self.discord.as_ref().ok_or(PresenceError::NotReady)
    }
}

#[async_trait]
impl PresenceTransport for DiscordTransport {
    fn name(&self) -> &'static str {
        "Discord"
    }

    async fn login(&mut self) -> Result<(), PresenceError> {
        let (wheel, handler) = Wheel::new(Box::new(|err| {
            tracing::warn!("Discord error: {:?}", err);
        }));
        let mut user_spoke = wheel.user();

        let discord = Discord::new(self.client_id, Subscriptions::ACTIVITY, Box::new(handler))
            .map_err(|e| PresenceError::Unavailable(format!("{e:?}")))?;

        tracing::info!("Discord connecting...");

        if user_spoke.0.changed().await.is_err() {
            discord.disconnect().await;
            return Err(PresenceError::Unavailable(
                "Discord connection closed".to_string(),
            ));
        }

        let outcome = match &*user_spoke.0.borrow() {
            UserState::Connected(user) => Ok(user.username.clone()),
            UserState::Disconnected(err) => Err(format!("Discord disconnected: {err:?}")),
        };

        match outcome {
            Ok(username) => {
                tracing::info!("Discord Rich Presence connected as {}", username);
                self.discord = Some(discord);
                self._wheel = Some(wheel);
                Ok(())
            }
            Err(reason) => {
                discord.disconnect().await;
                Err(PresenceError::Unavailable(reason))
            }
        }
    }

    async fn set_activity(&mut self, snapshot: &ActivitySnapshot) -> Result<(), PresenceError> {
        let started = UNIX_EPOCH + Duration::from_secs(snapshot.start_timestamp.max(0) as u64);

        // `instance` is left at the builder default, which is false.
        let activity = ActivityBuilder::new()
            .details(snapshot.details.clone())
            .state(snapshot.state.clone())
            .start_timestamp(started)
            .assets(
                Assets::default()
                    .large(
                        snapshot.large_image_key.as_str(),
                        Some(snapshot.large_image_text.clone()),
                    )
                    .small(
                        snapshot.small_image_key.as_str(),
                        Some(snapshot.small_image_text.clone()),
                    ),
            );

        self.connected()?
            .update_activity(activity)
            .await
            .map(|_| ())
            .map_err(|e| PresenceError::Transmit(format!("{e:?}")))
    }

    async fn clear_activity(&mut self) -> Result<(), PresenceError> {
        self.connected()?
            .clear_activity()
            .await
            .map(|_| ())
            .map_err(|e| PresenceError::Transmit(format!("{e:?}")))
    }

    async fn destroy(&mut self) {
        self._wheel = None;
        if let Some(discord) = self.discord.take() {
            discord.disconnect().await;
            tracing::info!("Discord Rich Presence disconnected");
        }
    }
}
