use log::info;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::game_tracker::GameTracker;
use crate::tracker::structs::player_id::PlayerId;

impl GameTracker {
    #[tracing::instrument(level = "debug")]
    pub async fn load_nicknames(&self)
    {
        if let Ok(nicknames) = self.nicknames.count_nicknames().await {
            self.set_stats(StatsEvent::Nicknames, nicknames as i64);
            info!("Loaded {nicknames} nickname registrations");
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn get_player_nickname(&self, id: &PlayerId) -> Result<String, TrackerError>
    {
        match self.nicknames.resolve_nickname(id).await? {
            None => Err(TrackerError::NicknameNotFound(id.clone())),
            Some(nickname) => Ok(nickname)
        }
    }

    /// Registers or replaces a nickname. Returns true when the identity
    /// had no registration before.
    #[tracing::instrument(level = "debug")]
    pub async fn set_player_nickname(&self, id: &PlayerId, nickname: &str) -> Result<bool, TrackerError>
    {
        let vacant = self.nicknames.resolve_nickname(id).await?.is_none();
        self.nicknames.set_nickname(id, nickname).await?;
        if vacant {
            self.update_stats(StatsEvent::Nicknames, 1);
        }
        Ok(vacant)
    }

    #[tracing::instrument(level = "debug")]
    pub async fn remove_player_nickname(&self, id: &PlayerId) -> Result<(), TrackerError>
    {
        match self.nicknames.remove_nickname(id).await? {
            true => {
                self.update_stats(StatsEvent::Nicknames, -1);
                Ok(())
            }
            false => Err(TrackerError::NicknameNotFound(id.clone()))
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn count_player_nicknames(&self) -> Result<u64, TrackerError>
    {
        Ok(self.nicknames.count_nicknames().await?)
    }
}
