use log::info;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::game_outcome::GameOutcome;
use crate::tracker::structs::game_tracker::GameTracker;
use crate::tracker::structs::player_id::PlayerId;
use crate::tracker::structs::player_stats::PlayerStats;
use crate::tracker::structs::stats_report::StatsReport;

impl GameTracker {
    #[tracing::instrument(level = "debug")]
    pub async fn load_players(&self)
    {
        if let Ok(players) = self.store.count_stats().await {
            self.set_stats(StatsEvent::Players, players as i64);
            info!("Loaded {players} player statistics records");
        }
    }

    /// Creates the zeroed record for a new player.
    ///
    /// The record always starts with every counter at zero; a second
    /// creation for the same identity fails with `AlreadyExists` and
    /// leaves the stored record untouched.
    #[tracing::instrument(level = "debug")]
    pub async fn create_player_stats(&self, id: PlayerId) -> Result<PlayerStats, TrackerError>
    {
        let stats = PlayerStats::new(id.clone());
        match self.store.create_stats(stats.clone()).await? {
            true => {
                self.update_stats(StatsEvent::Players, 1);
                Ok(stats)
            }
            false => Err(TrackerError::AlreadyExists(id))
        }
    }

    /// Aggregate read: the stored counters composed with the registry
    /// nickname. Fails with `StatsNotFound` or `NicknameNotFound`
    /// depending on which collaborator came up empty.
    #[tracing::instrument(level = "debug")]
    pub async fn get_player_stats(&self, id: &PlayerId) -> Result<StatsReport, TrackerError>
    {
        let stats = match self.store.find_stats(id).await? {
            None => { return Err(TrackerError::StatsNotFound(id.clone())); }
            Some(stats) => stats
        };
        let nickname = match self.nicknames.resolve_nickname(id).await? {
            None => { return Err(TrackerError::NicknameNotFound(id.clone())); }
            Some(nickname) => nickname
        };
        Ok(StatsReport::compose(stats, nickname))
    }

    /// Records one finished game against an existing record.
    ///
    /// The outcome is validated before storage is touched, and the
    /// read-modify-write itself happens inside the engine. No record is
    /// created implicitly; unknown identities fail with `StatsNotFound`.
    #[tracing::instrument(level = "debug")]
    pub async fn record_game_outcome(&self, id: &PlayerId, outcome: GameOutcome) -> Result<PlayerStats, TrackerError>
    {
        outcome.validate()?;
        match self.store.record_outcome(id, &outcome).await? {
            None => Err(TrackerError::StatsNotFound(id.clone())),
            Some(stats) => {
                self.update_stats(StatsEvent::GamesRecorded, 1);
                if outcome.won {
                    self.update_stats(StatsEvent::WinsRecorded, 1);
                } else {
                    self.update_stats(StatsEvent::LossesRecorded, 1);
                }
                Ok(stats)
            }
        }
    }

    /// Administrative removal of a record. Not part of the game flow.
    #[tracing::instrument(level = "debug")]
    pub async fn remove_player_stats(&self, id: &PlayerId) -> Result<(), TrackerError>
    {
        match self.store.remove_stats(id).await? {
            true => {
                self.update_stats(StatsEvent::Players, -1);
                Ok(())
            }
            false => Err(TrackerError::StatsNotFound(id.clone()))
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn count_player_stats(&self) -> Result<u64, TrackerError>
    {
        Ok(self.store.count_stats().await?)
    }
}
