use crate::tracker::structs::player_stats::PlayerStats;
use crate::tracker::structs::stats_report::StatsReport;

impl StatsReport {
    pub fn compose(stats: PlayerStats, nickname: String) -> StatsReport {
        StatsReport {
            identity: stats.identity,
            nickname,
            total_games: stats.total_games,
            games_won: stats.games_won,
            games_lost: stats.games_lost,
            wins_by_attempt: stats.wins_by_attempt,
            updated: stats.updated,
        }
    }
}
