use serde::{Deserialize, Serialize};

/// Table and column names for the per-player statistics records.
///
/// The six win-bucket columns are not named individually; they are derived
/// from `column_wins_prefix` with the attempt number appended (`won_in_1`
/// through `won_in_6` with the default prefix).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigPlayers {
    pub table_name: String,
    pub column_identity: String,
    pub column_total_games: String,
    pub column_games_won: String,
    pub column_games_lost: String,
    pub column_wins_prefix: String,
    pub column_updated: String,
}
