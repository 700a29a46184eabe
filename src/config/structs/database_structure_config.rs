use serde::{Deserialize, Serialize};
use crate::config::structs::database_structure_config_nicknames::DatabaseStructureConfigNicknames;
use crate::config::structs::database_structure_config_players::DatabaseStructureConfigPlayers;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfig {
    pub players: DatabaseStructureConfigPlayers,
    pub nicknames: DatabaseStructureConfigNicknames,
}
