use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigNicknames {
    pub table_name: String,
    pub column_identity: String,
    pub column_nickname: String,
}
