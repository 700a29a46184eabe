use serde::{Deserialize, Serialize};

/// String-message error used by the configuration bootstrap path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomError {
    pub message: String,
}
