//! HTTP request DTOs.

use serde::{Deserialize, Serialize};

/// Query string accepted by `GET /quotes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorQuery {
    /// Filter by exact author. Absent means "all quotes".
    #[serde(default)]
    pub author: Option<String>,
}
