use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod brand;
mod macros;
pub mod message;
pub mod pagination;
pub mod template;

/// Bookkeeping fields attached to every persisted entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}
