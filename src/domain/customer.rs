use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type CustomerId = String;

/// A customer record. The ledger mints a fresh record (and a fresh
/// "CUS{n}" id) for every rental flow; names are never deduplicated, so a
/// repeat visitor shows up as a new customer each time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
