use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A tenant: a school owning its own FAQ set, identified by a unique domain.
///
/// Schools are created and administered by an external subsystem; the search
/// engine only reads `id`, `domain` and `is_active`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct School {
    /// Unique numeric identifier
    pub id: i64,

    /// Display name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Unique domain, e.g. `acme.edu`; scopes every chatbot query
    #[validate(length(min = 1, max = 255))]
    pub domain: String,

    /// Inactive schools are invisible to search
    pub is_active: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl School {
    /// Create a new active school
    pub fn new(id: i64, name: String, domain: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            domain,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
