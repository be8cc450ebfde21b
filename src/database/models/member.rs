use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::visibility::{RegionScoped, RegionSource, Role};

/// A registered dashboard user. `role` and `regional` are stored as text;
/// `regional` is user-entered and inconsistently formatted ("R. Rio de
/// Janeiro", "rio de janeiro", "RJ").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub regional: Option<String>,
    pub area: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Member {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}

impl RegionScoped for Member {
    fn region(&self) -> RegionSource<'_> {
        match self.regional.as_deref() {
            Some(r) => RegionSource::Field(r),
            None => RegionSource::Missing,
        }
    }
}
