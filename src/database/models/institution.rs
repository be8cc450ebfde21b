use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::visibility::{RegionScoped, RegionSource};

/// A partner institution served by a regional team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Institution {
    pub id: Uuid,
    pub name: String,
    pub regional: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RegionScoped for Institution {
    fn region(&self) -> RegionSource<'_> {
        match self.regional.as_deref() {
            Some(r) => RegionSource::Field(r),
            None => RegionSource::Missing,
        }
    }
}
