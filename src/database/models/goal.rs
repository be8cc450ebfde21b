use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::visibility::{RegionScoped, RegionSource};

/// A regional goal ("meta"). Region lives in a dedicated free-text column.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Goal {
    pub id: Uuid,
    pub member_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub regional: Option<String>,
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RegionScoped for Goal {
    fn region(&self) -> RegionSource<'_> {
        match self.regional.as_deref() {
            Some(r) => RegionSource::Field(r),
            None => RegionSource::Missing,
        }
    }
}
