use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::visibility::{RegionScoped, RegionSource};

/// A logged activity. Legacy rows have no region column; the region is
/// embedded in the description text, so visibility falls back to substring
/// matching. Flagged for data migration to a dedicated column.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub institution_id: Option<Uuid>,
    pub activity_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RegionScoped for Activity {
    fn region(&self) -> RegionSource<'_> {
        match self.description.as_deref() {
            Some(text) => RegionSource::Embedded(text),
            None => RegionSource::Missing,
        }
    }
}
