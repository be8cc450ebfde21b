use sqlx::PgPool;
use uuid::Uuid;

use super::manager::DatabaseError;
use super::models::{Activity, Goal, Institution, Member};

/// Typed read queries over the Decolagem schema.
///
/// Regional filtering happens in memory after the fetch: stored region strings
/// need diacritic/whitespace normalization (and, for activities, free-text
/// containment) that does not push down into SQL portably.
pub struct Repository<'a> {
    pool: &'a PgPool,
}

impl<'a> Repository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn members(&self) -> Result<Vec<Member>, DatabaseError> {
        let rows = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, name, email, role, regional, area,
                   created_at, updated_at, deleted_at
            FROM members
            WHERE deleted_at IS NULL
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn goals(&self) -> Result<Vec<Goal>, DatabaseError> {
        let rows = sqlx::query_as::<_, Goal>(
            r#"
            SELECT id, member_id, title, description, regional, status,
                   due_date, created_at, updated_at
            FROM goals
            ORDER BY due_date NULLS LAST, created_at
            "#,
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn goal(&self, id: Uuid) -> Result<Option<Goal>, DatabaseError> {
        let row = sqlx::query_as::<_, Goal>(
            r#"
            SELECT id, member_id, title, description, regional, status,
                   due_date, created_at, updated_at
            FROM goals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    pub async fn activities(&self) -> Result<Vec<Activity>, DatabaseError> {
        let rows = sqlx::query_as::<_, Activity>(
            r#"
            SELECT id, title, description, institution_id, activity_date,
                   created_at, updated_at
            FROM activities
            ORDER BY activity_date DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn activity(&self, id: Uuid) -> Result<Option<Activity>, DatabaseError> {
        let row = sqlx::query_as::<_, Activity>(
            r#"
            SELECT id, title, description, institution_id, activity_date,
                   created_at, updated_at
            FROM activities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    pub async fn institutions(&self) -> Result<Vec<Institution>, DatabaseError> {
        let rows = sqlx::query_as::<_, Institution>(
            r#"
            SELECT id, name, regional, city, state, created_at, updated_at
            FROM institutions
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }
}
