//! PostgreSQL implementation of ReleaseRepository.
//!
//! Persists Release aggregates to the `releases` table. Statuses are stored
//! as machine tags (`IN_DEVELOPMENT`, ...), never as display labels.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::domain::foundation::{DomainError, ErrorCode, ReleaseId, Timestamp};
use crate::domain::release::{Criterion, NewRelease, Release, ReleaseFilter, ReleaseStatus};
use crate::ports::ReleaseRepository;

const SELECT_RELEASES: &str = "SELECT id, name, description, status, release_date, \
                               created_at, last_update_at FROM releases";

/// PostgreSQL implementation of ReleaseRepository.
#[derive(Clone)]
pub struct PostgresReleaseRepository {
    pool: PgPool,
}

impl PostgresReleaseRepository {
    /// Creates a new PostgresReleaseRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReleaseRepository for PostgresReleaseRepository {
    async fn find_by_id(&self, id: ReleaseId) -> Result<Option<Release>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_RELEASES))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch release", e))?;

        row.map(row_to_release).transpose()
    }

    async fn insert(&self, release: &NewRelease) -> Result<Release, DomainError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO releases (
                name, description, status, release_date, created_at, last_update_at
            ) VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id
            "#,
        )
        .bind(release.name())
        .bind(release.description())
        .bind(release.status().as_machine_str())
        .bind(release.release_date())
        .bind(release.created_at().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert release", e))?;

        Ok(release.clone().into_release(ReleaseId::new(id)))
    }

    async fn update(&self, release: &Release) -> Result<Release, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE releases SET
                name = $2,
                description = $3,
                status = $4,
                release_date = $5,
                last_update_at = $6
            WHERE id = $1
            "#,
        )
        .bind(release.id().as_i64())
        .bind(release.name())
        .bind(release.description())
        .bind(release.status().as_machine_str())
        .bind(release.release_date())
        .bind(release.last_update_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update release", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::release_not_found(release.id()));
        }

        Ok(release.clone())
    }

    async fn exists_by_id(&self, id: ReleaseId) -> Result<bool, DomainError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM releases WHERE id = $1)")
                .bind(id.as_i64())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to check release existence", e))?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: ReleaseId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM releases WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete release", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::release_not_found(id));
        }

        Ok(())
    }

    async fn find_all(&self, filter: &ReleaseFilter) -> Result<Vec<Release>, DomainError> {
        let mut query = build_find_all_query(filter);

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to filter releases", e))?;

        rows.into_iter().map(row_to_release).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Translates a filter into `SELECT ... WHERE c1 AND c2 ... ORDER BY id`.
fn build_find_all_query(filter: &ReleaseFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(SELECT_RELEASES);

    for (index, criterion) in filter.criteria().iter().enumerate() {
        query.push(if index == 0 { " WHERE " } else { " AND " });

        match criterion {
            Criterion::NameContains(needle) => {
                query.push("LOWER(name) LIKE ");
                query.push_bind(like_pattern(needle));
                query.push(" ESCAPE '\\'");
            }
            Criterion::DescriptionContains(needle) => {
                query.push("LOWER(description) LIKE ");
                query.push_bind(like_pattern(needle));
                query.push(" ESCAPE '\\'");
            }
            Criterion::StatusIs(status) => {
                query.push("status = ");
                query.push_bind(status.as_machine_str());
            }
            Criterion::ReleasedOnOrAfter(date) => {
                query.push("release_date >= ");
                query.push_bind(*date);
            }
            Criterion::ReleasedOnOrBefore(date) => {
                query.push("release_date <= ");
                query.push_bind(*date);
            }
        }
    }

    query.push(" ORDER BY id ASC");
    query
}

/// Wraps a needle in `%...%`, escaping LIKE wildcards so they match literally.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn str_to_release_status(s: &str) -> Result<ReleaseStatus, DomainError> {
    ReleaseStatus::from_machine_str(s).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid release status: {}", s),
        )
    })
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

fn row_to_release(row: PgRow) -> Result<Release, DomainError> {
    let id: i64 = column(&row, "id")?;
    let name: String = column(&row, "name")?;
    let description: Option<String> = column(&row, "description")?;
    let status: String = column(&row, "status")?;
    let release_date: NaiveDate = column(&row, "release_date")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let last_update_at: DateTime<Utc> = column(&row, "last_update_at")?;

    Ok(Release::reconstitute(
        ReleaseId::new(id),
        name,
        description,
        str_to_release_status(&status)?,
        release_date,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(last_update_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_status_conversion_roundtrips() {
        for status in ReleaseStatus::ALL {
            assert_eq!(
                str_to_release_status(status.as_machine_str()).unwrap(),
                status
            );
        }
    }

    #[test]
    fn str_to_release_status_rejects_display_labels() {
        assert!(str_to_release_status("In Development").is_err());
        assert!(str_to_release_status("invalid").is_err());
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("v1"), "%v1%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\x"), "%c:\\\\x%");
    }

    #[test]
    fn empty_filter_selects_everything_ordered_by_id() {
        let query = build_find_all_query(&ReleaseFilter::all());
        assert_eq!(
            query.sql(),
            format!("{} ORDER BY id ASC", SELECT_RELEASES)
        );
    }

    #[test]
    fn criteria_are_joined_with_and() {
        let filter = ReleaseFilter::builder()
            .name(Some("Release"))
            .status(Some(ReleaseStatus::OnDev))
            .from_date(NaiveDate::from_ymd_opt(2026, 2, 1))
            .to_date(NaiveDate::from_ymd_opt(2026, 2, 28))
            .build();

        let query = build_find_all_query(&filter);

        assert_eq!(
            query.sql(),
            format!(
                "{} WHERE LOWER(name) LIKE $1 ESCAPE '\\' AND status = $2 \
                 AND release_date >= $3 AND release_date <= $4 ORDER BY id ASC",
                SELECT_RELEASES
            )
        );
    }

    #[test]
    fn description_criterion_uses_lowercased_column() {
        let filter = ReleaseFilter::builder().description(Some("fixes")).build();
        let query = build_find_all_query(&filter);
        assert!(query.sql().contains("LOWER(description) LIKE $1"));
        assert!(!query.sql().contains(" OR "));
    }
}
