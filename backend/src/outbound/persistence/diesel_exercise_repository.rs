//! PostgreSQL-backed `ExerciseRepository` implementation using Diesel ORM.
//!
//! Log reads filter on username and the optional date window in SQL and
//! keep insertion order via `created_at, id`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ExerciseRepository, ExerciseRepositoryError};
use crate::domain::{
    Description, Exercise, ExerciseDate, ExerciseDraft, ExerciseId, LogFilter, LogLimit, Minutes,
    Username,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ExerciseRow, NewExerciseRow};
use super::pool::{DbPool, PoolError};
use super::schema::exercises;

/// Diesel-backed implementation of the exercise repository port.
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ExerciseRepositoryError {
    map_basic_pool_error(error, ExerciseRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ExerciseRepositoryError {
    map_basic_diesel_error(
        error,
        ExerciseRepositoryError::query,
        ExerciseRepositoryError::connection,
    )
}

fn invalid_row(err: impl std::fmt::Display) -> ExerciseRepositoryError {
    ExerciseRepositoryError::query(format!("invalid exercise row: {err}"))
}

/// Convert a database row into a validated domain exercise.
fn row_to_exercise(row: ExerciseRow) -> Result<Exercise, ExerciseRepositoryError> {
    let ExerciseRow {
        id,
        username,
        description,
        duration,
        date,
    } = row;

    let draft = ExerciseDraft {
        username: Username::new(username).map_err(invalid_row)?,
        description: Description::new(description).map_err(invalid_row)?,
        duration: Minutes::new(duration).map_err(invalid_row)?,
        date: ExerciseDate::new(date),
    };
    Ok(Exercise::from_draft(ExerciseId::from_uuid(id), draft))
}

/// SQL `LIMIT` for a log cap; caps beyond `i64::MAX` are unbounded anyway.
fn sql_limit(limit: LogLimit) -> Option<i64> {
    limit
        .cap()
        .map(|cap| i64::try_from(cap).unwrap_or(i64::MAX))
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn create(&self, draft: &ExerciseDraft) -> Result<Exercise, ExerciseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewExerciseRow {
            username: draft.username.as_ref(),
            description: draft.description.as_ref(),
            duration: draft.duration.value(),
            date: draft.date.instant(),
        };
        let row = diesel::insert_into(exercises::table)
            .values(&new_row)
            .returning(ExerciseRow::as_returning())
            .get_result::<ExerciseRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_exercise(row)
    }

    async fn find(&self, filter: &LogFilter) -> Result<Vec<Exercise>, ExerciseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = exercises::table
            .filter(exercises::username.eq(filter.username.as_ref()))
            .order((exercises::created_at.asc(), exercises::id.asc()))
            .select(ExerciseRow::as_select())
            .into_boxed();
        if let Some(from) = filter.from {
            query = query.filter(exercises::date.ge(from.instant()));
        }
        if let Some(to) = filter.to {
            query = query.filter(exercises::date.le(to.instant()));
        }
        if let Some(limit) = sql_limit(filter.limit) {
            query = query.limit(limit);
        }

        let rows: Vec<ExerciseRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_exercise).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    fn row(description: &str, duration: f64) -> ExerciseRow {
        ExerciseRow {
            id: Uuid::new_v4(),
            username: "fcc_test".to_owned(),
            description: description.to_owned(),
            duration,
            date: Utc
                .with_ymd_and_hms(1990, 1, 1, 0, 0, 0)
                .single()
                .expect("valid fixture instant"),
        }
    }

    #[rstest]
    fn row_conversion_keeps_all_fields() {
        let source = row("test", 60.0);
        let id = source.id;
        let exercise = row_to_exercise(source).expect("valid row");

        assert_eq!(exercise.id().as_uuid(), &id);
        assert_eq!(exercise.username().as_ref(), "fcc_test");
        assert_eq!(exercise.description().as_ref(), "test");
        assert_eq!(exercise.duration().value(), 60.0);
        assert_eq!(exercise.date().calendar_string(), "Mon Jan 01 1990");
    }

    #[rstest]
    #[case(row("", 60.0))]
    #[case(row("test", f64::NAN))]
    fn invalid_rows_are_query_errors(#[case] source: ExerciseRow) {
        let error = row_to_exercise(source).expect_err("invalid row");
        assert!(matches!(error, ExerciseRepositoryError::Query { .. }));
    }

    #[rstest]
    #[case(LogLimit::UNBOUNDED, None)]
    #[case(LogLimit::at_most(3), Some(3))]
    #[case(LogLimit::at_most(usize::MAX), Some(i64::MAX))]
    fn limits_translate_to_sql(#[case] limit: LogLimit, #[case] expected: Option<i64>) {
        assert_eq!(sql_limit(limit), expected);
    }
}
