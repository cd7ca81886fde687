//! Job storage: creation, lookup, and the later column updates the
//! pipeline and sourcing flows make.

pub mod handlers;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobRow;

pub async fn create_job(
    pool: &PgPool,
    user_id: Uuid,
    content: &str,
    title: Option<&str>,
) -> Result<JobRow, AppError> {
    let job = sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs (id, user_id, content, title)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(content)
    .bind(title)
    .fetch_one(pool)
    .await?;
    Ok(job)
}

pub async fn find_job(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, AppError> {
    let job = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(job)
}

pub async fn list_jobs(pool: &PgPool, user_id: Uuid) -> Result<Vec<JobRow>, AppError> {
    let jobs = sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(jobs)
}

/// Stores a freshly generated boolean search string on the job.
pub async fn set_search_string(
    pool: &PgPool,
    id: Uuid,
    search_string: &str,
) -> Result<(), AppError> {
    sqlx::query("UPDATE jobs SET search_string = $1 WHERE id = $2")
        .bind(search_string)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
