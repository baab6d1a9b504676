//! PostgreSQL-backed `BookmarkRepository` implementation using Diesel ORM.
//!
//! The toggle runs its existence check and the flip in one transaction. A
//! racing insert trips the unique index on (user_id, campaign_id); that is
//! reported as [`BookmarkRepositoryError::Raced`] and the losing transaction
//! rolls back, leaving exactly one row for the pair.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{BookmarkRepository, BookmarkRepositoryError};
use crate::domain::{CampaignId, UserId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, map_pool_error};
use super::models::NewBookmarkRow;
use super::pool::{DbPool, PoolError};
use super::schema::bookmarks;

/// Diesel-backed implementation of the bookmark repository port.
#[derive(Clone)]
pub struct DieselBookmarkRepository {
    pool: DbPool,
}

impl DieselBookmarkRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_conn_error(error: PoolError) -> BookmarkRepositoryError {
    map_pool_error(error, BookmarkRepositoryError::connection)
}

fn map_diesel_error(error: &diesel::result::Error) -> BookmarkRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::UniqueViolation => {
            BookmarkRepositoryError::query("unexpected unique violation")
        }
        DieselFailure::Connection(message) => BookmarkRepositoryError::connection(message),
        DieselFailure::Transient(message) => BookmarkRepositoryError::transient(message),
        DieselFailure::Query(message) => BookmarkRepositoryError::query(message),
    }
}

/// Transaction-internal error carrier.
enum TxnError {
    Outcome(BookmarkRepositoryError),
    Diesel(diesel::result::Error),
}

impl From<diesel::result::Error> for TxnError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

impl TxnError {
    fn into_repository_error(self) -> BookmarkRepositoryError {
        match self {
            Self::Outcome(error) => error,
            Self::Diesel(error) => map_diesel_error(&error),
        }
    }
}

#[async_trait]
impl BookmarkRepository for DieselBookmarkRepository {
    async fn toggle(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<bool, BookmarkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_conn_error)?;

        conn.transaction(|conn| {
            async move {
                let existing: Option<i64> = bookmarks::table
                    .filter(
                        bookmarks::user_id
                            .eq(user_id.get())
                            .and(bookmarks::campaign_id.eq(campaign_id.get())),
                    )
                    .select(bookmarks::id)
                    .first(conn)
                    .await
                    .optional()?;

                match existing {
                    Some(id) => {
                        diesel::delete(bookmarks::table.find(id)).execute(conn).await?;
                        Ok(false)
                    }
                    None => {
                        let new_row = NewBookmarkRow {
                            user_id: user_id.get(),
                            campaign_id: campaign_id.get(),
                        };
                        diesel::insert_into(bookmarks::table)
                            .values(&new_row)
                            .execute(conn)
                            .await
                            .map_err(|err| match classify_diesel_error(&err) {
                                DieselFailure::UniqueViolation => TxnError::Outcome(
                                    BookmarkRepositoryError::raced(
                                        user_id.get(),
                                        campaign_id.get(),
                                    ),
                                ),
                                _ => TxnError::Diesel(err),
                            })?;
                        Ok(true)
                    }
                }
            }
            .scope_boxed()
        })
        .await
        .map_err(TxnError::into_repository_error)
    }

    async fn remove(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<bool, BookmarkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_conn_error)?;

        let deleted = diesel::delete(
            bookmarks::table.filter(
                bookmarks::user_id
                    .eq(user_id.get())
                    .and(bookmarks::campaign_id.eq(campaign_id.get())),
            ),
        )
        .execute(&mut conn)
        .await
        .map_err(|err| map_diesel_error(&err))?;

        Ok(deleted > 0)
    }
}
