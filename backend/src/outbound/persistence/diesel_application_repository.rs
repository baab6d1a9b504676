//! PostgreSQL-backed `ApplicationRepository` implementation using Diesel ORM.
//!
//! The apply path runs the whole five-step sequence in one database
//! transaction: load campaign, capacity check, duplicate check, insert, and
//! the guarded counter increment. The increment uses a conditional UPDATE
//! (`... WHERE current_participants < max_participants`) and branches on the
//! affected row, so concurrent applies serialise on the campaign row without
//! explicit locks; losing the race rolls the insert back with the
//! transaction. The unique index on (user_id, campaign_id) stays as the
//! duplicate backstop independent of isolation level.

use std::str::FromStr;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{
    ApplicationListFilter, ApplicationPage, ApplicationReceipt, ApplicationRepository,
    ApplicationRepositoryError,
};
use crate::domain::{
    Application, ApplicationId, ApplicationStatus, CampaignCapacity, CampaignId, UserId,
};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, map_pool_error};
use super::models::{ApplicationRow, CampaignCapacityRow, NewApplicationRow};
use super::pool::{DbPool, PoolError};
use super::schema::{applications, campaigns};

/// Diesel-backed implementation of the application repository port.
#[derive(Clone)]
pub struct DieselApplicationRepository {
    pool: DbPool,
}

impl DieselApplicationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_conn_error(error: PoolError) -> ApplicationRepositoryError {
    map_pool_error(error, ApplicationRepositoryError::connection)
}

/// Map Diesel errors outside the duplicate-sensitive insert.
fn map_diesel_error(error: &diesel::result::Error) -> ApplicationRepositoryError {
    match classify_diesel_error(error) {
        // Reaching here means a unique index rejected a write the caller did
        // not anticipate; report it as a plain query failure.
        DieselFailure::UniqueViolation => {
            ApplicationRepositoryError::query("unexpected unique violation")
        }
        DieselFailure::Connection(message) => ApplicationRepositoryError::connection(message),
        DieselFailure::Transient(message) => ApplicationRepositoryError::transient(message),
        DieselFailure::Query(message) => ApplicationRepositoryError::query(message),
    }
}

/// Transaction-internal error carrier, so domain outcomes abort the
/// transaction alongside raw Diesel failures.
enum TxnError {
    Outcome(ApplicationRepositoryError),
    Diesel(diesel::result::Error),
}

impl From<diesel::result::Error> for TxnError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

impl TxnError {
    fn into_repository_error(self) -> ApplicationRepositoryError {
        match self {
            Self::Outcome(error) => error,
            Self::Diesel(error) => map_diesel_error(&error),
        }
    }
}

/// Load and validate the campaign's capacity ledger inside the transaction.
async fn load_capacity(
    conn: &mut AsyncPgConnection,
    campaign_id: CampaignId,
) -> Result<CampaignCapacity, TxnError> {
    let row: Option<CampaignCapacityRow> = campaigns::table
        .find(campaign_id.get())
        .select(CampaignCapacityRow::as_select())
        .first(conn)
        .await
        .optional()?;

    let Some(row) = row else {
        return Err(TxnError::Outcome(
            ApplicationRepositoryError::campaign_missing(campaign_id.get()),
        ));
    };

    CampaignCapacity::new(campaign_id, row.max_participants, row.current_participants).map_err(
        |err| TxnError::Outcome(ApplicationRepositoryError::corrupted(err.to_string())),
    )
}

fn row_to_application(row: ApplicationRow) -> Result<Application, ApplicationRepositoryError> {
    let status = ApplicationStatus::from_str(&row.status)
        .map_err(|err| ApplicationRepositoryError::query(err.to_string()))?;
    Ok(Application {
        id: ApplicationId::new(row.id)
            .map_err(|err| ApplicationRepositoryError::query(err.to_string()))?,
        user_id: UserId::new(row.user_id)
            .map_err(|err| ApplicationRepositoryError::query(err.to_string()))?,
        campaign_id: CampaignId::new(row.campaign_id)
            .map_err(|err| ApplicationRepositoryError::query(err.to_string()))?,
        status,
        applied_at: row.applied_at,
    })
}

#[async_trait]
impl ApplicationRepository for DieselApplicationRepository {
    async fn record_application(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<ApplicationReceipt, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_conn_error)?;

        conn.transaction(|conn| {
            async move {
                let capacity = load_capacity(conn, campaign_id).await?;
                if capacity.is_full() {
                    return Err(TxnError::Outcome(
                        ApplicationRepositoryError::capacity_exhausted(campaign_id.get()),
                    ));
                }

                // Early-exit duplicate check; the unique index below remains
                // the source of truth under races.
                let existing: Option<i64> = applications::table
                    .filter(
                        applications::user_id
                            .eq(user_id.get())
                            .and(applications::campaign_id.eq(campaign_id.get())),
                    )
                    .select(applications::id)
                    .first(conn)
                    .await
                    .optional()?;
                if existing.is_some() {
                    return Err(TxnError::Outcome(
                        ApplicationRepositoryError::duplicate_application(
                            user_id.get(),
                            campaign_id.get(),
                        ),
                    ));
                }

                let new_row = NewApplicationRow {
                    user_id: user_id.get(),
                    campaign_id: campaign_id.get(),
                    status: ApplicationStatus::Pending.as_str(),
                };
                let application_id: i64 = diesel::insert_into(applications::table)
                    .values(&new_row)
                    .returning(applications::id)
                    .get_result(conn)
                    .await
                    .map_err(|err| match classify_diesel_error(&err) {
                        DieselFailure::UniqueViolation => TxnError::Outcome(
                            ApplicationRepositoryError::duplicate_application(
                                user_id.get(),
                                campaign_id.get(),
                            ),
                        ),
                        _ => TxnError::Diesel(err),
                    })?;

                // Guarded increment: zero affected rows means a concurrent
                // apply took the last slot after our read; aborting here
                // rolls the insert back too.
                let incremented: Option<i32> = diesel::update(
                    campaigns::table.filter(
                        campaigns::id
                            .eq(campaign_id.get())
                            .and(campaigns::current_participants.lt(campaigns::max_participants)),
                    ),
                )
                .set(
                    campaigns::current_participants.eq(campaigns::current_participants + 1),
                )
                .returning(campaigns::current_participants)
                .get_result(conn)
                .await
                .optional()?;

                let Some(current_participants) = incremented else {
                    return Err(TxnError::Outcome(
                        ApplicationRepositoryError::capacity_exhausted(campaign_id.get()),
                    ));
                };

                let application_id = ApplicationId::new(application_id).map_err(|err| {
                    TxnError::Outcome(ApplicationRepositoryError::query(err.to_string()))
                })?;

                Ok(ApplicationReceipt {
                    application_id,
                    current_participants,
                })
            }
            .scope_boxed()
        })
        .await
        .map_err(TxnError::into_repository_error)
    }

    async fn list_for_campaign(
        &self,
        campaign_id: CampaignId,
        filter: ApplicationListFilter,
    ) -> Result<ApplicationPage, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_conn_error)?;

        let (rows, total) = conn
            .transaction(|conn| {
                async move {
                    // Distinguish "no applications" from "no campaign".
                    load_capacity(conn, campaign_id).await?;

                    let total: i64 = match filter.status {
                        Some(status) => {
                            applications::table
                                .filter(
                                    applications::campaign_id
                                        .eq(campaign_id.get())
                                        .and(applications::status.eq(status.as_str())),
                                )
                                .count()
                                .get_result(conn)
                                .await?
                        }
                        None => {
                            applications::table
                                .filter(applications::campaign_id.eq(campaign_id.get()))
                                .count()
                                .get_result(conn)
                                .await?
                        }
                    };

                    let mut rows_query = applications::table
                        .filter(applications::campaign_id.eq(campaign_id.get()))
                        .select(ApplicationRow::as_select())
                        .into_boxed();
                    if let Some(status) = filter.status {
                        rows_query =
                            rows_query.filter(applications::status.eq(status.as_str()));
                    }
                    let rows: Vec<ApplicationRow> = rows_query
                        .order((applications::applied_at.desc(), applications::id.desc()))
                        .limit(filter.page.limit())
                        .offset(filter.page.offset())
                        .load(conn)
                        .await?;

                    Ok((rows, total))
                }
                .scope_boxed()
            })
            .await
            .map_err(TxnError::into_repository_error)?;

        let applications = rows
            .into_iter()
            .map(row_to_application)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ApplicationPage {
            applications,
            total,
        })
    }
}
