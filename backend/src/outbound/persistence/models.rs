//! Diesel row structs, internal to the persistence adapters.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{applications, bookmarks, campaigns};

/// Capacity columns of a campaign row, read inside the apply transaction.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = campaigns)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CampaignCapacityRow {
    pub id: i64,
    pub max_participants: i32,
    pub current_participants: i32,
}

/// Full application row as stored.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ApplicationRow {
    pub id: i64,
    pub user_id: i64,
    pub campaign_id: i64,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

/// Insert payload for a new application; identity and timestamp come from
/// the database defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = applications)]
pub struct NewApplicationRow<'a> {
    pub user_id: i64,
    pub campaign_id: i64,
    pub status: &'a str,
}

/// Insert payload for a new bookmark.
#[derive(Debug, Insertable)]
#[diesel(table_name = bookmarks)]
pub struct NewBookmarkRow {
    pub user_id: i64,
    pub campaign_id: i64,
}
