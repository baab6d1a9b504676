//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations`
//! exactly; regenerate with `diesel print-schema` when migrations change.

diesel::table! {
    /// Campaigns with their embedded capacity ledger.
    ///
    /// `current_participants` moves only through the guarded increment in
    /// the apply transaction; a check constraint keeps it within
    /// `0..=max_participants` at the database level.
    campaigns (id) {
        /// Primary key, identity column.
        id -> BigInt,
        /// Campaign headline, display only.
        #[max_length = 255]
        title -> Varchar,
        /// Display status: ONGOING, COMPLETED, or PENDING.
        #[max_length = 16]
        status -> Varchar,
        /// Participant ceiling, fixed at creation.
        max_participants -> Integer,
        /// Slots consumed so far.
        current_participants -> Integer,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Application records, one per (user, campaign) pair in any status.
    applications (id) {
        /// Primary key, identity column.
        id -> BigInt,
        /// Applicant, supplied by the authentication collaborator.
        user_id -> BigInt,
        /// Target campaign.
        campaign_id -> BigInt,
        /// Lifecycle status: PENDING, APPROVED, or REJECTED.
        #[max_length = 16]
        status -> Varchar,
        /// When the application was recorded.
        applied_at -> Timestamptz,
    }
}

diesel::table! {
    /// Bookmark rows, at most one per (user, campaign) pair.
    bookmarks (id) {
        /// Primary key, identity column.
        id -> BigInt,
        /// Owning user.
        user_id -> BigInt,
        /// Bookmarked campaign.
        campaign_id -> BigInt,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(applications -> campaigns (campaign_id));
diesel::joinable!(bookmarks -> campaigns (campaign_id));

diesel::allow_tables_to_appear_in_same_query!(campaigns, applications, bookmarks);
