//! In-memory port implementations for behavioural tests.
//!
//! These honour the same contracts as the Diesel adapters: the apply path is
//! atomic under a single lock, the bookmark toggle holds exactly one row per
//! pair, and forced failures leave no partial state behind.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use backend::domain::ports::{
    ApplicationListFilter, ApplicationPage, ApplicationReceipt, ApplicationRepository,
    ApplicationRepositoryError, BookmarkRepository, BookmarkRepositoryError,
};
use backend::domain::{Application, ApplicationId, ApplicationStatus, CampaignId, UserId};

/// Seeded campaign row for the in-memory store.
#[derive(Debug, Clone, Copy)]
pub struct CampaignSeed {
    pub max_participants: i32,
    pub current_participants: i32,
}

#[derive(Default)]
struct ApplicationStoreState {
    campaigns: HashMap<i64, CampaignSeed>,
    applications: Vec<Application>,
    next_application_id: i64,
}

/// Application store keeping every apply step under one lock, mirroring the
/// transactional contract of the SQL adapter.
#[derive(Default)]
pub struct InMemoryApplicationStore {
    state: Mutex<ApplicationStoreState>,
    fail_next: AtomicBool,
}

impl InMemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_campaign(&self, campaign_id: CampaignId, max: i32, current: i32) {
        let mut state = self.state.lock().expect("store lock poisoned");
        state.campaigns.insert(
            campaign_id.get(),
            CampaignSeed {
                max_participants: max,
                current_participants: current,
            },
        );
    }

    /// Make the next `record_application` fail transiently before writing.
    pub fn fail_next_apply(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn participant_count(&self, campaign_id: CampaignId) -> i32 {
        let state = self.state.lock().expect("store lock poisoned");
        state
            .campaigns
            .get(&campaign_id.get())
            .map(|campaign| campaign.current_participants)
            .unwrap_or_default()
    }

    pub fn application_rows(&self, campaign_id: CampaignId) -> Vec<Application> {
        let state = self.state.lock().expect("store lock poisoned");
        state
            .applications
            .iter()
            .filter(|application| application.campaign_id == campaign_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationStore {
    async fn record_application(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<ApplicationReceipt, ApplicationRepositoryError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ApplicationRepositoryError::transient(
                "deadlock victim".to_owned(),
            ));
        }

        let mut state = self.state.lock().expect("store lock poisoned");

        let campaign = state
            .campaigns
            .get(&campaign_id.get())
            .copied()
            .ok_or_else(|| ApplicationRepositoryError::campaign_missing(campaign_id.get()))?;

        if campaign.current_participants >= campaign.max_participants {
            return Err(ApplicationRepositoryError::capacity_exhausted(
                campaign_id.get(),
            ));
        }

        let duplicate = state
            .applications
            .iter()
            .any(|application| {
                application.user_id == user_id && application.campaign_id == campaign_id
            });
        if duplicate {
            return Err(ApplicationRepositoryError::duplicate_application(
                user_id.get(),
                campaign_id.get(),
            ));
        }

        state.next_application_id += 1;
        let raw_id = state.next_application_id;
        let application_id = ApplicationId::new(raw_id).map_err(|err| {
            ApplicationRepositoryError::corrupted(format!("generated id invalid: {err}"))
        })?;

        state.applications.push(Application {
            id: application_id,
            user_id,
            campaign_id,
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
        });

        let current = campaign.current_participants + 1;
        if let Some(stored) = state.campaigns.get_mut(&campaign_id.get()) {
            stored.current_participants = current;
        }

        Ok(ApplicationReceipt {
            application_id,
            current_participants: current,
        })
    }

    async fn list_for_campaign(
        &self,
        campaign_id: CampaignId,
        filter: ApplicationListFilter,
    ) -> Result<ApplicationPage, ApplicationRepositoryError> {
        let state = self.state.lock().expect("store lock poisoned");

        if !state.campaigns.contains_key(&campaign_id.get()) {
            return Err(ApplicationRepositoryError::campaign_missing(
                campaign_id.get(),
            ));
        }

        let mut matching: Vec<Application> = state
            .applications
            .iter()
            .filter(|application| application.campaign_id == campaign_id)
            .filter(|application| {
                filter
                    .status
                    .is_none_or(|status| application.status == status)
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.applied_at
                .cmp(&a.applied_at)
                .then(b.id.get().cmp(&a.id.get()))
        });

        let total = matching.len() as i64;
        let offset = usize::try_from(filter.page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(filter.page.limit()).unwrap_or(usize::MAX);
        let applications = matching.into_iter().skip(offset).take(limit).collect();

        Ok(ApplicationPage {
            applications,
            total,
        })
    }
}

/// Bookmark store with the same toggle/remove contract as the SQL adapter,
/// including an injectable lost race on the next insert.
#[derive(Default)]
pub struct InMemoryBookmarkStore {
    rows: Mutex<Vec<(i64, i64)>>,
    race_next_insert: AtomicBool,
}

impl InMemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a concurrent toggle winning the next insert: the row appears
    /// and the caller's insert reports [`BookmarkRepositoryError::Raced`].
    pub fn race_next_insert(&self) {
        self.race_next_insert.store(true, Ordering::SeqCst);
    }

    pub fn holds_row(&self, user_id: UserId, campaign_id: CampaignId) -> bool {
        let rows = self.rows.lock().expect("store lock poisoned");
        rows.contains(&(user_id.get(), campaign_id.get()))
    }
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarkStore {
    async fn toggle(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<bool, BookmarkRepositoryError> {
        let mut rows = self.rows.lock().expect("store lock poisoned");
        let pair = (user_id.get(), campaign_id.get());

        if let Some(position) = rows.iter().position(|row| *row == pair) {
            rows.remove(position);
            return Ok(false);
        }

        if self.race_next_insert.swap(false, Ordering::SeqCst) {
            rows.push(pair);
            return Err(BookmarkRepositoryError::raced(
                user_id.get(),
                campaign_id.get(),
            ));
        }

        rows.push(pair);
        Ok(true)
    }

    async fn remove(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<bool, BookmarkRepositoryError> {
        let mut rows = self.rows.lock().expect("store lock poisoned");
        let pair = (user_id.get(), campaign_id.get());

        match rows.iter().position(|row| *row == pair) {
            Some(position) => {
                rows.remove(position);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
