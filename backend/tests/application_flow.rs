//! Behavioural tests for the apply and bookmark use cases over the
//! in-memory stores.

mod support;

use std::sync::Arc;

use rstest::{fixture, rstest};

use backend::domain::ports::{
    ApplicationCommand, ApplicationListFilter, ApplicationQuery, BookmarkCommand,
    FixtureApplicationNotifier,
};
use backend::domain::{
    ApplicationService, ApplicationStatus, BookmarkToggleService, CampaignId, ErrorCode, UserId,
};
use support::{InMemoryApplicationStore, InMemoryBookmarkStore};

#[fixture]
fn user() -> UserId {
    UserId::new(3).expect("fixture id")
}

#[fixture]
fn campaign() -> CampaignId {
    CampaignId::new(9).expect("fixture id")
}

fn service_over(
    store: Arc<InMemoryApplicationStore>,
) -> ApplicationService<InMemoryApplicationStore> {
    ApplicationService::new(store, Arc::new(FixtureApplicationNotifier))
}

#[rstest]
#[actix_rt::test]
async fn apply_records_a_pending_row_and_consumes_one_slot(user: UserId, campaign: CampaignId) {
    let store = Arc::new(InMemoryApplicationStore::new());
    store.seed_campaign(campaign, 10, 4);
    let service = service_over(store.clone());

    let outcome = service.apply(user, campaign).await.expect("apply succeeds");

    assert_eq!(outcome.current_participants, 5);
    assert_eq!(store.participant_count(campaign), 5);
    let rows = store.application_rows(campaign);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, ApplicationStatus::Pending);
    assert_eq!(rows[0].user_id, user);
}

#[rstest]
#[actix_rt::test]
async fn apply_to_a_full_campaign_leaves_no_residue(user: UserId, campaign: CampaignId) {
    let store = Arc::new(InMemoryApplicationStore::new());
    store.seed_campaign(campaign, 4, 4);
    let service = service_over(store.clone());

    let err = service.apply(user, campaign).await.expect_err("campaign is full");

    assert_eq!(err.code(), ErrorCode::CapacityExceeded);
    assert_eq!(store.participant_count(campaign), 4);
    assert!(store.application_rows(campaign).is_empty());
}

#[rstest]
#[actix_rt::test]
async fn repeating_a_rejected_apply_is_harmless(user: UserId, campaign: CampaignId) {
    let store = Arc::new(InMemoryApplicationStore::new());
    store.seed_campaign(campaign, 4, 4);
    let service = service_over(store.clone());

    // A failed apply writes nothing, so resubmitting the identical request
    // keeps returning the same outcome without disturbing the ledger.
    for _ in 0..3 {
        let err = service.apply(user, campaign).await.expect_err("campaign is full");
        assert_eq!(err.code(), ErrorCode::CapacityExceeded);
        assert_eq!(store.participant_count(campaign), 4);
        assert!(store.application_rows(campaign).is_empty());
    }
}

#[rstest]
#[actix_rt::test]
async fn repeating_a_duplicate_apply_is_harmless(user: UserId, campaign: CampaignId) {
    let store = Arc::new(InMemoryApplicationStore::new());
    store.seed_campaign(campaign, 10, 0);
    let service = service_over(store.clone());

    service.apply(user, campaign).await.expect("first apply");

    for _ in 0..3 {
        let err = service
            .apply(user, campaign)
            .await
            .expect_err("pair already applied");
        assert_eq!(err.code(), ErrorCode::AlreadyApplied);
        assert_eq!(store.participant_count(campaign), 1);
        assert_eq!(store.application_rows(campaign).len(), 1);
    }
}

#[rstest]
#[actix_rt::test]
async fn a_second_apply_by_the_same_user_is_rejected(user: UserId, campaign: CampaignId) {
    let store = Arc::new(InMemoryApplicationStore::new());
    store.seed_campaign(campaign, 10, 0);
    let service = service_over(store.clone());

    service.apply(user, campaign).await.expect("first apply");
    let err = service
        .apply(user, campaign)
        .await
        .expect_err("second apply duplicates");

    assert_eq!(err.code(), ErrorCode::AlreadyApplied);
    assert_eq!(store.participant_count(campaign), 1);
    assert_eq!(store.application_rows(campaign).len(), 1);
}

#[rstest]
#[actix_rt::test]
async fn apply_to_an_unknown_campaign_is_not_found(user: UserId, campaign: CampaignId) {
    let store = Arc::new(InMemoryApplicationStore::new());
    let service = service_over(store);

    let err = service
        .apply(user, campaign)
        .await
        .expect_err("campaign missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[actix_rt::test]
async fn a_transient_store_failure_surfaces_as_unavailable_and_changes_nothing(
    user: UserId,
    campaign: CampaignId,
) {
    let store = Arc::new(InMemoryApplicationStore::new());
    store.seed_campaign(campaign, 10, 2);
    store.fail_next_apply();
    let service = service_over(store.clone());

    let err = service.apply(user, campaign).await.expect_err("store aborted");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(store.participant_count(campaign), 2);
    assert!(store.application_rows(campaign).is_empty());

    // The same request succeeds on retry once the store recovers.
    let outcome = service.apply(user, campaign).await.expect("retry succeeds");
    assert_eq!(outcome.current_participants, 3);
}

#[rstest]
#[actix_rt::test]
async fn listing_filters_by_status_and_pages_newest_first(campaign: CampaignId) {
    let store = Arc::new(InMemoryApplicationStore::new());
    store.seed_campaign(campaign, 100, 0);
    let service = service_over(store);

    for raw in 1..=5 {
        let applicant = UserId::new(raw).expect("fixture id");
        service.apply(applicant, campaign).await.expect("seed apply");
    }

    let filter = ApplicationListFilter {
        status: Some(ApplicationStatus::Pending),
        page: backend::domain::pagination::PageRequest::new(2, 0).expect("valid window"),
    };
    let page = service
        .list_for_campaign(campaign, filter)
        .await
        .expect("listing succeeds");

    assert_eq!(page.total, 5);
    assert_eq!(page.applications.len(), 2);
    // Newest first: the last applicant leads the page.
    assert_eq!(page.applications[0].user_id.get(), 5);

    let rejected_filter = ApplicationListFilter {
        status: Some(ApplicationStatus::Rejected),
        ..ApplicationListFilter::default()
    };
    let empty = service
        .list_for_campaign(campaign, rejected_filter)
        .await
        .expect("listing succeeds");
    assert_eq!(empty.total, 0);
    assert!(empty.applications.is_empty());
}

#[rstest]
#[actix_rt::test]
async fn bookmark_toggle_alternates_between_states(user: UserId, campaign: CampaignId) {
    let store = Arc::new(InMemoryBookmarkStore::new());
    let service = BookmarkToggleService::new(store.clone());

    let on = service.toggle(user, campaign).await.expect("first toggle");
    assert!(on.is_bookmarked);
    assert!(store.holds_row(user, campaign));

    let off = service.toggle(user, campaign).await.expect("second toggle");
    assert!(!off.is_bookmarked);
    assert!(!store.holds_row(user, campaign));
}

#[rstest]
#[actix_rt::test]
async fn a_lost_toggle_race_settles_on_the_delete_outcome(user: UserId, campaign: CampaignId) {
    let store = Arc::new(InMemoryBookmarkStore::new());
    store.race_next_insert();
    let service = BookmarkToggleService::new(store.clone());

    let state = service.toggle(user, campaign).await.expect("retry settles");

    // The losing insert re-ran as a delete against the winner's row.
    assert!(!state.is_bookmarked);
    assert!(!store.holds_row(user, campaign));
}
