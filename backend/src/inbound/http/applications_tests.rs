//! Tests for campaign application HTTP handlers.

use super::*;
use crate::domain::ports::{
    ApplicationPage, FixtureApplicationQuery, FixtureBookmarkCommand, MockApplicationCommand,
    MockApplicationQuery,
};
use crate::domain::{ApplicationId, ApplicationStatus, Error, UserId};
use crate::inbound::http::test_utils::test_session_middleware;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, test as actix_test, web};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .service(
            web::scope("/api/v1")
                .service(apply_to_campaign)
                .service(list_campaign_applications)
                .route(
                    "/test-login/{id}",
                    web::post().to(
                        |session: SessionContext, path: web::Path<i64>| async move {
                            let user_id = UserId::new(path.into_inner())
                                .map_err(|error| Error::invalid_request(error.to_string()))?;
                            session.persist_user(user_id)?;
                            Ok::<_, Error>(HttpResponse::Ok().finish())
                        },
                    ),
                ),
        )
}

fn state_with_command(command: MockApplicationCommand) -> HttpState {
    HttpState::new(
        Arc::new(command),
        Arc::new(FixtureApplicationQuery),
        Arc::new(FixtureBookmarkCommand),
    )
}

fn state_with_query(query: MockApplicationQuery) -> HttpState {
    HttpState::new(
        Arc::new(MockApplicationCommand::new()),
        Arc::new(query),
        Arc::new(FixtureBookmarkCommand),
    )
}

async fn login_and_get_cookie(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    user_id: i64,
) -> actix_web::cookie::Cookie<'static> {
    let login_req = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/test-login/{user_id}"))
        .to_request();
    let login_res = actix_test::call_service(app, login_req).await;
    assert!(login_res.status().is_success());
    login_res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

#[actix_web::test]
async fn apply_returns_the_recorded_receipt() {
    let mut command = MockApplicationCommand::new();
    command
        .expect_apply()
        .withf(|user_id, campaign_id| user_id.get() == 3 && campaign_id.get() == 9)
        .once()
        .returning(|_, _| {
            Ok(ApplyOutcome {
                application_id: ApplicationId::new(41).expect("fixture id"),
                current_participants: 5,
            })
        });
    let app = actix_test::init_service(test_app(state_with_command(command))).await;
    let cookie = login_and_get_cookie(&app, 3).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/campaigns/9/apply")
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("applicationId").and_then(Value::as_i64), Some(41));
    assert_eq!(
        body.get("currentParticipants").and_then(Value::as_i64),
        Some(5)
    );
}

#[actix_web::test]
async fn apply_without_a_session_is_unauthorized() {
    let app = actix_test::init_service(test_app(state_with_command(
        MockApplicationCommand::new(),
    )))
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/campaigns/9/apply")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn apply_to_a_full_campaign_is_a_conflict() {
    let mut command = MockApplicationCommand::new();
    command.expect_apply().once().returning(|_, campaign_id| {
        Err(Error::capacity_exceeded(format!(
            "campaign {campaign_id} is fully booked"
        )))
    });
    let app = actix_test::init_service(test_app(state_with_command(command))).await;
    let cookie = login_and_get_cookie(&app, 3).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/campaigns/9/apply")
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("capacity_exceeded")
    );
}

#[actix_web::test]
async fn apply_rejects_a_non_positive_campaign_id() {
    let app = actix_test::init_service(test_app(state_with_command(
        MockApplicationCommand::new(),
    )))
    .await;
    let cookie = login_and_get_cookie(&app, 3).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/campaigns/0/apply")
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
}

#[actix_web::test]
async fn listing_serialises_the_page_and_echoes_the_window() {
    let mut query = MockApplicationQuery::new();
    query
        .expect_list_for_campaign()
        .withf(|campaign_id, filter| {
            campaign_id.get() == 9
                && filter.status == Some(ApplicationStatus::Pending)
                && filter.page.limit() == 10
                && filter.page.offset() == 20
        })
        .once()
        .returning(|campaign_id, _| {
            Ok(ApplicationPage {
                applications: vec![Application {
                    id: ApplicationId::new(41).expect("fixture id"),
                    user_id: UserId::new(3).expect("fixture id"),
                    campaign_id,
                    status: ApplicationStatus::Pending,
                    applied_at: Utc::now(),
                }],
                total: 31,
            })
        });
    let app = actix_test::init_service(test_app(state_with_query(query))).await;
    let cookie = login_and_get_cookie(&app, 1).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/campaigns/9/applications?status=pending&limit=10&offset=20")
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("total").and_then(Value::as_i64), Some(31));
    assert_eq!(body.get("limit").and_then(Value::as_i64), Some(10));
    assert_eq!(body.get("offset").and_then(Value::as_i64), Some(20));
    let first = &body["applications"][0];
    assert_eq!(first.get("id").and_then(Value::as_i64), Some(41));
    assert_eq!(first.get("status").and_then(Value::as_str), Some("PENDING"));
    assert_eq!(first.get("campaignId").and_then(Value::as_i64), Some(9));
}

#[actix_web::test]
async fn listing_rejects_an_unknown_status_filter() {
    let app = actix_test::init_service(test_app(state_with_query(MockApplicationQuery::new())))
        .await;
    let cookie = login_and_get_cookie(&app, 1).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/campaigns/9/applications?status=CANCELLED")
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    let details = body.get("details").expect("details present");
    assert_eq!(
        details.get("code").and_then(Value::as_str),
        Some("invalid_status")
    );
}

#[actix_web::test]
async fn listing_rejects_an_oversized_limit() {
    let app = actix_test::init_service(test_app(state_with_query(MockApplicationQuery::new())))
        .await;
    let cookie = login_and_get_cookie(&app, 1).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/campaigns/9/applications?limit=101")
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
