use eduquiz_core::model::Quiz;
use eduquiz_core::model::QuizId;
use services::ApiError;
use storage::session_store::SessionStore;

use crate::context::AuthState;

use super::test_harness::{StubApi, ViewKind, fixture_session, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn landing_view_offers_both_roles() {
    let mut harness =
        setup_view_harness(ViewKind::Landing, StubApi::default(), AuthState::Anonymous).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("I'm a Teacher"), "missing teacher role in {html}");
    assert!(html.contains("I'm a Student"), "missing student role in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn teacher_auth_renders_login_form() {
    let mut harness =
        setup_view_harness(ViewKind::TeacherAuth, StubApi::default(), AuthState::Anonymous).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Teacher Login"), "missing heading in {html}");
    assert!(html.contains("Log In"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_classroom_cards() {
    let mut harness = setup_view_harness(
        ViewKind::TeacherDashboard,
        StubApi::default(),
        AuthState::Authenticated(fixture_session()),
    )
    .await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Welcome, Ms Jane"), "missing header in {html}");
    assert!(html.contains("Algebra"), "missing classroom in {html}");
    assert!(html.contains("1 students | 1 quizzes"), "missing counts in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_failure_offers_retry() {
    let stub = StubApi {
        classrooms: Err(ApiError::Server("boom".into())),
        ..StubApi::default()
    };
    let mut harness = setup_view_harness(
        ViewKind::TeacherDashboard,
        stub,
        AuthState::Authenticated(fixture_session()),
    )
    .await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Failed to load classrooms. Please try again."),
        "missing error copy in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_unauthorized_clears_stored_session() {
    let stub = StubApi {
        classrooms: Err(ApiError::Unauthorized),
        ..StubApi::default()
    };
    let mut harness = setup_view_harness(
        ViewKind::TeacherDashboard,
        stub,
        AuthState::Authenticated(fixture_session()),
    )
    .await;
    assert!(harness.store.load().await.unwrap().is_some());

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    assert!(
        harness.store.load().await.unwrap().is_none(),
        "session should be cleared after a 401"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn student_dashboard_prompts_for_email() {
    let mut harness = setup_view_harness(
        ViewKind::StudentDashboard,
        StubApi::default(),
        AuthState::Anonymous,
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Student Login"), "missing heading in {html}");
    assert!(html.contains("Find my classrooms"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_form_renders_launch_link_and_results_jump() {
    let mut harness = setup_view_harness(
        ViewKind::QuizForm("q1".to_owned()),
        StubApi::default(),
        AuthState::Anonymous,
    )
    .await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Open the quiz form"), "missing launch in {html}");
    assert!(html.contains("https://forms.example/q1"), "missing link in {html}");
    assert!(html.contains("View results"), "missing results jump in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_form_without_link_shows_error() {
    let stub = StubApi {
        quiz: Ok(Quiz {
            id: QuizId::new("q1"),
            title: "Week 1".into(),
            google_form_link: None,
        }),
        ..StubApi::default()
    };
    let mut harness =
        setup_view_harness(ViewKind::QuizForm("q1".to_owned()), stub, AuthState::Anonymous).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("This quiz has no form link yet"),
        "missing error copy in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_renders_score_and_verdict() {
    let mut harness =
        setup_view_harness(ViewKind::Result, StubApi::default(), AuthState::Anonymous).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("You scored 4 out of 5"), "missing score in {html}");
    assert!(html.contains("80%"), "missing percentage in {html}");
    assert!(
        html.contains("Great job! You passed the quiz."),
        "missing verdict in {html}"
    );
    assert!(html.contains("Correct answer: 6"), "missing correction in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_failure_offers_try_again() {
    let stub = StubApi {
        form_id: Err(ApiError::NotFound("No form submissions found".into())),
        ..StubApi::default()
    };
    let mut harness = setup_view_harness(ViewKind::Result, stub, AuthState::Anonymous).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("No form submissions found"),
        "missing error copy in {html}"
    );
    assert!(html.contains("Try Again"), "missing retry in {html}");
}
