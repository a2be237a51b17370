use skillup_core::model::{Catalog, CourseId};
use skillup_core::navigation::{CourseDetailParams, Destination, NavPhase, Screen};

use super::test_harness::{setup_booting_harness, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn booting_renders_loading() {
    let mut harness = setup_view_harness(None, |_, _| {}).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading..."), "missing loading text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_without_saved_user_shows_form_only() {
    let mut harness = setup_view_harness(None, |nav, user| {
        nav.hydrated(user).unwrap();
    })
    .await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign in"), "missing submit button in {html}");
    assert!(html.contains("Inteligência Artificial"), "missing area option in {html}");
    assert!(!html.contains("Continue as"), "unexpected saved session in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_offers_saved_user() {
    let mut harness = setup_view_harness(Some("ana"), |nav, user| {
        nav.hydrated(user).unwrap();
    })
    .await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Continue as ana"), "missing saved session in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_shows_welcome_and_progress() {
    let mut harness = setup_view_harness(Some("ana"), |nav, user| {
        nav.hydrated(user).unwrap();
        nav.continue_saved_session().unwrap();
    })
    .await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome back, ana!"), "missing welcome in {html}");
    assert!(html.contains("25% complete"), "missing progress in {html}");
    assert!(
        html.contains("Introdução à Inteligência Artificial"),
        "missing recommended track in {html}"
    );
    assert!(!html.contains("Visitor"), "drawer header should name the user in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn catalog_lists_builtin_courses() {
    let mut harness = setup_view_harness(Some("ana"), |nav, user| {
        nav.hydrated(user).unwrap();
        nav.continue_saved_session().unwrap();
        nav.navigate(Destination::Catalog).unwrap();
    })
    .await;

    harness.rebuild();
    let html = harness.render();
    for course in Catalog::builtin().courses() {
        assert!(html.contains(course.title()), "missing {} in {html}", course.title());
    }
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_without_payload_uses_placeholders() {
    let mut harness = setup_view_harness(Some("ana"), |nav, user| {
        nav.hydrated(user).unwrap();
        nav.continue_saved_session().unwrap();
        nav.open_course(CourseDetailParams::new(CourseId::recommended()))
            .unwrap();
    })
    .await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Mark module as completed"), "missing action in {html}");
    assert!(html.contains("Area • —"), "missing placeholders in {html}");
    assert!(!html.contains("Welcome back"), "detail should cover the shell in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_shows_user_details() {
    let mut harness = setup_view_harness(Some("ana"), |nav, user| {
        nav.hydrated(user).unwrap();
        nav.continue_saved_session().unwrap();
        nav.navigate(Destination::Profile).unwrap();
    })
    .await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Area: Inteligência Artificial"), "missing area in {html}");
    assert!(html.contains("Progress: 25%"), "missing progress in {html}");
    assert!(html.contains("Edit profile"), "missing edit button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completed_module_shows_on_progress_screen() {
    let mut harness = setup_view_harness(Some("ana"), |nav, user| {
        nav.hydrated(user).unwrap();
        nav.continue_saved_session().unwrap();
        nav.navigate(Destination::Progress).unwrap();
    })
    .await;
    harness.session.complete_module().await.expect("complete module");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("40% complete"), "missing updated progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hydration_without_saved_user_lands_on_login() {
    let mut harness = setup_booting_harness(None).await;
    harness.rebuild();
    assert!(harness.render().contains("Loading..."));

    harness.session.load().await;
    harness.observe_session();

    let nav = harness.navigator();
    assert_eq!(nav.phase(), NavPhase::Unauthenticated);
    assert_eq!(nav.screen(), Screen::Login);
    assert_eq!(nav.saved_session(), None);
    let html = harness.render();
    assert!(html.contains("Sign in"), "missing login form in {html}");
    assert!(!html.contains("Continue as"), "unexpected saved session in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hydration_with_saved_user_offers_to_continue() {
    let mut harness = setup_booting_harness(Some("ana")).await;
    harness.rebuild();

    harness.session.load().await;
    harness.observe_session();

    let nav = harness.navigator();
    assert_eq!(nav.screen(), Screen::Login);
    assert_eq!(nav.saved_session().map(|u| u.as_str()), Some("ana"));
    let html = harness.render();
    assert!(html.contains("Continue as ana"), "missing saved session in {html}");

    harness.navigate(|nav| nav.continue_saved_session()).unwrap();
    let nav = harness.navigator();
    assert_eq!(nav.screen(), Screen::Dashboard);
    assert!(!nav.can_go_back());
    assert!(harness.render().contains("Welcome back, ana!"));
}

#[tokio::test(flavor = "current_thread")]
async fn sign_in_enters_shell_without_back_history() {
    let mut harness = setup_booting_harness(None).await;
    harness.rebuild();
    harness.session.load().await;
    harness.observe_session();

    harness.session.sign_in("ana", "1234").await.expect("sign in");
    harness.signed_in();

    let nav = harness.navigator();
    assert_eq!(nav.phase(), NavPhase::Authenticated);
    assert_eq!(nav.screen(), Screen::Dashboard);
    assert!(!nav.can_go_back());
    let html = harness.render();
    assert!(html.contains("Welcome back, ana!"), "missing dashboard in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn losing_the_session_returns_to_login() {
    let mut harness = setup_booting_harness(Some("ana")).await;
    harness.rebuild();
    harness.session.load().await;
    harness.observe_session();
    harness.navigate(|nav| nav.continue_saved_session()).unwrap();
    harness.navigate(|nav| nav.navigate(Destination::Catalog)).unwrap();

    harness.session.sign_out().await.expect("sign out");
    harness.observe_session();

    let nav = harness.navigator();
    assert_eq!(nav.phase(), NavPhase::Unauthenticated);
    assert_eq!(nav.screen(), Screen::Login);
    assert!(!nav.can_go_back());
    assert_eq!(nav.saved_session(), None);
    let html = harness.render();
    assert!(html.contains("Sign in"), "missing login form in {html}");
    assert!(!html.contains("Continue as"), "stale saved session in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn drawer_sign_out_resets_to_login() {
    let mut harness = setup_booting_harness(None).await;
    harness.rebuild();
    harness.session.load().await;
    harness.observe_session();
    harness.session.sign_in("ana", "1234").await.expect("sign in");
    harness.signed_in();

    harness.session.sign_out().await.expect("sign out");
    harness.signed_out();

    let nav = harness.navigator();
    assert_eq!(nav.screen(), Screen::Login);
    assert_eq!(nav.history().len(), 1);
}
