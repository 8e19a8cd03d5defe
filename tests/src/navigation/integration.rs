#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use choromap_common::model::click::{ClickEvent, NavigationIntent};
use choromap_common::model::status::StatusLevel;
use choromap_core::navigation::TimedNavigation;
use choromap_core::ports::CancelToken;
use choromap_core::render::{ChoroplethRenderer, RawClick};
use choromap_core::{
    BoundarySource, ClickNavigator, ClickOutcome, NavState, PropertyNames, RegionLinkResolver,
    session,
};
use choromap_integration_tests::{ManualNavigation, RecordedLauncher, RecordedStatus, squares};
use tokio::sync::mpsc;

fn boundary_ab() -> Arc<BoundarySource> {
    let text = squares("NAME_1", &["A", "B"]);
    Arc::new(BoundarySource::parse(&text, &PropertyNames::new("NAME_1")).unwrap())
}

fn renderer_ab() -> ChoroplethRenderer {
    ChoroplethRenderer::new(boundary_ab())
}

/// A click on `A` shows the message, then navigates exactly once after the delay.
#[tokio::test(start_paused = true)]
async fn click_navigates_once_after_delay() {
    let launcher = RecordedLauncher::default();
    let status = RecordedStatus::default();
    let (navigation, mut fired) = TimedNavigation::new(launcher.clone());
    let mut navigator = ClickNavigator::new(
        renderer_ab(),
        RegionLinkResolver::fixed("https://x.test/"),
        navigation,
        status.clone(),
    );

    navigator.handle_raw(RawClick::Feature("A".to_string()));

    assert_eq!(
        status.messages(),
        vec![
            ("You clicked on: A".to_string(), StatusLevel::Success),
            ("Redirecting to https://x.test/ ...".to_string(), StatusLevel::Info),
        ]
    );
    assert!(launcher.opened().is_empty(), "navigated before the delay");

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(launcher.opened().is_empty(), "navigated before the delay");

    let token = fired.recv().await.unwrap();
    assert!(navigator.navigation_fired(token));
    assert!(navigator.is_idle());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(launcher.opened(), vec!["https://x.test/".to_string()]);
}

/// Clicking `B` while `A` is pending cancels `A`; only `B` is ever opened.
#[tokio::test(start_paused = true)]
async fn second_click_supersedes_first() {
    let launcher = RecordedLauncher::default();
    let (navigation, mut fired) = TimedNavigation::new(launcher.clone());
    let resolver = RegionLinkResolver::templated("https://x.test/{region}");
    let mut navigator =
        ClickNavigator::new(renderer_ab(), resolver, navigation, RecordedStatus::default());

    navigator.handle_click(ClickEvent::on_region("A"));
    let first = navigator.pending().unwrap();
    tokio::time::sleep(Duration::from_millis(400)).await;
    navigator.handle_click(ClickEvent::on_region("B"));

    let token = fired.recv().await.unwrap();
    assert_ne!(token, first);
    assert!(navigator.navigation_fired(token));

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(fired.try_recv().is_err(), "cancelled navigation fired");
    assert_eq!(launcher.opened(), vec!["https://x.test/B".to_string()]);
    assert_eq!(navigator.navigation().pending_count(), 0);
}

#[test]
fn superseded_token_is_observed_cancelled() {
    let mut navigator = ClickNavigator::new(
        renderer_ab(),
        RegionLinkResolver::fixed("https://x.test/"),
        ManualNavigation::default(),
        RecordedStatus::default(),
    );

    navigator.handle_click(ClickEvent::on_region("A"));
    navigator.handle_click(ClickEvent::on_region("B"));

    assert_eq!(navigator.navigation().cancelled, vec![CancelToken(1)]);
    assert_eq!(navigator.navigation().scheduled.len(), 2);
    assert!(!navigator.navigation_fired(CancelToken(1)));
    assert!(navigator.navigation_fired(CancelToken(2)));
}

#[test]
fn missed_click_does_nothing() {
    let status = RecordedStatus::default();
    let mut navigator = ClickNavigator::new(
        renderer_ab(),
        RegionLinkResolver::fixed("https://x.test/"),
        ManualNavigation::default(),
        status.clone(),
    );

    let outcome = navigator.handle_click(ClickEvent::missed(42.0, 42.0));

    assert_eq!(outcome, ClickOutcome::Missed);
    assert!(status.messages().is_empty());
    assert!(navigator.navigation().scheduled.is_empty());
    assert_eq!(*navigator.state(), NavState::Idle);
}

#[test]
fn unmapped_region_warns_without_navigating() {
    let status = RecordedStatus::default();
    let mut navigator = ClickNavigator::new(
        renderer_ab(),
        RegionLinkResolver::table([("A", "https://x.test/a")], None),
        ManualNavigation::default(),
        status.clone(),
    );

    navigator.handle_click(ClickEvent::on_region("B"));

    assert_eq!(
        status.messages(),
        vec![("No URL configured for: B".to_string(), StatusLevel::Warning)]
    );
    assert!(navigator.navigation().scheduled.is_empty());
    assert!(navigator.is_idle());
}

/// Raw clicks flow through the session loop into a single navigation.
#[tokio::test(start_paused = true)]
async fn raw_clicks_drive_a_session() {
    let launcher = RecordedLauncher::default();
    let status = RecordedStatus::default();
    let (navigation, fired) = TimedNavigation::new(launcher.clone());
    let resolver = RegionLinkResolver::table(
        [("A", "https://x.test/a"), ("B", "https://x.test/b")],
        None,
    );
    let navigator = ClickNavigator::new(renderer_ab(), resolver, navigation, status.clone())
        .with_delay(Duration::from_millis(300));

    let (clicks_tx, clicks_rx) = mpsc::unbounded_channel();
    clicks_tx.send(RawClick::Point { x: 7.0, y: 7.0 }).unwrap();
    clicks_tx.send(RawClick::Point { x: 0.5, y: 0.5 }).unwrap();
    clicks_tx.send(RawClick::Feature("B".to_string())).unwrap();
    drop(clicks_tx);

    let navigator = session::run(navigator, clicks_rx, fired).await;

    assert!(navigator.is_idle());
    assert_eq!(navigator.last_clicked(), Some("B"));
    assert_eq!(launcher.opened(), vec!["https://x.test/b".to_string()]);
    assert_eq!(
        status.messages(),
        vec![
            ("You clicked on: A".to_string(), StatusLevel::Success),
            ("Redirecting to https://x.test/a ...".to_string(), StatusLevel::Info),
            ("You clicked on: B".to_string(), StatusLevel::Success),
            ("Redirecting to https://x.test/b ...".to_string(), StatusLevel::Info),
        ]
    );
}

/// A click on the edge shared by two regions goes to the first one in the file.
#[test]
fn click_on_shared_border_is_not_missed() {
    let mut navigator = ClickNavigator::new(
        renderer_ab(),
        RegionLinkResolver::templated("https://x.test/{region}"),
        ManualNavigation::default(),
        RecordedStatus::default(),
    );

    let outcome = navigator.handle_raw(RawClick::Point { x: 1.0, y: 0.5 });

    assert_eq!(
        outcome,
        ClickOutcome::Navigating(NavigationIntent::new("https://x.test/A", Duration::from_secs(1)))
    );
}
