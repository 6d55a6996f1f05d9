use tokio::time::sleep;

use super::*;
use crate::tabs::PanelPhase;

const SETTLE: Duration = Duration::from_millis(DEFAULT_SETTLE_MS);

fn navigator() -> TabNavigator {
    TabNavigator::new(TabController::default(), SETTLE)
}

#[tokio::test(start_paused = true)]
async fn transition_completes_after_settle_delay() {
    let nav = navigator();
    assert!(matches!(nav.select_panel(1), Selection::Started(_)));
    assert_eq!(nav.snapshot(), TabSnapshot { active: 0, transitioning: true, pending: Some(1) });

    sleep(SETTLE / 2).await;
    assert!(nav.snapshot().transitioning);

    sleep(SETTLE).await;
    assert_eq!(nav.snapshot(), TabSnapshot { active: 1, transitioning: false, pending: None });
    assert_eq!(nav.with_controller(|c| c.phase(1)), PanelPhase::Active);
}

#[tokio::test(start_paused = true)]
async fn requests_during_transition_are_dropped() {
    let nav = navigator();
    nav.select_panel(2);
    assert_eq!(nav.select_panel(3), Selection::Busy);

    sleep(SETTLE + Duration::from_millis(1)).await;
    assert_eq!(nav.snapshot().active, 2);

    // Nothing was queued behind the first transition.
    sleep(SETTLE * 3).await;
    assert_eq!(nav.snapshot().active, 2);
}

#[tokio::test(start_paused = true)]
async fn selecting_after_settle_starts_a_new_transition() {
    let nav = navigator();
    nav.select_panel(1);
    sleep(SETTLE + Duration::from_millis(1)).await;

    assert_eq!(nav.select_panel(1), Selection::AlreadyActive);
    assert!(matches!(nav.select_panel(0), Selection::Started(_)));
    sleep(SETTLE + Duration::from_millis(1)).await;
    assert_eq!(nav.snapshot().active, 0);
}

#[tokio::test(start_paused = true)]
async fn cancelled_transition_never_completes() {
    let nav = navigator();
    nav.select_panel(3);
    assert!(nav.cancel_pending());
    assert!(!nav.cancel_pending());

    sleep(SETTLE * 2).await;
    assert_eq!(nav.snapshot(), TabSnapshot { active: 0, transitioning: false, pending: None });
}

#[tokio::test(start_paused = true)]
async fn new_transition_after_cancel_uses_its_own_timer() {
    let nav = navigator();
    nav.select_panel(1);
    sleep(SETTLE / 2).await;
    nav.cancel_pending();

    nav.select_panel(2);
    // The cancelled timer would have fired here.
    sleep(SETTLE / 2 + Duration::from_millis(1)).await;
    assert_eq!(nav.snapshot(), TabSnapshot { active: 0, transitioning: true, pending: Some(2) });

    sleep(SETTLE / 2).await;
    assert_eq!(nav.snapshot().active, 2);
    assert!(!nav.snapshot().transitioning);
}

#[tokio::test(start_paused = true)]
async fn unknown_panel_schedules_nothing() {
    let nav = navigator();
    assert_eq!(nav.select_panel(7), Selection::UnknownPanel);
    assert!(!nav.cancel_pending());
    assert!(!nav.snapshot().transitioning);
}
