//! Integration tests for tab routing and session suspension

use repset::app::{HomeScreen, NavigationState, Tab, ViewTarget};
use repset::plan::REST_DAY_INDEX;

#[test]
fn test_default_route_is_home() {
    let nav = NavigationState::new();
    assert_eq!(nav.current_view(), ViewTarget::Tab(Tab::Home));
}

#[test]
fn test_tab_cycle_round_trip() {
    let mut nav = NavigationState::new();

    nav.select_next_tab();
    assert_eq!(nav.active_tab(), Tab::Coach);
    nav.select_next_tab();
    assert_eq!(nav.active_tab(), Tab::Settings);
    nav.select_next_tab();
    assert_eq!(nav.active_tab(), Tab::Home);

    nav.select_previous_tab();
    assert_eq!(nav.active_tab(), Tab::Settings);
}

#[test]
fn test_session_end_returns_to_originating_tab() {
    for tab in [Tab::Home, Tab::Coach, Tab::Settings] {
        let mut nav = NavigationState::new();
        nav.select_tab(tab);

        nav.start_session("Ab Burner", 8);
        assert_eq!(nav.current_view(), ViewTarget::Session);

        // no amount of tab input changes the suspended tab
        nav.select_next_tab();
        nav.select_tab(Tab::Settings);

        nav.end_session();
        assert_eq!(nav.current_view(), ViewTarget::Tab(tab));
    }
}

#[test]
fn test_home_screen_feeds_the_session_label() {
    let mut nav = NavigationState::new();
    let home = HomeScreen::new(0);

    let exercise = home.selected_exercise().expect("Monday has cards");
    nav.start_session(exercise, 8);

    let session = nav.active_session().expect("session just started");
    assert_eq!(session.exercise_label(), "Core Activation");
    assert_eq!(session.current_rep(), session.total_reps());
    assert!(!session.is_paused());
}

#[test]
fn test_rest_day_offers_no_session_to_start() {
    let home = HomeScreen::new(REST_DAY_INDEX);
    assert!(home.selected_exercise().is_none());
}

#[test]
fn test_session_state_survives_tab_input() {
    let mut nav = NavigationState::new();
    nav.start_session("Interval Sprints", 6);

    if let Some(session) = nav.active_session_mut() {
        session.tick();
        session.toggle_pause();
    }
    nav.select_next_tab();

    let session = nav.active_session().expect("still active");
    assert_eq!(session.elapsed_seconds(), 1);
    assert!(session.is_paused());
}
