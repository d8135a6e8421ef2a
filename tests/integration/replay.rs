//! Full replay scenarios driven through the session controller.

use std::time::Duration;

use super::common::fixtures::{seeded_session, session_over, TEN};
use splitscope::search::Outcome;
use splitscope::session::play_to_end;
use splitscope::{Highlight, Nav, SessionError, Status};

#[test]
fn test_found_scenario_step_by_step() {
    let mut session = session_over(&TEN);
    let trace = session.start_search(23).unwrap();
    assert_eq!(trace.comparisons(), 3);
    assert_eq!(trace.found_index(), Some(5));

    let view = session.view();
    assert_eq!(view.progress.to_string(), "Step 1 of 4");
    assert_eq!(view.status, Some(Status::Searching));
    assert_eq!(view.highlight_strip(), "==========");

    session.next();
    let view = session.view();
    assert_eq!(view.highlight_strip(), "====^=====");
    assert_eq!(
        view.log_lines().last(),
        Some("Step 1: Array[4] = 17 < 23. Searching right half.")
    );

    session.run_to_end();
    let view = session.view();
    assert_eq!(view.status, Some(Status::Found));
    assert_eq!(view.highlights[5], Highlight::Found);
    assert_eq!(view.title(), "Binary Search Visualization - Found");
    assert_eq!(view.log_lines().count(), 4);
}

#[test]
fn test_not_found_scenario() {
    let mut session = session_over(&[2, 4, 6]);
    let trace = session.start_search(5).unwrap();

    assert_eq!(trace.comparisons(), 2);
    assert!(trace
        .steps()
        .iter()
        .all(|step| step.outcome != Outcome::Equal));

    session.run_to_end();
    let view = session.view();
    assert_eq!(view.status, Some(Status::NotFound));
    assert_eq!(
        view.log_lines().last(),
        Some("Search complete: 5 not found in array after 2 comparisons")
    );
    assert_eq!(view.stats.range_label(), "[2, 1]");
}

#[test]
fn test_empty_array_scenario() {
    let mut session = session_over(&[]);
    let trace = session.start_search(10).unwrap();
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.comparisons(), 0);

    assert_eq!(session.next(), Nav::Moved);
    assert_eq!(session.next(), Nav::AtEnd);
    assert_eq!(session.view().status, Some(Status::NotFound));
}

#[test]
fn test_target_below_every_element_eliminates_all() {
    let mut session = session_over(&[3, 6, 9]);
    session.start_search(1).unwrap();
    session.run_to_end();

    let view = session.view();
    assert_eq!(view.stats.range_label(), "[0, N/A]");
    assert!(view.highlights.iter().all(|h| *h == Highlight::Eliminated));
}

#[test]
fn test_navigation_round_trip_and_saturation() {
    let mut session = session_over(&TEN);
    session.start_search(41).unwrap();

    assert_eq!(session.previous(), Nav::AtStart);
    let first = session.view();

    assert_eq!(session.next(), Nav::Moved);
    assert_eq!(session.previous(), Nav::Moved);
    assert_eq!(session.view(), first);

    session.run_to_end();
    let last = session.view();
    assert_eq!(session.next(), Nav::AtEnd);
    assert_eq!(session.view(), last);
}

#[test]
fn test_generate_then_search_with_seed() {
    let mut a = seeded_session(11);
    let mut b = seeded_session(11);

    let left = a.generate_array(25, true, 64).unwrap().clone();
    let right = b.generate_array(25, true, 64).unwrap().clone();
    assert_eq!(left, right);
    assert_eq!(left.len(), 25);

    let trace = a.start_search(64).unwrap();
    assert!(trace.is_found());
}

#[test]
fn test_controller_errors() {
    let mut session = seeded_session(1);
    assert_eq!(session.start_search(5).unwrap_err(), SessionError::NoArray);
    assert_eq!(
        session.generate_array(5, true, 50).unwrap_err(),
        SessionError::InvalidSize {
            size: 5,
            min: 10,
            max: 50
        }
    );
    assert_eq!(session.current_view(), Err(SessionError::EmptyTrace));
}

#[tokio::test]
async fn test_play_to_end_emits_every_frame() {
    let mut session = session_over(&TEN);
    session.start_search(23).unwrap();

    let mut frames = Vec::new();
    let count = play_to_end(&mut session, Duration::ZERO, |view| {
        frames.push(view.progress.to_string());
    })
    .await
    .unwrap();

    assert_eq!(count, 4);
    assert_eq!(
        frames,
        ["Step 1 of 4", "Step 2 of 4", "Step 3 of 4", "Step 4 of 4"]
    );
    assert!(session.navigator().is_at_end());
}

#[tokio::test]
async fn test_play_to_end_from_middle() {
    let mut session = session_over(&TEN);
    session.start_search(23).unwrap();
    session.next();
    session.next();

    let count = play_to_end(&mut session, Duration::ZERO, |_| {})
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_play_to_end_without_search() {
    let mut session = session_over(&TEN);
    let result = play_to_end(&mut session, Duration::ZERO, |_| {}).await;
    assert_eq!(result, Err(SessionError::EmptyTrace));
}
