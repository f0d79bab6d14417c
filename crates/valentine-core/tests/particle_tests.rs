//! Cursor trail and particle lifetime tests

use std::collections::HashSet;
use std::time::{Duration, Instant};

use valentine_core::particles::{CURSOR_HEART_LIFETIME, CURSOR_SPAWN_INTERVAL};
use valentine_core::CursorTrail;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_two_moves_within_interval_spawn_one_heart() {
    let now = Instant::now();
    let mut trail = CursorTrail::new();

    trail.spawn(10.0, 10.0, now);
    trail.spawn(11.0, 11.0, now + ms(20));
    assert_eq!(trail.hearts().len(), 1);

    trail.spawn(12.0, 12.0, now + CURSOR_SPAWN_INTERVAL);
    assert_eq!(trail.hearts().len(), 2);
}

/// Dropped moves do not reset the throttle window
#[test]
fn test_dropped_moves_are_not_queued() {
    let now = Instant::now();
    let mut trail = CursorTrail::new();

    trail.spawn(0.0, 0.0, now);
    for step in 1..42 {
        assert!(trail.spawn(0.0, 0.0, now + ms(step)).is_none());
    }
    assert!(trail.spawn(0.0, 0.0, now + ms(42)).is_some());
    assert_eq!(trail.hearts().len(), 2);
}

#[test]
fn test_trail_is_eventually_empty() {
    let now = Instant::now();
    let mut trail = CursorTrail::new();

    let mut t = now;
    for i in 0..50 {
        trail.spawn(i as f64, i as f64, t);
        t += ms(50);
    }
    assert!(!trail.hearts().is_empty());

    trail.tick(t + CURSOR_HEART_LIFETIME);
    assert!(trail.hearts().is_empty());
    assert_eq!(trail.pending_timers(), 0);
}

/// No heart outlives its 900ms budget at any observation point
#[test]
fn test_no_heart_outlives_budget() {
    let now = Instant::now();
    let mut trail = CursorTrail::new();
    let mut born = std::collections::HashMap::new();

    for step in 0..100u64 {
        let t = now + ms(step * 37);
        if let Some(id) = trail.spawn(0.0, 0.0, t) {
            born.insert(id, t);
        }
        for heart in trail.hearts() {
            assert!(t.duration_since(born[&heart.id]) < CURSOR_HEART_LIFETIME);
        }
    }
}

#[test]
fn test_cursor_ids_are_monotonic_and_unique() {
    let now = Instant::now();
    let mut trail = CursorTrail::new();

    let ids: Vec<u64> = (0..30)
        .filter_map(|i| trail.spawn(0.0, 0.0, now + ms(i * 45)))
        .collect();

    assert_eq!(ids.len(), 30);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 30);
}

#[test]
fn test_concurrent_hearts_keep_their_own_timers() {
    let now = Instant::now();
    let mut trail = CursorTrail::new();
    trail.spawn(0.0, 0.0, now);
    trail.spawn(0.0, 0.0, now + ms(50));
    trail.spawn(0.0, 0.0, now + ms(100));
    assert_eq!(trail.pending_timers(), 3);

    trail.tick(now + ms(950));
    let remaining: Vec<u64> = trail.hearts().iter().map(|h| h.id).collect();
    assert_eq!(remaining, vec![2]);
}

/// A late spawn drops expired hearts before adding its own
#[test]
fn test_late_spawn_prunes_expired_hearts_first() {
    let now = Instant::now();
    let mut trail = CursorTrail::new();
    trail.spawn(0.0, 0.0, now);
    trail.spawn(0.0, 0.0, now + ms(500));

    trail.spawn(0.0, 0.0, now + ms(1000));
    let ids: Vec<u64> = trail.hearts().iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(trail.next_deadline(), Some(now + ms(1400)));
}

#[test]
fn test_trail_deadlines() {
    let now = Instant::now();
    let mut trail = CursorTrail::new();
    assert!(trail.next_deadline().is_none());

    trail.spawn(1.0, 1.0, now + ms(10));
    assert_eq!(trail.next_deadline(), Some(now + ms(910)));
    assert!(!trail.has_due(now + ms(909)));
    assert!(trail.has_due(now + ms(910)));
}
