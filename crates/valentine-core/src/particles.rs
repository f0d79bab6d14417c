//! Ephemeral decorative particles.
//!
//! Three independently lived collections:
//!
//! ```text
//! ┌──────────────┬──────────────────────────┬──────────────────────────────┐
//! │ collection   │ spawned by               │ lifetime                     │
//! ├──────────────┼──────────────────────────┼──────────────────────────────┤
//! │ confetti     │ celebration burst (90)   │ visible for 2300ms, replaced │
//! │ heart rain   │ first yes per mode (65)  │ rest of the session          │
//! │ cursor trail │ pointer move, throttled  │ 900ms per heart              │
//! └──────────────┴──────────────────────────┴──────────────────────────────┘
//! ```
//!
//! [`ParticleStore`] owns the confetti and heart rain and lives inside the
//! card session. [`CursorTrail`] carries its own timers and is held apart
//! from the session, so pointer traffic never touches the card state.
//!
//! The celebration clear is the only cancelable timer: a new burst
//! supersedes the pending one, so at most one is outstanding. Cursor heart
//! timers are fire-and-forget and removal is idempotent.

use std::time::{Duration, Instant};

use crate::decorations::{cursor_heart_with, generate_confetti, generate_hearts};
use crate::timers::{TimerId, TimerQueue};
use crate::types::{ConfettiPiece, CursorHeart, HeartPiece};

pub const CONFETTI_BATCH: usize = 90;
pub const HEART_RAIN_BATCH: usize = 65;
pub const CELEBRATION_WINDOW: Duration = Duration::from_millis(2300);
pub const CURSOR_HEART_LIFETIME: Duration = Duration::from_millis(900);
pub const CURSOR_SPAWN_INTERVAL: Duration = Duration::from_millis(42);

/// Confetti batch plus the celebrating flag that gates its visibility
#[derive(Debug, Default)]
pub struct ConfettiStore {
    pieces: Vec<ConfettiPiece>,
    celebrating: bool,
    clear_timer: Option<TimerId>,
}

impl ConfettiStore {
    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn celebrating(&self) -> bool {
        self.celebrating
    }
}

#[derive(Debug, Default)]
pub struct HeartRain {
    pieces: Vec<HeartPiece>,
}

impl HeartRain {
    pub fn pieces(&self) -> &[HeartPiece] {
        &self.pieces
    }
}

/// Owner of the confetti burst and heart rain
#[derive(Debug, Default)]
pub struct ParticleStore {
    confetti: ConfettiStore,
    heart_rain: HeartRain,
    timers: TimerQueue<()>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the confetti batch and (re)start the celebration window.
    pub fn start_celebration_burst(&mut self, now: Instant) {
        self.tick(now);

        if let Some(pending) = self.confetti.clear_timer.take() {
            self.timers.cancel(pending);
            tracing::debug!("Celebration burst superseded pending clear");
        }

        self.confetti.pieces = generate_confetti(CONFETTI_BATCH);
        self.confetti.celebrating = true;
        self.confetti.clear_timer = Some(self.timers.schedule_after(now, CELEBRATION_WINDOW, ()));
    }

    /// Replace the heart rain with a fresh batch.
    pub fn rain_hearts(&mut self) {
        self.heart_rain.pieces = generate_hearts(HEART_RAIN_BATCH);
    }

    /// Fire every timer due at `now`. Returns how many fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some((id, ())) = self.timers.pop_due(now) {
            fired += 1;
            if self.confetti.clear_timer == Some(id) {
                self.confetti.clear_timer = None;
                self.confetti.celebrating = false;
                tracing::debug!("Celebration window elapsed");
            }
        }
        fired
    }

    /// Drop every pending timer and end any running celebration.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.confetti.clear_timer = None;
        self.confetti.celebrating = false;
    }

    pub fn confetti(&self) -> &ConfettiStore {
        &self.confetti
    }

    pub fn heart_rain(&self) -> &HeartRain {
        &self.heart_rain
    }

    pub fn celebrating(&self) -> bool {
        self.confetti.celebrating
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn has_due(&self, now: Instant) -> bool {
        self.timers.has_due(now)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

/// Hearts left behind by the pointer, each expiring on its own timer.
#[derive(Debug, Default)]
pub struct CursorTrail {
    hearts: Vec<CursorHeart>,
    next_id: u64,
    last_spawn: Option<Instant>,
    expiries: TimerQueue<u64>,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hearts(&self) -> &[CursorHeart] {
        &self.hearts
    }

    /// Whether a spawn at `now` clears the rate limit
    pub fn accepts(&self, now: Instant) -> bool {
        match self.last_spawn {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= CURSOR_SPAWN_INTERVAL,
        }
    }

    /// Spawn a heart at the pointer, unless the previous accepted spawn was
    /// less than [`CURSOR_SPAWN_INTERVAL`] ago. Dropped moves are not queued.
    pub fn spawn(&mut self, x: f64, y: f64, now: Instant) -> Option<u64> {
        self.tick(now);

        if !self.accepts(now) {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.last_spawn = Some(now);
        self.hearts.push(cursor_heart_with(&mut rand::rng(), id, x, y));
        self.expiries.schedule_after(now, CURSOR_HEART_LIFETIME, id);

        tracing::trace!(id, x, y, "Spawned cursor heart");
        Some(id)
    }

    /// Remove every heart whose lifetime ended by `now`. Returns how many
    /// timers fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some((_, heart_id)) = self.expiries.pop_due(now) {
            fired += 1;
            self.hearts.retain(|heart| heart.id != heart_id);
        }
        fired
    }

    /// Drop every heart and pending expiry. Ids keep counting up.
    pub fn clear(&mut self) {
        self.hearts.clear();
        self.expiries.clear();
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.expiries.next_deadline()
    }

    pub fn has_due(&self, now: Instant) -> bool {
        self.expiries.has_due(now)
    }

    pub fn pending_timers(&self) -> usize {
        self.expiries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_fills_confetti_and_celebrates() {
        let now = Instant::now();
        let mut store = ParticleStore::new();
        store.start_celebration_burst(now);

        assert!(store.celebrating());
        assert_eq!(store.confetti().pieces().len(), CONFETTI_BATCH);
        assert_eq!(store.pending_timers(), 1);
    }

    #[test]
    fn test_celebration_clears_after_window_but_keeps_pieces() {
        let now = Instant::now();
        let mut store = ParticleStore::new();
        store.start_celebration_burst(now);

        store.tick(now + ms(2299));
        assert!(store.celebrating());

        store.tick(now + CELEBRATION_WINDOW);
        assert!(!store.celebrating());
        assert_eq!(store.confetti().pieces().len(), CONFETTI_BATCH);
    }

    #[test]
    fn test_second_burst_reschedules_clear() {
        let now = Instant::now();
        let mut store = ParticleStore::new();
        store.start_celebration_burst(now);
        store.start_celebration_burst(now + ms(2000));

        assert_eq!(store.pending_timers(), 1);

        // The first window would have ended here
        store.tick(now + ms(2400));
        assert!(store.celebrating());

        store.tick(now + ms(4300));
        assert!(!store.celebrating());
    }

    #[test]
    fn test_heart_rain_is_not_time_limited() {
        let now = Instant::now();
        let mut store = ParticleStore::new();
        store.rain_hearts();
        store.tick(now + Duration::from_secs(3600));
        assert_eq!(store.heart_rain().pieces().len(), HEART_RAIN_BATCH);
    }

    #[test]
    fn test_teardown_drops_timers() {
        let now = Instant::now();
        let mut store = ParticleStore::new();
        store.start_celebration_burst(now);

        store.teardown();
        assert_eq!(store.pending_timers(), 0);
        assert!(!store.celebrating());
    }

    #[test]
    fn test_cursor_spawn_is_throttled() {
        let now = Instant::now();
        let mut trail = CursorTrail::new();

        assert_eq!(trail.spawn(1.0, 1.0, now), Some(0));
        assert_eq!(trail.spawn(2.0, 2.0, now + ms(41)), None);
        assert_eq!(trail.spawn(3.0, 3.0, now + ms(42)), Some(1));
        assert_eq!(trail.hearts().len(), 2);
    }

    #[test]
    fn test_cursor_heart_expires_individually() {
        let now = Instant::now();
        let mut trail = CursorTrail::new();
        trail.spawn(0.0, 0.0, now);
        trail.spawn(0.0, 0.0, now + ms(100));

        trail.tick(now + ms(900));
        let ids: Vec<u64> = trail.hearts().iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1]);

        trail.tick(now + ms(1000));
        assert!(trail.hearts().is_empty());
        assert_eq!(trail.pending_timers(), 0);
    }

    #[test]
    fn test_cleared_trail_keeps_counting_ids() {
        let now = Instant::now();
        let mut trail = CursorTrail::new();
        trail.spawn(5.0, 5.0, now);

        trail.clear();
        assert!(trail.hearts().is_empty());
        assert_eq!(trail.pending_timers(), 0);
        assert_eq!(trail.spawn(5.0, 5.0, now + ms(50)), Some(1));
    }
}
