//! Cancelable one-shot timers.
//!
//! The queue never reads the clock itself: callers pass `now` in, which keeps
//! the session deterministic under test. The desktop app polls it from a
//! background loop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// Handle for a scheduled task, unique per queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A scheduled task
#[derive(Debug)]
struct ScheduledTask<T> {
    run_at: Instant,
    id: TimerId,
    task: T,
}

impl<T> PartialEq for ScheduledTask<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for ScheduledTask<T> {}

impl<T> PartialOrd for ScheduledTask<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ScheduledTask<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .run_at
            .cmp(&self.run_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Min-heap of one-shot tasks
#[derive(Debug)]
pub struct TimerQueue<T> {
    tasks: BinaryHeap<ScheduledTask<T>>,
    next_id: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            tasks: BinaryHeap::new(),
            next_id: 0,
        }
    }

    /// Schedule `task` to fire `delay` after `now`
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        self.tasks.push(ScheduledTask {
            run_at: now + delay,
            id,
            task,
        });

        id
    }

    /// Cancel a pending task. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|scheduled| scheduled.id != id);
        self.tasks.len() != before
    }

    /// Pop the earliest task if it is due at `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerId, T)> {
        if self.tasks.peek()?.run_at <= now {
            return self.tasks.pop().map(|scheduled| (scheduled.id, scheduled.task));
        }
        None
    }

    /// When the earliest pending task becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.peek().map(|scheduled| scheduled.run_at)
    }

    /// Whether any task is due at `now`
    pub fn has_due(&self, now: Instant) -> bool {
        self.next_deadline().is_some_and(|deadline| deadline <= now)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_order() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule_after(now, Duration::from_millis(30), "late");
        queue.schedule_after(now, Duration::from_millis(10), "early");

        assert!(queue.pop_due(now).is_none());

        let later = now + Duration::from_millis(50);
        assert_eq!(queue.pop_due(later).map(|(_, t)| t), Some("early"));
        assert_eq!(queue.pop_due(later).map(|(_, t)| t), Some("late"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        for n in 0..5 {
            queue.schedule_after(now, Duration::from_millis(5), n);
        }

        let later = now + Duration::from_millis(5);
        let fired: Vec<_> = std::iter::from_fn(|| queue.pop_due(later).map(|(_, n)| n)).collect();
        assert_eq!(fired, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_cancel() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        let id = queue.schedule_after(now, Duration::from_millis(5), ());

        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert!(queue.next_deadline().is_none());
    }

    #[test]
    fn test_due_exactly_at_deadline() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule_after(now, Duration::from_millis(900), ());

        assert!(!queue.has_due(now + Duration::from_millis(899)));
        assert!(queue.has_due(now + Duration::from_millis(900)));
    }
}
