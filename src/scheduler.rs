//! Cancelable one-shot and recurring tasks on a host-advanced clock.
//!
//! The scheduler never reads wall-clock time. The host drives it with
//! monotonic timestamps (a `Duration` since an origin of its choosing), which
//! keeps timers deterministic under test and lets a single frame loop serve
//! any number of carousels.
//!
//! # Invariants
//!
//! 1. The clock never moves backwards; older timestamps are ignored.
//! 2. Due tasks fire in `(due, scheduling order)` sequence and the clock is
//!    moved to each task's due time before it is handed out.
//! 3. A recurring task fires at most once per [`Scheduler::pop_due`] horizon.
//!    When it fires its next due time is the first `due + k * period` past
//!    that horizon, so a long jump (sleep/resume, an epoch-based origin)
//!    coalesces every missed period into one firing.

use std::time::Duration;

/// Handle for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Clone, Debug)]
struct Task<K> {
    id: TaskId,
    due: Duration,
    period: Option<Duration>,
    kind: K,
}

/// Timer queue keyed by task kind `K`.
#[derive(Clone, Debug)]
pub struct Scheduler<K> {
    now: Duration,
    next_id: u64,
    tasks: Vec<Task<K>>,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<K: Copy> Scheduler<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `kind` once after `delay`.
    pub fn schedule_once(&mut self, delay: Duration, kind: K) -> TaskId {
        self.push(delay, None, kind)
    }

    /// Run `kind` every `period`, first firing one period from now.
    ///
    /// A zero period is bumped to one millisecond so the queue always drains.
    pub fn schedule_every(&mut self, period: Duration, kind: K) -> TaskId {
        let period = period.max(Duration::from_millis(1));
        self.push(period, Some(period), kind)
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, kind: K) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            due: self.now.saturating_add(delay),
            period,
            kind,
        });
        id
    }

    /// Cancel a task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Time at which `id` fires next.
    #[must_use]
    pub fn due(&self, id: TaskId) -> Option<Duration> {
        self.tasks.iter().find(|task| task.id == id).map(|task| task.due)
    }

    /// Pop the earliest task due at or before `until`.
    ///
    /// Moves the clock to the task's due time. Once nothing else is due the
    /// caller should finish with [`Scheduler::settle`].
    pub fn pop_due(&mut self, until: Duration) -> Option<(TaskId, K)> {
        let (index, _) = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= until)
            .min_by_key(|(_, task)| (task.due, task.id))?;

        let due = self.tasks[index].due;
        self.now = self.now.max(due);

        let task = &mut self.tasks[index];
        let fired = (task.id, task.kind);
        match task.period {
            Some(period) => task.due = next_due(due, period, until),
            None => {
                self.tasks.swap_remove(index);
            }
        }
        Some(fired)
    }

    /// Move the clock forward to `now` without firing anything.
    pub fn settle(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// First `due + k * period` (k >= 1) strictly after `until`.
fn next_due(due: Duration, period: Duration, until: Duration) -> Duration {
    let period_ns = period.as_nanos();
    let behind_ns = until.saturating_sub(due).as_nanos();
    let remaining = period_ns - behind_ns % period_ns;
    until.saturating_add(Duration::from_nanos(
        u64::try_from(remaining).unwrap_or(u64::MAX),
    ))
}
