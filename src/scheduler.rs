// Cancellable one-shot and repeating timers driven by the UI tick

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Task<A> {
    id: TaskId,
    due: Instant,
    every: Option<Duration>,
    action: A,
}

/// Timer queue polled from the event loop.
///
/// Nothing runs on its own: `poll` hands back the actions that are due and
/// the caller executes them. Dropping or clearing the scheduler cancels
/// everything still pending.
#[derive(Debug)]
pub struct Scheduler<A> {
    tasks: Vec<Task<A>>,
    next_id: u64,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<A: Clone> Scheduler<A> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, due: Instant, every: Option<Duration>, action: A) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(Task {
            id,
            due,
            every,
            action,
        });
        id
    }

    /// Run `action` once, `delay` after `now`
    pub fn schedule_once(&mut self, now: Instant, delay: Duration, action: A) -> TaskId {
        self.push(now + delay, None, action)
    }

    /// Run `action` every `interval`, first time one interval after `now`
    pub fn schedule_every(&mut self, now: Instant, interval: Duration, action: A) -> TaskId {
        self.push(now + interval, Some(interval), action)
    }

    /// Returns false if the task already fired (one-shot) or was never scheduled
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Collect due actions in due order. Repeating tasks are re-armed from `now`,
    /// so a stalled loop does not produce a burst of catch-up firings.
    pub fn poll(&mut self, now: Instant) -> Vec<A> {
        let mut due: Vec<(Instant, TaskId, A)> = Vec::new();

        self.tasks.retain_mut(|task| {
            if task.due > now {
                return true;
            }
            due.push((task.due, task.id, task.action.clone()));
            match task.every {
                Some(interval) => {
                    task.due = now + interval;
                    true
                }
                None => false,
            }
        });

        due.sort_by_key(|(at, id, _)| (*at, id.0));
        due.into_iter().map(|(_, _, action)| action).collect()
    }
}
