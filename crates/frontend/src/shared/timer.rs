//! Cancellable delayed tasks.
//!
//! Sidebar triggers never call `setTimeout` directly: they go through a
//! [`Scheduler`] and keep the returned [`TimerHandle`]. Dropping the handle
//! cancels the task, so whoever owns the handle owns the timer's lifetime.

use gloo_timers::callback::Timeout;
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;
}

/// Pending task guard. Cancels on drop unless the task already ran.
#[must_use = "dropping a TimerHandle cancels the scheduled task"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Browser event-loop timers backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, task);
        // Dropping a gloo Timeout clears it; clearing an already fired id is a no-op.
        TimerHandle::new(move || drop(timeout))
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use super::{Scheduler, Task, TimerHandle};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Default)]
    struct Queue {
        now: Duration,
        next_id: u64,
        tasks: Vec<(u64, Duration, Task)>,
    }

    /// Virtual clock: tasks only run when the test advances time.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.queue.borrow().tasks.len()
        }

        /// Moves the clock forward and runs every task that became due, in
        /// due-time order. Tasks scheduled by running tasks are honoured.
        pub fn advance(&self, by: Duration) {
            let deadline = self.queue.borrow().now + by;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let due = queue
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, (_, at, _))| *at <= deadline)
                        .min_by_key(|(_, (id, at, _))| (*at, *id))
                        .map(|(index, _)| index);
                    match due {
                        Some(index) => {
                            let (_, at, task) = queue.tasks.remove(index);
                            queue.now = at;
                            Some(task)
                        }
                        None => {
                            queue.now = deadline;
                            None
                        }
                    }
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
        }

        pub fn advance_ms(&self, millis: u64) {
            self.advance(Duration::from_millis(millis));
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
            let id = {
                let mut queue = self.queue.borrow_mut();
                let id = queue.next_id;
                queue.next_id += 1;
                let at = queue.now + delay;
                queue.tasks.push((id, at, task));
                id
            };
            let queue = Rc::downgrade(&self.queue);
            TimerHandle::new(move || {
                if let Some(queue) = queue.upgrade() {
                    queue.borrow_mut().tasks.retain(|(task_id, _, _)| *task_id != id);
                }
            })
        }
    }
}
