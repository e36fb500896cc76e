// ============================================================================
// SCHEDULER - Delayed tasks with a cancellation token
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;

/// Handle to a delayed task. Cancelling before it fires skips it.
#[derive(Clone, Default, Debug)]
pub struct ScheduledTask {
    cancelled: Rc<Cell<bool>>,
}

impl ScheduledTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: LocalBoxFuture<'static, ()>) -> ScheduledTask;
}

/// Browser scheduler backed by setTimeout
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: LocalBoxFuture<'static, ()>) -> ScheduledTask {
        let handle = ScheduledTask::new();
        let token = handle.clone();
        Timeout::new(delay_ms, move || {
            if token.is_cancelled() {
                log::debug!("⏹️ [TIMER] Task cancelled before firing");
                return;
            }
            wasm_bindgen_futures::spawn_local(task);
        })
        .forget();
        handle
    }
}

/// Holds at most one pending task; scheduling a new one cancels the previous
#[derive(Clone, Default)]
pub struct TaskSlot {
    current: Rc<RefCell<Option<ScheduledTask>>>,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, task: ScheduledTask) {
        if let Some(previous) = self.current.borrow_mut().replace(task) {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Some(task) = self.current.borrow_mut().take() {
            task.cancel();
        }
    }
}
