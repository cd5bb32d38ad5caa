use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::error;

pub type TimerTask = Box<dyn FnOnce() + Send + 'static>;

/// A live timer which can be canceled until it has fired
pub trait TimerHandle: Send + Sync {
    /// Canceling a timer that already fired is a no-op
    fn cancel(&self);
}

/// Host timer facility used to run a task once after a delay
pub trait ITimer: Send + Sync {
    fn arm(&self, delay: Duration, task: TimerTask) -> Box<dyn TimerHandle>;
}

/// Timers backed by tasks on the current tokio runtime
pub struct TokioTimer {}

struct TokioTimerHandle(tokio::task::JoinHandle<()>);

impl TimerHandle for TokioTimerHandle {
    fn cancel(&self) {
        self.0.abort();
    }
}

struct NoopTimerHandle;

impl TimerHandle for NoopTimerHandle {
    fn cancel(&self) {}
}

impl ITimer for TokioTimer {
    fn arm(&self, delay: Duration, task: TimerTask) -> Box<dyn TimerHandle> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!("Unable to arm timer outside of a runtime: {:?}", e);
                return Box::new(NoopTimerHandle);
            }
        };
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Box::new(TokioTimerHandle(handle))
    }
}

struct ManualSlot {
    deadline: Duration,
    task: Mutex<Option<TimerTask>>,
}

impl ManualSlot {
    fn take(&self) -> Option<TimerTask> {
        self.task.lock().unwrap_or_else(|e| e.into_inner()).take()
    }

    fn is_pending(&self) -> bool {
        self.task.lock().unwrap_or_else(|e| e.into_inner()).is_some()
    }
}

struct ManualTimerHandle(Arc<ManualSlot>);

impl TimerHandle for ManualTimerHandle {
    fn cancel(&self) {
        self.0.take();
    }
}

/// Timer with a virtual clock that only fires when told to
#[derive(Default)]
pub struct ManualTimer {
    elapsed: Mutex<Duration>,
    slots: Mutex<Vec<Arc<ManualSlot>>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Default::default()
    }

    fn pending_slots(&self) -> Vec<Arc<ManualSlot>> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.retain(|slot| slot.is_pending());
        let mut pending = slots.clone();
        pending.sort_by_key(|slot| slot.deadline);
        pending
    }

    /// Number of armed timers which have neither fired nor been canceled
    pub fn pending(&self) -> usize {
        self.pending_slots().len()
    }

    /// Remaining delays of the pending timers, soonest first
    pub fn pending_delays(&self) -> Vec<Duration> {
        let elapsed = *self.elapsed.lock().unwrap_or_else(|e| e.into_inner());
        self.pending_slots()
            .iter()
            .map(|slot| slot.deadline.saturating_sub(elapsed))
            .collect()
    }

    /// Moves the virtual clock forward and fires every timer that became due.
    /// Returns the number of fired timers.
    pub fn advance(&self, by: Duration) -> usize {
        let now = {
            let mut elapsed = self.elapsed.lock().unwrap_or_else(|e| e.into_inner());
            *elapsed += by;
            *elapsed
        };
        // Tasks may arm new timers, so no lock is held while they run
        let due = self
            .pending_slots()
            .into_iter()
            .filter(|slot| slot.deadline <= now)
            .collect::<Vec<_>>();
        Self::run(due)
    }

    /// Fires every pending timer regardless of its deadline
    pub fn fire_all(&self) -> usize {
        Self::run(self.pending_slots())
    }

    fn run(slots: Vec<Arc<ManualSlot>>) -> usize {
        let mut fired = 0;
        for slot in slots {
            if let Some(task) = slot.take() {
                task();
                fired += 1;
            }
        }
        fired
    }
}

impl ITimer for ManualTimer {
    fn arm(&self, delay: Duration, task: TimerTask) -> Box<dyn TimerHandle> {
        let elapsed = *self.elapsed.lock().unwrap_or_else(|e| e.into_inner());
        let slot = Arc::new(ManualSlot {
            deadline: elapsed + delay,
            task: Mutex::new(Some(task)),
        });
        self.slots
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(slot.clone());
        Box::new(ManualTimerHandle(slot))
    }
}
