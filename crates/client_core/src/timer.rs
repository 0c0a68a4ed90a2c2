//! View-owned timers. Dropping a timer aborts its task, so a discarded view
//! never receives another callback.

use std::time::Duration;

use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

#[derive(Debug)]
pub struct RepeatingTimer {
    task: JoinHandle<()>,
}

impl RepeatingTimer {
    /// First tick fires one full `period` after start.
    pub fn start<F>(runtime: &Handle, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let task = runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                on_tick();
            }
        });
        Self { task }
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[derive(Debug)]
pub struct OneShotTimer {
    task: JoinHandle<()>,
}

impl OneShotTimer {
    pub fn start<F>(runtime: &Handle, delay: Duration, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let task = runtime.spawn(async move {
            time::sleep(delay).await;
            on_fire();
        });
        Self { task }
    }
}

impl Drop for OneShotTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
