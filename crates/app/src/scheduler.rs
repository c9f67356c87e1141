//! Periodic jobs with cancellable handles.
//!
//! Every tick spawns the job's work as its own task, so a slow run never
//! delays the next tick and runs may overlap. Cancelling a job stops further
//! ticks; runs that already started are left to finish.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Shortest period accepted by [`spawn_periodic`].
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// When the first run of a periodic job happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstRun {
    /// Run right away, then every period.
    Immediately,
    /// Wait one period before the first run.
    AfterPeriod,
}

/// Handle to a running periodic job. Dropping the handle cancels the job.
#[derive(Debug)]
pub struct JobHandle {
    name: &'static str,
    task: JoinHandle<()>,
}

impl JobHandle {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stop scheduling further runs.
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            tracing::debug!(job = self.name, "cancelling periodic job");
        }
        self.task.abort();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for JobHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn `job` every `period` on the current tokio runtime.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn spawn_periodic<F, Fut>(
    name: &'static str,
    period: Duration,
    first_run: FirstRun,
    mut job: F,
) -> JobHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let period = period.max(MIN_PERIOD);
    let start = match first_run {
        FirstRun::Immediately => Instant::now(),
        FirstRun::AfterPeriod => Instant::now() + period,
    };

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(start, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            tracing::trace!(job = name, "tick");
            tokio::spawn(job());
        }
    });

    tracing::debug!(job = name, ?period, ?first_run, "spawned periodic job");
    JobHandle { name, task }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counting_job(
        counter: &Arc<AtomicUsize>,
    ) -> impl FnMut() -> std::future::Ready<()> + Send + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn should_run_immediately_then_every_period() {
        let counter = Arc::new(AtomicUsize::new(0));
        let _handle = spawn_periodic(
            "test",
            Duration::from_millis(1000),
            FirstRun::Immediately,
            counting_job(&counter),
        );

        tokio::time::sleep(Duration::from_millis(3500)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn should_wait_one_period_before_first_run() {
        let counter = Arc::new(AtomicUsize::new(0));
        let _handle = spawn_periodic(
            "test",
            Duration::from_millis(1000),
            FirstRun::AfterPeriod,
            counting_job(&counter),
        );

        tokio::time::sleep(Duration::from_millis(900)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_ticking_after_cancel() {
        let counter = Arc::new(AtomicUsize::new(0));
        let handle = spawn_periodic(
            "test",
            Duration::from_millis(1000),
            FirstRun::Immediately,
            counting_job(&counter),
        );

        tokio::time::sleep(Duration::from_millis(1500)).await;
        handle.cancel();
        tokio::time::sleep(Duration::from_millis(5000)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_ticking_when_handle_dropped() {
        let counter = Arc::new(AtomicUsize::new(0));
        let handle = spawn_periodic(
            "test",
            Duration::from_millis(1000),
            FirstRun::Immediately,
            counting_job(&counter),
        );

        tokio::time::sleep(Duration::from_millis(500)).await;
        drop(handle);
        tokio::time::sleep(Duration::from_millis(5000)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_wait_for_slow_runs_before_next_tick() {
        let started = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&started);
        let _handle = spawn_periodic(
            "slow",
            Duration::from_millis(100),
            FirstRun::Immediately,
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_secs(10))
            },
        );

        tokio::time::sleep(Duration::from_millis(450)).await;

        assert_eq!(started.load(Ordering::SeqCst), 5);
    }
}
