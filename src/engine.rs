use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use embassy_time::Duration;
use log::{debug, error, info, warn};

use crate::animation::Player;
use crate::error::EngineError;
use crate::operation::{Animation, Task};
use crate::pacing::DEFAULT_FRAME_PERIOD;
use crate::queue::{Job, Message, TaskQueue};
use crate::sink::{DisplaySink, SinkConfig};
use crate::strip::Strip;

/// Default number of LEDs on the strip
pub const DEFAULT_LED_COUNT: usize = 32;

const WORKER_THREAD_NAME: &str = "pixel-animator";

/// Configuration for the animation engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub led_count: usize,
    /// Delay between animation frames, also used to turn durations into steps
    pub frame_period: Duration,
    pub sink: SinkConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            frame_period: DEFAULT_FRAME_PERIOD,
            sink: SinkConfig::default(),
        }
    }
}

struct Worker {
    queue: Arc<TaskQueue>,
    handle: JoinHandle<()>,
}

/// Animation engine - owns the strip and the single animation worker
///
/// Tasks from any thread are executed one at a time in submission order, so
/// at most one animation mutates the buffer at any moment.
pub struct Engine {
    strip: Arc<Strip>,
    frame_period: Duration,
    worker: Mutex<Option<Worker>>,
}

impl Engine {
    /// Create a stopped engine, opening the configured sink
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let sink = config.sink.open()?;
        Ok(Self::with_sink(config.led_count, config.frame_period, sink))
    }

    /// Create a stopped engine around an already opened sink
    pub fn with_sink(led_count: usize, frame_period: Duration, sink: Box<dyn DisplaySink>) -> Self {
        Self {
            strip: Arc::new(Strip::new(led_count, sink)),
            frame_period,
            worker: Mutex::new(None),
        }
    }

    /// Shared strip, for direct writes and reads
    pub fn strip(&self) -> &Strip {
        &self.strip
    }

    pub fn led_count(&self) -> usize {
        self.strip.led_count()
    }

    pub const fn frame_period(&self) -> Duration {
        self.frame_period
    }

    pub fn is_running(&self) -> bool {
        self.worker().is_some()
    }

    /// Number of tasks waiting for the worker
    pub fn pending_tasks(&self) -> usize {
        self.worker()
            .as_ref()
            .map_or(0, |worker| worker.queue.len())
    }

    /// Spawn the worker. Does nothing if it is already running.
    pub fn start(&self) -> Result<(), EngineError> {
        let mut worker = self.worker();
        if worker.is_some() {
            debug!("animation worker already running");
            return Ok(());
        }

        let queue = Arc::new(TaskQueue::new());
        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_owned())
            .spawn({
                let strip = Arc::clone(&self.strip);
                let queue = Arc::clone(&queue);
                move || run_worker(&strip, &queue)
            })
            .map_err(EngineError::Spawn)?;

        *worker = Some(Worker { queue, handle });
        info!("animation worker started");
        Ok(())
    }

    /// Stop the worker. Does nothing if it is not running.
    ///
    /// Tasks that have not started are discarded. The running task is
    /// finished first, so this blocks for at most the rest of that animation.
    pub fn stop(&self) -> Result<(), EngineError> {
        let Some(Worker { queue, handle }) = self.worker().take() else {
            debug!("animation worker already stopped");
            return Ok(());
        };

        let discarded = queue.shutdown();
        if discarded > 0 {
            warn!("discarding {discarded} queued animation tasks");
        }

        handle.join().map_err(|_| EngineError::WorkerPanicked)?;
        info!("animation worker stopped");
        Ok(())
    }

    /// Queue a task for the worker
    ///
    /// Returns immediately unless `task.wait` is set, in which case this
    /// blocks until the worker has finished the task.
    pub fn enqueue(&self, task: Task) -> Result<(), EngineError> {
        task.animation.validate(self.led_count())?;

        let wait = task.wait;
        let (done, finished) = if wait {
            let (tx, rx) = mpsc::sync_channel(1);
            (Some(tx), Some(rx))
        } else {
            (None, None)
        };

        {
            let worker = self.worker();
            let Some(worker) = worker.as_ref() else {
                return Err(EngineError::EngineNotRunning);
            };
            worker.queue.push(Job { task, done });
        }

        match finished {
            Some(finished) => finished.recv().map_err(|_| EngineError::TaskDiscarded),
            None => Ok(()),
        }
    }

    /// Queue an animation with the engine's frame period
    pub fn submit(&self, animation: Animation) -> Result<(), EngineError> {
        self.enqueue(Task::new(animation).with_delay(self.frame_period))
    }

    /// Block until every task queued before this call has run
    pub fn flush(&self) -> Result<(), EngineError> {
        self.enqueue(Task::new(Animation::Pause(Duration::from_millis(0))).with_wait(true))
    }

    fn worker(&self) -> MutexGuard<'_, Option<Worker>> {
        self.worker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            error!("failed to stop animation worker: {err}");
        }
    }
}

/// Worker loop: run tasks until the sentinel arrives
fn run_worker(strip: &Strip, queue: &TaskQueue) {
    loop {
        let job = match queue.pop() {
            Message::Run(job) => job,
            Message::Shutdown => break,
        };
        let Job { task, done } = job;

        let player = Player::new(strip, task.delay);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| player.play(&task.animation)));
        if let Err(payload) = outcome {
            error!(
                "{} animation panicked: {}",
                task.animation.as_str(),
                panic_message(payload.as_ref())
            );
        }

        if let Some(done) = done {
            // The submitter may have given up waiting
            let _ = done.send(());
        }
    }
    debug!("animation worker exiting");
}

fn panic_message(payload: &(dyn core::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
