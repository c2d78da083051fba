//! Unbounded task queue with a shutdown sentinel.
//!
//! Any number of producers push without blocking; the single worker blocks
//! in [`TaskQueue::pop`] until a message arrives. Shutting down drops every
//! task that has not started yet and wakes the worker with the sentinel.

use std::collections::VecDeque;
use std::sync::mpsc::SyncSender;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::operation::Task;

/// A task together with its optional completion signal
#[derive(Debug)]
pub(crate) struct Job {
    pub(crate) task: Task,
    pub(crate) done: Option<SyncSender<()>>,
}

/// Messages consumed by the worker
#[derive(Debug)]
pub(crate) enum Message {
    Run(Job),
    Shutdown,
}

/// FIFO shared between producers and the worker
#[derive(Debug, Default)]
pub(crate) struct TaskQueue {
    inner: Mutex<VecDeque<Message>>,
    ready: Condvar,
}

impl TaskQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a job. Never blocks on the worker.
    pub(crate) fn push(&self, job: Job) {
        self.lock().push_back(Message::Run(job));
        self.ready.notify_one();
    }

    /// Take the next message, waiting while the queue is empty
    pub(crate) fn pop(&self) -> Message {
        let mut queue = self.lock();
        loop {
            if let Some(message) = queue.pop_front() {
                return message;
            }
            queue = self
                .ready
                .wait(queue)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Drop pending jobs and enqueue the sentinel
    ///
    /// Returns the number of discarded jobs. Their completion senders are
    /// dropped with them, which releases any waiting submitter.
    pub(crate) fn shutdown(&self) -> usize {
        let discarded = {
            let mut queue = self.lock();
            let discarded = queue
                .iter()
                .filter(|message| matches!(message, Message::Run(_)))
                .count();
            queue.clear();
            queue.push_back(Message::Shutdown);
            discarded
        };
        self.ready.notify_one();
        discarded
    }

    /// Number of queued messages
    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Message>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
