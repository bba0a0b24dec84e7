//! Fixed-size worker pool.
//!
//! Workers block on a shared task queue. [`WorkerPool::submit`] returns a
//! [`TaskHandle`] whose [`TaskHandle::get`] blocks until that task's result
//! is ready. A panicking task is caught at the task boundary and reported
//! through its own handle; the worker survives and sibling tasks are
//! unaffected.
//!
//! Dropping the pool closes the queue. Workers finish every task already
//! queued, then exit and are joined.

use std::any::Any;
use std::io;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use thiserror::Error;

/// Stack size for worker threads; search recursion runs on them.
const WORKER_STACK_SIZE: usize = 32 * 1024 * 1024;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Why a task produced no value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("task panicked: {message}")]
    Panicked { message: String },
    #[error("task was dropped before producing a result")]
    Disconnected,
}

/// Pending result of a submitted task.
#[must_use = "a task handle does nothing unless its result is retrieved"]
pub struct TaskHandle<T> {
    receiver: Receiver<Result<T, TaskError>>,
}

impl<T> TaskHandle<T> {
    /// Block until the task finishes.
    pub fn get(self) -> Result<T, TaskError> {
        self.receiver.recv().unwrap_or(Err(TaskError::Disconnected))
    }
}

pub struct WorkerPool {
    sender: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Start `threads` workers (at least one).
    pub fn new(threads: usize) -> io::Result<Self> {
        let threads = threads.max(1);
        let (sender, receiver) = unbounded::<Job>();
        let mut workers = Vec::with_capacity(threads);
        for id in 0..threads {
            let receiver = receiver.clone();
            let handle = thread::Builder::new()
                .name(format!("rookery-worker-{id}"))
                .stack_size(WORKER_STACK_SIZE)
                .spawn(move || {
                    while let Ok(job) = receiver.recv() {
                        job();
                    }
                    log::trace!("worker {id} exiting");
                })?;
            workers.push(handle);
        }
        log::debug!("worker pool started with {threads} threads");
        Ok(WorkerPool {
            sender: Some(sender),
            workers,
        })
    }

    /// One worker per available hardware thread.
    pub fn with_default_threads() -> io::Result<Self> {
        Self::new(default_threads())
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.workers.len()
    }

    /// Queue `task` and return a handle to its result.
    pub fn submit<T, F>(&self, task: F) -> TaskHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (result_tx, result_rx) = bounded(1);
        let job: Job = Box::new(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(task)).map_err(|payload| {
                TaskError::Panicked {
                    message: panic_message(payload.as_ref()),
                }
            });
            // The caller may have dropped its handle.
            let _ = result_tx.send(outcome);
        });
        if let Some(sender) = &self.sender {
            // A send error drops the job and with it the result sender, so
            // the handle reports `Disconnected`.
            let _ = sender.send(job);
        }
        TaskHandle {
            receiver: result_rx,
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        drop(self.sender.take());
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                log::warn!("worker thread terminated abnormally");
            }
        }
        log::debug!("worker pool shut down");
    }
}

/// Available hardware parallelism, or 1 when unknown.
#[must_use]
pub fn default_threads() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
