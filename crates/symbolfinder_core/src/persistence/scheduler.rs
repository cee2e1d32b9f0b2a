//! Periodic background flush.
//!
//! # Invariants
//! - The worker takes the catalog mutex for the whole flush, so a flush
//!   never observes a half-applied edit.
//! - `shutdown` stops the worker before the final forced flush.
//! - A poisoned mutex is recovered, not propagated.

use super::manager::FlushOutcome;
use crate::catalog::CatalogResult;
use log::{info, warn};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

const WORKER_THREAD_NAME: &str = "catalog-flush";

/// Anything that can flush pending catalog edits.
pub trait FlushTarget: Send + 'static {
    fn flush_pending(&mut self, force: bool) -> CatalogResult<FlushOutcome>;
}

/// Background worker that flushes `target` every `interval`.
pub struct FlushScheduler<T: FlushTarget> {
    target: Arc<Mutex<T>>,
    stop_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: FlushTarget> FlushScheduler<T> {
    /// Starts the periodic flush worker.
    ///
    /// # Errors
    /// - Returns the OS error when the worker thread cannot be spawned.
    pub fn spawn(target: Arc<Mutex<T>>, interval: Duration) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let worker_target = Arc::clone(&target);

        let worker = std::thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        // Errors are logged by the target and retried next tick.
                        let _ = lock_target(&worker_target).flush_pending(false);
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        info!(
            "event=flush_scheduler module=persistence status=started interval_ms={}",
            interval.as_millis()
        );

        Ok(Self {
            target,
            stop_tx: Some(stop_tx),
            worker: Some(worker),
        })
    }

    /// Stops the worker and performs the final forced flush.
    pub fn shutdown(mut self) -> CatalogResult<FlushOutcome> {
        self.stop_worker();
        let outcome = lock_target(&self.target).flush_pending(true);
        info!(
            "event=flush_scheduler module=persistence status=stopped final_flush_ok={}",
            outcome.is_ok()
        );
        outcome
    }

    fn stop_worker(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("event=flush_scheduler module=persistence status=error error_code=worker_panicked");
            }
        }
    }
}

impl<T: FlushTarget> Drop for FlushScheduler<T> {
    fn drop(&mut self) {
        self.stop_worker();
    }
}

fn lock_target<T>(target: &Mutex<T>) -> MutexGuard<'_, T> {
    target.lock().unwrap_or_else(PoisonError::into_inner)
}
