//! Background dataset loading
//!
//! Every request gets a sequence number and its own worker thread. Results
//! travel back to the render loop over a channel; a worker that finishes
//! after a newer request was issued drops its result, and the render side
//! only ever applies completions newer than the last one it applied.

use crate::error::IoError;
use crate::sample::sample_dataset;
use crate::source::DataSource;
use flume::{Receiver, RecvTimeoutError, Sender};
use log::{debug, info, warn};
use plotvr_core::{Dataset, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// A finished load, ready to be applied
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub sequence: u64,
    pub location: String,
    pub dataset: Arc<Dataset>,
    /// The fetch failed and the sample dataset was substituted
    pub fell_back: bool,
}

/// Issues loads off the render thread and hands back the newest result
pub struct Loader {
    source: Arc<dyn DataSource>,
    latest_requested: Arc<AtomicU64>,
    last_applied: u64,
    sender: Sender<LoadOutcome>,
    receiver: Receiver<LoadOutcome>,
}

impl Loader {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            source,
            latest_requested: Arc::new(AtomicU64::new(0)),
            last_applied: 0,
            sender,
            receiver,
        }
    }

    /// Start loading `location` and return the request's sequence number.
    ///
    /// Any request still in flight is superseded.
    pub fn request(&self, location: impl Into<String>) -> Result<u64> {
        let location = location.into();
        let sequence = self.latest_requested.fetch_add(1, Ordering::SeqCst) + 1;
        let source = Arc::clone(&self.source);
        let latest = Arc::clone(&self.latest_requested);
        let sender = self.sender.clone();

        debug!("load {sequence} of {location} via {}", source.name());
        thread::Builder::new()
            .name(format!("plotvr-loader-{sequence}"))
            .spawn(move || {
                let result = source.fetch(&location);
                if latest.load(Ordering::SeqCst) != sequence {
                    debug!("load {sequence} of {location} superseded; dropping result");
                    return;
                }
                let (dataset, fell_back) = match result {
                    Ok(dataset) => (Arc::new(dataset), false),
                    Err(err) => {
                        warn!("failed to load {location}: {err}; showing sample data");
                        (sample_dataset(), true)
                    }
                };
                let outcome = LoadOutcome {
                    sequence,
                    location,
                    dataset,
                    fell_back,
                };
                if sender.send(outcome).is_err() {
                    debug!("loader dropped before load {sequence} finished");
                }
            })
            .map_err(|err| IoError::WorkerSpawn {
                message: err.to_string(),
            })?;
        Ok(sequence)
    }

    /// Take the newest unapplied completion without blocking
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let mut newest: Option<LoadOutcome> = None;
        for outcome in self.receiver.try_iter() {
            newest = self.keep_newer(newest, outcome);
        }
        self.mark_applied(newest)
    }

    /// Block up to `timeout` for a completion newer than the last applied one
    pub fn wait(&mut self, timeout: Duration) -> Option<LoadOutcome> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(outcome) = self.poll() {
                return Some(outcome);
            }
            match self.receiver.recv_deadline(deadline) {
                Ok(outcome) => {
                    let newest = self.keep_newer(None, outcome);
                    let newest = self
                        .receiver
                        .try_iter()
                        .fold(newest, |acc, next| self.keep_newer(acc, next));
                    if let Some(outcome) = self.mark_applied(newest) {
                        return Some(outcome);
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None
                }
            }
        }
    }

    /// Sequence number of the most recent request
    pub fn latest_requested(&self) -> u64 {
        self.latest_requested.load(Ordering::SeqCst)
    }

    /// Sequence number of the most recently applied completion
    pub fn last_applied(&self) -> u64 {
        self.last_applied
    }

    fn keep_newer(&self, current: Option<LoadOutcome>, next: LoadOutcome) -> Option<LoadOutcome> {
        if next.sequence <= self.last_applied {
            debug!("discarding stale load {}", next.sequence);
            return current;
        }
        match current {
            Some(current) if current.sequence >= next.sequence => {
                debug!("discarding stale load {}", next.sequence);
                Some(current)
            }
            _ => Some(next),
        }
    }

    fn mark_applied(&mut self, newest: Option<LoadOutcome>) -> Option<LoadOutcome> {
        if let Some(outcome) = &newest {
            self.last_applied = outcome.sequence;
            info!(
                "load {} ready: {} samples, speed={}",
                outcome.sequence,
                outcome.dataset.len(),
                outcome.dataset.speed()
            );
        }
        newest
    }
}
