//! Deadline request dispatcher
//!
//! Hosts usually receive deadline requests one at a time (one per submitting
//! miner), while the kernel is fastest when lanes are full. The dispatcher
//! bridges the two: worker threads pull single requests off a shared
//! channel, coalesce up to the configured lane width, flush early on a
//! timeout or when block parameters change, and answer every request over
//! its own reply channel. Short batches are padded by repeating the first
//! lane; padded lanes are discarded.

use crate::core::{compute_deadlines, AccountId, BlockParams, Deadline, Nonce};
use crate::error::{Error, Result};
use crossbeam::channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender};
use serde::{Deserialize, Serialize};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Number of lanes a dispatcher batch is computed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchWidth {
    /// Four lanes per batch
    X4,
    /// Eight lanes per batch
    X8,
}

impl BatchWidth {
    /// Number of lanes for this width
    pub const fn lanes(self) -> usize {
        match self {
            Self::X4 => 4,
            Self::X8 => 8,
        }
    }
}

/// Dispatcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Number of worker threads (0 = all available cores)
    #[serde(default)]
    pub workers: usize,
    /// Lane width batches are computed with
    #[serde(default = "default_width")]
    pub width: BatchWidth,
    /// How long a worker waits to fill its batch before flushing, in
    /// milliseconds
    #[serde(default = "default_flush_timeout_ms")]
    pub flush_timeout_ms: u64,
}

fn default_width() -> BatchWidth {
    BatchWidth::X8
}

fn default_flush_timeout_ms() -> u64 {
    2_000
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            width: default_width(),
            flush_timeout_ms: default_flush_timeout_ms(),
        }
    }
}

impl DispatcherConfig {
    /// Resolved worker count
    pub fn worker_count(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }

    /// Flush timeout as a duration
    pub fn flush_timeout(&self) -> Duration {
        Duration::from_millis(self.flush_timeout_ms)
    }
}

/// A single deadline request
#[derive(Debug, Clone)]
pub struct DeadlineRequest {
    /// Block parameters this request is evaluated under
    pub params: BlockParams,
    /// Account id of the submitting miner
    pub account: AccountId,
    /// Submitted nonce
    pub nonce: Nonce,
}

impl DeadlineRequest {
    /// Create a new request
    pub fn new(params: BlockParams, account: AccountId, nonce: Nonce) -> Self {
        Self {
            params,
            account,
            nonce,
        }
    }
}

struct PendingRequest {
    request: DeadlineRequest,
    reply: Sender<Deadline>,
}

/// Worker-thread pool that batches deadline requests into full lanes
pub struct DeadlineDispatcher {
    tx: Option<Sender<PendingRequest>>,
    workers: Vec<JoinHandle<()>>,
}

impl DeadlineDispatcher {
    /// Start a dispatcher with the given configuration
    pub fn new(config: DispatcherConfig) -> Result<Self> {
        let (tx, rx) = unbounded::<PendingRequest>();
        let worker_count = config.worker_count();
        let width = config.width;
        let flush_timeout = config.flush_timeout();

        info!(
            workers = worker_count,
            lanes = width.lanes(),
            flush_timeout_ms = config.flush_timeout_ms,
            "starting deadline dispatcher"
        );

        let mut workers = Vec::with_capacity(worker_count);
        for i in 0..worker_count {
            let rx = rx.clone();
            let handle = std::thread::Builder::new()
                .name(format!("deadline-worker-{}", i))
                .spawn(move || worker_loop(rx, width, flush_timeout))
                .map_err(|e| Error::dispatcher(format!("Failed to spawn worker: {}", e)))?;
            workers.push(handle);
        }

        Ok(Self {
            tx: Some(tx),
            workers,
        })
    }

    /// Compute one deadline, blocking until a worker has answered
    ///
    /// The request rides along with whatever other requests share its block
    /// parameters; a lone request is flushed after the configured timeout.
    pub fn calc_deadline(&self, request: DeadlineRequest) -> Result<Deadline> {
        let (reply_tx, reply_rx) = bounded(1);
        let pending = PendingRequest {
            request,
            reply: reply_tx,
        };

        self.tx
            .as_ref()
            .ok_or_else(|| Error::dispatcher("dispatcher already stopped"))?
            .send(pending)
            .map_err(|_| Error::dispatcher("dispatcher already stopped"))?;

        reply_rx
            .recv()
            .map_err(|_| Error::dispatcher("worker dropped the request"))
    }

    /// Stop all workers and wait for them to finish
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if self.tx.take().is_some() {
            info!("stopping deadline dispatcher");
            for handle in self.workers.drain(..) {
                let _ = handle.join();
            }
        }
    }
}

impl Drop for DeadlineDispatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn worker_loop(rx: Receiver<PendingRequest>, width: BatchWidth, flush_timeout: Duration) {
    // A request whose block parameters differ from the open batch is carried
    // into the next one.
    let mut carry: Option<PendingRequest> = None;

    loop {
        let first = match carry.take() {
            Some(pending) => pending,
            None => match rx.recv() {
                Ok(pending) => pending,
                Err(_) => return,
            },
        };

        let mut batch = Vec::with_capacity(width.lanes());
        batch.push(first);
        let flush_at = Instant::now() + flush_timeout;

        while batch.len() < width.lanes() {
            match rx.recv_deadline(flush_at) {
                Ok(pending) if pending.request.params == batch[0].request.params => {
                    batch.push(pending);
                }
                Ok(pending) => {
                    carry = Some(pending);
                    break;
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        debug!(filled = batch.len(), lanes = width.lanes(), "flushing deadline batch");
        match width {
            BatchWidth::X4 => flush_batch::<4>(&batch),
            BatchWidth::X8 => flush_batch::<8>(&batch),
        }
    }
}

fn flush_batch<const N: usize>(batch: &[PendingRequest]) {
    let params = &batch[0].request.params;
    // Unused lanes repeat the first request; their results are dropped.
    let pairs: [(AccountId, Nonce); N] = std::array::from_fn(|i| {
        let request = &batch[if i < batch.len() { i } else { 0 }].request;
        (request.account, request.nonce)
    });

    let deadlines = compute_deadlines::<N>(params, &pairs);
    for (pending, deadline) in batch.iter().zip(deadlines) {
        // A dropped receiver only means the caller went away.
        let _ = pending.reply.send(deadline);
    }
}
