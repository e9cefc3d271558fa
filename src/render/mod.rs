//! Background markdown rendering with ordered commits
//!
//! Conversion runs on a worker thread so typing never blocks on the parser.
//! Every request carries a monotonically increasing sequence token; the UI
//! commits a completed conversion only if its token matches the latest
//! request. A superseded conversion is never cancelled mid-parse, its result
//! is simply dropped on arrival. Pending requests are coalesced on the worker
//! side so only the newest input is parsed after a burst of keystrokes.

use crate::markdown::{parse_markdown, sanitize_tree, MarkdownDocument};
use log::{debug, warn};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

// ─────────────────────────────────────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────────────────────────────────────

/// A conversion request tagged with its sequence token.
#[derive(Debug, Clone)]
struct RenderRequest {
    seq: u64,
    source: String,
}

/// A completed conversion, still carrying the token of the request that
/// produced it.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    /// Sequence token of the originating request
    pub seq: u64,
    /// The parsed, sanitized node tree
    pub document: MarkdownDocument,
    /// Number of HTML nodes / unsafe URLs the sanitizer neutralized
    pub stripped: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Worker
// ─────────────────────────────────────────────────────────────────────────────

/// Handle to the background render thread.
///
/// The worker thread exits on its own when the handle is dropped (the
/// request channel disconnects).
pub struct RenderWorker {
    requests: Sender<RenderRequest>,
    results: Receiver<RenderOutcome>,
    /// Token of the most recently submitted request; only results matching
    /// this token may be committed.
    latest_seq: u64,
}

impl RenderWorker {
    /// Spawn the worker thread.
    pub fn spawn() -> Self {
        let (request_tx, request_rx) = channel::<RenderRequest>();
        let (result_tx, result_rx) = channel::<RenderOutcome>();

        thread::spawn(move || {
            while let Ok(mut request) = request_rx.recv() {
                // Coalesce a burst of edits: only the newest pending input
                // is worth parsing.
                while let Ok(newer) = request_rx.try_recv() {
                    debug!("Coalescing render request seq {}", request.seq);
                    request = newer;
                }

                let mut document = parse_markdown(&request.source);
                let stripped = sanitize_tree(&mut document.root);

                let outcome = RenderOutcome {
                    seq: request.seq,
                    document,
                    stripped,
                };
                if result_tx.send(outcome).is_err() {
                    // UI side is gone
                    break;
                }
            }
        });

        Self {
            requests: request_tx,
            results: result_rx,
            latest_seq: 0,
        }
    }

    /// Submit the current markdown source for conversion.
    ///
    /// Returns the sequence token assigned to this request.
    pub fn submit(&mut self, source: &str) -> u64 {
        self.latest_seq += 1;
        let request = RenderRequest {
            seq: self.latest_seq,
            source: source.to_string(),
        };
        if self.requests.send(request).is_err() {
            warn!("Render worker is no longer running; preview will not update");
        }
        self.latest_seq
    }

    /// Poll for a committed conversion result.
    ///
    /// Drains everything the worker has finished and returns only a result
    /// whose token matches the latest submission. Stale results are dropped.
    pub fn poll(&mut self) -> Option<RenderOutcome> {
        let mut committed = None;
        while let Ok(outcome) = self.results.try_recv() {
            if outcome.seq == self.latest_seq {
                committed = Some(outcome);
            } else {
                debug!(
                    "Dropping stale render result: seq {} (latest {})",
                    outcome.seq, self.latest_seq
                );
            }
        }
        committed
    }

    /// Whether a submitted conversion has not been committed yet.
    ///
    /// Used by the UI to keep requesting repaints while a parse is pending.
    pub fn is_pending(&self, committed_seq: u64) -> bool {
        committed_seq < self.latest_seq
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
