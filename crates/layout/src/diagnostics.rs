//! Observation hooks for layout passes.
//!
//! Observers are told when a pass starts and finishes and which nodes it
//! visits. They only watch: nothing they do can change computed geometry.

use crate::tree::{Node, NodeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// The two traversals of a layout call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Bottom-up content sizing.
    Intrinsic,
    /// Top-down size distribution and positioning.
    Resolve,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Intrinsic => f.write_str("intrinsic"),
            Pass::Resolve => f.write_str("resolve"),
        }
    }
}

/// Receives callbacks at fixed points of a layout call. All methods default
/// to no-ops.
pub trait LayoutObserver: Send + Sync {
    fn pass_started(&self, _pass: Pass) {}
    fn pass_finished(&self, _pass: Pass) {}
    fn node_visited(&self, _pass: Pass, _id: NodeId, _node: &Node) {}
}

/// The default observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl LayoutObserver for NoOpObserver {}

/// Forwards every callback to the `log` facade: pass boundaries at `debug`,
/// node visits at `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl LayoutObserver for LogObserver {
    fn pass_started(&self, pass: Pass) {
        log::debug!("Layout pass '{}' started", pass);
    }

    fn pass_finished(&self, pass: Pass) {
        log::debug!("Layout pass '{}' finished", pass);
    }

    fn node_visited(&self, pass: Pass, id: NodeId, node: &Node) {
        log::trace!(
            "[{}] visit {} ({})",
            pass,
            id,
            node.name().unwrap_or("anonymous")
        );
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PassStats {
    pub runs: usize,
    pub visits: usize,
    pub total: Duration,
}

/// Accumulates wall time and visit counts per pass across layout calls.
pub struct PassProfiler {
    started: Mutex<HashMap<Pass, Instant>>,
    stats: Mutex<HashMap<Pass, PassStats>>,
    visits: AtomicUsize,
}

impl PassProfiler {
    pub fn new() -> Self {
        Self {
            started: Mutex::new(HashMap::new()),
            stats: Mutex::new(HashMap::new()),
            visits: AtomicUsize::new(0),
        }
    }

    pub fn stats(&self, pass: Pass) -> PassStats {
        self.stats
            .lock()
            .ok()
            .and_then(|stats| stats.get(&pass).copied())
            .unwrap_or_default()
    }

    /// Total node visits across every pass.
    pub fn total_visits(&self) -> usize {
        self.visits.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        if let Ok(mut stats) = self.stats.lock() {
            stats.clear();
        }
        if let Ok(mut started) = self.started.lock() {
            started.clear();
        }
        self.visits.store(0, Ordering::Release);
    }

    pub fn log_summary(&self) {
        log::info!("=== Layout Profile ===");
        log::info!("Node visits: {}", self.total_visits());
        for pass in [Pass::Intrinsic, Pass::Resolve] {
            let stats = self.stats(pass);
            if stats.runs == 0 {
                continue;
            }
            log::info!(
                "{}: {} run(s), {} visit(s), {:?} total",
                pass,
                stats.runs,
                stats.visits,
                stats.total
            );
        }
    }
}

impl Default for PassProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutObserver for PassProfiler {
    fn pass_started(&self, pass: Pass) {
        if let Ok(mut started) = self.started.lock() {
            started.insert(pass, Instant::now());
        }
    }

    fn pass_finished(&self, pass: Pass) {
        let elapsed = self
            .started
            .lock()
            .ok()
            .and_then(|mut started| started.remove(&pass))
            .map(|start| start.elapsed())
            .unwrap_or_default();
        if let Ok(mut stats) = self.stats.lock() {
            let entry = stats.entry(pass).or_default();
            entry.runs += 1;
            entry.total += elapsed;
        }
    }

    fn node_visited(&self, pass: Pass, _id: NodeId, _node: &Node) {
        self.visits.fetch_add(1, Ordering::Release);
        if let Ok(mut stats) = self.stats.lock() {
            stats.entry(pass).or_default().visits += 1;
        }
    }
}
