//! Cost and telemetry collection for a single invocation.
//!
//! None of this feeds back into the model: it only describes what answering
//! a prompt cost on the host.

use axiom_core::round_to;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessesToUpdate, System};
use uuid::Uuid;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Unique identifier for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Create a new random run ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which model produced the answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelUsage {
    pub model_name: String,
}

/// Telemetry block of the result record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Telemetry {
    pub run_id: RunId,
    pub model_usage: ModelUsage,
}

impl Telemetry {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            run_id: RunId::new(),
            model_usage: ModelUsage {
                model_name: model_name.into(),
            },
        }
    }
}

/// Compute cost of answering one prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub unit: String,

    /// Process CPU time in milliseconds, rounded to 2 decimals.
    pub cpu_time_ms: f64,

    /// Growth of resident memory in MB, rounded to 4 decimals, never negative.
    pub peak_memory_mb: f64,

    pub details: String,
}

impl CostSummary {
    /// Build a summary from raw measurements.
    pub fn from_measurements(cpu_time_ms: f64, memory_delta_bytes: i64) -> Self {
        let memory_mb = memory_delta_bytes as f64 / BYTES_PER_MB;
        Self {
            unit: "local_compute".to_string(),
            cpu_time_ms: round_to(cpu_time_ms, 2),
            peak_memory_mb: round_to(memory_mb.max(0.0), 4),
            details: "Computational cost measured on the host system.".to_string(),
        }
    }
}

/// Measures the cost of the work done between [`CostMeter::start`] and
/// [`CostMeter::finish`].
///
/// CPU time is the user plus system time of this process. Where the platform
/// cannot report it, elapsed monotonic time is used instead.
pub struct CostMeter {
    system: System,
    pid: Option<Pid>,
    started: Instant,
    baseline_cpu: Option<Duration>,
    baseline_memory: Option<u64>,
}

impl CostMeter {
    /// Snapshot the current process and start the clock.
    pub fn start() -> Self {
        let mut system = System::new();
        let pid = sysinfo::get_current_pid()
            .map_err(|err| tracing::warn!(error = err, "cannot observe current process"))
            .ok();
        let baseline_memory = pid.and_then(|pid| resident_memory(&mut system, pid));

        Self {
            system,
            pid,
            started: Instant::now(),
            baseline_cpu: process_cpu_time(),
            baseline_memory,
        }
    }

    /// Stop the clock and compute the cost summary.
    pub fn finish(mut self) -> CostSummary {
        let cpu_time = match (self.baseline_cpu, process_cpu_time()) {
            (Some(before), Some(after)) => after.saturating_sub(before),
            _ => {
                tracing::debug!("process CPU time unavailable, using elapsed time");
                self.started.elapsed()
            }
        };
        let cpu_time_ms = cpu_time.as_secs_f64() * 1000.0;

        let current_memory = self
            .pid
            .and_then(|pid| resident_memory(&mut self.system, pid));
        let memory_delta = match (self.baseline_memory, current_memory) {
            (Some(before), Some(after)) => after as i64 - before as i64,
            _ => 0,
        };

        tracing::debug!(cpu_time_ms, memory_delta, "measured invocation cost");
        CostSummary::from_measurements(cpu_time_ms, memory_delta)
    }
}

fn resident_memory(system: &mut System, pid: Pid) -> Option<u64> {
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]));
    system.process(pid).map(|process| process.memory())
}

/// User plus system CPU time consumed by this process so far.
#[cfg(unix)]
fn process_cpu_time() -> Option<Duration> {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: getrusage only writes into the struct we own.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    // SAFETY: getrusage succeeded, so the struct is initialized.
    let usage = unsafe { usage.assume_init() };
    Some(timeval_duration(usage.ru_utime) + timeval_duration(usage.ru_stime))
}

#[cfg(not(unix))]
fn process_cpu_time() -> Option<Duration> {
    None
}

#[cfg(unix)]
fn timeval_duration(tv: libc::timeval) -> Duration {
    Duration::from_secs(tv.tv_sec.max(0) as u64) + Duration::from_micros(tv.tv_usec.max(0) as u64)
}
