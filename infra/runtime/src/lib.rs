//! # Runtime
//!
//! Standard [Tokio](https://tokio.rs) runtime profiles for EDU PATH binaries.
//!
//! ## Profiles
//! * **Cooperative** (default): a current-thread scheduler. UI-facing work runs on one
//!   logical thread and only yields at `.await` points, which is the model the checkout
//!   simulation and the navigation shell are written against.
//! * **High Performance**: a multi-threaded scheduler sized to the host, for batch tooling.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[edupath_runtime::main(cooperative)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use edupath_derive::main;

use anyhow::anyhow;
use std::{sync::OnceLock, thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const DEFAULT_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 256;
/// 2 `MiB` stacks are plenty for UI-driven tasks.
const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const DEFAULT_THREAD_NAME: &str = "edupath-worker";

static DETECTED_THREADS: OnceLock<usize> = OnceLock::new();

fn detected_threads() -> usize {
    *DETECTED_THREADS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|&n| (1..=MAX_WORKER_THREADS).contains(&n))
            .unwrap_or_else(|| {
                available_parallelism().map_or(DEFAULT_WORKER_THREADS, std::num::NonZero::get)
            })
    })
}

/// Scheduler flavor of a runtime profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Everything runs on the thread that calls `block_on`.
    CurrentThread,
    /// Work-stealing pool with `worker_threads` workers.
    MultiThread,
}

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub flavor: Flavor,
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::cooperative()
    }
}

impl RuntimeConfig {
    /// Single-threaded cooperative scheduling.
    #[must_use]
    pub fn cooperative() -> Self {
        Self {
            flavor: Flavor::CurrentThread,
            worker_threads: 1,
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: Duration::from_secs(10),
        }
    }

    /// Multi-threaded preset sized to the host.
    #[must_use]
    pub fn high_performance() -> Self {
        Self {
            flavor: Flavor::MultiThread,
            worker_threads: detected_threads(),
            stack_size: 4 * 1024 * 1024,
            thread_name: "edupath-hp".to_owned(),
            thread_keep_alive: Duration::from_secs(60),
        }
    }

    #[must_use = "Customize the number of worker threads for the runtime"]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKER_THREADS);
        self
    }

    #[must_use = "Customize the stack size for worker threads"]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use = "Customize the thread name"]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name = if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }

    fn normalized(&self) -> Self {
        self.clone()
            .with_worker_threads(self.worker_threads)
            .with_stack_size(self.stack_size)
            .with_thread_name(self.thread_name.clone())
    }
}

/// Builds a runtime for the given profile with IO and timers enabled.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if Tokio cannot create the runtime, typically because the
/// OS refused to spawn worker threads.
///
/// # Examples
///
/// ```rust
/// use edupath_runtime::{RuntimeConfig, build_runtime_with_config};
///
/// let rt = build_runtime_with_config(&RuntimeConfig::cooperative())?;
/// let answer = rt.block_on(async { 42 });
/// assert_eq!(answer, 42);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(config = ?config, "Building tokio runtime");

    let mut builder = match config.flavor {
        Flavor::CurrentThread => Builder::new_current_thread(),
        Flavor::MultiThread => {
            let mut builder = Builder::new_multi_thread();
            builder.worker_threads(config.worker_threads);
            builder
        },
    };

    builder
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all();

    builder.build().map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}
