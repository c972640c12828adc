use crate::{MetricResult, MetricsProvider, units};
use std::path::Path;
use tracing::{debug, trace};

/// Mount point whose usage is reported unless configured otherwise
pub const DEFAULT_MOUNT: &str = "/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInfo {
    pub hostname: String,
    /// Distribution id, e.g. `ubuntu`
    pub platform: String,
    pub platform_version: String,
    /// Machine name from `uname`, e.g. `x86_64`
    pub kernel_arch: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuInfo {
    pub model_name: String,
    pub family: String,
    pub mhz: f64,
}

/// Virtual memory, in bytes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryInfo {
    pub total: u64,
    pub available: u64,
    pub used_percent: f64,
}

impl MemoryInfo {
    #[must_use]
    pub fn total_mb(&self) -> u64 {
        units::megabytes(self.total)
    }

    #[must_use]
    pub fn available_mb(&self) -> u64 {
        units::megabytes(self.available)
    }

    /// Derived from the already truncated totals, so it may be off by a megabyte from what
    /// the OS itself reports as used.
    #[must_use]
    pub fn used_mb(&self) -> u64 {
        self.total_mb().saturating_sub(self.available_mb())
    }
}

/// Filesystem usage, in bytes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub used_percent: f64,
}

impl DiskUsage {
    /// Usage from `statvfs` block counts.
    ///
    /// `free` counts only blocks available to unprivileged users, while `used` is everything
    /// not free at all, so `used + free` may be less than `total` on filesystems with
    /// reserved blocks.
    #[must_use]
    pub fn from_blocks(blocks: u64, blocks_free: u64, blocks_avail: u64, fragment: u64) -> Self {
        let total = blocks.saturating_mul(fragment);
        let free = blocks_avail.saturating_mul(fragment);
        let used = blocks.saturating_sub(blocks_free).saturating_mul(fragment);
        let seen = used.saturating_add(free);
        let used_percent = if seen == 0 {
            0.0
        } else {
            used as f64 / seen as f64 * 100.0
        };
        Self {
            total,
            used,
            free,
            used_percent,
        }
    }

    #[must_use]
    pub fn total_gb(&self) -> u64 {
        units::gigabytes(self.total)
    }

    #[must_use]
    pub fn used_gb(&self) -> u64 {
        units::gigabytes(self.used)
    }

    #[must_use]
    pub fn free_gb(&self) -> u64 {
        units::gigabytes(self.free)
    }
}

/// Everything that was readable during one run.
///
/// Every category is optional on its own: `None` means the provider failed, which is not the
/// same as a zero reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub host: Option<HostInfo>,
    pub cpu: Option<Vec<CpuInfo>>,
    pub memory: Option<MemoryInfo>,
    pub disk: Option<DiskUsage>,
    /// Per-core load in percent, in core order
    pub cpu_load: Option<Vec<f64>>,
}

impl Snapshot {
    pub fn builder<P: MetricsProvider + ?Sized>(provider: &P) -> SnapshotBuilder<'_, P> {
        SnapshotBuilder {
            provider,
            snapshot: Snapshot::default(),
        }
    }

    /// Host, CPU, memory and root disk, in that order
    pub fn gather<P: MetricsProvider + ?Sized>(provider: &P) -> Self {
        Self::builder(provider)
            .host()
            .cpu()
            .memory()
            .disk(Path::new(DEFAULT_MOUNT))
            .build()
    }

    /// First CPU record, the only one anything is rendered from
    #[must_use]
    pub fn first_cpu(&self) -> Option<&CpuInfo> {
        self.cpu.as_deref().and_then(|cpus| cpus.first())
    }
}

/// Queries categories one at a time, keeping whatever succeeds
pub struct SnapshotBuilder<'a, P: MetricsProvider + ?Sized> {
    provider: &'a P,
    snapshot: Snapshot,
}

fn best_effort<T>(result: MetricResult<T>) -> Option<T> {
    result
        .inspect_err(|err| debug!(category = %err.category(), "dropping category: {err}"))
        .ok()
}

impl<P: MetricsProvider + ?Sized> SnapshotBuilder<'_, P> {
    #[must_use]
    pub fn host(mut self) -> Self {
        self.snapshot.host = best_effort(self.provider.host());
        self
    }

    #[must_use]
    pub fn cpu(mut self) -> Self {
        self.snapshot.cpu = best_effort(self.provider.cpu_info());
        self
    }

    #[must_use]
    pub fn memory(mut self) -> Self {
        self.snapshot.memory = best_effort(self.provider.memory());
        self
    }

    #[must_use]
    pub fn disk(mut self, mount: &Path) -> Self {
        self.snapshot.disk = best_effort(self.provider.disk(mount));
        self
    }

    #[must_use]
    pub fn cpu_load(mut self) -> Self {
        self.snapshot.cpu_load = best_effort(self.provider.cpu_percent());
        self
    }

    pub fn build(self) -> Snapshot {
        trace!(snapshot = ?self.snapshot, "snapshot built");
        self.snapshot
    }
}
