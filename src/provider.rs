//! Sources of host metrics

use crate::{Category, CpuInfo, DiskUsage, HostInfo, MemoryInfo, MetricError, MetricResult};
use rustix::{fs as rfs, system};
use std::{path::Path, thread};
use sysinfo::{MINIMUM_CPU_UPDATE_INTERVAL, System};

/// Point-in-time host metrics.
///
/// Every query is independent and may block; none of them is retried.
pub trait MetricsProvider {
    fn host(&self) -> MetricResult<HostInfo>;
    fn cpu_info(&self) -> MetricResult<Vec<CpuInfo>>;
    fn memory(&self) -> MetricResult<MemoryInfo>;
    fn disk(&self, mount: &Path) -> MetricResult<DiskUsage>;
    /// Per-core load over the shortest interval the platform can measure
    fn cpu_percent(&self) -> MetricResult<Vec<f64>>;
}

/// Metrics of the machine we are running on
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProvider;

impl MetricsProvider for SystemProvider {
    fn host(&self) -> MetricResult<HostInfo> {
        let uname = system::uname();
        let hostname = uname.nodename().to_string_lossy().into_owned();
        if hostname.is_empty() {
            return Err(MetricError::unavailable(Category::Host, "empty node name"));
        }
        Ok(HostInfo {
            hostname,
            platform: System::distribution_id(),
            platform_version: System::os_version().unwrap_or_default(),
            kernel_arch: uname.machine().to_string_lossy().into_owned(),
        })
    }

    fn cpu_info(&self) -> MetricResult<Vec<CpuInfo>> {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        let family = cpu_family();
        let cpus = sys
            .cpus()
            .iter()
            .map(|cpu| CpuInfo {
                model_name: cpu.brand().trim().to_owned(),
                family: family.clone(),
                mhz: cpu.frequency() as f64,
            })
            .collect::<Vec<_>>();

        if cpus.is_empty() {
            return Err(MetricError::unavailable(Category::Cpu, "no processors listed"));
        }
        Ok(cpus)
    }

    fn memory(&self) -> MetricResult<MemoryInfo> {
        let mut sys = System::new();
        sys.refresh_memory();

        let total = sys.total_memory();
        let available = sys.available_memory();
        if total == 0 {
            return Err(MetricError::unavailable(Category::Memory, "zero total memory"));
        }
        Ok(MemoryInfo {
            total,
            available,
            used_percent: total.saturating_sub(available) as f64 / total as f64 * 100.0,
        })
    }

    fn disk(&self, mount: &Path) -> MetricResult<DiskUsage> {
        let stat = rfs::statvfs(mount).map_err(|err| {
            MetricError::unavailable(Category::Disk, format!("{}: {err}", mount.display()))
        })?;
        Ok(DiskUsage::from_blocks(
            stat.f_blocks,
            stat.f_bfree,
            stat.f_bavail,
            stat.f_frsize,
        ))
    }

    fn cpu_percent(&self) -> MetricResult<Vec<f64>> {
        // The first refresh only records a baseline; every core reads 0 there
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu_usage();

        let load = sys
            .cpus()
            .iter()
            .map(|cpu| f64::from(cpu.cpu_usage()))
            .collect::<Vec<_>>();

        if load.is_empty() {
            return Err(MetricError::unavailable(Category::CpuLoad, "no processors listed"));
        }
        Ok(load)
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
fn cpu_family() -> String {
    raw_cpuid::CpuId::new()
        .get_feature_info()
        .map(|info| info.family_id().to_string())
        .unwrap_or_default()
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
fn cpu_family() -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        hint,
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
    };

    #[test]
    fn missing_mount_is_unavailable() {
        let err = SystemProvider
            .disk(Path::new("/definitely/not/a/mount/point"))
            .unwrap_err();
        assert_eq!(err.category(), Category::Disk);
    }

    #[test]
    fn root_usage_is_consistent() {
        let Ok(usage) = SystemProvider.disk(Path::new("/")) else {
            return;
        };
        assert!(usage.used <= usage.total);
        assert!((0.0..=100.0).contains(&usage.used_percent));
    }

    #[test]
    fn memory_percent_in_range() {
        let Ok(memory) = SystemProvider.memory() else {
            return;
        };
        assert!(memory.available <= memory.total);
        assert!((0.0..=100.0).contains(&memory.used_percent));
    }

    #[test]
    fn load_rises_while_cores_spin() {
        let stop = Arc::new(AtomicBool::new(false));
        let spinners = (0..thread::available_parallelism().map_or(1, usize::from))
            .map(|_| {
                let stop = Arc::clone(&stop);
                thread::spawn(move || {
                    while !stop.load(Ordering::Relaxed) {
                        hint::spin_loop();
                    }
                })
            })
            .collect::<Vec<_>>();

        let load = SystemProvider.cpu_percent();
        stop.store(true, Ordering::Relaxed);
        for spinner in spinners {
            spinner.join().unwrap();
        }

        let load = load.unwrap();
        assert!(load.iter().any(|&percent| percent > 0.0), "{load:?}");
    }
}
