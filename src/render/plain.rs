use crate::{CpuInfo, DiskUsage, HostInfo, MemoryInfo, Render, Snapshot};

/// Unstyled, one fact per line
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Render for Plain {
    fn render(&self, snapshot: &Snapshot) -> String {
        let mut lines = Vec::new();
        if let Some(host) = &snapshot.host {
            lines.extend(host_lines(host));
        }
        if let Some(cpu) = snapshot.first_cpu() {
            lines.push(cpu_line(cpu));
        }
        if let Some(memory) = &snapshot.memory {
            lines.extend(memory_lines(memory));
        }
        if let Some(disk) = &snapshot.disk {
            lines.extend(disk_lines(disk));
        }
        if let Some(load) = &snapshot.cpu_load {
            lines.extend(cores_lines(load));
        }
        lines.join("\n")
    }

    fn needs_cpu_load(&self) -> bool {
        true
    }
}

fn host_lines(host: &HostInfo) -> [String; 2] {
    [
        format!("Hostname: {}", host.hostname),
        format!(
            "Operating System: {} {} ({})",
            host.platform, host.platform_version, host.kernel_arch
        ),
    ]
}

fn cpu_line(cpu: &CpuInfo) -> String {
    format!(
        "Model Name: {} Family: {} Speed: {:.2} MHz",
        cpu.model_name, cpu.family, cpu.mhz
    )
}

fn memory_lines(memory: &MemoryInfo) -> [String; 3] {
    [
        format!("Total memory: {} MB", memory.total_mb()),
        format!("Free memory: {} MB", memory.available_mb()),
        format!("Percentage used memory: {:.2} %", memory.used_percent),
    ]
}

fn disk_lines(disk: &DiskUsage) -> [String; 4] {
    [
        format!("Total disk space: {} GB", disk.total_gb()),
        format!("Used disk space: {} GB", disk.used_gb()),
        format!("Free disk space: {} GB", disk.free_gb()),
        format!("Percentage disk space usage: {:.2} %", disk.used_percent),
    ]
}

/// Halves at `len / 2`, so the second half is the longer one for odd counts
#[must_use]
pub fn split_cores(load: &[f64]) -> (&[f64], &[f64]) {
    load.split_at(load.len() / 2)
}

fn core_line(idx: usize, percent: f64) -> String {
    format!("\tCPU [{idx}]: {percent:.2} %")
}

fn cores_lines(load: &[f64]) -> Vec<String> {
    let (first, second) = split_cores(load);

    let mut lines = vec!["Cores:".to_owned()];
    for (idx, percent) in first.iter().enumerate() {
        lines.push(core_line(idx, *percent));
    }

    let offset = first.len();
    for (idx, percent) in second.iter().enumerate() {
        lines.push(core_line(idx + offset, *percent));
    }
    lines
}
