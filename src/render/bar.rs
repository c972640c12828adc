use crate::{
    Columns, Render, Snapshot, Theme,
    style::{self, join_horizontal, join_vertical, title_case},
};
use tracing::debug;

/// Two styled lines spanning the terminal
#[derive(Debug, Clone)]
pub struct StatusBar {
    theme: Theme,
    columns: Columns,
}

impl StatusBar {
    #[must_use]
    pub fn new(theme: Theme, columns: Columns) -> Self {
        Self { theme, columns }
    }
}

impl Render for StatusBar {
    fn render(&self, snapshot: &Snapshot) -> String {
        let w = style::width;
        let columns = self.columns.resolve();
        debug!(columns, "rendering status bar");

        let platform = self.theme.platform.render(&platform_text(snapshot));
        let cpu = self.theme.cpu.render(&cpu_text(snapshot));
        // Sides win when they do not fit together with the host
        let host = self
            .theme
            .host
            .clone()
            .width(columns.saturating_sub(w(&platform) + w(&cpu)))
            .render(&host_text(snapshot));

        let disk = self.theme.disk.render(&disk_text(snapshot));
        let memory = self
            .theme
            .memory
            .clone()
            .width(columns.saturating_sub(w(&disk)))
            .render(&memory_text(snapshot));

        let top = join_horizontal(&[platform.as_str(), host.as_str(), cpu.as_str()]);
        let bottom = join_horizontal(&[memory.as_str(), disk.as_str()]);
        join_vertical(&[top.as_str(), bottom.as_str()])
    }
}

/// e.g. `Ubuntu 22.04`
fn platform_text(snapshot: &Snapshot) -> String {
    let (name, version) = snapshot
        .host
        .as_ref()
        .map(|host| (title_case(&host.platform), host.platform_version.as_str()))
        .unwrap_or_default();
    format!("{name} {version}")
}

/// e.g. `localhost.local arm64`
fn host_text(snapshot: &Snapshot) -> String {
    let (name, arch) = snapshot
        .host
        .as_ref()
        .map(|host| (host.hostname.as_str(), host.kernel_arch.as_str()))
        .unwrap_or_default();
    format!("{name} {arch}")
}

fn cpu_text(snapshot: &Snapshot) -> String {
    snapshot
        .first_cpu()
        .map(|cpu| format!("{} {:.2} MHz", cpu.model_name, cpu.mhz))
        .unwrap_or_default()
}

fn memory_text(snapshot: &Snapshot) -> String {
    let (used, total, percent) = snapshot
        .memory
        .as_ref()
        .map(|m| (m.used_mb(), m.total_mb(), m.used_percent))
        .unwrap_or_default();
    format!("Memory: {used} of {total} MB used ({percent:2.0}%)")
}

fn disk_text(snapshot: &Snapshot) -> String {
    let (used, total, percent) = snapshot
        .disk
        .as_ref()
        .map(|d| (d.used_gb(), d.total_gb(), d.used_percent))
        .unwrap_or_default();
    format!("Disk: {used} of {total} GB used ({percent:2.0}%)")
}
