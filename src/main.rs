use anyhow::Result;
use argh::FromArgs;
use std::{
    env,
    io::{self, Write as _},
    path::PathBuf,
};
use sysbar::{Background, Columns, Config, DEFAULT_MOUNT, Mode, Snapshot, SystemProvider};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Show host, CPU, memory and disk usage as a two-line status bar
struct Arguments {
    #[argh(switch)]
    /// print one fact per line instead of the bar, including per-core load
    plain: bool,

    #[argh(option)]
    /// lay the bar out for this many columns instead of the terminal width
    width: Option<u16>,

    #[argh(option, default = "PathBuf::from(DEFAULT_MOUNT)")]
    /// mount point whose disk usage is shown
    mount: PathBuf,
}

impl From<Arguments> for Config {
    fn from(other: Arguments) -> Config {
        let mode = if other.plain { Mode::Plain } else { Mode::Bar };
        let columns = other.width.map_or(Columns::Terminal, Columns::Fixed);
        let background = Background::from_name(env::var("SYSBAR_THEME").ok().as_deref());
        let no_color = env::var_os("NO_COLOR").is_some();

        Config {
            mode,
            columns,
            mount: other.mount,
            background,
            no_color,
        }
    }
}

/// Silent unless `SYSBAR_LOG` asks otherwise
fn init_logging() {
    let filter = EnvFilter::try_from_env("SYSBAR_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let args: Arguments = argh::from_env();
    init_logging();

    let config = Config::from(args);
    debug!(?config, "starting");
    let renderer = config.renderer();

    let builder = Snapshot::builder(&SystemProvider)
        .host()
        .cpu()
        .memory()
        .disk(&config.mount);
    let snapshot = if renderer.needs_cpu_load() {
        builder.cpu_load()
    } else {
        builder
    }
    .build();

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", renderer.render(&snapshot))?;
    stdout.flush()?;
    Ok(())
}
