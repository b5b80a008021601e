mod app;
mod catalog;
mod config;
mod input;
mod models;
mod ui;
mod watch;

use anyhow::Result;
use app::App;
use catalog::Catalog;
use clap::Parser;
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mntui", about = "toggle user-mountable fstab entries from a TUI", version = "0.1")]
struct Cli {
    /// Fallback refresh interval in milliseconds
    #[arg(short, long, default_value_t = 2000)]
    interval: u64,

    /// Color theme: default, nord
    #[arg(short = 't', long, default_value = "default")]
    theme: String,

    /// Static mount table to read (overrides config)
    #[arg(long)]
    fstab: Option<PathBuf>,

    /// Live mount table to watch (overrides config)
    #[arg(long)]
    mtab: Option<PathBuf>,

    /// Print eligible entries and their mounted state, then exit
    #[arg(long)]
    list: bool,

    /// Print a JSON snapshot of eligible entries and exit
    #[arg(long)]
    json: bool,

    /// Mount or unmount one entry by mount point, then exit
    #[arg(long, value_name = "MOUNTPOINT")]
    toggle: Option<String>,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();
    if let Some(p) = cli.fstab { cfg.tables.fstab = p; }
    if let Some(p) = cli.mtab  { cfg.tables.mtab  = p; }

    if cli.config {
        return run_print_config(&cfg);
    }
    if cli.list {
        return run_list(&cfg);
    }
    if cli.json {
        return run_json_snapshot(&cfg);
    }
    if let Some(mp) = cli.toggle {
        return run_toggle(&cfg, &mp);
    }

    let initial_theme = ui::theme::ThemeVariant::from_name(&cli.theme);

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let result = run(cfg, initial_theme, cli.interval);
    restore_terminal()?;
    result
}

fn run_list(cfg: &Config) -> Result<()> {
    let cat = Catalog::new(cfg);
    if cat.entries.is_empty() {
        println!("No user-mountable entries in {}.", cfg.tables.fstab.display());
        return Ok(());
    }
    for e in &cat.entries {
        println!(
            "{:<9}  {:<24} {:<16} {:<8} {}",
            e.state_label(), e.mount_point, e.device, e.fs_type, e.options,
        );
    }
    Ok(())
}

fn run_json_snapshot(cfg: &Config) -> Result<()> {
    use serde_json::{json, Value};

    let cat = Catalog::new(cfg);
    let entries: Vec<Value> = cat.entries.iter().map(|e| {
        json!({
            "device":      e.device,
            "mount_point": e.mount_point,
            "fs_type":     e.fs_type,
            "options":     e.options,
            "mounted":     e.mounted,
        })
    }).collect();

    let snapshot = json!({
        "mntui_version": "0.1",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "fstab":   cfg.tables.fstab.display().to_string(),
        "mtab":    cfg.tables.mtab.display().to_string(),
        "entries": entries,
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_toggle(cfg: &Config, mount_point: &str) -> Result<()> {
    let mut cat = Catalog::new(cfg);
    let Some(idx) = cat.entries.iter().position(|e| e.mount_point == mount_point) else {
        eprintln!(
            "{}: not a user-mountable entry in {}",
            mount_point,
            cfg.tables.fstab.display(),
        );
        std::process::exit(1);
    };
    let was_mounted = cat.entries[idx].mounted;
    cat.toggle(idx);
    println!(
        "{} {}",
        if was_mounted { "unmounting" } else { "mounting" },
        mount_point,
    );
    Ok(())
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[general]");
    println!("  refresh_interval_ms = {}", cfg.general.refresh_interval_ms);
    println!();
    println!("[tables]");
    println!("  fstab = {}", cfg.tables.fstab.display());
    println!("  mtab  = {}", cfg.tables.mtab.display());
    println!();
    println!("[tools]");
    println!("  mount  = {}", cfg.tools.mount);
    println!("  umount = {}", cfg.tools.umount);
    println!();
    println!("[keys]");
    println!("  enable_list_shortcut = {}", cfg.keys.enable_list_shortcut);
    println!("  toggle_list          = {}", cfg.keys.toggle_list);
    Ok(())
}

fn run(cfg: Config, initial_theme: ui::theme::ThemeVariant, interval_ms: u64) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    let interval = if interval_ms != 2000 { interval_ms } else { cfg.general.refresh_interval_ms };
    let catalog  = Catalog::new(&cfg);
    let shortcut = cfg.list_shortcut();

    let mut app = App::new(catalog, shortcut, initial_theme, interval);
    app.run(&mut term)?;

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
