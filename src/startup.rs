// Startup module - displays banner and module loading status
//
// Runs before the TUI takes over the screen (or in headless mode):
// version info, config file status, and which optional modules are on.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Module status for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

/// Print the startup banner and module status
pub fn print_startup(config: &Config, speech_available: bool) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}quotd{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Terminal quote viewer{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    println!("  {DIM}Loading modules...{RESET}");
    for module in get_module_status(config, speech_available) {
        print_module_status(&module);
    }
    println!();

    if config.offline {
        println!("  {YELLOW}▸{RESET} {YELLOW}Offline mode{RESET} {DIM}(bundled quotes){RESET}");
    } else {
        println!(
            "  {MAGENTA}▸{RESET} Source {BOLD}{}{RESET}",
            config.source_url()
        );
    }
    println!();
}

/// Status of all modules based on config and probed capabilities
fn get_module_status(config: &Config, speech_available: bool) -> Vec<ModuleStatus> {
    vec![
        ModuleStatus {
            name: "loader",
            enabled: true, // Core, always on
            description: "Quote fetching",
        },
        ModuleStatus {
            name: "picker",
            enabled: true, // Core, always on
            description: "Random selection",
        },
        ModuleStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: "Terminal interface",
        },
        ModuleStatus {
            name: "cache",
            enabled: config.cache.enabled && !config.offline,
            description: "24h quote cache",
        },
        ModuleStatus {
            name: "progress",
            enabled: config.streamed_progress && !config.offline,
            description: "Streamed download",
        },
        ModuleStatus {
            name: "speech",
            enabled: config.speech.enabled && speech_available,
            description: "Read quotes aloud",
        },
    ]
}

/// Print a single module's status
fn print_module_status(module: &ModuleStatus) {
    use colors::*;

    let (icon, style) = if module.enabled {
        (format!("{GREEN}✓{RESET}"), "")
    } else {
        (format!("{DIM}○{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<10}{RESET} {DIM}{}{RESET}",
        module.name, module.description
    );
}

/// Log the same boot sequence into the TUI log panel
pub fn log_startup(config: &Config, speech_available: bool) {
    tracing::info!("quotd v{VERSION}");

    for module in get_module_status(config, speech_available) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }

    if config.offline {
        tracing::info!("▸ Offline mode (bundled quotes)");
    } else {
        tracing::info!("▸ Source {}", config.source_url());
    }
}
