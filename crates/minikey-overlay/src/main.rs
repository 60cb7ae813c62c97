//! MiniKeyboard overlay command-line entry point.
//!
//! The window itself is not part of this crate; this binary drives the same
//! dispatcher a button click would, which makes it handy for scripting and for
//! checking what a combination string really sends.
//!
//! ```text
//! minikey-overlay click "LControlKey+C"
//! minikey-overlay --dry-run hold "LShiftKey+Home" --millis 250
//! minikey-overlay state LShiftKey
//! ```
//!
//! # Startup
//!
//! 1. CLI arguments are parsed with `clap` into a [`Cli`] struct.
//! 2. The config file is read (`--config` or the platform default).
//! 3. `tracing_subscriber` is initialised.  `RUST_LOG` wins; otherwise the
//!    config's `general.log_level` is used.
//! 4. The platform injector (or the recording injector for `--dry-run`) is
//!    handed to a [`CombinationDispatcher`] and the subcommand runs.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use minikey_core::{default_buttons, keymap::registry, KeyMapper};
use minikey_overlay::application::dispatch_combination::{
    CombinationDispatcher, DispatchOutcome, DispatchSettings, KeyInjector,
};
use minikey_overlay::infrastructure::{
    input_injection::{default_injector, mock::RecordingInjector},
    storage::config::{load_config, load_config_from, AppConfig},
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// MiniKeyboard overlay: send key combinations to the focused application.
#[derive(Debug, Parser)]
#[command(name = "minikey-overlay", version)]
struct Cli {
    /// Record key events and print them instead of sending them to the OS.
    #[arg(long, global = true)]
    dry_run: bool,

    /// Path to the config file.  Defaults to the platform config directory.
    #[arg(long, global = true, env = "MINIKEY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every recognised key token.
    Keys,
    /// List the stock overlay buttons and the keys they send.
    Buttons,
    /// Press and release a combination, e.g. "LControlKey+C".
    Click { combination: String },
    /// Press a combination, keep it held, then release it.
    Hold {
        combination: String,
        /// How long to keep the keys down.
        #[arg(long, default_value_t = 100)]
        millis: u64,
    },
    /// Report whether a key is currently pressed.
    State { token: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => load_config().unwrap_or_else(|e| {
            eprintln!("warning: using default config: {e}");
            AppConfig::default()
        }),
    };

    // ── Logging setup ─────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = DispatchSettings::from(&config.dispatch);

    if cli.dry_run {
        let mut dispatcher = CombinationDispatcher::with_settings(RecordingInjector::new(), settings);
        run(cli.command, &mut dispatcher)?;
        for event in dispatcher.injector().events() {
            println!(
                "{:<5} {:<12} scan=0x{:04X} extended={}",
                event.direction, event.key, event.scan_code, event.extended
            );
        }
        return Ok(());
    }

    let injector = default_injector().context("initialising key injector")?;
    let mut dispatcher = CombinationDispatcher::with_settings(injector, settings);
    run(cli.command, &mut dispatcher)
}

fn run<I: KeyInjector>(
    command: Command,
    dispatcher: &mut CombinationDispatcher<I>,
) -> anyhow::Result<()> {
    match command {
        Command::Keys => {
            for (token, key) in registry::tokens() {
                let mut notes = Vec::new();
                if key.is_modifier() {
                    notes.push("modifier");
                }
                if key.is_extended() {
                    notes.push("extended");
                }
                println!(
                    "{token:<12} vk=0x{:02X} {}",
                    KeyMapper::to_windows_vk(key),
                    notes.join(",")
                );
            }
        }
        Command::Buttons => {
            for button in default_buttons() {
                println!(
                    "{} {:<8} {:<16} -> {}",
                    button.icon,
                    button.display_text,
                    button.key_combination,
                    button.combination()
                );
            }
        }
        Command::Click { combination } => {
            let outcome = dispatcher.send_down(&combination);
            report("click", &combination, &outcome);
        }
        Command::Hold {
            combination,
            millis,
        } => {
            let down = dispatcher.send_down_only(&combination);
            report("press", &combination, &down);
            std::thread::sleep(Duration::from_millis(millis));
            let up = dispatcher.send_up_only(&combination);
            report("release", &combination, &up);
        }
        Command::State { token } => {
            let key = KeyMapper::resolve_token(token.trim())
                .with_context(|| format!("unknown key token {token:?}"))?;
            let pressed = dispatcher.is_pressed(key);
            println!("{key} {}", if pressed { "down" } else { "up" });
        }
    }
    Ok(())
}

fn report(action: &str, combination: &str, outcome: &DispatchOutcome) {
    if outcome.is_clean() {
        info!(action, combination, injected = outcome.injected, "dispatch complete");
    } else {
        warn!(
            action,
            combination,
            injected = outcome.injected,
            failed = outcome.failures.len(),
            rejected = outcome.rejected,
            "dispatch incomplete"
        );
    }
}
