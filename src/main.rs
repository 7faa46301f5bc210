use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use log::info;
use std::io::{self, BufRead};
use upfmt::config::{self, Config};
use upfmt::report::{self, Reporter};
use upfmt::system::get_system_uptime;
use upfmt::{parse_seconds, ClickOutcome, RestartButton, UptimeStyle};

#[derive(Parser)]
#[command(name = "upfmt")]
#[command(about = "Format uptimes and numbers the way the device status page does", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a second count (or the host uptime) as an uptime string
    Uptime {
        /// Seconds, or a duration such as "1h 5m"
        #[arg(allow_hyphen_values = true)]
        seconds: Option<String>,
        /// Drop the trailing ", " on whole-minute values
        #[arg(long)]
        trim: bool,
    },
    /// Format a number for a locale
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Locale tag (e.g. en-US, de-DE)
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Print the status block for this host
    Status {
        /// Locale tag (e.g. en-US, de-DE)
        #[arg(short, long)]
        locale: Option<String>,
        /// Extra row as label=value, repeatable (e.g. "Free heap=123456")
        #[arg(long = "counter", value_parser = parse_counter, allow_hyphen_values = true)]
        counters: Vec<(String, f64)>,
    },
    /// Two-step restart confirmation; each Enter is a click
    Restart,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = config::load_config()?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Uptime { seconds, trim } => {
            let total = match seconds {
                Some(input) => parse_seconds(&input)?,
                None => get_system_uptime()?,
            };
            let style = if trim {
                UptimeStyle::Trimmed
            } else {
                config.uptime_style
            };
            report::write_uptime(&mut stdout, total, style)?;
        }
        Commands::Number { value, locale } => {
            let locale = config.resolve_locale(locale.as_deref())?;
            report::write_locale_number(&mut stdout, value, locale)?;
        }
        Commands::Status { locale, counters } => {
            let locale = config.resolve_locale(locale.as_deref())?;
            let rows: Vec<(&str, f64)> = counters
                .iter()
                .map(|(label, value)| (label.as_str(), *value))
                .collect();
            let reporter = Reporter::new(locale, config.uptime_style);
            reporter.report(&mut stdout, get_system_uptime()?, &rows)?;
        }
        Commands::Restart => {
            drop(stdout);
            run_restart(&config)?;
        }
    }

    Ok(())
}

fn parse_counter(arg: &str) -> Result<(String, f64), String> {
    let (label, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected label=value, got '{}'", arg))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("missing label in '{}'", arg));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value in '{}': {}", arg, e))?;
    Ok((label.to_string(), value))
}

fn run_restart(config: &Config) -> Result<()> {
    let timeout = config.confirm_timeout()?;
    let window = humantime::format_duration(timeout.to_std()?);
    let mut button = RestartButton::new(timeout);

    println!("[{}] Press Enter to click, 'q' to quit", button.label());

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim() == "q" {
            break;
        }

        let now = Utc::now();
        if button.tick(now) {
            println!("[{}] Confirmation timed out", button.label());
        }

        match button.click(now) {
            ClickOutcome::Armed => {
                println!("[{}] Click again within {} to restart", button.label(), window);
            }
            ClickOutcome::Confirmed { target } => {
                info!("restart confirmed, requesting {}", target);
                println!("Restart requested ({})", target);
                break;
            }
        }
    }

    Ok(())
}
