use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tickcalc::calc::{self, ProgressRequest, TickRate};
use tickcalc::config::{Config, FormDefaults};
use tickcalc::locale::Locale;
use tickcalc::shell::{terminal, AppState, FrameClock, TitleAnimation};
use tickcalc::units::{Quantity, Unit};

#[derive(Parser)]
#[command(name = "tickcalc")]
#[command(version, about = "Time-to-goal calculator for tick-based power progression", long_about = None)]
struct Cli {
    /// Config file (default: ./tickcalc.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0", global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CalcArgs {
    /// Power you want (e.g. "1.5")
    #[arg(long, allow_negative_numbers = true)]
    want: String,

    /// Unit of the goal (e.g. "B"), defaults to the configured unit
    #[arg(long)]
    want_unit: Option<String>,

    /// Power you have now
    #[arg(long, default_value = "", allow_negative_numbers = true)]
    have: String,

    /// Unit of the current power
    #[arg(long)]
    have_unit: Option<String>,

    /// Power gained per tick
    #[arg(long, allow_negative_numbers = true)]
    per_tick: String,

    /// Unit of the per-tick gain
    #[arg(long)]
    per_tick_unit: Option<String>,

    /// X2 gamepass: ticks take half as long (`--double-rate false` overrides the config)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    double_rate: Option<bool>,

    /// Output language (en, es)
    #[arg(short, long)]
    lang: Option<Locale>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl CalcArgs {
    /// Command-line values win, the config fills in what was left out
    fn request(&self, defaults: &FormDefaults) -> ProgressRequest {
        ProgressRequest {
            want: quantity(&self.want, self.want_unit.as_deref(), defaults.want_unit()),
            have: quantity(&self.have, self.have_unit.as_deref(), defaults.have_unit()),
            per_tick: quantity(
                &self.per_tick,
                self.per_tick_unit.as_deref(),
                defaults.per_tick_unit(),
            ),
            rate: TickRate::from_double_rate(self.double_rate.unwrap_or(defaults.double_rate)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the time needed to reach a power goal
    Calc(CalcArgs),

    /// List unit suffixes and their multipliers
    Units,

    /// Interactive form
    Shell {
        /// Start in this language (en, es)
        #[arg(short, long)]
        lang: Option<Locale>,
    },

    /// Play the animated title
    Title {
        /// How long to animate
        #[arg(short, long, default_value = "5")]
        seconds: u64,
    },

    /// Show the credits
    Credits {
        #[arg(short, long)]
        lang: Option<Locale>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG overrides the CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::resolve(cli.config.as_deref()).context("Failed to load config")?;
    info!("Starting tickcalc v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Calc(args) => {
            let defaults = &config.defaults;
            let request = args.request(defaults);
            let result = request.evaluate();

            if args.json {
                let value = calc::result_to_json(&result);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                let locale = args.lang.unwrap_or(defaults.locale);
                println!("{}", calc::render_result(&result, locale.labels()));
            }

            Ok(if result.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Units => {
            terminal::write_units(&mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Shell { lang } => {
            let mut state = AppState::new(&config.defaults);
            if let Some(locale) = lang {
                state.locale = locale;
            }
            let animation = TitleAnimation::from_config(&config.animation);
            terminal::run_shell(
                &mut state,
                &animation,
                io::stdin().lock(),
                &mut io::stdout().lock(),
            )
            .context("Shell I/O failed")?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Title { seconds } => {
            let animation = TitleAnimation::from_config(&config.animation);
            let mut clock = FrameClock::new(config.animation.interval());
            let mut out = io::stdout().lock();
            terminal::play_title(
                &mut out,
                &animation,
                &mut clock,
                Duration::from_secs(seconds),
            )?;
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Credits { lang } => {
            let labels = lang.unwrap_or(config.defaults.locale).labels();
            println!("{}\n\n{}", labels.credits_title, labels.credits_message);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Entry text scaled by an explicit unit, or the configured one
fn quantity(text: &str, suffix: Option<&str>, default_unit: Unit) -> Quantity {
    match suffix {
        Some(suffix) => {
            if Unit::from_suffix(suffix).is_none() {
                warn!("Unknown unit '{}', using multiplier 1", suffix);
            }
            Quantity::parse(text, suffix)
        }
        None => Quantity::parse(text, default_unit.suffix()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickcalc::calc::{CalcError, DisplayResult};

    fn calc_args(args: &[&str]) -> CalcArgs {
        let mut argv = vec!["tickcalc", "calc"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Calc(calc) => calc,
            _ => panic!("Expected calc subcommand"),
        }
    }

    #[test]
    fn test_negative_values_parse() {
        let args = calc_args(&["--want", "1", "--have", "-5", "--per-tick", "1"]);
        assert_eq!(args.have, "-5");

        let request = args.request(&FormDefaults::default());
        assert_eq!(request.have.normalized(), -5_000_000.0);
    }

    #[test]
    fn test_negative_rate_is_reported() {
        let args = calc_args(&["--want", "1", "--per-tick", "-2"]);
        let result = args.request(&FormDefaults::default()).evaluate();
        assert_eq!(result, Err(CalcError::NonPositiveRate(-2_000_000.0)));
    }

    #[test]
    fn test_double_rate_flag_forms() {
        let defaults = FormDefaults::default();
        let bare = calc_args(&["--want", "1", "--per-tick", "1", "--double-rate"]);
        assert_eq!(bare.request(&defaults).rate, TickRate::Double);

        let explicit = calc_args(&["--want", "1", "--per-tick", "1", "--double-rate", "true"]);
        assert_eq!(explicit.request(&defaults).rate, TickRate::Double);

        let absent = calc_args(&["--want", "1", "--per-tick", "1"]);
        assert_eq!(absent.request(&defaults).rate, TickRate::Normal);
    }

    #[test]
    fn test_double_rate_flag_overrides_config() {
        let defaults = FormDefaults {
            double_rate: true,
            ..FormDefaults::default()
        };

        let absent = calc_args(&["--want", "1", "--per-tick", "1"]);
        assert_eq!(absent.request(&defaults).rate, TickRate::Double);

        let off = calc_args(&["--want", "1", "--per-tick", "1", "--double-rate", "false"]);
        assert_eq!(off.request(&defaults).rate, TickRate::Normal);
    }

    #[test]
    fn test_units_fall_back_to_config() {
        let defaults = FormDefaults {
            want_unit: "T".to_string(),
            per_tick_unit: "K".to_string(),
            ..FormDefaults::default()
        };

        let args = calc_args(&["--want", "2", "--have", "1", "--have-unit", "B", "--per-tick", "3"]);
        let request = args.request(&defaults);
        assert_eq!(request.want.unit.suffix(), "T");
        assert_eq!(request.have.unit.suffix(), "B");
        assert_eq!(request.per_tick.unit.suffix(), "K");
        assert_eq!(request.per_tick.normalized(), 3000.0);
    }

    #[test]
    fn test_quantity_unit_precedence() {
        let config_unit = Unit::from_suffix("M").unwrap();

        let explicit = quantity("1.5", Some("B"), config_unit);
        assert_eq!(explicit.normalized(), 1_500_000_000.0);

        let from_config = quantity("1.5", None, config_unit);
        assert_eq!(from_config.normalized(), 1_500_000.0);

        // An unknown suffix on the command line is unscaled, not replaced by the config
        let unknown = quantity("1.5", Some("Zz"), config_unit);
        assert_eq!(unknown.unit, Unit::NONE);
        assert_eq!(unknown.normalized(), 1.5);

        assert_eq!(quantity("abc", None, config_unit).normalized(), 0.0);
    }

    #[test]
    fn test_calc_end_to_end() {
        let args = calc_args(&[
            "--want", "2", "--want-unit", "M", "--per-tick", "1", "--per-tick-unit", "M",
            "--double-rate",
        ]);
        let result = args.request(&FormDefaults::default()).evaluate();
        assert!(matches!(result, Ok(DisplayResult::Remaining(hms)) if hms.seconds == 1));
    }
}
