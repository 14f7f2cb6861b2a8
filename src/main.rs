use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use gas_turbine_fuel_analyzer::app::{self, AppError};
use gas_turbine_fuel_analyzer::config::{ConfigFile, DEFAULT_CONFIG_PATH};
use gas_turbine_fuel_analyzer::conversion;
use gas_turbine_fuel_analyzer::gas::{self, presets, Composition, LimitKey};
use gas_turbine_fuel_analyzer::i18n::{self, keys, Translator};
use gas_turbine_fuel_analyzer::report::{Report, ReportMeta};
use gas_turbine_fuel_analyzer::ui_cli;
use gas_turbine_fuel_analyzer::units::UnitSystem;

#[derive(Parser)]
#[command(name = "gas_turbine_fuel_analyzer", version)]
#[command(about = "Gas turbine fuel gas property calculator and suitability checker", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// UI language (ko, en, auto)
    #[arg(long, global = true)]
    lang: Option<String>,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate properties and suitability for a composition
    Calc {
        /// Start from a named preset (pipeline, rich, lean)
        #[arg(long)]
        preset: Option<String>,
        /// Component amount in mol%, e.g. -c methane=95 (repeatable)
        #[arg(short = 'c', long = "component", value_name = "NAME=AMOUNT")]
        components: Vec<String>,
        /// Display unit system (si, us); defaults to the config value
        #[arg(long, value_parser = parse_units)]
        units: Option<UnitSystem>,
        /// Output format; inferred from --output extension when omitted
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, default_value = "")]
        project: String,
        #[arg(long, default_value = "")]
        source: String,
        #[arg(long, default_value = "")]
        analyst: String,
    },
    /// List built-in composition presets
    Presets,
    /// Show or edit acceptance limits (stored in SI units)
    #[command(subcommand)]
    Limits(LimitsCommands),
    /// Convert a value between units (temperature, density, mass-hv, wobbe)
    Convert {
        kind: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
}

#[derive(Subcommand)]
enum LimitsCommands {
    /// Print the configured limits
    Show {
        #[arg(long, value_parser = parse_units)]
        units: Option<UnitSystem>,
    },
    /// Set the SI range of one limit
    Set {
        key: String,
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },
    /// Restore one limit, or all when no key is given
    Reset { key: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn parse_units(s: &str) -> Result<UnitSystem, String> {
    UnitSystem::parse(s).ok_or_else(|| format!("unknown unit system: {s}"))
}

/// 프로그램의 엔트리 포인트. 설정과 언어를 결정한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = ConfigFile::open(&cli.config);
    let lang = i18n::resolve_language(
        cli.lang.as_deref(),
        cfg.as_ref().ok().map(|c| c.config.language.as_str()),
    );
    let tr = Translator::new_with_pack(&lang, None);

    let result = cfg
        .map_err(AppError::from)
        .and_then(|mut cfg| dispatch(cli.command, &mut cfg, &tr));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn dispatch(
    command: Option<Commands>,
    cfg: &mut ConfigFile,
    tr: &Translator,
) -> Result<(), AppError> {
    match command {
        None => app::run(cfg, tr),
        Some(Commands::Calc {
            preset,
            components,
            units,
            format,
            output,
            project,
            source,
            analyst,
        }) => {
            let composition = build_composition(preset.as_deref(), &components)?;
            let meta = ReportMeta::today(&project, &source, &analyst);
            let system = units.unwrap_or(cfg.config.unit_system);
            cmd_calc(&composition, cfg, tr, system, format, output.as_deref(), meta)
        }
        Some(Commands::Presets) => {
            cmd_presets();
            Ok(())
        }
        Some(Commands::Limits(cmd)) => cmd_limits(cmd, cfg, tr),
        Some(Commands::Convert {
            kind,
            value,
            from,
            to,
        }) => {
            let kind = conversion::parse_quantity_kind(&kind)?;
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{result} {to}");
            Ok(())
        }
    }
}

/// 프리셋(선택)에 `-c NAME=AMOUNT` 항목을 덮어써서 조성을 만든다.
fn build_composition(preset: Option<&str>, components: &[String]) -> Result<Composition, AppError> {
    let mut composition = match preset {
        Some(name) => presets::find_preset(name)
            .ok_or_else(|| AppError::Input(format!("unknown preset: {name}")))?
            .composition(),
        None => Composition::new(),
    };

    let mut named = Vec::with_capacity(components.len());
    for item in components {
        let (name, amount) = item
            .split_once('=')
            .ok_or_else(|| AppError::Input(format!("expected NAME=AMOUNT: {item}")))?;
        let amount = amount
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::Input(format!("invalid amount: {item}")))?;
        named.push((name.trim().to_string(), amount));
    }
    for (component, amount) in Composition::from_named(named)?.iter() {
        composition.set(component, amount);
    }
    Ok(composition)
}

fn cmd_calc(
    composition: &Composition,
    cfg: &ConfigFile,
    tr: &Translator,
    system: UnitSystem,
    format: Option<OutputFormat>,
    output: Option<&Path>,
    meta: ReportMeta,
) -> Result<(), AppError> {
    let record = gas::calculate(composition)
        .ok_or_else(|| AppError::Input(tr.t(keys::COMPOSITION_INVALID).to_string()))?;
    let suitability = gas::evaluate(&record, &cfg.config.limits);
    let report = Report::build(&record, &suitability, system, meta);

    if let (Some(path), None) = (output, format) {
        report.write_to(path)?;
        println!("{} {}", tr.t(keys::RESULTS_EXPORTED), path.display());
        return Ok(());
    }

    let text = match format.unwrap_or(OutputFormat::Table) {
        OutputFormat::Table => ui_cli::render_report(tr, &report),
        OutputFormat::Csv => report.to_csv(),
        OutputFormat::Json => report.to_json()?,
    };
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            println!("{} {}", tr.t(keys::RESULTS_EXPORTED), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_presets() {
    for preset in presets::presets() {
        println!("{}", preset.name);
        for (component, amount) in preset.amounts {
            println!("  {:<16} {:>6.2} mol%", component.name(), amount);
        }
    }
}

fn cmd_limits(cmd: LimitsCommands, cfg: &mut ConfigFile, tr: &Translator) -> Result<(), AppError> {
    match cmd {
        LimitsCommands::Show { units } => {
            let system = units.unwrap_or(cfg.config.unit_system);
            print!("{}", ui_cli::render_limits(tr, &cfg.config.limits, system));
            println!("{}", tr.t(keys::LIMITS_SI_NOTE));
        }
        LimitsCommands::Set { key, min, max } => {
            let key = parse_limit_key(&key)?;
            cfg.config.limits.set_range(key, min, max);
            cfg.save()?;
        }
        LimitsCommands::Reset { key: Some(key) } => {
            let key = parse_limit_key(&key)?;
            cfg.config.limits.reset_key(key);
            cfg.save()?;
            println!("{}", tr.t(keys::LIMITS_RESET_DONE));
        }
        LimitsCommands::Reset { key: None } => {
            cfg.config.limits.reset_to_defaults();
            cfg.save()?;
            println!("{}", tr.t(keys::LIMITS_RESET_DONE));
        }
    }
    Ok(())
}

fn parse_limit_key(s: &str) -> Result<LimitKey, AppError> {
    LimitKey::from_code(s).ok_or_else(|| AppError::Input(format!("unknown limit key: {s}")))
}
