// Employee Pass Registry - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/pass-registry
// ```
//
// Or with a roster and a fixed check instant:
//
// ```console
// $ ./target/release/pass-registry --roster staff.json --check-at 2022-05-10T09:00:00Z --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use employee_pass_registry::registry::logging::tracing_listener;
use employee_pass_registry::types::config::CliArgs;
use employee_pass_registry::{
    AccessCheckRecord, AccessRegistry, EmployeeGenerator, EmployeeHandle, LoggingConfig,
    RegistryConfig, RegistryReport, Roster,
};
use std::process;
use tracing::{error, info, Level};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match RegistryConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    if let Err(e) = init_logging(&args) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Employee Pass Registry");

    let config = match load_config(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    };

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - registry will not be built.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run(&config) {
        error!("Run failed: {:#}", e);
        process::exit(1);
    }

    info!("Employee Pass Registry completed successfully");
}

fn init_logging(args: &CliArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = if args.debug {
        Level::DEBUG
    } else if args.verbose {
        Level::INFO
    } else {
        // Default: minimal logging for normal users
        Level::WARN
    };

    let mut logging = LoggingConfig::new().with_level(level);
    if args.debug {
        logging = logging.with_span_events();
    }
    if args.log_json {
        logging = logging.with_json_format();
    }
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir.clone());
    }
    logging.init()
}

fn load_config(args: CliArgs) -> Result<RegistryConfig> {
    let config =
        RegistryConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    info!("Configuration loaded and validated successfully");
    Ok(config)
}

/// Build the registry, check every issued pass and print the report
fn run(config: &RegistryConfig) -> Result<()> {
    let check_time = config.resolve_check_time();
    let expiry_date = config.resolve_expiry_date();
    let format = config
        .get_output_format()
        .map_err(anyhow::Error::msg)
        .context("Invalid output format")?;

    let roster = select_roster(config, check_time)?;

    let mut registry = AccessRegistry::new();
    registry.subscribe(tracing_listener());
    registry.subscribe(|notification| eprintln!("{}", notification));

    let handles = roster.load_into(&mut registry);
    info!(
        "Registered {} employees holding {} passes",
        registry.employee_count(),
        handles.iter().map(|h| h.borrow().pass_count()).sum::<usize>()
    );

    let checks = check_all_passes(&registry, &handles, check_time);
    let report = RegistryReport::build(&registry, expiry_date).with_access_checks(checks);

    let rendered = report.render(format).context("Failed to render report")?;
    println!("{}", rendered);
    Ok(())
}

fn select_roster(
    config: &RegistryConfig,
    reference: chrono::DateTime<chrono::Utc>,
) -> Result<Roster> {
    if let Some(path) = &config.roster_path {
        return Roster::from_file(path)
            .with_context(|| format!("Failed to load roster from {}", path));
    }

    if config.generate_count > 0 {
        eprintln!("Generating {} employees...", config.generate_count);
        let mut generator = EmployeeGenerator::from_config(config);
        return Ok(generator.generate(config, reference));
    }

    info!("No roster or generation requested, using the sample roster");
    Ok(Roster::sample())
}

fn check_all_passes(
    registry: &AccessRegistry,
    handles: &[EmployeeHandle],
    check_time: chrono::DateTime<chrono::Utc>,
) -> Vec<AccessCheckRecord> {
    let mut checks = Vec::new();
    for handle in handles {
        let passes = handle.borrow().passes.clone();
        for pass in &passes {
            let granted = registry.check_access_at(handle, pass, check_time);
            checks.push(AccessCheckRecord::new(handle, pass, check_time, granted));
        }
    }
    checks
}

/// Print configuration summary
fn print_configuration_summary(config: &RegistryConfig) {
    eprintln!("Configuration:");
    match &config.roster_path {
        Some(path) => eprintln!("  Roster: {}", path),
        None if config.generate_count > 0 => {
            eprintln!("  Generated Employees: {}", config.generate_count);
            eprintln!(
                "  Permanent Pass %: {:.1}%",
                config.permanent_pass_percentage * 100.0
            );
            eprintln!(
                "  Temporary Pass %: {:.1}%",
                config.temporary_pass_percentage * 100.0
            );
            eprintln!("  Temporary Pass Max Days: {}", config.temporary_pass_max_days);
        }
        None => eprintln!("  Roster: built-in sample"),
    }
    match config.check_at {
        Some(at) => eprintln!("  Check At: {}", at),
        None => eprintln!("  Check At: now"),
    }
    match config.expiring_on {
        Some(date) => eprintln!("  Expiring On: {}", date),
        None => eprintln!("  Expiring On: today"),
    }
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
