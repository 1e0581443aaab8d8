//! AIH number command-line tool.

mod output;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use aih_builder::{build_csv, build_number, build_range, build_with_config, verify, BuildConfig, Validation};
use aih_types::{well_known, AihKind, CheckDigitRule, Variant};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Region used by the demo output (Pernambuco).
const DEMO_REGION: u8 = well_known::PE;
/// Year used by the demo output.
const DEMO_YEAR: i64 = 24;

#[derive(Parser)]
#[command(name = "aih")]
#[command(about = "Build and verify AIH hospital admission authorization numbers")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    options: BuildOptions,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BuildOptions {
    /// Input validation: strict or lenient
    #[arg(long, global = true, env = "AIH_VALIDATION", default_value = "strict", value_parser = parse_validation)]
    validation: Validation,

    /// Check digit rule: body or truncated_body
    #[arg(long, global = true, env = "AIH_CHECK_DIGIT_RULE", default_value = "body", value_parser = parse_rule)]
    check_digit_rule: CheckDigitRule,

    /// Only accept kind digits 1, 3 and 5
    #[arg(long, global = true)]
    restrict_kinds: bool,
}

impl BuildOptions {
    fn to_config(&self) -> BuildConfig {
        BuildConfig {
            validation: self.validation,
            check_digit_rule: self.check_digit_rule,
            restrict_kinds: self.restrict_kinds,
        }
    }
}

#[derive(Args)]
struct NumberArgs {
    /// IBGE code of the federative unit (e.g. 26 for PE)
    #[arg(long, short)]
    region: i64,

    /// Two-digit reference year
    #[arg(long, short)]
    year: i64,

    /// Kind digit (1 general, 3 CNRAC, 5 elective)
    #[arg(long, short)]
    kind: i64,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a single AIH number
    Build {
        #[command(flatten)]
        number: NumberArgs,

        /// Build the final number (9999/999) instead of the initial one
        #[arg(long = "final")]
        is_final: bool,
    },
    /// Build the initial and final numbers of a block
    Range {
        #[command(flatten)]
        number: NumberArgs,
    },
    /// Verify one or more candidate AIH numbers
    Verify {
        /// Candidate numbers
        #[arg(required = true)]
        candidates: Vec<String>,
    },
    /// Build every row of a CSV file (region_code,year_ref,kind_digit,variant)
    Batch {
        /// Path to the CSV file
        path: PathBuf,
    },
    /// Print the general and elective numbers for PE, 2024
    Demo,
}

fn parse_validation(value: &str) -> Result<Validation, String> {
    Validation::parse(value).ok_or_else(|| format!("unknown validation '{}' (expected strict or lenient)", value))
}

fn parse_rule(value: &str) -> Result<CheckDigitRule, String> {
    CheckDigitRule::parse(value).ok_or_else(|| format!("unknown check digit rule '{}' (expected body or truncated_body)", value))
}

fn warn_unknown_region(region: i64) {
    let known = u8::try_from(region).map(well_known::is_known_uf).unwrap_or(false);
    if !known {
        tracing::warn!("Region {} is not an IBGE federative unit code", region);
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.options.to_config();
    tracing::debug!("Build configuration: {:?}", config);

    match cli.command {
        Commands::Build { number, is_final } => {
            warn_unknown_region(number.region);
            let variant = Variant::from_is_initial(!is_final);
            if cli.json && config.validation == Validation::Strict {
                let aih = build_number(number.region, number.year, number.kind, variant, &config)?;
                output::print_number(&aih, true)?;
            } else {
                let value = build_with_config(number.region, number.year, number.kind, variant, &config)?;
                if cli.json {
                    println!("{}", serde_json::json!({ "aih": value, "variant": variant }));
                } else {
                    println!("{}", value);
                }
            }
        }
        Commands::Range { number } => {
            warn_unknown_region(number.region);
            let range = build_range(number.region, number.year, number.kind, &config)?;
            output::print_range(&range, cli.json)?;
        }
        Commands::Verify { candidates } => {
            let mut invalid = 0;
            for candidate in &candidates {
                let result = verify::parse(candidate.trim(), config.check_digit_rule);
                if result.is_err() {
                    invalid += 1;
                }
                output::print_verification(candidate.trim(), result.as_ref().err(), cli.json)?;
            }
            if invalid > 0 {
                tracing::info!("{} of {} candidates invalid", invalid, candidates.len());
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Batch { path } => {
            tracing::info!("Building AIH numbers from: {}", path.display());
            let file = File::open(&path)?;
            let report = build_csv(BufReader::new(file), &config)?;
            output::print_batch(&report, cli.json)?;
            if report.stats.failed > 0 {
                tracing::warn!(
                    "{} of {} rows failed ({:.1}% built)",
                    report.stats.failed,
                    report.stats.total_requests,
                    report.stats.success_rate()
                );
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Demo => {
            for kind in [AihKind::General, AihKind::Elective] {
                let range = build_range(DEMO_REGION.into(), DEMO_YEAR, kind.to_digit().into(), &config)?;
                output::print_range(&range, cli.json)?;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_command() {
        let cli = Cli::try_parse_from(["aih", "build", "--region", "26", "--year", "24", "--kind", "1", "--final"]).unwrap();
        match cli.command {
            Commands::Build { number, is_final } => {
                assert_eq!(number.region, 26);
                assert_eq!(number.kind, 1);
                assert!(is_final);
            }
            _ => panic!("expected build command"),
        }
        assert_eq!(cli.options.validation, Validation::Strict);
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::try_parse_from([
            "aih",
            "verify",
            "2624100000005",
            "--check-digit-rule",
            "legacy",
            "--validation",
            "lenient",
            "--json",
        ])
        .unwrap();
        let config = cli.options.to_config();
        assert_eq!(config.check_digit_rule, CheckDigitRule::TruncatedBody);
        assert_eq!(config.validation, Validation::Lenient);
        assert!(cli.json);
    }

    #[test]
    fn test_rejects_unknown_rule() {
        assert!(Cli::try_parse_from(["aih", "demo", "--check-digit-rule", "luhn"]).is_err());
    }
}
