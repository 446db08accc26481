//! fincalc - EMI and SIP projections from the command line
//!
//! Prints the summary, the principal/secondary split and the yearly schedule.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use rust_decimal::Decimal;
use serde::Serialize;

use fin_projection::{
    CalculationInput, ChartSegment, ContributionTiming, EmiInput, InputLimits, Projection,
    SegmentStyle, SipInput, compute, to_chart_segments,
};

#[derive(Debug, Parser)]
#[command(name = "fincalc", version, about = "Loan EMI and SIP growth projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    options: Options,
}

#[derive(Debug, Args)]
struct Options {
    /// JSON file with input ranges; defaults apply to missing fields
    #[arg(long, global = true)]
    limits: Option<PathBuf>,

    /// Clamp out-of-range inputs instead of rejecting them
    #[arg(long, global = true)]
    clamp: bool,

    /// Print the projection and chart segments as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Segment labels, principal first
    #[arg(long, global = true, num_args = 2, value_names = ["PRINCIPAL", "SECONDARY"])]
    labels: Option<Vec<String>>,

    /// Segment colors, principal first
    #[arg(
        long,
        global = true,
        num_args = 2,
        value_names = ["PRINCIPAL", "SECONDARY"],
        default_values = ["#3B82F6", "#10B981"]
    )]
    colors: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fixed monthly installment and amortization schedule of a loan
    Emi {
        /// Loan amount
        principal: Decimal,
        /// Annual interest rate in percent
        rate: Decimal,
        /// Tenure in years
        years: u32,
    },
    /// Maturity value and growth schedule of a monthly investment
    Sip {
        /// Monthly contribution
        contribution: Decimal,
        /// Expected annual return in percent
        rate: Decimal,
        /// Investment period in years
        years: u32,
        /// When each contribution lands relative to that month's growth
        #[arg(long, value_enum, default_value_t = Timing::Start)]
        timing: Timing,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Timing {
    Start,
    End,
}

impl From<Timing> for ContributionTiming {
    fn from(timing: Timing) -> Self {
        match timing {
            Timing::Start => ContributionTiming::StartOfMonth,
            Timing::End => ContributionTiming::EndOfMonth,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a CalculationInput,
    projection: &'a Projection,
    segments: Option<&'a [ChartSegment; 2]>,
}

fn build_input(command: &Command) -> CalculationInput {
    match *command {
        Command::Emi {
            principal,
            rate,
            years,
        } => CalculationInput::Emi(EmiInput {
            principal,
            annual_rate: rate,
            tenure_years: years,
        }),
        Command::Sip {
            contribution,
            rate,
            years,
            timing,
        } => CalculationInput::Sip(SipInput {
            monthly_contribution: contribution,
            expected_return: rate,
            period_years: years,
            timing: timing.into(),
        }),
    }
}

fn load_limits(path: Option<&Path>) -> Result<InputLimits> {
    let limits = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read limits file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse limits file {}", path.display()))?
        }
        None => InputLimits::default(),
    };
    limits.check_consistent()?;
    Ok(limits)
}

/// Clamps the input when asked to, otherwise rejects anything out of range.
fn prepare_input(
    limits: &InputLimits,
    input: CalculationInput,
    clamp: bool,
) -> Result<CalculationInput> {
    if clamp {
        Ok(limits.clamp(input))
    } else {
        limits.validate(&input).context("input rejected")?;
        Ok(input)
    }
}

fn segment_styles(options: &Options, input: &CalculationInput) -> [SegmentStyle; 2] {
    let secondary_label = match input {
        CalculationInput::Emi(_) => "Interest",
        CalculationInput::Sip(_) => "Returns",
    };
    let labels = options
        .labels
        .clone()
        .unwrap_or_else(|| vec!["Principal".to_string(), secondary_label.to_string()]);

    [
        SegmentStyle::new(labels[0].clone(), options.colors[0].clone()),
        SegmentStyle::new(labels[1].clone(), options.colors[1].clone()),
    ]
}

fn print_table(
    input: &CalculationInput,
    projection: &Projection,
    segments: Option<&[ChartSegment; 2]>,
) {
    match projection {
        Projection::Emi(result) => {
            println!("Monthly EMI:     {:>16.2}", result.monthly_value);
            println!("Principal:       {:>16.2}", result.principal);
            println!("Total interest:  {:>16.2}", result.secondary);
            println!("Total payable:   {:>16.2}", result.total);
        }
        Projection::Sip(result) => {
            println!("Maturity value:  {:>16.2}", result.monthly_value);
            println!("Invested:        {:>16.2}", result.principal);
            println!("Est. returns:    {:>16.2}", result.secondary);
        }
    }

    match segments {
        Some(segments) => {
            for segment in segments {
                println!(
                    "  {:<14} {:>6.1}%  ({})",
                    segment.label, segment.percent, segment.color
                );
            }
        }
        None => println!("  composition undefined for a zero total"),
    }
    println!();

    match projection {
        Projection::Emi(result) => {
            println!("{:>4} {:>16} {:>16} {:>16}", "Year", "Principal", "Interest", "Balance");
            println!("{}", "-".repeat(55));
            for row in &result.breakdown {
                println!(
                    "{:>4} {:>16.2} {:>16.2} {:>16.2}",
                    row.year, row.principal_paid, row.interest_paid, row.balance
                );
            }
        }
        Projection::Sip(result) => {
            println!("{:>4} {:>16} {:>16} {:>16}", "Year", "Invested", "Returns", "Total");
            println!("{}", "-".repeat(55));
            for row in &result.breakdown {
                println!(
                    "{:>4} {:>16.2} {:>16.2} {:>16.2}",
                    row.year, row.invested, row.returns, row.total
                );
            }
        }
    }

    info!("rendered {} years for {:?}", projection.years(), input.mode());
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let limits = load_limits(cli.options.limits.as_deref())?;
    let input = prepare_input(&limits, build_input(&cli.command), cli.options.clamp)?;
    let projection = compute(&input).context("projection failed")?;
    let segments = to_chart_segments(&projection, segment_styles(&cli.options, &input)).ok();

    if cli.options.json {
        let report = Report {
            input: &input,
            projection: &projection,
            segments: segments.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&input, &projection, segments.as_ref());
    }

    Ok(())
}
