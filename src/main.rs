//! Wealth Projection CLI
//!
//! Command-line front end for the projection engine: one subcommand per
//! scheme, console table output, optional CSV or JSON export.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::path::{Path, PathBuf};
use wealth_projection::projection::{
    compare_step_up, real_annual_return, AdjustedView, ContributionTiming, GrowthSeries,
    InflationAdjustment, ProjectionConfig, ProjectionEngine, ProjectionResult,
};
use wealth_projection::{InvestmentParams, InvestmentPlan, RetirementNeeds, Scheme};

#[derive(Parser, Debug)]
#[command(name = "wealth-projection", version, about = "Investment growth projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Contribution timing used when solving goals
    #[arg(long, value_enum, default_value_t = TimingArg::End, global = true)]
    timing: TimingArg,

    /// Inflation convention for the present-day view
    #[arg(long, value_enum, default_value_t = AdjustmentArg::Deflate, global = true)]
    adjustment: AdjustmentArg,

    /// Write the nominal series to this CSV file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Print the full result as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fixed monthly investment
    Sip {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
        #[arg(long)]
        inflation: Option<f64>,
    },
    /// Single upfront investment
    LumpSum {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
        #[arg(long)]
        inflation: Option<f64>,
    },
    /// Monthly investment needed to reach a target
    Goal {
        #[arg(long)]
        target: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
        /// Treat the target as present-day money and inflate it
        #[arg(long)]
        inflation: Option<f64>,
    },
    /// Monthly investment increasing every year
    StepUp {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        step_up: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
        #[arg(long)]
        inflation: Option<f64>,
    },
    /// Real rate of return net of inflation
    RealRate {
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        inflation: f64,
    },
    /// Corpus needed to cover expenses in retirement
    Retirement {
        #[arg(long)]
        monthly_expenses: f64,
        #[arg(long)]
        current_age: u32,
        #[arg(long)]
        retirement_age: u32,
        #[arg(long)]
        life_expectancy: u32,
        #[arg(long, default_value_t = 6.0)]
        inflation: f64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TimingArg {
    End,
    Begin,
}

impl From<TimingArg> for ContributionTiming {
    fn from(arg: TimingArg) -> Self {
        match arg {
            TimingArg::End => ContributionTiming::EndOfPeriod,
            TimingArg::Begin => ContributionTiming::BeginningOfPeriod,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AdjustmentArg {
    Deflate,
    RealRate,
}

impl From<AdjustmentArg> for InflationAdjustment {
    fn from(arg: AdjustmentArg) -> Self {
        match arg {
            AdjustmentArg::Deflate => InflationAdjustment::PointDeflation,
            AdjustmentArg::RealRate => InflationAdjustment::RealRate,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ProjectionConfig {
        timing: cli.timing.into(),
        adjustment: cli.adjustment.into(),
    };

    let plan = match cli.command {
        Command::Sip { amount, rate, years, inflation } => {
            build_plan(Scheme::Sip, amount, rate, years, inflation, None)
        }
        Command::LumpSum { principal, rate, years, inflation } => {
            build_plan(Scheme::LumpSum, principal, rate, years, inflation, None)
        }
        Command::Goal { target, rate, years, inflation } => {
            build_plan(Scheme::Goal, target, rate, years, inflation, None)
        }
        Command::StepUp { amount, step_up, rate, years, inflation } => {
            build_plan(Scheme::StepUp, amount, rate, years, inflation, Some(step_up))
        }
        Command::RealRate { rate, inflation } => {
            let real = real_annual_return(rate, inflation);
            if cli.json {
                println!("{}", serde_json::json!({ "nominal_pct": rate, "inflation_pct": inflation, "real_return": real }));
            } else {
                println!("Nominal {:.2}% with {:.2}% inflation -> real {:.2}%", rate, inflation, real * 100.0);
            }
            return Ok(());
        }
        Command::Retirement {
            monthly_expenses,
            current_age,
            retirement_age,
            life_expectancy,
            inflation,
        } => {
            let needs = RetirementNeeds {
                monthly_expenses,
                current_age,
                retirement_age,
                life_expectancy,
                inflation_pct: inflation,
            };
            needs.validate().context("Invalid retirement inputs")?;
            let estimate = needs.estimate();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("Years to retirement:        {}", estimate.years_to_retirement);
                println!("Years in retirement:        {}", estimate.retirement_years);
                println!("Monthly expenses then:      {:.2}", estimate.monthly_expenses_at_retirement);
                println!("Annual expenses then:       {:.2}", estimate.annual_expenses_at_retirement);
                println!("Required corpus (4% rule):  {:.2}", estimate.corpus);
            }
            return Ok(());
        }
    };

    plan.validate().context("Invalid projection inputs")?;
    let result = ProjectionEngine::new(config).project(&plan);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
        if plan.scheme == Scheme::StepUp {
            print_step_up_comparison(&plan.params);
        }
    }

    if let Some(path) = cli.csv.as_deref() {
        write_series_csv(path, &result.nominal)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Series written to {}", path.display());
        println!("\nFull series written to: {}", path.display());
    }

    Ok(())
}

fn build_plan(
    scheme: Scheme,
    amount: f64,
    rate: f64,
    years: u32,
    inflation: Option<f64>,
    step_up: Option<f64>,
) -> InvestmentPlan {
    let params = InvestmentParams {
        amount,
        annual_rate_pct: rate,
        years,
        step_up_pct: step_up,
        inflation_pct: inflation,
    };
    InvestmentPlan::new(1, scheme, params)
}

fn print_result(result: &ProjectionResult) {
    if let Some(goal) = &result.goal {
        println!("Goal: {:.2} (in future money: {:.2})", goal.target, goal.adjusted_target);
        println!("Required monthly investment: {:.2}", goal.monthly_contribution);
        println!("Total invested:              {:.2}", goal.total_invested);
        println!("Wealth gained:               {:.2}", goal.wealth_gained);
        println!();
    }

    println!("{:>5} {:>16} {:>16} {:>16} {:>9}", "Year", "Invested", "Value", "Gained", "Return%");
    println!("{}", "-".repeat(66));
    for row in result.nominal.yearly() {
        println!(
            "{:>5} {:>16.2} {:>16.2} {:>16.2} {:>8.2}%",
            row.year, row.total_invested, row.value, row.wealth_gained, row.returns_pct
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Invested: {:.2}", summary.series.total_invested);
    println!("  Final Value:    {:.2}", summary.series.final_value);
    println!("  Wealth Gained:  {:.2}", summary.series.wealth_gained);

    if let Some(real) = result.real_return {
        println!("  Real Return:    {:.2}%", real * 100.0);
    }
    if let Some(adjusted) = &result.adjusted {
        let label = match adjusted {
            AdjustedView::RealRate(_) => "at real rate",
            AdjustedView::Deflated(_) => "deflated",
        };
        println!("  Present-day Value ({}): {:.2}", label, adjusted.final_value());
    }
}

fn print_step_up_comparison(params: &InvestmentParams) {
    let rows = compare_step_up(
        params.amount,
        params.step_up_pct.unwrap_or(0.0),
        params.annual_rate_pct,
        params.years,
    );

    println!("\nStep-up vs regular SIP:");
    println!(
        "{:>5} {:>12} {:>16} {:>16} {:>16}",
        "Year", "Monthly", "Step-up Value", "Regular Value", "Difference"
    );
    println!("{}", "-".repeat(69));
    for row in rows {
        println!(
            "{:>5} {:>12.2} {:>16.2} {:>16.2} {:>16.2}",
            row.year, row.monthly_amount, row.step_up_value, row.regular_value, row.value_difference
        );
    }
}

fn write_series_csv(path: &Path, series: &GrowthSeries) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in &series.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
