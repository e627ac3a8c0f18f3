//! Analyze a single deal from the command line
//!
//! Each strategy is a subcommand. Inputs start from the documented defaults
//! and can be seeded from a shared URL query string or the worked example;
//! output is a formatted report or JSON.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use rei_calculator::airbnb::{AirbnbInputs, CityMarket};
use rei_calculator::brrrr::BrrrrInputs;
use rei_calculator::flip::{FlipInputs, LoanType};
use rei_calculator::format::{format_currency, format_duration, format_percentage, format_return};
use rei_calculator::params;
use rei_calculator::rental::RentalInputs;

#[derive(Parser)]
#[command(name = "analyze", about = "Analyze a real-estate deal", version)]
struct Cli {
    #[command(subcommand)]
    strategy: StrategyCommand,
}

#[derive(Subcommand)]
enum StrategyCommand {
    /// Long-term rental ROI analysis
    Rental(CommonArgs),
    /// BRRRR capital recovery analysis
    Brrrr {
        #[command(flatten)]
        common: CommonArgs,

        /// Refinance LTV percent override
        #[arg(long)]
        ltv: Option<f64>,

        /// Print all three standard LTV scenarios
        #[arg(long)]
        sweep: bool,
    },
    /// Fix & flip profit analysis
    Flip {
        #[command(flatten)]
        common: CommonArgs,

        /// Financing type (overwrites rate, points, and down payment)
        #[arg(long, value_name = "hard_money|conventional|cash")]
        loan_type: Option<String>,

        /// Holding timeline in months
        #[arg(long)]
        timeline: Option<f64>,
    },
    /// Airbnb vs long-term rental comparison
    Airbnb {
        #[command(flatten)]
        common: CommonArgs,

        /// Apply a city preset (nashville, orlando, denver, austin,
        /// sandiego, mountain, beach)
        #[arg(long)]
        city: Option<String>,

        /// Enable seasonal pricing
        #[arg(long)]
        seasonal: bool,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Seed inputs from a shareable URL query string
    #[arg(long)]
    query: Option<String>,

    /// Use the worked example deal instead of the defaults
    #[arg(long)]
    example: bool,

    /// Emit inputs and analysis as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.strategy {
        StrategyCommand::Rental(common) => run_rental(common),
        StrategyCommand::Brrrr { common, ltv, sweep } => run_brrrr(common, ltv, sweep),
        StrategyCommand::Flip {
            common,
            loan_type,
            timeline,
        } => run_flip(common, loan_type, timeline),
        StrategyCommand::Airbnb {
            common,
            city,
            seasonal,
        } => run_airbnb(common, city, seasonal),
    }
}

/// Resolve the starting inputs from defaults, the example, or a query string
fn seed_inputs<T>(common: &CommonArgs, defaults: T, example: T) -> Result<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let base = if common.example { example } else { defaults };
    match &common.query {
        Some(query) => {
            let (inputs, _) =
                params::from_query(query, &base).context("failed to parse query string")?;
            Ok(inputs)
        }
        None => Ok(base),
    }
}

fn emit_json<I: serde::Serialize, A: serde::Serialize>(inputs: &I, analysis: &A) -> Result<()> {
    let report = serde_json::json!({ "inputs": inputs, "analysis": analysis });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_rental(common: CommonArgs) -> Result<()> {
    let inputs = seed_inputs(&common, RentalInputs::default(), RentalInputs::example())?;
    let analysis = inputs.analyze();

    if common.json {
        return emit_json(&inputs, &analysis);
    }

    println!("Rental Property Analysis");
    println!("{}", "-".repeat(44));
    row("Total Cash Invested", format_currency(analysis.total_cash_invested));
    row("Mortgage Payment", format_currency(analysis.mortgage_payment));
    row("Effective Income", format_currency(analysis.effective_monthly_income));
    row("Total Expenses", format_currency(analysis.total_monthly_expenses));
    row("Monthly Cash Flow", format_currency(analysis.monthly_cash_flow));
    row("NOI", format_currency(analysis.noi));
    row("Cap Rate", format_percentage(analysis.cap_rate));
    row("Cash-on-Cash Return", format_percentage(analysis.cash_on_cash_return));
    row("Total ROI", format_percentage(analysis.total_roi));
    row("Break-even", format_duration(analysis.break_even_months));
    row("Deal Rating", analysis.deal_rating.as_str().to_string());
    println!("\nShare: ?{}", params::to_query(&inputs)?);
    Ok(())
}

fn run_brrrr(common: CommonArgs, ltv: Option<f64>, sweep: bool) -> Result<()> {
    let mut inputs = seed_inputs(&common, BrrrrInputs::default(), BrrrrInputs::example())?;
    if let Some(ltv) = ltv {
        inputs.refinance_ltv = ltv;
    }

    if sweep {
        if common.json {
            let scenarios: Vec<_> = inputs
                .ltv_sweep()
                .into_iter()
                .map(|(ltv, analysis)| serde_json::json!({ "ltv": ltv, "analysis": analysis }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&scenarios)?);
            return Ok(());
        }

        println!("{:>5} {:>14} {:>14} {:>12} {:>10} {:>10}",
            "LTV", "Recovered", "Left In Deal", "Cash Flow", "CoC", "Rating");
        println!("{}", "-".repeat(70));
        for (ltv, analysis) in inputs.ltv_sweep() {
            println!("{:>4}% {:>14} {:>14} {:>12} {:>10} {:>10}",
                ltv,
                format_currency(analysis.cash_recovered),
                format_currency(analysis.cash_left_in_deal),
                format_currency(analysis.monthly_cash_flow),
                format_return(analysis.cash_on_cash_return),
                analysis.deal_rating.as_str(),
            );
        }
        return Ok(());
    }

    let analysis = inputs.analyze();
    if common.json {
        return emit_json(&inputs, &analysis);
    }

    println!("BRRRR Analysis ({}% refinance LTV)", inputs.refinance_ltv);
    println!("{}", "-".repeat(44));
    row("Total Cash Invested", format_currency(analysis.total_cash_invested));
    row("New Loan Amount", format_currency(analysis.new_loan_amount));
    row("Cash Recovered", format_currency(analysis.cash_recovered));
    row("Cash Left In Deal", format_currency(analysis.cash_left_in_deal));
    row("New Mortgage Payment", format_currency(analysis.new_mortgage_payment));
    row("Monthly Cash Flow", format_currency(analysis.monthly_cash_flow));
    row("Capital Recovery", format_percentage(analysis.capital_recovery_percent));
    row("Cash-on-Cash Return", format_return(analysis.cash_on_cash_return));
    row("Break-even", format_duration(analysis.break_even_months));
    row("Deal Rating", analysis.deal_rating.as_str().to_string());
    println!("\nShare: ?{}", params::to_query(&inputs)?);
    Ok(())
}

fn run_flip(common: CommonArgs, loan_type: Option<String>, timeline: Option<f64>) -> Result<()> {
    let mut inputs = seed_inputs(&common, FlipInputs::default(), FlipInputs::example())?;

    if let Some(name) = loan_type {
        let loan_type = match name.as_str() {
            "hard_money" => LoanType::HardMoney,
            "conventional" => LoanType::Conventional,
            "cash" => LoanType::Cash,
            other => bail!("unknown loan type: {}", other),
        };
        inputs.apply_loan_type(loan_type);
    }
    if let Some(months) = timeline {
        inputs.holding_timeline_months = months;
    }

    let analysis = inputs.analyze();
    if common.json {
        return emit_json(&inputs, &analysis);
    }

    println!("Fix & Flip Analysis ({}, {} months)",
        inputs.loan_type.as_str(), inputs.holding_timeline_months);
    println!("{}", "-".repeat(44));
    row("Purchase Costs", format_currency(analysis.purchase_costs));
    row("Renovation Costs", format_currency(analysis.renovation_costs));
    row("Holding Costs", format_currency(analysis.holding_costs));
    row("Selling Costs", format_currency(analysis.selling_costs));
    row("Net Proceeds", format_currency(analysis.net_proceeds));
    row("Total Profit", format_currency(analysis.total_profit));
    row("ROI", format_percentage(analysis.roi));
    row("Annualized ROI", format_percentage(analysis.annualized_roi));
    row("Profit / Month", format_currency(analysis.profit_per_month));
    row("70% Rule Max Price", format_currency(analysis.max_purchase_for_70_rule));
    row("Passes 70% Rule", if analysis.passes_70_rule { "Yes" } else { "No" }.to_string());
    row("Deal Grade", analysis.deal_grade.as_str().to_string());
    println!("\nShare: ?{}", params::to_query(&inputs)?);
    Ok(())
}

fn run_airbnb(common: CommonArgs, city: Option<String>, seasonal: bool) -> Result<()> {
    let mut inputs = seed_inputs(&common, AirbnbInputs::default(), AirbnbInputs::default())?;

    if let Some(key) = city {
        let market = CityMarket::from_key(&key)
            .with_context(|| format!("unknown city preset: {}", key))?;
        inputs.apply_preset(market);
    }
    if seasonal {
        inputs.seasonal_pricing = true;
    }

    let analysis = inputs.analyze();
    if common.json {
        return emit_json(&inputs, &analysis);
    }

    println!("Airbnb vs Long-Term Rental");
    println!("{}", "-".repeat(56));
    println!("{:<24} {:>14} {:>14}", "", "Long-Term", "Airbnb");
    three_col("Monthly Revenue",
        format_currency(analysis.rental.monthly_revenue),
        format_currency(analysis.airbnb.monthly_revenue));
    three_col("Monthly Expenses",
        format_currency(analysis.rental.monthly_expenses),
        format_currency(analysis.airbnb.monthly_expenses));
    three_col("Monthly Cash Flow",
        format_currency(analysis.rental.monthly_cash_flow),
        format_currency(analysis.airbnb.monthly_cash_flow));
    three_col("Cash-on-Cash",
        format_percentage(analysis.rental.cash_on_cash_return),
        format_percentage(analysis.airbnb.cash_on_cash_return));
    three_col("Cap Rate",
        format_percentage(analysis.rental.cap_rate),
        format_percentage(analysis.airbnb.cap_rate));
    three_col("5-Year Income",
        format_currency(analysis.rental.five_year_income),
        format_currency(analysis.airbnb.five_year_income));

    println!();
    row("Winner", format!("{} (by {}/mo)",
        analysis.winner.as_str(), format_currency(analysis.winner_margin)));
    match analysis.break_even_occupancy {
        Some(occ) => row("Break-even Occupancy", format_percentage(occ)),
        None => row("Break-even Occupancy", "unreachable".to_string()),
    }
    row("Recommendation", analysis.recommendation.as_str().to_string());
    println!("\nShare: ?{}", params::to_query(&inputs)?);
    Ok(())
}

fn row(label: &str, value: String) {
    println!("{:<28} {:>15}", label, value);
}

fn three_col(label: &str, left: String, right: String) {
    println!("{:<24} {:>14} {:>14}", label, left, right);
}
