//! Batch-analyze a CSV file of rental deals
//!
//! Reads deal records, runs the full analysis for each in parallel, writes
//! per-deal results to deal_analysis.csv, and prints aggregate statistics.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use rei_calculator::format::{format_currency, format_percentage};
use rei_calculator::loader::{load_deals, DealRecord};
use rei_calculator::rental::{DealRating, RentalAnalysis};

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "deals.csv".to_string());

    let start = Instant::now();
    println!("Loading deals from {}...", path);
    let deals = load_deals(Path::new(&path)).expect("Failed to load deals");
    println!("Loaded {} deals in {:?}", deals.len(), start.elapsed());

    let analyze_start = Instant::now();
    let results: Vec<(DealRecord, RentalAnalysis)> = deals
        .par_iter()
        .map(|deal| (deal.clone(), deal.inputs.analyze()))
        .collect();
    println!("Analyzed {} deals in {:?}\n", results.len(), analyze_start.elapsed());

    // Write per-deal results
    let csv_path = "deal_analysis.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");
    writeln!(file, "Name,PurchasePrice,CashInvested,MonthlyCashFlow,NOI,CapRate,CashOnCash,TotalROI,BreakEvenMonths,Rating").unwrap();
    for (deal, analysis) in &results {
        writeln!(file, "{},{:.2},{:.2},{:.2},{:.2},{:.4},{:.4},{:.4},{},{}",
            deal.name,
            deal.inputs.purchase_price,
            analysis.total_cash_invested,
            analysis.monthly_cash_flow,
            analysis.noi,
            analysis.cap_rate,
            analysis.cash_on_cash_return,
            analysis.total_roi,
            analysis.break_even_months,
            analysis.deal_rating.as_str(),
        ).unwrap();
    }
    println!("Per-deal results written to: {}", csv_path);

    if results.is_empty() {
        return;
    }

    // Aggregate statistics
    let count = results.len() as f64;
    let total_cash_flow: f64 = results.iter().map(|(_, a)| a.monthly_cash_flow).sum();
    let avg_cap_rate: f64 = results.iter().map(|(_, a)| a.cap_rate).sum::<f64>() / count;
    let avg_coc: f64 = results.iter().map(|(_, a)| a.cash_on_cash_return).sum::<f64>() / count;
    let positive = results.iter().filter(|(_, a)| a.monthly_cash_flow > 0.0).count();

    println!("\nSummary:");
    println!("  Deals Analyzed: {}", results.len());
    println!("  Cash-Flow Positive: {}", positive);
    println!("  Combined Monthly Cash Flow: {}", format_currency(total_cash_flow));
    println!("  Average Cap Rate: {}", format_percentage(avg_cap_rate));
    println!("  Average Cash-on-Cash: {}", format_percentage(avg_coc));

    // Rating distribution
    println!("\nRatings:");
    for rating in [DealRating::Excellent, DealRating::Good, DealRating::Fair, DealRating::Poor] {
        let n = results.iter().filter(|(_, a)| a.deal_rating == rating).count();
        if n > 0 {
            println!("  {:<10} {}", rating.as_str(), n);
        }
    }

    // Best deal by cash-on-cash
    if let Some((deal, analysis)) = results
        .iter()
        .max_by(|(_, a), (_, b)| a.cash_on_cash_return.total_cmp(&b.cash_on_cash_return))
    {
        println!("\nBest Deal: {} ({} cash-on-cash, {} cash flow/mo)",
            deal.name,
            format_percentage(analysis.cash_on_cash_return),
            format_currency(analysis.monthly_cash_flow),
        );
    }
}
