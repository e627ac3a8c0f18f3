//! REI Calculator CLI demo
//!
//! Analyzes the worked example deals and prints formatted reports

use rei_calculator::brrrr::BrrrrInputs;
use rei_calculator::format::{format_currency, format_duration, format_percentage, format_return};
use rei_calculator::rental::RentalInputs;

fn main() {
    env_logger::init();

    println!("REI Calculator v0.1.0");
    println!("=====================\n");

    // Worked example: light-rehab rental with professional management
    let inputs = RentalInputs::example();
    println!("Rental: {} purchase, {} down, {} rent/mo",
        format_currency(inputs.purchase_price),
        format_percentage(inputs.down_payment_percent),
        format_currency(inputs.monthly_rent),
    );

    let analysis = inputs.analyze();

    println!("\nInvestment Analysis");
    println!("{}", "-".repeat(44));
    println!("{:<28} {:>15}", "Total Cash Invested", format_currency(analysis.total_cash_invested));
    println!("{:<28} {:>15}", "Mortgage Payment", format_currency(analysis.mortgage_payment));
    println!("{:<28} {:>15}", "Effective Income", format_currency(analysis.effective_monthly_income));
    println!("{:<28} {:>15}", "Total Expenses", format_currency(analysis.total_monthly_expenses));
    println!("{:<28} {:>15}", "Monthly Cash Flow", format_currency(analysis.monthly_cash_flow));
    println!("{:<28} {:>15}", "NOI", format_currency(analysis.noi));
    println!("{:<28} {:>15}", "Cap Rate", format_percentage(analysis.cap_rate));
    println!("{:<28} {:>15}", "Cash-on-Cash Return", format_percentage(analysis.cash_on_cash_return));
    println!("{:<28} {:>15}", "Total ROI", format_percentage(analysis.total_roi));
    println!("{:<28} {:>15}", "Break-even", format_duration(analysis.break_even_months));
    println!("{:<28} {:>15}", "Deal Rating", analysis.deal_rating.as_str());

    // BRRRR refinance scenarios for the example deal
    let brrrr = BrrrrInputs::example();
    println!("\nBRRRR Refinance Scenarios ({} ARV)", format_currency(brrrr.after_repair_value));
    println!("{:>5} {:>14} {:>14} {:>12} {:>10} {:>10}",
        "LTV", "Recovered", "Left In Deal", "Cash Flow", "CoC", "Rating");
    println!("{}", "-".repeat(70));

    for (ltv, analysis) in brrrr.ltv_sweep() {
        println!("{:>4}% {:>14} {:>14} {:>12} {:>10} {:>10}",
            ltv,
            format_currency(analysis.cash_recovered),
            format_currency(analysis.cash_left_in_deal),
            format_currency(analysis.monthly_cash_flow),
            format_return(analysis.cash_on_cash_return),
            analysis.deal_rating.as_str(),
        );
    }
}
