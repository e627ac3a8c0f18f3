//! BRRRR (buy, rehab, rent, refinance, repeat) deal analysis
//!
//! The interesting number in a BRRRR deal is not cash flow but capital
//! recovery: how much of the invested cash the refinance pulls back out. A
//! deal that recovers everything has no basis left and its cash-on-cash
//! return is reported as the infinite-return sentinel rather than a
//! percentage.

use serde::{Deserialize, Serialize};

use crate::finance::{break_even_months, monthly_payment, ReturnRate};

/// The standard refinance LTV scenarios lenders quote (percent of ARV)
pub const REFINANCE_LTV_SCENARIOS: [f64; 3] = [70.0, 75.0, 80.0];

/// Deal rating buckets keyed off capital recovery percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoveryRating {
    /// 100%+ of invested cash recovered at refinance
    Excellent,
    /// 80% to 100%
    Great,
    /// 60% to 80%
    Good,
    /// 40% to 60%
    Fair,
    /// Under 40%
    Poor,
}

impl RecoveryRating {
    /// Classify a capital recovery percentage
    pub fn from_recovery(capital_recovery_percent: f64) -> Self {
        if capital_recovery_percent >= 100.0 {
            RecoveryRating::Excellent
        } else if capital_recovery_percent >= 80.0 {
            RecoveryRating::Great
        } else if capital_recovery_percent >= 60.0 {
            RecoveryRating::Good
        } else if capital_recovery_percent >= 40.0 {
            RecoveryRating::Fair
        } else {
            RecoveryRating::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecoveryRating::Excellent => "Excellent",
            RecoveryRating::Great => "Great",
            RecoveryRating::Good => "Good",
            RecoveryRating::Fair => "Fair",
            RecoveryRating::Poor => "Poor",
        }
    }
}

/// Input assumptions for a BRRRR analysis
///
/// Percentages are 0-100. The acquisition loan carries the property through
/// the rehab; the refinance replaces it against the after-repair value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrrrrInputs {
    /// Purchase price before rehab
    pub purchase_price: f64,

    /// Down payment as a percent of purchase price
    pub down_payment_percent: f64,

    /// Closing costs as a percent of purchase price
    pub closing_costs_percent: f64,

    /// Acquisition loan annual interest rate in percent
    pub initial_interest_rate: f64,

    /// Acquisition loan term in years
    pub initial_loan_term: f64,

    /// Renovation budget
    pub renovation_budget: f64,

    /// Rehab duration in months
    pub renovation_timeline: f64,

    /// Monthly carrying costs during rehab (utilities, insurance, taxes)
    pub monthly_holding_costs: f64,

    /// Post-rehab monthly rent
    pub monthly_rent: f64,

    /// Annual property taxes
    pub property_taxes: f64,

    /// Annual insurance premium
    pub insurance: f64,

    /// Monthly HOA dues
    pub hoa_fees: f64,

    /// Property management fee as a percent of collected rent
    pub property_management_percent: f64,

    /// Maintenance reserve as a percent of collected rent
    pub maintenance_percent: f64,

    /// Expected vacancy as a percent of gross rent
    pub vacancy_rate_percent: f64,

    /// Owner-paid monthly utilities after stabilization
    pub utilities: f64,

    /// Appraised value after renovation
    pub after_repair_value: f64,

    /// Refinance loan-to-value as a percent of ARV
    pub refinance_ltv: f64,

    /// Refinance loan annual interest rate in percent
    pub new_interest_rate: f64,

    /// Refinance loan term in years
    pub new_loan_term: f64,

    /// Flat refinance closing costs
    pub refinance_closing_costs: f64,
}

impl Default for BrrrrInputs {
    fn default() -> Self {
        Self {
            purchase_price: 150_000.0,
            down_payment_percent: 25.0,
            closing_costs_percent: 2.0,
            initial_interest_rate: 8.0,
            initial_loan_term: 30.0,
            renovation_budget: 30_000.0,
            renovation_timeline: 4.0,
            monthly_holding_costs: 500.0,
            monthly_rent: 1_800.0,
            property_taxes: 2_400.0,
            insurance: 1_200.0,
            hoa_fees: 0.0,
            property_management_percent: 10.0,
            maintenance_percent: 5.0,
            vacancy_rate_percent: 5.0,
            utilities: 0.0,
            after_repair_value: 220_000.0,
            refinance_ltv: 75.0,
            new_interest_rate: 7.0,
            new_loan_term: 30.0,
            refinance_closing_costs: 3_000.0,
        }
    }
}

impl BrrrrInputs {
    /// A worked example deal: deep-value purchase, fast rehab
    pub fn example() -> Self {
        Self {
            purchase_price: 120_000.0,
            down_payment_percent: 25.0,
            closing_costs_percent: 2.0,
            initial_interest_rate: 8.0,
            initial_loan_term: 30.0,
            renovation_budget: 35_000.0,
            renovation_timeline: 3.0,
            monthly_holding_costs: 400.0,
            monthly_rent: 1_600.0,
            property_taxes: 2_000.0,
            insurance: 1_000.0,
            hoa_fees: 0.0,
            property_management_percent: 8.0,
            maintenance_percent: 5.0,
            vacancy_rate_percent: 5.0,
            utilities: 0.0,
            after_repair_value: 200_000.0,
            refinance_ltv: 75.0,
            new_interest_rate: 6.5,
            new_loan_term: 30.0,
            refinance_closing_costs: 2_500.0,
        }
    }

    /// Run the acquisition-through-refinance chain for these assumptions
    pub fn analyze(&self) -> BrrrrAnalysis {
        let down_payment = self.purchase_price * (self.down_payment_percent / 100.0);
        let closing_costs = self.purchase_price * (self.closing_costs_percent / 100.0);
        let original_loan = self.purchase_price - down_payment;

        let initial_payment = monthly_payment(
            original_loan,
            self.initial_interest_rate,
            self.initial_loan_term,
        );

        // Cash tied up until the refinance: purchase, rehab, and every month
        // of carrying the vacant property
        let holding_during_rehab = self.monthly_holding_costs * self.renovation_timeline;
        let financing_during_rehab = initial_payment * self.renovation_timeline;
        let total_cash_invested = down_payment
            + closing_costs
            + self.renovation_budget
            + holding_during_rehab
            + financing_during_rehab;

        let new_loan_amount = self.after_repair_value * (self.refinance_ltv / 100.0);
        let cash_out_amount = new_loan_amount - original_loan;
        let cash_recovered = cash_out_amount - self.refinance_closing_costs;
        let cash_left_in_deal = total_cash_invested - cash_recovered;

        let new_mortgage_payment =
            monthly_payment(new_loan_amount, self.new_interest_rate, self.new_loan_term);

        let effective_monthly_income =
            self.monthly_rent * (1.0 - self.vacancy_rate_percent / 100.0);

        let monthly_taxes = self.property_taxes / 12.0;
        let monthly_insurance = self.insurance / 12.0;
        let management_fee =
            effective_monthly_income * (self.property_management_percent / 100.0);
        let maintenance_reserve = effective_monthly_income * (self.maintenance_percent / 100.0);

        let total_monthly_expenses = new_mortgage_payment
            + monthly_taxes
            + monthly_insurance
            + self.hoa_fees
            + management_fee
            + maintenance_reserve
            + self.utilities;

        let monthly_cash_flow = effective_monthly_income - total_monthly_expenses;
        let annual_cash_flow = monthly_cash_flow * 12.0;

        let capital_recovery_percent = if total_cash_invested > 0.0 {
            cash_recovered / total_cash_invested * 100.0
        } else {
            0.0
        };

        // Basis <= 0 means the refinance returned everything: infinite return
        let cash_on_cash_return = ReturnRate::on_basis(annual_cash_flow, cash_left_in_deal);

        BrrrrAnalysis {
            total_cash_invested,
            original_loan,
            new_loan_amount,
            cash_out_amount,
            cash_recovered,
            cash_left_in_deal,
            new_mortgage_payment,
            effective_monthly_income,
            total_monthly_expenses,
            monthly_cash_flow,
            capital_recovery_percent,
            cash_on_cash_return,
            break_even_months: break_even_months(cash_left_in_deal, monthly_cash_flow),
            deal_rating: RecoveryRating::from_recovery(capital_recovery_percent),
        }
    }

    /// Re-run the full refinance-through-cash-flow chain at each standard
    /// LTV scenario, returning the per-scenario analyses
    pub fn ltv_sweep(&self) -> Vec<(f64, BrrrrAnalysis)> {
        REFINANCE_LTV_SCENARIOS
            .iter()
            .map(|&ltv| {
                let scenario = BrrrrInputs {
                    refinance_ltv: ltv,
                    ..self.clone()
                };
                (ltv, scenario.analyze())
            })
            .collect()
    }
}

/// Derived metrics for a BRRRR deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrrrrAnalysis {
    /// All cash in through the end of rehab
    pub total_cash_invested: f64,

    /// Acquisition loan balance carried through rehab
    pub original_loan: f64,

    /// Refinance loan sized against ARV
    pub new_loan_amount: f64,

    /// Refinance proceeds above the original loan payoff
    pub cash_out_amount: f64,

    /// Cash-out net of refinance closing costs
    pub cash_recovered: f64,

    /// Invested cash not returned by the refinance (may be negative)
    pub cash_left_in_deal: f64,

    /// Post-refinance monthly principal-and-interest payment
    pub new_mortgage_payment: f64,

    /// Gross rent less vacancy allowance
    pub effective_monthly_income: f64,

    /// All stabilized monthly costs including the new debt service
    pub total_monthly_expenses: f64,

    /// Stabilized monthly cash flow
    pub monthly_cash_flow: f64,

    /// Cash recovered over cash invested, in percent
    pub capital_recovery_percent: f64,

    /// Annual cash flow over cash left in the deal; infinite once the
    /// refinance has returned the full basis
    pub cash_on_cash_return: ReturnRate,

    /// Months of cash flow needed to recover the remaining basis (0 = never)
    pub break_even_months: u32,

    /// Overall deal rating from capital recovery
    pub deal_rating: RecoveryRating,
}
