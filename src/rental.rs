//! Long-term rental (buy and hold) deal analysis
//!
//! Computes the standard buy-and-hold metrics from a flat set of purchase,
//! financing, income, and expense assumptions: monthly cash flow, NOI, cap
//! rate, cash-on-cash return, total ROI with appreciation, and a deal rating.

use serde::{Deserialize, Serialize};

use crate::finance::{break_even_months, monthly_payment};

/// Assumed annual property appreciation, in percent, folded into total ROI.
/// Held fixed regardless of market inputs.
pub const APPRECIATION_RATE_PERCENT: f64 = 3.0;

/// Deal rating buckets keyed off cash-on-cash return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealRating {
    /// Cash-on-cash 12% or better
    Excellent,
    /// 8% to 12%
    Good,
    /// 4% to 8%
    Fair,
    /// Under 4%
    Poor,
}

impl DealRating {
    /// Classify a cash-on-cash return (in percent)
    pub fn from_cash_on_cash(cash_on_cash: f64) -> Self {
        if cash_on_cash >= 12.0 {
            DealRating::Excellent
        } else if cash_on_cash >= 8.0 {
            DealRating::Good
        } else if cash_on_cash >= 4.0 {
            DealRating::Fair
        } else {
            DealRating::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DealRating::Excellent => "Excellent",
            DealRating::Good => "Good",
            DealRating::Fair => "Fair",
            DealRating::Poor => "Poor",
        }
    }
}

/// Input assumptions for a rental property analysis
///
/// All percentages are expressed 0-100. Dollar fields are annual or monthly
/// as named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalInputs {
    /// Total purchase price of the property
    pub purchase_price: f64,

    /// Down payment as a percent of purchase price
    pub down_payment_percent: f64,

    /// Closing costs as a percent of purchase price
    pub closing_costs_percent: f64,

    /// Upfront renovation and repair budget
    pub renovation_costs: f64,

    /// Annual mortgage interest rate in percent
    pub interest_rate: f64,

    /// Mortgage term in years
    pub loan_term_years: f64,

    /// Expected monthly rent
    pub monthly_rent: f64,

    /// Additional monthly income (parking, laundry, storage)
    pub other_monthly_income: f64,

    /// Expected annual rent increase in percent (carried for projections and
    /// URL round-trips; the single-year metrics below do not consume it)
    pub annual_rent_increase_percent: f64,

    /// Annual property taxes
    pub property_taxes: f64,

    /// Annual insurance premium
    pub insurance: f64,

    /// Monthly HOA dues
    pub hoa_fees: f64,

    /// Property management fee as a percent of collected rent
    pub property_management_percent: f64,

    /// Maintenance reserve as a percent of collected rent
    pub maintenance_reserve_percent: f64,

    /// Expected vacancy as a percent of gross rent
    pub vacancy_rate_percent: f64,

    /// Owner-paid monthly utilities
    pub utilities: f64,
}

impl Default for RentalInputs {
    fn default() -> Self {
        Self {
            purchase_price: 300_000.0,
            down_payment_percent: 20.0,
            closing_costs_percent: 2.0,
            renovation_costs: 0.0,
            interest_rate: 7.0,
            loan_term_years: 30.0,
            monthly_rent: 2_500.0,
            other_monthly_income: 0.0,
            annual_rent_increase_percent: 3.0,
            property_taxes: 3_600.0,
            insurance: 1_200.0,
            hoa_fees: 0.0,
            property_management_percent: 10.0,
            maintenance_reserve_percent: 5.0,
            vacancy_rate_percent: 5.0,
            utilities: 0.0,
        }
    }
}

impl RentalInputs {
    /// A worked example deal: light rehab, professional management
    pub fn example() -> Self {
        Self {
            purchase_price: 350_000.0,
            down_payment_percent: 25.0,
            closing_costs_percent: 2.0,
            renovation_costs: 15_000.0,
            interest_rate: 6.5,
            loan_term_years: 30.0,
            monthly_rent: 2_800.0,
            other_monthly_income: 100.0,
            annual_rent_increase_percent: 3.0,
            property_taxes: 4_200.0,
            insurance: 1_500.0,
            hoa_fees: 150.0,
            property_management_percent: 8.0,
            maintenance_reserve_percent: 5.0,
            vacancy_rate_percent: 5.0,
            utilities: 200.0,
        }
    }

    /// Run the full rental analysis for these assumptions
    pub fn analyze(&self) -> RentalAnalysis {
        let down_payment = self.purchase_price * (self.down_payment_percent / 100.0);
        let closing_costs = self.purchase_price * (self.closing_costs_percent / 100.0);
        let loan_amount = self.purchase_price - down_payment;
        let total_cash_invested = down_payment + closing_costs + self.renovation_costs;

        let mortgage_payment =
            monthly_payment(loan_amount, self.interest_rate, self.loan_term_years);

        let gross_monthly_income = self.monthly_rent + self.other_monthly_income;
        let effective_monthly_income =
            gross_monthly_income * (1.0 - self.vacancy_rate_percent / 100.0);

        let monthly_taxes = self.property_taxes / 12.0;
        let monthly_insurance = self.insurance / 12.0;
        let management_fee =
            effective_monthly_income * (self.property_management_percent / 100.0);
        let maintenance_reserve =
            effective_monthly_income * (self.maintenance_reserve_percent / 100.0);

        let total_monthly_expenses = mortgage_payment
            + monthly_taxes
            + monthly_insurance
            + self.hoa_fees
            + management_fee
            + maintenance_reserve
            + self.utilities;

        let monthly_cash_flow = effective_monthly_income - total_monthly_expenses;
        let annual_cash_flow = monthly_cash_flow * 12.0;

        // NOI excludes debt service
        let annual_operating_expenses = (monthly_taxes
            + monthly_insurance
            + self.hoa_fees
            + management_fee
            + maintenance_reserve
            + self.utilities)
            * 12.0;
        let noi = effective_monthly_income * 12.0 - annual_operating_expenses;

        let cap_rate = if self.purchase_price > 0.0 {
            noi / self.purchase_price * 100.0
        } else {
            0.0
        };

        let cash_on_cash_return = if total_cash_invested > 0.0 {
            annual_cash_flow / total_cash_invested * 100.0
        } else {
            0.0
        };

        let yearly_appreciation = self.purchase_price * (APPRECIATION_RATE_PERCENT / 100.0);
        let total_roi = if total_cash_invested > 0.0 {
            (annual_cash_flow + yearly_appreciation) / total_cash_invested * 100.0
        } else {
            0.0
        };

        RentalAnalysis {
            total_cash_invested,
            loan_amount,
            mortgage_payment,
            effective_monthly_income,
            total_monthly_expenses,
            monthly_cash_flow,
            noi,
            cap_rate,
            cash_on_cash_return,
            total_roi,
            break_even_months: break_even_months(total_cash_invested, monthly_cash_flow),
            deal_rating: DealRating::from_cash_on_cash(cash_on_cash_return),
        }
    }
}

/// Derived metrics for a rental deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalAnalysis {
    /// Down payment + closing costs + renovation
    pub total_cash_invested: f64,

    /// Financed amount after down payment
    pub loan_amount: f64,

    /// Fixed monthly principal-and-interest payment
    pub mortgage_payment: f64,

    /// Gross income less vacancy allowance
    pub effective_monthly_income: f64,

    /// All monthly costs including debt service
    pub total_monthly_expenses: f64,

    /// Effective income less all expenses
    pub monthly_cash_flow: f64,

    /// Annual net operating income (excludes debt service)
    pub noi: f64,

    /// NOI over purchase price, in percent
    pub cap_rate: f64,

    /// Annual cash flow over cash invested, in percent
    pub cash_on_cash_return: f64,

    /// Cash-on-cash plus assumed appreciation, in percent
    pub total_roi: f64,

    /// Months of cash flow needed to recover invested cash (0 = never)
    pub break_even_months: u32,

    /// Overall deal rating from cash-on-cash return
    pub deal_rating: DealRating,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_deal_metrics() {
        let analysis = RentalInputs::default().analyze();

        // $60k down + $6k closing, no renovation
        assert_relative_eq!(analysis.total_cash_invested, 66_000.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.loan_amount, 240_000.0, epsilon = 1e-9);
        // $240k at 7% over 30 years
        assert_relative_eq!(analysis.mortgage_payment, 1596.73, epsilon = 0.05);
        // $2,500 rent at 5% vacancy
        assert_relative_eq!(analysis.effective_monthly_income, 2375.0, epsilon = 1e-9);

        // NOI and cap rate have no mortgage dependence and come out exact:
        // 2375*12 - (300 + 100 + 237.50 + 118.75)*12 = 28500 - 9075
        assert_relative_eq!(analysis.noi, 19_425.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.cap_rate, 6.475, epsilon = 1e-9);

        // Thin positive cash flow on the defaults
        assert_relative_eq!(analysis.monthly_cash_flow, 22.02, epsilon = 0.05);
        assert_relative_eq!(analysis.cash_on_cash_return, 0.40, epsilon = 0.01);
        // 3% appreciation on $300k adds $9k to the annual return
        assert_relative_eq!(analysis.total_roi, 14.04, epsilon = 0.01);
        assert!(analysis.break_even_months > 0);
        assert_eq!(analysis.deal_rating, DealRating::Poor);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let inputs = RentalInputs::example();
        assert_eq!(inputs.analyze(), inputs.analyze());
    }

    #[test]
    fn test_all_cash_purchase_has_no_debt_service() {
        let inputs = RentalInputs {
            down_payment_percent: 100.0,
            ..RentalInputs::default()
        };
        let analysis = inputs.analyze();
        assert_eq!(analysis.loan_amount, 0.0);
        assert_eq!(analysis.mortgage_payment, 0.0);
        // Without a mortgage, monthly cash flow is NOI / 12
        assert_relative_eq!(
            analysis.monthly_cash_flow,
            analysis.noi / 12.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_cash_invested_guards_ratios() {
        let inputs = RentalInputs {
            purchase_price: 0.0,
            renovation_costs: 0.0,
            ..RentalInputs::default()
        };
        let analysis = inputs.analyze();
        assert_eq!(analysis.cash_on_cash_return, 0.0);
        assert_eq!(analysis.total_roi, 0.0);
        assert_eq!(analysis.cap_rate, 0.0);
        assert_eq!(analysis.break_even_months, 0);
        assert!(analysis.cash_on_cash_return.is_finite());
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(DealRating::from_cash_on_cash(12.0), DealRating::Excellent);
        assert_eq!(DealRating::from_cash_on_cash(11.99), DealRating::Good);
        assert_eq!(DealRating::from_cash_on_cash(8.0), DealRating::Good);
        assert_eq!(DealRating::from_cash_on_cash(4.0), DealRating::Fair);
        assert_eq!(DealRating::from_cash_on_cash(3.99), DealRating::Poor);
        assert_eq!(DealRating::from_cash_on_cash(-5.0), DealRating::Poor);
    }

    #[test]
    fn test_vacancy_reduces_management_fee_base() {
        // Management and maintenance are taken on collected rent, not gross
        let inputs = RentalInputs {
            vacancy_rate_percent: 50.0,
            ..RentalInputs::default()
        };
        let analysis = inputs.analyze();
        assert_relative_eq!(analysis.effective_monthly_income, 1250.0, epsilon = 1e-9);
        // 10% management on $1,250 collected = $125, folded into expenses
        let baseline = RentalInputs::default().analyze();
        let fee_delta = (baseline.effective_monthly_income - analysis.effective_monthly_income)
            * (inputs.property_management_percent / 100.0);
        assert_relative_eq!(
            baseline.total_monthly_expenses - analysis.total_monthly_expenses,
            fee_delta
                + (baseline.effective_monthly_income - analysis.effective_monthly_income)
                    * (inputs.maintenance_reserve_percent / 100.0),
            epsilon = 1e-9
        );
    }
}
