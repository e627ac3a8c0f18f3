//! Fix & flip deal analysis
//!
//! Short-horizon purchase-renovate-sell economics: interest-only carry on the
//! acquisition loan, a contingency-padded rehab budget, sale-side costs
//! against ARV, and a letter grade that requires both headline ROI and
//! annualized ROI to clear each tier.

use serde::{Deserialize, Serialize};

use crate::finance::monthly_interest_only;

/// Holding-timeline range exposed to the user, in months
pub const MIN_TIMELINE_MONTHS: u32 = 3;
pub const MAX_TIMELINE_MONTHS: u32 = 12;

/// How the purchase is financed. Selecting a type overwrites the rate,
/// points, and down payment with that market's typical terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    /// Short-term private lending: fast close, expensive money
    HardMoney,
    /// Bank financing: cheaper, slower, bigger down payment
    Conventional,
    /// No financing, no carry cost on the purchase
    Cash,
}

/// Typical financing terms for a loan type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanDefaults {
    /// Annual interest rate in percent
    pub interest_rate: f64,
    /// Origination points as a percent of the loan
    pub loan_points: f64,
    /// Down payment as a percent of purchase price
    pub down_payment_percent: f64,
}

impl LoanType {
    /// Market-typical terms for this financing type
    pub fn defaults(&self) -> LoanDefaults {
        match self {
            LoanType::HardMoney => LoanDefaults {
                interest_rate: 10.0,
                loan_points: 2.0,
                down_payment_percent: 20.0,
            },
            LoanType::Conventional => LoanDefaults {
                interest_rate: 7.0,
                loan_points: 1.0,
                down_payment_percent: 25.0,
            },
            LoanType::Cash => LoanDefaults {
                interest_rate: 0.0,
                loan_points: 0.0,
                down_payment_percent: 100.0,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::HardMoney => "Hard Money",
            LoanType::Conventional => "Conventional",
            LoanType::Cash => "Cash",
        }
    }
}

/// Letter grade for a flip, requiring both ROI and annualized ROI to clear
/// the tier's paired thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl FlipGrade {
    /// Grade from total ROI and annualized ROI, both in percent. A tier is
    /// earned only when both numbers clear it; otherwise evaluation falls
    /// through to the next tier down.
    pub fn from_returns(roi: f64, annualized_roi: f64) -> Self {
        if annualized_roi >= 50.0 && roi >= 25.0 {
            FlipGrade::APlus
        } else if annualized_roi >= 40.0 && roi >= 20.0 {
            FlipGrade::A
        } else if annualized_roi >= 30.0 && roi >= 15.0 {
            FlipGrade::B
        } else if annualized_roi >= 20.0 && roi >= 10.0 {
            FlipGrade::C
        } else if annualized_roi >= 10.0 && roi >= 5.0 {
            FlipGrade::D
        } else {
            FlipGrade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlipGrade::APlus => "A+",
            FlipGrade::A => "A",
            FlipGrade::B => "B",
            FlipGrade::C => "C",
            FlipGrade::D => "D",
            FlipGrade::F => "F",
        }
    }
}

/// Input assumptions for a fix & flip analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlipInputs {
    /// Purchase price before renovation
    pub purchase_price: f64,

    /// Down payment as a percent of purchase price
    pub down_payment_percent: f64,

    /// Annual interest rate on the acquisition loan, in percent
    pub interest_rate: f64,

    /// Origination points as a percent of the loan amount
    pub loan_points: f64,

    /// Flat closing costs on the purchase
    pub purchase_closing_costs: f64,

    /// Base renovation budget before contingency
    pub renovation_budget: f64,

    /// Contingency padding as a percent of the renovation budget
    pub contingency_percent: f64,

    /// Monthly property taxes while holding
    pub property_taxes_monthly: f64,

    /// Monthly insurance while holding
    pub insurance_monthly: f64,

    /// Monthly utilities while holding
    pub utilities_monthly: f64,

    /// Monthly HOA dues while holding
    pub hoa_fees_monthly: f64,

    /// Projected resale value after renovation
    pub after_repair_value: f64,

    /// Listing agent commission as a percent of ARV
    pub realtor_commission_percent: f64,

    /// Seller-side closing costs as a percent of ARV
    pub selling_closing_costs_percent: f64,

    /// Staging costs at sale
    pub staging_costs: f64,

    /// Punch-list repairs before listing
    pub pre_sale_repairs: f64,

    /// Months from purchase to sale
    pub holding_timeline_months: f64,

    /// Financing type; drives whether interest accrues and the loan defaults
    pub loan_type: LoanType,
}

impl Default for FlipInputs {
    fn default() -> Self {
        Self {
            purchase_price: 200_000.0,
            down_payment_percent: 20.0,
            interest_rate: 10.0,
            loan_points: 2.0,
            purchase_closing_costs: 3_000.0,
            renovation_budget: 50_000.0,
            contingency_percent: 10.0,
            property_taxes_monthly: 300.0,
            insurance_monthly: 150.0,
            utilities_monthly: 200.0,
            hoa_fees_monthly: 0.0,
            after_repair_value: 325_000.0,
            realtor_commission_percent: 6.0,
            selling_closing_costs_percent: 2.0,
            staging_costs: 2_000.0,
            pre_sale_repairs: 1_000.0,
            holding_timeline_months: 6.0,
            loan_type: LoanType::HardMoney,
        }
    }
}

impl FlipInputs {
    /// A worked example deal: mid-size rehab on a five-month timeline
    pub fn example() -> Self {
        Self {
            purchase_price: 180_000.0,
            down_payment_percent: 20.0,
            interest_rate: 10.0,
            loan_points: 2.0,
            purchase_closing_costs: 2_500.0,
            renovation_budget: 45_000.0,
            contingency_percent: 10.0,
            property_taxes_monthly: 250.0,
            insurance_monthly: 120.0,
            utilities_monthly: 180.0,
            hoa_fees_monthly: 0.0,
            after_repair_value: 290_000.0,
            realtor_commission_percent: 6.0,
            selling_closing_costs_percent: 2.0,
            staging_costs: 1_500.0,
            pre_sale_repairs: 800.0,
            holding_timeline_months: 5.0,
            loan_type: LoanType::HardMoney,
        }
    }

    /// Switch financing type, overwriting rate, points, and down payment
    /// with the type's market-typical terms
    pub fn apply_loan_type(&mut self, loan_type: LoanType) {
        let defaults = loan_type.defaults();
        self.loan_type = loan_type;
        self.interest_rate = defaults.interest_rate;
        self.loan_points = defaults.loan_points;
        self.down_payment_percent = defaults.down_payment_percent;
    }

    /// Run the full flip analysis for these assumptions
    pub fn analyze(&self) -> FlipAnalysis {
        let down_payment = self.purchase_price * (self.down_payment_percent / 100.0);
        let loan_amount = self.purchase_price - down_payment;
        let loan_points_cost = loan_amount * (self.loan_points / 100.0);
        let purchase_costs = down_payment + loan_points_cost + self.purchase_closing_costs;

        let contingency = self.renovation_budget * (self.contingency_percent / 100.0);
        let renovation_costs = self.renovation_budget + contingency;

        // Acquisition financing is interest-only until the sale
        let monthly_interest = match self.loan_type {
            LoanType::Cash => 0.0,
            _ => monthly_interest_only(loan_amount, self.interest_rate),
        };
        let monthly_holding = monthly_interest
            + self.property_taxes_monthly
            + self.insurance_monthly
            + self.utilities_monthly
            + self.hoa_fees_monthly;
        let holding_costs = monthly_holding * self.holding_timeline_months;

        let realtor_commission =
            self.after_repair_value * (self.realtor_commission_percent / 100.0);
        let closing_costs = self.after_repair_value * (self.selling_closing_costs_percent / 100.0);
        let selling_costs =
            realtor_commission + closing_costs + self.staging_costs + self.pre_sale_repairs;

        let total_costs = purchase_costs + renovation_costs + holding_costs + selling_costs;

        // Sale proceeds after selling costs and loan payoff
        let net_proceeds = self.after_repair_value - selling_costs - loan_amount;
        let total_profit = net_proceeds - purchase_costs - renovation_costs - holding_costs;

        let total_investment = purchase_costs + renovation_costs;
        let roi = if total_investment > 0.0 {
            total_profit / total_investment * 100.0
        } else {
            0.0
        };
        let annualized_roi = if self.holding_timeline_months > 0.0 {
            roi / self.holding_timeline_months * 12.0
        } else {
            0.0
        };
        let profit_per_month = if self.holding_timeline_months > 0.0 {
            total_profit / self.holding_timeline_months
        } else {
            0.0
        };

        // 70% rule: justified price caps at 70% of ARV less rehab
        let max_purchase_for_70_rule = self.after_repair_value * 0.70 - renovation_costs;
        let passes_70_rule = self.purchase_price <= max_purchase_for_70_rule;

        FlipAnalysis {
            loan_amount,
            purchase_costs,
            renovation_costs,
            holding_costs,
            selling_costs,
            total_costs,
            monthly_carrying_cost: monthly_holding,
            net_proceeds,
            total_profit,
            total_investment,
            roi,
            annualized_roi,
            profit_per_month,
            break_even_price: total_costs,
            max_purchase_for_70_rule,
            passes_70_rule,
            deal_grade: FlipGrade::from_returns(roi, annualized_roi),
        }
    }

    /// Run the analysis across the full 3-12 month holding range
    pub fn timeline_sweep(&self) -> Vec<(u32, FlipAnalysis)> {
        (MIN_TIMELINE_MONTHS..=MAX_TIMELINE_MONTHS)
            .map(|months| {
                let scenario = FlipInputs {
                    holding_timeline_months: months as f64,
                    ..self.clone()
                };
                (months, scenario.analyze())
            })
            .collect()
    }
}

/// Derived metrics for a flip deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlipAnalysis {
    /// Financed amount after down payment
    pub loan_amount: f64,

    /// Down payment + points + purchase closing costs
    pub purchase_costs: f64,

    /// Renovation budget with contingency applied
    pub renovation_costs: f64,

    /// Carry cost over the full holding timeline
    pub holding_costs: f64,

    /// Commission, closing, staging, and pre-sale repairs at exit
    pub selling_costs: f64,

    /// Everything spent across the project
    pub total_costs: f64,

    /// Interest plus fixed monthly costs while holding
    pub monthly_carrying_cost: f64,

    /// ARV less selling costs and loan payoff
    pub net_proceeds: f64,

    /// Net proceeds less all cash costs
    pub total_profit: f64,

    /// Purchase costs plus renovation (the cash-at-risk denominator)
    pub total_investment: f64,

    /// Profit over investment, in percent
    pub roi: f64,

    /// ROI scaled to a 12-month pace, in percent
    pub annualized_roi: f64,

    /// Profit per month of holding
    pub profit_per_month: f64,

    /// Sale price needed to cover every cost
    pub break_even_price: f64,

    /// Maximum justified purchase price under the 70% rule
    pub max_purchase_for_70_rule: f64,

    /// Whether the actual purchase price is at or under that cap
    pub passes_70_rule: bool,

    /// Letter grade from the paired ROI thresholds
    pub deal_grade: FlipGrade,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_deal_metrics() {
        let analysis = FlipInputs::default().analyze();

        assert_relative_eq!(analysis.loan_amount, 160_000.0, epsilon = 1e-9);
        // $40k down + $3.2k points + $3k closing
        assert_relative_eq!(analysis.purchase_costs, 46_200.0, epsilon = 1e-9);
        // $50k budget + 10% contingency
        assert_relative_eq!(analysis.renovation_costs, 55_000.0, epsilon = 1e-9);
        // ($1,333.33 interest + $650 fixed) * 6 months
        assert_relative_eq!(analysis.holding_costs, 11_900.0, epsilon = 0.01);
        // 6% + 2% of $325k ARV + staging + pre-sale
        assert_relative_eq!(analysis.selling_costs, 29_000.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.total_costs, 142_100.0, epsilon = 0.01);

        assert_relative_eq!(analysis.net_proceeds, 136_000.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.total_profit, 22_900.0, epsilon = 0.01);
        assert_relative_eq!(analysis.roi, 22.63, epsilon = 0.01);
        assert_relative_eq!(analysis.annualized_roi, 45.26, epsilon = 0.01);
        assert_relative_eq!(analysis.profit_per_month, 3_816.67, epsilon = 0.01);

        // $200k purchase against a $172.5k cap: fails the 70% rule
        assert_relative_eq!(analysis.max_purchase_for_70_rule, 172_500.0, epsilon = 1e-9);
        assert!(!analysis.passes_70_rule);
        assert_eq!(analysis.deal_grade, FlipGrade::A);
    }

    #[test]
    fn test_70_rule_boundary_is_inclusive() {
        // Cap = 300k * 0.70 - 40k rehab = $170k exactly
        let mut inputs = FlipInputs {
            after_repair_value: 300_000.0,
            renovation_budget: 40_000.0,
            contingency_percent: 0.0,
            purchase_price: 170_000.0,
            ..FlipInputs::default()
        };
        assert!(inputs.analyze().passes_70_rule);

        inputs.purchase_price = 170_000.01;
        assert!(!inputs.analyze().passes_70_rule);
    }

    #[test]
    fn test_cash_purchase_accrues_no_interest() {
        let mut inputs = FlipInputs::default();
        inputs.apply_loan_type(LoanType::Cash);

        assert_eq!(inputs.interest_rate, 0.0);
        assert_eq!(inputs.loan_points, 0.0);
        assert_eq!(inputs.down_payment_percent, 100.0);

        let analysis = inputs.analyze();
        assert_eq!(analysis.loan_amount, 0.0);
        // Carry is fixed costs only
        assert_relative_eq!(analysis.monthly_carrying_cost, 650.0, epsilon = 1e-9);
    }

    #[test]
    fn test_loan_type_overwrites_financing_fields() {
        let mut inputs = FlipInputs::default();
        inputs.apply_loan_type(LoanType::Conventional);
        assert_eq!(inputs.interest_rate, 7.0);
        assert_eq!(inputs.loan_points, 1.0);
        assert_eq!(inputs.down_payment_percent, 25.0);
        assert_eq!(inputs.loan_type, LoanType::Conventional);
    }

    #[test]
    fn test_grade_requires_both_thresholds() {
        assert_eq!(FlipGrade::from_returns(25.0, 50.0), FlipGrade::APlus);
        // Fast but thin: huge annualized pace, tiny ROI falls all the way to F
        assert_eq!(FlipGrade::from_returns(4.0, 100.0), FlipGrade::F);
        // Fat but slow: ROI alone cannot earn the tier either
        assert_eq!(FlipGrade::from_returns(60.0, 9.0), FlipGrade::F);
        assert_eq!(FlipGrade::from_returns(20.0, 40.0), FlipGrade::A);
        assert_eq!(FlipGrade::from_returns(15.0, 30.0), FlipGrade::B);
        assert_eq!(FlipGrade::from_returns(10.0, 20.0), FlipGrade::C);
        assert_eq!(FlipGrade::from_returns(5.0, 10.0), FlipGrade::D);
    }

    #[test]
    fn test_timeline_sweep_spans_slider_range() {
        let sweep = FlipInputs::default().timeline_sweep();
        assert_eq!(sweep.len(), 10);
        assert_eq!(sweep.first().unwrap().0, 3);
        assert_eq!(sweep.last().unwrap().0, 12);

        // Longer holds burn more carry and dilute the annualized pace
        let (_, fast) = &sweep[0];
        let (_, slow) = &sweep[9];
        assert!(slow.holding_costs > fast.holding_costs);
        assert!(slow.annualized_roi < fast.annualized_roi);
    }

    #[test]
    fn test_zero_timeline_guards_rates() {
        let inputs = FlipInputs {
            holding_timeline_months: 0.0,
            ..FlipInputs::default()
        };
        let analysis = inputs.analyze();
        assert_eq!(analysis.annualized_roi, 0.0);
        assert_eq!(analysis.profit_per_month, 0.0);
        assert!(analysis.roi.is_finite());
    }
}
