//! Short-term rental vs long-term rental comparison
//!
//! Runs both operating models over the same property and financing, then
//! compares monthly cash flow, solves for the occupancy at which the
//! short-term path catches the long-term one, and buckets the result into a
//! recommendation.
//!
//! Short-term revenue can optionally blend seasonal pricing across a fixed
//! 4-month high / 4-month low / 4-month regular split. Cleaning-turn counts
//! always derive from the base occupancy field, seasonal or not.

use serde::{Deserialize, Serialize};

use crate::finance::monthly_payment;

/// Months assumed per season when seasonal pricing is enabled
const SEASON_MONTHS: f64 = 4.0;

/// Furnishing setup amortization horizon (5 years)
const FURNISHING_AMORTIZATION_MONTHS: f64 = 60.0;

/// Tenant turnover amortization horizon (2-year average tenancy)
const TURNOVER_AMORTIZATION_MONTHS: f64 = 24.0;

/// The two operating strategies under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Airbnb,
    LongTermRental,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Airbnb => "Airbnb",
            Strategy::LongTermRental => "Long-Term Rental",
        }
    }
}

/// Recommendation buckets keyed off break-even occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Break-even under 50% occupancy: the short-term path has wide margin
    StrongAirbnb,
    /// Break-even under 70%
    LeanAirbnb,
    /// Break-even under 85%: workable but occupancy-sensitive
    ConsiderBoth,
    /// Break-even at 85%+ (or unreachable)
    LongTermRental,
}

impl Recommendation {
    /// Classify a break-even occupancy; `None` (no occupancy closes the gap)
    /// always recommends the long-term path
    pub fn from_break_even(break_even_occupancy: Option<f64>) -> Self {
        match break_even_occupancy {
            Some(occ) if occ < 50.0 => Recommendation::StrongAirbnb,
            Some(occ) if occ < 70.0 => Recommendation::LeanAirbnb,
            Some(occ) if occ < 85.0 => Recommendation::ConsiderBoth,
            _ => Recommendation::LongTermRental,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongAirbnb => "Strong Airbnb",
            Recommendation::LeanAirbnb => "Lean Airbnb",
            Recommendation::ConsiderBoth => "Consider Both",
            Recommendation::LongTermRental => "Long-Term Rental",
        }
    }
}

/// Typical market numbers for a named city, applied over the short-term
/// fields in bulk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityPreset {
    pub name: &'static str,
    pub monthly_rent: f64,
    pub nightly_rate: f64,
    pub occupancy_rate_percent: f64,
    pub high_season_rate: f64,
    pub low_season_rate: f64,
}

/// Named markets with bundled rent/rate/occupancy assumptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityMarket {
    Nashville,
    Orlando,
    Denver,
    Austin,
    SanDiego,
    MountainTown,
    BeachTown,
}

impl CityMarket {
    pub const ALL: [CityMarket; 7] = [
        CityMarket::Nashville,
        CityMarket::Orlando,
        CityMarket::Denver,
        CityMarket::Austin,
        CityMarket::SanDiego,
        CityMarket::MountainTown,
        CityMarket::BeachTown,
    ];

    pub fn preset(&self) -> CityPreset {
        match self {
            CityMarket::Nashville => CityPreset {
                name: "Nashville",
                monthly_rent: 2_500.0,
                nightly_rate: 150.0,
                occupancy_rate_percent: 70.0,
                high_season_rate: 180.0,
                low_season_rate: 120.0,
            },
            CityMarket::Orlando => CityPreset {
                name: "Orlando",
                monthly_rent: 2_200.0,
                nightly_rate: 125.0,
                occupancy_rate_percent: 75.0,
                high_season_rate: 175.0,
                low_season_rate: 95.0,
            },
            CityMarket::Denver => CityPreset {
                name: "Denver",
                monthly_rent: 2_800.0,
                nightly_rate: 140.0,
                occupancy_rate_percent: 65.0,
                high_season_rate: 200.0,
                low_season_rate: 100.0,
            },
            CityMarket::Austin => CityPreset {
                name: "Austin",
                monthly_rent: 2_600.0,
                nightly_rate: 135.0,
                occupancy_rate_percent: 68.0,
                high_season_rate: 160.0,
                low_season_rate: 110.0,
            },
            CityMarket::SanDiego => CityPreset {
                name: "San Diego",
                monthly_rent: 3_200.0,
                nightly_rate: 175.0,
                occupancy_rate_percent: 72.0,
                high_season_rate: 225.0,
                low_season_rate: 140.0,
            },
            CityMarket::MountainTown => CityPreset {
                name: "Mountain Town",
                monthly_rent: 2_000.0,
                nightly_rate: 200.0,
                occupancy_rate_percent: 60.0,
                high_season_rate: 350.0,
                low_season_rate: 120.0,
            },
            CityMarket::BeachTown => CityPreset {
                name: "Beach Town",
                monthly_rent: 2_400.0,
                nightly_rate: 180.0,
                occupancy_rate_percent: 70.0,
                high_season_rate: 250.0,
                low_season_rate: 130.0,
            },
        }
    }

    /// Lookup key used on the CLI, e.g. `"sandiego"`
    pub fn as_key(&self) -> &'static str {
        match self {
            CityMarket::Nashville => "nashville",
            CityMarket::Orlando => "orlando",
            CityMarket::Denver => "denver",
            CityMarket::Austin => "austin",
            CityMarket::SanDiego => "sandiego",
            CityMarket::MountainTown => "mountain",
            CityMarket::BeachTown => "beach",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_key() == key)
    }
}

/// Input assumptions shared by both paths plus each path's own model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirbnbInputs {
    // Shared property and financing
    /// Total purchase price of the property
    pub purchase_price: f64,
    /// Down payment as a percent of purchase price
    pub down_payment_percent: f64,
    /// Annual mortgage interest rate in percent
    pub interest_rate: f64,
    /// Mortgage term in years
    pub loan_term_years: f64,
    /// Annual property taxes
    pub property_taxes: f64,
    /// Annual insurance premium at long-term-rental risk level
    pub base_insurance: f64,
    /// Monthly HOA dues
    pub hoa_fees: f64,
    /// Maintenance reserve as a percent of revenue
    pub maintenance_reserve_percent: f64,

    // Long-term rental model
    /// Monthly rent
    pub monthly_rent: f64,
    /// Expected vacancy as a percent of gross rent
    pub vacancy_rate_percent: f64,
    /// Property management fee as a percent of collected rent
    pub property_management_percent: f64,
    /// Expected annual rent increase in percent
    pub annual_rent_increase_percent: f64,
    /// Make-ready cost per tenant turnover
    pub tenant_turnover_costs: f64,
    /// Owner-paid monthly utilities under a long-term lease
    pub owner_paid_utilities: f64,

    // Short-term rental model
    /// Base nightly rate
    pub nightly_rate: f64,
    /// Expected occupancy as a percent of nights
    pub occupancy_rate_percent: f64,
    /// Cleaning fee charged per stay
    pub cleaning_fee: f64,
    /// Actual cleaning cost per stay
    pub cleaning_cost: f64,
    /// Average stay length in nights
    pub average_stay_length: f64,
    /// Blend high/low season pricing instead of the flat nightly rate
    pub seasonal_pricing: bool,
    /// High-season nightly rate
    pub high_season_rate: f64,
    /// High-season occupancy percent
    pub high_season_occupancy: f64,
    /// Low-season nightly rate
    pub low_season_rate: f64,
    /// Low-season occupancy percent
    pub low_season_occupancy: f64,
    /// Booking platform fee as a percent of revenue
    pub platform_fee_percent: f64,
    /// Insurance premium multiplier for short-term use
    pub airbnb_insurance_multiplier: f64,
    /// Monthly utilities the host covers
    pub airbnb_utilities: f64,
    /// Monthly internet and cable
    pub internet_cable: f64,
    /// Monthly supplies and consumables
    pub supplies_consumables: f64,
    /// One-time furnishing setup cost, amortized over five years
    pub furniture_setup: f64,
    /// Short-term management fee as a percent of revenue
    pub airbnb_management_percent: f64,
    /// Maintenance multiplier for short-term wear
    pub airbnb_maintenance_multiplier: f64,
}

impl Default for AirbnbInputs {
    fn default() -> Self {
        Self {
            purchase_price: 400_000.0,
            down_payment_percent: 20.0,
            interest_rate: 7.0,
            loan_term_years: 30.0,
            property_taxes: 4_800.0,
            base_insurance: 1_800.0,
            hoa_fees: 0.0,
            maintenance_reserve_percent: 5.0,

            monthly_rent: 2_500.0,
            vacancy_rate_percent: 5.0,
            property_management_percent: 8.0,
            annual_rent_increase_percent: 3.0,
            tenant_turnover_costs: 1_500.0,
            owner_paid_utilities: 0.0,

            nightly_rate: 150.0,
            occupancy_rate_percent: 65.0,
            cleaning_fee: 75.0,
            cleaning_cost: 50.0,
            average_stay_length: 3.0,
            seasonal_pricing: false,
            high_season_rate: 200.0,
            high_season_occupancy: 80.0,
            low_season_rate: 100.0,
            low_season_occupancy: 50.0,
            platform_fee_percent: 3.0,
            airbnb_insurance_multiplier: 1.25,
            airbnb_utilities: 200.0,
            internet_cable: 100.0,
            supplies_consumables: 50.0,
            furniture_setup: 15_000.0,
            airbnb_management_percent: 25.0,
            airbnb_maintenance_multiplier: 1.5,
        }
    }
}

impl AirbnbInputs {
    /// Overwrite the market-driven fields from a city preset
    pub fn apply_preset(&mut self, market: CityMarket) {
        let preset = market.preset();
        self.monthly_rent = preset.monthly_rent;
        self.nightly_rate = preset.nightly_rate;
        self.occupancy_rate_percent = preset.occupancy_rate_percent;
        self.high_season_rate = preset.high_season_rate;
        self.low_season_rate = preset.low_season_rate;
    }

    /// Run both operating models and the comparison
    pub fn analyze(&self) -> ComparisonAnalysis {
        let down_payment = self.purchase_price * (self.down_payment_percent / 100.0);
        let loan_amount = self.purchase_price - down_payment;
        let mortgage_payment =
            monthly_payment(loan_amount, self.interest_rate, self.loan_term_years);

        let monthly_taxes = self.property_taxes / 12.0;

        // Long-term path
        let effective_rent = self.monthly_rent * (1.0 - self.vacancy_rate_percent / 100.0);
        let rental_insurance = self.base_insurance / 12.0;
        let rental_management = effective_rent * (self.property_management_percent / 100.0);
        let rental_maintenance = effective_rent * (self.maintenance_reserve_percent / 100.0);
        let turnover_monthly = self.tenant_turnover_costs / TURNOVER_AMORTIZATION_MONTHS;

        let rental_expenses = mortgage_payment
            + monthly_taxes
            + rental_insurance
            + self.hoa_fees
            + rental_management
            + rental_maintenance
            + turnover_monthly
            + self.owner_paid_utilities;

        let rental_cash_flow = effective_rent - rental_expenses;
        let rental_annual = rental_cash_flow * 12.0;

        // Short-term path: nightly revenue, seasonally blended or flat
        let room_revenue = if self.seasonal_pricing {
            let high = self.high_season_rate * 30.0 * (self.high_season_occupancy / 100.0);
            let low = self.low_season_rate * 30.0 * (self.low_season_occupancy / 100.0);
            let regular = self.nightly_rate * 30.0 * (self.occupancy_rate_percent / 100.0);
            (high + low + regular) * SEASON_MONTHS / 12.0
        } else {
            self.nightly_rate * 30.0 * (self.occupancy_rate_percent / 100.0)
        };

        // Turn count comes from the base occupancy regardless of seasonality
        let stays_per_month = if self.average_stay_length > 0.0 {
            30.0 * (self.occupancy_rate_percent / 100.0) / self.average_stay_length
        } else {
            0.0
        };
        let cleaning_revenue = self.cleaning_fee * stays_per_month;
        let cleaning_expense = self.cleaning_cost * stays_per_month;

        let airbnb_revenue = room_revenue + cleaning_revenue;
        let platform_fees = airbnb_revenue * (self.platform_fee_percent / 100.0);

        let airbnb_insurance = self.base_insurance * self.airbnb_insurance_multiplier / 12.0;
        let airbnb_management = airbnb_revenue * (self.airbnb_management_percent / 100.0);
        let airbnb_maintenance = airbnb_revenue
            * (self.maintenance_reserve_percent / 100.0)
            * self.airbnb_maintenance_multiplier;
        let furnishing_monthly = self.furniture_setup / FURNISHING_AMORTIZATION_MONTHS;

        let airbnb_expenses = mortgage_payment
            + monthly_taxes
            + airbnb_insurance
            + self.hoa_fees
            + airbnb_management
            + airbnb_maintenance
            + cleaning_expense
            + platform_fees
            + self.airbnb_utilities
            + self.internet_cable
            + self.supplies_consumables
            + furnishing_monthly;

        let airbnb_cash_flow = airbnb_revenue - airbnb_expenses;
        let airbnb_annual = airbnb_cash_flow * 12.0;

        // Head-to-head
        let cash_flow_difference = airbnb_cash_flow - rental_cash_flow;
        let winner = if cash_flow_difference > 0.0 {
            Strategy::Airbnb
        } else {
            Strategy::LongTermRental
        };

        // Break-even occupancy: nights at which short-term cash flow matches
        // the long-term path, given the fixed costs and the per-night margin
        // after variable-rate costs and the cleaning spread
        let airbnb_fixed_costs = mortgage_payment
            + monthly_taxes
            + airbnb_insurance
            + self.hoa_fees
            + self.airbnb_utilities
            + self.internet_cable
            + self.supplies_consumables
            + furnishing_monthly;
        let variable_cost_rate = (self.airbnb_management_percent
            + self.platform_fee_percent
            + self.maintenance_reserve_percent * self.airbnb_maintenance_multiplier)
            / 100.0;
        let cleaning_margin_per_night = if self.average_stay_length > 0.0 {
            (self.cleaning_fee - self.cleaning_cost) / self.average_stay_length
        } else {
            0.0
        };
        let net_revenue_per_night =
            self.nightly_rate * (1.0 - variable_cost_rate) + cleaning_margin_per_night;

        let break_even_occupancy = if net_revenue_per_night > 0.0 {
            let break_even_nights = (rental_cash_flow + airbnb_fixed_costs) / net_revenue_per_night;
            Some(break_even_nights / 30.0 * 100.0)
        } else {
            None
        };

        // Five-year outlooks: long-term compounds at half the stated rent
        // growth horizon; short-term income is held flat
        let rental_five_year = rental_annual
            * 5.0
            * (1.0 + self.annual_rent_increase_percent / 100.0).powf(2.5);
        let airbnb_five_year = airbnb_annual * 5.0;

        let rental_cash_on_cash = if down_payment > 0.0 {
            rental_annual / down_payment * 100.0
        } else {
            0.0
        };
        let airbnb_cash_on_cash = if down_payment > 0.0 {
            airbnb_annual / down_payment * 100.0
        } else {
            0.0
        };

        // Cap rates exclude debt service; each path carries its own
        // insurance and maintenance levels
        let rental_noi = effective_rent * 12.0
            - (monthly_taxes * 12.0
                + self.base_insurance
                + rental_maintenance * 12.0
                + self.hoa_fees * 12.0);
        let airbnb_noi = airbnb_revenue * 12.0
            - (monthly_taxes * 12.0
                + self.base_insurance * self.airbnb_insurance_multiplier
                + airbnb_maintenance * 12.0
                + self.hoa_fees * 12.0);
        let rental_cap_rate = if self.purchase_price > 0.0 {
            rental_noi / self.purchase_price * 100.0
        } else {
            0.0
        };
        let airbnb_cap_rate = if self.purchase_price > 0.0 {
            airbnb_noi / self.purchase_price * 100.0
        } else {
            0.0
        };

        ComparisonAnalysis {
            mortgage_payment,
            rental: StrategyOutlook {
                monthly_revenue: effective_rent,
                monthly_expenses: rental_expenses,
                monthly_cash_flow: rental_cash_flow,
                annual_cash_flow: rental_annual,
                five_year_income: rental_five_year,
                cash_on_cash_return: rental_cash_on_cash,
                cap_rate: rental_cap_rate,
            },
            airbnb: StrategyOutlook {
                monthly_revenue: airbnb_revenue,
                monthly_expenses: airbnb_expenses,
                monthly_cash_flow: airbnb_cash_flow,
                annual_cash_flow: airbnb_annual,
                five_year_income: airbnb_five_year,
                cash_on_cash_return: airbnb_cash_on_cash,
                cap_rate: airbnb_cap_rate,
            },
            winner,
            winner_margin: cash_flow_difference.abs(),
            cash_flow_difference,
            break_even_occupancy,
            recommendation: Recommendation::from_break_even(break_even_occupancy),
        }
    }
}

/// One operating model's bottom line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyOutlook {
    /// Collected monthly revenue (rent after vacancy, or nightly + cleaning)
    pub monthly_revenue: f64,

    /// All monthly costs including debt service
    pub monthly_expenses: f64,

    /// Revenue less expenses
    pub monthly_cash_flow: f64,

    /// Monthly cash flow annualized
    pub annual_cash_flow: f64,

    /// Projected five-year cumulative cash flow
    pub five_year_income: f64,

    /// Annual cash flow over the down payment, in percent
    pub cash_on_cash_return: f64,

    /// NOI over purchase price, in percent
    pub cap_rate: f64,
}

/// Head-to-head comparison of the two strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonAnalysis {
    /// Shared monthly principal-and-interest payment
    pub mortgage_payment: f64,

    /// Long-term rental bottom line
    pub rental: StrategyOutlook,

    /// Short-term rental bottom line
    pub airbnb: StrategyOutlook,

    /// Strategy with the higher monthly cash flow
    pub winner: Strategy,

    /// Absolute monthly cash-flow gap between the two
    pub winner_margin: f64,

    /// Airbnb cash flow minus rental cash flow (signed)
    pub cash_flow_difference: f64,

    /// Occupancy percent at which the short-term path matches the long-term
    /// one; `None` when no occupancy level closes the gap
    pub break_even_occupancy: Option<f64>,

    /// Recommendation bucket from break-even occupancy
    pub recommendation: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_comparison() {
        let analysis = AirbnbInputs::default().analyze();

        // $320k at 7% over 30 years, shared by both paths
        assert_relative_eq!(analysis.mortgage_payment, 2128.97, epsilon = 0.05);

        // Long-term: $2,500 rent at 5% vacancy
        assert_relative_eq!(analysis.rental.monthly_revenue, 2375.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.rental.monthly_cash_flow, -675.22, epsilon = 0.1);

        // Short-term: $150 * 30 nights * 65% + 6.5 turns of $75 cleaning
        assert_relative_eq!(analysis.airbnb.monthly_revenue, 3412.5, epsilon = 1e-9);
        assert_relative_eq!(analysis.airbnb.monthly_cash_flow, -1440.41, epsilon = 0.1);

        // Both lose money on the defaults, the rental loses less
        assert_eq!(analysis.winner, Strategy::LongTermRental);
        assert_relative_eq!(analysis.winner_margin, 765.19, epsilon = 0.2);

        let break_even = analysis.break_even_occupancy.unwrap();
        assert_relative_eq!(break_even, 83.78, epsilon = 0.05);
        assert_eq!(analysis.recommendation, Recommendation::ConsiderBoth);
    }

    #[test]
    fn test_flat_revenue_without_seasonal_pricing() {
        let inputs = AirbnbInputs::default();
        assert!(!inputs.seasonal_pricing);
        let analysis = inputs.analyze();

        // Exactly the flat formula plus cleaning turns, no blending
        let flat = inputs.nightly_rate * 30.0 * (inputs.occupancy_rate_percent / 100.0);
        let stays = 30.0 * (inputs.occupancy_rate_percent / 100.0) / inputs.average_stay_length;
        assert_relative_eq!(
            analysis.airbnb.monthly_revenue,
            flat + inputs.cleaning_fee * stays,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_seasonal_blend_uses_four_month_split() {
        let inputs = AirbnbInputs {
            seasonal_pricing: true,
            ..AirbnbInputs::default()
        };
        let analysis = inputs.analyze();

        // (200*30*0.80 + 100*30*0.50 + 150*30*0.65) * 4 / 12 = 3,075 room
        // revenue; cleaning turns still come from the base 65% occupancy
        let stays = 30.0 * 0.65 / 3.0;
        assert_relative_eq!(
            analysis.airbnb.monthly_revenue,
            3075.0 + 75.0 * stays,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_city_preset_overwrites_market_fields() {
        let mut inputs = AirbnbInputs::default();
        inputs.apply_preset(CityMarket::Denver);

        assert_eq!(inputs.monthly_rent, 2800.0);
        assert_eq!(inputs.nightly_rate, 140.0);
        assert_eq!(inputs.occupancy_rate_percent, 65.0);
        assert_eq!(inputs.high_season_rate, 200.0);
        assert_eq!(inputs.low_season_rate, 100.0);
        // Non-market fields are untouched
        assert_eq!(inputs.purchase_price, 400_000.0);
        assert_eq!(inputs.cleaning_fee, 75.0);
    }

    #[test]
    fn test_market_key_round_trip() {
        for market in CityMarket::ALL {
            assert_eq!(CityMarket::from_key(market.as_key()), Some(market));
        }
        assert_eq!(CityMarket::from_key("atlantis"), None);
    }

    #[test]
    fn test_recommendation_buckets() {
        assert_eq!(
            Recommendation::from_break_even(Some(49.9)),
            Recommendation::StrongAirbnb
        );
        assert_eq!(
            Recommendation::from_break_even(Some(50.0)),
            Recommendation::LeanAirbnb
        );
        assert_eq!(
            Recommendation::from_break_even(Some(70.0)),
            Recommendation::ConsiderBoth
        );
        assert_eq!(
            Recommendation::from_break_even(Some(85.0)),
            Recommendation::LongTermRental
        );
        assert_eq!(
            Recommendation::from_break_even(None),
            Recommendation::LongTermRental
        );
    }

    #[test]
    fn test_zero_stay_length_guards_turn_math() {
        let inputs = AirbnbInputs {
            average_stay_length: 0.0,
            ..AirbnbInputs::default()
        };
        let analysis = inputs.analyze();
        // No turns: revenue is nightly only, and everything stays finite
        assert_relative_eq!(analysis.airbnb.monthly_revenue, 2925.0, epsilon = 1e-9);
        assert!(analysis.airbnb.monthly_cash_flow.is_finite());
        if let Some(occ) = analysis.break_even_occupancy {
            assert!(occ.is_finite());
        }
    }

    #[test]
    fn test_unprofitable_nightly_rate_has_no_break_even() {
        // Variable costs exceed 100% of revenue and the cleaning spread is
        // negative: no occupancy level can close the gap
        let inputs = AirbnbInputs {
            airbnb_management_percent: 90.0,
            platform_fee_percent: 20.0,
            cleaning_fee: 40.0,
            cleaning_cost: 80.0,
            ..AirbnbInputs::default()
        };
        let analysis = inputs.analyze();
        assert_eq!(analysis.break_even_occupancy, None);
        assert_eq!(analysis.recommendation, Recommendation::LongTermRental);
    }

    #[test]
    fn test_five_year_growth_applies_to_rental_only() {
        let inputs = AirbnbInputs::default();
        let analysis = inputs.analyze();

        let growth = (1.0_f64 + 0.03).powf(2.5);
        assert_relative_eq!(
            analysis.rental.five_year_income,
            analysis.rental.annual_cash_flow * 5.0 * growth,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            analysis.airbnb.five_year_income,
            analysis.airbnb.annual_cash_flow * 5.0,
            epsilon = 1e-9
        );
    }
}
