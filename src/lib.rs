//! REI Calculator - deal analysis engine for real-estate investments
//!
//! This library provides:
//! - Long-term rental analysis (cash flow, cap rate, cash-on-cash, ROI)
//! - BRRRR analysis with refinance LTV scenarios and capital recovery
//! - Fix & flip analysis with the 70% rule and paired-threshold grading
//! - Airbnb vs long-term rental comparison with break-even occupancy
//! - URL query-string persistence for every input record

pub mod airbnb;
pub mod brrrr;
pub mod finance;
pub mod flip;
pub mod format;
pub mod loader;
pub mod params;
pub mod rental;

// Re-export commonly used types
pub use airbnb::{AirbnbInputs, CityMarket, ComparisonAnalysis, Recommendation};
pub use brrrr::{BrrrrAnalysis, BrrrrInputs, RecoveryRating};
pub use finance::{monthly_payment, ReturnRate};
pub use flip::{FlipAnalysis, FlipGrade, FlipInputs, LoanType};
pub use rental::{DealRating, RentalAnalysis, RentalInputs};
