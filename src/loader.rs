//! Load rental deal records from CSV for batch analysis

use std::error::Error;
use std::path::Path;

use csv::Reader;

use crate::rental::RentalInputs;

/// A named deal loaded from a batch file
#[derive(Debug, Clone)]
pub struct DealRecord {
    /// Label for reports (address, nickname, MLS number)
    pub name: String,
    pub inputs: RentalInputs,
}

/// Raw CSV row matching the batch deal file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "PurchasePrice")]
    purchase_price: f64,
    #[serde(rename = "DownPaymentPercent")]
    down_payment_percent: f64,
    #[serde(rename = "ClosingCostsPercent")]
    closing_costs_percent: f64,
    #[serde(rename = "RenovationCosts", default)]
    renovation_costs: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "LoanTermYears")]
    loan_term_years: f64,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: f64,
    #[serde(rename = "OtherMonthlyIncome", default)]
    other_monthly_income: f64,
    #[serde(rename = "AnnualRentIncreasePercent", default)]
    annual_rent_increase_percent: f64,
    #[serde(rename = "PropertyTaxes")]
    property_taxes: f64,
    #[serde(rename = "Insurance")]
    insurance: f64,
    #[serde(rename = "HoaFees", default)]
    hoa_fees: f64,
    #[serde(rename = "PropertyManagementPercent")]
    property_management_percent: f64,
    #[serde(rename = "MaintenanceReservePercent")]
    maintenance_reserve_percent: f64,
    #[serde(rename = "VacancyRatePercent")]
    vacancy_rate_percent: f64,
    #[serde(rename = "Utilities", default)]
    utilities: f64,
}

impl CsvRow {
    fn into_deal(self) -> DealRecord {
        DealRecord {
            name: self.name,
            inputs: RentalInputs {
                purchase_price: self.purchase_price,
                down_payment_percent: self.down_payment_percent,
                closing_costs_percent: self.closing_costs_percent,
                renovation_costs: self.renovation_costs,
                interest_rate: self.interest_rate,
                loan_term_years: self.loan_term_years,
                monthly_rent: self.monthly_rent,
                other_monthly_income: self.other_monthly_income,
                annual_rent_increase_percent: self.annual_rent_increase_percent,
                property_taxes: self.property_taxes,
                insurance: self.insurance,
                hoa_fees: self.hoa_fees,
                property_management_percent: self.property_management_percent,
                maintenance_reserve_percent: self.maintenance_reserve_percent,
                vacancy_rate_percent: self.vacancy_rate_percent,
                utilities: self.utilities,
            },
        }
    }
}

/// Load all deals from a batch CSV file
pub fn load_deals(path: &Path) -> Result<Vec<DealRecord>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut deals = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        deals.push(row.into_deal());
    }

    Ok(deals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_deals_from_csv() {
        let csv = "Name,PurchasePrice,DownPaymentPercent,ClosingCostsPercent,RenovationCosts,InterestRate,LoanTermYears,MonthlyRent,OtherMonthlyIncome,AnnualRentIncreasePercent,PropertyTaxes,Insurance,HoaFees,PropertyManagementPercent,MaintenanceReservePercent,VacancyRatePercent,Utilities\n\
                   123 Oak St,300000,20,2,0,7,30,2500,0,3,3600,1200,0,10,5,5,0\n\
                   45 Elm Ave,350000,25,2,15000,6.5,30,2800,100,3,4200,1500,150,8,5,5,200\n";

        let dir = std::env::temp_dir().join("rei_calculator_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("deals.csv");
        std::fs::write(&path, csv).unwrap();

        let deals = load_deals(&path).unwrap();
        assert_eq!(deals.len(), 2);
        assert_eq!(deals[0].name, "123 Oak St");
        assert_eq!(deals[0].inputs, RentalInputs::default());
        assert_eq!(deals[1].name, "45 Elm Ave");
        assert_eq!(deals[1].inputs, RentalInputs::example());
    }
}
