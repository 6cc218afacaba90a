//! Investment command - future value of a lump sum

use crate::calc::{calculate_investment, InvestmentParameters};
use crate::money::{display_amount, display_usd};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct InvestmentCommand {
    /// Initial investment amount in dollars
    #[arg(allow_negative_numbers = true)]
    initial: f64,

    /// Expected annual return in percent
    #[arg(allow_negative_numbers = true)]
    annual_rate: f64,

    /// Investment time horizon in years
    #[arg(allow_negative_numbers = true)]
    years: f64,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct InvestmentData {
    initial: String,
    annual_rate_pct: String,
    years: f64,
    future_value: String,
    profit: String,
}

impl InvestmentCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let params = InvestmentParameters {
            initial: self.initial,
            annual_rate_percent: self.annual_rate,
            years: self.years,
        };
        log::info!("Investment: {:?}", params);

        let growth = calculate_investment(&params)?;

        if self.json {
            super::print_json(&InvestmentData {
                initial: format!("{:.2}", self.initial),
                annual_rate_pct: format!("{:.2}", self.annual_rate),
                years: self.years,
                future_value: display_amount(growth.future_value),
                profit: display_amount(growth.profit),
            })
        } else {
            println!("Future Value: {}", display_usd(growth.future_value));
            println!("Total Profit: {}", display_usd(growth.profit));
            Ok(())
        }
    }
}
