//! Savings command - monthly contribution needed to reach a goal

use crate::calc::{calculate_savings, SavingsGoalParameters};
use crate::money::{display_amount, display_usd};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct SavingsCommand {
    /// Savings goal in dollars
    #[arg(allow_negative_numbers = true)]
    goal: f64,

    /// Time frame in years
    #[arg(allow_negative_numbers = true)]
    years: f64,

    /// Expected annual return in percent
    #[arg(allow_negative_numbers = true)]
    annual_rate: f64,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SavingsData {
    goal: String,
    years: f64,
    annual_rate_pct: String,
    months: f64,
    monthly_savings: String,
    total_contributions: String,
    interest_earned: String,
}

impl SavingsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let params = SavingsGoalParameters {
            goal: self.goal,
            years: self.years,
            annual_rate_percent: self.annual_rate,
        };
        log::info!("Savings goal: {:?}", params);

        let plan = calculate_savings(&params)?;

        if self.json {
            super::print_json(&SavingsData {
                goal: format!("{:.2}", self.goal),
                years: self.years,
                annual_rate_pct: format!("{:.2}", self.annual_rate),
                months: plan.months,
                monthly_savings: display_amount(plan.monthly_savings),
                total_contributions: display_amount(plan.total_contributions),
                interest_earned: display_amount(plan.interest_earned),
            })
        } else {
            println!(
                "Required Monthly Savings: {}",
                display_usd(plan.monthly_savings)
            );
            println!(
                "Total Contributions: {}",
                display_usd(plan.total_contributions)
            );
            Ok(())
        }
    }
}
