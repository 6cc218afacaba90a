//! Monthly contributions required to reach a savings goal

use super::CalcError;
use crate::money;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsGoalParameters {
    /// Savings goal in dollars
    pub goal: f64,
    /// Time frame in years. Fractional years give fractional months, they are not truncated.
    pub years: f64,
    /// Expected annual return in percent
    pub annual_rate_percent: f64,
}

impl SavingsGoalParameters {
    pub fn validate(&self) -> Result<(), CalcError> {
        if !(self.goal >= 0.0) {
            return Err(CalcError::Negative { field: "goal" });
        }
        if !(self.years > 0.0) {
            return Err(CalcError::NonPositive { field: "years" });
        }
        if !(self.annual_rate_percent >= 0.0) {
            return Err(CalcError::Negative {
                field: "annual rate",
            });
        }
        Ok(())
    }

    pub fn months(&self) -> f64 {
        self.years * 12.0
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsPlan {
    pub months: f64,
    pub monthly_savings: Decimal,
    pub total_contributions: Decimal,
    /// Portion of the goal covered by returns rather than contributions
    pub interest_earned: Decimal,
}

/// Size the level monthly contribution whose future value at the monthly rate equals the goal
pub fn calculate_savings(params: &SavingsGoalParameters) -> Result<SavingsPlan, CalcError> {
    params.validate()?;

    let months = params.months();
    let r = params.monthly_rate();
    let monthly = if r == 0.0 {
        params.goal / months
    } else {
        params.goal * r / ((1.0 + r).powf(months) - 1.0)
    };
    let total = monthly * months;

    log::debug!(
        "Savings: monthly rate {}, {} months, contribution {}",
        r,
        months,
        monthly
    );

    Ok(SavingsPlan {
        months,
        monthly_savings: money::from_f64(monthly, "monthly savings")?,
        total_contributions: money::from_f64(total, "total contributions")?,
        interest_earned: money::from_f64(params.goal - total, "interest earned")?,
    })
}
