//! Compound growth of a lump sum

use super::CalcError;
use crate::money;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentParameters {
    /// Initial investment in dollars
    pub initial: f64,
    /// Expected annual return in percent, may be negative
    pub annual_rate_percent: f64,
    /// Time horizon in years, may be fractional
    pub years: f64,
}

impl InvestmentParameters {
    pub fn validate(&self) -> Result<(), CalcError> {
        if !(self.initial >= 0.0) {
            return Err(CalcError::Negative {
                field: "initial amount",
            });
        }
        if !(self.years >= 0.0) {
            return Err(CalcError::Negative { field: "years" });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentGrowth {
    pub future_value: Decimal,
    /// Future value less the initial amount, negative for a loss
    pub profit: Decimal,
}

/// Grow the initial amount at the annual rate, compounded once a year
pub fn calculate_investment(
    params: &InvestmentParameters,
) -> Result<InvestmentGrowth, CalcError> {
    params.validate()?;

    let rate = params.annual_rate_percent / 100.0;
    let growth = (1.0 + rate).powf(params.years);
    let future_value = params.initial * growth;

    log::debug!(
        "Investment: rate {}, {} years, growth factor {}",
        rate,
        params.years,
        growth
    );

    Ok(InvestmentGrowth {
        future_value: money::from_f64(future_value, "future value")?,
        profit: money::from_f64(future_value - params.initial, "profit")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::display_usd;

    fn invest(initial: f64, annual_rate_percent: f64, years: f64) -> InvestmentParameters {
        InvestmentParameters {
            initial,
            annual_rate_percent,
            years,
        }
    }

    #[test]
    fn ten_years_at_seven_percent() {
        let growth = calculate_investment(&invest(10_000.0, 7.0, 10.0)).unwrap();
        assert_eq!(display_usd(growth.future_value), "$19,671.51");
        assert_eq!(display_usd(growth.profit), "$9,671.51");
    }

    #[test]
    fn zero_rate_keeps_initial() {
        for years in [0.0, 1.0, 3.5, 40.0] {
            let growth = calculate_investment(&invest(5_000.0, 0.0, years)).unwrap();
            assert_eq!(growth.future_value, Decimal::from(5_000));
            assert_eq!(growth.profit, Decimal::ZERO);
        }
    }

    #[test]
    fn negative_rate_fractional_years() {
        let growth = calculate_investment(&invest(10_000.0, -5.0, 2.5)).unwrap();
        assert_eq!(display_usd(growth.future_value), "$8,796.48");
        assert_eq!(display_usd(growth.profit), "$-1,203.52");
    }

    #[test]
    fn total_loss_over_whole_years() {
        let growth = calculate_investment(&invest(1_000.0, -100.0, 2.0)).unwrap();
        assert_eq!(growth.future_value, Decimal::ZERO);
        assert_eq!(growth.profit, Decimal::from(-1_000));
    }

    #[test]
    fn fractional_power_of_negative_base_is_an_error() {
        assert_eq!(
            calculate_investment(&invest(1_000.0, -150.0, 1.5)),
            Err(CalcError::NonFinite {
                what: "future value"
            })
        );
    }

    #[test]
    fn rejects_negative_inputs() {
        assert_eq!(
            calculate_investment(&invest(-1.0, 5.0, 1.0)),
            Err(CalcError::Negative {
                field: "initial amount"
            })
        );
        assert_eq!(
            calculate_investment(&invest(1.0, 5.0, -1.0)),
            Err(CalcError::Negative { field: "years" })
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let params = invest(12_345.67, 6.25, 7.75);
        assert_eq!(
            calculate_investment(&params),
            calculate_investment(&params)
        );
    }
}
