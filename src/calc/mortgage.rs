//! Fixed-rate mortgage payments and amortization schedules

use super::CalcError;
use crate::money;
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

/// A fixed-rate loan repaid monthly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanParameters {
    /// Amount borrowed in dollars
    pub principal: f64,
    /// Annual interest rate in percent, e.g. `6.5`
    pub annual_rate_percent: f64,
    /// Loan term in whole years
    pub term_years: u32,
}

/// Longest term for which a month by month schedule is produced
pub const MAX_SCHEDULE_YEARS: u32 = 100;

impl LoanParameters {
    pub fn validate(&self) -> Result<(), CalcError> {
        if !(self.principal > 0.0) {
            return Err(CalcError::NonPositive { field: "principal" });
        }
        if !(self.annual_rate_percent >= 0.0) {
            return Err(CalcError::Negative {
                field: "annual rate",
            });
        }
        if self.term_years == 0 {
            return Err(CalcError::ZeroTerm);
        }
        Ok(())
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Number of monthly payments over the term
    pub fn payments(&self) -> u64 {
        u64::from(self.term_years) * 12
    }

    fn monthly_payment(&self) -> f64 {
        let r = self.monthly_rate();
        let n = self.payments() as f64;
        if r == 0.0 {
            self.principal / n
        } else {
            let growth = (1.0 + r).powf(n);
            self.principal * (r * growth) / (growth - 1.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MortgagePayment {
    pub payments: u64,
    pub monthly_payment: Decimal,
    pub total_payment: Decimal,
    /// Total paid over the term less the principal
    pub total_interest: Decimal,
}

/// Calculate the level monthly payment which repays the loan over its term
pub fn calculate_mortgage(params: &LoanParameters) -> Result<MortgagePayment, CalcError> {
    params.validate()?;

    let n = params.payments();
    let monthly = params.monthly_payment();
    let total = monthly * n as f64;

    log::debug!(
        "Mortgage: monthly rate {}, {} payments, payment {}",
        params.monthly_rate(),
        n,
        monthly
    );

    Ok(MortgagePayment {
        payments: n,
        monthly_payment: money::from_f64(monthly, "monthly payment")?,
        total_payment: money::from_f64(total, "total payment")?,
        total_interest: money::from_f64(total - params.principal, "total interest")?,
    })
}

/// One month of an amortization schedule
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationRow {
    pub number: u64,
    pub date: Option<NaiveDate>,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    /// Outstanding balance after this payment
    pub balance: Decimal,
}

/// Split every payment of the loan into interest and principal.
///
/// When `first_payment` is given each row is dated, one calendar month apart. The balance after
/// the final payment is reported as zero.
pub fn amortization_schedule(
    params: &LoanParameters,
    first_payment: Option<NaiveDate>,
) -> Result<Vec<AmortizationRow>, CalcError> {
    params.validate()?;
    if params.term_years > MAX_SCHEDULE_YEARS {
        return Err(CalcError::ScheduleTooLong {
            max: MAX_SCHEDULE_YEARS,
        });
    }

    let r = params.monthly_rate();
    let n = params.payments();
    let payment = params.monthly_payment();
    let mut balance = params.principal;
    let mut rows = Vec::new();

    for number in 1..=n {
        let interest = balance * r;
        let principal = payment - interest;
        balance -= principal;
        if number == n || balance < 0.0 {
            balance = 0.0;
        }

        let date = first_payment.and_then(|start| {
            u32::try_from(number - 1)
                .ok()
                .and_then(|months| start.checked_add_months(Months::new(months)))
        });

        rows.push(AmortizationRow {
            number,
            date,
            payment: money::from_f64(payment, "monthly payment")?,
            principal: money::from_f64(principal, "principal repaid")?,
            interest: money::from_f64(interest, "interest")?,
            balance: money::from_f64(balance, "balance")?,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{display_usd, round_cents};
    use rust_decimal_macros::dec;

    fn loan(principal: f64, annual_rate_percent: f64, term_years: u32) -> LoanParameters {
        LoanParameters {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    #[test]
    fn thirty_year_fixed() {
        let payment = calculate_mortgage(&loan(300_000.0, 6.5, 30)).unwrap();
        assert_eq!(payment.payments, 360);
        assert_eq!(display_usd(payment.monthly_payment), "$1,896.20");
        assert_eq!(display_usd(payment.total_payment), "$682,633.47");
        assert_eq!(display_usd(payment.total_interest), "$382,633.47");
    }

    #[test]
    fn total_is_monthly_times_payments() {
        let params = loan(250_000.0, 4.25, 15);
        let payment = calculate_mortgage(&params).unwrap();
        let monthly = params.monthly_payment();
        assert_eq!(
            payment.total_payment,
            money::from_f64(monthly * 180.0, "total").unwrap()
        );
    }

    #[test]
    fn zero_rate_divides_evenly() {
        let payment = calculate_mortgage(&loan(120_000.0, 0.0, 10)).unwrap();
        assert_eq!(payment.monthly_payment, dec!(1000));
        assert_eq!(payment.total_payment, dec!(120000));
        assert_eq!(payment.total_interest, dec!(0));
    }

    #[test]
    fn rejects_invalid_loans() {
        assert_eq!(
            calculate_mortgage(&loan(0.0, 5.0, 30)),
            Err(CalcError::NonPositive { field: "principal" })
        );
        assert_eq!(
            calculate_mortgage(&loan(-100_000.0, 5.0, 30)),
            Err(CalcError::NonPositive { field: "principal" })
        );
        assert_eq!(
            calculate_mortgage(&loan(100_000.0, -1.0, 30)),
            Err(CalcError::Negative {
                field: "annual rate"
            })
        );
        assert_eq!(
            calculate_mortgage(&loan(100_000.0, 5.0, 0)),
            Err(CalcError::ZeroTerm)
        );
        assert!(calculate_mortgage(&loan(f64::NAN, 5.0, 30)).is_err());
    }

    #[test]
    fn schedule_first_payment_split() {
        let rows = amortization_schedule(&loan(300_000.0, 6.5, 30), None).unwrap();
        assert_eq!(rows.len(), 360);

        let first = &rows[0];
        assert_eq!(first.number, 1);
        assert_eq!(first.date, None);
        assert_eq!(round_cents(first.interest), dec!(1625.00));
        assert_eq!(round_cents(first.principal), dec!(271.20));
        assert_eq!(round_cents(first.balance), dec!(299728.80));
    }

    #[test]
    fn schedule_repays_the_loan() {
        let rows = amortization_schedule(&loan(10_000.0, 5.0, 1), None).unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows.last().unwrap().balance, Decimal::ZERO);

        let repaid: Decimal = rows.iter().map(|r| r.principal).sum();
        assert_eq!(round_cents(repaid), dec!(10000.00));

        // interest falls as the balance is paid down
        assert!(rows.windows(2).all(|w| w[1].interest < w[0].interest));
    }

    #[test]
    fn schedule_term_is_bounded() {
        let rows = amortization_schedule(&loan(1_000.0, 0.0, MAX_SCHEDULE_YEARS), None).unwrap();
        assert_eq!(rows.len(), 1200);

        let params = loan(1_000.0, 0.0, u32::MAX);
        assert!(calculate_mortgage(&params).is_ok());
        assert_eq!(
            amortization_schedule(&params, None),
            Err(CalcError::ScheduleTooLong {
                max: MAX_SCHEDULE_YEARS
            })
        );
    }

    #[test]
    fn schedule_dates_advance_monthly() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let rows = amortization_schedule(&loan(1_200.0, 0.0, 1), Some(start)).unwrap();
        assert_eq!(rows[0].date, Some(start));
        assert_eq!(rows[1].date, NaiveDate::from_ymd_opt(2025, 2, 28));
        assert_eq!(rows[11].date, NaiveDate::from_ymd_opt(2025, 12, 31));
        assert!(rows.iter().all(|r| r.payment == dec!(100)));
    }
}
