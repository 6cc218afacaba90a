//! Progressive income tax over a fixed bracket schedule

use super::CalcError;
use crate::money;
use rust_decimal::Decimal;

/// A marginal rate applying to income up to `upper_bound`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    /// Inclusive upper edge of the bracket, `None` for the top bracket
    pub upper_bound: Option<f64>,
    pub rate: f64,
}

impl TaxBracket {
    const fn new(upper_bound: f64, rate: f64) -> Self {
        TaxBracket {
            upper_bound: Some(upper_bound),
            rate,
        }
    }
}

/// Single filer reference schedule. Upper bounds are strictly increasing and the last bracket is
/// unbounded.
pub static SINGLE_FILER_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(9950.0, 0.10),
    TaxBracket::new(40525.0, 0.12),
    TaxBracket::new(86375.0, 0.22),
    TaxBracket::new(164925.0, 0.24),
    TaxBracket::new(209425.0, 0.32),
    TaxBracket::new(523600.0, 0.35),
    TaxBracket {
        upper_bound: None,
        rate: 0.37,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxParameters {
    /// Annual income in dollars, may be negative
    pub income: f64,
    /// Total deductions in dollars
    pub deductions: f64,
}

impl TaxParameters {
    pub fn validate(&self) -> Result<(), CalcError> {
        if !self.income.is_finite() {
            return Err(CalcError::NonFinite { what: "income" });
        }
        if !(self.deductions >= 0.0) {
            return Err(CalcError::Negative {
                field: "deductions",
            });
        }
        if self.deductions.is_infinite() {
            return Err(CalcError::NonFinite { what: "deductions" });
        }
        Ok(())
    }

    /// Income less deductions, never below zero
    pub fn taxable_income(&self) -> f64 {
        (self.income - self.deductions).max(0.0)
    }
}

/// The slice of taxable income falling in one bracket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketCharge {
    pub lower: Decimal,
    pub upper: Decimal,
    pub rate: Decimal,
    pub taxed: Decimal,
    pub tax: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxAssessment {
    pub taxable_income: Decimal,
    pub tax: Decimal,
    /// One entry per bracket reached, lowest first
    pub charges: Vec<BracketCharge>,
    /// Rate of the highest bracket reached, zero when nothing is taxable
    pub marginal_rate: Decimal,
    pub effective_rate: Decimal,
}

/// Estimate the income tax due on income less deductions using the single filer schedule
pub fn calculate_income_tax(params: &TaxParameters) -> Result<TaxAssessment, CalcError> {
    params.validate()?;
    assess(params.taxable_income(), SINGLE_FILER_BRACKETS)
}

/// Walk the brackets from the bottom, taxing each slice of income at its marginal rate until the
/// whole of `taxable_income` is covered.
pub fn assess(
    taxable_income: f64,
    brackets: &[TaxBracket],
) -> Result<TaxAssessment, CalcError> {
    let mut lower = 0.0;
    let mut tax = 0.0;
    let mut marginal_rate = 0.0;
    let mut charges = Vec::new();

    for bracket in brackets {
        if taxable_income <= lower {
            break;
        }
        let upper = bracket
            .upper_bound
            .map_or(taxable_income, |bound| bound.min(taxable_income));
        let taxed = upper - lower;
        let charge = taxed * bracket.rate;

        log::debug!(
            "Bracket {}..{} @ {}: {} taxed, tax {}",
            lower,
            upper,
            bracket.rate,
            taxed,
            charge
        );

        charges.push(BracketCharge {
            lower: money::from_f64(lower, "bracket lower edge")?,
            upper: money::from_f64(upper, "bracket upper edge")?,
            rate: money::from_f64(bracket.rate, "bracket rate")?,
            taxed: money::from_f64(taxed, "income taxed in bracket")?,
            tax: money::from_f64(charge, "bracket tax")?,
        });
        tax += charge;
        marginal_rate = bracket.rate;

        match bracket.upper_bound {
            Some(bound) => lower = bound,
            None => break,
        }
    }

    let effective_rate = if taxable_income > 0.0 {
        tax / taxable_income
    } else {
        0.0
    };

    Ok(TaxAssessment {
        taxable_income: money::from_f64(taxable_income, "taxable income")?,
        tax: money::from_f64(tax, "tax")?,
        charges,
        marginal_rate: money::from_f64(marginal_rate, "marginal rate")?,
        effective_rate: money::from_f64(effective_rate, "effective rate")?,
    })
}
