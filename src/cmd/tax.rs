//! Tax command - estimated liability under the progressive bracket schedule

use crate::calc::{calculate_income_tax, BracketCharge, TaxAssessment, TaxParameters};
use crate::money::{display_amount, display_rate, display_usd};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct TaxCommand {
    /// Annual income in dollars
    #[arg(allow_negative_numbers = true)]
    income: f64,

    /// Total deductions in dollars
    #[arg(allow_negative_numbers = true)]
    deductions: f64,

    /// Show the tax charged in each bracket
    #[arg(short, long)]
    breakdown: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Row for the bracket breakdown table
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BracketRow {
    #[tabled(rename = "From")]
    pub from: String,

    #[tabled(rename = "To")]
    pub to: String,

    #[tabled(rename = "Rate")]
    pub rate: String,

    #[tabled(rename = "Taxed")]
    pub taxed: String,

    #[tabled(rename = "Tax")]
    pub tax: String,
}

impl From<&BracketCharge> for BracketRow {
    fn from(charge: &BracketCharge) -> Self {
        BracketRow {
            from: display_usd(charge.lower),
            to: display_usd(charge.upper),
            rate: display_rate(charge.rate),
            taxed: display_usd(charge.taxed),
            tax: display_usd(charge.tax),
        }
    }
}

#[derive(Debug, Serialize)]
struct TaxData {
    income: String,
    deductions: String,
    taxable_income: String,
    tax_liability: String,
    marginal_rate_pct: String,
    effective_rate_pct: String,
    brackets: Vec<BracketData>,
}

#[derive(Debug, Serialize)]
struct BracketData {
    lower: String,
    upper: String,
    rate_pct: String,
    taxed: String,
    tax: String,
}

impl TaxCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let params = TaxParameters {
            income: self.income,
            deductions: self.deductions,
        };
        log::info!("Income tax: {:?}", params);

        let assessment = calculate_income_tax(&params)?;

        if self.json {
            return self.print_json(&assessment);
        }

        println!(
            "Taxable Income: {}",
            display_usd(assessment.taxable_income)
        );
        println!(
            "Estimated Tax Liability: {}",
            display_usd(assessment.tax)
        );
        if self.breakdown {
            print_breakdown(&assessment);
        }
        Ok(())
    }

    fn print_json(&self, assessment: &TaxAssessment) -> anyhow::Result<()> {
        let brackets = assessment
            .charges
            .iter()
            .map(|c| BracketData {
                lower: display_amount(c.lower),
                upper: display_amount(c.upper),
                rate_pct: percent(c.rate),
                taxed: display_amount(c.taxed),
                tax: display_amount(c.tax),
            })
            .collect();

        super::print_json(&TaxData {
            income: format!("{:.2}", self.income),
            deductions: format!("{:.2}", self.deductions),
            taxable_income: display_amount(assessment.taxable_income),
            tax_liability: display_amount(assessment.tax),
            marginal_rate_pct: percent(assessment.marginal_rate),
            effective_rate_pct: percent(assessment.effective_rate),
            brackets,
        })
    }
}

fn percent(rate: Decimal) -> String {
    display_amount(rate * Decimal::ONE_HUNDRED)
}

fn print_breakdown(assessment: &TaxAssessment) {
    println!();
    if assessment.charges.is_empty() {
        println!("No taxable income");
        return;
    }

    let rows: Vec<BracketRow> = assessment.charges.iter().map(BracketRow::from).collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
    println!(
        "Marginal Rate: {} | Effective Rate: {}",
        display_rate(assessment.marginal_rate),
        display_rate(assessment.effective_rate)
    );
}
