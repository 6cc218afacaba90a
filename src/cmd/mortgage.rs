//! Mortgage command - level monthly payment and optional amortization schedule

use crate::calc::{
    amortization_schedule, calculate_mortgage, AmortizationRow, LoanParameters, MortgagePayment,
};
use crate::money::{display_amount, display_usd};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct MortgageCommand {
    /// Loan amount in dollars
    #[arg(allow_negative_numbers = true)]
    principal: f64,

    /// Annual interest rate in percent
    #[arg(allow_negative_numbers = true)]
    annual_rate: f64,

    /// Loan term in years
    years: u32,

    /// Show the month by month amortization schedule
    #[arg(short, long)]
    schedule: bool,

    /// Date of the first payment (e.g. 2025-01-01), used to date schedule rows
    #[arg(long, requires = "schedule")]
    start_date: Option<NaiveDate>,

    /// Output the schedule as CSV instead of a formatted table
    #[arg(long, requires = "schedule")]
    csv: bool,

    /// Output as JSON instead of formatted text
    #[arg(long, conflicts_with = "csv")]
    json: bool,
}

/// Row for the schedule table and CSV output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScheduleRow {
    #[tabled(rename = "#")]
    pub number: u64,

    #[tabled(rename = "Date")]
    pub date: String,

    #[tabled(rename = "Payment")]
    pub payment: String,

    #[tabled(rename = "Principal")]
    pub principal: String,

    #[tabled(rename = "Interest")]
    pub interest: String,

    #[tabled(rename = "Balance")]
    pub balance: String,
}

impl From<&AmortizationRow> for ScheduleRow {
    fn from(row: &AmortizationRow) -> Self {
        ScheduleRow {
            number: row.number,
            date: row.date.map_or(String::new(), |d| d.to_string()),
            payment: display_amount(row.payment),
            principal: display_amount(row.principal),
            interest: display_amount(row.interest),
            balance: display_amount(row.balance),
        }
    }
}

#[derive(Debug, Serialize)]
struct MortgageData {
    principal: String,
    annual_rate_pct: String,
    years: u32,
    payments: u64,
    monthly_payment: String,
    total_payment: String,
    total_interest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule: Option<Vec<ScheduleRow>>,
}

impl MortgageCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let params = LoanParameters {
            principal: self.principal,
            annual_rate_percent: self.annual_rate,
            term_years: self.years,
        };
        log::info!("Mortgage: {:?}", params);

        let payment = calculate_mortgage(&params)?;
        let schedule = if self.schedule {
            let rows = amortization_schedule(&params, self.start_date)?;
            Some(rows.iter().map(ScheduleRow::from).collect::<Vec<_>>())
        } else {
            None
        };

        if self.json {
            return self.print_json(&payment, schedule);
        }
        match schedule {
            Some(rows) if self.csv => write_csv(&rows),
            Some(rows) => {
                print_payment(&payment);
                println!();
                print_table(&rows);
                Ok(())
            }
            None => {
                print_payment(&payment);
                Ok(())
            }
        }
    }

    fn print_json(
        &self,
        payment: &MortgagePayment,
        schedule: Option<Vec<ScheduleRow>>,
    ) -> anyhow::Result<()> {
        let data = MortgageData {
            principal: format!("{:.2}", self.principal),
            annual_rate_pct: format!("{:.2}", self.annual_rate),
            years: self.years,
            payments: payment.payments,
            monthly_payment: display_amount(payment.monthly_payment),
            total_payment: display_amount(payment.total_payment),
            total_interest: display_amount(payment.total_interest),
            schedule,
        };
        super::print_json(&data)
    }
}

fn print_payment(payment: &MortgagePayment) {
    println!("Monthly Payment: {}", display_usd(payment.monthly_payment));
    println!("Total Payment: {}", display_usd(payment.total_payment));
}

fn print_table(rows: &[ScheduleRow]) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

fn write_csv(rows: &[ScheduleRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
