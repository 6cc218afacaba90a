pub mod investment;
pub mod mortgage;
pub mod savings;
pub mod tax;

pub use investment::{calculate_investment, InvestmentParameters};
pub use mortgage::{
    amortization_schedule, calculate_mortgage, AmortizationRow, LoanParameters, MortgagePayment,
};
pub use savings::{calculate_savings, SavingsGoalParameters};
pub use tax::{calculate_income_tax, BracketCharge, TaxAssessment, TaxParameters};

/// Input validation and numeric domain failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("loan term must be at least one year")]
    ZeroTerm,
    #[error("amortization schedules are limited to {max} years")]
    ScheduleTooLong { max: u32 },
    #[error("{what} is not a finite amount")]
    NonFinite { what: &'static str },
}
