mod calc;
mod cmd;
mod money;

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fincalc", version, about = "Financial Planning CLI Tool")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate mortgage payments
    Mortgage(cmd::mortgage::MortgageCommand),
    /// Calculate future investment value
    Investment(cmd::investment::InvestmentCommand),
    /// Calculate monthly savings to reach a goal
    Savings(cmd::savings::SavingsCommand),
    /// Calculate estimated tax liability
    Tax(cmd::tax::TaxCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Mortgage(mortgage)) => mortgage.exec(),
        Some(Command::Investment(investment)) => investment.exec(),
        Some(Command::Savings(savings)) => savings.exec(),
        Some(Command::Tax(tax)) => tax.exec(),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
