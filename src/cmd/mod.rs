pub mod investment;
pub mod mortgage;
pub mod savings;
pub mod tax;

use serde::Serialize;

/// Print a result as pretty JSON on stdout
pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}
