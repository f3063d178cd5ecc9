pub mod analyze;
pub mod phrases;

use serde::Serialize;

/// Write `value` as JSON to stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
