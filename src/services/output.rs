use crate::domain::models::JsonOut;
use serde::Serialize;

/// Print `data` in the `{ok, data}` envelope, or the pre-rendered text dump.
pub fn print_report<T: Serialize>(
    json: bool,
    data: &T,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        print!("{}", text(data));
    }
    Ok(())
}
