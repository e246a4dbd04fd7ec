use serde::Serialize;

use crate::error::AppResult;

pub fn render<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn print<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", render(value)?);
    Ok(())
}
