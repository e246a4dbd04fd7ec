use std::fs;

use serde_json::Value;

use crate::cli::{KeyArgs, PutArgs};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::{OutputMode, json};
use crate::store::{self, KeyValueStore};

pub fn read(ctx: &AppContext, args: KeyArgs) -> AppResult<()> {
    store::validate_key(&args.key)?;
    let value = store::read_json(&ctx.store, &args.key);

    if ctx.output.mode() == OutputMode::Text {
        match &value {
            Some(value) => println!("{}", json::render(value)?),
            None => println!("(no value for `{}`)", args.key),
        }
        return Ok(());
    }

    json::print(&value)
}

pub fn put(ctx: &AppContext, args: PutArgs) -> AppResult<()> {
    let raw = match (args.value, args.file) {
        (Some(value), None) => value,
        (None, Some(path)) => fs::read_to_string(path)?,
        _ => {
            return Err(AppError::InvalidInput(
                "provide exactly one of --value or --file".to_string(),
            ));
        }
    };

    let value = parse_value(&raw)?;
    let payload = serde_json::to_string(&value)?;
    ctx.store.write_raw(&args.key, &payload)?;

    let text = vec![format!("stored `{}`", args.key)];
    ctx.output
        .emit(&text, &serde_json::json!({ "key": args.key, "stored": true }))
}

pub fn rm(ctx: &AppContext, args: KeyArgs) -> AppResult<()> {
    ctx.store.remove(&args.key)?;

    let text = vec![format!("removed `{}`", args.key)];
    ctx.output
        .emit(&text, &serde_json::json!({ "key": args.key, "removed": true }))
}

pub fn keys(ctx: &AppContext) -> AppResult<()> {
    let keys = ctx.store.keys()?;

    if ctx.output.mode() == OutputMode::Text && keys.is_empty() {
        println!("0 keys");
        return Ok(());
    }

    ctx.output.emit(&keys, &keys)
}

fn parse_value(raw: &str) -> AppResult<Value> {
    serde_json::from_str(raw.trim())
        .map_err(|err| AppError::InvalidInput(format!("value is not valid json: {err}")))
}
