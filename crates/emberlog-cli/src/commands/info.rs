//! `emberlog info` - load the log unit and print its constants
//!
//! Runs the full lifecycle against the real facility: load, print,
//! install, unload.

use std::sync::Arc;

use clap::Args;
use emberlog_core::schema::{CONST_ALL, LOG_UNIT_NAME, PUBLISHED_CONSTANTS};
use emberlog_core::{
    load_log_unit, BuildInfo, ConstValue, LogFacility, Profile, Runtime, TracingFacility,
};

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Emit machine-readable JSON instead of name=value lines
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: InfoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut runtime = Runtime::new();
    let facility: Arc<dyn LogFacility> = Arc::new(TracingFacility::new(Profile::Development));
    let info = BuildInfo::from_build_env();

    let unit = load_log_unit(&mut runtime, facility, &info)?;

    if args.json {
        let mut doc = serde_json::Map::new();
        for name in PUBLISHED_CONSTANTS {
            let value = match unit.get(name) {
                Some(ConstValue::Str(s)) => serde_json::Value::from(s.as_str()),
                Some(ConstValue::Int(n)) => serde_json::Value::from(*n),
                None => serde_json::Value::Null,
            };
            doc.insert(name.to_string(), value);
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(doc))?
        );
    } else {
        // the combined summary duplicates the scalar fields; skip it here
        for name in PUBLISHED_CONSTANTS.iter().filter(|n| **n != CONST_ALL) {
            match unit.get(name) {
                Some(ConstValue::Str(s)) => println!("{name}={s}"),
                Some(ConstValue::Int(n)) => println!("{name}={n}"),
                None => {}
            }
        }
    }

    runtime.install(unit)?;
    runtime.unload(LOG_UNIT_NAME);
    Ok(())
}
