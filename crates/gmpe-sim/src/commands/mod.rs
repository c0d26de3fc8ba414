pub mod coefficients;
pub mod evaluate;
pub mod spectrum;
pub mod verify;
pub mod version;

use std::error::Error;
use std::fs;
use std::path::Path;

use gmpe_core::to_canonical_json_pretty;
use serde::Serialize;

/// Prints canonical JSON to stdout or writes it to `out`.
pub fn emit_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let json = to_canonical_json_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
        }
        None => println!("{json}"),
    }
    Ok(())
}
