//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `parcel_core` linkage and schema bootstrap without touching disk.

use parcel_core::db::open_db_in_memory;
use parcel_core::SqliteParcelStore;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("parcel_core ping={}", parcel_core::ping());
    println!("parcel_core version={}", parcel_core::core_version());

    let store_ready = open_db_in_memory()
        .map_err(|err| err.to_string())
        .and_then(|conn| {
            let ready = SqliteParcelStore::try_new(&conn).map(|_| ());
            ready.map_err(|err| err.to_string())
        });

    match store_ready {
        Ok(()) => {
            println!("parcel_core store=ready");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("parcel_core store=error error={err}");
            ExitCode::FAILURE
        }
    }
}
