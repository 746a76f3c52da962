//! `stagehand version` runner

use serde_json::json;

pub fn run(json: bool) {
    if json {
        println!(
            "{}",
            json!({
                "event": "version",
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            })
        );
    } else {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    }
}
