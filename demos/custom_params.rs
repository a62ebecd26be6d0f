//! Renaming and omitting standard fields.
//!
//! Run with: cargo run --example custom_params

use logfmt_kv::{Kv, Levels, Logger, Params};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    // Programmatic overrides
    let logger = Logger::with_params(io::stdout(), |p| {
        p.level_key = "level".into();
        p.msg_key = "message".into();
        p.debug = false;
    });
    logger.info("renamed keys", &[]);
    logger.debug("not printed", &[]);

    // Builder style, with the level field dropped on info lines
    let params = Params::new().with_levels(Levels {
        info: String::new(),
        ..Levels::default()
    });
    let logger = Logger::from_params(io::stdout(), params);
    logger.info("no level here", &[Kv::bool("quiet", true)]);

    // From a configuration file section
    let config = r#"{ "error_key": "err", "levels": { "error": "E" } }"#;
    let params: Params = serde_json::from_str(config)?;
    let logger = Logger::from_params(io::stdout(), params);
    logger.error("timeout", "upstream", &[]);

    Ok(())
}
