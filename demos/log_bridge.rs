//! Routing the `log` facade through a logfmt logger.
//!
//! Run with: cargo run --example log_bridge --features log

use logfmt_kv::{Kv, LogBridge};
use std::io;

fn main() {
    let logger = logfmt_kv::new(io::stderr()).with([Kv::str("app", "bridge-demo")]);
    if LogBridge::new(logger).init(log::LevelFilter::Debug).is_err() {
        eprintln!("a logger was already installed");
        return;
    }

    log::info!("starting");
    log::warn!("cache miss rate {}%", 40);
    log::trace!("filtered out by max level");
}
