//! Inherited context and deferred values.
//!
//! Run with: cargo run --example context

use logfmt_kv::{kvs, Kv};
use std::io;
use std::thread;
use std::time::Duration;

fn main() {
    let root = logfmt_kv::new(io::stdout()).with([Kv::timestamp("time"), Kv::str("app", "demo")]);

    let db = root.with([Kv::str("component", "db")]);
    let http = root.with([Kv::str("component", "http")]);

    db.info("connected", &kvs!["pool" => 8]);
    thread::sleep(Duration::from_millis(1100));
    // the timestamp is taken per line, not when `with` was called
    http.info("listening", &kvs!["port" => 8080]);
}
