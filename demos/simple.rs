//! Leveled logging to stdout.
//!
//! Run with: cargo run --example simple

use logfmt_kv::Kv;
use std::io;

fn main() {
    let logger = logfmt_kv::new(io::stdout());

    logger.info("server started", &[Kv::str("addr", "127.0.0.1:8080")]);
    logger.debug("loaded routes", &[Kv::uint("count", 12)]);

    let err = io::Error::new(io::ErrorKind::ConnectionReset, "peer reset");
    logger.error(&err, "request failed", &[Kv::int("status", 502), Kv::float("ms", 31.25)]);
    // lvl=info msg="server started" addr=127.0.0.1:8080
    // lvl=debug msg="loaded routes" count=12
    // lvl=error msg="request failed" error="peer reset" status=502 ms=31.25
}
