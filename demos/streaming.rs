//! Streaming tokens straight to a writer with `Encoder`.
//!
//! Run with: cargo run --example streaming

use logfmt_kv::Encoder;
use std::io::{self, BufWriter, Write};

fn main() -> logfmt_kv::Result<()> {
    let stdout = io::stdout();
    let mut encoder = Encoder::new(BufWriter::new(stdout.lock()));

    let rows = [("alice", 3, "ok"), ("bob", 0, "no orders"), ("carol\n", 7, "ok")];
    for (user, orders, note) in rows {
        encoder.write_kv_str("user", user)?;
        encoder.write_kv_str("orders", &orders.to_string())?;
        encoder.write_kv_str("note", note)?;
        encoder.write_line()?;
    }

    encoder.get_mut().flush()?;
    Ok(())
}
