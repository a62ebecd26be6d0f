use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use logfmt_kv::escape::format_value;
use logfmt_kv::{Encoder, Kv, Level, Line, Logger};

fn benchmark_format_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_value");

    let inputs: [(&str, &[u8]); 3] = [
        ("bare", b"request_completed"),
        ("spaces", b"request completed in time"),
        ("escaped", b"line one\nline \"two\"\ttabbed"),
    ];
    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| format_value(black_box(input)))
        });
    }
    group.finish();
}

fn benchmark_line(c: &mut Criterion) {
    c.bench_function("line_five_pairs", |b| {
        b.iter(|| {
            let mut line = Line::new();
            line.kv_str("lvl", "info");
            line.kv_str("msg", "hello world");
            line.kv_str("path", "/api/v1/users");
            line.kv_str("status", "200");
            line.kv_str("ms", "1.25");
            line.into_bytes()
        })
    });
}

fn benchmark_encoder_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoder_stream");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut encoder = Encoder::new(Vec::with_capacity(size * 32));
                for i in 0..size {
                    let _ = encoder.write_kv_str("i", &i.to_string());
                    let _ = encoder.write_kv_str("msg", "tick tock");
                    let _ = encoder.write_line();
                }
                encoder.into_inner()
            })
        });
    }
    group.finish();
}

fn benchmark_logger_format(c: &mut Criterion) {
    let logger = Logger::new(std::io::sink()).with([
        Kv::str("service", "api"),
        Kv::deferred(|| Kv::uint("pid", 4242)),
    ]);
    let kvs = [Kv::int("status", 404), Kv::float("ms", 0.75), Kv::bool("cached", false)];

    c.bench_function("logger_format", |b| {
        b.iter(|| logger.format(Level::Info, black_box("not found"), None, black_box(&kvs)))
    });
}

criterion_group!(
    benches,
    benchmark_format_value,
    benchmark_line,
    benchmark_encoder_stream,
    benchmark_logger_format
);
criterion_main!(benches);
