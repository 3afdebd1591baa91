use chrono::Local;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xlog::log::formatter::{write_line, write_message};
use xlog::{LogLevel, LogValue};

fn benchmark_message(c: &mut Criterion) {
    let long_message = "A".repeat(1000);
    let cases: [(&str, &str, Vec<LogValue>); 4] = [
        ("no_placeholder", "This is a test message", vec![]),
        (
            "two_placeholders",
            "user %v logged in from %v",
            vec![LogValue::Int(12345), LogValue::Str("10.0.0.1")],
        ),
        (
            "unknown_type",
            "ratio %v",
            vec![LogValue::Unknown("0.75".to_string())],
        ),
        ("long_message", long_message.as_str(), vec![]),
    ];

    let mut group = c.benchmark_group("message");

    // Baseline: 什么都不做的基准测试
    group.bench_function("baseline", |b| {
        b.iter(|| {
            black_box(());
        })
    });

    for (name, template, args) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), args, |b, args| {
            let mut buf = Vec::with_capacity(2048);
            b.iter(|| {
                buf.clear();
                write_message(&mut buf, black_box(template), black_box(args)).unwrap();
                black_box(buf.len())
            })
        });
    }

    group.finish();
}

fn benchmark_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    group.throughput(Throughput::Elements(1));

    let args = [LogValue::Int(42), LogValue::Str("ok")];
    for level in [LogLevel::Error, LogLevel::Warn, LogLevel::Info, LogLevel::Debug] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", level)),
            &level,
            |b, &level| {
                let mut buf = Vec::with_capacity(256);
                b.iter(|| {
                    buf.clear();
                    let now = Local::now();
                    write_line(&mut buf, level, &now, black_box("id=%v status=%v"), &args)
                        .unwrap();
                    black_box(buf.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_message, benchmark_line);
criterion_main!(benches);
