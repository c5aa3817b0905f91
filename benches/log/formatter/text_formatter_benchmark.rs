use callerlog::log::{
    Caller, CsvFormatter, JsonFormatter, LogFormatter, LogLevel, LogRecord, RawFormatter,
    TextFormatter, TextFormatterConfig,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_formatter(c: &mut Criterion) {
    let formatter_colored = TextFormatter::default();
    let formatter_plain = TextFormatter::new(TextFormatterConfig {
        colors_disabled: true,
        ..Default::default()
    });

    // 基础记录
    let basic_record = LogRecord::new(LogLevel::Info, "This is a test message");

    // 带调用方的记录
    let record_with_caller = LogRecord::new(LogLevel::Error, "Error occurred in module")
        .with_caller(Caller::new("Handler::run", "my_app::service"));

    // 长消息记录
    let record_with_long_message = LogRecord::new(LogLevel::Debug, "A".repeat(1000));

    let mut group = c.benchmark_group("formatter");

    // Baseline: 什么都不做的基准测试
    group.bench_function("baseline", |b| {
        b.iter(|| {
            black_box(());
        })
    });

    let cases: [(&str, &LogRecord); 3] = [
        ("basic", &basic_record),
        ("with_caller", &record_with_caller),
        ("with_long_message", &record_with_long_message),
    ];

    for (name, record) in cases {
        group.bench_with_input(BenchmarkId::new("plain", name), record, |b, record| {
            b.iter(|| black_box(formatter_plain.format(black_box(record))))
        });

        group.bench_with_input(BenchmarkId::new("colored", name), record, |b, record| {
            b.iter(|| black_box(formatter_colored.format(black_box(record))))
        });
    }

    group.finish();
}

fn benchmark_other_formatters(c: &mut Criterion) {
    let record = LogRecord::new(LogLevel::Info, "user logged in, id=42")
        .with_caller(Caller::new("login", "my_app::auth"));

    let formatters: [(&str, Box<dyn LogFormatter>); 3] = [
        ("json", Box::new(JsonFormatter::default())),
        ("csv", Box::new(CsvFormatter::default())),
        ("raw", Box::new(RawFormatter::default())),
    ];

    let mut group = c.benchmark_group("formatter_kinds");
    for (name, formatter) in &formatters {
        group.bench_function(*name, |b| {
            b.iter(|| black_box(formatter.format(black_box(&record))))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_formatter, benchmark_other_formatters);
criterion_main!(benches);
