use callerlog::log::{
    CallerResolver, LogAppender, Logger, MemoryAppender, RawFormatter, TextFormatter,
    TextFormatterConfig,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;

/// 创建 benchmark 用的 logger，输出到内存
fn create_benchmark_logger(resolver: CallerResolver) -> (Logger, Arc<MemoryAppender>) {
    let logger = Logger::with_resolver(resolver);
    let sink = Arc::new(MemoryAppender::new());
    let appender: Arc<dyn LogAppender> = sink.clone();
    logger.set_formatted_output(
        appender,
        Arc::new(TextFormatter::new(TextFormatterConfig {
            colors_disabled: true,
            ..Default::default()
        })),
    );
    (logger, sink)
}

fn benchmark_basic_logging(c: &mut Criterion) {
    let (with_caller, with_caller_sink) = create_benchmark_logger(CallerResolver::default());
    let (without_caller, without_caller_sink) = create_benchmark_logger(CallerResolver::noop());

    let mut group = c.benchmark_group("logger_basic");

    group.bench_function("resolve_caller", |b| {
        b.iter(|| {
            with_caller.info(black_box("Simple log message"));
            with_caller_sink.clear();
        })
    });

    group.bench_function("noop_caller", |b| {
        b.iter(|| {
            without_caller.info(black_box("Simple log message"));
            without_caller_sink.clear();
        })
    });

    group.finish();
}

fn benchmark_debug_filtering(c: &mut Criterion) {
    let (logger, sink) = create_benchmark_logger(CallerResolver::default());

    let mut group = c.benchmark_group("debug_filtering");

    // 调试模式关闭时不解析调用方
    group.bench_function("debug_mode_off", |b| {
        b.iter(|| logger.debug(black_box("dropped")))
    });

    logger.set_debug_mode(true);
    logger.denylist_modules(["logger_benchmark"]);
    group.bench_function("denied", |b| b.iter(|| logger.debug(black_box("denied"))));

    group.finish();
    sink.clear();
}

fn benchmark_different_message_sizes(c: &mut Criterion) {
    let (logger, sink) = create_benchmark_logger(CallerResolver::noop());

    let mut group = c.benchmark_group("message_sizes");

    for size in [10, 100, 1000] {
        let message = "x".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, msg| {
            b.iter(|| {
                logger.info(black_box(msg.as_str()));
                sink.clear();
            })
        });
    }

    group.finish();
}

fn benchmark_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");

    for outputs in [1, 4, 16] {
        let logger = Logger::with_resolver(CallerResolver::noop());
        let sinks: Vec<Arc<MemoryAppender>> =
            (0..outputs).map(|_| Arc::new(MemoryAppender::new())).collect();
        for sink in &sinks {
            let appender: Arc<dyn LogAppender> = sink.clone();
            logger.set_formatted_output(appender, Arc::new(RawFormatter::default()));
        }

        group.bench_with_input(BenchmarkId::from_parameter(outputs), &outputs, |b, _| {
            b.iter(|| {
                logger.info(black_box("fan out"));
                sinks.iter().for_each(|sink| sink.clear());
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_basic_logging,
    benchmark_debug_filtering,
    benchmark_different_message_sizes,
    benchmark_fan_out
);
criterion_main!(benches);
