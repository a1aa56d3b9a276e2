use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use message_router::benchmark_support::RoutingScanFixture;
use tokio::runtime::Builder;

const ROUTING_SCAN_ROWS: usize = 256;
const REGISTRATION_ROWS: usize = 64;

fn router_criterion(c: &mut Criterion) {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("benchmark runtime should build");

    let scan_fixture = runtime
        .block_on(RoutingScanFixture::new(ROUTING_SCAN_ROWS))
        .expect("routing-scan fixture should build");

    let mut dispatch_group = c.benchmark_group("dispatch");
    dispatch_group.bench_function("partial_match_first_rule", |b| {
        b.iter(|| {
            let processed = runtime.block_on(scan_fixture.dispatch_partial_match());
            black_box(processed.expect("partial match should dispatch"));
        });
    });
    dispatch_group.bench_function("partial_match_last_rule", |b| {
        b.iter(|| {
            let processed = runtime.block_on(scan_fixture.dispatch_last_rule());
            black_box(processed.expect("last-rule match should dispatch"));
        });
    });
    dispatch_group.bench_function("full_match_early_exit", |b| {
        b.iter(|| {
            let processed = runtime.block_on(scan_fixture.dispatch_full_match());
            black_box(processed.expect("full match should dispatch"));
        });
    });
    dispatch_group.finish();

    let mut probe_group = c.benchmark_group("can_process");
    probe_group.bench_function("unmatched", |b| {
        b.iter(|| {
            let routable = runtime.block_on(scan_fixture.probe_unmatched());
            black_box(routable);
        });
    });
    probe_group.finish();

    let mut registration_group = c.benchmark_group("registration");
    registration_group.bench_function("build_table", |b| {
        b.iter_batched(
            || REGISTRATION_ROWS,
            |rows| {
                let fixture = runtime
                    .block_on(RoutingScanFixture::new(rows))
                    .expect("registration fixture should build");
                black_box(fixture);
            },
            BatchSize::SmallInput,
        );
    });
    registration_group.finish();
}

criterion_group!(benches, router_criterion);
criterion_main!(benches);
