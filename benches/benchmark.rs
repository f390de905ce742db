use criterion::{Criterion, criterion_group, criterion_main};
use xcb_wrangler::{OsLoader, Registry, Wrangler};

fn wrangle_benchmark(c: &mut Criterion) {
    // Cold path: open + resolve every recognized library. The OS loader
    // refcounts repeated opens, so iterations after the first measure the
    // loader's fast path plus our resolution walk.
    c.bench_function("registry:wrangle", |b| {
        b.iter(|| Registry::wrangle(&OsLoader));
    });
}

fn memoized_benchmark(c: &mut Criterion) {
    let wrangler = Wrangler::new();
    wrangler.ensure_init();
    c.bench_function("wrangler:memoized", |b| {
        b.iter(|| wrangler.ensure_init());
    });
}

criterion_group!(benches, wrangle_benchmark, memoized_benchmark);
criterion_main!(benches);
