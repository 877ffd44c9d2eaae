//! Criterion benchmarks for collection queries.
//! Focus sizes: collection length in {10, 100, 1000, 10000}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polyquery::geom::{area_sum, count_permutations, extremum_by_area, Direction, Rect, VertexFilter};
use polyquery::rand::{draw_collection, RadialCfg, VertexCount};
use polyquery::{PolygonStore, Session, SessionCfg};

fn sample(len: usize, seed: u64) -> Vec<polyquery::Polygon> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 12 },
        radius: 1000.0,
        ..RadialCfg::default()
    };
    draw_collection(cfg, seed, len)
}

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");
    for &m in &[10usize, 100, 1000, 10000] {
        let polys = sample(m, 43);
        group.bench_with_input(BenchmarkId::new("area_sum_even", m), &polys, |b, polys| {
            b.iter(|| area_sum(polys, VertexFilter::Even))
        });
        group.bench_with_input(BenchmarkId::new("max_area", m), &polys, |b, polys| {
            b.iter(|| extremum_by_area(polys, Direction::Max).map(|p| p.vertex_count()))
        });
        group.bench_with_input(BenchmarkId::new("union_frame", m), &polys, |b, polys| {
            b.iter(|| Rect::union_of(polys))
        });
        let reference = polys[0].clone();
        group.bench_with_input(BenchmarkId::new("perms", m), &polys, |b, polys| {
            b.iter(|| count_permutations(polys, &reference))
        });
    }
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let store = PolygonStore::new(sample(1000, 44));
    let script = "AREA EVEN\nAREA MEAN\nMAX AREA\nMIN VERTEXES\nCOUNT 5\n\
                  LESSAREA 4 0 0 0 50 50 50 50 0\nINFRAME 3 0 0 10 10 20 0\nAREA 2\n"
        .repeat(16);
    c.bench_function("session_script_1000", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(4096);
            Session::new(&store, SessionCfg::default())
                .run(script.as_bytes(), &mut out)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_kernel, bench_session);
criterion_main!(benches);
