use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metro_core::prelude::*;
use rand::prelude::*;

criterion_group!(benches, default_network_benchmark, grid_benchmark);
criterion_main!(benches);

/// `size` x `size` grid with random distances between 1 and 10 km
fn grid(size: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut g = Graph::with_capacity(size * size);
    let name = |x: usize, y: usize| format!("{x}/{y}");

    for x in 0..size {
        for y in 0..size {
            g.add_station(name(x, y));
        }
    }
    for x in 0..size {
        for y in 0..size {
            if x + 1 < size {
                g.add_connection(&name(x, y), &name(x + 1, y), rng.gen_range(1.0..10.0))
                    .unwrap();
            }
            if y + 1 < size {
                g.add_connection(&name(x, y), &name(x, y + 1), rng.gen_range(1.0..10.0))
                    .unwrap();
            }
        }
    }
    g
}

pub fn default_network_benchmark(c: &mut Criterion) {
    let g = default_network().unwrap();

    c.bench_with_input(
        BenchmarkId::new("dijkstra_on_metro_map", "default_network"),
        &g,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                black_box(dijkstra.shortest_paths("CLOCK TOWER").unwrap());
            })
        },
    );
}

fn grid_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_on_grid");
    for size in [10, 50, 100].iter() {
        let g = grid(*size);
        group.throughput(criterion::Throughput::Elements(g.num_stations() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                black_box(dijkstra.shortest_paths("0/0").unwrap());
            })
        });
    }
    group.finish();
}
