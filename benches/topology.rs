//! Benchmarks for topology construction and queries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polymesh::algo::{ReportOptions, TopologyReport};
use polymesh::prelude::*;

/// Corner index array of an `n` x `n` grid of quads, each split into two triangles.
fn grid_coord_index(n: usize) -> (usize, Vec<i32>) {
    let mut coord_index = Vec::with_capacity(n * n * 8);

    for j in 0..n {
        for i in 0..n {
            let v00 = (j * (n + 1) + i) as i32;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1) as i32;
            let v11 = v01 + 1;

            coord_index.extend_from_slice(&[v00, v10, v11, -1]);
            coord_index.extend_from_slice(&[v00, v11, v01, -1]);
        }
    }

    ((n + 1) * (n + 1), coord_index)
}

fn bench_construction(c: &mut Criterion) {
    let (num_vertices, coord_index) = grid_coord_index(50);

    c.bench_function("half_edges_grid_50x50", |b| {
        b.iter(|| HalfEdges::<u32>::new(num_vertices, black_box(&coord_index)).unwrap());
    });

    c.bench_function("polygon_mesh_grid_50x50", |b| {
        b.iter(|| PolygonMesh::<u32>::new(num_vertices, black_box(&coord_index)).unwrap());
    });
}

fn bench_queries(c: &mut Criterion) {
    let (num_vertices, coord_index) = grid_coord_index(50);
    let mesh: PolygonMesh = PolygonMesh::new(num_vertices, &coord_index).unwrap();

    c.bench_function("twin_all", |b| {
        b.iter(|| mesh.half_edge_ids().filter_map(|c| mesh.twin(c)).count());
    });

    c.bench_function("edge_lookup_all", |b| {
        b.iter(|| {
            mesh.half_edge_ids()
                .filter_map(|c| mesh.edge(mesh.src(c)?, mesh.dst(c)?))
                .count()
        });
    });

    c.bench_function("report_sequential", |b| {
        let options = ReportOptions::default().sequential();
        b.iter(|| TopologyReport::compute(&mesh, &options));
    });
}

criterion_group!(benches, bench_construction, bench_queries);
criterion_main!(benches);
