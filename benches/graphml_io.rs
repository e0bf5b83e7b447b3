use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphml_io::graph::Graph;
use graphml_io::graphml::{GraphMLReader, GraphMLWriter, WriterConfig};

/// Ring lattice where every node links to its next `degree` neighbours
fn generate_graph(num_nodes: u64, degree: u64, weighted: bool) -> Graph {
    let mut g = Graph::new(num_nodes, weighted, false);
    g.set_name("bench");
    for u in 0..num_nodes {
        for k in 1..=degree {
            let v = (u + k) % num_nodes;
            g.add_edge_weighted(u, v, (u * k) as f64 * 0.01).unwrap();
        }
    }
    g
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("graphml_read");

    for &num_nodes in &[1_000u64, 10_000, 50_000] {
        for &weighted in &[false, true] {
            let graph = generate_graph(num_nodes, 4, weighted);
            let xml = GraphMLWriter::new().to_string(&graph).unwrap();
            group.throughput(Throughput::Bytes(xml.len() as u64));

            let label = if weighted { "weighted" } else { "unweighted" };
            group.bench_with_input(BenchmarkId::new(label, num_nodes), &xml, |b, xml| {
                let reader = GraphMLReader::new();
                b.iter(|| black_box(reader.read_str(black_box(xml)).unwrap()))
            });
        }
    }

    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("graphml_write");

    for &num_nodes in &[1_000u64, 10_000, 50_000] {
        let graph = generate_graph(num_nodes, 4, true);
        group.throughput(Throughput::Elements(graph.number_of_edges()));

        for (label, config) in [
            ("indented", WriterConfig::default()),
            ("compact", WriterConfig::compact()),
        ] {
            group.bench_with_input(BenchmarkId::new(label, num_nodes), &graph, |b, graph| {
                let mut writer = GraphMLWriter::with_config(config.clone());
                let mut out = Vec::with_capacity(1 << 20);
                b.iter(|| {
                    out.clear();
                    writer.write_to(black_box(graph), &mut out).unwrap();
                    black_box(out.len())
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_read, bench_write);
criterion_main!(benches);
