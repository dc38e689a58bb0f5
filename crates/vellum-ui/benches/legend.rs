//! Benchmarks for legend rendering

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vellum_ui::legend::{Legend, LegendItem, Orientation};

fn legend(count: usize, orientation: Orientation) -> Legend {
    (0..count).fold(Legend::new().orientation(orientation), |legend, i| {
        legend.item(
            LegendItem::new(format!("Series {}", i))
                .line(i % 4 == 0)
                .on_click(|index, _| {
                    black_box(index);
                }),
        )
    })
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("legend_render");

    for count in [5, 50, 500] {
        group.throughput(Throughput::Elements(count as u64));

        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let legend = legend(count, orientation);
            group.bench_with_input(
                BenchmarkId::new(orientation.token(), count),
                &legend,
                |b, legend| b.iter(|| black_box(legend.render())),
            );
        }
    }

    group.finish();
}

fn bench_markup(c: &mut Criterion) {
    let node = legend(100, Orientation::Vertical).render();
    c.bench_function("legend_markup_100", |b| b.iter(|| black_box(node.to_markup().len())));
}

criterion_group!(benches, bench_render, bench_markup);
criterion_main!(benches);
