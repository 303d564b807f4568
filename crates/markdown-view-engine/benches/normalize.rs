use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use markdown_view_engine::{Theme, normalize, parse_markdown, render_blocks, render_markdown};
mod common;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.sample_size(20);

    let inputs = [
        ("lists", common::generate_list_heavy_markdown(50, 20)),
        ("quotes", common::generate_quote_heavy_markdown(200)),
        ("mixed", common::generate_markdown_content(100)),
    ];

    for (name, content) in &inputs {
        let parsed = parse_markdown(content);
        group.bench_function(*name, |b| {
            b.iter_batched(
                || parsed.clone(),
                |blocks| std::hint::black_box(normalize(blocks)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);
    let theme = Theme::default();

    let content = common::generate_list_heavy_markdown(50, 20);
    let blocks = normalize(parse_markdown(&content));
    group.bench_function("render_blocks", |b| {
        b.iter(|| std::hint::black_box(render_blocks(&blocks, &theme)));
    });
    group.bench_function("end_to_end", |b| {
        b.iter(|| std::hint::black_box(render_markdown(std::hint::black_box(&content), &theme)));
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_render);
criterion_main!(benches);
