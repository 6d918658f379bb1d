use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_reveal_rs::image_pipeline::RgbImageData;
use grid_reveal_rs::image_pipeline::filter::mean_filter;

fn generate_mock_image(width: usize, height: usize) -> RgbImageData {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 31 + y * 17) % 256) as u8;
            data.extend_from_slice(&[value, value / 2, 255 - value]);
        }
    }
    RgbImageData::new(width, height, data).expect("mock image dimensions")
}

fn benchmark_filter_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_filter_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let image = generate_mock_image(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            b.iter(|| mean_filter(black_box(image), 3));
        });
    }

    group.finish();
}

fn benchmark_window_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_filter_by_window");
    let image = generate_mock_image(500, 500);

    for window in [1usize, 3, 5, 7] {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &window| {
            b.iter(|| mean_filter(black_box(&image), window));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_filter_sizes, benchmark_window_sizes);
criterion_main!(benches);
