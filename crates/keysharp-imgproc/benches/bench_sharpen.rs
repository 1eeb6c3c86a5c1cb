use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use keysharp_image::{Image, ImageSize};
use keysharp_imgproc::filter::{sharpen_with, SharpenStrategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn create_test_image<const C: usize>(width: usize, height: usize) -> Image<u8, C> {
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<u8> = (0..(width * height * C)).map(|_| rng.random()).collect();
    let size = ImageSize { width, height };
    Image::new(size, data).unwrap()
}

fn bench_sharpen(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sharpen");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let gray = create_test_image::<1>(*width, *height);
        let rgb = create_test_image::<3>(*width, *height);

        for (name, strategy) in [
            ("indexed", SharpenStrategy::Indexed),
            ("row_slices", SharpenStrategy::RowSlices),
            ("cursor", SharpenStrategy::Cursor),
        ] {
            group.bench_with_input(
                BenchmarkId::new(format!("{}_gray", name), &parameter_string),
                &gray,
                |b, src| {
                    let mut dst = Image::from_size_val(src.size(), 0u8).unwrap();
                    b.iter(|| black_box(sharpen_with(src, &mut dst, strategy)))
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("{}_rgb", name), &parameter_string),
                &rgb,
                |b, src| {
                    let mut dst = Image::from_size_val(src.size(), 0u8).unwrap();
                    b.iter(|| black_box(sharpen_with(src, &mut dst, strategy)))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sharpen);
criterion_main!(benches);
