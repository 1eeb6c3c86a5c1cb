use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use keysharp_image::{Image, ImageSize};
use keysharp_imgproc::chroma_key::{chroma_key, Threshold};
use keysharp_imgproc::histogram::find_dominant_color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn create_test_image(width: usize, height: usize, seed: u64) -> Image<u8, 3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<u8> = (0..(width * height * 3)).map(|_| rng.random()).collect();
    let size = ImageSize { width, height };
    Image::new(size, data).unwrap()
}

fn bench_chroma_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("ChromaKey");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let foreground = create_test_image(*width, *height, 1);
        // a smaller background to exercise the tiling
        let background = create_test_image(*width / 3, *height / 3, 2);

        group.bench_with_input(
            BenchmarkId::new("dominant_color", &parameter_string),
            &foreground,
            |b, src| b.iter(|| black_box(find_dominant_color(src))),
        );

        group.bench_with_input(
            BenchmarkId::new("chroma_key", &parameter_string),
            &(&foreground, &background),
            |b, i| {
                let (fg, bg) = (i.0, i.1);
                let mut dst = Image::from_size_val(fg.size(), 0u8).unwrap();
                b.iter(|| black_box(chroma_key(fg, bg, &mut dst, Threshold::new(64))))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_chroma_key);
criterion_main!(benches);
