use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mipi_plain16_rs::image_pipeline::{ImageGeometry, LineUnpacker, MipiDecoder};

fn generate_packed_data(geometry: &ImageGeometry) -> Vec<u8> {
    let padded = geometry.padded_bytes_per_line();
    let mut data = Vec::with_capacity(padded * geometry.height);
    for line in 0..geometry.height {
        for i in 0..padded {
            data.push(((line + i) % 256) as u8);
        }
    }
    data
}

fn benchmark_unpack_by_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack_by_depth");

    for bits in [8i64, 10, 12, 14] {
        let geometry = ImageGeometry::new(1920, 1080, bits, 16).unwrap();
        let data = generate_packed_data(&geometry);

        group.bench_with_input(BenchmarkId::from_parameter(bits), &data, |b, data| {
            let unpacker = LineUnpacker::new();
            b.iter(|| {
                let mut source = Cursor::new(black_box(data));
                let _ = unpacker.decode(&mut source, &geometry);
            });
        });
    }

    group.finish();
}

fn benchmark_unpack_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack_by_size");

    let sizes = vec![
        (640, 480, "640x480"),
        (1920, 1080, "1920x1080"),
        (4096, 3072, "4096x3072"),
    ];

    for (width, height, label) in sizes {
        let geometry = ImageGeometry::new(width, height, 10, 16).unwrap();
        let data = generate_packed_data(&geometry);

        group.bench_with_input(BenchmarkId::from_parameter(label), &data, |b, data| {
            let unpacker = LineUnpacker::new();
            b.iter(|| {
                let mut source = Cursor::new(black_box(data));
                let _ = unpacker.decode(&mut source, &geometry);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_unpack_by_depth, benchmark_unpack_by_size);
criterion_main!(benches);
