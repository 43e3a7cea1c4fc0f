use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use icoforge_core::{decode_bytes, encode_ico, resize_all, SizeSet};

fn source_image() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(512, 512, |x, y| {
        Rgba([(x / 2) as u8, (y / 2) as u8, ((x + y) / 4) as u8, 255])
    }))
}

fn bench_decode(c: &mut Criterion) {
    let mut png = Cursor::new(Vec::new());
    source_image().write_to(&mut png, ImageFormat::Png).unwrap();
    let bytes = png.into_inner();

    c.bench_function("decode_png_512", |b| {
        b.iter(|| decode_bytes(&bytes).unwrap());
    });
}

fn bench_resize(c: &mut Criterion) {
    let image = source_image();
    let sizes = SizeSet::standard();

    c.bench_function("resize_512_to_standard_sizes", |b| {
        b.iter(|| resize_all(&image, &sizes));
    });
}

fn bench_encode(c: &mut Criterion) {
    let variants = resize_all(&source_image(), &SizeSet::standard());

    c.bench_function("encode_standard_ico", |b| {
        b.iter(|| encode_ico(&variants).unwrap());
    });
}

criterion_group!(benches, bench_decode, bench_resize, bench_encode);
criterion_main!(benches);
