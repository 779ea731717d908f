use base32k::{Alphabet, EncodingMode, StreamingDecoder, StreamingEncoder, decode, encode};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Cursor;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_alphabet(c: &mut Criterion) {
    c.bench_function("alphabet_new", |b| b.iter(Alphabet::new));
}

fn bench_encode(c: &mut Criterion) {
    let alphabet = Alphabet::new();

    for (name, mode) in [
        ("encode_wide", EncodingMode::Wide),
        ("encode_base64", EncodingMode::Base64),
    ] {
        let mut group = c.benchmark_group(name);
        for size in SIZES {
            group.throughput(Throughput::Bytes(size as u64));
            let data = sample(size);

            group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
                b.iter(|| encode(black_box(data), black_box(&alphabet), mode));
            });
        }
        group.finish();
    }
}

fn bench_decode(c: &mut Criterion) {
    let alphabet = Alphabet::new();

    for (name, mode) in [
        ("decode_wide", EncodingMode::Wide),
        ("decode_base64", EncodingMode::Base64),
    ] {
        let mut group = c.benchmark_group(name);
        for size in SIZES {
            group.throughput(Throughput::Bytes(size as u64));
            let encoded = encode(&sample(size), &alphabet, mode);

            group.bench_with_input(
                BenchmarkId::from_parameter(size),
                &encoded,
                |b, encoded| {
                    b.iter(|| decode(black_box(encoded), black_box(&alphabet)).unwrap());
                },
            );
        }
        group.finish();
    }
}

fn bench_streaming(c: &mut Criterion) {
    let alphabet = Alphabet::new();
    let data = sample(1 << 20);
    let encoded = encode(&data, &alphabet, EncodingMode::Wide);

    let mut group = c.benchmark_group("streaming_wide");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("encode_1mb", |b| {
        b.iter(|| {
            let mut encoder = StreamingEncoder::new(&alphabet, Vec::with_capacity(encoded.len()));
            encoder.encode(&mut Cursor::new(black_box(&data))).unwrap();
            encoder.into_inner()
        });
    });

    group.bench_function("decode_1mb", |b| {
        b.iter(|| {
            let mut decoder = StreamingDecoder::new(&alphabet, Vec::with_capacity(data.len()));
            decoder
                .decode(&mut Cursor::new(black_box(encoded.as_bytes())))
                .unwrap();
            decoder.into_inner()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_alphabet,
    bench_encode,
    bench_decode,
    bench_streaming
);
criterion_main!(benches);
