//! Benchmarks for the resource decompressors and the picture interpreter.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sci_benches::{generate_huffman_fixture, generate_lzw1_fixture, generate_lzw_fixture, generate_none_fixture, generate_pic_fixture, sizes};
use sci_types::compress::{huffman_decompress, lzw1_decompress, lzw_decompress, none_decompress};
use sci_types::pic::Picture;
use std::hint::black_box;

const SIZE_CASES: [(&str, usize); 3] = [("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)];

fn bench_none(c: &mut Criterion) {
	let mut group = c.benchmark_group("decompress_none");
	for (name, len) in SIZE_CASES {
		let data = generate_none_fixture(len);
		group.throughput(Throughput::Bytes(len as u64));
		group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
			b.iter(|| black_box(none_decompress(black_box(data), len)));
		});
	}
	group.finish();
}

fn bench_lzw(c: &mut Criterion) {
	let mut group = c.benchmark_group("decompress_lzw");
	for (name, len) in SIZE_CASES {
		let (data, len) = generate_lzw_fixture(len);
		group.throughput(Throughput::Bytes(len as u64));
		group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
			b.iter(|| black_box(lzw_decompress(black_box(data), len)));
		});
	}
	group.finish();
}

fn bench_huffman(c: &mut Criterion) {
	let mut group = c.benchmark_group("decompress_huffman");
	for (name, len) in SIZE_CASES {
		let (data, len) = generate_huffman_fixture(len);
		group.throughput(Throughput::Bytes(len as u64));
		group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
			b.iter(|| black_box(huffman_decompress(black_box(data), len)));
		});
	}
	group.finish();
}

fn bench_lzw1(c: &mut Criterion) {
	let mut group = c.benchmark_group("decompress_lzw1");
	for (name, len) in SIZE_CASES {
		let (data, len) = generate_lzw1_fixture(len);
		group.throughput(Throughput::Bytes(len as u64));
		group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
			b.iter(|| black_box(lzw1_decompress(black_box(data), len)));
		});
	}
	group.finish();
}

/// The interpreter's hot loop: opcode dispatch plus the raster line and
/// flood-fill primitives it drives.
fn bench_pic_interpret(c: &mut Criterion) {
	let mut group = c.benchmark_group("pic_interpret");
	for segments in [50usize, 500, 2000] {
		let program = generate_pic_fixture(segments);
		group.throughput(Throughput::Elements(segments as u64));
		group.bench_with_input(BenchmarkId::from_parameter(segments), &program, |b, program| {
			b.iter(|| black_box(Picture::decode(black_box(program))));
		});
	}
	group.finish();
}

criterion_group!(benches, bench_none, bench_lzw, bench_huffman, bench_lzw1, bench_pic_interpret);
criterion_main!(benches);
