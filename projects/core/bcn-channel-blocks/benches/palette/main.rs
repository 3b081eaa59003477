use bcn_channel_blocks::{SignedChannelBlock, UnsignedChannelBlock};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

/// Builds `count` packed sub-blocks covering both interpolation modes.
fn generate_blocks(count: usize) -> Vec<u64> {
    // Simple xorshift so every run sees the same data.
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Channel Sub-Blocks");

    // 8MB of sub-blocks
    let blocks = generate_blocks(8388608 / 8);
    group.throughput(Throughput::Bytes((blocks.len() * 8) as u64));

    group.bench_function("unsigned_palette", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for &packed in &blocks {
                let palette = UnsignedChannelBlock::from_packed(packed).palette();
                acc = acc.wrapping_add(palette[7] as u32);
            }
            black_box(acc)
        })
    });

    group.bench_function("unsigned_palette_per_entry", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for &packed in &blocks {
                let block = UnsignedChannelBlock::from_packed(packed);
                for entry in 0..8 {
                    acc = acc.wrapping_add(block.palette_entry(entry).unwrap_or(0) as u32);
                }
            }
            black_box(acc)
        })
    });

    group.bench_function("signed_palette_normalized", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &packed in &blocks {
                acc += SignedChannelBlock::from_packed(packed).palette_normalized()[7];
            }
            black_box(acc)
        })
    });

    group.bench_function("unsigned_decode_texels", |b| {
        let mut output = vec![0u8; blocks.len() * 16];
        b.iter(|| {
            for (packed, texels) in blocks.iter().zip(output.chunks_exact_mut(16)) {
                texels.copy_from_slice(&UnsignedChannelBlock::from_packed(*packed).decode_texels());
            }
            black_box(output.as_ptr())
        })
    });

    group.bench_function("signed_decode_texels", |b| {
        let mut output = vec![0i8; blocks.len() * 16];
        b.iter(|| {
            for (packed, texels) in blocks.iter().zip(output.chunks_exact_mut(16)) {
                texels.copy_from_slice(&SignedChannelBlock::from_packed(*packed).decode_texels());
            }
            black_box(output.as_ptr())
        })
    });

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
