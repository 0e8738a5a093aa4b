//! Benchmarks for decoding throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use decant_disasm::{Bitness, Decoder, Instruction};

/// A small function mixing legacy, VEX and EVEX encodings.
const MIXED_CODE: &[u8] = &[
    // Function prologue
    0x55, // push rbp
    0x48, 0x89, 0xe5, // mov rbp, rsp
    0x48, 0x83, 0xec, 0x20, // sub rsp, 0x20
    // Scalar arithmetic
    0x48, 0x89, 0x7d, 0xf8, // mov [rbp-8], rdi
    0x48, 0x8b, 0x45, 0xf8, // mov rax, [rbp-8]
    0x48, 0x83, 0xc0, 0x01, // add rax, 1
    0x66, 0x0f, 0x38, 0x20, 0x08, // pmovsxbw xmm1, [rax]
    // VEX
    0xc5, 0xfc, 0x10, 0x06, // vmovups ymm0, [rsi]
    0xc5, 0xf8, 0x58, 0xc1, // vaddps xmm0, xmm0, xmm1
    // EVEX with masking and broadcast
    0x62, 0xf1, 0x7c, 0x58, 0x58, 0x46, 0x01, // vaddps zmm0, zmm0, dword bcst [rsi+4]
    0x62, 0xf2, 0x7d, 0x8b, 0x20, 0x50, 0x01, // vpmovsxbw xmm2{k3}{z}, [rax+8]
    // Control flow
    0x7e, 0x07, // jle
    0xb8, 0x01, 0x00, 0x00, 0x00, // mov eax, 1
    0xeb, 0x05, // jmp
    0xf3, 0x48, 0xab, // rep stosq
    // Epilogue
    0x48, 0x83, 0xc4, 0x20, // add rsp, 0x20
    0x5d, // pop rbp
    0xc3, // ret
];

fn generate_block(size: usize) -> Vec<u8> {
    MIXED_CODE.iter().copied().cycle().take(size).collect()
}

fn bench_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("x86_decoding");

    group.bench_function("single_instruction", |b| {
        b.iter(|| Decoder::new(Bitness::Bits64, black_box(&MIXED_CODE[1..4]), 0x1000).decode())
    });

    group.bench_function("small_function", |b| {
        b.iter(|| Decoder::new(Bitness::Bits64, black_box(MIXED_CODE), 0x1000).count())
    });

    for size in [1024, 4096, 16384, 65536] {
        let code = generate_block(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("decode_out", size), &code, |b, code| {
            b.iter(|| {
                let mut decoder = Decoder::new(Bitness::Bits64, black_box(code), 0x1000);
                let mut instr = Instruction::default();
                while decoder.can_decode() {
                    decoder.decode_out(&mut instr);
                }
                instr
            })
        });
    }

    group.finish();
}

fn bench_invalid_input(c: &mut Criterion) {
    // 0F FF is never a valid opcode, every decode takes the error path
    let code: Vec<u8> = [0x0f, 0xff].iter().copied().cycle().take(4096).collect();
    let mut group = c.benchmark_group("x86_invalid");
    group.throughput(Throughput::Bytes(code.len() as u64));
    group.bench_function("resync", |b| {
        b.iter(|| Decoder::new(Bitness::Bits32, black_box(&code), 0).count())
    });
    group.finish();
}

criterion_group!(benches, bench_decoding, bench_invalid_input);
criterion_main!(benches);
