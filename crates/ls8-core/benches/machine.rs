//! Tick-throughput benchmark

use criterion::{criterion_group, criterion_main, Criterion};
use ls8_core::cpu::Output;
use ls8_core::machine::Machine;

struct Discard;

impl Output for Discard {
    fn numeric(&mut self, _value: u8) {}
    fn character(&mut self, _value: u8) {}
}

// Countdown loop that never halts:
//   0x00 LDI R0,255
//   0x03 LDI R1,0x06
//   0x06 DEC R0
//   0x08 JMP R1
const LOOP_PROGRAM: &[u8] = &[
    0b10011001, 0, 255, // LDI R0,255
    0b10011001, 1, 0x06, // LDI R1,0x06
    0b01111001, 0, // DEC R0
    0b01010000, 1, // JMP R1
];

fn bench_tick_loop(c: &mut Criterion) {
    let mut template = Machine::new();
    for (address, byte) in LOOP_PROGRAM.iter().enumerate() {
        template.poke(address as u8, *byte);
    }

    c.bench_function("tick_10k", |b| {
        b.iter(|| {
            let mut machine = template.clone();
            let mut out = Discard;
            machine.run(&mut out, 10_000).unwrap()
        })
    });
}

criterion_group!(benches, bench_tick_loop);
criterion_main!(benches);
