use criterion::*;
use mwire::*;

fn bench(c: &mut Criterion) {
    let payload: Vec<u8> = (0..=255).collect();
    let topics = vec![String::from("orders"), String::from("fills")];
    let seq = 0x0102_0304_0506_0708_u64;
    let checksum = [0xab_u8; 32];

    let mut wire: Vec<u8> = vec![];
    encode_fields(&mut wire, &[&seq, &true, &topics, &payload, &checksum]).unwrap();

    c.bench_function("encode message", |b| {
        b.iter(|| {
            let mut out: Vec<u8> = Vec::with_capacity(wire.len());
            encode_fields(&mut out, &[&seq, &true, &topics, &payload, &checksum]).unwrap();
            black_box(out);
        })
    });

    c.bench_function("decode message", |b| {
        b.iter(|| {
            let mut seq = 0_u64;
            let mut flag = false;
            let mut topics: Vec<String> = vec![];
            let mut payload: Vec<u8> = vec![];
            let mut checksum = [0_u8; 32];
            decode_fields(
                &mut &wire[..],
                &mut [
                    &mut seq,
                    &mut flag,
                    &mut topics,
                    &mut payload,
                    &mut checksum,
                ],
            )
            .unwrap();
            black_box((seq, flag, topics, payload, checksum));
        })
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
