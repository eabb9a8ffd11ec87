use codspeed_criterion_compat::*;
use wide_cbor::{Encoder, I256, U256, Value};

fn document() -> Value {
    let numbers: Vec<Value> = (0..256u64).map(|i| Value::from(i * 0x0101_0101)).collect();
    Value::Map(vec![
        (Value::from("id"), Value::from(42u8)),
        (Value::from("name"), Value::from("sensor-7")),
        (Value::from("raw"), Value::from(&[0xabu8; 64][..])),
        (Value::from("ok"), Value::from(true)),
        (Value::from("samples"), Value::IndefiniteArray(numbers)),
        (Value::from("total"), Value::from(U256::MAX)),
    ])
}

fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("integers");

    group.bench_function("compact", |b| {
        b.iter(|| {
            let mut enc = Encoder::new();
            for i in 0..1024u64 {
                enc.put_unsigned(black_box(i << (i % 60))).unwrap();
                enc.put_signed(black_box(-(i as i64))).unwrap();
            }
            enc.finish().unwrap()
        })
    });

    group.bench_function("bignum", |b| {
        b.iter(|| {
            let mut enc = Encoder::new();
            for _ in 0..1024 {
                enc.put_unsigned(black_box(U256::MAX)).unwrap();
                enc.put_signed(black_box(I256::MIN)).unwrap();
            }
            enc.finish().unwrap()
        })
    });

    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let doc = document();
    let len = doc.to_vec().unwrap().len();

    let mut group = c.benchmark_group("document");
    group.throughput(Throughput::Bytes(len as u64));
    group.bench_function("value_tree", |b| b.iter(|| black_box(&doc).to_vec().unwrap()));
    group.finish();
}

criterion_group!(benches, bench_integers, bench_document);
criterion_main!(benches);
