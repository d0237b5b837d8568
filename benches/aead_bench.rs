use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lwc_aead::{Algorithm, HashAlgorithm};
use std::hint::black_box;

const SIZES: [usize; 5] = [16, 64, 256, 1024, 16384];

/// Fixed key, nonce and AAD for one family.
fn setup(algorithm: Algorithm) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let key = vec![0x01u8; algorithm.key_len()];
    let nonce = vec![0x02u8; algorithm.nonce_len()];
    let aad = vec![0x41u8; 32];
    (key, nonce, aad)
}

/// Encryption throughput of every family across message sizes
fn bench_encrypt(c: &mut Criterion) {
    for &algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("encrypt/{algorithm}"));
        let (key, nonce, aad) = setup(algorithm);

        for size in SIZES {
            let mut buffer = vec![0x42u8; size];
            let mut tag = vec![0u8; algorithm.tag_len()];

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    algorithm
                        .encrypt_detached(
                            black_box(&key),
                            black_box(&nonce),
                            black_box(&aad),
                            black_box(&mut buffer),
                            &mut tag,
                        )
                        .unwrap();
                    black_box(&tag);
                });
            });
        }
        group.finish();
    }
}

/// Decryption throughput, including the tag check
fn bench_decrypt(c: &mut Criterion) {
    for &algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("decrypt/{algorithm}"));
        let (key, nonce, aad) = setup(algorithm);

        for size in SIZES {
            let plaintext = vec![0x42u8; size];
            let mut sealed = vec![0u8; size + algorithm.tag_len()];
            algorithm
                .encrypt(&key, &nonce, &aad, &plaintext, &mut sealed)
                .unwrap();
            let mut out = vec![0u8; size];

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    algorithm
                        .decrypt(
                            black_box(&key),
                            black_box(&nonce),
                            black_box(&aad),
                            black_box(&sealed),
                            &mut out,
                        )
                        .unwrap()
                });
            });
        }
        group.finish();
    }
}

/// Hash throughput across message sizes
fn bench_hash(c: &mut Criterion) {
    for &algorithm in HashAlgorithm::ALL {
        let mut group = c.benchmark_group(format!("hash/{algorithm}"));

        for size in SIZES {
            let message = vec![0x42u8; size];

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| black_box(algorithm.hash(black_box(&message))));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_encrypt, bench_decrypt, bench_hash);
criterion_main!(benches);
