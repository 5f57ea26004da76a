use cdb_hash::{DjbHasher, djb_hash};
use rand::Rng;

/// Straightforward reference rendition: one step per byte in u64, reduced
/// modulo 2^32 after every step.
fn reference_hash(data: &[u8]) -> u32 {
    let mut h: u64 = 5381;
    for &b in data {
        h = ((h << 5) + h) ^ b as u64;
        h &= 0xffff_ffff;
    }
    h as u32
}

#[test]
fn agrees_with_reference_on_random_buffers() {
    let mut rng = rand::rng();
    let mut buf = vec![0u8; 4096];

    for _ in 0..10_000 {
        let len = rng.random_range(0..=buf.len());
        rng.fill(&mut buf[..len]);
        assert_eq!(
            djb_hash(&buf[..len]),
            reference_hash(&buf[..len]),
            "len {}",
            len
        );
    }
}

#[test]
fn incremental_agrees_on_random_splits() {
    let mut rng = rand::rng();
    let mut buf = vec![0u8; 1024];

    for _ in 0..1_000 {
        let len = rng.random_range(0..=buf.len());
        rng.fill(&mut buf[..len]);

        let mut hasher = DjbHasher::new();
        let mut pos = 0;
        while pos < len {
            let chunk = rng.random_range(1..=len - pos);
            hasher.write(&buf[pos..pos + chunk]);
            pos += chunk;
        }
        assert_eq!(hasher.finish32(), reference_hash(&buf[..len]));
    }
}
