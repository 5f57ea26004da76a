use std::hash::{BuildHasherDefault, Hasher};

use crate::hash::DjbHasher;

/// Builds [`DjbHasher`] instances for `HashMap`/`HashSet`, giving a bucket
/// layout that is stable across processes and platforms.
pub type DjbBuildHasher = BuildHasherDefault<DjbHasher>;

impl Hasher for DjbHasher {
    fn finish(&self) -> u64 {
        self.finish32() as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        DjbHasher::write(self, bytes);
    }
}
