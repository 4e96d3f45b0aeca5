use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hasher};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

const MUL: u64 = 0x9e37_79b9_7f4a_7c15;
const FOLD: u64 = 0x0000_0100_0000_01b3;

fn seed() -> u64 {
    static SEED: OnceLock<u64> = OnceLock::new();
    *SEED.get_or_init(|| {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock is set before the unix epoch")
            .as_nanos();
        nanos as u64 | 1
    })
}

/// Multiply-and-byteswap hasher with a per-process seed. Equal keys agree
/// within a process, colliding keys can't be precomputed across runs.
#[derive(Default)]
pub struct FastHasher {
    state: u64,
}

impl Hasher for FastHasher {
    fn finish(&self) -> u64 {
        (self.state ^ seed()).wrapping_mul(MUL).swap_bytes()
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = (self.state ^ b as u64).wrapping_mul(FOLD);
        }
    }
}

pub type FastMap<K, V> = HashMap<K, V, BuildHasherDefault<FastHasher>>;
pub type FastSet<T> = HashSet<T, BuildHasherDefault<FastHasher>>;

#[cfg(test)]
mod fast_hash_tests {
    use super::{FastHasher, FastMap, FastSet};
    use std::hash::Hasher;

    #[test]
    fn equal_input_equal_hash() {
        let mut a = FastHasher::default();
        let mut b = FastHasher::default();
        a.write(b"same bytes");
        b.write(b"same bytes");
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn map_round_trip() {
        let mut map = FastMap::default();
        for i in 0..1000u64 {
            map.insert(i, i * i);
        }
        map.insert(7, 0);
        assert_eq!(map.len(), 1000);
        assert_eq!(map[&9], 81);
        assert_eq!(map[&7], 0);
    }

    #[test]
    fn set_deduplicates() {
        let set: FastSet<i32> = [1, 2, 2, 3, 3, 3].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&2));
        assert!(!set.contains(&4));
    }
}
