//! Randomness sources for content generation
//!
//! All sources are cryptographically secure. Reads are fallible and a failure
//! is reported as `FuzzError::Entropy`; nothing here retries or falls back to
//! a weaker generator.

use fuzz_asn1_core::{FuzzError, FuzzResult};
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::fmt;
use std::sync::{Arc, Mutex};

/// A fallible source of uniformly random bytes
///
/// Implementations must be safe to share between worker threads.
pub trait EntropySource: Send + Sync + fmt::Debug {
    /// Fill `dest` entirely with random bytes
    fn try_fill(&self, dest: &mut [u8]) -> FuzzResult<()>;
}

/// Operating system CSPRNG (`getrandom` under the hood)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn try_fill(&self, dest: &mut [u8]) -> FuzzResult<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| FuzzError::Entropy(e.to_string()))
    }
}

/// Seeded ChaCha-based generator for reproducible corpora and tests
///
/// Access is serialised through a mutex, so sharing one instance between
/// threads is sound but the interleaving (and therefore which value gets
/// which bytes) is only reproducible when calls are made sequentially.
#[derive(Clone)]
pub struct SeededEntropy {
    seed: u64,
    rng: Arc<Mutex<StdRng>>,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl fmt::Debug for SeededEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededEntropy").field("seed", &self.seed).finish()
    }
}

impl EntropySource for SeededEntropy {
    fn try_fill(&self, dest: &mut [u8]) -> FuzzResult<()> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| FuzzError::Entropy("Seeded generator lock poisoned".to_string()))?;
        rng.try_fill_bytes(dest)
            .map_err(|e| FuzzError::Entropy(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_entropy_fills() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        SystemEntropy.try_fill(&mut a).unwrap();
        SystemEntropy.try_fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_seeded_entropy_is_reproducible() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        SeededEntropy::new(7).try_fill(&mut a).unwrap();
        SeededEntropy::new(7).try_fill(&mut b).unwrap();
        assert_eq!(a, b);

        let mut c = [0u8; 16];
        SeededEntropy::new(8).try_fill(&mut c).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_seeded_entropy_clones_share_state() {
        let source = SeededEntropy::new(1);
        let clone = source.clone();
        let mut a = [0u8; 8];
        let mut b = [0u8; 8];
        source.try_fill(&mut a).unwrap();
        clone.try_fill(&mut b).unwrap();
        assert_ne!(a, b);
        assert_eq!(clone.seed(), 1);
    }
}
