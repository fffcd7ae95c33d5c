//! Randomized content payloads
//!
//! Content lengths are drawn uniformly from `[0, 128)` so that every payload
//! fits a short-form BER length byte.

use crate::entropy::{EntropySource, SeededEntropy, SystemEntropy};
use fuzz_asn1_core::{Charset, FuzzError, FuzzResult, MAX_SHORT_LENGTH};
use std::sync::Arc;

/// Number of distinct content lengths (`0..=MAX_SHORT_LENGTH`)
const LENGTH_SPAN: usize = MAX_SHORT_LENGTH + 1;

/// Draws random content from a shared entropy source
#[derive(Debug, Clone)]
pub struct ContentGenerator {
    entropy: Arc<dyn EntropySource>,
}

impl ContentGenerator {
    pub fn new(entropy: Arc<dyn EntropySource>) -> Self {
        Self { entropy }
    }

    /// Generator backed by the operating system CSPRNG
    pub fn system() -> Self {
        Self::new(Arc::new(SystemEntropy))
    }

    /// Generator backed by a seeded CSPRNG
    pub fn seeded(seed: u64) -> Self {
        Self::new(Arc::new(SeededEntropy::new(seed)))
    }

    /// One uniformly random byte
    pub fn random_byte(&self) -> FuzzResult<u8> {
        let mut byte = [0u8; 1];
        self.entropy.try_fill(&mut byte)?;
        Ok(byte[0])
    }

    /// Uniform draw from `[0, bound)`
    ///
    /// Uses rejection sampling over 32-bit words so that small bounds are
    /// not skewed towards low values.
    ///
    /// # Errors
    /// `FuzzError::InvalidData` for a zero or oversized bound, or whatever
    /// the entropy source reports.
    pub fn uniform_below(&self, bound: usize) -> FuzzResult<usize> {
        if bound == 0 || bound as u64 > u32::MAX as u64 {
            return Err(FuzzError::InvalidData(format!(
                "Cannot draw uniformly below {}",
                bound
            )));
        }

        let bound = bound as u64;
        let span = 1u64 << 32;
        let zone = span - span % bound;

        loop {
            let mut word = [0u8; 4];
            self.entropy.try_fill(&mut word)?;
            let candidate = u32::from_be_bytes(word) as u64;
            if candidate < zone {
                return Ok((candidate % bound) as usize);
            }
        }
    }

    /// Content length in `[0, 128)`
    pub fn random_length(&self) -> FuzzResult<usize> {
        self.uniform_below(LENGTH_SPAN)
    }

    /// Random length, then that many unconstrained bytes
    pub fn random_content(&self) -> FuzzResult<Vec<u8>> {
        let length = self.random_length()?;
        let mut content = vec![0u8; length];
        if length > 0 {
            self.entropy.try_fill(&mut content)?;
        }
        Ok(content)
    }

    /// Random length, then that many bytes picked uniformly from `charset`
    pub fn random_content_from_charset(&self, charset: &Charset) -> FuzzResult<Vec<u8>> {
        let length = self.random_length()?;
        let mut content = Vec::with_capacity(length);
        for _ in 0..length {
            let index = self.uniform_below(charset.len())?;
            let byte = charset.get(index).ok_or_else(|| {
                FuzzError::InvalidData(format!(
                    "Index {} out of range for charset '{}'",
                    index,
                    charset.name()
                ))
            })?;
            content.push(byte);
        }
        Ok(content)
    }
}

impl Default for ContentGenerator {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Entropy source that always fails, for exercising error paths
    #[derive(Debug)]
    pub(crate) struct FailingEntropy;

    impl EntropySource for FailingEntropy {
        fn try_fill(&self, _dest: &mut [u8]) -> FuzzResult<()> {
            Err(FuzzError::Entropy("no entropy available".to_string()))
        }
    }

    #[test]
    fn test_random_content_length_bound() {
        let generator = ContentGenerator::seeded(42);
        for _ in 0..500 {
            let content = generator.random_content().unwrap();
            assert!(content.len() <= MAX_SHORT_LENGTH);
        }
    }

    #[test]
    fn test_random_content_uses_full_byte_range() {
        let generator = ContentGenerator::seeded(3);
        let mut seen = [false; 256];
        for _ in 0..400 {
            for b in generator.random_content().unwrap() {
                seen[b as usize] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_charset_content_stays_in_charset() {
        let generator = ContentGenerator::seeded(9);
        for charset in [Charset::NUMERIC, Charset::PRINTABLE, Charset::IA5] {
            for _ in 0..100 {
                let content = generator.random_content_from_charset(&charset).unwrap();
                assert!(content.len() <= MAX_SHORT_LENGTH);
                assert!(charset.contains_all(&content));
            }
        }
    }

    #[test]
    fn test_charset_content_covers_charset() {
        let generator = ContentGenerator::seeded(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            seen.extend(generator.random_content_from_charset(&Charset::NUMERIC).unwrap());
        }
        assert_eq!(seen.len(), Charset::NUMERIC.len());
    }

    #[test]
    fn test_uniform_below_bounds() {
        let generator = ContentGenerator::seeded(5);
        assert!(generator.uniform_below(0).is_err());
        for _ in 0..1000 {
            assert!(generator.uniform_below(11).unwrap() < 11);
        }
        assert_eq!(generator.uniform_below(1).unwrap(), 0);
    }

    #[test]
    fn test_seeded_generators_agree() {
        let a = ContentGenerator::seeded(100);
        let b = ContentGenerator::seeded(100);
        for _ in 0..10 {
            assert_eq!(a.random_content().unwrap(), b.random_content().unwrap());
        }
    }

    #[test]
    fn test_entropy_failure_propagates() {
        let generator = ContentGenerator::new(Arc::new(FailingEntropy));
        assert!(matches!(generator.random_byte(), Err(FuzzError::Entropy(_))));
        assert!(matches!(generator.random_content(), Err(FuzzError::Entropy(_))));
        assert!(matches!(
            generator.random_content_from_charset(&Charset::IA5),
            Err(FuzzError::Entropy(_))
        ));
    }
}
