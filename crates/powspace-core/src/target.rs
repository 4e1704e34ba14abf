//! Masked hash target construction and comparison.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target template construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// The fixed pattern does not fit in the requested hash length.
    #[error("pattern is {pattern} bytes but the hash is only {length}")]
    PatternTooLong { pattern: usize, length: usize },
}

/// A masked comparison template for candidate hashes.
///
/// `target` and `mask` always have the same length. A mask byte is either
/// fully set — the hash must equal `target` at that position — or fully
/// clear, marking a don't-care position. Masks are byte-granular: the
/// builders never produce a partially set mask byte, and consumers may rely
/// on that when comparing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetTemplate {
    target: Vec<u8>,
    mask: Vec<u8>,
}

/// Build a template requiring the hash to end with `suffix`.
///
/// `target` is `length - suffix.len()` zero bytes followed by the suffix;
/// `mask` is the same count of zero bytes followed by a run of `0xFF`.
/// The zero fill at don't-care positions is arbitrary (the mask cancels it
/// during comparison) but keeps the template inert when printed or
/// serialized.
pub fn suffix_target(suffix: &[u8], length: usize) -> Result<TargetTemplate, TargetError> {
    if suffix.len() > length {
        return Err(TargetError::PatternTooLong {
            pattern: suffix.len(),
            length,
        });
    }

    let free = length - suffix.len();

    let mut target = vec![0u8; length];
    target[free..].copy_from_slice(suffix);

    let mut mask = vec![0u8; length];
    mask[free..].fill(0xFF);

    Ok(TargetTemplate { target, mask })
}

/// Build a template requiring the hash to start with `prefix`.
///
/// Mirror of [`suffix_target`]: the constrained region sits at the head,
/// followed by zero-filled don't-care positions.
pub fn prefix_target(prefix: &[u8], length: usize) -> Result<TargetTemplate, TargetError> {
    if prefix.len() > length {
        return Err(TargetError::PatternTooLong {
            pattern: prefix.len(),
            length,
        });
    }

    let mut target = vec![0u8; length];
    target[..prefix.len()].copy_from_slice(prefix);

    let mut mask = vec![0u8; length];
    mask[..prefix.len()].fill(0xFF);

    Ok(TargetTemplate { target, mask })
}

impl TargetTemplate {
    /// The expected hash bytes at constrained positions (zero elsewhere).
    pub fn target(&self) -> &[u8] {
        &self.target
    }

    /// The per-position mask: `0xFF` constrained, `0x00` don't-care.
    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// The hash length this template compares against.
    pub fn len(&self) -> usize {
        self.target.len()
    }

    /// True for the zero-length template.
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Check a candidate hash against the template.
    ///
    /// A hash matches iff `(hash[i] & mask[i]) == (target[i] & mask[i])`
    /// at every position. A hash of the wrong length never matches.
    #[inline]
    pub fn matches(&self, hash: &[u8]) -> bool {
        if hash.len() != self.target.len() {
            return false;
        }

        for i in 0..hash.len() {
            if (hash[i] & self.mask[i]) != (self.target[i] & self.mask[i]) {
                return false;
            }
        }
        true
    }

    /// The target as lowercase hex.
    pub fn target_hex(&self) -> String {
        hex::encode(&self.target)
    }

    /// The mask as lowercase hex.
    pub fn mask_hex(&self) -> String {
        hex::encode(&self.mask)
    }
}
