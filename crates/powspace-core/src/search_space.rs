//! Plaintext search-space modeling.
//!
//! A search space is described position by position: fixed prefix and
//! suffix bytes become singleton candidate sets at the two ends, and every
//! position between them may take any byte of the charset. Only the content
//! of each position is fixed here; the consuming engine picks its own
//! enumeration order (depth-first product, sampling, partitioning by a
//! leading position).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The default charset: digits, uppercase, then lowercase — 62 bytes.
pub const ALPHANUMERIC: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Lowercase hex digits, for searches over hex-encoded plaintexts.
pub const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";

/// Search-space construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchSpaceError {
    /// Prefix and suffix together need more bytes than the plaintext has.
    #[error("prefix ({prefix} bytes) plus suffix ({suffix} bytes) exceeds plaintext length {length}")]
    AnchorsTooLong {
        prefix: usize,
        suffix: usize,
        length: usize,
    },
    /// The charset has no bytes to choose from.
    #[error("charset must not be empty")]
    EmptyCharset,
}

/// An ordered sequence of per-position candidate byte sets.
///
/// Entry `i` holds every byte allowed at plaintext position `i`. A matrix
/// of length `n` describes the set of all `n`-byte plaintexts formed by
/// picking one byte from each entry in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMatrix {
    positions: Vec<Vec<u8>>,
}

impl CandidateMatrix {
    /// Number of plaintext positions (the plaintext length).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True for the zero-length search space.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The candidate set at one position, or `None` past the end.
    pub fn position(&self, index: usize) -> Option<&[u8]> {
        self.positions.get(index).map(Vec::as_slice)
    }

    /// All candidate sets in plaintext byte order.
    pub fn positions(&self) -> &[Vec<u8>] {
        &self.positions
    }

    /// Iterate over the candidate sets in plaintext byte order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.positions.iter().map(Vec::as_slice)
    }

    /// Consume the matrix, returning the raw candidate sets.
    pub fn into_positions(self) -> Vec<Vec<u8>> {
        self.positions
    }

    /// For each position, the number of candidate completions from that
    /// position through the end of the plaintext.
    ///
    /// Entry `i` is the product of the set sizes at positions `i..`,
    /// saturating at `u64::MAX`. Engines use these counts to split work,
    /// e.g. handing whole subtrees below some size threshold to a worker.
    /// Duplicate charset bytes count every occurrence.
    pub fn subspace_sizes(&self) -> Vec<u64> {
        let mut sizes = vec![0u64; self.positions.len()];
        if let Some(last) = self.positions.len().checked_sub(1) {
            sizes[last] = self.positions[last].len() as u64;
            for i in (0..last).rev() {
                sizes[i] = sizes[i + 1].saturating_mul(self.positions[i].len() as u64);
            }
        }
        sizes
    }

    /// Total number of candidate plaintexts, saturating at `u64::MAX`.
    ///
    /// The zero-length space has exactly one candidate: the empty
    /// plaintext.
    pub fn candidate_count(&self) -> u64 {
        self.subspace_sizes().first().copied().unwrap_or(1)
    }
}

/// Builder for candidate matrices.
///
/// Prefix and suffix default to empty and the charset to
/// [`ALPHANUMERIC`]; set only what the search calls for.
pub struct SearchSpaceBuilder {
    length: usize,
    prefix: Vec<u8>,
    suffix: Vec<u8>,
    charset: Vec<u8>,
}

impl SearchSpaceBuilder {
    /// Start describing a search space over `length`-byte plaintexts.
    pub fn new(length: usize) -> Self {
        SearchSpaceBuilder {
            length,
            prefix: Vec::new(),
            suffix: Vec::new(),
            charset: ALPHANUMERIC.to_vec(),
        }
    }

    /// Pin the first `prefix.len()` plaintext bytes.
    pub fn with_prefix(mut self, prefix: &[u8]) -> Self {
        self.prefix = prefix.to_vec();
        self
    }

    /// Pin the last `suffix.len()` plaintext bytes.
    pub fn with_suffix(mut self, suffix: &[u8]) -> Self {
        self.suffix = suffix.to_vec();
        self
    }

    /// Replace the free-position charset.
    ///
    /// Duplicates are kept verbatim; deduplication is an enumeration
    /// concern of the consuming engine, not a search-space one.
    pub fn with_charset(mut self, charset: &[u8]) -> Self {
        self.charset = charset.to_vec();
        self
    }

    /// Build the candidate matrix.
    ///
    /// Fails when the anchors cannot both fit or the charset is empty;
    /// there is no partial result and no silent truncation.
    pub fn build(self) -> Result<CandidateMatrix, SearchSpaceError> {
        if self.charset.is_empty() {
            return Err(SearchSpaceError::EmptyCharset);
        }

        let anchored = self.prefix.len() + self.suffix.len();
        if anchored > self.length {
            return Err(SearchSpaceError::AnchorsTooLong {
                prefix: self.prefix.len(),
                suffix: self.suffix.len(),
                length: self.length,
            });
        }

        let mut positions = Vec::with_capacity(self.length);
        for &b in &self.prefix {
            positions.push(vec![b]);
        }
        for _ in 0..self.length - anchored {
            positions.push(self.charset.clone());
        }
        for &b in &self.suffix {
            positions.push(vec![b]);
        }

        Ok(CandidateMatrix { positions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_matrix_composition() {
        let matrix = SearchSpaceBuilder::new(10)
            .with_prefix(b"abc")
            .with_suffix(b"efg")
            .build()
            .unwrap();

        assert_eq!(matrix.len(), 10);

        // Prefix bytes pin the head, one singleton per byte
        assert_eq!(matrix.position(0), Some(&b"a"[..]));
        assert_eq!(matrix.position(1), Some(&b"b"[..]));
        assert_eq!(matrix.position(2), Some(&b"c"[..]));

        // Four free positions carry the full charset
        for i in 3..7 {
            assert_eq!(matrix.position(i), Some(&ALPHANUMERIC[..]));
        }

        // Suffix bytes pin the tail
        assert_eq!(matrix.position(7), Some(&b"e"[..]));
        assert_eq!(matrix.position(8), Some(&b"f"[..]));
        assert_eq!(matrix.position(9), Some(&b"g"[..]));

        assert_eq!(matrix.position(10), None);
    }

    #[test]
    fn test_default_charset() {
        assert_eq!(ALPHANUMERIC.len(), 62);
        assert_eq!(ALPHANUMERIC[0], b'0');
        assert_eq!(ALPHANUMERIC[9], b'9');
        assert_eq!(ALPHANUMERIC[10], b'A');
        assert_eq!(ALPHANUMERIC[35], b'Z');
        assert_eq!(ALPHANUMERIC[36], b'a');
        assert_eq!(ALPHANUMERIC[61], b'z');
    }

    #[test]
    fn test_anchors_overflow_rejected() {
        let result = SearchSpaceBuilder::new(10)
            .with_prefix(b"aaaaaa")
            .with_suffix(b"aaaaa")
            .build();

        assert_eq!(
            result,
            Err(SearchSpaceError::AnchorsTooLong {
                prefix: 6,
                suffix: 5,
                length: 10
            })
        );
    }

    #[test]
    fn test_exact_fit_yields_single_candidate() {
        let matrix = SearchSpaceBuilder::new(6)
            .with_prefix(b"abc")
            .with_suffix(b"def")
            .build()
            .unwrap();

        assert_eq!(matrix.len(), 6);
        for (i, &b) in b"abcdef".iter().enumerate() {
            assert_eq!(matrix.position(i), Some(&[b][..]));
        }
        assert_eq!(matrix.candidate_count(), 1);
    }

    #[test]
    fn test_empty_charset_rejected() {
        let result = SearchSpaceBuilder::new(4).with_charset(&[]).build();
        assert_eq!(result, Err(SearchSpaceError::EmptyCharset));

        // Rejected even when anchors leave no free positions
        let result = SearchSpaceBuilder::new(2)
            .with_prefix(b"ab")
            .with_charset(&[])
            .build();
        assert_eq!(result, Err(SearchSpaceError::EmptyCharset));
    }

    #[test]
    fn test_hex_charset_substitution() {
        let matrix = SearchSpaceBuilder::new(2)
            .with_charset(HEX_LOWER)
            .build()
            .unwrap();

        assert_eq!(matrix.position(0), Some(&HEX_LOWER[..]));
        assert_eq!(matrix.position(1), Some(&HEX_LOWER[..]));
        assert_eq!(matrix.candidate_count(), 256);
    }

    #[test]
    fn test_charset_duplicates_preserved() {
        let matrix = SearchSpaceBuilder::new(2)
            .with_charset(b"aab")
            .build()
            .unwrap();

        assert_eq!(matrix.position(0), Some(&b"aab"[..]));
        assert_eq!(matrix.position(1), Some(&b"aab"[..]));
        assert_eq!(matrix.candidate_count(), 9);
    }

    #[test]
    fn test_zero_length_space() {
        let matrix = SearchSpaceBuilder::new(0).build().unwrap();

        assert_eq!(matrix.len(), 0);
        assert!(matrix.is_empty());
        assert_eq!(matrix.subspace_sizes(), Vec::<u64>::new());
        // The empty plaintext is the one candidate
        assert_eq!(matrix.candidate_count(), 1);
    }

    #[test]
    fn test_subspace_sizes() {
        let matrix = SearchSpaceBuilder::new(5)
            .with_prefix(b"ab")
            .with_suffix(b"z")
            .with_charset(b"0123")
            .build()
            .unwrap();

        // Set sizes are [1, 1, 4, 4, 1]; completions from each position
        assert_eq!(matrix.subspace_sizes(), vec![16, 16, 16, 4, 1]);
        assert_eq!(matrix.candidate_count(), 16);
    }

    #[test]
    fn test_subspace_sizes_saturate() {
        let full_range: Vec<u8> = (0..=255).collect();
        let matrix = SearchSpaceBuilder::new(10)
            .with_charset(&full_range)
            .build()
            .unwrap();

        // 256^8 already exceeds u64::MAX; the three widest products clamp
        assert_eq!(
            matrix.subspace_sizes(),
            vec![
                u64::MAX,
                u64::MAX,
                u64::MAX,
                72057594037927936,
                281474976710656,
                1099511627776,
                4294967296,
                16777216,
                65536,
                256,
            ]
        );
        assert_eq!(matrix.candidate_count(), u64::MAX);
    }
}
