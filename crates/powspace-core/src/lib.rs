//! Input preparation for brute-force proof-of-work searches.
//!
//! This crate builds the two inputs a hash search engine needs:
//! - Masked target templates for position-wise hash comparison
//! - Per-position candidate byte sets describing the plaintext search space
//!
//! The engine itself — hashing, enumeration order, parallel scheduling —
//! lives outside this crate and consumes these values. Both builders are
//! pure functions over caller-owned buffers; calls are independent and can
//! run from any number of threads without coordination.
//!
//! A [`TargetTemplate`] and a [`CandidateMatrix`] are built independently,
//! and nothing ties one to the other. Callers that anchor both on the same
//! prefix or suffix are responsible for passing consistent parameters to
//! each builder.

pub mod search_space;
pub mod target;

pub use search_space::{CandidateMatrix, SearchSpaceBuilder, SearchSpaceError, ALPHANUMERIC};
pub use target::{prefix_target, suffix_target, TargetError, TargetTemplate};
