//! The dead-end memo the search prunes against.

use std::collections::HashMap;

use crate::board::Board;
use crate::step::Step;

/// Bucket-key width used when no explicit width is configured.
pub(crate) const DEFAULT_BUCKET_DIGITS: u32 = 4;

/// A memo set of boards already proven to be dead ends, bucketed by a decimal truncation of the board digest.
///
/// The truncation is lossy by design, so membership is a two-tier check: find the bucket by truncated digest, then scan it for a structurally equal board.
/// Skipping the scan would prune viable branches on digest collisions; the scan without the buckets would make every lookup a full sweep.
/// The index only grows, and it lives exactly as long as one solve call.
pub struct DeadEndIndex<St: Step> {
    modulus: u32,
    buckets: HashMap<u32, Vec<Board<St>>>,
}

impl<St: Step> DeadEndIndex<St> {
    /// Construct an empty index whose bucket key is the board digest modulo `10^digits`.
    ///
    /// More digits mean more, shorter buckets; fewer digits the opposite. `digits` of 10 or more effectively leave the digest untruncated (only a digest of exactly `u32::MAX` still folds).
    pub fn with_digits(digits: u32) -> Self {
        Self {
            modulus: 10u32.checked_pow(digits).unwrap_or(u32::MAX),
            buckets: HashMap::new(),
        }
    }

    fn bucket_key(&self, board: &Board<St>) -> u32 {
        board.digest() % self.modulus
    }

    /// Whether `board` has been recorded as a dead end.
    ///
    /// `false` means the board was never recorded; digest collisions never cause a false `true`.
    pub fn contains(&self, board: &Board<St>) -> bool {
        match self.buckets.get(&self.bucket_key(board)) {
            None => false,
            Some(bucket) => bucket.iter().any(|recorded| recorded == board),
        }
    }

    /// Record `board` as a dead end.
    ///
    /// A duplicate record changes nothing but memory.
    pub fn record(&mut self, board: Board<St>) {
        let key = self.bucket_key(&board);
        self.buckets.entry(key).or_default().push(board);
    }

    /// The number of boards recorded.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether no board has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<St: Step> Default for DeadEndIndex<St> {
    fn default() -> Self {
        Self::with_digits(DEFAULT_BUCKET_DIGITS)
    }
}
