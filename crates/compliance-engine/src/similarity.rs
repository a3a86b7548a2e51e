//! Gestalt pattern matching (Ratcliff/Obershelp) over character sequences
//!
//! The similarity of two strings is `2 * M / T`, where `M` is the number of
//! characters covered by matching blocks and `T` is the combined length of
//! both strings. Matching blocks are found by taking the longest common
//! contiguous block, then recursing into the unmatched pieces on each side.

use std::collections::HashMap;

/// Second sequences at least this long have their popular elements unindexed
const AUTOJUNK_MIN_LEN: usize = 200;

/// A contiguous run where `a[a_start..a_start + size] == b[b_start..b_start + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Compares two strings character by character
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    // Positions of each indexed character of `b`, ascending
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let b2j = index_positions(&b);
        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`
    ///
    /// Ties resolve to the block starting earliest in `a`, then earliest in `b`.
    /// A zero-size block means the ranges share nothing.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        let mut best = MatchBlock {
            a_start: alo,
            b_start: blo,
            size: 0,
        };

        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best.size {
                        best = MatchBlock {
                            a_start: i + 1 - k,
                            b_start: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular characters are not indexed, so grow the block through them
        while best.a_start > alo
            && best.b_start > blo
            && self.a[best.a_start - 1] == self.b[best.b_start - 1]
        {
            best.a_start -= 1;
            best.b_start -= 1;
            best.size += 1;
        }
        while best.a_start + best.size < ahi
            && best.b_start + best.size < bhi
            && self.a[best.a_start + best.size] == self.b[best.b_start + best.size]
        {
            best.size += 1;
        }

        best
    }

    /// All matching blocks, ordered by position, ending with a zero-size sentinel
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut blocks = Vec::new();
        let mut queue = vec![(0, la, 0, lb)];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            blocks.push(block);
            if alo < block.a_start && blo < block.b_start {
                queue.push((alo, block.a_start, blo, block.b_start));
            }
            let (a_end, b_end) = (block.a_start + block.size, block.b_start + block.size);
            if a_end < ahi && b_end < bhi {
                queue.push((a_end, ahi, b_end, bhi));
            }
        }
        blocks.sort_by_key(|block| (block.a_start, block.b_start));

        // Adjacent blocks are merged so each run is reported once
        let mut merged: Vec<MatchBlock> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match merged.last_mut() {
                Some(last)
                    if last.a_start + last.size == block.a_start
                        && last.b_start + last.size == block.b_start =>
                {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged.push(MatchBlock {
            a_start: la,
            b_start: lb,
            size: 0,
        });
        merged
    }

    /// Similarity in `[0.0, 1.0]`; two empty strings are identical
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matches: usize = self.matching_blocks().iter().map(|block| block.size).sum();
        2.0 * matches as f64 / total as f64
    }
}

/// Builds the position index for `b`, dropping popular characters of long sequences.
fn index_positions(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let n = b.len();
    if n >= AUTOJUNK_MIN_LEN {
        let popular_limit = n / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= popular_limit);
    }

    b2j
}

/// Similarity ratio between two strings
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Ratio stays within [0, 1]
        #[test]
        fn ratio_is_bounded(a in "[a-e ]{0,40}", b in "[a-e ]{0,40}") {
            let ratio = similarity_ratio(&a, &b);
            prop_assert!((0.0..=1.0).contains(&ratio));
        }

        /// Property: A string always matches itself perfectly
        #[test]
        fn self_similarity_is_one(a in ".{0,60}") {
            prop_assert_eq!(similarity_ratio(&a, &a), 1.0);
        }

        /// Property: Matching blocks never overlap and stay in bounds
        #[test]
        fn matching_blocks_are_ordered(a in "[a-c]{0,30}", b in "[a-c]{0,30}") {
            let matcher = SequenceMatcher::new(&a, &b);
            let blocks = matcher.matching_blocks();
            let (la, lb) = (a.chars().count(), b.chars().count());

            let mut a_pos = 0;
            let mut b_pos = 0;
            for block in &blocks {
                prop_assert!(block.a_start >= a_pos && block.b_start >= b_pos);
                prop_assert!(block.a_start + block.size <= la);
                prop_assert!(block.b_start + block.size <= lb);
                a_pos = block.a_start + block.size;
                b_pos = block.b_start + block.size;
            }
        }
    }
}
