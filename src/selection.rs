//! Pick two distinct blocks of equal pixel width.
//!
//! Blocks are bucketed by width first. Only buckets with two or more members
//! can produce a pair, and a bucket is chosen with weight equal to the number of
//! ordered pairs it holds, which makes every eligible ordered pair equally likely.

use std::collections::BTreeMap;

use rand::Rng;

use crate::error::DemoError;
use crate::grid::{Block, BlockId};

/// Block ids keyed by pixel width, ascending.
pub fn group_by_width(blocks: &[Block], block_length: u32) -> BTreeMap<u64, Vec<BlockId>> {
    let mut groups: BTreeMap<u64, Vec<BlockId>> = BTreeMap::new();
    for b in blocks {
        let width = b.size as u64 * block_length as u64;
        groups.entry(width).or_default().push(b.id);
    }
    groups
}

/// Returns `(moving, target)`. The two ids differ and share a width.
pub fn choose_pair<R: Rng>(blocks: &[Block], block_length: u32, rng: &mut R) -> Result<(BlockId, BlockId), DemoError> {
    let eligible: Vec<Vec<BlockId>> = group_by_width(blocks, block_length)
        .into_values()
        .filter(|ids| ids.len() >= 2)
        .collect();
    let total: usize = eligible.iter().map(|ids| ids.len() * (ids.len() - 1)).sum();
    if total == 0 {
        return Err(DemoError::NoEligiblePair);
    }

    let mut ticket = rng.gen_range(0..total);
    for ids in &eligible {
        let pairs = ids.len() * (ids.len() - 1);
        if ticket >= pairs {
            ticket -= pairs;
            continue;
        }
        let n = ids.len();
        let first = rng.gen_range(0..n);
        let mut second = rng.gen_range(0..n - 1);
        if second >= first {
            second += 1; // skip over `first`
        }
        return Ok((ids[first], ids[second]));
    }
    Err(DemoError::NoEligiblePair)
}
