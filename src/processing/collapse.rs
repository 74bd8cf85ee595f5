//! Collapse a set of prefixes of one address family into the minimal list of
//! CIDR blocks covering exactly the same addresses.
//!
//! Works in two passes:
//! 1. sort by (network, prefix length) and merge overlapping or touching
//!    prefixes into inclusive address ranges,
//! 2. cut every range back into the widest aligned blocks, left to right.
//!
//! The result is sorted ascending, non-overlapping, and no two blocks can be
//! joined into their common parent.

use crate::models::Prefix;

/// Collapse `nets` into the minimal covering CIDR list.
pub fn collapse<P: Prefix>(nets: &[P]) -> Vec<P> {
    let ranges = merge_ranges(nets);
    let mut blocks = Vec::with_capacity(ranges.len());
    for (lo, hi) in ranges {
        split_range(lo, hi, &mut blocks);
    }
    log::debug!(
        "collapse /{}: {} prefixes -> {} blocks",
        P::MAX_LENGTH,
        nets.len(),
        blocks.len()
    );
    blocks
}

/// Merge prefixes into sorted, disjoint, non-adjacent inclusive ranges.
fn merge_ranges<P: Prefix>(nets: &[P]) -> Vec<(u128, u128)> {
    let mut sorted: Vec<P> = nets.to_vec();
    sorted.sort_by_key(|n| (n.lo(), std::cmp::Reverse(n.hi())));

    let mut ranges: Vec<(u128, u128)> = Vec::new();
    for net in sorted {
        match ranges.last_mut() {
            // Overlapping, contained, or directly following the current range
            Some((_, hi)) if net.lo() <= hi.saturating_add(1) => {
                *hi = (*hi).max(net.hi());
            }
            _ => ranges.push((net.lo(), net.hi())),
        }
    }
    ranges
}

/// Cut the inclusive range `lo..=hi` into aligned CIDR blocks.
fn split_range<P: Prefix>(mut lo: u128, hi: u128, blocks: &mut Vec<P>) {
    loop {
        let block = widest_block::<P>(lo, hi);
        blocks.push(block);
        let end = block.hi();
        if end >= hi {
            break;
        }
        lo = end + 1;
    }
}

/// Largest block starting at `lo` that does not reach past `hi`.
fn widest_block<P: Prefix>(lo: u128, hi: u128) -> P {
    let mut block = P::host(lo);
    while let Some(parent) = block.parent() {
        if parent.lo() != lo || parent.hi() > hi {
            break;
        }
        block = parent;
    }
    block
}
