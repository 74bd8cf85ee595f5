//! Summarize ready address records into minimal CIDR blocks.
//!
//! IPv4 and IPv6 are collapsed separately and returned v4 first.

use super::collapse::collapse;
use crate::error::RecordParseWarning;
use crate::models::{parse_network, AddressRecord, NetworkBlock};
use colored::Colorize;
use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use itertools::{Either, Itertools};

/// Outcome of a summarization run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Collapsed blocks, IPv4 then IPv6, each ascending.
    pub blocks: Vec<NetworkBlock>,
    /// Ready records that were dropped because their address did not parse.
    pub skipped: Vec<RecordParseWarning>,
    /// Number of records ignored for not being ready.
    pub not_ready: usize,
}

/// Collapse the addresses of all ready records.
///
/// Never fails, bad addresses are logged and left out.
pub fn summarize(records: &[AddressRecord]) -> Vec<NetworkBlock> {
    summarize_with_report(records).blocks
}

/// Same as [`summarize`] but also returns what was left out.
pub fn summarize_with_report(records: &[AddressRecord]) -> Summary {
    let mut summary = Summary::default();
    let mut nets: Vec<IpNet> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if !record.ready {
            summary.not_ready += 1;
            continue;
        }
        match parse_record(index, record) {
            Ok(net) => nets.push(net),
            Err(warning) => {
                log::warn!("{} {}", "Skipping".yellow(), warning);
                summary.skipped.push(warning);
            }
        }
    }

    let (ipv4, ipv6): (Vec<Ipv4Net>, Vec<Ipv6Net>) =
        nets.into_iter().partition_map(|net| match net {
            IpNet::V4(net) => Either::Left(net),
            IpNet::V6(net) => Either::Right(net),
        });

    let collapsed_v4 = collapse(&ipv4);
    let collapsed_v6 = collapse(&ipv6);
    log::info!(
        "Summarized {} ready records: ipv4 {} -> {}, ipv6 {} -> {}, skipped {}, not ready {}",
        ipv4.len() + ipv6.len(),
        ipv4.len(),
        collapsed_v4.len(),
        ipv6.len(),
        collapsed_v6.len(),
        summary.skipped.len(),
        summary.not_ready,
    );

    summary.blocks = collapsed_v4
        .into_iter()
        .map(IpNet::V4)
        .chain(collapsed_v6.into_iter().map(IpNet::V6))
        .map(NetworkBlock::from)
        .collect();
    summary
}

fn parse_record(index: usize, record: &AddressRecord) -> Result<IpNet, RecordParseWarning> {
    let raw = match record.address.as_deref() {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Err(RecordParseWarning::MissingAddress { index }),
    };
    parse_network(raw).map_err(|reason| RecordParseWarning::InvalidAddress {
        index,
        raw: raw.to_string(),
        reason,
    })
}
