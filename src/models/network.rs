//! Network prefix utilities shared by IPv4 and IPv6.
//!
//! [`Prefix`] exposes a network as an inclusive range of integers so the
//! collapse code can be written once for both families.

use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// A CIDR prefix of one address family.
pub trait Prefix: Copy + Ord + fmt::Display + fmt::Debug {
    /// Address width in bits (32 or 128).
    const MAX_LENGTH: u8;

    /// Lowest (network) address as an integer.
    fn lo(&self) -> u128;

    /// Highest (broadcast) address as an integer.
    fn hi(&self) -> u128;

    /// Host prefix (/32 or /128) for `addr`.
    fn host(addr: u128) -> Self;

    /// The enclosing prefix one bit shorter, `None` at /0.
    fn parent(&self) -> Option<Self>;
}

impl Prefix for Ipv4Net {
    const MAX_LENGTH: u8 = 32;

    fn lo(&self) -> u128 {
        u32::from(self.network()) as u128
    }

    fn hi(&self) -> u128 {
        u32::from(self.broadcast()) as u128
    }

    fn host(addr: u128) -> Self {
        Ipv4Net::from(Ipv4Addr::from(addr as u32))
    }

    fn parent(&self) -> Option<Self> {
        self.supernet()
    }
}

impl Prefix for Ipv6Net {
    const MAX_LENGTH: u8 = 128;

    fn lo(&self) -> u128 {
        u128::from(self.network())
    }

    fn hi(&self) -> u128 {
        u128::from(self.broadcast())
    }

    fn host(addr: u128) -> Self {
        Ipv6Net::from(Ipv6Addr::from(addr))
    }

    fn parent(&self) -> Option<Self> {
        self.supernet()
    }
}

/// Parse an address or CIDR string into its network.
///
/// A bare address becomes a host prefix. Host bits after the prefix are
/// cleared, so `10.1.1.5/24` gives `10.1.1.0/24`.
///
/// # Examples
/// ```
/// use zscaler_egress_ips::models::parse_network;
/// assert_eq!(parse_network(" 10.1.1.5/24").unwrap().to_string(), "10.1.1.0/24");
/// assert_eq!(parse_network("10.0.0.5").unwrap().to_string(), "10.0.0.5/32");
/// ```
pub fn parse_network(raw: &str) -> Result<IpNet, String> {
    let raw = raw.trim();
    if raw.contains('/') {
        raw.parse::<IpNet>()
            .map(|net| net.trunc())
            .map_err(|e| e.to_string())
    } else {
        raw.parse::<IpAddr>()
            .map(IpNet::from)
            .map_err(|e| e.to_string())
    }
}
