//! Summarized output unit.

use ipnet::IpNet;
use serde::Serialize;
use std::fmt;

/// One collapsed CIDR block, written as `{ "ip_address": "<cidr>" }`.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NetworkBlock {
    #[serde(rename = "ip_address")]
    pub network: IpNet,
}

impl From<IpNet> for NetworkBlock {
    fn from(network: IpNet) -> Self {
        NetworkBlock { network }
    }
}

impl fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.network)
    }
}
