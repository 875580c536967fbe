use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use pnet::ipnetwork::IpNetwork;

/// A single address bound to a local interface, detached from the
/// platform representation it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundAddress {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    /// Non-IP address families (link layer, unparsed entries, ...).
    Other(String),
}

impl BoundAddress {
    /// Returns the 4-byte form of this address.
    ///
    /// Plain IPv4 addresses and IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`)
    /// qualify. IPv4-compatible (`::a.b.c.d`) and every other IPv6 address do not.
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            BoundAddress::Ipv4(v4) => Some(*v4),
            BoundAddress::Ipv6(v6) => v6.to_ipv4_mapped(),
            BoundAddress::Other(_) => None,
        }
    }

    /// Loopback is judged on the IPv4 form when one exists, so
    /// `::ffff:127.0.0.1` counts as loopback.
    pub fn is_loopback(&self) -> bool {
        match (self.to_ipv4(), self) {
            (Some(v4), _) => v4.is_loopback(),
            (None, BoundAddress::Ipv6(v6)) => v6.is_loopback(),
            _ => false,
        }
    }

    pub fn is_ip(&self) -> bool {
        !matches!(self, BoundAddress::Other(_))
    }
}

impl From<IpAddr> for BoundAddress {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => BoundAddress::Ipv4(v4),
            IpAddr::V6(v6) => BoundAddress::Ipv6(v6),
        }
    }
}

impl From<&IpNetwork> for BoundAddress {
    fn from(net: &IpNetwork) -> Self {
        BoundAddress::from(net.ip())
    }
}

impl fmt::Display for BoundAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundAddress::Ipv4(v4) => write!(f, "{v4}"),
            BoundAddress::Ipv6(v6) => write!(f, "{v6}"),
            BoundAddress::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// Picks the first IP, non-loopback, IPv4-representable address in the
/// order given. Order is never rearranged.
pub fn select_appropriate_ipv4<'a, I>(addrs: I) -> Option<Ipv4Addr>
where
    I: IntoIterator<Item = &'a BoundAddress>,
{
    addrs
        .into_iter()
        .filter(|addr| addr.is_ip() && !addr.is_loopback())
        .find_map(BoundAddress::to_ipv4)
}
