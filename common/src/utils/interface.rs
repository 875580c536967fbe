use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;

use crate::network::address::{BoundAddress, select_appropriate_ipv4};

pub trait NetworkInterfaceExtension {
    fn bound_addresses(&self) -> Vec<BoundAddress>;
    fn appropriate_ipv4(&self) -> Option<Ipv4Addr>;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn bound_addresses(&self) -> Vec<BoundAddress> {
        self.ips.iter().map(BoundAddress::from).collect()
    }

    fn appropriate_ipv4(&self) -> Option<Ipv4Addr> {
        select_appropriate_ipv4(&self.bound_addresses())
    }
}
