use gip_common::network::address::{BoundAddress, select_appropriate_ipv4};
use gip_common::utils::interface::NetworkInterfaceExtension;
use pnet::datalink::{self, NetworkInterface};
use tracing::debug;

use crate::error::{CheckError, Result};

/// Read access to the local interface table.
pub trait InterfaceRepository {
    /// All interfaces, in the order the operating system reports them.
    fn get_network_interfaces(&self) -> anyhow::Result<Vec<NetworkInterface>>;

    /// Addresses bound to `interface`, in the order the operating system reports them.
    fn get_bound_addresses(&self, interface: &NetworkInterface) -> anyhow::Result<Vec<BoundAddress>> {
        Ok(interface.bound_addresses())
    }
}

/// The live interface table, read through `pnet::datalink`.
pub struct SystemInterfaces;

impl InterfaceRepository for SystemInterfaces {
    fn get_network_interfaces(&self) -> anyhow::Result<Vec<NetworkInterface>> {
        let interfaces = datalink::interfaces();
        // pnet swallows getifaddrs failures and hands back an empty table.
        if interfaces.is_empty() {
            anyhow::bail!("interface table is empty");
        }
        Ok(interfaces)
    }
}

/// Returns the IPv4 address `name` should be reachable on: the first
/// non-loopback IPv4-representable address bound to it.
pub fn address_for_interface<R>(repo: &R, name: &str) -> Result<String>
where
    R: InterfaceRepository + ?Sized,
{
    let interfaces = repo.get_network_interfaces().map_err(|err| {
        debug!("interface enumeration failed: {err:#}");
        CheckError::InterfaceEnumeration
    })?;

    let interface = interfaces
        .iter()
        .find(|i| i.name == name)
        .ok_or_else(|| CheckError::InterfaceNotFound(name.to_string()))?;

    let addrs = repo.get_bound_addresses(interface).map_err(|err| {
        debug!("address enumeration on {name} failed: {err:#}");
        CheckError::InterfaceAddresses(interface.name.clone())
    })?;
    debug!(
        "{name} carries {}",
        addrs.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    );

    select_appropriate_ipv4(&addrs)
        .map(|v4| v4.to_string())
        .ok_or_else(|| CheckError::NoAppropriateAddress(name.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
