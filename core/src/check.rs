use gip_common::check::Checker;
use gip_common::config::CheckOptions;
use tracing::{debug, info};

use crate::resolver::{self, HostResolver};
use crate::system::{self, InterfaceRepository};

/// Short name the result line is prefixed with.
pub const CHECK_NAME: &str = "GIP";

/// Runs the reachability check once: resolve the host, read the interface
/// address, compare. Every outcome is a result; nothing is retried.
pub async fn run_check<R, I>(opts: &CheckOptions, resolver: &R, interfaces: &I) -> Checker
where
    R: HostResolver + ?Sized,
    I: InterfaceRepository + ?Sized,
{
    let resolved = match resolver::resolve_host(resolver, &opts.host).await {
        Ok(addrs) => addrs,
        Err(err) => return Checker::critical(err.to_string()).with_name(CHECK_NAME),
    };

    let interface_addr = match system::address_for_interface(interfaces, &opts.interface) {
        Ok(addr) => addr,
        Err(err) => return Checker::critical(err.to_string()).with_name(CHECK_NAME),
    };
    debug!("'{}' is bound to {interface_addr}", opts.interface);

    compare(opts, &resolved, &interface_addr).with_name(CHECK_NAME)
}

/// Exact string comparison: `010.0.0.1` and `10.0.0.1` do not match.
pub fn compare(opts: &CheckOptions, resolved: &[String], interface_addr: &str) -> Checker {
    if resolved.iter().any(|addr| addr == interface_addr) {
        info!("{} answers with {interface_addr}", opts.host);
        Checker::ok(format!(
            "Can reach '{}' ({}) with {}",
            opts.interface, interface_addr, opts.host
        ))
    } else {
        Checker::critical(format!(
            "Can not reach '{}' ({}) with {}",
            opts.interface, interface_addr, opts.host
        ))
    }
}
