use std::net::IpAddr;

use async_trait::async_trait;
use tokio::net::lookup_host;
use tracing::debug;

use crate::error::{CheckError, Result};

/// Resolves a hostname to its addresses, in the order the resolver returns them.
#[async_trait]
pub trait HostResolver {
    async fn lookup(&self, host: &str) -> anyhow::Result<Vec<IpAddr>>;
}

/// The operating system resolver (`getaddrinfo` behind tokio's blocking pool).
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> anyhow::Result<Vec<IpAddr>> {
        let addrs = lookup_host((host, 0)).await?;
        Ok(addrs.map(|socket_addr| socket_addr.ip()).collect())
    }
}

/// Looks `host` up once and renders every answer in its native string form.
///
/// An empty answer counts as a failed lookup. There are no retries.
pub async fn resolve_host<R>(resolver: &R, host: &str) -> Result<Vec<String>>
where
    R: HostResolver + ?Sized,
{
    let ips = resolver.lookup(host).await.map_err(|err| {
        debug!("lookup of {host} failed: {err:#}");
        CheckError::Resolution(host.to_string())
    })?;

    if ips.is_empty() {
        debug!("lookup of {host} returned no addresses");
        return Err(CheckError::Resolution(host.to_string()));
    }

    let rendered: Vec<String> = ips.iter().map(|ip| render_ip(*ip)).collect();
    debug!("{host} resolved to {}", rendered.join(", "));
    Ok(rendered)
}

/// IPv4-mapped IPv6 answers render dotted, the same form interface
/// addresses are reported in.
pub fn render_ip(ip: IpAddr) -> String {
    ip.to_canonical().to_string()
}
