/// Options for a single check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Hostname whose DNS answers should include the interface address.
    pub host: String,
    /// Name of the local interface to read the address from (e.g. `eth0`).
    pub interface: String,
}

impl CheckOptions {
    pub fn new(host: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            interface: interface.into(),
        }
    }
}
