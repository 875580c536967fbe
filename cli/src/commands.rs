use std::ffi::OsString;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser};
use gip_common::config::CheckOptions;

#[derive(Parser, Debug)]
#[command(name = "check-gip")]
#[command(about = "Checks that a hostname resolves to the address of a local interface.")]
pub struct CommandLine {
    /// Hostname expected to resolve to the interface address
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub host: String,

    /// Local interface whose address the hostname should resolve to
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub interface: String,

    /// Print diagnostics to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    pub fn options(&self) -> CheckOptions {
        CheckOptions::new(self.host.clone(), self.interface.clone())
    }
}
