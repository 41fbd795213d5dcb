//! Inspect an IPv4 address given in CIDR notation: subnet mask, network
//! prefix, host prefix and usable host count.

pub mod cli;
pub mod logging;
pub mod models;
pub mod output;

use std::error::Error;

use cli::Options;
use models::SubnetInfo;

/// Build the full stdout text for one CIDR. Nothing is printed here, so a
/// validation error leaves stdout untouched.
pub fn run(opts: &Options) -> Result<String, Box<dyn Error>> {
    log::debug!("#Start run({})", opts.cidr);
    if !opts.extra.is_empty() {
        log::debug!("ignoring extra arguments {:?}", opts.extra);
    }
    let info = SubnetInfo::from_cidr(&opts.cidr)?;
    let out = if opts.json {
        output::format_json(&info)?
    } else {
        output::format_report(&info)
    };
    Ok(out)
}
