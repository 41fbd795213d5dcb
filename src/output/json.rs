//! JSON report, selected with `--json`.

use serde::ser::SerializeStruct;
use serde::Serialize;

use super::terminal::{binary, dotted};
use crate::models::SubnetInfo;

impl Serialize for SubnetInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut s = serializer.serialize_struct("SubnetInfo", 11)?;
        s.serialize_field("cidr", &self.cidr())?;
        s.serialize_field("prefix_len", &self.prefix_len)?;
        s.serialize_field("address", &dotted(self.address))?;
        s.serialize_field("address_binary", &binary(self.address))?;
        s.serialize_field("mask", &dotted(self.mask))?;
        s.serialize_field("mask_binary", &binary(self.mask))?;
        s.serialize_field("network", &dotted(self.network))?;
        s.serialize_field("network_binary", &binary(self.network))?;
        s.serialize_field("host", &dotted(self.host))?;
        s.serialize_field("host_binary", &binary(self.host))?;
        s.serialize_field("usable_hosts", &self.usable_hosts)?;
        s.end()
    }
}

/// Pretty printed JSON with a trailing newline.
pub fn format_json(info: &SubnetInfo) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(info)?;
    Ok(format!("{json}\n"))
}
