//! Derived subnet values for a validated CIDR.

use super::error::CidrError;
use super::ipv4::{get_cidr_mask, pack_octets, parse_cidr, CidrInput, MAX_LENGTH};

/// Everything printed for one CIDR. Built once, never mutated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    /// The address as given, first octet most significant.
    pub address: u32,
    /// Prefix length (1-32).
    pub prefix_len: u8,
    /// High `prefix_len` bits set.
    pub mask: u32,
    /// `address & mask`
    pub network: u32,
    /// `address & !mask`
    pub host: u32,
    /// Addresses left after the network and broadcast addresses.
    pub usable_hosts: u32,
}

/// Number of usable host addresses for a prefix length.
///
/// /31 and /32 have none.
pub fn usable_hosts(prefix_len: u8) -> u32 {
    let host_bits = MAX_LENGTH - prefix_len.min(MAX_LENGTH);
    if host_bits == 0 {
        return 0;
    }
    // /0 overflows the shift, 2^32 - 2 is u32::MAX - 1
    match 1u32.checked_shl(u32::from(host_bits)) {
        Some(total) => total.saturating_sub(2),
        None => u32::MAX - 1,
    }
}

impl SubnetInfo {
    pub fn from_input(input: &CidrInput) -> SubnetInfo {
        let address = pack_octets(input.octets());
        let prefix_len = input.prefix_len();
        let mask = get_cidr_mask(prefix_len);
        let info = SubnetInfo {
            address,
            prefix_len,
            mask,
            network: address & mask,
            host: address & !mask,
            usable_hosts: usable_hosts(prefix_len),
        };
        log::debug!(
            "extracted {input}: mask={:#010x} network={:#010x} host={:#010x} usable={}",
            info.mask,
            info.network,
            info.host,
            info.usable_hosts
        );
        info
    }

    /// Parse and extract in one step.
    pub fn from_cidr(cidr: &str) -> Result<SubnetInfo, CidrError> {
        let input = parse_cidr(cidr)?;
        Ok(SubnetInfo::from_input(&input))
    }

    pub fn cidr(&self) -> String {
        format!("{}/{}", std::net::Ipv4Addr::from(self.address), self.prefix_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::unpack_octets;

    #[test]
    fn test_usable_hosts() {
        for n in 1..=30u8 {
            assert_eq!(usable_hosts(n), (1u32 << (32 - n)) - 2, "n={n}");
        }
        assert_eq!(usable_hosts(1), 2147483646);
        assert_eq!(usable_hosts(24), 254);
        assert_eq!(usable_hosts(30), 2);
        assert_eq!(usable_hosts(31), 0);
        assert_eq!(usable_hosts(32), 0);
    }

    #[test]
    fn test_from_cidr_class_c() {
        let info = SubnetInfo::from_cidr("192.168.1.0/24").unwrap();
        assert_eq!(unpack_octets(info.address), [192, 168, 1, 0]);
        assert_eq!(unpack_octets(info.mask), [255, 255, 255, 0]);
        assert_eq!(unpack_octets(info.network), [192, 168, 1, 0]);
        assert_eq!(unpack_octets(info.host), [0, 0, 0, 0]);
        assert_eq!(info.usable_hosts, 254);
        assert_eq!(info.cidr(), "192.168.1.0/24");
    }

    #[test]
    fn test_from_cidr_class_a_host() {
        let info = SubnetInfo::from_cidr("10.0.0.5/8").unwrap();
        assert_eq!(unpack_octets(info.mask), [255, 0, 0, 0]);
        assert_eq!(unpack_octets(info.network), [10, 0, 0, 0]);
        assert_eq!(unpack_octets(info.host), [0, 0, 0, 5]);
        assert_eq!(info.usable_hosts, 16777214);
    }

    #[test]
    fn test_from_cidr_small_subnets() {
        assert_eq!(SubnetInfo::from_cidr("172.16.5.4/30").unwrap().usable_hosts, 2);

        let info = SubnetInfo::from_cidr("1.2.3.4/32").unwrap();
        assert_eq!(info.mask, u32::MAX);
        assert_eq!(info.network, info.address);
        assert_eq!(info.host, 0);
        assert_eq!(info.usable_hosts, 0);
    }

    #[test]
    fn test_from_cidr_error() {
        assert!(SubnetInfo::from_cidr("256.1.1.1/24").is_err());
        assert!(SubnetInfo::from_cidr("10.0.0.1").is_err());
    }

    #[test]
    fn test_prefixes_reconstruct_address() {
        let addresses = ["0.0.0.0", "255.255.255.255", "192.168.1.77", "10.20.30.40", "128.0.0.1"];
        for addr in addresses {
            for n in 1..=32u8 {
                let info = SubnetInfo::from_cidr(&format!("{addr}/{n}")).unwrap();
                assert_eq!(info.network | info.host, info.address, "{addr}/{n}");
                assert_eq!(info.network & info.host, 0, "{addr}/{n}");
                assert_eq!(info.address & info.mask, info.network, "{addr}/{n}");
            }
        }
    }
}
