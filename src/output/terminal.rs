//! Plain text report.

use itertools::Itertools;

use crate::models::{unpack_octets, SubnetInfo};

/// Dotted-decimal form, e.g. `192.168.1.0`.
pub fn dotted(bits: u32) -> String {
    unpack_octets(bits).iter().join(".")
}

/// Each octet as 8 zero-padded bits, space separated.
///
/// # Examples
/// ```
/// use ipv4_cidr_info::output::binary;
/// assert_eq!(binary(0xC0A80100), "11000000 10101000 00000001 00000000");
/// ```
pub fn binary(bits: u32) -> String {
    unpack_octets(bits)
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(" ")
}

fn report_line(label: &str, bits: u32) -> String {
    format!("{label}: {} ({})", dotted(bits), binary(bits))
}

/// The five line report, each line newline terminated.
pub fn format_report(info: &SubnetInfo) -> String {
    let lines = [
        report_line("IP Address", info.address),
        report_line("Subnet Mask", info.mask),
        report_line("Network Prefix", info.network),
        report_line("Host Prefix", info.host),
        format!("Usable Hosts: {}", info.usable_hosts),
    ];
    lines.iter().map(|line| format!("{line}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted() {
        assert_eq!(dotted(0), "0.0.0.0");
        assert_eq!(dotted(u32::MAX), "255.255.255.255");
        assert_eq!(dotted(0x0A000005), "10.0.0.5");
    }

    #[test]
    fn test_binary() {
        assert_eq!(binary(0), "00000000 00000000 00000000 00000000");
        assert_eq!(binary(0xFFFFFF00), "11111111 11111111 11111111 00000000");
        assert_eq!(binary(0x01020304), "00000001 00000010 00000011 00000100");
    }

    #[test]
    fn test_format_report_class_c() {
        let info = SubnetInfo::from_cidr("192.168.1.0/24").unwrap();
        let expected = "\
IP Address: 192.168.1.0 (11000000 10101000 00000001 00000000)
Subnet Mask: 255.255.255.0 (11111111 11111111 11111111 00000000)
Network Prefix: 192.168.1.0 (11000000 10101000 00000001 00000000)
Host Prefix: 0.0.0.0 (00000000 00000000 00000000 00000000)
Usable Hosts: 254
";
        assert_eq!(format_report(&info), expected);
    }

    #[test]
    fn test_format_report_host_32() {
        let info = SubnetInfo::from_cidr("1.2.3.4/32").unwrap();
        let report = format_report(&info);
        assert_eq!(report.lines().count(), 5);
        assert!(report.contains("Subnet Mask: 255.255.255.255 (11111111 11111111 11111111 11111111)"));
        assert!(report.ends_with("Usable Hosts: 0\n"));
    }
}
