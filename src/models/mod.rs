//! Domain models for CIDR inspection.
//!
//! - [`CidrInput`] - validated `a.b.c.d/n` input
//! - [`SubnetInfo`] - mask, network prefix, host prefix and usable hosts
//! - [`CidrError`] - format and range validation errors

mod error;
mod ipv4;
mod subnet_info;

// Re-export public types
pub use error::{
    CidrError, ErrorKind, INVALID_CIDR, INVALID_IP_ADDRESS, IP_OUT_OF_RANGE, MASK_OUT_OF_RANGE,
};
pub use ipv4::{
    get_cidr_mask, pack_octets, parse_cidr, unpack_octets, CidrInput, MAX_LENGTH, MIN_LENGTH,
};
pub use subnet_info::{usable_hosts, SubnetInfo};
