//! IPv4 CIDR parsing and mask utilities.
//!
//! Provides [`CidrInput`], the validated form of an `a.b.c.d/n` string,
//! along with the bit helpers used to derive subnet values from it.

use lazy_static::lazy_static;
use regex::Regex;
use std::num::IntErrorKind;
use std::str::FromStr;

use super::error::{
    CidrError, INVALID_CIDR, INVALID_IP_ADDRESS, IP_OUT_OF_RANGE, MASK_OUT_OF_RANGE,
};

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Shortest prefix length accepted on input.
pub const MIN_LENGTH: u8 = 1;

lazy_static! {
    // Exactly one '/' separating address from prefix length.
    static ref CIDR_RE: Regex =
        Regex::new(r"^(?P<addr>[^/]*)/(?P<len>[^/]*)$").expect("Invalid Regex?");
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] are treated as 32.
///
/// # Examples
/// ```
/// use ipv4_cidr_info::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(32), 0xFFFFFFFF);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    // shifting by 32 overflows, that case is the empty mask
    u32::MAX.checked_shl(u32::from(right_len)).unwrap_or(0)
}

/// Pack four octets into a u32, first octet most significant.
pub fn pack_octets(octets: [u8; 4]) -> u32 {
    u32::from_be_bytes(octets)
}

/// Inverse of [`pack_octets`].
pub fn unpack_octets(bits: u32) -> [u8; 4] {
    bits.to_be_bytes()
}

/// A CIDR string that passed validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CidrInput {
    octets: [u8; 4],
    prefix_len: u8,
}

impl CidrInput {
    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// Prefix length, always within `1..=32`.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }
}

impl FromStr for CidrInput {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cidr(s)
    }
}

impl std::fmt::Display for CidrInput {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}/{}", self.prefix_len)
    }
}

/// Validate a CIDR string such as `"192.168.1.0/24"`.
///
/// Checks run in order: the `/` separator, the octet count, each octet's
/// value, the prefix length, then the notation of octets and prefix. The
/// first failure is returned.
pub fn parse_cidr(cidr: &str) -> Result<CidrInput, CidrError> {
    log::trace!("parse_cidr({cidr:?})");

    let caps = CIDR_RE.captures(cidr).ok_or_else(|| {
        log::debug!("no single '/' in {cidr:?}");
        CidrError::format(INVALID_CIDR)
    })?;
    let addr_part = &caps["addr"];
    let len_part = &caps["len"];

    let segments: Vec<&str> = addr_part.split('.').collect();
    if segments.len() != 4 {
        log::debug!("expected 4 octets, got {} in {addr_part:?}", segments.len());
        return Err(CidrError::format(INVALID_IP_ADDRESS));
    }

    let mut octets = [0u8; 4];
    for (octet, segment) in octets.iter_mut().zip(&segments) {
        *octet = parse_octet(segment)?;
    }

    let prefix_len = parse_prefix_len(len_part)?;

    // values are in range, now reject signs, padding and leading zeros
    if let Some(segment) = segments.iter().find(|s| !is_plain_octet(s)) {
        log::debug!("octet {segment:?} is not plain decimal");
        return Err(CidrError::format(INVALID_IP_ADDRESS));
    }
    if !is_decimal(len_part) {
        log::debug!("prefix length {len_part:?} is not plain decimal");
        return Err(CidrError::range(MASK_OUT_OF_RANGE));
    }

    Ok(CidrInput { octets, prefix_len })
}

/// 1-3 ASCII digits, no leading zero unless the octet is `0`.
fn is_plain_octet(segment: &str) -> bool {
    (1..=3).contains(&segment.len())
        && is_decimal(segment)
        && (segment == "0" || !segment.starts_with('0'))
}

fn is_decimal(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

fn parse_octet(segment: &str) -> Result<u8, CidrError> {
    match segment.trim().parse::<i64>() {
        Ok(value) => u8::try_from(value).map_err(|_| {
            log::debug!("octet {value} outside 0-255");
            CidrError::range(IP_OUT_OF_RANGE)
        }),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(CidrError::range(IP_OUT_OF_RANGE))
            }
            _ => {
                log::debug!("octet {segment:?} is not a number: {e}");
                Err(CidrError::format(INVALID_IP_ADDRESS))
            }
        },
    }
}

fn parse_prefix_len(segment: &str) -> Result<u8, CidrError> {
    let len = segment
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|len| (i64::from(MIN_LENGTH)..=i64::from(MAX_LENGTH)).contains(len))
        .ok_or_else(|| {
            log::debug!("prefix length {segment:?} outside {MIN_LENGTH}-{MAX_LENGTH}");
            CidrError::range(MASK_OUT_OF_RANGE)
        })?;
    // range checked above
    Ok(len as u8)
}
