//! Firewall argument conversion — wire shapes to validated API requests.
//!
//! Conversion is best-effort by contract: a malformed network range or an
//! unrecognized apply-target is dropped from the outgoing request with a
//! warn log, and the call proceeds with the remaining entries. A single bad
//! entry never fails the whole call.

use crate::client::resources::{
    FirewallResource, FirewallRule, LabelSelectorTarget, ServerTarget,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use std::net::IpAddr;

/// Wire-format network range: address string plus base64-encoded mask.
#[derive(Debug, Clone, Deserialize)]
pub struct IpNetArg {
    /// Network number, e.g. `10.0.0.0`.
    pub ip: String,
    /// Network mask bytes, base64, e.g. `////AA==` for 255.255.255.0.
    pub mask: String,
}

/// Wire-format firewall rule.
#[derive(Debug, Clone, Deserialize)]
pub struct FirewallRuleArg {
    pub direction: String,
    #[serde(default)]
    pub source_ips: Vec<IpNetArg>,
    #[serde(default)]
    pub destination_ips: Vec<IpNetArg>,
    pub protocol: String,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Wire-format apply-target. The tag is a closed set with an explicit
/// catch-all, so dropping an unrecognized tag is a visible branch rather
/// than an implicit fallthrough.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApplyTargetArg {
    Server {
        #[serde(default)]
        server: Option<ServerTargetArg>,
    },
    LabelSelector {
        #[serde(default)]
        label_selector: Option<LabelSelectorArg>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerTargetArg {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelSelectorArg {
    pub selector: String,
}

/// A validated network range: parsed address plus raw mask bytes of
/// exactly 4 (v4) or 16 (v6) bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRange {
    pub addr: IpAddr,
    pub mask: Vec<u8>,
}

impl NetworkRange {
    /// Prefix length: number of leading one bits in the mask.
    pub fn prefix_len(&self) -> u8 {
        let mut len = 0u8;
        for byte in &self.mask {
            let ones = byte.leading_ones() as u8;
            len += ones;
            if ones < 8 {
                break;
            }
        }
        len
    }

    /// CIDR notation used by the cloud API, e.g. `10.0.0.0/8`.
    pub fn to_cidr(&self) -> String {
        format!("{}/{}", self.addr, self.prefix_len())
    }
}

/// A canonical netmask is leading one bits followed by zero bits. Anything
/// else has no CIDR representation.
fn is_contiguous_mask(mask: &[u8]) -> bool {
    let mut ones_ended = false;
    for byte in mask {
        if ones_ended && *byte != 0 {
            return false;
        }
        if *byte != 0xff {
            if byte.leading_ones() + byte.trailing_zeros() != 8 {
                return false;
            }
            ones_ended = true;
        }
    }
    true
}

/// Convert wire ranges, independently validating each pair. Invalid
/// entries are logged with the offending raw value and skipped; the output
/// preserves the relative order of the valid entries.
pub fn convert_ip_nets(ipnets: &[IpNetArg]) -> Vec<NetworkRange> {
    let mut converted = Vec::with_capacity(ipnets.len());

    for ipnet in ipnets {
        let addr: IpAddr = match ipnet.ip.parse() {
            Ok(addr) => addr,
            Err(_) => {
                tracing::warn!(ip = %ipnet.ip, "skipping range: invalid IP");
                continue;
            }
        };

        let mask = match BASE64.decode(&ipnet.mask) {
            Ok(bytes) => bytes,
            Err(_) => {
                tracing::warn!(mask = %ipnet.mask, "skipping range: mask is not valid base64");
                continue;
            }
        };

        if mask.len() != 4 && mask.len() != 16 {
            tracing::warn!(
                mask = %ipnet.mask,
                len = mask.len(),
                "skipping range: mask must be 4 or 16 bytes"
            );
            continue;
        }

        // A non-contiguous mask would render as a wider prefix than the
        // caller asked for, so it is skipped rather than widened.
        if !is_contiguous_mask(&mask) {
            tracing::warn!(mask = %ipnet.mask, "skipping range: mask is not a canonical netmask");
            continue;
        }

        converted.push(NetworkRange { addr, mask });
    }

    converted
}

/// Convert wire rules to API rules. Direction, protocol, port and
/// description pass through verbatim; both IP lists go through
/// [`convert_ip_nets`].
pub fn convert_rules(rules: &[FirewallRuleArg]) -> Vec<FirewallRule> {
    rules
        .iter()
        .map(|rule| FirewallRule {
            direction: rule.direction.clone(),
            source_ips: convert_ip_nets(&rule.source_ips)
                .iter()
                .map(NetworkRange::to_cidr)
                .collect(),
            destination_ips: convert_ip_nets(&rule.destination_ips)
                .iter()
                .map(NetworkRange::to_cidr)
                .collect(),
            protocol: rule.protocol.clone(),
            port: rule.port.clone(),
            description: rule.description.clone(),
        })
        .collect()
}

/// Convert apply-targets, dropping partial or unrecognized entries. A
/// `server` target needs its server sub-record, a `label_selector` target
/// needs its selector; nothing ambiguous is passed through.
pub fn convert_apply_to(targets: &[ApplyTargetArg]) -> Vec<FirewallResource> {
    let mut converted = Vec::with_capacity(targets.len());

    for target in targets {
        match target {
            ApplyTargetArg::Server { server: Some(server) } => {
                converted.push(FirewallResource::Server {
                    server: ServerTarget { id: server.id },
                });
            }
            ApplyTargetArg::Server { server: None } => {
                tracing::warn!("skipping apply-target: 'server' entry without a server record");
            }
            ApplyTargetArg::LabelSelector {
                label_selector: Some(selector),
            } => {
                converted.push(FirewallResource::LabelSelector {
                    label_selector: LabelSelectorTarget {
                        selector: selector.selector.clone(),
                    },
                });
            }
            ApplyTargetArg::LabelSelector { label_selector: None } => {
                tracing::warn!(
                    "skipping apply-target: 'label_selector' entry without a selector record"
                );
            }
            ApplyTargetArg::Unknown => {
                tracing::warn!("skipping apply-target: unrecognized type tag");
            }
        }
    }

    converted
}
