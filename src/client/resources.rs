//! Wire types for the cloud API.
//!
//! Resources the server projects to a trimmed response (`Server`, `SshKey`,
//! `Certificate`) get typed structs; the remaining resource kinds are
//! relayed as raw JSON exactly as the API returns them. Label maps use
//! `BTreeMap` so serialized output has a stable key order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// SSH keys
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKey {
    pub id: i64,
    pub name: String,
    pub fingerprint: String,
    pub public_key: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SshKeyCreateRequest {
    pub name: String,
    pub public_key: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SshKeyUpdateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

// =============================================================================
// Servers
// =============================================================================

/// Trimmed server projection: the fields callers need, nothing more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub public_net: ServerPublicNet,
    pub server_type: ServerTypeRef,
    pub datacenter: DatacenterRef,
    #[serde(default)]
    pub included_traffic: Option<u64>,
    #[serde(default)]
    pub outgoing_traffic: Option<u64>,
    #[serde(default)]
    pub ingoing_traffic: Option<u64>,
    #[serde(default)]
    pub backup_window: Option<String>,
    pub rescue_enabled: bool,
    pub locked: bool,
    pub protection: ServerProtection,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// IDs of attached volumes.
    #[serde(default)]
    pub volumes: Vec<i64>,
    #[serde(default)]
    pub primary_disk_size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerPublicNet {
    #[serde(default)]
    pub ipv4: Option<PublicIp>,
    #[serde(default)]
    pub ipv6: Option<PublicIp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicIp {
    pub ip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTypeRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatacenterRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerProtection {
    pub delete: bool,
    pub rebuild: bool,
}

// =============================================================================
// Certificates
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(rename = "type")]
    pub cert_type: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub not_valid_before: Option<DateTime<Utc>>,
    #[serde(default)]
    pub not_valid_after: Option<DateTime<Utc>>,
    #[serde(default)]
    pub domain_names: Vec<String>,
    #[serde(default)]
    pub fingerprint: Option<String>,
}

// =============================================================================
// Firewalls
// =============================================================================

/// Firewall rule as the API speaks it: IP ranges in CIDR notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRule {
    pub direction: String,
    #[serde(default)]
    pub source_ips: Vec<String>,
    #[serde(default)]
    pub destination_ips: Vec<String>,
    pub protocol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Resource a firewall is applied to — a closed tagged union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FirewallResource {
    Server { server: ServerTarget },
    LabelSelector { label_selector: LabelSelectorTarget },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTarget {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSelectorTarget {
    pub selector: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FirewallCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    pub rules: Vec<FirewallRule>,
    pub apply_to: Vec<FirewallResource>,
}
