//! Connection sub-schema (database endpoint, credentials and query).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Extra, UnknownVariant};

/// Whether the driver encrypts the connection.
///
/// Literals are passed to the driver verbatim; changing them breaks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncryptionMode {
    #[serde(rename = "ENCRYPTION_OFF", alias = "OFF")]
    Off,
    #[serde(rename = "ENCRYPTION_ON", alias = "ON")]
    On,
}

impl EncryptionMode {
    /// Canonical literals, in declaration order.
    pub const VARIANTS: &'static [&'static str] = &["ENCRYPTION_OFF", "ENCRYPTION_ON"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "ENCRYPTION_OFF",
            Self::On => "ENCRYPTION_ON",
        }
    }
}

impl FromStr for EncryptionMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENCRYPTION_OFF" | "OFF" => Ok(Self::Off),
            "ENCRYPTION_ON" | "ON" => Ok(Self::On),
            other => Err(UnknownVariant::new("encryption mode", other, Self::VARIANTS)),
        }
    }
}

impl fmt::Display for EncryptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Certificate validation policy for encrypted connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrustMode {
    #[serde(rename = "TRUST_ALL_CERTIFICATES")]
    AllCertificates,
    #[serde(rename = "TRUST_CUSTOM_CA_SIGNED_CERTIFICATES", alias = "TRUST_CUSTOM_CA")]
    CustomCaSigned,
    #[serde(rename = "TRUST_SYSTEM_CA_SIGNED_CERTIFICATES", alias = "TRUST_SYSTEM_CA")]
    SystemCaSigned,
}

impl TrustMode {
    /// Canonical literals, in declaration order.
    pub const VARIANTS: &'static [&'static str] = &[
        "TRUST_ALL_CERTIFICATES",
        "TRUST_CUSTOM_CA_SIGNED_CERTIFICATES",
        "TRUST_SYSTEM_CA_SIGNED_CERTIFICATES",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllCertificates => "TRUST_ALL_CERTIFICATES",
            Self::CustomCaSigned => "TRUST_CUSTOM_CA_SIGNED_CERTIFICATES",
            Self::SystemCaSigned => "TRUST_SYSTEM_CA_SIGNED_CERTIFICATES",
        }
    }
}

impl FromStr for TrustMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRUST_ALL_CERTIFICATES" => Ok(Self::AllCertificates),
            "TRUST_CUSTOM_CA_SIGNED_CERTIFICATES" | "TRUST_CUSTOM_CA" => Ok(Self::CustomCaSigned),
            "TRUST_SYSTEM_CA_SIGNED_CERTIFICATES" | "TRUST_SYSTEM_CA" => Ok(Self::SystemCaSigned),
            other => Err(UnknownVariant::new("trust mode", other, Self::VARIANTS)),
        }
    }
}

impl fmt::Display for TrustMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to reach and query the graph database.
///
/// Field names are the driver's contract and serialize in camelCase.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    /// Query executed on load. Opaque: never parsed here.
    pub initial_query: String,

    /// Database endpoint, e.g. `bolt://host:port`.
    pub uri: String,

    pub username: String,

    /// Stored as given. Secret handling belongs to the deployment.
    pub password: String,

    pub encryption_mode: EncryptionMode,

    pub trust_mode: TrustMode,

    /// Unrecognized keys, passed through to the driver.
    #[serde(flatten)]
    pub extra: Extra,
}

impl ConnectionConfig {
    pub const SCHEMA_VERSION: u32 = 1;
    pub const SCHEMA_ID: &'static str = "graph-view/connection@1";

    /// True when a password has been configured.
    pub fn has_credentials(&self) -> bool {
        !self.password.is_empty()
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("initial_query", &self.initial_query)
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("encryption_mode", &self.encryption_mode)
            .field("trust_mode", &self.trust_mode)
            .field("extra", &self.extra)
            .finish()
    }
}
