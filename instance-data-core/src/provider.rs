//! Cloud provider enumeration.

use std::fmt;
use std::str::FromStr;

/// Cloud providers with published instance data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudProvider {
    /// Amazon Web Services
    Aws,
    /// Microsoft Azure
    Azure,
    /// Google Compute Engine
    Gce,
}

impl CloudProvider {
    /// Every provider, in publishing order.
    pub const ALL: [CloudProvider; 3] = [
        CloudProvider::Aws,
        CloudProvider::Azure,
        CloudProvider::Gce,
    ];

    /// Lowercase name used for file names, Go identifiers and bucket keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Azure => "azure",
            CloudProvider::Gce => "gce",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aws" => Ok(CloudProvider::Aws),
            "azure" => Ok(CloudProvider::Azure),
            "gce" => Ok(CloudProvider::Gce),
            _ => Err(format!(
                "unknown cloud provider: {s} (expected aws, azure, or gce)"
            )),
        }
    }
}
