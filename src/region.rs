//! The known AWS region names and their validated handle.
//!
//! The publish call is bound to a region-scoped endpoint, so the region
//! string from the configuration has to map to a known region name before
//! any network call is made. An unrecognized name is a configuration
//! error, not a remote one.

use crate::notification::NotifyError;
use std::fmt;

/// Region names the notifier will bind a client to, across the
/// commercial, GovCloud and China partitions.
const KNOWN_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ca-central-1",
    "ca-west-1",
    "cn-north-1",
    "cn-northwest-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-gov-east-1",
    "us-gov-west-1",
    "us-west-1",
    "us-west-2",
];

/// A region name validated against [`KNOWN_REGIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionId(&'static str);

impl RegionId {
    /// Looks a region name up in the known-region table.
    ///
    /// The lookup is case-sensitive and the empty string is not a known
    /// region, so a blank effective region fails here, before any remote
    /// call is attempted.
    pub fn from_name(name: &str) -> Result<Self, NotifyError> {
        KNOWN_REGIONS
            .iter()
            .copied()
            .find(|known| *known == name)
            .map(RegionId)
            .ok_or_else(|| NotifyError::Configuration(format!("unknown region name: {:?}", name)))
    }

    /// The canonical region name.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        for name in ["us-east-1", "eu-west-2", "ap-southeast-4", "us-gov-west-1"] {
            let region = RegionId::from_name(name).unwrap();
            assert_eq!(region.name(), name);
        }
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        let err = RegionId::from_name("mars-west-1").unwrap_err();
        assert!(matches!(err, NotifyError::Configuration(_)));
        assert!(err.to_string().contains("mars-west-1"));
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(RegionId::from_name("").is_err());
        assert!(RegionId::from_name("  ").is_err());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(RegionId::from_name("US-EAST-1").is_err());
    }
}
