//! Error handling for service pack resolution
//!
//! Provides the typed rejection errors raised during validation, using
//! thiserror. All three variants indicate caller misconfiguration: they are
//! surfaced before any command is synthesized and are never retried.

use thiserror::Error;

/// Rejection errors raised while validating an install request.
///
/// Each variant carries the offending value (and the accepted set where one
/// exists) so callers and tests can assert on structure instead of matching
/// message prose.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Requested Office version is not in the catalog.
    #[error(
        "The version argument '{version}' does not match a valid version of office \
         (supported: {})", .supported.join(", ")
    )]
    UnknownVersion {
        version: String,
        supported: Vec<String>,
    },

    /// Requested service pack is not supported for the (valid) version.
    ///
    /// Also covers an arch-mapped catalog entry missing the requested arch
    /// key; the resolver never silently defaults in that case.
    #[error(
        "The service pack '{sp}' specified is not supported for office {version} \
         (supported: {})", .supported.join(", ")
    )]
    UnknownServicePack {
        version: String,
        sp: String,
        supported: Vec<String>,
    },

    /// Arch argument is not exactly `x86` or `x64`.
    #[error("The arch argument '{arch}' does not match x86 or x64")]
    InvalidArch { arch: String },
}

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_version_display() {
        let err = ResolveError::UnknownVersion {
            version: "xxx".to_string(),
            supported: vec!["2003".to_string(), "2007".to_string(), "2010".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "The version argument 'xxx' does not match a valid version of office \
             (supported: 2003, 2007, 2010)"
        );
    }

    #[test]
    fn test_unknown_service_pack_display() {
        let err = ResolveError::UnknownServicePack {
            version: "2010".to_string(),
            sp: "5".to_string(),
            supported: vec!["1".to_string(), "2".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "The service pack '5' specified is not supported for office 2010 \
             (supported: 1, 2)"
        );
    }

    #[test]
    fn test_invalid_arch_display() {
        let err = ResolveError::InvalidArch {
            arch: "fubar".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The arch argument 'fubar' does not match x86 or x64"
        );
    }

    #[test]
    fn test_errors_carry_structured_fields() {
        let err = ResolveError::UnknownServicePack {
            version: "2010".to_string(),
            sp: "5".to_string(),
            supported: vec!["1".to_string(), "2".to_string()],
        };
        match err {
            ResolveError::UnknownServicePack { version, sp, supported } => {
                assert_eq!(version, "2010");
                assert_eq!(sp, "5");
                assert_eq!(supported, vec!["1", "2"]);
            }
            other => panic!("expected UnknownServicePack, got {:?}", other),
        }
    }
}
