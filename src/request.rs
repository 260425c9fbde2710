//! Install request input tuple.
//!
//! An [`InstallRequest`] is the per-invocation declaration handed in by the
//! surrounding configuration-management layer. It is created, validated, and
//! consumed immediately; nothing persists it.

use serde::{Deserialize, Serialize};

/// Declared service pack install, as supplied by the caller.
///
/// `version`, `sp`, and `arch` arrive as strings and are validated against
/// the catalog by the resolver. `company_name` and `username` are pass-through
/// context required by the calling convention; resolution never consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallRequest {
    /// Office marketing version, e.g. "2010".
    pub version: String,
    /// Service pack number, e.g. "2".
    pub sp: String,
    /// Installer architecture; defaults to "x64" when unspecified.
    #[serde(default = "default_arch")]
    pub arch: String,
    /// UNC share under which installer media is staged,
    /// e.g. `\\server\packages`.
    pub deployment_root: String,
    /// Company the install is registered to.
    pub company_name: String,
    /// User the install is registered to.
    pub username: String,
}

fn default_arch() -> String {
    "x64".to_string()
}

impl InstallRequest {
    /// Create a request with the default architecture.
    pub fn new(
        version: impl Into<String>,
        sp: impl Into<String>,
        deployment_root: impl Into<String>,
        company_name: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            sp: sp.into(),
            arch: default_arch(),
            deployment_root: deployment_root.into(),
            company_name: company_name.into(),
            username: username.into(),
        }
    }

    /// Override the architecture.
    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = arch.into();
        self
    }
}
