//! Install request validation and resolution.
//!
//! Translates a declared (version, sp, arch, deployment_root) tuple into the
//! concrete installer path and registry build marker for that service pack.
//!
//! # Design
//!
//! - **Fail fast**: the first failing validation aborts; no partial result
//!   is ever produced.
//! - **Pure logic**: no I/O, no side effects — a function of (catalog,
//!   request) only, so identical requests resolve identically.
//! - **No silent defaults**: an arch-mapped catalog entry missing the
//!   requested arch is a rejection, not a fallback.
//!
//! # Validation Order
//!
//! Version is checked before service pack (a bad version must surface as
//! `UnknownVersion` even when the sp would also be bad). Arch is checked
//! independently of both, between the two catalog checks.

use log::debug;

use crate::catalog::{OfficeCatalog, OfficeRelease, ServicePack};
use crate::error::{ResolveError, Result};
use crate::request::InstallRequest;
use crate::types::Arch;

/// Outcome of a successful resolution.
///
/// Everything the command synthesizer needs: the numeric product id (registry
/// subtree), the build number (idempotency marker), and the fully composed
/// installer path under the deployment root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Numeric product id, e.g. "14" for Office 2010.
    pub product_id: String,
    /// Registry build number for the resolved service pack.
    pub build: String,
    /// Full UNC path of the installer executable.
    pub installer_path: String,
    /// Validated architecture.
    pub arch: Arch,
}

/// Check the requested version against the catalog.
pub fn validate_version<'a>(
    catalog: &'a OfficeCatalog,
    version: &str,
) -> Result<&'a OfficeRelease> {
    catalog
        .release(version)
        .ok_or_else(|| ResolveError::UnknownVersion {
            version: version.to_string(),
            supported: catalog.versions(),
        })
}

/// Check the requested sp number against an already-validated release.
pub fn validate_service_pack<'a>(
    release: &'a OfficeRelease,
    version: &str,
    sp: &str,
) -> Result<&'a ServicePack> {
    release
        .service_packs
        .get(sp)
        .ok_or_else(|| ResolveError::UnknownServicePack {
            version: version.to_string(),
            sp: sp.to_string(),
            supported: release.sp_numbers(),
        })
}

/// Check the arch argument. Exact match on `x86`/`x64` only.
pub fn validate_arch(arch: &str) -> Result<Arch> {
    Arch::parse(arch)
}

/// Resolve a validated install request against the catalog.
///
/// # Path Composition
///
/// - Single-installer entry: `{root}\OFFICE{id}\SPs\{setup}`
/// - Arch-mapped entry: `{root}\OFFICE{id}\SPs\{arch}\{setup}`
///
/// Backslash separators throughout: the deployment root is a Windows share.
/// For single-installer entries the arch is still validated but affects
/// neither filename selection nor the path.
pub fn resolve(catalog: &OfficeCatalog, request: &InstallRequest) -> Result<Resolution> {
    debug!(
        "resolve: version={} sp={} arch={} root={} company={} user={}",
        request.version,
        request.sp,
        request.arch,
        request.deployment_root,
        request.company_name,
        request.username
    );

    let release = validate_version(catalog, &request.version)?;
    let arch = validate_arch(&request.arch)?;
    let pack = validate_service_pack(release, &request.version, &request.sp)?;

    let setup = pack
        .setup
        .for_arch(arch)
        .ok_or_else(|| ResolveError::UnknownServicePack {
            version: request.version.clone(),
            sp: request.sp.clone(),
            supported: release.sp_numbers(),
        })?;

    let installer_path = if pack.setup.is_arch_mapped() {
        format!(
            r"{}\OFFICE{}\SPs\{}\{}",
            request.deployment_root, release.product_id, arch, setup
        )
    } else {
        format!(
            r"{}\OFFICE{}\SPs\{}",
            request.deployment_root, release.product_id, setup
        )
    };

    Ok(Resolution {
        product_id: release.product_id.clone(),
        build: pack.build.clone(),
        installer_path,
        arch,
    })
}
