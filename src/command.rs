//! Idempotent command synthesis.
//!
//! Turns a [`Resolution`] into the final declarative command descriptor:
//! the quoted installer invocation, the execution provider, and the
//! already-applied guard the execution collaborator evaluates first.
//!
//! # Guard Contract
//!
//! Once a service pack is applied, its build number appears as a value under
//! `HKLM:\SOFTWARE\Microsoft\Office\{id}.0\Common\ProductVersion`. The guard
//! probes for that value with `-ErrorAction SilentlyContinue`, so a missing
//! key or value (first-time install) is "not yet applied" rather than an
//! error. When the probe finds the build, the guard exits 1 and the executor
//! skips the install.
//!
//! Synthesis itself has no failure modes: every input comes from a
//! successful resolution.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::OfficeCatalog;
use crate::error::Result;
use crate::request::InstallRequest;
use crate::resolver::{resolve, Resolution};
use crate::types::Provider;

/// Installer flags: silent install, suppress reboot.
pub const INSTALL_FLAGS: &str = "/q /norestart";

/// Declarative command resource handed to the execution collaborator.
///
/// The collaborator evaluates `onlyif` first; if it signals already-applied
/// it skips, otherwise it runs `command` under `provider`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Quoted installer invocation with silent/no-restart flags.
    pub command: String,
    /// Shell-capable execution provider (the guard needs conditional
    /// evaluation, not a plain process spawn).
    pub provider: Provider,
    /// Registry-probe guard expression; exits 1 when already applied.
    pub onlyif: String,
}

/// Synthesize the command descriptor for a resolved install.
pub fn synthesize(resolution: &Resolution) -> CommandDescriptor {
    let descriptor = CommandDescriptor {
        command: install_command(&resolution.installer_path),
        provider: Provider::Powershell,
        onlyif: already_applied_guard(&resolution.product_id, &resolution.build),
    };
    debug!("synthesize: command={}", descriptor.command);
    descriptor
}

/// Resolve a request and synthesize its command descriptor in one step.
pub fn build_command(catalog: &OfficeCatalog, request: &InstallRequest) -> Result<CommandDescriptor> {
    let resolution = resolve(catalog, request)?;
    Ok(synthesize(&resolution))
}

/// Quoted invocation of the installer. The path is quoted because UNC share
/// names may contain spaces.
fn install_command(installer_path: &str) -> String {
    format!("& \"{}\" {}", installer_path, INSTALL_FLAGS)
}

/// PowerShell probe for the build value under the product's registry subtree.
fn already_applied_guard(product_id: &str, build: &str) -> String {
    format!(
        r"if (Get-Item -LiteralPath '\HKLM:\SOFTWARE\Microsoft\Office\{}.0\Common\ProductVersion' -ErrorAction SilentlyContinue).GetValue('{}')) {{ exit 1 }}",
        product_id, build
    )
}
