//! Type-safe primitives for service pack resolution
//!
//! This module replaces stringly-typed architecture and provider values with
//! proper Rust enums that provide compile-time validation and exhaustive
//! matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::ResolveError;

/// Installer architecture.
///
/// Office 2010 ships arch-specific service pack installers; 2003/2007 do not.
/// Parsing is case-sensitive exact match: `"x86"` or `"x64"`, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Arch {
    #[strum(serialize = "x86")]
    #[serde(rename = "x86")]
    X86,
    #[default]
    #[strum(serialize = "x64")]
    #[serde(rename = "x64")]
    X64,
}

impl Arch {
    /// Parse an arch argument, mapping failure to the domain error.
    ///
    /// `strum`'s derived `FromStr` is already an exact match, so this only
    /// wraps the error with the offending value for reporting.
    pub fn parse(arch: &str) -> Result<Self, ResolveError> {
        arch.parse::<Arch>().map_err(|_| ResolveError::InvalidArch {
            arch: arch.to_string(),
        })
    }
}

/// Execution provider for the synthesized command.
///
/// The idempotency guard is a shell-level conditional, so the command must be
/// realized by a script-capable provider, not a plain process spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Provider {
    #[default]
    #[strum(serialize = "powershell")]
    #[serde(rename = "powershell")]
    Powershell,
}
