//! Office version/service-pack catalog.
//!
//! The catalog is the single source of truth mapping a marketing version
//! ("2003", "2007", "2010") to its numeric product id and the service packs
//! published for it. It is constructed once (either the built-in table or a
//! JSON override document) and passed by reference into validation and
//! resolution; nothing mutates it after construction.
//!
//! # Catalog Data Philosophy
//!
//! The table lives in Rust (not an external data file) because:
//! 1. **Compile-time checks**: Typos in builds or filenames cause test failures
//! 2. **Easy updates**: Add a service pack in one place
//! 3. **Testability**: Resolution can be verified without any file I/O

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::types::Arch;

/// Setup executable selection for a service pack.
///
/// Office 2003/2007 service packs ship a single installer; 2010 ships one
/// installer per architecture. The distinction is explicit here so the
/// resolver matches on it rather than inspecting shapes at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetupFilename {
    /// One installer for all architectures.
    Plain(String),
    /// Arch-qualified installers, keyed by [`Arch`].
    PerArch(BTreeMap<Arch, String>),
}

impl SetupFilename {
    /// Select the setup filename for the requested arch.
    ///
    /// For `Plain` entries the arch is irrelevant and the single filename is
    /// returned. For `PerArch` entries a missing key yields `None`; the
    /// resolver turns that into a rejection rather than defaulting.
    pub fn for_arch(&self, arch: Arch) -> Option<&str> {
        match self {
            SetupFilename::Plain(name) => Some(name),
            SetupFilename::PerArch(by_arch) => by_arch.get(&arch).map(String::as_str),
        }
    }

    /// Whether this entry selects its installer per architecture.
    ///
    /// Arch-mapped entries also get an arch segment in the installer path.
    pub fn is_arch_mapped(&self) -> bool {
        matches!(self, SetupFilename::PerArch(_))
    }
}

/// One published service pack for an Office release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePack {
    /// Build number written to the registry once the pack is applied.
    /// This is the idempotency marker the guard expression probes for.
    pub build: String,
    /// Installer executable name(s).
    pub setup: SetupFilename,
}

/// One Office release and the service packs published for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeRelease {
    /// Numeric product id ("11" for 2003, "12" for 2007, "14" for 2010).
    /// Appears in both the deployment path (`OFFICE14`) and the registry
    /// subtree (`Office\14.0`). The external document calls this `version`.
    #[serde(rename = "version")]
    pub product_id: String,
    /// Service packs keyed by sp number ("1".."3" depending on release).
    /// These keys are exactly the supported set; nothing outside them is
    /// valid regardless of numeric plausibility.
    pub service_packs: BTreeMap<String, ServicePack>,
}

impl OfficeRelease {
    /// Supported sp numbers, in order. Used for error reporting.
    pub fn sp_numbers(&self) -> Vec<String> {
        self.service_packs.keys().cloned().collect()
    }
}

/// Immutable catalog of known Office releases, keyed by marketing version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfficeCatalog {
    releases: BTreeMap<String, OfficeRelease>,
}

impl OfficeCatalog {
    /// The canonical built-in catalog.
    ///
    /// Builds and installer filenames match the packages Microsoft published;
    /// 2010 is the only release with arch-qualified installers.
    pub fn builtin() -> Self {
        let mut releases = BTreeMap::new();

        releases.insert(
            "2003".to_string(),
            OfficeRelease {
                product_id: "11".to_string(),
                service_packs: BTreeMap::from([
                    plain_sp("1", "11.0.6361.0", "Office2003SP1-KB842532-FullFile-ENU.exe"),
                    plain_sp("2", "11.0.7969.0", "Office2003SP2-KB887616-FullFile-ENU.exe"),
                    plain_sp("3", "11.0.8173.0", "Office2003SP3-KB923618-FullFile-ENU.exe"),
                ]),
            },
        );

        releases.insert(
            "2007".to_string(),
            OfficeRelease {
                product_id: "12".to_string(),
                service_packs: BTreeMap::from([
                    plain_sp("1", "12.0.6215.1000", "office2007sp1-kb936982-fullfile-en-us.exe"),
                    plain_sp("2", "12.0.6425.1000", "office2007sp2-kb953195-fullfile-en-us.exe"),
                    plain_sp("3", "12.0.6607.1000", "office2007sp3-kb2526086-fullfile-en-us.exe"),
                ]),
            },
        );

        releases.insert(
            "2010".to_string(),
            OfficeRelease {
                product_id: "14".to_string(),
                service_packs: BTreeMap::from([
                    per_arch_sp(
                        "1",
                        "14.0.6029.1000",
                        "officesuite2010sp1-kb2460049-x86-fullfile-en-us.exe",
                        "officesuite2010sp1-kb2460049-x64-fullfile-en-us.exe",
                    ),
                    per_arch_sp(
                        "2",
                        "14.0.7015.1000",
                        "officesp2010-kb2687455-fullfile-x86-en-us.exe",
                        "officesp2010-kb2687455-fullfile-x64-en-us.exe",
                    ),
                ]),
            },
        );

        Self { releases }
    }

    /// Look up a release by marketing version.
    pub fn release(&self, version: &str) -> Option<&OfficeRelease> {
        self.releases.get(version)
    }

    /// Look up a service pack by (version, sp number).
    pub fn service_pack(&self, version: &str, sp: &str) -> Option<&ServicePack> {
        self.release(version)
            .and_then(|release| release.service_packs.get(sp))
    }

    /// Known marketing versions, in order. Used for error reporting.
    pub fn versions(&self) -> Vec<String> {
        self.releases.keys().cloned().collect()
    }

    /// Load a catalog override from a JSON document.
    ///
    /// The document shape matches the built-in table:
    /// `{"2010": {"version": "14", "service_packs": {"1": {"build": "...",
    /// "setup": {"x86": "...", "x64": "..."}}}}}` with `setup` either a plain
    /// string or an arch map.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Structural validation of a loaded catalog.
    ///
    /// A well-formed catalog has at least one service pack per release and no
    /// empty arch maps. The built-in table satisfies this by construction;
    /// override documents are checked on load.
    pub fn validate(&self) -> Result<()> {
        if self.releases.is_empty() {
            anyhow::bail!("Catalog must contain at least one office release");
        }
        for (version, release) in &self.releases {
            if release.product_id.trim().is_empty() {
                anyhow::bail!("Office {} has an empty numeric product id", version);
            }
            if release.service_packs.is_empty() {
                anyhow::bail!("Office {} has no service packs", version);
            }
            for (sp, pack) in &release.service_packs {
                if pack.build.trim().is_empty() {
                    anyhow::bail!("Office {} SP{} has an empty build number", version, sp);
                }
                match &pack.setup {
                    SetupFilename::Plain(name) if name.trim().is_empty() => {
                        anyhow::bail!("Office {} SP{} has an empty setup filename", version, sp)
                    }
                    SetupFilename::PerArch(by_arch) if by_arch.is_empty() => {
                        anyhow::bail!("Office {} SP{} has an empty arch map", version, sp)
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

impl Default for OfficeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn plain_sp(sp: &str, build: &str, setup: &str) -> (String, ServicePack) {
    (
        sp.to_string(),
        ServicePack {
            build: build.to_string(),
            setup: SetupFilename::Plain(setup.to_string()),
        },
    )
}

fn per_arch_sp(sp: &str, build: &str, x86: &str, x64: &str) -> (String, ServicePack) {
    (
        sp.to_string(),
        ServicePack {
            build: build.to_string(),
            setup: SetupFilename::PerArch(BTreeMap::from([
                (Arch::X86, x86.to_string()),
                (Arch::X64, x64.to_string()),
            ])),
        },
    )
}
