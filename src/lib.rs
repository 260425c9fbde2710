//! officepack — Office service pack install resolution
//!
//! This library resolves a declared `(version, service pack, arch,
//! deployment root)` tuple into a single idempotent installer command
//! descriptor for a Windows host. It validates the request against a catalog
//! of known Office releases, derives the installer path staged under the
//! deployment share, and synthesizes a PowerShell invocation guarded by a
//! registry build-version probe so re-running the descriptor never reapplies
//! an installed pack.
//!
//! Executing the command, staging the media, and reading the registry are the
//! caller's collaborators; this crate only resolves.
//!
//! # Example
//!
//! ```
//! use officepack::{build_command, InstallRequest, OfficeCatalog};
//!
//! let catalog = OfficeCatalog::builtin();
//! let request = InstallRequest::new(
//!     "2010",
//!     "2",
//!     r"\\test-server\packages",
//!     "Example Inc",
//!     "Joe",
//! )
//! .with_arch("x86");
//!
//! let descriptor = build_command(&catalog, &request)?;
//! assert!(descriptor.command.contains(r"OFFICE14\SPs\x86"));
//! # Ok::<(), officepack::ResolveError>(())
//! ```

pub mod catalog;
pub mod command;
pub mod error;
pub mod request;
pub mod resolver;
pub mod types;

// Re-export main types for convenience
pub use catalog::{OfficeCatalog, OfficeRelease, ServicePack, SetupFilename};
pub use command::{build_command, synthesize, CommandDescriptor, INSTALL_FLAGS};
pub use error::{ResolveError, Result};
pub use request::InstallRequest;
pub use resolver::{resolve, validate_arch, validate_service_pack, validate_version, Resolution};
pub use types::{Arch, Provider};
