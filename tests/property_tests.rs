//! Property-Based Tests for officepack
//!
//! Uses proptest for testing invariants and edge cases:
//! - Arch string round-trips and strict rejection of everything else
//! - Unknown versions and service packs never resolve
//! - Resolution is a pure function of (catalog, request)

use proptest::prelude::*;

use officepack::{build_command, resolve, Arch, InstallRequest, OfficeCatalog, ResolveError};

fn request(version: &str, sp: &str, arch: &str) -> InstallRequest {
    InstallRequest::new(version, sp, r"\\test-server\packages", "Example Inc", "Joe")
        .with_arch(arch)
}

// =============================================================================
// Arch Property Tests
// =============================================================================

/// Strategy for generating valid Arch variants
fn arch_strategy() -> impl Strategy<Value = Arch> {
    prop_oneof![Just(Arch::X86), Just(Arch::X64)]
}

proptest! {
    /// Arch: to_string → parse round-trip is identity
    #[test]
    fn arch_roundtrip(arch in arch_strategy()) {
        let s = arch.to_string();
        let parsed: Arch = s.parse().expect("Should parse");
        prop_assert_eq!(arch, parsed);
    }

    /// Arch: any string other than exactly "x86"/"x64" is rejected
    #[test]
    fn arch_rejects_everything_else(s in "\\PC*") {
        prop_assume!(s != "x86" && s != "x64");
        let err = Arch::parse(&s).expect_err("non-arch string must be rejected");
        prop_assert!(
            matches!(err, ResolveError::InvalidArch { .. }),
            "expected InvalidArch, got {:?}",
            err
        );
    }
}

// =============================================================================
// Rejection Property Tests
// =============================================================================

proptest! {
    /// Versions outside the catalog never resolve, whatever the sp/arch
    #[test]
    fn unknown_versions_never_resolve(version in "[a-z0-9]{1,8}", sp in "[0-9]{1,2}") {
        let catalog = OfficeCatalog::builtin();
        prop_assume!(!catalog.versions().contains(&version));

        let err = build_command(&catalog, &request(&version, &sp, "x64")).unwrap_err();
        prop_assert!(
            matches!(err, ResolveError::UnknownVersion { .. }),
            "expected UnknownVersion, got {:?}",
            err
        );
    }

    /// Numerically plausible sp numbers outside the catalog keys are rejected
    #[test]
    fn unknown_service_packs_never_resolve(sp in 4u8..=99) {
        let catalog = OfficeCatalog::builtin();
        let sp = sp.to_string();

        for version in catalog.versions() {
            let err = build_command(&catalog, &request(&version, &sp, "x64")).unwrap_err();
            prop_assert!(
                matches!(err, ResolveError::UnknownServicePack { .. }),
                "expected UnknownServicePack, got {:?}",
                err
            );
        }
    }
}

// =============================================================================
// Purity Property Tests
// =============================================================================

proptest! {
    /// Resolving the same request twice yields identical results
    #[test]
    fn resolution_is_deterministic(
        version_idx in 0usize..3,
        sp_idx in 0usize..2,
        arch in arch_strategy(),
    ) {
        let catalog = OfficeCatalog::builtin();
        let version = catalog.versions()[version_idx].clone();
        let sps = catalog.release(&version).unwrap().sp_numbers();
        let sp = sps[sp_idx % sps.len()].clone();

        let req = request(&version, &sp, &arch.to_string());
        let first = resolve(&catalog, &req).expect("catalog entry must resolve");
        let second = resolve(&catalog, &req).expect("catalog entry must resolve");
        prop_assert_eq!(first, second);

        let desc_a = build_command(&catalog, &req).unwrap();
        let desc_b = build_command(&catalog, &req).unwrap();
        prop_assert_eq!(desc_a, desc_b);
    }

    /// The deployment root passes through to the command verbatim
    #[test]
    fn deployment_root_is_verbatim(share in "[A-Za-z0-9-]{1,12}") {
        let catalog = OfficeCatalog::builtin();
        let root = format!(r"\\{}\packages", share);
        let req = InstallRequest::new("2007", "2", &root, "Example Inc", "Joe");

        let descriptor = build_command(&catalog, &req).unwrap();
        prop_assert!(
            descriptor.command.starts_with(&format!("& \"{}\\OFFICE12", root)),
            "command does not start with deployment root: {}",
            descriptor.command
        );
    }
}
