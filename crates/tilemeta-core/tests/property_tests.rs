//! Property-based tests for metadata entry selection.
//!
//! These tests use proptest to generate arbitrary entry listings and verify
//! the selection rules hold across a wide range of cases.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use tilemeta_core::CandidatePolicy;
use tilemeta_core::MetadataError;
use tilemeta_core::selection::EntryInfo;
use tilemeta_core::selection::is_metadata_path;
use tilemeta_core::selection::normalize_entry_path;
use tilemeta_core::selection::select_candidate;

fn listing(paths: &[String]) -> Vec<EntryInfo> {
    paths
        .iter()
        .enumerate()
        .map(|(i, p)| EntryInfo::file(i, p.clone(), 64, 64))
        .collect()
}

proptest! {
    /// A visible file directly under metadata/ is always a candidate.
    #[test]
    fn prop_direct_child_accepted(name in "[a-zA-Z0-9_-][a-zA-Z0-9_.-]{0,30}") {
        let path = format!("metadata/{name}");
        prop_assert!(is_metadata_path(&path));
        let dotted = format!("./metadata/{name}");
        prop_assert!(is_metadata_path(&dotted));
    }

    /// Anything nested deeper under metadata/ is rejected.
    #[test]
    fn prop_nested_rejected(
        dirs in prop::collection::vec("[a-z0-9]{1,8}", 1..4),
        name in "[a-z0-9]{1,8}\\.yml"
    ) {
        let path = format!("metadata/{}/{name}", dirs.join("/"));
        prop_assert!(!is_metadata_path(&path));
    }

    /// Hidden files are never candidates.
    #[test]
    fn prop_hidden_rejected(name in "\\.[a-zA-Z0-9_.-]{0,20}") {
        let path = format!("metadata/{name}");
        prop_assert!(!is_metadata_path(&path));
    }

    /// Files outside a top-level metadata/ directory are rejected.
    #[test]
    fn prop_other_roots_rejected(
        root in "[a-z_]{1,10}",
        name in "[a-z0-9]{1,8}\\.yml"
    ) {
        prop_assume!(root != "metadata");
        let path = format!("{root}/{name}");
        prop_assert!(!is_metadata_path(&path));
        let macosx = format!("__MACOSX/metadata/{name}");
        prop_assert!(!is_metadata_path(&macosx));
    }

    /// Normalization is idempotent.
    #[test]
    fn prop_normalize_idempotent(path in "(\\./)?([a-z.]{1,6}/){0,4}[a-z.]{0,6}") {
        if let Some(normalized) = normalize_entry_path(&path) {
            prop_assert_eq!(normalize_entry_path(&normalized), Some(normalized.clone()));
        }
    }

    /// With one candidate the selected entry does not depend on listing order.
    #[test]
    fn prop_single_candidate_order_independent(
        decoys in prop::collection::vec("(releases|migrations|__MACOSX/metadata)/[a-z]{1,8}\\.yml", 0..12),
        position in any::<prop::sample::Index>()
    ) {
        let mut paths = decoys;
        let at = position.index(paths.len() + 1);
        paths.insert(at, "metadata/product.yml".to_string());

        let forward = listing(&paths);
        let selected = select_candidate(&forward, CandidatePolicy::Reject).unwrap();
        prop_assert_eq!(&selected.path, "metadata/product.yml");

        paths.reverse();
        let backward = listing(&paths);
        let selected = select_candidate(&backward, CandidatePolicy::Reject).unwrap();
        prop_assert_eq!(&selected.path, "metadata/product.yml");
    }

    /// Listings without candidates always fail with NoMetadataFile.
    #[test]
    fn prop_no_candidate_fails(
        decoys in prop::collection::vec("(releases|metadata/sub|__MACOSX/metadata)/[a-z]{1,8}\\.yml", 0..12)
    ) {
        let entries = listing(&decoys);
        let result = select_candidate(&entries, CandidatePolicy::FirstInDirectory);
        prop_assert!(matches!(result, Err(MetadataError::NoMetadataFile)));
    }
}
