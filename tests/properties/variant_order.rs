//! Property tests for size variant ordering and selection.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use projkit::icon::{select_variants, size_from_file_name, sort_variants, PackMode};

fn variant_paths() -> impl Strategy<Value = Vec<PathBuf>> {
    proptest::collection::hash_set(1u32..=256, 1..=12)
        .prop_map(|sizes| {
            sizes
                .into_iter()
                .map(|s| PathBuf::from(format!("icons/app_icon_{}.png", s)))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Size parsing never panics on arbitrary file names.
    #[test]
    fn property_size_parse_never_panics(s in "(?s).{0,128}") {
        let _ = size_from_file_name(Path::new(&s));
    }

    /// PROPERTY: `<stem>_<n>.png` always parses back to `n`.
    #[test]
    fn property_size_suffix_is_parsed(
        stem in "[a-z][a-z_]{0,16}",
        size in 1u32..=4096,
    ) {
        let path = PathBuf::from(format!("{}_{}.png", stem, size));
        prop_assert_eq!(size_from_file_name(&path), Some(size));
    }

    /// PROPERTY: Sorted variants are strictly ascending whatever the input order.
    #[test]
    fn property_sorted_variants_ascending(paths in variant_paths()) {
        let sorted = sort_variants(&paths);
        prop_assert_eq!(sorted.len(), paths.len());
        prop_assert!(sorted.windows(2).all(|w| w[0].size < w[1].size));
    }

    /// PROPERTY: Largest mode picks the maximum size regardless of input order.
    #[test]
    fn property_largest_is_maximum(paths in variant_paths()) {
        let max = paths
            .iter()
            .filter_map(|p| size_from_file_name(p))
            .max()
            .unwrap();

        let sorted = sort_variants(&paths);
        let selected = select_variants(&sorted, PackMode::Largest);

        prop_assert_eq!(selected.len(), 1);
        prop_assert_eq!(selected[0].size, max);
        prop_assert_eq!(
            &selected[0].path,
            &PathBuf::from(format!("icons/app_icon_{}.png", max))
        );
    }

    /// PROPERTY: All mode keeps every parseable variant.
    #[test]
    fn property_all_keeps_everything(paths in variant_paths()) {
        let sorted = sort_variants(&paths);
        prop_assert_eq!(select_variants(&sorted, PackMode::All).len(), paths.len());
    }
}
