//! Property tests for icon source selection.

use proptest::prelude::*;
use tempfile::tempdir;

use projkit::icon::{candidates, select_input, SourceFormat};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The highest-priority existing candidate always wins.
    ///
    /// `present` flags which of svg, png, jpg, jpeg exist on disk.
    #[test]
    fn property_first_existing_candidate_wins(present in proptest::array::uniform4(any::<bool>())) {
        let dir = tempdir().unwrap();
        let all = candidates("app_icon");
        for (candidate, exists) in all.iter().zip(present) {
            if exists {
                std::fs::write(dir.path().join(&candidate.file_name), b"x").unwrap();
            }
        }

        let result = select_input(dir.path(), "app_icon");

        match present.iter().position(|p| *p) {
            Some(index) => {
                let source = result.unwrap();
                prop_assert_eq!(source.path, dir.path().join(&all[index].file_name));
                prop_assert_eq!(source.format, all[index].format);
                if index == 0 {
                    prop_assert_eq!(source.format, SourceFormat::Svg);
                }
            }
            None => prop_assert!(result.is_err()),
        }
    }
}
