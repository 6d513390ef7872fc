//! Property-based tests for the path algebra across both rule sets.
//!
//! The per-module property tests use POSIX inputs; this module mixes
//! separators, drive letters and dot segments on both platforms.

use crate::Platform;
use proptest::prelude::*;

fn platform_strategy() -> impl Strategy<Value = Platform> {
    prop_oneof![Just(Platform::Posix), Just(Platform::Windows)]
}

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just("c:".to_string()),
        "[a-zA-Z0-9 ._-]{1,8}",
    ]
}

fn mixed_path_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just(""),
            Just("/"),
            Just("\\"),
            Just("./"),
            Just(".\\"),
            Just("../"),
            Just("C:\\"),
            Just("d:/"),
            Just("\\c:\\"),
            Just("//"),
            Just("\\\\"),
        ],
        prop::collection::vec(
            (segment_strategy(), prop_oneof![Just('/'), Just('\\')]),
            0..8,
        ),
    )
        .prop_map(|(prefix, parts)| {
            let mut path = prefix.to_string();
            for (segment, separator) in parts {
                path.push_str(&segment);
                path.push(separator);
            }
            path
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // canonical(canonical(p)) == canonical(p)
    #[test]
    fn canonical_idempotent(platform in platform_strategy(), path in mixed_path_strategy()) {
        let once = platform.canonical(&path);
        let twice = platform.canonical(&once);
        prop_assert_eq!(once, twice);
    }

    // Canonicalizing keeps the classification and the location
    #[test]
    fn canonical_preserves_location(platform in platform_strategy(), path in mixed_path_strategy()) {
        let cwd = match platform {
            Platform::Posix => "/work/dir/",
            Platform::Windows => "C:\\work\\dir\\",
        };
        let canonical = platform.canonical(&path);
        prop_assert_eq!(
            platform.is_fully_qualified(&canonical),
            platform.is_fully_qualified(&path)
        );
        prop_assert!(platform.path_equal_from(cwd, &path, &canonical));
    }

    // No path is both fully qualified and explicitly relative
    #[test]
    fn classification_exclusive(platform in platform_strategy(), path in mixed_path_strategy()) {
        prop_assert!(
            !(platform.is_fully_qualified(&path) && platform.is_explicitly_relative(&path))
        );
    }

    // Equality is reflexive and symmetric
    #[test]
    fn path_equal_reflexive_symmetric(
        platform in platform_strategy(),
        a in mixed_path_strategy(),
        b in mixed_path_strategy(),
    ) {
        let cwd = match platform {
            Platform::Posix => "/work/dir/",
            Platform::Windows => "C:\\work\\dir\\",
        };
        prop_assert!(platform.path_equal_from(cwd, &a, &a));
        prop_assert_eq!(
            platform.path_equal_from(cwd, &a, &b),
            platform.path_equal_from(cwd, &b, &a)
        );
    }

    // A trailing separator never changes the location
    #[test]
    fn path_equal_trailing_separator(platform in platform_strategy(), path in mixed_path_strategy()) {
        prop_assume!(!path.is_empty());
        let cwd = match platform {
            Platform::Posix => "/work/dir/",
            Platform::Windows => "C:\\work\\dir\\",
        };
        let with_separator = format!("{path}{}", platform.native_separator());
        prop_assert!(platform.path_equal_from(cwd, &path, &with_separator));
    }

    // The filename and directory split the input exactly
    #[test]
    fn directory_and_filename_reassemble(platform in platform_strategy(), path in mixed_path_strategy()) {
        let rebuilt = format!("{}{}", platform.directory(&path), platform.filename(&path));
        prop_assert_eq!(rebuilt, path);
    }

    // Basename and extension reassemble the filename when there is a dot
    #[test]
    fn basename_and_extension_reassemble(name in "[a-z]{1,5}(\\.[a-z]{1,3}){0,3}") {
        let p = Platform::Posix;
        let rebuilt = if name.contains('.') {
            format!("{}.{}", p.basename(&name), p.extension(&name))
        } else {
            p.basename(&name).to_string()
        };
        prop_assert_eq!(rebuilt, name);
    }
}
