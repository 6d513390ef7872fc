//! Semantic path equality.

use crate::os::{FileSystem, OsFileSystem};
use crate::path::segments::Segments;
use crate::platform::Platform;

impl Platform {
    /// Whether `a` and `b` name the same location when relative paths are
    /// read against `cwd`.
    ///
    /// Both sides are made absolute, canonicalized and stripped of any
    /// trailing separator before a case-sensitive comparison. Separator
    /// style does not matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use seekpath::Platform;
    ///
    /// let p = Platform::Posix;
    /// assert!(p.path_equal_from("/work/", "/foo/baz/../bar", "/foo/bar/"));
    /// assert!(p.path_equal_from("/work/", "", "./"));
    /// assert!(p.path_equal_from("/work/", "", "/work"));
    /// assert!(!p.path_equal_from("/work/", "/foo", "/Foo"));
    /// ```
    #[must_use]
    pub fn path_equal_from(self, cwd: &str, a: &str, b: &str) -> bool {
        self.comparable(cwd, a) == self.comparable(cwd, b)
    }

    fn comparable(self, cwd: &str, path: &str) -> String {
        let absolute = self.absolute(cwd, path);
        Segments::parse(self, &absolute).without_trailing().render()
    }
}

/// Native path equality against the process working directory.
///
/// If the working directory cannot be determined, relative paths are
/// compared as they are.
#[must_use]
pub fn path_equal(a: &str, b: &str) -> bool {
    let cwd = OsFileSystem.current_dir().unwrap_or_default();
    Platform::native().path_equal_from(&cwd, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CWD: &str = "/home/user/project/";

    fn eq(a: &str, b: &str) -> bool {
        Platform::Posix.path_equal_from(CWD, a, b)
    }

    #[test]
    fn test_absolute() {
        assert!(eq("/", "/"));
        assert!(eq("/foo", "/foo"));
        assert!(eq("/foo/bar", "/foo/bar"));
        assert!(!eq("/foo", "/bar"));
        assert!(!eq("/foo/bar", "/bar/foo"));
        assert!(eq("/foo/./bar", "/foo/bar"));
        assert!(eq("/foo/baz/../bar", "/foo/bar"));
    }

    #[test]
    fn test_trailing_separator_either_side() {
        for (a, b) in [
            ("/foo", "/foo/"),
            ("/foo/bar", "/foo/bar/"),
            ("/foo/./bar", "/foo/bar/"),
            ("/foo/baz/../bar", "/foo/bar/"),
            ("foo", "foo/"),
            ("foo/./bar", "foo/bar/"),
        ] {
            assert!(eq(a, b), "{a} vs {b}");
            assert!(eq(b, a), "{b} vs {a}");
        }
        assert!(!eq("/foo", "/bar/"));
        assert!(!eq("/foo/bar/", "/bar/foo"));
        assert!(!eq("foo/", "bar"));
    }

    #[test]
    fn test_relative() {
        assert!(eq("", ""));
        assert!(eq("", "./"));
        assert!(eq("", CWD));
        assert!(eq("", "/home/user/project"));
        assert!(eq("foo", "foo"));
        assert!(eq("foo/bar", "foo/bar"));
        assert!(!eq("foo", "bar"));
        assert!(!eq("foo/bar", "bar/foo"));
        assert!(eq("foo/baz/../bar", "foo/bar"));
        assert!(eq("../bar", "./buz/../../bar"));
        assert!(eq("../bar", "/home/user/bar"));
    }

    #[test]
    fn test_root_is_not_working_directory() {
        assert!(!eq("/", ""));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!eq("/Foo", "/foo"));
        assert!(!Platform::Windows.path_equal_from("C:\\", "C:\\Foo", "C:\\foo"));
    }

    #[test]
    fn test_windows_separator_style() {
        let w = Platform::Windows;
        let cwd = "C:\\Users\\me\\";
        assert!(w.path_equal_from(cwd, "/foo/bar", "\\foo\\bar"));
        assert!(w.path_equal_from(cwd, "foo/bar", "foo\\bar"));
        assert!(w.path_equal_from(cwd, "../bar", ".\\buz\\..\\..\\bar"));
        assert!(w.path_equal_from(cwd, "", "C:/Users/me"));
        assert!(w.path_equal_from(cwd, "C:\\", "C:/"));
    }

    #[test]
    fn test_native_path_equal_uses_working_directory() {
        let cwd = std::env::current_dir().unwrap();
        let cwd = cwd.to_str().unwrap();
        assert!(path_equal("", "./"));
        assert!(path_equal("", cwd));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn relative_path_strategy() -> impl Strategy<Value = String> {
            (
                prop_oneof![Just(""), Just("/"), Just("./"), Just("../")],
                prop::collection::vec(
                    prop_oneof![Just(".".to_string()), Just("..".to_string()), "[a-z]{1,4}"],
                    1..=6,
                ),
            )
                .prop_map(|(prefix, parts)| format!("{prefix}{}", parts.join("/")))
        }

        proptest! {
            /// Every path equals itself
            #[test]
            fn path_equal_reflexive(a in relative_path_strategy()) {
                prop_assert!(eq(&a, &a));
            }

            /// Argument order does not matter
            #[test]
            fn path_equal_symmetric(a in relative_path_strategy(), b in relative_path_strategy()) {
                prop_assert_eq!(eq(&a, &b), eq(&b, &a));
            }

            /// Appending a separator does not change the location
            #[test]
            fn path_equal_trailing_separator(a in relative_path_strategy()) {
                let with_separator = format!("{a}/");
                prop_assert!(eq(&a, &with_separator));
            }
        }
    }
}
