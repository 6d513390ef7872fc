//! Relative path computation between two locations.

use crate::path::segments::Segments;
use crate::platform::Platform;

impl Platform {
    /// Express `to` relative to the directory `from`.
    ///
    /// Both arguments are made absolute against `cwd` and canonicalized
    /// first. When they do not share a root (different drives, say) the
    /// absolute canonical form of `to` is returned. The result always uses
    /// `/` and is explicitly relative otherwise; identical locations give
    /// `./`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seekpath::Platform;
    ///
    /// let p = Platform::Posix;
    /// assert_eq!(p.make_relative_from("/", "/a/b", "/a/c/d.txt"), "../c/d.txt");
    /// assert_eq!(p.make_relative_from("/", "/a/b/", "/a/b/c"), "./c");
    /// assert_eq!(p.make_relative_from("/", "/a", "/a/"), "./");
    /// ```
    #[must_use]
    pub fn make_relative_from(self, cwd: &str, from: &str, to: &str) -> String {
        let from_abs = self.absolute(cwd, from);
        let to_abs = self.absolute(cwd, to);
        let from_segments = Segments::parse(self, &from_abs);
        let to_segments = Segments::parse(self, &to_abs);

        if from_segments.root() != to_segments.root() {
            return to_abs.clone();
        }

        let from_parts = from_segments.parts();
        let to_parts = to_segments.parts();
        let common = from_parts
            .iter()
            .zip(to_parts)
            .take_while(|(a, b)| a == b)
            .count();

        let mut relative: Vec<&str> = vec![".."; from_parts.len() - common];
        relative.extend_from_slice(&to_parts[common..]);

        match relative.first() {
            None => "./".to_string(),
            Some(&"..") => relative.join("/"),
            Some(_) => format!("./{}", relative.join("/")),
        }
    }
}
