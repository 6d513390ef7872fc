//! Tokenized form shared by the canonicalization, equality and relative-path
//! algorithms.
//!
//! A path string is split once into a [`Root`] marker, a list of segments and
//! a trailing-separator flag. The algorithms work on that form and render a
//! string only at the end.

use crate::platform::Platform;

/// How a path is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Root {
    /// Bare relative path such as `foo/bar`.
    Bare,
    /// Path starting with `./` or `../`.
    ExplicitRelative,
    /// Path starting with a separator.
    Separator,
    /// Leading separator directly followed by a drive letter (`\c:\Foo`).
    /// Not fully qualified, but the leading separator is kept.
    Ambiguous,
    /// Drive-letter root such as `C:\`.
    Drive(char),
}

/// A path split into root, segments and trailing-separator flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segments<'a> {
    platform: Platform,
    root: Root,
    parts: Vec<&'a str>,
    trailing: bool,
}

impl<'a> Segments<'a> {
    /// Split `path` on every separator valid for `platform`.
    ///
    /// Empty segments are discarded; `.` and `..` are kept verbatim.
    pub(crate) fn parse(platform: Platform, path: &'a str) -> Self {
        let is_sep = |c: char| platform.is_separator(c);

        // Every root marker below is ASCII, so byte offsets are safe.
        let (root, rest) = if let Some(letter) = platform.drive_letter_root(path) {
            (Root::Drive(letter), &path[3..])
        } else if platform.is_fully_qualified(path) {
            (Root::Separator, &path[1..])
        } else if path.starts_with(is_sep) {
            (Root::Ambiguous, &path[1..])
        } else if platform.is_explicitly_relative(path) {
            (Root::ExplicitRelative, path)
        } else {
            (Root::Bare, path)
        };

        Self {
            platform,
            root,
            parts: rest.split(is_sep).filter(|s| !s.is_empty()).collect(),
            trailing: platform.ends_with_separator(rest),
        }
    }

    pub(crate) fn root(&self) -> Root {
        self.root
    }

    pub(crate) fn parts(&self) -> &[&'a str] {
        &self.parts
    }

    /// Drop `.` segments and cancel `..` against preceding segments.
    ///
    /// A `..` that has nothing to cancel is kept, in order, at the front.
    #[must_use]
    pub(crate) fn collapse(self) -> Self {
        let mut kept: Vec<&'a str> = Vec::with_capacity(self.parts.len());

        for part in self.parts {
            match part {
                "." => {}
                ".." => match kept.last() {
                    Some(&last) if last != ".." => {
                        kept.pop();
                    }
                    _ => kept.push(".."),
                },
                _ => kept.push(part),
            }
        }

        Self {
            platform: self.platform,
            root: self.root,
            parts: kept,
            trailing: self.trailing,
        }
    }

    /// Forget the trailing separator.
    #[must_use]
    pub(crate) fn without_trailing(mut self) -> Self {
        self.trailing = false;
        self
    }

    /// Render with `/` separators.
    pub(crate) fn render(&self) -> String {
        let body = self.parts.join("/");
        // Under Windows rules a leading `c:` segment decides the
        // classification, so the root is spelled to keep it unchanged.
        let mut out = match self.root {
            Root::Bare if self.leads_with_drive() && self.parts[0].len() == 2 => "./".to_string(),
            Root::Bare => String::new(),
            Root::ExplicitRelative if self.parts.first() == Some(&"..") => String::new(),
            Root::ExplicitRelative => "./".to_string(),
            Root::Separator if self.leads_with_drive() => "//".to_string(),
            Root::Ambiguous if !self.leads_with_drive() => String::new(),
            Root::Separator | Root::Ambiguous => "/".to_string(),
            Root::Drive(letter) => format!("{letter}:/"),
        };
        out.push_str(&body);
        if self.trailing && !body.is_empty() {
            out.push('/');
        }
        out
    }

    fn leads_with_drive(&self) -> bool {
        self.platform == Platform::Windows
            && self.parts.first().is_some_and(|first| {
                let mut chars = first.chars();
                matches!(
                    (chars.next(), chars.next()),
                    (Some(letter), Some(':')) if letter.is_ascii_alphabetic()
                )
            })
    }
}
