//! Java package prefixes and antichain operations.
//!
//! A set of prefixes is *antichain-minimal* if no member is a `/`-segment
//! prefix of another. [`filter_nested`] computes the antichain-minimal
//! subset of an arbitrary collection, keeping the more specific member of
//! any nested pair.

use std::fmt;

/// A Java package name expressed with `/` as the segment separator
/// (e.g. `org/apache/tomcat`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackagePrefix(String);

impl PackagePrefix {
    /// Wrap a string that is already `/`-separated.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether `self` is a *strict* prefix of `other`: shorter, and `other`
    /// begins with `self` followed by a `/` segment separator.
    pub fn is_strict_prefix_of(&self, other: &PackagePrefix) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&format!("{}/", self.0))
    }
}

impl fmt::Display for PackagePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PackagePrefix {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PackagePrefix {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Remove prefixes where one is a strict prefix of another, keeping only the
/// most specific member of each nested chain.
///
/// Sorts by length descending and walks the list, dropping any candidate
/// that is a strict prefix of something already kept, and evicting anything
/// already kept that is itself a strict prefix of the candidate.
pub fn filter_nested(prefixes: Vec<PackagePrefix>) -> Vec<PackagePrefix> {
    let mut sorted = prefixes;
    sorted.sort_by_key(|p| std::cmp::Reverse(p.as_str().len()));

    let mut kept: Vec<PackagePrefix> = Vec::new();
    for candidate in sorted {
        let mut is_nested = false;
        let mut i = 0;
        while i < kept.len() {
            if candidate.is_strict_prefix_of(&kept[i]) {
                is_nested = true;
                break;
            }
            if kept[i].is_strict_prefix_of(&candidate) {
                kept.remove(i);
                continue;
            }
            i += 1;
        }
        if !is_nested {
            kept.push(candidate);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes(items: &[&str]) -> Vec<PackagePrefix> {
        items.iter().map(|s| PackagePrefix::new(*s)).collect()
    }

    #[test]
    fn strict_prefix_detection() {
        let a = PackagePrefix::new("org/apache");
        let b = PackagePrefix::new("org/apache/tomcat");
        let c = PackagePrefix::new("org/apacheextra");
        assert!(a.is_strict_prefix_of(&b));
        assert!(!b.is_strict_prefix_of(&a));
        assert!(!a.is_strict_prefix_of(&c));
        assert!(!a.is_strict_prefix_of(&a));
    }

    #[test]
    fn filter_nested_keeps_most_specific() {
        let input = prefixes(&["org/apache", "org/apache/tomcat", "org/apache/tomcat/embed"]);
        let result = filter_nested(input);
        assert_eq!(result, prefixes(&["org/apache/tomcat/embed"]));
    }

    #[test]
    fn filter_nested_keeps_unrelated_prefixes() {
        let input = prefixes(&["org/apache/tomcat", "com/example/app"]);
        let mut result = filter_nested(input);
        result.sort();
        let mut expected = prefixes(&["com/example/app", "org/apache/tomcat"]);
        expected.sort();
        assert_eq!(result, expected);
    }

    /// Applying `filter_nested` twice yields the same result as applying it once.
    #[test]
    fn filter_nested_is_idempotent() {
        let input = prefixes(&[
            "org/apache",
            "org/apache/tomcat",
            "org/apache/tomcat/embed/core",
            "org/apache/tomcat/embed",
            "com/example",
        ]);
        let once = filter_nested(input);
        let twice = filter_nested(once.clone());
        assert_eq!(once, twice);
    }
}
