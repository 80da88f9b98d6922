use std::fmt;

use serde::{Deserialize, Serialize};

/// 版本后缀，例如 `-SNAPSHOT`。
///
/// 后缀原样拼接在版本号之后，中间不会插入任何分隔符，
/// 所以非空后缀应当自带前导的 `-` 或 `+`。不带分隔符的后缀仍会被接受，
/// 但会记录一条 warn 日志。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct VersionSuffix(String);

impl VersionSuffix {
    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn new(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        if !suffix.is_empty() && !suffix.starts_with(['-', '+']) {
            tracing::warn!(
                suffix = %suffix,
                "version suffix has no leading separator, it is appended verbatim"
            );
        }
        Self(suffix)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_separator(&self) -> bool {
        self.0.starts_with(['-', '+'])
    }

    pub fn append_to(&self, version: &str) -> String {
        full_version(version, &self.0)
    }
}

/// `version` 与 `suffix` 直接拼接；后缀为空时结果就是 `version`。
pub fn full_version(version: &str, suffix: &str) -> String {
    let mut full = String::with_capacity(version.len() + suffix.len());
    full.push_str(version);
    full.push_str(suffix);
    full
}

impl fmt::Display for VersionSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for VersionSuffix {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for VersionSuffix {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<VersionSuffix> for String {
    fn from(value: VersionSuffix) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_suffix_keeps_version() {
        assert_eq!(full_version("5.3.0", ""), "5.3.0");
        assert_eq!(VersionSuffix::none().append_to("5.3.0"), "5.3.0");
    }

    #[test]
    fn suffix_is_appended_without_separator() {
        assert_eq!(full_version("5.3.0", "-SNAPSHOT"), "5.3.0-SNAPSHOT");
        assert_eq!(VersionSuffix::new("-SNAPSHOT").append_to("5.3.0"), "5.3.0-SNAPSHOT");
    }

    #[test]
    fn suffix_without_separator_is_kept_verbatim() {
        let suffix = VersionSuffix::new("rc1");
        assert!(!suffix.has_separator());
        assert_eq!(suffix.append_to("5.3.0"), "5.3.0rc1");
    }

    #[test]
    fn separator_detection() {
        assert!(VersionSuffix::new("-SNAPSHOT").has_separator());
        assert!(VersionSuffix::new("+build.7").has_separator());
        assert!(!VersionSuffix::none().has_separator());
        assert!(VersionSuffix::none().is_empty());
        assert_eq!(VersionSuffix::default(), VersionSuffix::none());
    }

    #[test]
    fn display_and_conversions() {
        let suffix = VersionSuffix::from("-beta");
        assert_eq!(suffix.to_string(), "-beta");
        assert_eq!(suffix.as_str(), "-beta");
        assert_eq!(String::from(suffix), "-beta");
    }
}
