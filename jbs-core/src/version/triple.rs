use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// 语义化版本三元组 `major.minor.patch`
///
/// 序列化时使用文本形式（`"7.9.0"`），这样配置文件里可以直接写版本号。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionTriple {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionTriple {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn render(&self) -> String {
        format_version(self.major, self.minor, self.patch)
    }
}

/// 以 `.` 连接三个分量，不做任何校验。
pub fn format_version(major: u32, minor: u32, patch: u32) -> String {
    format!("{major}.{minor}.{patch}")
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn parse_component(part: Option<&str>, raw: &str) -> Result<u32, SettingsError> {
    match part {
        Some(p) if !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()) => p
            .parse::<u32>()
            .map_err(|_| SettingsError::InvalidVersion(raw.to_string())),
        _ => Err(SettingsError::InvalidVersion(raw.to_string())),
    }
}

impl FromStr for VersionTriple {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let major = parse_component(parts.next(), s)?;
        let minor = parse_component(parts.next(), s)?;
        let patch = parse_component(parts.next(), s)?;
        if parts.next().is_some() {
            return Err(SettingsError::InvalidVersion(s.to_string()));
        }
        Ok(Self::new(major, minor, patch))
    }
}

impl TryFrom<String> for VersionTriple {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VersionTriple> for String {
    fn from(value: VersionTriple) -> Self {
        value.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_literal_dots() {
        assert_eq!(format_version(7, 9, 0), "7.9.0");
        assert_eq!(format_version(0, 0, 0), "0.0.0");
        assert_eq!(format_version(10, 200, 3000), "10.200.3000");
    }

    #[test]
    fn render_matches_display() {
        let v = VersionTriple::new(5, 3, 0);
        assert_eq!(v.render(), "5.3.0");
        assert_eq!(v.to_string(), v.render());
    }

    #[test]
    fn render_is_deterministic() {
        let v = VersionTriple::new(7, 9, 0);
        assert_eq!(v.render(), v.render());
        assert_eq!(format_version(7, 9, 0), format_version(7, 9, 0));
    }

    #[test]
    fn parse_valid() {
        let v: VersionTriple = "8.10.1".parse().unwrap();
        assert_eq!(v, VersionTriple::new(8, 10, 1));
        assert_eq!(v.to_string(), "8.10.1");
    }

    #[test]
    fn parse_drops_leading_zeros() {
        let v: VersionTriple = "07.09.00".parse().unwrap();
        assert_eq!(v.to_string(), "7.9.0");
    }

    #[test]
    fn parse_rejects_malformed() {
        for raw in ["", "7.9", "7.9.0.1", "7.x.0", "+7.9.0", "7..0", "7.9.0-SNAPSHOT", " 7.9.0"] {
            let err = raw.parse::<VersionTriple>().unwrap_err();
            assert!(
                matches!(err, SettingsError::InvalidVersion(ref s) if s == raw),
                "unexpected result for {raw:?}: {err}"
            );
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!("4294967296.0.0".parse::<VersionTriple>().is_err());
    }

    #[test]
    fn ordering_follows_components() {
        assert!(VersionTriple::new(7, 9, 0) < VersionTriple::new(7, 10, 0));
        assert!(VersionTriple::new(8, 0, 0) > VersionTriple::new(7, 99, 99));
    }
}
