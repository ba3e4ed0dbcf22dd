//! Release discovery from the published build properties

use std::fmt;

use crate::error::VersionError;

/// A released game version, as advertised by `build.ant.properties`.
///
/// The properties file carries a `version.old` entry naming the last
/// tagged release, e.g. `version.old = 1.45`. Data files for that
/// release live under a Git tag derived from the major and minor
/// components.
///
/// # Example
///
/// ```
/// use itemdex_lib::model::GameVersion;
///
/// let version = GameVersion::parse("version.old = 1.45\nversion = 1.46\n").unwrap();
/// assert_eq!(version.to_string(), "1.45");
/// assert_eq!(version.release_tag(), "VERSION_01_RELEASE_45");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameVersion {
    components: Vec<String>,
}

impl GameVersion {
    /// Builds a version from pre-split components.
    pub fn new<I, S>(components: I) -> Result<Self, VersionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        if components.len() < 2 {
            return Err(VersionError::TooFewComponents {
                value: components.join("."),
            });
        }
        Ok(Self { components })
    }

    /// Extracts the version from build properties text.
    ///
    /// The first `version.old` entry wins. Line endings are normalized
    /// before scanning, so CRLF payloads parse the same as LF.
    pub fn parse(properties: &str) -> Result<Self, VersionError> {
        let text = properties.replace("\r\n", "\n").replace('\r', "\n");
        for line in text.split('\n') {
            if !line.starts_with("version.old") {
                continue;
            }
            let Some((_, value)) = line.split_once('=') else {
                continue;
            };
            return Self::new(value.trim().split('.'));
        }
        Err(VersionError::MissingEntry)
    }

    /// Version components in order, major first.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Major release component.
    pub fn major(&self) -> &str {
        &self.components[0]
    }

    /// Minor release component.
    pub fn minor(&self) -> &str {
        &self.components[1]
    }

    /// The Git tag holding this release's data files.
    ///
    /// Majors are left-padded to two characters, so `1.45` maps to
    /// `VERSION_01_RELEASE_45`.
    pub fn release_tag(&self) -> String {
        let padded = urlencoding::encode(&format!("0{}", self.major())).into_owned();
        format!(
            "VERSION_{}_RELEASE_{}",
            last_two(&padded),
            urlencoding::encode(self.minor())
        )
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("."))
    }
}

/// Last two characters of `text`, or all of it when shorter.
fn last_two(text: &str) -> &str {
    match text.char_indices().rev().nth(1) {
        Some((index, _)) => &text[index..],
        None => text,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PROPERTIES: &str = "\
        # Stendhal build configuration\n\
        version = 1.46\n\
        version.old = 1.45\n\
        buildroot = build\n";

    #[test]
    fn test_parse_takes_version_old_entry() {
        let version = GameVersion::parse(PROPERTIES).unwrap();
        assert_eq!(version.major(), "1");
        assert_eq!(version.minor(), "45");
    }

    #[test]
    fn test_parse_normalizes_crlf() {
        let version = GameVersion::parse("version.old=0.99\r\nrest=x\r\n").unwrap();
        assert_eq!(version.components(), ["0", "99"]);
    }

    #[test]
    fn test_parse_missing_entry() {
        let err = GameVersion::parse("version = 1.46\n").unwrap_err();
        assert!(matches!(err, VersionError::MissingEntry));
    }

    #[test]
    fn test_parse_rejects_single_component() {
        let err = GameVersion::parse("version.old = 2\n").unwrap_err();
        assert!(matches!(err, VersionError::TooFewComponents { .. }));
    }

    #[test]
    fn test_release_tag_pads_major() {
        let version = GameVersion::new(["1", "45"]).unwrap();
        assert_eq!(version.release_tag(), "VERSION_01_RELEASE_45");
    }

    #[test]
    fn test_release_tag_keeps_two_digit_major() {
        let version = GameVersion::new(["12", "3"]).unwrap();
        assert_eq!(version.release_tag(), "VERSION_12_RELEASE_3");
    }

    #[test]
    fn test_display_joins_all_components() {
        let version = GameVersion::new(["1", "45", "2"]).unwrap();
        assert_eq!(version.to_string(), "1.45.2");
    }
}
