//! Core data structures shared by the suffix value and its collaborators.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use crate::error::SuffixError;

/// The Public Suffix List section a suffix was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Section {
    /// Official top-level and delegated suffixes.
    #[cfg_attr(feature = "serde", serde(rename = "ICANN"))]
    Icann,
    /// Suffixes contributed by private organizations.
    #[cfg_attr(feature = "serde", serde(rename = "PRIVATE"))]
    Private,
    /// No section, represented by the empty tag.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = ""))]
    Unknown,
}

impl Section {
    /// The section tag: `"ICANN"`, `"PRIVATE"` or `""` for an unknown section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Icann => "ICANN",
            Section::Private => "PRIVATE",
            Section::Unknown => "",
        }
    }

    /// Whether this is a recognized list section.
    pub fn is_known(&self) -> bool {
        !matches!(self, Section::Unknown)
    }
}

impl FromStr for Section {
    type Err = SuffixError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "ICANN" => Ok(Section::Icann),
            "PRIVATE" => Ok(Section::Private),
            "" => Ok(Section::Unknown),
            _ => Err(SuffixError::UnresolvableSection(tag.to_string())),
        }
    }
}

impl TryFrom<&str> for Section {
    type Error = SuffixError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Unknown => f.write_str("UNKNOWN"),
            known => f.write_str(known.as_str()),
        }
    }
}

/// IDNA processing flags, using the UTS-46 option bit values.
///
/// The value is carried opaquely by [`PublicSuffix`](crate::PublicSuffix);
/// only the IDNA codec interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdnaOption(u32);

impl IdnaOption {
    pub const DEFAULT: IdnaOption = IdnaOption(0);
    pub const USE_STD3_RULES: IdnaOption = IdnaOption(0x02);
    pub const CHECK_BIDI: IdnaOption = IdnaOption(0x04);
    pub const CHECK_CONTEXTJ: IdnaOption = IdnaOption(0x08);
    pub const NONTRANSITIONAL_TO_ASCII: IdnaOption = IdnaOption(0x10);
    pub const NONTRANSITIONAL_TO_UNICODE: IdnaOption = IdnaOption(0x20);

    /// IDNA 2008 flags for ASCII conversion.
    pub const IDNA2008_ASCII: IdnaOption = IdnaOption(0x02 | 0x04 | 0x08 | 0x10);
    /// IDNA 2008 flags for Unicode conversion.
    pub const IDNA2008_UNICODE: IdnaOption = IdnaOption(0x02 | 0x04 | 0x08 | 0x20);

    /// Create an option set from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        IdnaOption(bits)
    }

    /// The raw bits of this option set.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every flag in `other` is set.
    pub const fn contains(self, other: IdnaOption) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for IdnaOption {
    type Output = IdnaOption;

    fn bitor(self, rhs: IdnaOption) -> IdnaOption {
        IdnaOption(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_tags() {
        assert_eq!(Section::Icann.as_str(), "ICANN");
        assert_eq!(Section::Private.as_str(), "PRIVATE");
        assert_eq!(Section::Unknown.as_str(), "");
        assert_eq!(Section::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_section_from_tag() {
        assert_eq!("ICANN".parse::<Section>().unwrap(), Section::Icann);
        assert_eq!(Section::try_from("PRIVATE").unwrap(), Section::Private);
        assert_eq!(Section::try_from("").unwrap(), Section::Unknown);
        assert_eq!(
            Section::try_from("icann").unwrap_err(),
            SuffixError::UnresolvableSection("icann".to_string())
        );
    }

    #[test]
    fn test_idna_option_flags() {
        let opt = IdnaOption::USE_STD3_RULES | IdnaOption::NONTRANSITIONAL_TO_ASCII;
        assert_eq!(opt.bits(), 0x12);
        assert!(opt.contains(IdnaOption::USE_STD3_RULES));
        assert!(!opt.contains(IdnaOption::CHECK_BIDI));
        assert!(IdnaOption::IDNA2008_ASCII.contains(opt));
        assert!(IdnaOption::DEFAULT.contains(IdnaOption::DEFAULT));
        assert_eq!(IdnaOption::from_bits(0x20), IdnaOption::NONTRANSITIONAL_TO_UNICODE);
    }
}
