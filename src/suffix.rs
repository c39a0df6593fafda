//! The public suffix value type.
//!
//! A [`PublicSuffix`] holds the result of a Public Suffix List lookup: the
//! suffix labels, the list section they were found in, and the IDNA options
//! used to convert them. Values are immutable; every conversion returns a new
//! value.

use std::fmt;

use tracing::warn;

use crate::error::SuffixError;
use crate::host::idna;
use crate::host::labels::{parse_labels, ParsedLabels};
use crate::types::{IdnaOption, Section};

/// An immutable, section-tagged public suffix such as `co.uk` or `com`.
///
/// # Examples
///
/// ```
/// use pubsuffix::{IdnaOption, PublicSuffix};
///
/// let suffix = PublicSuffix::from_icann_section(
///     "co.uk",
///     IdnaOption::IDNA2008_ASCII,
///     IdnaOption::IDNA2008_UNICODE,
/// )?;
/// assert_eq!(suffix.content(), Some("co.uk"));
/// assert!(suffix.is_icann());
/// assert!(suffix.is_resolvable());
/// # Ok::<(), pubsuffix::SuffixError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicSuffix {
    /// Labels in reverse-DNS order (most-specific first).
    labels: Vec<String>,
    public_suffix: Option<String>,
    section: Section,
    ascii_idna_option: IdnaOption,
    unicode_idna_option: IdnaOption,
    transitional_different: bool,
}

impl PublicSuffix {
    /// Create a suffix found in the ICANN section of the list.
    pub fn from_icann_section<'a>(
        value: impl Into<Option<&'a str>>,
        ascii_option: IdnaOption,
        unicode_option: IdnaOption,
    ) -> Result<Self, SuffixError> {
        Self::new(value.into(), Section::Icann, ascii_option, unicode_option)
    }

    /// Create a suffix found in the private section of the list.
    pub fn from_private_section<'a>(
        value: impl Into<Option<&'a str>>,
        ascii_option: IdnaOption,
        unicode_option: IdnaOption,
    ) -> Result<Self, SuffixError> {
        Self::new(value.into(), Section::Private, ascii_option, unicode_option)
    }

    /// Create a suffix that was not found in any section.
    pub fn from_unknown_section<'a>(
        value: impl Into<Option<&'a str>>,
        ascii_option: IdnaOption,
        unicode_option: IdnaOption,
    ) -> Result<Self, SuffixError> {
        Self::new(value.into(), Section::Unknown, ascii_option, unicode_option)
    }

    /// Create an empty suffix.
    pub fn from_null(ascii_option: IdnaOption, unicode_option: IdnaOption) -> Self {
        PublicSuffix {
            labels: Vec::new(),
            public_suffix: None,
            section: Section::Unknown,
            ascii_idna_option: ascii_option,
            unicode_idna_option: unicode_option,
            transitional_different: false,
        }
    }

    /// Create a suffix from a section tag (`"ICANN"`, `"PRIVATE"` or `""`).
    ///
    /// Fails with [`SuffixError::UnresolvableSection`] for any other tag.
    pub fn from_section_tag<'a>(
        value: impl Into<Option<&'a str>>,
        tag: &str,
        ascii_option: IdnaOption,
        unicode_option: IdnaOption,
    ) -> Result<Self, SuffixError> {
        let ParsedLabels {
            labels,
            transitional_different,
        } = parse_labels(value.into(), ascii_option, unicode_option)?;

        let public_suffix = join_labels(&labels)?;
        let section: Section = tag.parse()?;
        let section = if public_suffix.is_some() {
            section
        } else {
            Section::Unknown
        };

        Ok(PublicSuffix {
            labels,
            public_suffix,
            section,
            ascii_idna_option: ascii_option,
            unicode_idna_option: unicode_option,
            transitional_different,
        })
    }

    fn new(
        value: Option<&str>,
        section: Section,
        ascii_option: IdnaOption,
        unicode_option: IdnaOption,
    ) -> Result<Self, SuffixError> {
        Self::from_section_tag(value, section.as_str(), ascii_option, unicode_option)
    }

    /// Number of labels; zero for an empty suffix.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// The labels, most-specific first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The suffix string, or `None` for an empty suffix.
    pub fn content(&self) -> Option<&str> {
        self.public_suffix.as_deref()
    }

    /// The list section this suffix belongs to.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Whether the suffix can terminate a registrable domain.
    ///
    /// A lone top-level label such as `com` is not resolvable.
    pub fn is_resolvable(&self) -> bool {
        match &self.public_suffix {
            Some(suffix) => !suffix.ends_with('.') && self.labels.len() > 1,
            None => false,
        }
    }

    /// Whether the suffix was found in a list section.
    pub fn is_known(&self) -> bool {
        self.section.is_known()
    }

    /// Whether the suffix belongs to the ICANN section.
    pub fn is_icann(&self) -> bool {
        self.section == Section::Icann
    }

    /// Whether the suffix belongs to the private section.
    pub fn is_private(&self) -> bool {
        self.section == Section::Private
    }

    /// Whether transitional IDNA processing would have produced different labels.
    pub fn is_transitional_different(&self) -> bool {
        self.transitional_different
    }

    /// Flags used for ASCII conversions.
    pub fn ascii_idna_option(&self) -> IdnaOption {
        self.ascii_idna_option
    }

    /// Flags used for Unicode conversions.
    pub fn unicode_idna_option(&self) -> IdnaOption {
        self.unicode_idna_option
    }

    /// Convert the suffix to its ASCII (punycode) form.
    ///
    /// Returns `self` unchanged when the suffix is empty or already ASCII.
    pub fn to_ascii(self) -> Self {
        let option = self.ascii_idna_option;
        self.convert_with(|suffix| idna::to_ascii(suffix, option))
    }

    /// Convert the suffix to its Unicode form.
    ///
    /// Only suffixes carrying an `xn--` label are converted; the result is
    /// `self` unchanged when conversion yields the same string.
    pub fn to_unicode(self) -> Self {
        if !self.content().is_some_and(idna::has_ace_prefix) {
            return self;
        }

        let option = self.unicode_idna_option;
        self.convert_with(|suffix| idna::to_unicode(suffix, option))
    }

    /// Replace the ASCII IDNA option.
    pub fn with_ascii_idna_option(self, option: IdnaOption) -> Self {
        if option == self.ascii_idna_option {
            return self;
        }

        PublicSuffix {
            ascii_idna_option: option,
            ..self
        }
    }

    /// Replace the Unicode IDNA option.
    pub fn with_unicode_idna_option(self, option: IdnaOption) -> Self {
        if option == self.unicode_idna_option {
            return self;
        }

        PublicSuffix {
            unicode_idna_option: option,
            ..self
        }
    }

    /// Apply a codec conversion to the suffix string and rebuild from its
    /// result. Codec errors and rejected results leave `self` unchanged.
    fn convert_with<F>(self, convert: F) -> Self
    where
        F: FnOnce(&str) -> Result<String, SuffixError>,
    {
        let converted = match &self.public_suffix {
            None => return self,
            Some(suffix) => match convert(suffix.as_str()) {
                Ok(converted) if converted == *suffix => return self,
                Ok(converted) => converted,
                Err(err) => {
                    warn!(suffix = %suffix, %err, "keeping suffix after failed IDNA conversion");
                    return self;
                }
            },
        };

        self.rebuild(&converted)
    }

    fn rebuild(self, value: &str) -> Self {
        match Self::new(
            Some(value),
            self.section,
            self.ascii_idna_option,
            self.unicode_idna_option,
        ) {
            Ok(converted) => converted,
            Err(err) => {
                warn!(value, %err, "keeping suffix after rejected conversion");
                self
            }
        }
    }
}

/// Join labels in domain order, rejecting an empty most-specific label.
fn join_labels(labels: &[String]) -> Result<Option<String>, SuffixError> {
    let Some(first) = labels.first() else {
        return Ok(None);
    };

    let joined = labels
        .iter()
        .rev()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(".");

    if first.is_empty() {
        return Err(SuffixError::InvalidSuffix(joined));
    }

    Ok(Some(joined))
}

impl fmt::Display for PublicSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content().unwrap_or(""))
    }
}

impl<'a> From<&'a PublicSuffix> for Option<&'a str> {
    fn from(suffix: &'a PublicSuffix) -> Self {
        suffix.content()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PublicSuffix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.content(), serializer)
    }
}
