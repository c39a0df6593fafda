//! Error types for public suffix construction and resolution.

use thiserror::Error;

use crate::types::Section;

/// Errors that can occur while building or resolving a public suffix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SuffixError {
    /// The suffix has an empty most-specific label (e.g. `"com."` or `""`).
    #[error("Invalid public suffix: `{0}`")]
    InvalidSuffix(String),

    /// The section tag is not one of `ICANN`, `PRIVATE` or the empty tag.
    #[error("Unresolvable section: `{0}` is not a public suffix list section")]
    UnresolvableSection(String),

    /// The host is an IP address rather than a DNS name.
    #[error("Host must be a valid DNS name, not an IP address")]
    HostNotDns,

    /// The hostname exceeds the maximum allowed length of 255 bytes.
    #[error("Hostname exceeds maximum length of 255 bytes")]
    HostTooLong,

    /// A DNS label is invalid (empty, too long, or badly hyphenated).
    #[error("Invalid DNS label: {0}")]
    InvalidLabel(String),

    /// A DNS label contains invalid characters.
    #[error("DNS label contains invalid characters")]
    InvalidCharacter,

    /// The IDNA codec rejected the value.
    #[error("IDNA conversion failed: {0}")]
    IdnaConversion(String),

    /// The resolved suffix does not belong to the requested section.
    #[error("The host `{host}` has no public suffix in the {section} section")]
    SectionMismatch { host: String, section: Section },
}
