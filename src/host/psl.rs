//! Public Suffix List resolution backed by the `psl` crate.

use psl::{List, Psl, Type};
use tracing::debug;
use url::{Host, Url};

use crate::error::SuffixError;
use crate::host::idna;
use crate::host::labels::parse_labels;
use crate::suffix::PublicSuffix;
use crate::types::{IdnaOption, Section};

/// Resolve the public suffix of a host.
///
/// The host is validated first. The suffix is tagged with the section of
/// the matching list rule, or [`Section::Unknown`] when only the implicit
/// `*` rule applies. Unicode hosts yield a Unicode suffix.
pub fn resolve(
    host: &str,
    ascii_option: IdnaOption,
    unicode_option: IdnaOption,
) -> Result<PublicSuffix, SuffixError> {
    parse_labels(Some(host), ascii_option, unicode_option)?;

    let lowercase = host.to_lowercase();
    let mut ascii_host = if lowercase.is_ascii() {
        lowercase.clone()
    } else {
        idna::to_ascii(&lowercase, ascii_option)?
    };
    if ascii_host.ends_with('.') {
        ascii_host.pop();
    }

    let Some(suffix) = List.suffix(ascii_host.as_bytes()) else {
        debug!(host, "no public suffix found");
        return Ok(PublicSuffix::from_null(ascii_option, unicode_option));
    };

    let value = std::str::from_utf8(suffix.as_bytes()).map_err(|_| SuffixError::HostNotDns)?;
    let section = match suffix.typ() {
        Some(Type::Icann) if suffix.is_known() => Section::Icann,
        Some(Type::Private) if suffix.is_known() => Section::Private,
        _ => Section::Unknown,
    };
    debug!(host, suffix = value, %section, "resolved public suffix");

    let resolved =
        PublicSuffix::from_section_tag(value, section.as_str(), ascii_option, unicode_option)?;

    if lowercase.is_ascii() {
        Ok(resolved)
    } else {
        Ok(resolved.to_unicode())
    }
}

/// Resolve the public suffix of a host, requiring it to be in `section`.
pub fn resolve_in_section(
    host: &str,
    section: Section,
    ascii_option: IdnaOption,
    unicode_option: IdnaOption,
) -> Result<PublicSuffix, SuffixError> {
    let resolved = resolve(host, ascii_option, unicode_option)?;

    if resolved.section() != section {
        return Err(SuffixError::SectionMismatch {
            host: host.to_string(),
            section,
        });
    }

    Ok(resolved)
}

/// Resolve the public suffix of a URL's host.
pub fn resolve_url(
    url: &Url,
    ascii_option: IdnaOption,
    unicode_option: IdnaOption,
) -> Result<PublicSuffix, SuffixError> {
    match url.host() {
        Some(Host::Domain(domain)) => resolve(domain, ascii_option, unicode_option),
        _ => Err(SuffixError::HostNotDns),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASCII: IdnaOption = IdnaOption::IDNA2008_ASCII;
    const UNICODE: IdnaOption = IdnaOption::IDNA2008_UNICODE;

    #[test]
    fn test_simple_suffix() {
        let suffix = resolve("example.com", ASCII, UNICODE).unwrap();
        assert_eq!(suffix.content(), Some("com"));
        assert!(suffix.is_icann());
        assert!(!suffix.is_resolvable());
    }

    #[test]
    fn test_multi_label_suffix() {
        let suffix = resolve("api.example.co.uk", ASCII, UNICODE).unwrap();
        assert_eq!(suffix.content(), Some("co.uk"));
        assert!(suffix.is_icann());
        assert!(suffix.is_resolvable());
    }

    #[test]
    fn test_private_suffix() {
        let suffix = resolve("project.github.io", ASCII, UNICODE).unwrap();
        assert_eq!(suffix.content(), Some("github.io"));
        assert!(suffix.is_private());
    }

    #[test]
    fn test_unknown_suffix() {
        let suffix = resolve("example.notatld", ASCII, UNICODE).unwrap();
        assert_eq!(suffix.content(), Some("notatld"));
        assert!(!suffix.is_known());
    }

    #[test]
    fn test_fully_qualified_host() {
        let suffix = resolve("Example.COM.", ASCII, UNICODE).unwrap();
        assert_eq!(suffix.content(), Some("com"));
    }

    #[test]
    fn test_ideographic_separators() {
        let suffix = resolve("example\u{3002}co\u{3002}uk\u{3002}", ASCII, UNICODE).unwrap();
        assert_eq!(suffix.content(), Some("co.uk"));
        assert_eq!(suffix.label_count(), 2);
        assert!(suffix.is_icann());
    }

    #[test]
    fn test_unicode_host_keeps_unicode_suffix() {
        let suffix = resolve("пример.рф", ASCII, UNICODE).unwrap();
        assert_eq!(suffix.content(), Some("рф"));
        assert!(suffix.is_icann());
        assert_eq!(suffix.to_ascii().content(), Some("xn--p1ai"));
    }

    #[test]
    fn test_invalid_hosts() {
        assert_eq!(resolve("192.168.0.1", ASCII, UNICODE).unwrap_err(), SuffixError::HostNotDns);
        assert!(resolve("bad..host", ASCII, UNICODE).is_err());
    }

    #[test]
    fn test_resolve_in_section() {
        let suffix = resolve_in_section("example.co.uk", Section::Icann, ASCII, UNICODE).unwrap();
        assert_eq!(suffix.content(), Some("co.uk"));

        assert_eq!(
            resolve_in_section("project.github.io", Section::Icann, ASCII, UNICODE).unwrap_err(),
            SuffixError::SectionMismatch {
                host: "project.github.io".to_string(),
                section: Section::Icann,
            }
        );
    }

    #[test]
    fn test_resolve_url() {
        let url = Url::parse("https://docs.rs/pubsuffix").unwrap();
        assert_eq!(resolve_url(&url, ASCII, UNICODE).unwrap().content(), Some("rs"));

        let url = Url::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(resolve_url(&url, ASCII, UNICODE).unwrap_err(), SuffixError::HostNotDns);
    }
}
