//! Label parsing and validation for public suffix values.
//!
//! This module turns a raw suffix value into its ordered labels:
//! 1. Lowercases the value
//! 2. Rejects IP addresses
//! 3. Validates the IDNA ASCII form against DNS label constraints
//! 4. Returns the labels most-specific first

use tracing::debug;

use crate::error::SuffixError;
use crate::host::idna;
use crate::types::IdnaOption;

/// Labels produced by [`parse_labels`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLabels {
    /// Labels in reverse-DNS order (most-specific first).
    pub labels: Vec<String>,
    /// Whether transitional IDNA processing would change the ASCII form.
    pub transitional_different: bool,
}

/// Parse a raw value into domain labels.
///
/// An absent value yields no labels. A trailing empty label (as in `"com."`
/// or `""`) is kept as the first label so the caller can reject it.
///
/// Non-ASCII values are split from their UTS-46 normalized form, so mapped
/// separators (`。`) and fullwidth letters produce the same labels as their
/// ASCII equivalents. ASCII values carrying `xn--` labels must decode.
pub fn parse_labels(
    value: Option<&str>,
    ascii_option: IdnaOption,
    unicode_option: IdnaOption,
) -> Result<ParsedLabels, SuffixError> {
    let Some(value) = value else {
        return Ok(ParsedLabels::default());
    };

    let lowercase = value.to_lowercase();

    if is_ip_address(&lowercase) {
        debug!(value, "rejected IP address");
        return Err(SuffixError::HostNotDns);
    }

    let rejected = |err: SuffixError| {
        debug!(value, %err, "rejected by IDNA conversion");
        err
    };

    let (ascii, normalized, transitional_different) = if lowercase.is_ascii() {
        if idna::has_ace_prefix(&lowercase) {
            idna::to_unicode(&lowercase, unicode_option).map_err(rejected)?;
        }
        (lowercase.clone(), lowercase, false)
    } else {
        let ascii = idna::to_ascii(&lowercase, ascii_option).map_err(rejected)?;
        let normalized = idna::to_unicode(&ascii, unicode_option).map_err(rejected)?;
        let different = idna::is_transitional_different(&lowercase, ascii_option);
        (ascii, normalized, different)
    };

    validate_host(&ascii).map_err(|err| {
        debug!(value, %err, "rejected invalid host");
        err
    })?;

    let labels = normalized.split('.').rev().map(str::to_string).collect();

    Ok(ParsedLabels {
        labels,
        transitional_different,
    })
}

fn is_ip_address(value: &str) -> bool {
    let bare = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    bare.parse::<std::net::IpAddr>().is_ok() || bare.contains(':')
}

const MAX_HOST_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

/// Validate the ASCII form of a suffix according to DNS rules.
///
/// A single trailing empty label is allowed through.
pub fn validate_host(host: &str) -> Result<(), SuffixError> {
    if host.len() > MAX_HOST_LEN {
        return Err(SuffixError::HostTooLong);
    }

    match host.strip_suffix('.').unwrap_or(host) {
        "" => Ok(()),
        trimmed => trimmed.split('.').try_for_each(validate_dns_label),
    }
}

/// Validate a single LDH label of the ASCII form.
pub fn validate_dns_label(label: &str) -> Result<(), SuffixError> {
    match label.len() {
        0 => return Err(SuffixError::InvalidLabel("empty label".to_string())),
        len if len > MAX_LABEL_LEN => {
            return Err(SuffixError::InvalidLabel(format!(
                "`{label}` is {len} bytes, at most {MAX_LABEL_LEN} are allowed"
            )))
        }
        _ => {}
    }

    if label.bytes().any(|b| !b.is_ascii_alphanumeric() && b != b'-') {
        return Err(SuffixError::InvalidCharacter);
    }

    match (label.as_bytes().first(), label.as_bytes().last()) {
        (Some(b'-'), _) | (_, Some(b'-')) => Err(SuffixError::InvalidLabel(format!(
            "`{label}` starts or ends with a hyphen"
        ))),
        _ => Ok(()),
    }
}
