//! IDNA conversions between Unicode and ASCII-compatible suffix strings.

use idna::Config;
use tracing::trace;

use crate::error::SuffixError;
use crate::types::IdnaOption;

/// Build a UTS-46 configuration from IDNA option flags.
///
/// `nontransitional` names the flag that switches off transitional
/// processing for the direction being converted.
fn uts46_config(option: IdnaOption, nontransitional: IdnaOption) -> Config {
    Config::default()
        .use_std3_ascii_rules(option.contains(IdnaOption::USE_STD3_RULES))
        .transitional_processing(!option.contains(nontransitional))
        .check_hyphens(false)
        .verify_dns_length(false)
}

/// Convert a domain string to its ASCII (punycode) form.
pub fn to_ascii(value: &str, option: IdnaOption) -> Result<String, SuffixError> {
    let ascii = uts46_config(option, IdnaOption::NONTRANSITIONAL_TO_ASCII)
        .to_ascii(value)
        .map_err(|errors| SuffixError::IdnaConversion(format!("{:?}", errors)))?;

    trace!(value, %ascii, option = option.bits(), "converted to ASCII");
    Ok(ascii)
}

/// Convert a domain string to its Unicode form.
pub fn to_unicode(value: &str, option: IdnaOption) -> Result<String, SuffixError> {
    let (unicode, result) =
        uts46_config(option, IdnaOption::NONTRANSITIONAL_TO_UNICODE).to_unicode(value);
    result.map_err(|errors| SuffixError::IdnaConversion(format!("{:?}", errors)))?;

    trace!(value, %unicode, option = option.bits(), "converted to Unicode");
    Ok(unicode)
}

/// Whether the ASCII form of `value` differs between transitional and
/// nontransitional processing (e.g. for `ß` or `ς`).
pub fn is_transitional_different(value: &str, option: IdnaOption) -> bool {
    let std3 = option.contains(IdnaOption::USE_STD3_RULES);
    let convert = |transitional: bool| {
        Config::default()
            .use_std3_ascii_rules(std3)
            .transitional_processing(transitional)
            .check_hyphens(false)
            .verify_dns_length(false)
            .to_ascii(value)
    };

    match (convert(true), convert(false)) {
        (Ok(transitional), Ok(nontransitional)) => transitional != nontransitional,
        _ => false,
    }
}

/// Whether the value contains an ACE (`xn--`) label marker.
pub fn has_ace_prefix(value: &str) -> bool {
    value
        .as_bytes()
        .windows(4)
        .any(|window| window.eq_ignore_ascii_case(b"xn--"))
}
