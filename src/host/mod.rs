//! Host label handling.
//!
//! This module contains the collaborators of [`PublicSuffix`](crate::PublicSuffix):
//! - Label parsing and DNS validation
//! - IDNA conversions
//! - Public Suffix List resolution

pub mod idna;
pub mod labels;
pub mod psl;

pub use labels::{parse_labels, validate_dns_label, validate_host, ParsedLabels};
pub use self::psl::{resolve, resolve_in_section, resolve_url};
