//! pubsuffix - Immutable public suffix values
//!
//! This crate models the *result* of a Public Suffix List lookup: the
//! registrable-suffix portion of a domain name such as `co.uk` or `com`,
//! tagged with the list section it was found in.
//!
//! # Features
//!
//! - **Immutable**: every conversion returns a new value
//! - **Section-tagged**: ICANN, private, or unknown
//! - **IDNA-aware**: ASCII (punycode) and Unicode conversions with
//!   configurable UTS-46 options
//! - **Validated**: malformed suffixes are rejected at construction
//!
//! # Quick Start
//!
//! ```
//! use pubsuffix::{resolve, IdnaOption, PublicSuffix};
//!
//! let suffix = PublicSuffix::from_icann_section(
//!     "co.uk",
//!     IdnaOption::IDNA2008_ASCII,
//!     IdnaOption::IDNA2008_UNICODE,
//! )?;
//! assert!(suffix.is_resolvable());
//!
//! // Look a host up in the bundled list
//! let suffix = resolve("пример.рф", IdnaOption::IDNA2008_ASCII, IdnaOption::IDNA2008_UNICODE)?;
//! assert_eq!(suffix.content(), Some("рф"));
//! assert_eq!(suffix.to_ascii().content(), Some("xn--p1ai"));
//! # Ok::<(), pubsuffix::SuffixError>(())
//! ```
//!
//! # Error Handling
//!
//! Construction and resolution return `Result<T, SuffixError>`. Queries and
//! conversions on a constructed [`PublicSuffix`] never fail.
//!
//! # Cargo features
//!
//! - `serde`: serialize [`PublicSuffix`] as its suffix string (or `null`)

// Re-export the suffix value and its types
pub use error::SuffixError;
pub use suffix::PublicSuffix;
pub use types::{IdnaOption, Section};

// Re-export host utilities
pub use host::{parse_labels, resolve, resolve_in_section, resolve_url, ParsedLabels};

// Module declarations
pub mod error;
pub mod host;
pub mod suffix;
pub mod types;
