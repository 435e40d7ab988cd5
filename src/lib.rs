//! optslot: inline-storage optional values.
//!
//! This crate provides [`Optional<T>`], a value-semantic wrapper holding
//! zero or one instance of a type in a single inline slot — a presence
//! flag plus storage sized for exactly one value, with no heap allocation
//! by the container itself:
//!
//! - **Container**: construction (empty, from value, converting,
//!   in-place), the full assignment state table, checked and fallback
//!   accessors, equality against containers, bare values, and the
//!   [`NULL`] marker
//! - **Type predicates**: compile-time type-relationship queries as
//!   generic bounds, gating which construction/assignment paths
//!   participate for a source type
//! - **Forwarding**: owned arguments are moved into the slot, borrowed
//!   arguments are cloned — one entry point, value category preserved
//! - **Error handling**: a single failure mode, [`Error::NoValue`], on
//!   accessing an empty container
//!
//! # Examples
//!
//! A configuration record with fields that may legitimately be absent
//! checks presence (or supplies a fallback) before use:
//!
//! ```
//! use optslot::{has_value, Optional, NULL};
//!
//! struct TrackConfig {
//!     timeline_offset: Optional<i64>,
//!     language: Optional<String>,
//! }
//!
//! let mut config = TrackConfig {
//!     timeline_offset: Optional::empty(),
//!     language: Optional::of("eng".to_string()),
//! };
//!
//! // Fallback access never fails and never copies the default.
//! assert_eq!(*config.timeline_offset.get_or(&0), 0);
//!
//! // Checked access surfaces absence as an error.
//! assert!(config.language.get().is_ok());
//!
//! config.language.reset();
//! assert!(NULL == config.language);
//! assert!(!has_value(&config.language));
//! ```
//!
//! Serde support for the container (same data model as [`Option`]) is
//! available behind the `serde` feature.

pub mod error;
pub mod forward;
pub mod optional;
pub mod traits;

pub use error::{Error, Result};
pub use forward::IntoValue;
pub use optional::{has_value, make_optional, Null, Optional, NULL};
pub use traits::ConvertibleTo;
