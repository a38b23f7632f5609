//! Compact page-number ranges for paginated lists.
//!
//! Given how many pages exist, which one is active, and how many entries may
//! be shown, [`compute`] returns the page numbers to render. When not every
//! page fits, one or two contiguous runs are replaced by a marker while the
//! first page, the last page and the neighbourhood of the current page stay
//! visible.
//!
//! # Example
//!
//! ```
//! use pagewise::{Entry, Marker, PaginationBehaviour, PaginationConfig, PaginationRequest, FixedLength};
//!
//! let request = PaginationRequest::new(99_999, 1).unwrap();
//! let config = PaginationConfig::new(7).unwrap().with_omitted_chunk_marker("...");
//!
//! let data = FixedLength.compute(&request, &config).unwrap();
//! assert_eq!(data.entries(), &[
//!     Entry::Page(1),
//!     Entry::Page(2),
//!     Entry::Page(3),
//!     Entry::Omitted(Marker::from("...")),
//!     Entry::Page(99_997),
//!     Entry::Page(99_998),
//!     Entry::Page(99_999),
//! ]);
//! assert_eq!(serde_json::to_string(&data).unwrap(), r#"[1,2,3,"...",99997,99998,99999]"#);
//! ```

pub use self::behaviour::PaginationBehaviour;
pub use self::config::{CONFIG_FILE, DEFAULT_MAXIMUM_VISIBLE, ENV_PREFIX, PaginationConfig};
pub use self::data::{Entry, PaginationData};
pub use self::error::{ConfigError, InvalidRequest, Result};
pub use self::fixed_length::{FixedLength, Layout, compute, compute_with_value};
pub use self::guard::MINIMUM_MAXIMUM_VISIBLE;
pub use self::marker::Marker;
pub use self::request::PaginationRequest;

pub mod guard;

mod behaviour;
mod config;
mod data;
mod error;
mod fixed_length;
mod marker;
mod request;
