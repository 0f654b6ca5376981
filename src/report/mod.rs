//! Report renderers for organization listings.
//!
//! - [`terminal`] — colored header, repository table and summary line; respects `--quiet`.
//!
//! JSON output is a plain `serde_json` dump of [`OrgReport`](crate::models::OrgReport)
//! and needs no renderer of its own.

pub mod terminal;
