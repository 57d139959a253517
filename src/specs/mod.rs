// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific knowledge of the remote site: which form to POST, where the
//! ground-truth table lives in the returned HTML, and how to cut it into rows of
//! cell text.
//!
//! ## What lives here
//! - Building the search form (view-state tokens + category fields + department).
//! - Pure HTML extraction using `core::html` helpers (case-insensitive tag blocks,
//!   class matching, tag stripping).
//!
//! ## What does **not** live here
//! - Interpreting cells (`row`, `schedule`), category filtering (`scrape`),
//!   persistence (`file`).
//!
//! ## Typical call chain
//! ```text
//! cli / get_time_table → scrape::collect_courses → specs::timetable::{request_form, parse_doc}
//!                                              ↘  rows of cell text
//!                             row::parse_row → scrape::assemble
//! ```
//!
//! Specs are testable offline against captured or synthetic HTML.
pub mod timetable;
