// src/lib.rs
//! Course timetable scraper.
//!
//! `get_time_table` is the one-call entry point; the CLI and library callers share
//! the same pipeline (`scrape::collect_courses`) and the same schedule normalizer.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod category;
pub mod cli;
pub mod config;
pub mod core;
pub mod course;
pub mod csv;
pub mod dept;
pub mod error;
pub mod file;
pub mod progress;
pub mod row;
pub mod schedule;
pub mod scrape;
pub mod specs;

pub use category::{build_params, Category};
pub use course::Course;
pub use dept::Directory;
pub use error::{CrawlError, CrawlResult};
pub use schedule::{normalize_schedule, Schedule, Session};

/// Fetch one department/category listing from the live site.
///
/// Uses the built-in department directory and view-state tokens from the
/// environment (`SUGANG_VIEWSTATE`, ...).
pub fn get_time_table(dept_code: &str, category: &str) -> CrawlResult<Vec<Course>> {
    let category: Category = category.parse()?;
    scrape::collect_courses(
        &specs::timetable::HttpSource,
        &config::options::FormTokens::from_env(),
        &Directory::builtin(),
        dept_code,
        category,
        None,
    )
}
