// src/scrape/mod.rs
mod scrape;

pub use scrape::assemble;
pub use scrape::collect_courses;
pub use scrape::keep_for_category;
