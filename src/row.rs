// src/row.rs
//! One timetable row → [`Course`].
//!
//! Cell layout is positional and fixed:
//! `[id, (unused), name, grade, credit, category, place, professor, rate, note]`.

use crate::category::Category;
use crate::config::consts::ROW_CELLS;
use crate::core::sanitize::clean_note;
use crate::course::{Course, WEB_MARKER};
use crate::error::{CrawlError, CrawlResult};
use crate::schedule::normalize_schedule;

/// Build a course from one row's cell texts. Department fields are left empty;
/// the assembler fills them in once per batch.
///
/// The core-liberal search leaves the category column unreliable, so that
/// context overrides whatever the cell says.
pub fn parse_row<S: AsRef<str>>(fields: &[S], category: Option<Category>) -> CrawlResult<Course> {
    let [id, _, name, grade, credit, cat, place, professor, rate, note] = fields else {
        return Err(CrawlError::MalformedRow { expected: ROW_CELLS, found: fields.len() });
    };
    let cell = |f: &S| s!(f.as_ref().trim());

    let raw_place = cell(place);
    let schedule = normalize_schedule(&raw_place)?;

    let category = match category {
        Some(Category::CoreLiberal) => s!(Category::CoreLiberal.label()),
        _ => cell(cat),
    };

    Ok(Course {
        dept: s!(),
        dept_name: s!(),
        id: cell(id),
        name: cell(name),
        grade: cell(grade),
        credit: cell(credit),
        category,
        is_web: raw_place.contains(WEB_MARKER),
        sessions: schedule.sessions,
        rooms: schedule.rooms,
        raw_place,
        professor: cell(professor),
        rate: cell(rate),
        note: clean_note(note.as_ref().trim()),
    })
}
