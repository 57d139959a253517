// src/scrape/scrape.rs
use std::time::Instant;

use crate::{
    category::Category,
    config::options::FormTokens,
    course::Course,
    dept::Directory,
    error::CrawlResult,
    progress::Progress,
    row::parse_row,
    specs::timetable::{self, PageSource},
};

/// Fetch, decode, extract and assemble one department/category listing.
pub fn collect_courses(
    source: &dyn PageSource,
    tokens: &FormTokens,
    directory: &Directory,
    dept_code: &str,
    category: Category,
    mut progress: Option<&mut dyn Progress>,
) -> CrawlResult<Vec<Course>> {
    let t = Instant::now();
    let form = timetable::request_form(tokens, dept_code, category);

    let html_doc = match timetable::fetch(source, &form) {
        Ok(doc) => doc,
        Err(e) => {
            loge!("Fetch {dept_code}/{category}: {e}");
            return Err(e);
        }
    };
    logf!("Downloaded {dept_code}/{category} ({} chars)", html_doc.len());
    if let Some(p) = progress.as_deref_mut() {
        p.log("HTML 다운로드 완료");
    }

    let rows = timetable::parse_doc(&html_doc)?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows.len());
    }

    let courses = assemble(directory, dept_code, category, &rows)?;
    logd!("Timetable: parse {} rows → {} courses in {:?}", rows.len(), courses.len(), t.elapsed());

    if let Some(p) = progress.as_deref_mut() {
        for c in &courses {
            p.item_done(&c.id);
        }
        p.finish(courses.len());
    }
    Ok(courses)
}

/// Rows → courses for one department and category, in row order.
///
/// The major and required-liberal searches share one query mode on the site and
/// return overlapping rows, so each drops the other's listings here.
/// The first malformed row aborts the batch.
pub fn assemble<S: AsRef<str>>(
    directory: &Directory,
    dept_code: &str,
    category: Category,
    rows: &[Vec<S>],
) -> CrawlResult<Vec<Course>> {
    let dept_name = directory.name_for_code(dept_code).unwrap_or("");
    if dept_name.is_empty() {
        logd!("Department code {dept_code} not in directory; deptName left blank");
    }

    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let course = parse_row(row, Some(category)).map_err(|e| {
            loge!("Row {i}: {e}");
            e
        })?;
        if keep_for_category(category, &course.category) {
            out.push(course.with_department(dept_code, dept_name));
        }
    }
    Ok(out)
}

/// Overlap filter between the major and required-liberal searches.
pub fn keep_for_category(requested: Category, row_category: &str) -> bool {
    match requested {
        Category::Major => row_category != Category::RequiredLiberal.label(),
        Category::RequiredLiberal => !row_category.contains(Category::Major.label()),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_drops_required_liberal_only() {
        assert!(keep_for_category(Category::Major, "전공필수"));
        assert!(keep_for_category(Category::Major, "전공선택"));
        assert!(keep_for_category(Category::Major, "일반교양"));
        assert!(!keep_for_category(Category::Major, "교양필수"));
    }

    #[test]
    fn required_liberal_drops_any_major_label() {
        assert!(keep_for_category(Category::RequiredLiberal, "교양필수"));
        assert!(!keep_for_category(Category::RequiredLiberal, "전공필수"));
        assert!(!keep_for_category(Category::RequiredLiberal, "전공"));
        assert!(keep_for_category(Category::RequiredLiberal, "핵심교양"));
    }

    #[test]
    fn other_categories_pass_everything() {
        for c in [Category::English, Category::CoreLiberal, Category::GeneralLiberal] {
            assert!(keep_for_category(c, "교양필수"));
            assert!(keep_for_category(c, "전공"));
        }
    }
}
