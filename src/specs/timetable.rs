// src/specs/timetable.rs
//! Page layout of the timetable search results (`Lec_Time_Search.aspx`).
//!
//! The result table sits in the first `<tbody>`. Each data row carries its ten
//! interesting cells as `<td class="Center">`; header and spacer rows have none
//! and are skipped.

use crate::category::Category;
use crate::config::consts::{CELL_CLASS, SEARCH_PATH};
use crate::config::options::FormTokens;
use crate::core::{encoding, html, net};
use crate::error::{CrawlError, CrawlResult};

/// Where raw page bytes come from. `HttpSource` talks to the live site; tests
/// plug in captured pages.
pub trait PageSource {
    fn fetch(&self, form: &[(String, String)]) -> CrawlResult<Vec<u8>>;
}

/// Live search endpoint.
pub struct HttpSource;

impl PageSource for HttpSource {
    fn fetch(&self, form: &[(String, String)]) -> CrawlResult<Vec<u8>> {
        net::http_post_form(SEARCH_PATH, form)
    }
}

/// Full POST form: view-state tokens, category fields, then `ddlDept`.
pub fn request_form(
    tokens: &FormTokens,
    dept_code: &str,
    category: Category,
) -> Vec<(String, String)> {
    let mut form = tokens.to_form();
    form.extend(category.request_params());
    form.extend(form!["ddlDept" => dept_code]);
    form
}

/// Fetch and decode one search result page.
/// An empty body means the site rejected the request or is down.
pub fn fetch(source: &dyn PageSource, form: &[(String, String)]) -> CrawlResult<String> {
    let bytes = source.fetch(form)?;
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(CrawlError::FetchUnavailable(s!("empty response")));
    }
    Ok(encoding::decode_euc_kr(&bytes))
}

/// Cut the result table into rows of `Center` cell text.
/// A page without a `<tbody>` carries no timetable at all.
pub fn parse_doc(html_doc: &str) -> CrawlResult<Vec<Vec<String>>> {
    let (tb_s, tb_e) = html::next_tag_block_ci(html_doc, "<tbody", "</tbody>", 0)
        .ok_or_else(|| CrawlError::FetchUnavailable(s!("no timetable body in page")))?;
    let tbody = &html_doc[tb_s..tb_e];

    let rows = html::tag_blocks_ci(tbody, "<tr", "</tr>")
        .into_iter()
        .map(|tr| {
            html::tag_blocks_ci(tr, "<td", "</td>")
                .into_iter()
                .filter(|td| html::has_class(td, CELL_CLASS))
                .map(|td| html::strip_tags(html::inner_after_open_tag(td)))
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
        <html><body>
        <table class="gridview">
          <thead><tr><th>학수번호</th><th>과목명</th></tr></thead>
          <tbody>
            <tr class="hd"><th>학수번호</th><th>분반</th></tr>
            <tr>
              <td class="Center">ACE1001-001</td>
              <td class="Center"><input type="checkbox"></td>
              <td class="Center"><a href="#">자료구조</a></td>
              <td class="Center">2</td>
              <td class="Center">3</td>
              <td class="Center">전공필수</td>
              <td class="Center">월1,2,3(하-232)</td>
              <td class="Center">홍길동</td>
              <td class="Center">40/45</td>
              <td class="Center">&nbsp;</td>
              <td class="Left">hidden</td>
            </tr>
          </tbody>
        </table>
        </body></html>
    "##;

    #[test]
    fn extracts_center_cells_only() {
        let rows = parse_doc(PAGE).unwrap();
        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(r.len(), 10);
        assert_eq!(r[0], "ACE1001-001");
        assert_eq!(r[1], "");
        assert_eq!(r[2], "자료구조");
        assert_eq!(r[6], "월1,2,3(하-232)");
        assert_eq!(r[9], "&nbsp;");
    }

    #[test]
    fn missing_tbody_is_unavailable() {
        assert!(matches!(
            parse_doc("<html><body>점검중</body></html>"),
            Err(CrawlError::FetchUnavailable(_))
        ));
    }

    #[test]
    fn form_carries_tokens_category_and_dept() {
        let tokens = FormTokens { view_state: s!("VS"), ..Default::default() };
        let form = request_form(&tokens, "0240", Category::CoreLiberal);
        let keys: Vec<&str> = form.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "__VIEWSTATE",
                "__VIEWSTATEGENERATOR",
                "__EVENTVALIDATION",
                "ddlKita",
                "hhdSrchGubun",
                "ibtnSearch2",
                "ddlDept",
            ]
        );
        assert_eq!(form.last().unwrap().1, "0240");
    }

    struct Canned(&'static [u8]);
    impl PageSource for Canned {
        fn fetch(&self, _form: &[(String, String)]) -> CrawlResult<Vec<u8>> {
            Ok(self.0.to_vec())
        }
    }

    #[test]
    fn blank_body_is_unavailable() {
        assert!(matches!(fetch(&Canned(b""), &[]), Err(CrawlError::FetchUnavailable(_))));
        assert!(matches!(fetch(&Canned(b" \r\n"), &[]), Err(CrawlError::FetchUnavailable(_))));
        assert_eq!(fetch(&Canned(b"<tbody></tbody>"), &[]).unwrap(), "<tbody></tbody>");
    }
}
