// src/category.rs
//! Course categories and the search-form parameters each one needs.
//!
//! Every accepted spelling (full Korean label, short alias, English slug)
//! canonicalizes through [`Category::from_str`] into one enum value.

use std::fmt;
use std::str::FromStr;

use crate::error::{CrawlError, CrawlResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Major,
    RequiredLiberal,
    English,
    CoreLiberal,
    GeneralLiberal,
}

pub type RequestParams = Vec<(String, String)>;

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Major,
        Category::RequiredLiberal,
        Category::English,
        Category::CoreLiberal,
        Category::GeneralLiberal,
    ];

    /// Label as the remote table prints it in the category column.
    pub fn label(self) -> &'static str {
        match self {
            Category::Major => "전공",
            Category::RequiredLiberal => "교양필수",
            Category::English => "영어",
            Category::CoreLiberal => "핵심교양",
            Category::GeneralLiberal => "일반교양",
        }
    }

    /// Every spelling accepted on input, canonical label first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Category::Major => &["전공", "major"],
            Category::RequiredLiberal => &["교양필수", "교필", "required-liberal"],
            Category::English => &["영어", "english"],
            Category::CoreLiberal => &["핵심교양", "핵교", "core-liberal"],
            Category::GeneralLiberal => &["일반교양", "일교", "general-liberal"],
        }
    }

    /// Category-specific search form fields.
    /// Major and RequiredLiberal share one query mode and are told apart after parsing.
    pub fn request_params(self) -> RequestParams {
        match self {
            Category::Major | Category::RequiredLiberal => form!["hhdSrchGubun" => "search1"],
            Category::English => kita_search(1),
            Category::CoreLiberal => kita_search(7),
            Category::GeneralLiberal => kita_search(9),
        }
    }

    fn valid_labels() -> Vec<String> {
        Category::ALL
            .iter()
            .flat_map(|c| c.aliases().iter().map(|a| s!(*a)))
            .collect()
    }
}

fn kita_search(kita: u8) -> RequestParams {
    form![
        "ddlKita" => kita,
        "hhdSrchGubun" => "search2",
        "ibtnSearch2" => kita,
    ]
}

impl FromStr for Category {
    type Err = CrawlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.aliases().iter().any(|a| a.eq_ignore_ascii_case(needle)))
            .ok_or_else(|| CrawlError::UnknownCategory {
                label: s!(needle),
                valid: Category::valid_labels(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label → request parameters, failing on labels outside the known set.
pub fn build_params(label: &str) -> CrawlResult<RequestParams> {
    Ok(label.parse::<Category>()?.request_params())
}
