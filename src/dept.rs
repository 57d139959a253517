// src/dept.rs
//! Department name ↔ code directory.
//!
//! The remote search form identifies a department by an opaque code (`ddlDept`).
//! Lookups are total: absence is `None`, and only the interactive front end turns
//! it into `UnknownDepartment` (see [`Directory::resolve_name`]).

use std::collections::{BTreeMap, HashSet};
use std::{fs, path::Path};

use crate::error::{CrawlError, CrawlResult};

/// Sample table (name, code). The codes are placeholders, not the site's real
/// numbering; load the live table with `--depts-file`.
const BUILTIN: &[(&str, &str)] = &[
    ("기계공학과", "0110"),
    ("항공우주공학과", "0120"),
    ("조선해양공학과", "0130"),
    ("산업경영공학과", "0140"),
    ("화학공학과", "0150"),
    ("생명공학과", "0155"),
    ("고분자공학과", "0160"),
    ("신소재공학과", "0170"),
    ("사회인프라공학과", "0180"),
    ("환경공학과", "0185"),
    ("공간정보공학과", "0190"),
    ("건축학부", "0195"),
    ("에너지자원공학과", "0200"),
    ("전기공학과", "0210"),
    ("전자공학과", "0220"),
    ("정보통신공학과", "0230"),
    ("컴퓨터공학과", "0240"),
    ("인공지능공학과", "0245"),
    ("수학과", "0310"),
    ("통계학과", "0320"),
    ("물리학과", "0330"),
    ("화학과", "0340"),
    ("생명과학과", "0350"),
    ("해양과학과", "0360"),
    ("식품영양학과", "0370"),
    ("경영학과", "0410"),
    ("글로벌금융학과", "0420"),
    ("아태물류학부", "0430"),
    ("국제통상학과", "0440"),
    ("국어교육과", "0510"),
    ("영어교육과", "0520"),
    ("사회교육과", "0530"),
    ("체육교육과", "0540"),
    ("교육학과", "0550"),
    ("수학교육과", "0560"),
    ("행정학과", "0610"),
    ("정치외교학과", "0620"),
    ("미디어커뮤니케이션학과", "0630"),
    ("경제학과", "0640"),
    ("소비자학과", "0650"),
    ("아동심리학과", "0660"),
    ("사회복지학과", "0670"),
    ("한국어문학과", "0710"),
    ("사학과", "0720"),
    ("철학과", "0730"),
    ("중국학과", "0740"),
    ("일본언어문화학과", "0750"),
    ("영어영문학과", "0760"),
    ("프랑스언어문화학과", "0770"),
    ("문화콘텐츠문화경영학과", "0780"),
    ("의예과", "0810"),
    ("간호학과", "0820"),
    ("조형예술학과", "0910"),
    ("디자인융합학과", "0920"),
    ("스포츠과학과", "0930"),
    ("연극영화학과", "0940"),
    ("의류디자인학과", "0950"),
];

/// Immutable name ↔ code table. Names and codes are each unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, String)>,
}

impl Directory {
    /// Validate uniqueness of names and codes.
    pub fn new(entries: Vec<(String, String)>) -> CrawlResult<Self> {
        let mut names = HashSet::new();
        let mut codes = HashSet::new();
        for (name, code) in &entries {
            if !names.insert(name.as_str()) {
                return Err(CrawlError::DirectoryIntegrity(format!(
                    "duplicate department name '{name}'"
                )));
            }
            if !codes.insert(code.as_str()) {
                return Err(CrawlError::DirectoryIntegrity(format!(
                    "duplicate department code '{code}'"
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN.iter().map(|(n, c)| (s!(*n), s!(*c))).collect(),
        }
    }

    /// Parse a JSON object of `{ "<name>": "<code>" }`.
    pub fn from_json(text: &str) -> CrawlResult<Self> {
        let map: BTreeMap<String, String> = serde_json::from_str(text)?;
        Self::new(map.into_iter().collect())
    }

    pub fn load(path: &Path) -> CrawlResult<Self> {
        let text = fs::read_to_string(path)?;
        let dir = Self::from_json(&text)?;
        logf!("Loaded {} departments from {}", dir.len(), path.display());
        Ok(dir)
    }

    pub fn code_for_name(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_str())
    }

    pub fn name_for_code(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, c)| c == code)
            .map(|(n, _)| n.as_str())
    }

    /// Name lookup for user input: absence becomes `UnknownDepartment` with the valid list.
    pub fn resolve_name(&self, name: &str) -> CrawlResult<&str> {
        self.code_for_name(name.trim()).ok_or_else(|| CrawlError::UnknownDepartment {
            name: s!(name.trim()),
            valid: self.names().map(String::from).collect(),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::builtin()
    }
}
