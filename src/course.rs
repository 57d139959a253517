// src/course.rs
use serde::{Serialize, Serializer};

use crate::schedule::{Schedule, Session};

/// One course listing from the timetable search.
/// Serialized with the same camelCase keys the crawler has always emitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub dept: String,
    pub dept_name: String,
    pub id: String,
    pub name: String,
    pub grade: String,
    pub credit: String,
    pub category: String,
    #[serde(rename = "time", serialize_with = "sessions_joined")]
    pub sessions: Vec<Session>,
    #[serde(rename = "classroom", serialize_with = "rooms_joined")]
    pub rooms: Vec<String>,
    pub raw_place: String,
    pub is_web: bool,
    pub professor: String,
    pub rate: String,
    pub note: String,
}

/// Marker for courses with an online component in the place cell.
pub const WEB_MARKER: char = '웹';

impl Course {
    pub const HEADERS: [&'static str; 14] = [
        "dept", "deptName", "id", "name", "grade", "credit", "category",
        "time", "classroom", "rawPlace", "isWeb", "professor", "rate", "note",
    ];

    /// Attach the department. Called once per row while the list is assembled.
    pub fn with_department(mut self, code: &str, name: &str) -> Self {
        self.dept = s!(code);
        self.dept_name = s!(name);
        self
    }

    pub fn schedule(&self) -> Schedule {
        Schedule { sessions: self.sessions.clone(), rooms: self.rooms.clone() }
    }

    /// Flat row in `HEADERS` order for CSV/TSV export.
    pub fn to_row(&self) -> Vec<String> {
        let sch = self.schedule();
        vec![
            self.dept.clone(),
            self.dept_name.clone(),
            self.id.clone(),
            self.name.clone(),
            self.grade.clone(),
            self.credit.clone(),
            self.category.clone(),
            sch.time(),
            sch.classroom(),
            self.raw_place.clone(),
            self.is_web.to_string(),
            self.professor.clone(),
            self.rate.clone(),
            self.note.clone(),
        ]
    }

    pub fn headers() -> Vec<String> {
        Self::HEADERS.iter().map(|h| s!(*h)).collect()
    }
}

fn sessions_joined<S: Serializer>(sessions: &[Session], ser: S) -> Result<S::Ok, S::Error> {
    let joined = sessions.iter().map(Session::to_string).collect::<Vec<_>>().join(",");
    ser.serialize_str(&joined)
}

fn rooms_joined<S: Serializer>(rooms: &[String], ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(&rooms.join(","))
}
