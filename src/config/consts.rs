// src/config/consts.rs

// Net config
pub const HOST: &str = "sugang.inha.ac.kr";
pub const PORT: u16 = 80;
pub const SEARCH_PATH: &str = "/sugang/SU_51001/Lec_Time_Search.aspx";
pub const TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "sugang_scrape/0.3";

// View-state tokens are pinned to one page render; override per session.
pub const ENV_VIEWSTATE: &str = "SUGANG_VIEWSTATE";
pub const ENV_VIEWSTATE_GENERATOR: &str = "SUGANG_VIEWSTATEGENERATOR";
pub const ENV_EVENT_VALIDATION: &str = "SUGANG_EVENTVALIDATION";

// Local state
pub const LOG_FILE: &str = ".sugang/debug.log";

// Parse
pub const ROW_CELLS: usize = 10;
pub const FIRST_DAY: char = '월';
/// Weekdays plus `웹` (online, no fixed slot).
pub const DAY_MARKERS: [char; 8] = ['월', '화', '수', '목', '금', '토', '일', '웹'];
pub const CELL_CLASS: &str = "center";
