// src/consts.rs

// Net config
pub const SCRAPE_BASE: &str = "https://3ds.jdbye.com/?details=";
pub const USER_AGENT: &str = "3ds-activity-sync/titledb-scraper";
pub const FETCH_TIMEOUT_SECS: u64 = 30;

// Scrape
pub const REGIONS: [&str; 4] = ["USA", "EUR", "JAP", "KOR"];
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite

// Title names
pub const NAME_MAX: usize = 63; // bytes, excluding null terminator
pub const TITLE_ID_HEX_LEN: usize = 16;

// Output defaults
pub const DEFAULT_DB_OUT: &str = "source/title_db_data.c";
pub const DEFAULT_SCRAPE_OUT: &str = "tools/jdbye.json";
