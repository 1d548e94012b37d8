// src/config/consts.rs

// Net config
pub const SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQUgbmLaIQcadhPZSGf2nUBoSOhvcqMMoU0DPWlRUKmRrYHYtXsvWxGgqhWRjqpakry4VBTB2CHtMen/pub?gid=1592321778&single=true&output=csv";

pub const OAUTH_TOKEN_URL: &str = "https://oauth.battle.net/token";
pub const API_BASE: &str = "https://us.api.blizzard.com/data/wow";
pub const API_NAMESPACE: &str = "static-classic1x-us";
pub const API_LOCALE: &str = "en_US";

pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Be polite to the API; dumps take a while either way
pub const REQUEST_PAUSE_MS: u64 = 75;
pub const REQUEST_RETRIES: u32 = 3;
pub const CHECKPOINT_EVERY: usize = 100;

// Local state
pub const STORE_DIR: &str = ".store";
pub const FAVOURITES_FILE: &str = "favourites.json";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "craftlist";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const ITEMS_DUMP_FILE: &str = "items.json";
pub const RECIPES_DUMP_FILE: &str = "all-items-with-recipes.json";
