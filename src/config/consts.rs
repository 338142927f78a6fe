// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.pokemon-vortex.com";
pub const BROWSE_PATH: &str = "/pokebay/browse/";
pub const AUCTION_PATH: &str = "/pokebay/auction/";
pub const MART_PATH: &str = "/pokemart/";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite

// Browse defaults
pub const DEFAULT_FILTER: &str = "items";

// Artifacts
pub const CHECKPOINT_CSV: &str = "debug/auctions_progressive.csv";
pub const FINAL_CSV: &str = "out/auctions_final.csv";
pub const LOG_FILE: &str = "debug/app.log";
