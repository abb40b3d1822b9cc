// src/params.rs

// The wiki serves rendered article HTML through a JSON API; the page
// is addressed by article id, not by title.
pub const HOST: &str = "leagueoflegends.wikia.com";
pub const API_PREFIX: &str = "/api/v1/Articles/AsJson?id=";

pub const CHAMPIONS_ARTICLE_ID: u32 = 2971; // Base champion statistics
pub const ITEMS_ARTICLE_ID: u32 = 1282521; // List of items' stats

// Key columns identifying the stats table on each page.
pub const CHAMPIONS_KEY: &str = "Champions";
pub const ITEMS_KEY: &str = "Item";

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 18;

// Inventory size.
pub const ITEM_SLOTS: usize = 6;

/// Base stats that scale with level. Each pairs with a "+"-suffixed
/// column holding the per-level increment.
pub const GROWTH_STATS: [&str; 7] = ["HP", "HP5", "MP", "AD", "AS", "AR", "MR"];

/// Item columns written as percentages ("+45%"); stored as fractions.
pub const ITEM_PERCENT_STATS: [&str; 6] = ["AS", "CDR", "Crit", "HP5", "Lifesteal", "MP5"];

/// Substring window length for fuzzy name candidates.
pub const MATCH_FRAGMENT_LEN: usize = 4;
