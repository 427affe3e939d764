use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://ibay.com.mv/index.php";
/// Value of the `page` query parameter that selects the category listing.
pub const CATEGORY_PAGE: &str = "cat_ajax";
pub const USER_AGENT: &str = "Mozilla/5.0";

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(300);

pub const RAW_TREE_FILE: &str = "categories_final.json";
pub const NORMALIZED_TREE_FILE: &str = "modified_categories_final.json";

pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Top-level categories and their ids, in the order they are processed.
pub const DEFAULT_ROOTS: [(&str, &str); 8] = [
    ("For Sale", "600"),
    ("Housing & Real Estate", "19"),
    ("Jobs", "55"),
    ("Services", "28"),
    ("Wanted", "87"),
    ("Business Opportunities", "176"),
    ("Announcements & Events", "227"),
    ("Free Stuff", "451"),
];
