// API configuration
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_ENDPOINT_TEMPLATES: [&str; 3] = ["{base}/{path}", "/api/{path}", "/{path}"];
pub const DEFAULT_FETCH_LIMIT: u32 = 1000;

// Environment keys
pub const ENV_API_BASE_URL: &str = "REWARDS_API_BASE_URL";
pub const ENV_ENDPOINT_TEMPLATES: &str = "REWARDS_ENDPOINT_TEMPLATES";
pub const ENV_FETCH_LIMIT: &str = "REWARDS_FETCH_LIMIT";
pub const ENV_API_TOKEN: &str = "REWARDS_API_TOKEN";

// Browser storage keys checked for a bearer token, in order
pub const TOKEN_STORAGE_KEYS: [&str; 3] = ["token", "authToken", "accessToken"];

// List pages
pub const ITEMS_PER_PAGE: usize = 15;
pub const PAGE_WINDOW: usize = 5;

// Display placeholders
pub const UNTITLED_CAMPAIGN: &str = "Untitled Campaign";
pub const UNTITLED_REWARD: &str = "Untitled Reward";
pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_INITIALS: &str = "??";

// Error messages
pub const ERR_NO_ENDPOINT: &str = "No API endpoint responded";
pub const ERR_MUTATION_FAILED: &str = "Action failed. Please try again.";
pub const ERR_LOAD_TITLE: &str = "Something went wrong";
