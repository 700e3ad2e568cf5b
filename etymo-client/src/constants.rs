pub const ENDPOINT: &str = "/get_etymology";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const USER_AGENT: &str = concat!("etymo/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CONFIG: &str = "config/etymo.json";
pub const ENV_URL: &str = "ETYMO_URL";
pub const ENV_SCHEMA: &str = "ETYMO_SCHEMA";

pub const INVALID_WORD_MESSAGE: &str =
    "Please enter a valid English word (alphabetic characters only).";
pub const TRANSPORT_FAILURE_PREFIX: &str = "Unable to reach the etymology service";
pub const INVALID_RESPONSE_PREFIX: &str = "Unexpected response from the etymology service";
pub const MISSING_FIELD: &str = "undefined";

pub const FORM_ID: &str = "wordForm";
pub const INPUT_ID: &str = "wordInput";
pub const PANEL_ID: &str = "responsePanel";
pub const WORD_OUTPUT_ID: &str = "wordOutput";
pub const ETYMOLOGY_OUTPUT_ID: &str = "etymologyOutput";
pub const SIMILARITY_OUTPUT_IDS: [&str; 5] = [
    "etymologyOutput1",
    "etymologyOutput2",
    "etymologyOutput3",
    "etymologyOutput4",
    "etymologyOutput5",
];
