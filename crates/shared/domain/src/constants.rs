//! Product-wide constants.

pub const BRAND: &str = "EDU PATH";

/// Support line shown in the status bar and used for the messaging deep link.
pub const CONTACT_PHONE: &str = "254712345678";

/// Base of the external messaging deep link (`{base}/{number}`).
pub const MESSAGING_BASE_URL: &str = "https://wa.me";

/// Marker every simulated checkout identifier starts with.
pub const CHECKOUT_PREFIX: &str = "ws_CO_";

/// Simulated round trip to the payment gateway, in milliseconds.
pub const SIMULATED_LATENCY_MS: u64 = 1000;

/// Fee in KES for unlocking the full course report.
pub const REPORT_FEE_KES: u32 = 250;

pub const HOME_PATH: &str = "/";
pub const UNIVERSITIES_PATH: &str = "/universities";
pub const GRADE_INPUT_PATH: &str = "/grade-input";
pub const RESULTS_PATH: &str = "/results";
pub const ADMIN_PATH: &str = "/admin";
