// src/config/consts.rs

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_REPORT_STEM: &str = "market_report";
