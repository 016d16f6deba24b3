//! Common/shared messages across commands

pub struct CommonMessages {
    // ============================================================================
    // Error Messages (alphabetically sorted)
    // ============================================================================
    pub error_generic: &'static str,
    pub error_no_cleanup: &'static str,

    // ============================================================================
    // Config Messages
    // ============================================================================
    pub config_loaded: &'static str,
    pub config_defaults: &'static str,
}

pub const COMMON_MESSAGES: CommonMessages = CommonMessages {
    // Error Messages
    error_generic: "❌ Error: {error}",
    error_no_cleanup: "Files already created in {path} were left in place.",

    // Config Messages
    config_loaded: "Using configuration from {path}",
    config_defaults: "No rvt.yaml found, using built-in defaults",
};
