//! Shared messages across commands

pub struct CommonMessages {
    pub error_generic: &'static str,
    pub error_with_context: &'static str,
}

pub const COMMON_MESSAGES: CommonMessages = CommonMessages {
    error_generic: "{error}",
    error_with_context: "{context}: {error}",
};
