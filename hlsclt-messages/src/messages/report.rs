//! Report opening messages

pub struct ReportMessages {
    pub opened: &'static str,
    pub opener_failed: &'static str,
    pub opener_missing: &'static str,
    pub stage_missing: &'static str,
}

pub const REPORT_MESSAGES: ReportMessages = ReportMessages {
    opened: "Opened {path}",
    opener_failed: "Failed to open {path} with {opener}",
    opener_missing: "Can't find '{opener}' on PATH. Set `opener` in hls_config.yaml to choose another viewer.",
    stage_missing: "Error: Looks like the {stage} report doesn't exist for project: {project}, solution number: {solution}. Make sure you have run that build stage.",
};
