//! Status printing messages

pub struct StatusMessages {
    pub empty: &'static str,
    pub header: &'static str,
    pub tag_line: &'static str,
}

pub const STATUS_MESSAGES: StatusMessages = StatusMessages {
    empty: "No build stages have completed for {project}, solution number: {solution}",
    header: "Project status for {project}, solution number: {solution}",
    tag_line: "  • {tag}",
};
