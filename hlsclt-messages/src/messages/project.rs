//! Project lookup and configuration messages

pub struct ProjectMessages {
    pub config_defaults: &'static str,
    pub config_not_found: &'static str,
    pub not_found: &'static str,
    pub using_solution: &'static str,
}

pub const PROJECT_MESSAGES: ProjectMessages = ProjectMessages {
    config_defaults: "No {file} found in {dir}, using default configuration",
    config_not_found: "Configuration file not found: {path}",
    not_found: "Error: Can't find a project folder have you run a build process yet?",
    using_solution: "Using {project}/solution{solution}",
};
