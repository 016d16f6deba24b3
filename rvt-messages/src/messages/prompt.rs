//! Interactive prompts

pub struct PromptMessages {
    pub project_name: &'static str,
    pub project_dir: &'static str,
    pub setup_lint: &'static str,
    pub use_airbnb: &'static str,
    pub setup_format: &'static str,
}

pub const PROMPT_MESSAGES: PromptMessages = PromptMessages {
    project_name: "Enter your project name (leave blank to use current directory)",
    project_dir: "Enter the directory to create the project in (leave blank to use current directory)",
    setup_lint: "Do you want to set up ESLint?",
    use_airbnb: "Do you want to use the Airbnb ESLint config?",
    setup_format: "Do you want to set up Prettier?",
};
