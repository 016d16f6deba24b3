//! Scaffold progress messages

pub struct ScaffoldMessages {
    // ============================================================================
    // Project Generation
    // ============================================================================
    pub creating_project: &'static str,
    pub checking_tools: &'static str,

    // ============================================================================
    // CSS Framework
    // ============================================================================
    pub installing_css: &'static str,
    pub initializing_css: &'static str,
    pub configuring_css: &'static str,

    // ============================================================================
    // Cleanup
    // ============================================================================
    pub removing_placeholders: &'static str,
    pub removed_file: &'static str,
    pub skipped_missing: &'static str,
    pub cleared_file: &'static str,

    // ============================================================================
    // Tooling
    // ============================================================================
    pub installing_lint: &'static str,
    pub installing_format: &'static str,
    pub wrote_file: &'static str,
    pub copied_template: &'static str,

    // ============================================================================
    // Summary
    // ============================================================================
    pub complete: &'static str,
    pub next_steps: &'static str,
}

pub const SCAFFOLD_MESSAGES: ScaffoldMessages = ScaffoldMessages {
    // Project Generation
    creating_project: "🚀 Creating a new React project with Vite: {name} in {path}",
    checking_tools: "Checking for {tools}...",

    // CSS Framework
    installing_css: "📦 Installing Tailwind CSS...",
    initializing_css: "Initializing Tailwind CSS...",
    configuring_css: "🎨 Configuring Tailwind CSS...",

    // Cleanup
    removing_placeholders: "🧹 Removing placeholder assets...",
    removed_file: "  Removed {path}",
    skipped_missing: "  Skipped {path} (not found)",
    cleared_file: "  Cleared {path}",

    // Tooling
    installing_lint: "📦 Installing ESLint...",
    installing_format: "📦 Installing Prettier...",
    wrote_file: "  Wrote {path}",
    copied_template: "  Copied {path} from {source}",

    // Summary
    complete: "Setup complete. Project {name} created successfully!",
    next_steps: "\nNext steps:\n  cd {path}\n  {program} run dev",
};
