//! Generated ESLint and Prettier configuration.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

use rvt_core::error::Result;

pub const ESLINT_CONFIG_FILE: &str = ".eslintrc.json";
pub const PRETTIER_CONFIG_FILE: &str = ".prettierrc.json";
/// Flat config shipped by the Vite starter; it shadows `.eslintrc.json`.
pub const FLAT_ESLINT_CONFIG_FILE: &str = "eslint.config.js";

/// Prettier plugins declared in the generated config. The Tailwind plugin must come last.
pub const PRETTIER_PLUGINS: [&str; 2] = [
    "@ianvs/prettier-plugin-sort-imports",
    "prettier-plugin-tailwindcss",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintStyle {
    Recommended,
    /// Airbnb style guide on top of the recommended rules.
    Airbnb,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EslintConfig {
    pub root: bool,
    pub env: IndexMap<String, bool>,
    pub extends: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub plugins: Vec<String>,
    pub rules: IndexMap<String, Value>,
    pub parser_options: ParserOptions,
    pub settings: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    pub ecma_version: String,
    pub source_type: String,
}

impl EslintConfig {
    pub fn new(style: LintStyle, with_prettier: bool) -> Self {
        let mut extends = Vec::new();
        if style == LintStyle::Airbnb {
            extends.push("airbnb".to_string());
        }
        extends.extend(
            [
                "eslint:recommended",
                "plugin:react/recommended",
                "plugin:react/jsx-runtime",
                "plugin:react-hooks/recommended",
                "plugin:jsx-a11y/recommended",
            ]
            .map(String::from),
        );
        if with_prettier {
            extends.push("plugin:prettier/recommended".to_string());
        }

        let mut rules: IndexMap<String, Value> = IndexMap::new();
        if with_prettier {
            rules.insert(
                "prettier/prettier".into(),
                json!(["error", { "endOfLine": "auto" }]),
            );
        }
        for (rule, level) in [
            ("no-unused-vars", "warn"),
            ("no-console", "off"),
            ("func-names", "off"),
            ("no-process-exit", "off"),
            ("object-shorthand", "off"),
            ("class-methods-use-this", "off"),
            ("react/jsx-no-target-blank", "off"),
        ] {
            rules.insert(rule.into(), json!(level));
        }
        rules.insert(
            "react-refresh/only-export-components".into(),
            json!(["warn", { "allowConstantExport": true }]),
        );
        rules.insert("react-hooks/rules-of-hooks".into(), json!("error"));
        rules.insert("react-hooks/exhaustive-deps".into(), json!("warn"));

        Self {
            root: true,
            env: IndexMap::from([("browser".to_string(), true), ("es2020".to_string(), true)]),
            extends,
            ignore_patterns: vec!["dist".to_string()],
            plugins: ["react-refresh", "jsx-a11y", "react-hooks"]
                .map(String::from)
                .to_vec(),
            rules,
            parser_options: ParserOptions {
                ecma_version: "latest".to_string(),
                source_type: "module".to_string(),
            },
            settings: json!({ "react": { "version": "18.2" } }),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        render_json(self)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    pub tab_width: u8,
    pub single_quote: bool,
    pub use_tabs: bool,
    pub print_width: u16,
    pub semi: bool,
    pub plugins: Vec<String>,
    pub tailwind_config: String,
    pub end_of_line: String,
    pub trailing_comma: String,
}

impl PrettierConfig {
    /// `tailwind_config_file` is the Tailwind config path relative to the project root.
    pub fn new(tailwind_config_file: &str) -> Self {
        Self {
            tab_width: 2,
            single_quote: true,
            use_tabs: false,
            print_width: 80,
            semi: false,
            plugins: PRETTIER_PLUGINS.map(String::from).to_vec(),
            tailwind_config: format!("./{}", tailwind_config_file),
            end_of_line: "auto".to_string(),
            trailing_comma: "none".to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        render_json(self)
    }
}

/// Two-space indented JSON with a trailing newline.
fn render_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).expect("generated config must be valid JSON")
    }

    #[test]
    fn test_recommended_style_has_no_airbnb() {
        let config = parse(&EslintConfig::new(LintStyle::Recommended, false).to_json().unwrap());
        let extends = config["extends"].as_array().unwrap();
        assert_eq!(extends[0], "eslint:recommended");
        assert!(!extends.iter().any(|e| e == "airbnb"));
        assert!(config["rules"].get("prettier/prettier").is_none());
    }

    #[test]
    fn test_airbnb_style_extends_airbnb_first() {
        let config = parse(&EslintConfig::new(LintStyle::Airbnb, false).to_json().unwrap());
        assert_eq!(config["extends"][0], "airbnb");
        assert_eq!(config["settings"]["react"]["version"], "18.2");
        assert_eq!(config["parserOptions"]["sourceType"], "module");
    }

    #[test]
    fn test_prettier_integration_adds_rule_and_preset() {
        let config = parse(&EslintConfig::new(LintStyle::Recommended, true).to_json().unwrap());
        let extends = config["extends"].as_array().unwrap();
        assert_eq!(extends.last().unwrap(), "plugin:prettier/recommended");
        assert_eq!(config["rules"]["prettier/prettier"][1]["endOfLine"], "auto");
    }

    #[test]
    fn test_rule_order_is_preserved() {
        let json = EslintConfig::new(LintStyle::Recommended, false).to_json().unwrap();
        let unused = json.find("no-unused-vars").unwrap();
        let hooks = json.find("react-hooks/exhaustive-deps").unwrap();
        assert!(unused < hooks);
    }

    #[test]
    fn test_prettier_declares_two_plugins() {
        let json = PrettierConfig::new("tailwind.config.js").to_json().unwrap();
        let config = parse(&json);
        let plugins = config["plugins"].as_array().unwrap();
        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[1], "prettier-plugin-tailwindcss");
        assert_eq!(config["tailwindConfig"], "./tailwind.config.js");
        assert_eq!(config["semi"], false);
        assert!(json.starts_with("{\n  \"tabWidth\": 2"));
        assert!(json.ends_with("}\n"));
    }
}
