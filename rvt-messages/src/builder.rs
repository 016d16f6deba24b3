/// Fills `{key}` placeholders in a static template.
///
/// Substitution is a single pass over the template, so a value that itself
/// contains braces (a project path like `/srv/{legacy}`) is inserted verbatim
/// and never expanded again. Placeholders without a value are kept as written.
///
/// ```
/// use rvt_messages::builder::MessageBuilder;
/// use rvt_messages::MESSAGES;
///
/// let line = MessageBuilder::new(MESSAGES.scaffold.removed_file)
///     .var("path", "public/vite.svg")
///     .build();
/// assert_eq!(line, "  Removed public/vite.svg");
/// ```
pub struct MessageBuilder {
    template: &'static str,
    vars: Vec<(&'static str, String)>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: Vec::new(),
        }
    }

    /// Set `key`; a later value for the same key wins.
    pub fn var(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.vars.retain(|(k, _)| *k != key);
        self.vars.push((key, value.into()));
        self
    }

    pub fn build(self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };
            let key = &after[..close];
            match self.lookup(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            }
            rest = &after[close + 1..];
        }

        out.push_str(rest);
        out
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MESSAGES;

    #[test]
    fn test_substitutes_every_occurrence() {
        let text = MessageBuilder::new("{name} in {dir}, again {name}")
            .var("name", "demo")
            .var("dir", "/tmp")
            .build();
        assert_eq!(text, "demo in /tmp, again demo");
    }

    #[test]
    fn test_unknown_placeholders_are_left_alone() {
        let text = MessageBuilder::new("{missing}").var("other", "x").build();
        assert_eq!(text, "{missing}");
    }

    #[test]
    fn test_braces_in_values_are_not_expanded() {
        let text = MessageBuilder::new(MESSAGES.scaffold.creating_project)
            .var("name", "site")
            .var("path", "/srv/{name}")
            .build();
        assert_eq!(
            text,
            "🚀 Creating a new React project with Vite: site in /srv/{name}"
        );
    }

    #[test]
    fn test_next_steps_use_configured_program() {
        let text = MessageBuilder::new(MESSAGES.scaffold.next_steps)
            .var("path", "/work/demo")
            .var("program", "pnpm")
            .build();
        assert!(text.contains("cd /work/demo"));
        assert!(text.ends_with("pnpm run dev"));
    }

    #[test]
    fn test_later_value_wins_and_unclosed_brace_is_kept() {
        let text = MessageBuilder::new("{tools} ready {")
            .var("tools", "npm")
            .var("tools", "npm and npx")
            .build();
        assert_eq!(text, "npm and npx ready {");
    }
}
