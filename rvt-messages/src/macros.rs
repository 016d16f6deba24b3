/// Build a message from a template and `key = value` pairs.
///
/// Values may be anything `Into<String>`, so borrowed names and formatted
/// paths mix freely:
///
/// ```
/// use rvt_messages::{msg, MESSAGES};
///
/// let root = std::path::Path::new("/work/demo");
/// let line = msg!(
///     MESSAGES.scaffold.creating_project,
///     name = "demo",
///     path = root.display().to_string(),
/// );
/// assert!(line.ends_with("demo in /work/demo"));
/// ```
#[macro_export]
macro_rules! msg {
    ($template:expr) => {
        $crate::builder::MessageBuilder::new($template).build()
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        $crate::builder::MessageBuilder::new($template)
            $(.var(stringify!($key), $value))+
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::MESSAGES;

    #[test]
    fn test_msg_macro_fills_template() {
        let text = msg!(
            MESSAGES.scaffold.creating_project,
            name = "demo",
            path = "/work/demo"
        );
        assert!(text.contains("demo"));
        assert!(text.contains("/work/demo"));
        assert!(!text.contains('{'));
    }

    #[test]
    fn test_template_without_placeholders_passes_through() {
        assert_eq!(msg!(MESSAGES.scaffold.installing_css), MESSAGES.scaffold.installing_css);
    }

    #[test]
    fn test_error_template_wraps_message() {
        let text = msg!(
            MESSAGES.common.error_generic,
            error = format!("Invalid project name: '{}'", "../evil"),
        );
        assert_eq!(text, "❌ Error: Invalid project name: '../evil'");
    }
}
