/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("resort {}", VERSION)
}

pub fn usage() -> String {
    format!(
        "{}\n\nUSAGE:\n    resort [--offline]\n\nOPTIONS:\n    --offline      Use the built-in sample content\n    -V, --version  Print version\n    -h, --help     Print this help\n",
        version_line()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line() {
        assert!(version_line().starts_with("resort "));
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_usage_mentions_flags() {
        let text = usage();
        assert!(text.contains("--offline"));
        assert!(text.contains("--version"));
    }
}
