//! Prompt rendering.
//!
//! An override template may use `%u` (user), `%h` (host) and `%d`
//! (current directory display); without one the prompt is
//! `user@host:cwd$ `.

fn user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string())
}

fn host() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "host".to_string())
}

/// Render the prompt for the given working-directory display string.
pub fn render(cwd: &str, template: Option<&str>) -> String {
    render_parts(cwd, template, &user(), &host())
}

fn render_parts(cwd: &str, template: Option<&str>, user: &str, host: &str) -> String {
    match template {
        Some(t) => t
            .replace("%u", user)
            .replace("%h", host)
            .replace("%d", cwd),
        None => format!("{user}@{host}:{cwd}$ "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prompt_shape() {
        assert_eq!(
            render_parts("/a/b", None, "demo", "box"),
            "demo@box:/a/b$ "
        );
    }

    #[test]
    fn override_substitutes_all_three() {
        assert_eq!(
            render_parts("/", Some("[%u|%h|%d] "), "demo", "box"),
            "[demo|box|/] "
        );
    }

    #[test]
    fn override_without_placeholders_is_verbatim() {
        assert_eq!(render_parts("/x", Some("> "), "demo", "box"), "> ");
    }

    #[test]
    fn repeated_placeholders_all_expand() {
        assert_eq!(render_parts("/", Some("%d%d"), "u", "h"), "//");
    }
}
