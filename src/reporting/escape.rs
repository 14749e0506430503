/// Escapes a string for safe embedding in HTML. Every data-sourced string
/// in the report passes through here before it reaches the template.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escapes a string and turns newlines into `<br>` for prose blocks that
/// are not rendered with `white-space: pre-wrap`.
pub fn escape_multiline(s: &str) -> String {
    escape_html(s).replace('\n', "<br>")
}
