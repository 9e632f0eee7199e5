//! Small XML emission helpers.

/// Escape text for use in XML content or attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Append a `<w:t>` element, preserving significant whitespace.
pub fn push_text(out: &mut String, text: &str) {
    out.push_str(r#"<w:t xml:space="preserve">"#);
    out.push_str(&escape(text));
    out.push_str("</w:t>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape(r#"w:val="x""#), "w:val=&quot;x&quot;");
        // Vietnamese text passes through untouched.
        assert_eq!(escape("Bảng kế hoạch"), "Bảng kế hoạch");
    }

    #[test]
    fn test_push_text() {
        let mut out = String::new();
        push_text(&mut out, " MỞ ĐẦU ");
        assert_eq!(out, r#"<w:t xml:space="preserve"> MỞ ĐẦU </w:t>"#);
    }
}
