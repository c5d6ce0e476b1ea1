//! Markdown fence stripping for generator output.

/// Strips one wrapping markdown code fence from generator output.
///
/// Generators often wrap structured payloads in a fenced code block,
/// with or without a `yaml`/`json` language tag. The wrapper is a
/// leading line of three or more backticks and a trailing fence line at
/// least as long as the opener. The inner content is returned with
/// surrounding whitespace trimmed; input without a wrapper comes back
/// trimmed but otherwise unchanged, and interior indentation is never
/// touched.
///
/// # Examples
///
/// ```
/// use hokusai_pattern::strip_code_fence;
///
/// let fenced = "```yaml\ntitle: \"Hello\"\n```";
/// assert_eq!(strip_code_fence(fenced), "title: \"Hello\"");
///
/// // Already-unfenced text is a no-op apart from trimming.
/// assert_eq!(strip_code_fence("  title: \"Hello\"\n"), "title: \"Hello\"");
/// ```
pub fn strip_code_fence(raw: &str) -> String {
    let text = raw.trim();
    match strip_fence_block(text) {
        Some(inner) => inner.trim().to_string(),
        None => text.to_string(),
    }
}

/// Returns the inner block when `text` is wrapped in a matched fence.
fn strip_fence_block(text: &str) -> Option<&str> {
    let (opening, rest) = text.split_once('\n')?;
    let opening = opening.trim_end();
    let fence_len = leading_backticks(opening);
    if fence_len < 3 {
        return None;
    }
    // Anything after the backticks must be a plain language tag.
    let tag = opening[fence_len..].trim();
    if !tag.is_empty() && !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    let body = rest.trim_end();
    let (inner, closing) = match body.rfind('\n') {
        Some(idx) => (&body[..idx], body[idx + 1..].trim()),
        None => ("", body.trim()),
    };
    let closing_len = leading_backticks(closing);
    // The trailing fence must be backticks only, at least as long as the
    // opener; otherwise the backticks are literal content.
    if closing_len < fence_len || closing_len != closing.len() {
        return None;
    }
    Some(inner)
}

fn leading_backticks(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b'`').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_fence() {
        assert_eq!(strip_code_fence("```\na: 1\n```"), "a: 1");
    }

    #[test]
    fn test_unterminated_fence_is_literal() {
        let text = "```yaml\na: 1";
        assert_eq!(strip_code_fence(text), text);
    }

    #[test]
    fn test_interior_indentation_preserved() {
        let fenced = "```yaml\nslides:\n  - slide_id: 1\n```";
        assert_eq!(strip_code_fence(fenced), "slides:\n  - slide_id: 1");
    }
}
