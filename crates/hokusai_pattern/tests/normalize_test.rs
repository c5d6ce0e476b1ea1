//! Tests for markdown fence stripping.

use hokusai_pattern::strip_code_fence;

#[test]
fn test_yaml_tagged_fence() {
    let raw = "```yaml\ntitle: \"Hello\"\ndescription: \"World\"\n```";
    assert_eq!(
        strip_code_fence(raw),
        "title: \"Hello\"\ndescription: \"World\""
    );
}

#[test]
fn test_json_tagged_fence() {
    let raw = "```json\n{\"title\": \"Hello\"}\n```";
    assert_eq!(strip_code_fence(raw), "{\"title\": \"Hello\"}");
}

#[test]
fn test_bare_fence() {
    let raw = "```\ntitle: \"Hello\"\n```";
    assert_eq!(strip_code_fence(raw), "title: \"Hello\"");
}

#[test]
fn test_unfenced_input_is_noop() {
    let raw = "title: \"Hello\"\nslides: []";
    assert_eq!(strip_code_fence(raw), raw);
}

#[test]
fn test_normalizing_twice_is_idempotent() {
    let raw = "```yaml\ntitle: \"Hello\"\n```";
    let once = strip_code_fence(raw);
    let twice = strip_code_fence(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_surrounding_whitespace_trimmed() {
    let raw = "\n\n  ```yaml\ntitle: \"Hello\"\n```  \n";
    assert_eq!(strip_code_fence(raw), "title: \"Hello\"");
}

#[test]
fn test_longer_fence_with_literal_backticks_inside() {
    // A four-backtick fence wraps content that itself contains a
    // three-backtick line; only the outer block is stripped.
    let raw = "````\ninner:\n```\nliteral\n```\n````";
    assert_eq!(strip_code_fence(raw), "inner:\n```\nliteral\n```");
}

#[test]
fn test_short_closing_fence_is_literal() {
    // The closing fence must be at least as long as the opener.
    let raw = "````yaml\ntitle: \"Hello\"\n```";
    assert_eq!(strip_code_fence(raw), raw);
}

#[test]
fn test_interior_indentation_preserved() {
    let raw = "```yaml\nslides:\n  - slide_id: 1\n    pattern_type: \"linear_process\"\n```";
    assert_eq!(
        strip_code_fence(raw),
        "slides:\n  - slide_id: 1\n    pattern_type: \"linear_process\""
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(strip_code_fence(""), "");
    assert_eq!(strip_code_fence("   \n  "), "");
}

#[test]
fn test_fenced_empty_block() {
    assert_eq!(strip_code_fence("```yaml\n```"), "");
}

#[test]
fn test_non_language_suffix_is_literal() {
    // A first line with more than a language tag is not a fence.
    let raw = "``` not a fence\ncontent\n```";
    assert_eq!(strip_code_fence(raw), raw);
}
