//! Markdown code-fence stripping for completion text.

/// Opening fence with the `json` language tag
const JSON_FENCE: &str = "```json";

/// Bare fence marker
const FENCE: &str = "```";

/// Removes every ```` ```json ```` / ```` ``` ```` marker and trims whitespace.
///
/// Plain text replacement, not a markdown parse: markers are removed wherever
/// they occur, with or without a newline after them. The result never contains
/// a fence marker, so applying this twice gives the same text.
#[must_use]
pub fn strip_code_fences(text: &str) -> String {
  let mut cleaned = text.replace(JSON_FENCE, "");
  // removal can join stray backticks into a new marker
  while cleaned.contains(FENCE) {
    cleaned = cleaned.replace(FENCE, "");
  }
  cleaned.trim().to_string()
}
