//! The compiled-in marker template and its placeholder tokens.
//!
//! The template is the "shuttle" arrow drawn on a 52x52 viewBox. Two literal
//! tokens are reserved for substitution:
//!
//! - [`FILL_TOKEN`]: the fill of the `Background` path
//! - [`HEADING_TOKEN`]: the angle inside `transform="rotate(...)"` on the root element

// ============================================================================
// Template Constants
// ============================================================================

/// The raw SVG template, embedded at compile time.
pub const SHUTTLE_SVG: &str = include_str!("../assets/shuttle.svg");

/// Placeholder for the marker fill color.
///
/// This is also the template's own fill, so an unsubstituted template renders
/// in the default marker blue.
pub const FILL_TOKEN: &str = "#33A7FF";

/// Placeholder for the rotation heading, in degrees.
pub const HEADING_TOKEN: &str = "HEADING";

// ============================================================================
// MarkerTemplate
// ============================================================================

/// An SVG document with a fill token and a heading token.
///
/// Substitution replaces only the **first** occurrence of each token. The
/// heading is substituted before the color, so a color string that happens
/// to contain the heading token is never rewritten.
///
/// # Example
///
/// ```
/// use shuttle_marker::MarkerTemplate;
///
/// let svg = MarkerTemplate::shuttle().substitute("red", "90");
/// assert!(svg.contains(r#"fill="red""#));
/// assert!(svg.contains("rotate(90)"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerTemplate {
    source: &'static str,
    fill_token: &'static str,
    heading_token: &'static str,
}

impl MarkerTemplate {
    /// The built-in shuttle arrow template.
    pub const fn shuttle() -> Self {
        Self {
            source: SHUTTLE_SVG,
            fill_token: FILL_TOKEN,
            heading_token: HEADING_TOKEN,
        }
    }

    /// Creates a template from custom static markup and tokens.
    ///
    /// Tokens that do not occur in `source` are simply never replaced.
    pub const fn custom(
        source: &'static str,
        fill_token: &'static str,
        heading_token: &'static str,
    ) -> Self {
        Self {
            source,
            fill_token,
            heading_token,
        }
    }

    /// Returns the unsubstituted markup.
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn fill_token(&self) -> &'static str {
        self.fill_token
    }

    pub fn heading_token(&self) -> &'static str {
        self.heading_token
    }

    /// Returns `true` if both tokens occur verbatim in the markup.
    pub fn has_tokens(&self) -> bool {
        self.source.contains(self.fill_token) && self.source.contains(self.heading_token)
    }

    /// Substitutes the first occurrence of each token.
    ///
    /// Neither value is inspected; malformed input yields a malformed document.
    pub fn substitute(&self, color: &str, heading: &str) -> String {
        let rotated = replace_first(self.source, self.heading_token, heading);
        replace_first(&rotated, self.fill_token, color)
    }
}

impl Default for MarkerTemplate {
    fn default() -> Self {
        Self::shuttle()
    }
}

/// Replaces the first occurrence of `token` in `text`.
fn replace_first(text: &str, token: &str, value: &str) -> String {
    let Some(start) = text.find(token) else {
        return text.to_string();
    };

    let mut result = String::with_capacity(text.len() + value.len());
    result.push_str(&text[..start]);
    result.push_str(value);
    result.push_str(&text[start + token.len()..]);
    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuttle_template_contains_both_tokens() {
        let template = MarkerTemplate::shuttle();
        assert!(template.has_tokens());
        assert_eq!(template.source().matches(FILL_TOKEN).count(), 1);
        assert_eq!(template.source().matches(HEADING_TOKEN).count(), 1);
    }

    #[test]
    fn shuttle_template_is_bare_document() {
        assert!(SHUTTLE_SVG.starts_with("<?xml"));
        assert!(SHUTTLE_SVG.ends_with("</svg>"));
    }

    #[test]
    fn substitute_replaces_both_tokens() {
        let svg = MarkerTemplate::shuttle().substitute("#FF0000", "45");
        assert!(svg.contains(r##"fill="#FF0000""##));
        assert!(svg.contains(r#"transform="rotate(45)""#));
        assert!(!svg.contains(FILL_TOKEN));
        assert!(!svg.contains(HEADING_TOKEN));
    }

    #[test]
    fn substitute_leaves_other_fills_alone() {
        let svg = MarkerTemplate::shuttle().substitute("#FF0000", "0");
        assert!(svg.contains(r##"id="Shape" fill="#000""##));
        assert!(svg.contains(r#"fill="none""#));
    }

    #[test]
    fn color_containing_heading_token_is_not_rewritten() {
        let svg = MarkerTemplate::shuttle().substitute("HEADING", "30");
        assert!(svg.contains("rotate(30)"));
        assert!(svg.contains(r#"fill="HEADING""#));
    }

    #[test]
    fn color_equal_to_fill_token_is_single_substitution() {
        let svg = MarkerTemplate::shuttle().substitute(FILL_TOKEN, "0");
        assert_eq!(svg.matches(FILL_TOKEN).count(), 1);
    }

    #[test]
    fn custom_template_only_replaces_first_occurrence() {
        let template = MarkerTemplate::custom("<a c=\"X\" d=\"X\" r=\"H\" s=\"H\"/>", "X", "H");
        assert_eq!(
            template.substitute("blue", "10"),
            "<a c=\"blue\" d=\"X\" r=\"10\" s=\"H\"/>"
        );
    }

    #[test]
    fn missing_tokens_pass_through() {
        let template = MarkerTemplate::custom("<svg/>", "X", "H");
        assert!(!template.has_tokens());
        assert_eq!(template.substitute("red", "5"), "<svg/>");
    }
}
