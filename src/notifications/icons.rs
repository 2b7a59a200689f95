// SPDX-License-Identifier: MPL-2.0
//! Icon-font markup for toast icons.
//!
//! Glyphs follow the Font Awesome class convention; the page stylesheet is
//! expected to load the font. Renderers without an icon font use
//! [`glyph`] to fall back to a plain Unicode symbol.

use super::Severity;

pub const SUCCESS: &str = r#"<i class="fas fa-check-circle"></i>"#;
pub const ERROR: &str = r#"<i class="fas fa-exclamation-circle"></i>"#;
pub const WARNING: &str = r#"<i class="fas fa-exclamation-triangle"></i>"#;
pub const INFO: &str = r#"<i class="fas fa-info-circle"></i>"#;
pub const SPINNER: &str = r#"<i class="fas fa-spinner fa-spin"></i>"#;

/// Markup shown by the close control.
pub const CLOSE_LABEL: &str = "\u{00d7}";

#[must_use]
pub fn for_severity(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => SUCCESS,
        Severity::Error => ERROR,
        Severity::Warning => WARNING,
        Severity::Info => INFO,
    }
}

/// Unicode stand-in for a piece of icon markup.
#[must_use]
pub fn glyph(markup: &str) -> &'static str {
    if markup.contains("fa-spinner") {
        "\u{21bb}"
    } else if markup.contains("fa-check") {
        "\u{2714}"
    } else if markup.contains("fa-exclamation-triangle") {
        "\u{26a0}"
    } else if markup.contains("fa-exclamation") || markup.contains("fa-times") {
        "\u{2716}"
    } else if markup.contains("fa-info") {
        "\u{2139}"
    } else {
        "\u{2022}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_severity_has_its_own_icon() {
        let icons: std::collections::HashSet<_> =
            Severity::ALL.iter().map(|&s| for_severity(s)).collect();
        assert_eq!(icons.len(), Severity::ALL.len());
    }

    #[test]
    fn glyphs_match_severity_icons() {
        assert_eq!(glyph(SUCCESS), "\u{2714}");
        assert_eq!(glyph(ERROR), "\u{2716}");
        assert_eq!(glyph(WARNING), "\u{26a0}");
        assert_eq!(glyph(INFO), "\u{2139}");
        assert_eq!(glyph(SPINNER), "\u{21bb}");
    }

    #[test]
    fn unknown_markup_gets_a_bullet() {
        assert_eq!(glyph("<svg></svg>"), "\u{2022}");
    }
}
