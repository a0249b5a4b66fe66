//! Syntax-highlight language selection for the lesson code editor.

use std::fmt;

/// Highlight language understood by the editor component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorLanguage {
    Python,
    JavaScript,
    TypeScript,
    Css,
    Html,
}

impl EditorLanguage {
    /// Tag handed to the editor for syntax highlighting.
    pub fn tag(self) -> &'static str {
        match self {
            EditorLanguage::Python => "python",
            EditorLanguage::JavaScript => "javascript",
            EditorLanguage::TypeScript => "typescript",
            EditorLanguage::Css => "css",
            EditorLanguage::Html => "html",
        }
    }

    /// File extension for the editor's synthetic tab name.
    pub fn file_extension(self) -> &'static str {
        match self {
            EditorLanguage::Python => "py",
            EditorLanguage::JavaScript => "js",
            EditorLanguage::TypeScript => "tsx",
            EditorLanguage::Css => "css",
            EditorLanguage::Html => "html",
        }
    }
}

impl fmt::Display for EditorLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Pick the editor language for a lesson.
///
/// Track-level defaults win over the lesson's technology tags. The tag scan
/// runs in a fixed order and falls back to HTML when nothing matches.
pub fn language_for(track_id: Option<&str>, technologies: &[String]) -> EditorLanguage {
    match track_id {
        Some("python-fundamentals") => return EditorLanguage::Python,
        Some("javascript-fundamentals") => return EditorLanguage::JavaScript,
        Some("react-development") => return EditorLanguage::TypeScript,
        _ => {}
    }

    let has = |tag: &str| technologies.iter().any(|t| t == tag);

    if has("python") {
        EditorLanguage::Python
    } else if has("liquid") {
        // Liquid templates highlight well enough as HTML
        EditorLanguage::Html
    } else if has("react") {
        EditorLanguage::TypeScript
    } else if has("javascript") {
        EditorLanguage::JavaScript
    } else if has("css") {
        EditorLanguage::Css
    } else if has("typescript") {
        EditorLanguage::TypeScript
    } else {
        EditorLanguage::Html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_track_default_wins_over_technologies() {
        // The python track always edits python, whatever the lesson tags say
        assert_eq!(
            language_for(Some("python-fundamentals"), &tags(&["liquid", "css"])),
            EditorLanguage::Python
        );
        assert_eq!(
            language_for(Some("react-development"), &tags(&["python"])),
            EditorLanguage::TypeScript
        );
        assert_eq!(
            language_for(Some("javascript-fundamentals"), &[]),
            EditorLanguage::JavaScript
        );
    }

    #[test]
    fn test_technology_scan_order() {
        assert_eq!(language_for(None, &tags(&["react"])), EditorLanguage::TypeScript);
        assert_eq!(language_for(None, &tags(&["liquid"])), EditorLanguage::Html);
        assert_eq!(language_for(None, &tags(&["css"])), EditorLanguage::Css);
        // python outranks the rest of the scan
        assert_eq!(
            language_for(None, &tags(&["javascript", "python"])),
            EditorLanguage::Python
        );
    }

    #[test]
    fn test_unknown_track_falls_through_to_scan() {
        assert_eq!(
            language_for(Some("shopify-dev"), &tags(&["liquid"])),
            EditorLanguage::Html
        );
    }

    #[test]
    fn test_defaults_to_html() {
        assert_eq!(language_for(None, &[]), EditorLanguage::Html);
        assert_eq!(language_for(None, &tags(&["rust"])), EditorLanguage::Html);
    }

    #[test]
    fn test_tab_file_extensions() {
        assert_eq!(EditorLanguage::Python.file_extension(), "py");
        assert_eq!(EditorLanguage::TypeScript.file_extension(), "tsx");
        assert_eq!(EditorLanguage::Html.file_extension(), "html");
    }
}
