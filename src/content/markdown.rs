//! Markdown rendering for post bodies

use pulldown_cmark::{html, Options, Parser};

/// Renders MDX post bodies to HTML. Rendering is delegated entirely to
/// pulldown-cmark; this type only fixes the option set.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render markdown to an HTML string.
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut output = String::new();
        html::push_html(&mut output, parser);
        output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimate reading time in whole minutes from a body's word count.
/// Always rounds up and never goes below one minute.
pub fn reading_time(body: &str, words_per_minute: u32) -> u32 {
    let words = body.split_whitespace().count() as u32;
    let minutes = words.div_ceil(words_per_minute);
    minutes.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("This is a test."));
    }

    #[test]
    fn test_render_gfm_table() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let four_hundred = vec!["word"; 400].join(" ");
        assert_eq!(reading_time(&four_hundred, 200), 2);

        let two_hundred_one = vec!["word"; 201].join(" ");
        assert_eq!(reading_time(&two_hundred_one, 200), 2);

        let two_hundred = vec!["word"; 200].join(" ");
        assert_eq!(reading_time(&two_hundred, 200), 1);
    }

    #[test]
    fn test_reading_time_minimum_one_minute() {
        assert_eq!(reading_time("", 200), 1);
        assert_eq!(reading_time("short", 200), 1);
    }
}
