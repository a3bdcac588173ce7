//! Presentation metrics derived from raw markdown content.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Average reading speed used by [`reading_time`].
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time in whole minutes.
///
/// Words are whitespace-separated tokens of the raw content. The result is
/// rounded up and never below one minute.
///
/// # Examples
/// ```
/// use blog_backend::domain::reading_time;
///
/// assert_eq!(reading_time(""), 1);
/// assert_eq!(reading_time(&"word ".repeat(201)), 2);
/// ```
pub fn reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Readable prose of `content` with every markdown marker removed.
///
/// Link text survives without its target, inline code keeps its text without
/// backticks, and images, code blocks, and raw HTML are dropped. Markdown
/// control characters left as literal text (unmatched `**`, `#` inside code,
/// unresolved `[reference][links]`) are removed too. Blocks are separated by
/// a single space. The full text is returned; clamping is left
/// to the renderer.
///
/// # Examples
/// ```
/// use blog_backend::domain::plain_excerpt;
///
/// let excerpt = plain_excerpt("# Title\n\nSome **bold** [link](https://example.com).");
/// assert_eq!(excerpt, "Title Some bold link.");
/// ```
pub fn plain_excerpt(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut excerpt = ExcerptBuffer::default();
    for event in Parser::new_ext(content, options) {
        excerpt.push(event);
    }
    excerpt.finish()
}

/// Characters that never appear in an excerpt, even when the source
/// carries them as literal text.
const CONTROL_CHARS: [char; 5] = ['#', '*', '`', '[', ']'];

#[derive(Default)]
struct ExcerptBuffer {
    text: String,
    // Nesting depth of code blocks and images, whose text is not prose.
    hidden_depth: usize,
}

impl ExcerptBuffer {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Image { .. }) => self.hidden_depth += 1,
            Event::End(TagEnd::CodeBlock | TagEnd::Image) => {
                self.hidden_depth = self.hidden_depth.saturating_sub(1);
                self.separate();
            }
            Event::Text(text) | Event::Code(text) if self.hidden_depth == 0 => {
                self.text.push_str(&text);
            }
            Event::SoftBreak
            | Event::HardBreak
            | Event::Rule
            | Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::BlockQuote(_)
                | TagEnd::TableCell
                | TagEnd::TableRow
                | TagEnd::TableHead,
            ) => self.separate(),
            _ => {}
        }
    }

    fn separate(&mut self) {
        self.text.push(' ');
    }

    fn finish(self) -> String {
        // Adjacent brackets of a reference link separate two words.
        let scrubbed: String = self
            .text
            .replace("][", " ")
            .chars()
            .filter(|ch| !CONTROL_CHARS.contains(ch))
            .collect();
        scrubbed.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for reading time and excerpt stripping.

    use super::*;
    use rstest::rstest;

    fn words(count: usize) -> String {
        vec!["lorem"; count].join(" ")
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(200, 1)]
    #[case(201, 2)]
    #[case(400, 2)]
    #[case(401, 3)]
    fn reading_time_rounds_up_per_two_hundred_words(#[case] count: usize, #[case] minutes: u32) {
        assert_eq!(reading_time(&words(count)), minutes);
    }

    #[test]
    fn reading_time_is_monotonic_and_at_least_one() {
        let mut previous = 0;
        for count in (0..2_000).step_by(37) {
            let minutes = reading_time(&words(count));
            assert!(minutes >= 1);
            assert!(minutes >= previous, "{count} words regressed to {minutes}");
            previous = minutes;
        }
    }

    #[test]
    fn reading_time_counts_words_across_lines() {
        let content = format!("{}\n\n{}", words(150), words(150));
        assert_eq!(reading_time(&content), 2);
    }

    #[rstest]
    #[case::heading("## Getting started", "Getting started")]
    #[case::emphasis("Some *light* and **heavy** and ~~gone~~ text", "Some light and heavy and gone text")]
    #[case::link("Read [the docs](https://example.com/docs) now", "Read the docs now")]
    #[case::image("Before ![diagram](img.png) after", "Before after")]
    #[case::inline_code("Call `run()` first", "Call run() first")]
    #[case::list("- one\n- two\n1. three", "one two three")]
    #[case::quote("> quoted words", "quoted words")]
    fn plain_excerpt_strips_markdown(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(plain_excerpt(markdown), expected);
    }

    #[test]
    fn plain_excerpt_drops_fenced_code() {
        let markdown = "Intro\n\n```rust\nfn main() {}\n```\n\nOutro";
        assert_eq!(plain_excerpt(markdown), "Intro Outro");
    }

    #[test]
    fn plain_excerpt_leaves_no_control_tokens() {
        let markdown = "# Title\n\nA **bold** claim with `code` and [a link](https://x.dev).\n\n\
                        ## Second\n\n* item with _emphasis_\n\n```\nlet x = 1;\n```";
        let excerpt = plain_excerpt(markdown);

        for token in ["#", "**", "`", "](", "[", "_", "* "] {
            assert!(!excerpt.contains(token), "{excerpt:?} still contains {token:?}");
        }
        assert_eq!(
            excerpt,
            "Title A bold claim with code and a link. Second item with emphasis"
        );
    }

    #[rstest]
    #[case::marker_in_inline_code("Use `**kwargs` here", "Use kwargs here")]
    #[case::unmatched_emphasis("2 ** 3 is eight", "2 3 is eight")]
    #[case::hash_in_inline_code("Tag `#include` line", "Tag include line")]
    #[case::unresolved_reference("See [docs][missing] now", "See docs missing now")]
    #[case::unresolved_shortcut("Press [Enter] to go", "Press Enter to go")]
    fn plain_excerpt_scrubs_literal_control_tokens(#[case] markdown: &str, #[case] expected: &str) {
        let excerpt = plain_excerpt(markdown);
        for token in ["#", "**", "`", "[", "]", "]("] {
            assert!(!excerpt.contains(token), "{excerpt:?} still contains {token:?}");
        }
        assert_eq!(excerpt, expected);
    }

    #[test]
    fn plain_excerpt_does_not_truncate() {
        let content = words(500);
        assert_eq!(plain_excerpt(&content), content);
    }
}
