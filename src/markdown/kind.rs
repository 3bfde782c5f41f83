//! Element classification for the renderer.

use scraper::node::Element;

/// The finite set of element kinds the renderer knows how to format.
///
/// Classification happens once per element. Anything unrecognized falls
/// through to [`NodeKind::Container`], which renders its children
/// transparently - unknown page structure is non-fatal by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Paragraph,
    Strong,
    Emphasis,
    Code,
    Pre,
    BulletList,
    NumberedList,
    ListItem,
    Link,
    Heading(u8),
    /// Custom code block marked by a platform-specific class, not `pre`.
    CodeBlock,
    Table,
    Blockquote,
    Rule,
    Image,
    /// Unrecognized element; children render with no added markup.
    Container,
}

impl NodeKind {
    /// Classify an element by tag name first, then by the code-block class
    /// marker used by chat frontends that style code without `pre`.
    ///
    /// Tag names win over the class marker, so `<p class="code-block">` is
    /// still a paragraph.
    pub(crate) fn classify(element: &Element, code_block_class: &str) -> Self {
        match element.name() {
            "p" => Self::Paragraph,
            "strong" | "b" => Self::Strong,
            "em" | "i" => Self::Emphasis,
            "code" => Self::Code,
            "pre" => Self::Pre,
            "ul" => Self::BulletList,
            "ol" => Self::NumberedList,
            "li" => Self::ListItem,
            "a" => Self::Link,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "table" => Self::Table,
            "blockquote" => Self::Blockquote,
            "hr" => Self::Rule,
            "img" => Self::Image,
            _ => {
                if element.classes().any(|c| c == code_block_class) {
                    Self::CodeBlock
                } else {
                    Self::Container
                }
            }
        }
    }
}
