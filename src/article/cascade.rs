use crate::utils::text::collapse_whitespace;
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

/// Elements whose text never counts as article content.
const NOISE_SELECTOR: &str = "script, style, nav, header, footer, aside, .ad, .advertisement";

static NOISE: LazyLock<Option<Selector>> = LazyLock::new(|| Selector::parse(NOISE_SELECTOR).ok());

/// How a candidate element is turned into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Concatenated text, trimmed.
    Text,
    /// One attribute, trimmed.
    Attr(&'static str),
    /// The attribute if present and non-blank, else the text.
    AttrOrText(&'static str),
    /// Text with noise subtrees skipped and whitespace collapsed.
    CleanText,
}

impl Pick {
    fn read(self, element: ElementRef<'_>) -> String {
        match self {
            Self::Text => element.text().collect::<String>().trim().to_string(),
            Self::Attr(name) => element
                .value()
                .attr(name)
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            Self::AttrOrText(name) => match element.value().attr(name).map(str::trim) {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => Self::Text.read(element),
            },
            Self::CleanText => clean_text(element),
        }
    }
}

/// One row of a cascade.
#[derive(Debug)]
pub struct Candidate {
    source: &'static str,
    selector: Selector,
    pick: Pick,
}

impl Candidate {
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Value of the first element in document order matching this selector.
    /// Later matches are never consulted.
    pub fn read(&self, document: &Html) -> Option<String> {
        document
            .select(&self.selector)
            .next()
            .map(|element| self.pick.read(element))
    }
}

/// Ordered candidate table, evaluated lazily: the first value the acceptance
/// predicate approves wins and the remaining rows are not read.
#[derive(Debug)]
pub struct Cascade {
    name: &'static str,
    candidates: Vec<Candidate>,
}

impl Cascade {
    /// Compile a table of `(selector, pick)` rows. Rows whose selector does
    /// not parse are dropped with a warning.
    pub fn compile(name: &'static str, rows: &[(&'static str, Pick)]) -> Self {
        let candidates = rows
            .iter()
            .filter_map(|&(source, pick)| match Selector::parse(source) {
                Ok(selector) => Some(Candidate {
                    source,
                    selector,
                    pick,
                }),
                Err(error) => {
                    tracing::warn!(cascade = name, selector = source, %error, "skipping unparsable selector");
                    None
                }
            })
            .collect();
        Self { name, candidates }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn first_accepted(
        &self,
        document: &Html,
        accept: impl Fn(&str) -> bool,
    ) -> Option<String> {
        self.candidates.iter().find_map(|candidate| {
            let value = candidate.read(document)?;
            if accept(&value) {
                tracing::trace!(cascade = self.name, selector = candidate.source, "candidate accepted");
                Some(value)
            } else {
                None
            }
        })
    }
}

/// Elements whose boundaries read as a space. Inline markup is concatenated
/// as-is so `H<sub>2</sub>O` stays `H2O`.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "li", "main", "ol", "p", "pre",
    "section", "table", "td", "th", "tr", "ul",
];

/// Text of `element` without noise descendants, whitespace collapsed. The
/// element itself is never treated as noise.
pub fn clean_text(element: ElementRef<'_>) -> String {
    let mut parts: Vec<&str> = Vec::new();
    // `None` marks the end of a block element.
    let mut stack: Vec<Option<_>> = element.children().rev().map(Some).collect();

    while let Some(entry) = stack.pop() {
        let Some(node) = entry else {
            parts.push(" ");
            continue;
        };
        match node.value() {
            Node::Text(text) => parts.push(&**text),
            Node::Element(el) => {
                if let Some(child) = ElementRef::wrap(node)
                    && NOISE.as_ref().is_some_and(|noise| noise.matches(&child))
                {
                    continue;
                }
                if BLOCK_TAGS.contains(&el.name()) {
                    parts.push(" ");
                    stack.push(None);
                }
                stack.extend(node.children().rev().map(Some));
            }
            _ => {}
        }
    }

    collapse_whitespace(&parts.concat())
}
