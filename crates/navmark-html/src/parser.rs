//! Bookmark file walker
//!
//! Runs html5ever's standalone tokenizer (no tree builder) so the walker sees
//! tags exactly as written. A tree builder would re-parent the format's
//! unclosed `<DT>` and `<p>` tags and shift which `</DL>` closes which folder.
//!
//! Folder headings are siblings of the list holding their children:
//!
//! ```text
//! <DT><H3>Work</H3>
//! <DL><p>
//!     <DT><A HREF="https://a.com">A</A>
//! </DL><p>
//! ```
//!
//! so a closed `<H3>` only becomes *pending* and is pushed onto the path when
//! the next `<DL>` opens.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::TokenizerResult;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use crate::text::normalize_whitespace;
use crate::{Entry, FolderPath, Link};

/// Walker options
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Folder name used when a heading has no text
    pub untitled_folder: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            untitled_folder: "untitled folder".to_string(),
        }
    }
}

/// Netscape bookmark file parser
#[derive(Debug, Clone, Default)]
pub struct BookmarkParser {
    options: ParseOptions,
}

impl BookmarkParser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Walk the markup and return one entry per anchor, in document order
    pub fn parse(&self, html: &str) -> Vec<Entry> {
        tracing::debug!("Parsing bookmark markup ({} bytes)", html.len());

        let input = BufferQueue::default();
        input.push_back(StrTendril::from_slice(html));

        let sink = WalkerSink {
            walker: RefCell::new(Walker::new(&self.options)),
        };
        let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
        let result = tokenizer.feed(&input);
        debug_assert!(matches!(result, TokenizerResult::Done), "tokenizer paused mid-input");
        debug_assert!(input.is_empty());
        tokenizer.end();

        let entries = std::mem::take(&mut tokenizer.sink.walker.borrow_mut().entries);
        tracing::debug!("Parsed {} bookmark entries", entries.len());
        entries
    }
}

/// Folder-stack state machine driven by tag and text events
#[derive(Debug)]
struct Walker<'a> {
    options: &'a ParseOptions,
    stack: FolderPath,
    pending_folder: Option<String>,
    in_heading: bool,
    in_anchor: bool,
    text: String,
    current: Option<Link>,
    entries: Vec<Entry>,
}

impl<'a> Walker<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            stack: Vec::new(),
            pending_folder: None,
            in_heading: false,
            in_anchor: false,
            text: String::new(),
            current: None,
            entries: Vec::new(),
        }
    }

    fn start_tag(&mut self, tag: &Tag) {
        match &*tag.name {
            "h3" => {
                self.in_heading = true;
                self.text.clear();
            }
            "a" => {
                self.in_anchor = true;
                self.text.clear();
                let href = tag
                    .attrs
                    .iter()
                    .find(|attr| &*attr.name.local == "href")
                    .map(|attr| attr.value.trim().to_string())
                    .unwrap_or_default();
                self.current = Some(Link::new(href, String::new()));
            }
            "dl" => {
                if let Some(folder) = self.pending_folder.take() {
                    self.stack.push(folder);
                }
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, name: &str) {
        match name {
            "h3" => {
                self.in_heading = false;
                let folder = normalize_whitespace(&self.text);
                self.pending_folder = Some(if folder.is_empty() {
                    self.options.untitled_folder.clone()
                } else {
                    folder
                });
                self.text.clear();
            }
            "a" => {
                self.in_anchor = false;
                let title = normalize_whitespace(&self.text);
                if let Some(mut link) = self.current.take() {
                    link.title = title;
                    self.entries.push(Entry {
                        path: self.stack.clone(),
                        link,
                    });
                }
                self.text.clear();
            }
            "dl" => {
                if self.stack.pop().is_none() {
                    tracing::trace!("Ignoring </dl> with no open folder");
                }
            }
            _ => {}
        }
    }

    fn characters(&mut self, text: &str) {
        if self.in_heading || self.in_anchor {
            self.text.push_str(text);
        }
    }
}

/// Adapter between html5ever's `&self` sink interface and the walker
struct WalkerSink<'a> {
    walker: RefCell<Walker<'a>>,
}

impl TokenSink for WalkerSink<'_> {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let mut walker = self.walker.borrow_mut();
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => {
                    walker.start_tag(&tag);
                    if tag.self_closing {
                        walker.end_tag(&tag.name);
                        return TokenSinkResult::Continue;
                    }
                    match &*tag.name {
                        "script" => return TokenSinkResult::RawData(RawKind::ScriptData),
                        "style" => return TokenSinkResult::RawData(RawKind::Rawtext),
                        _ => {}
                    }
                }
                TagKind::EndTag => walker.end_tag(&tag.name),
            },
            Token::CharacterTokens(text) => walker.characters(&text),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}
