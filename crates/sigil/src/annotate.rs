//! Annotated text output
//!
//! The renderer produces `AnnotatedText`: an ordered sequence of text runs,
//! each tagged with the semantic categories it sits inside, plus block and
//! line-break markers for wrapped parameter lists. The category vocabulary is
//! the stable contract the presentation layer styles against; renames here are
//! breaking changes for every stylesheet downstream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a text run
///
/// Serialized names (camelCase) are the presentation-layer contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tag {
    /// Primitive keyword (never, any, this, undefined, boolean, number, string)
    Primitive,
    /// Union type group
    Union,
    /// Intersection type group
    Intersection,
    /// Tuple type group
    Tuple,
    /// Inline object type group
    Object,
    /// Indexed access group
    Indexed,
    /// Keyword-operator group
    Operator,
    /// Array type group
    Array,
    /// Function type group
    Function,
    /// Generic parameter reference
    TypeParam,
    /// Named type reference group
    Type,
    /// Namespace segment of a qualified type name
    TypeQualifier,
    /// Named type's own name
    TypeName,
    /// Parameter name
    Param,
    /// Object/interface member group
    Member,
    /// Function name in a call signature
    FnName,
    /// Module qualifier of a static function
    FnQualifier,
    /// Language keyword (type, extends, implements)
    Keyword,
    /// Structural punctuation
    Punctuation,
}

/// A run of text with its semantic tags and optional link target
///
/// `tags` is the nesting path of categories, outermost first; the innermost
/// tag is the most specific styling hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Semantic categories, outermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Navigation target for linked type names, e.g. `/Collection.Keyed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl TextRun {
    /// Innermost (most specific) tag, if any
    pub fn innermost_tag(&self) -> Option<Tag> {
        self.tags.last().copied()
    }
}

/// One element of an annotated rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Segment {
    /// A tagged text run
    Run(TextRun),
    /// A line break inside a wrapped parameter list
    LineBreak,
    /// Start of a wrapped parameter block
    BlockStart,
    /// End of a wrapped parameter block
    BlockEnd,
}

/// Styled, linkable rendering of a signature or type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AnnotatedText {
    segments: Vec<Segment>,
}

impl AnnotatedText {
    /// The segments in render order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate over the text runs, skipping markers
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Run(run) => Some(run),
            _ => None,
        })
    }

    /// Un-styled text: run contents joined, line breaks as newlines
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Run(run) => out.push_str(&run.text),
                Segment::LineBreak => out.push('\n'),
                Segment::BlockStart | Segment::BlockEnd => {}
            }
        }
        out
    }

    /// Character count of the run text only (markers contribute nothing)
    ///
    /// For unwrapped renderings this is exactly the width the text occupies.
    pub fn plain_len(&self) -> usize {
        self.runs().map(|run| run.text.chars().count()).sum()
    }
}

impl fmt::Display for AnnotatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plain_text())
    }
}

/// Builder the renderer emits through
///
/// Tracks the current tag nesting and link target; every run emitted carries
/// a snapshot of both.
#[derive(Debug, Default)]
pub(crate) struct Emitter {
    segments: Vec<Segment>,
    tags: Vec<Tag>,
    link: Option<String>,
}

impl Emitter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Emit a run with the current tag stack
    pub(crate) fn text(&mut self, text: impl Into<String>) {
        self.segments.push(Segment::Run(TextRun {
            text: text.into(),
            tags: self.tags.clone(),
            link: self.link.clone(),
        }));
    }

    /// Emit a run with the current tag stack plus one extra tag
    pub(crate) fn tagged(&mut self, tag: Tag, text: impl Into<String>) {
        self.tags.push(tag);
        self.text(text);
        self.tags.pop();
    }

    /// Emit structural punctuation
    pub(crate) fn punct(&mut self, text: impl Into<String>) {
        self.tagged(Tag::Punctuation, text);
    }

    /// Emit a line break marker
    pub(crate) fn line_break(&mut self) {
        self.segments.push(Segment::LineBreak);
    }

    /// Run `f` inside a tagged group
    pub(crate) fn group<F, E>(&mut self, tag: Tag, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.tags.push(tag);
        let result = f(self);
        self.tags.pop();
        result
    }

    /// Run `f` with a link target applied to every run emitted inside
    pub(crate) fn linked<F, E>(&mut self, target: String, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        let previous = self.link.replace(target);
        let result = f(self);
        self.link = previous;
        result
    }

    /// Run `f` inside a wrapped-parameter block
    pub(crate) fn block<F, E>(&mut self, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.segments.push(Segment::BlockStart);
        let result = f(self);
        self.segments.push(Segment::BlockEnd);
        result
    }

    pub(crate) fn finish(self) -> AnnotatedText {
        AnnotatedText {
            segments: self.segments,
        }
    }
}
