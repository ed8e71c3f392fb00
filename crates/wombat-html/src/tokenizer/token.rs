//! Token types and the incomplete-token builder.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! "The output of the tokenization step is a series of zero or more of the
//! following tokens: DOCTYPE, start tag, end tag, comment, character,
//! end-of-file."
//!
//! While a DOCTYPE, tag, or comment token is being assembled, its partial
//! fields live in the [`TokenBuilder`]'s scratch buffers. Completing the
//! token moves the buffer contents into the emitted [`Token`], so emitted
//! tokens never alias the tokenizer's internals. Character and end-of-file
//! tokens are emitted directly and never pass through the builder.

use core::fmt;
use std::mem;

/// An attribute on a start or end tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value"
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokenizer emits tokens of these types to the tree construction stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// "DOCTYPE tokens have a name, a public identifier, a system identifier,
    /// and a force-quirks flag. When a DOCTYPE token is created, its name,
    /// public identifier, and system identifier must be marked as missing
    /// (which is a distinct state from the empty string)."
    Doctype {
        /// "a name"
        name: Option<String>,
        /// "a public identifier"; `None` when marked missing.
        public_identifier: Option<String>,
        /// "a system identifier"; `None` when marked missing.
        system_identifier: Option<String>,
        /// "a force-quirks flag"
        force_quirks: bool,
    },

    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes."
    StartTag {
        /// "a tag name"
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// End tag token. Carries the same fields as a start tag; a set
    /// self-closing flag or a non-empty attribute list on an end tag only
    /// ever serves to raise the corresponding parse error.
    EndTag {
        /// "a tag name"
        name: String,
        /// Set only by malformed input (`</a/>`); reported as
        /// `end-tag-with-trailing-solidus`.
        self_closing: bool,
        /// Populated only by malformed input (`</a b=c>`); reported as
        /// `end-tag-with-attributes`.
        attributes: Vec<Attribute>,
    },

    /// "Comment and character tokens have data."
    Comment {
        /// "data"
        data: String,
    },

    /// A single Unicode scalar value of text content.
    Character {
        /// "data"
        data: char,
    },

    /// End-of-file token; the permanent final token of every stream.
    EndOfFile,
}

impl Token {
    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            } => {
                write!(f, "DOCTYPE")?;
                if let Some(n) = name {
                    write!(f, " {n}")?;
                }
                if let Some(public_id) = public_identifier {
                    write!(f, " PUBLIC \"{public_id}\"")?;
                }
                if let Some(system_id) = system_identifier {
                    write!(f, " SYSTEM \"{system_id}\"")?;
                }
                if *force_quirks {
                    write!(f, " (force-quirks)")?;
                }
                Ok(())
            }
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name, .. } => {
                write!(f, "</{name}>")
            }
            Self::Comment { data } => {
                write!(f, "<!--{data}-->")
            }
            Self::Character { data } => match data {
                '\n' => write!(f, "Character(\\n)"),
                '\t' => write!(f, "Character(\\t)"),
                ' ' => write!(f, "Character(SPACE)"),
                c => write!(f, "Character({c})"),
            },
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}

/// Which kind of token the builder is currently assembling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuilderKind {
    Doctype,
    StartTag,
    EndTag,
    Comment,
}

/// Scratch state for the token under construction.
///
/// At most one token is under construction at any time. `create_*` resets
/// every buffer; [`complete`](Self::complete) moves the accumulated strings
/// out into the finished [`Token`] and resets the builder for reuse.
///
/// The mutation helpers panic when called on the wrong token kind; that
/// always indicates a bug in the state machine, never bad input.
#[derive(Debug, Default)]
pub(super) struct TokenBuilder {
    kind: Option<BuilderKind>,
    /// Tag name or DOCTYPE name, depending on `kind`.
    name: String,
    /// "missing ... a distinct state from the empty string"
    doctype_name_missing: bool,
    comment: String,
    public_identifier: String,
    public_identifier_missing: bool,
    system_identifier: String,
    system_identifier_missing: bool,
    force_quirks: bool,
    self_closing: bool,
    /// Name of the attribute currently being assembled.
    attribute_name: String,
    /// Value of the attribute currently being assembled.
    attribute_value: String,
    /// Completed attributes, in source order. First occurrence of a name
    /// wins; see [`flush_attribute`](Self::flush_attribute).
    attributes: Vec<Attribute>,
}

impl TokenBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// "Create a new start tag token, set its tag name to the empty string."
    pub(super) fn create_start_tag(&mut self) {
        debug_assert!(self.kind.is_none(), "a token is already under construction");
        self.reset();
        self.kind = Some(BuilderKind::StartTag);
    }

    /// "Create a new end tag token, set its tag name to the empty string."
    pub(super) fn create_end_tag(&mut self) {
        debug_assert!(self.kind.is_none(), "a token is already under construction");
        self.reset();
        self.kind = Some(BuilderKind::EndTag);
    }

    /// "Create a comment token whose data is the empty string."
    pub(super) fn create_comment(&mut self) {
        debug_assert!(self.kind.is_none(), "a token is already under construction");
        self.reset();
        self.kind = Some(BuilderKind::Comment);
    }

    /// "Create a new DOCTYPE token."
    ///
    /// "When a DOCTYPE token is created, its name, public identifier, and
    /// system identifier must be marked as missing... and the force-quirks
    /// flag must be set to off."
    pub(super) fn create_doctype(&mut self) {
        debug_assert!(self.kind.is_none(), "a token is already under construction");
        self.reset();
        self.kind = Some(BuilderKind::Doctype);
        self.doctype_name_missing = true;
        self.public_identifier_missing = true;
        self.system_identifier_missing = true;
    }

    /// Discard the token under construction (the failed end-tag-match paths).
    pub(super) fn abandon(&mut self) {
        self.reset();
    }

    /// True if the token under construction is an end tag.
    pub(super) fn is_end_tag(&self) -> bool {
        self.kind == Some(BuilderKind::EndTag)
    }

    /// "An appropriate end tag token is an end tag token whose tag name
    /// matches the tag name of the last start tag to have been emitted from
    /// this tokenizer, if any."
    pub(super) fn is_appropriate_end_tag(&self, last_start_tag_name: Option<&str>) -> bool {
        self.is_end_tag() && last_start_tag_name == Some(self.name.as_str())
    }

    /// "Append the current input character to the current tag token's tag
    /// name."
    ///
    /// # Panics
    ///
    /// Panics if no tag token is under construction.
    pub(super) fn append_to_tag_name(&mut self, c: char) {
        match self.kind {
            Some(BuilderKind::StartTag | BuilderKind::EndTag) => self.name.push(c),
            _ => panic!("append_to_tag_name called while no tag token is under construction"),
        }
    }

    /// "Append the current input character to the comment token's data."
    ///
    /// # Panics
    ///
    /// Panics if no comment token is under construction.
    pub(super) fn append_to_comment(&mut self, c: char) {
        match self.kind {
            Some(BuilderKind::Comment) => self.comment.push(c),
            _ => panic!("append_to_comment called while no comment token is under construction"),
        }
    }

    /// Append a literal run to the comment data (`--`, `--!`, `[CDATA[`).
    ///
    /// # Panics
    ///
    /// Panics if no comment token is under construction.
    pub(super) fn push_str_to_comment(&mut self, s: &str) {
        match self.kind {
            Some(BuilderKind::Comment) => self.comment.push_str(s),
            _ => panic!("push_str_to_comment called while no comment token is under construction"),
        }
    }

    /// "Append the current input character to the current DOCTYPE token's
    /// name." Clears the name's missing state on first append.
    ///
    /// # Panics
    ///
    /// Panics if no DOCTYPE token is under construction.
    pub(super) fn append_to_doctype_name(&mut self, c: char) {
        match self.kind {
            Some(BuilderKind::Doctype) => {
                self.doctype_name_missing = false;
                self.name.push(c);
            }
            _ => panic!("append_to_doctype_name called while no DOCTYPE is under construction"),
        }
    }

    /// "Set the current DOCTYPE token's public identifier to the empty
    /// string (not missing)."
    ///
    /// # Panics
    ///
    /// Panics if no DOCTYPE token is under construction.
    pub(super) fn init_public_identifier(&mut self) {
        match self.kind {
            Some(BuilderKind::Doctype) => {
                self.public_identifier_missing = false;
                self.public_identifier.clear();
            }
            _ => panic!("init_public_identifier called while no DOCTYPE is under construction"),
        }
    }

    /// "Append the current input character to the current DOCTYPE token's
    /// public identifier."
    ///
    /// # Panics
    ///
    /// Panics if no DOCTYPE token is under construction.
    pub(super) fn append_to_public_identifier(&mut self, c: char) {
        match self.kind {
            Some(BuilderKind::Doctype) => self.public_identifier.push(c),
            _ => panic!("append_to_public_identifier called while no DOCTYPE is under construction"),
        }
    }

    /// "Set the current DOCTYPE token's system identifier to the empty
    /// string (not missing)."
    ///
    /// # Panics
    ///
    /// Panics if no DOCTYPE token is under construction.
    pub(super) fn init_system_identifier(&mut self) {
        match self.kind {
            Some(BuilderKind::Doctype) => {
                self.system_identifier_missing = false;
                self.system_identifier.clear();
            }
            _ => panic!("init_system_identifier called while no DOCTYPE is under construction"),
        }
    }

    /// "Append the current input character to the current DOCTYPE token's
    /// system identifier."
    ///
    /// # Panics
    ///
    /// Panics if no DOCTYPE token is under construction.
    pub(super) fn append_to_system_identifier(&mut self, c: char) {
        match self.kind {
            Some(BuilderKind::Doctype) => self.system_identifier.push(c),
            _ => panic!("append_to_system_identifier called while no DOCTYPE is under construction"),
        }
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on."
    ///
    /// # Panics
    ///
    /// Panics if no DOCTYPE token is under construction.
    pub(super) fn set_force_quirks(&mut self) {
        match self.kind {
            Some(BuilderKind::Doctype) => self.force_quirks = true,
            _ => panic!("set_force_quirks called while no DOCTYPE is under construction"),
        }
    }

    /// "Set the self-closing flag of the current tag token."
    ///
    /// # Panics
    ///
    /// Panics if no tag token is under construction.
    pub(super) fn set_self_closing(&mut self) {
        match self.kind {
            Some(BuilderKind::StartTag | BuilderKind::EndTag) => self.self_closing = true,
            _ => panic!("set_self_closing called while no tag token is under construction"),
        }
    }

    /// "Append the current input character to the current attribute's name."
    pub(super) fn append_to_attribute_name(&mut self, c: char) {
        self.attribute_name.push(c);
    }

    /// "Append the current input character to the current attribute's value."
    pub(super) fn append_to_attribute_value(&mut self, c: char) {
        self.attribute_value.push(c);
    }

    /// Append resolved character-reference text to the current attribute's
    /// value.
    pub(super) fn push_str_to_attribute_value(&mut self, s: &str) {
        self.attribute_value.push_str(s);
    }

    /// Move the pending attribute into the attribute list.
    ///
    /// Does nothing when no attribute is pending (tag-name-only paths).
    /// "If there is already an attribute on the token with the exact same
    /// name, then this is a duplicate-attribute parse error and the new
    /// attribute must be removed from the token" — the first value stays,
    /// and `true` is returned so the caller can report the error.
    pub(super) fn flush_attribute(&mut self) -> bool {
        if self.attribute_name.is_empty() {
            return false;
        }
        let name = mem::take(&mut self.attribute_name);
        let value = mem::take(&mut self.attribute_value);
        if self.attributes.iter().any(|attr| attr.name == name) {
            return true;
        }
        self.attributes.push(Attribute::new(name, value));
        false
    }

    /// Build the finished token, transferring ownership of the scratch
    /// buffers, and reset the builder.
    ///
    /// # Panics
    ///
    /// Panics if no token is under construction; character and end-of-file
    /// tokens are emitted directly and never built here.
    pub(super) fn complete(&mut self) -> Token {
        let kind = self
            .kind
            .take()
            .expect("complete called while no token is under construction");
        let token = match kind {
            BuilderKind::Doctype => Token::Doctype {
                name: if self.doctype_name_missing {
                    None
                } else {
                    Some(mem::take(&mut self.name))
                },
                public_identifier: if self.public_identifier_missing {
                    None
                } else {
                    Some(mem::take(&mut self.public_identifier))
                },
                system_identifier: if self.system_identifier_missing {
                    None
                } else {
                    Some(mem::take(&mut self.system_identifier))
                },
                force_quirks: self.force_quirks,
            },
            BuilderKind::StartTag => Token::StartTag {
                name: mem::take(&mut self.name),
                self_closing: self.self_closing,
                attributes: mem::take(&mut self.attributes),
            },
            BuilderKind::EndTag => Token::EndTag {
                name: mem::take(&mut self.name),
                self_closing: self.self_closing,
                attributes: mem::take(&mut self.attributes),
            },
            BuilderKind::Comment => Token::Comment {
                data: mem::take(&mut self.comment),
            },
        };
        self.reset();
        token
    }

    fn reset(&mut self) {
        self.kind = None;
        self.name.clear();
        self.doctype_name_missing = true;
        self.comment.clear();
        self.public_identifier.clear();
        self.public_identifier_missing = true;
        self.system_identifier.clear();
        self.system_identifier_missing = true;
        self.force_quirks = false;
        self.self_closing = false;
        self.attribute_name.clear();
        self.attribute_value.clear();
        self.attributes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_attribute_keeps_first_value() {
        let mut builder = TokenBuilder::new();
        builder.create_start_tag();
        builder.append_to_tag_name('a');
        builder.append_to_attribute_name('b');
        builder.append_to_attribute_value('1');
        assert!(!builder.flush_attribute());
        builder.append_to_attribute_name('b');
        builder.append_to_attribute_value('2');
        assert!(builder.flush_attribute());
        match builder.complete() {
            Token::StartTag { attributes, .. } => {
                assert_eq!(attributes.len(), 1);
                assert_eq!(attributes[0].value, "1");
            }
            other => panic!("expected start tag, got {other:?}"),
        }
    }

    #[test]
    fn flush_without_pending_attribute_is_a_noop() {
        let mut builder = TokenBuilder::new();
        builder.create_start_tag();
        builder.append_to_tag_name('p');
        assert!(!builder.flush_attribute());
        match builder.complete() {
            Token::StartTag { attributes, .. } => assert!(attributes.is_empty()),
            other => panic!("expected start tag, got {other:?}"),
        }
    }

    #[test]
    fn doctype_missing_identifiers_are_none_not_empty() {
        let mut builder = TokenBuilder::new();
        builder.create_doctype();
        builder.append_to_doctype_name('h');
        builder.init_public_identifier();
        match builder.complete() {
            Token::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            } => {
                assert_eq!(name.as_deref(), Some("h"));
                assert_eq!(public_identifier.as_deref(), Some(""));
                assert_eq!(system_identifier, None);
                assert!(!force_quirks);
            }
            other => panic!("expected DOCTYPE, got {other:?}"),
        }
    }

    #[test]
    fn complete_resets_the_builder() {
        let mut builder = TokenBuilder::new();
        builder.create_comment();
        builder.append_to_comment('x');
        let _ = builder.complete();
        builder.create_start_tag();
        builder.append_to_tag_name('p');
        match builder.complete() {
            Token::StartTag { name, .. } => assert_eq!(name, "p"),
            other => panic!("expected start tag, got {other:?}"),
        }
    }

    #[test]
    fn appropriate_end_tag_compares_against_last_start_tag() {
        let mut builder = TokenBuilder::new();
        builder.create_end_tag();
        builder.append_to_tag_name('t');
        builder.append_to_tag_name('i');
        builder.append_to_tag_name('t');
        builder.append_to_tag_name('l');
        builder.append_to_tag_name('e');
        assert!(builder.is_appropriate_end_tag(Some("title")));
        assert!(!builder.is_appropriate_end_tag(Some("style")));
        assert!(!builder.is_appropriate_end_tag(None));
    }
}
