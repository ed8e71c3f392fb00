//! Streaming HTML tokenizer for the Wombat browser.
//!
//! # Scope
//!
//! This crate implements the tokenization stage of
//! [WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
//! - The full state machine, including the RCDATA/RAWTEXT/script-data
//!   families, the script escape and double-escape states, the DOCTYPE
//!   public/system identifier states, and the CDATA section states
//! - Named, decimal, and hexadecimal character reference resolution
//! - The parse error taxonomy of § 13.2.2, delivered in detection order
//!   with source positions
//!
//! The driver calls [`Tokenizer::next_token`] repeatedly; each call yields
//! either the next [`Token`] or the next [`ParseError`]. Errors are
//! informational and never stop the stream. The tree construction stage may
//! switch the machine between tokens via [`Tokenizer::set_state`] (for
//! `<script>`, `<textarea>`, raw-text elements and fragment parsing) and
//! seed the appropriate-end-tag check via [`Tokenizer::set_last_start_tag`].
//!
//! # Not Included
//!
//! Tree construction, encoding detection, and input-stream preprocessing
//! (newline normalization) belong to other components; the tokenizer sees
//! the source text exactly as delivered and never mutates it.

/// HTML tokenizer per WHATWG § 13.2.5.
pub mod tokenizer;

pub use tokenizer::{Attribute, ParseError, ParseErrorKind, Token, Tokenizer, TokenizerState};
