//! Helper methods shared across the tokenizer's state handlers.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module collects the recurring spec phrases:
//! - State transitions ("Switch to", "Reconsume in")
//! - Lookahead ("If the next few characters are...")
//! - Token and error emission into the output queues
//! - The appropriate-end-tag test and the shared failed-match emitter
//! - Attribute bookkeeping with duplicate detection

use super::core::{Tokenizer, TokenizerState};
use super::error::{ParseError, ParseErrorKind};
use super::token::Token;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// "Switch to the X state."
    ///
    /// The next character is consumed on the next step of the main loop.
    pub(super) fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state."
    ///
    /// Transitions without consuming: the same character is re-delivered by
    /// the cursor to the new state's step.
    pub(super) fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.cursor.reconsume();
        self.state = new_state;
    }

    /// "Reconsume in the return state."
    ///
    /// # Panics
    ///
    /// Panics if no return state was recorded, which indicates a bug in the
    /// character-reference states (the only ones that set it).
    pub(super) fn reconsume_in_return_state(&mut self) {
        let return_state = self
            .return_state
            .take()
            .expect("character reference state entered without a return state");
        self.reconsume_in(return_state);
    }

    /// "Switch to the return state."
    ///
    /// # Panics
    ///
    /// Panics if no return state was recorded.
    pub(super) fn switch_to_return_state(&mut self) {
        let return_state = self
            .return_state
            .take()
            .expect("character reference state entered without a return state");
        self.switch_to(return_state);
    }
}

// =============================================================================
// Lookahead Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// "If the next few characters are..."
    ///
    /// True if the upcoming input matches `target` exactly. Does not consume.
    #[must_use]
    pub(super) fn next_few_characters_are(&self, target: &str) -> bool {
        self.cursor.peek_n(target.len()) == target
    }

    /// "ASCII case-insensitive match for the word..."
    #[must_use]
    pub(super) fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        self.cursor.peek_n(target.len()).eq_ignore_ascii_case(target)
    }

    /// Consume `n` characters. The caller must have verified via lookahead
    /// that `n` ASCII characters are present.
    pub(super) fn consume_chars(&mut self, n: usize) {
        for _ in 0..n {
            let _ = self.cursor.next();
        }
    }

    /// Consume the given ASCII string from the input. The caller must have
    /// already verified the characters are present.
    pub(super) fn consume_string(&mut self, target: &str) {
        self.consume_chars(target.len());
    }

    /// [§ 12.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    ///
    /// The tokenizer's whitespace set: TAB, LF, FF, SPACE. (CR is an
    /// input-stream preprocessing concern.)
    pub(super) const fn is_whitespace_char(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Emission Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// "Emit the current token."
    ///
    /// Completes the token under construction and queues it. Flushes the
    /// pending attribute first (raising `duplicate-attribute` when the name
    /// already exists on the tag). Emitting a start tag records its name for
    /// later appropriate-end-tag checks; emitting a malformed end tag raises
    /// the corresponding errors.
    pub(super) fn emit_current_token(&mut self) {
        if self.builder.flush_attribute() {
            self.log_parse_error(ParseErrorKind::DuplicateAttribute);
        }
        let token = self.builder.complete();
        match &token {
            // "The last start tag token emitted is used ... in the RCDATA,
            // RAWTEXT, and script data states."
            Token::StartTag { name, .. } => {
                self.last_start_tag_name = Some(name.clone());
            }
            // "If an end tag token is emitted with its self-closing flag
            // set, that is an end-tag-with-trailing-solidus parse error."
            // "If an end tag token is emitted with attributes, that is an
            // end-tag-with-attributes parse error."
            Token::EndTag {
                self_closing,
                attributes,
                ..
            } => {
                if *self_closing {
                    self.log_parse_error(ParseErrorKind::EndTagWithTrailingSolidus);
                }
                if !attributes.is_empty() {
                    self.log_parse_error(ParseErrorKind::EndTagWithAttributes);
                }
            }
            _ => {}
        }
        self.tokens.push_back(token);
    }

    /// "Emit the current input character as a character token."
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.tokens.push_back(Token::Character { data: c });
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof_token(&mut self) {
        debug_assert!(
            self.cursor.eof(),
            "end-of-file token emitted before the source was exhausted"
        );
        self.tokens.push_back(Token::EndOfFile);
    }

    /// "This is an X parse error."
    ///
    /// Queues the error with the cursor's current position. Errors drain
    /// ahead of the tokens they were detected alongside.
    pub(super) fn log_parse_error(&mut self, kind: ParseErrorKind) {
        self.errors.push_back(ParseError {
            kind,
            line: self.cursor.line(),
            column: self.cursor.column(),
        });
    }
}

// =============================================================================
// End Tag Matching
// =============================================================================

impl Tokenizer<'_> {
    /// "An appropriate end tag token is an end tag token whose tag name
    /// matches the tag name of the last start tag to have been emitted from
    /// this tokenizer, if any."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        self.builder
            .is_appropriate_end_tag(self.last_start_tag_name.as_deref())
    }

    /// The shared "anything else" branch of the RCDATA, RAWTEXT, script data
    /// and script data escaped end tag name states:
    ///
    /// "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS
    /// character token, and a character token for each of the characters in
    /// the temporary buffer (in the order they were added to the buffer).
    /// Reconsume in the [text] state."
    pub(super) fn abort_end_tag_match(&mut self, text_state: TokenizerState) {
        self.emit_character_token('<');
        self.emit_character_token('/');
        for c in std::mem::take(&mut self.temporary_buffer).chars() {
            self.emit_character_token(c);
        }
        self.builder.abandon();
        self.reconsume_in(text_state);
    }
}

// =============================================================================
// Attribute Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// "Start a new attribute in the current tag token. Set that attribute
    /// name and value to the empty string."
    ///
    /// Flushes the previous attribute into the tag first; "if there is
    /// already an attribute on the token with the exact same name, then this
    /// is a duplicate-attribute parse error and the new attribute must be
    /// removed from the token" (the first value is retained).
    pub(super) fn start_new_attribute(&mut self) {
        if self.builder.flush_attribute() {
            self.log_parse_error(ParseErrorKind::DuplicateAttribute);
        }
    }
}
