//! The HTML tokenizer state machine.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! "Implementations must act as if they used the following state machine to
//! tokenize HTML."
//!
//! The machine is stepped by [`Tokenizer::next_token`]: each step consumes at
//! most one input character, may queue any number of parse errors and tokens,
//! and transitions. Queued errors drain ahead of the tokens they were
//! detected alongside; the end-of-file token, once returned, is returned
//! forever.

use std::collections::VecDeque;

use strum_macros::Display;

use super::cursor::InputCursor;
use super::error::{ParseError, ParseErrorKind};
use super::named_character_references::{longest_entity_match, LOOKAHEAD_LIMIT};
use super::token::{Token, TokenBuilder};

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokenizer state machine. Each state corresponds to a section in
/// § 13.2.5. The initial state is the data state; the tree construction
/// stage may switch the machine into PLAINTEXT, RCDATA, RAWTEXT, ScriptData,
/// or CDATASection via [`Tokenizer::set_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    Data,
    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    RCDATA,
    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    RAWTEXT,
    /// [§ 13.2.5.4 Script data state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state)
    ScriptData,
    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    PLAINTEXT,
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    TagOpen,
    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    EndTagOpen,
    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    TagName,
    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    RCDATALessThanSign,
    /// [§ 13.2.5.10 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    RCDATAEndTagOpen,
    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    RCDATAEndTagName,
    /// [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    RAWTEXTLessThanSign,
    /// [§ 13.2.5.13 RAWTEXT end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state)
    RAWTEXTEndTagOpen,
    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    RAWTEXTEndTagName,
    /// [§ 13.2.5.15 Script data less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-less-than-sign-state)
    ScriptDataLessThanSign,
    /// [§ 13.2.5.16 Script data end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-open-state)
    ScriptDataEndTagOpen,
    /// [§ 13.2.5.17 Script data end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-name-state)
    ScriptDataEndTagName,
    /// [§ 13.2.5.18 Script data escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-state)
    ScriptDataEscapeStart,
    /// [§ 13.2.5.19 Script data escape start dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-dash-state)
    ScriptDataEscapeStartDash,
    /// [§ 13.2.5.20 Script data escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-state)
    ScriptDataEscaped,
    /// [§ 13.2.5.21 Script data escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-state)
    ScriptDataEscapedDash,
    /// [§ 13.2.5.22 Script data escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-dash-state)
    ScriptDataEscapedDashDash,
    /// [§ 13.2.5.23 Script data escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-less-than-sign-state)
    ScriptDataEscapedLessThanSign,
    /// [§ 13.2.5.24 Script data escaped end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-open-state)
    ScriptDataEscapedEndTagOpen,
    /// [§ 13.2.5.25 Script data escaped end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-name-state)
    ScriptDataEscapedEndTagName,
    /// [§ 13.2.5.26 Script data double escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-start-state)
    ScriptDataDoubleEscapeStart,
    /// [§ 13.2.5.27 Script data double escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-state)
    ScriptDataDoubleEscaped,
    /// [§ 13.2.5.28 Script data double escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-state)
    ScriptDataDoubleEscapedDash,
    /// [§ 13.2.5.29 Script data double escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-dash-state)
    ScriptDataDoubleEscapedDashDash,
    /// [§ 13.2.5.30 Script data double escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-less-than-sign-state)
    ScriptDataDoubleEscapedLessThanSign,
    /// [§ 13.2.5.31 Script data double escape end state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state)
    ScriptDataDoubleEscapeEnd,
    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    BeforeAttributeName,
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    AttributeName,
    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    AfterAttributeName,
    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    BeforeAttributeValue,
    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    AttributeValueDoubleQuoted,
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    AttributeValueSingleQuoted,
    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    AttributeValueUnquoted,
    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    AfterAttributeValueQuoted,
    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    SelfClosingStartTag,
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    BogusComment,
    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    MarkupDeclarationOpen,
    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    CommentStart,
    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    CommentStartDash,
    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    Comment,
    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    CommentLessThanSign,
    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    CommentLessThanSignBang,
    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    CommentLessThanSignBangDash,
    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    CommentLessThanSignBangDashDash,
    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    CommentEndDash,
    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    CommentEnd,
    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    CommentEndBang,
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    DOCTYPE,
    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    BeforeDOCTYPEName,
    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    DOCTYPEName,
    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    AfterDOCTYPEName,
    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    AfterDOCTYPEPublicKeyword,
    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    BeforeDOCTYPEPublicIdentifier,
    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    DOCTYPEPublicIdentifierDoubleQuoted,
    /// [§ 13.2.5.60 DOCTYPE public identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state)
    DOCTYPEPublicIdentifierSingleQuoted,
    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    AfterDOCTYPEPublicIdentifier,
    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    BetweenDOCTYPEPublicAndSystemIdentifiers,
    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    AfterDOCTYPESystemKeyword,
    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    BeforeDOCTYPESystemIdentifier,
    /// [§ 13.2.5.65 DOCTYPE system identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    DOCTYPESystemIdentifierDoubleQuoted,
    /// [§ 13.2.5.66 DOCTYPE system identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state)
    DOCTYPESystemIdentifierSingleQuoted,
    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    AfterDOCTYPESystemIdentifier,
    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    BogusDOCTYPE,
    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    CDATASection,
    /// [§ 13.2.5.70 CDATA section bracket state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state)
    CDATASectionBracket,
    /// [§ 13.2.5.71 CDATA section end state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state)
    CDATASectionEnd,
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    CharacterReference,
    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    NamedCharacterReference,
    /// [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
    AmbiguousAmpersand,
    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    NumericCharacterReference,
    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    HexadecimalCharacterReferenceStart,
    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    DecimalCharacterReferenceStart,
    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    HexadecimalCharacterReference,
    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    DecimalCharacterReference,
    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    NumericCharacterReferenceEnd,
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The streaming tokenizer. Borrowed source in, one token (or parse error)
/// per [`next_token`](Self::next_token) call out.
pub struct Tokenizer<'src> {
    pub(super) state: TokenizerState,
    /// "The return state is used to return to the state it was in when it
    /// last consumed a character reference."
    pub(super) return_state: Option<TokenizerState>,
    pub(super) cursor: InputCursor<'src>,
    /// Scratch state for the token under construction.
    pub(super) builder: TokenBuilder,
    /// Completed tokens awaiting delivery.
    pub(super) tokens: VecDeque<Token>,
    /// Detected parse errors awaiting delivery; drained ahead of tokens.
    pub(super) errors: VecDeque<ParseError>,
    /// [§ 13.2.5 temporary buffer](https://html.spec.whatwg.org/multipage/parsing.html#temporary-buffer)
    pub(super) temporary_buffer: String,
    /// "The character reference code" accumulated by the numeric states.
    pub(super) character_reference_code: u32,
    /// "The last start tag token emitted" — only its name is needed, and an
    /// owned copy keeps emitted tokens independent of the tokenizer.
    pub(super) last_start_tag_name: Option<String>,
    /// "there is an adjusted current node and it is not an element in the
    /// HTML namespace" — supplied by the tree construction stage.
    pub(super) in_foreign_content: bool,
    eof_emitted: bool,
}

impl<'src> Tokenizer<'src> {
    /// Create a tokenizer over the given source.
    ///
    /// "The initial state is the data state." The source is borrowed and
    /// never mutated; newline normalization is the input stream's concern
    /// and must happen before the text reaches the tokenizer.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Tokenizer {
            state: TokenizerState::Data,
            return_state: None,
            cursor: InputCursor::new(source),
            builder: TokenBuilder::new(),
            tokens: VecDeque::new(),
            errors: VecDeque::new(),
            temporary_buffer: String::new(),
            character_reference_code: 0,
            last_start_tag_name: None,
            in_foreign_content: false,
            eof_emitted: false,
        }
    }

    /// Advance the machine until an output item is ready and return it.
    ///
    /// Runs state steps until at least one token has been queued, then
    /// returns queued parse errors first (in detection order), then the
    /// token. After an `Err` the caller simply calls again; tokenization is
    /// never aborted. Once [`Token::EndOfFile`] has been returned, every
    /// subsequent call returns it again.
    ///
    /// # Errors
    ///
    /// Returns the next queued [`ParseError`]. Errors are informational;
    /// the token stream continues across them.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        while self.tokens.is_empty() {
            if self.eof_emitted {
                return Ok(Token::EndOfFile);
            }
            self.step();
        }
        if let Some(error) = self.errors.pop_front() {
            return Err(error);
        }
        let token = self
            .tokens
            .pop_front()
            .expect("token queue is non-empty inside next_token");
        if token.is_eof() {
            self.eof_emitted = true;
        }
        Ok(token)
    }

    /// Switch the machine into a different state.
    ///
    /// For the tree construction stage (and fragment parsing harnesses),
    /// which may select Data, PLAINTEXT, RCDATA, RAWTEXT, ScriptData, or
    /// CDATASection as the effective start state. Call only between
    /// [`next_token`](Self::next_token) calls.
    pub fn set_state(&mut self, state: TokenizerState) {
        self.state = state;
    }

    /// Override the remembered last-emitted start tag name, for consumers
    /// that drop start tags but still need the appropriate-end-tag test.
    pub fn set_last_start_tag(&mut self, name: Option<&str>) {
        self.last_start_tag_name = name.map(str::to_owned);
    }

    /// Supply the "adjusted current node is not in the HTML namespace" fact
    /// consulted by the `<![CDATA[` lookahead.
    pub fn set_in_foreign_content(&mut self, in_foreign_content: bool) {
        self.in_foreign_content = in_foreign_content;
    }

    /// 1-based line of the read position.
    #[must_use]
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// 0-based column of the read position.
    #[must_use]
    pub fn column(&self) -> usize {
        self.cursor.column()
    }

    /// Execute one state transition.
    fn step(&mut self) {
        // These three states operate on lookahead or already-accumulated
        // state instead of a freshly consumed character.
        match self.state {
            TokenizerState::MarkupDeclarationOpen => {
                return self.handle_markup_declaration_open_state();
            }
            TokenizerState::NamedCharacterReference => {
                return self.handle_named_character_reference_state();
            }
            TokenizerState::NumericCharacterReferenceEnd => {
                return self.handle_numeric_character_reference_end_state();
            }
            _ => {}
        }

        // "Consume the next input character" (or re-deliver the reconsumed
        // one); every remaining state starts this way. The cursor's current
        // character is the canonical value across reconsume boundaries.
        self.cursor.next();
        let current = self.cursor.current();
        match self.state {
            TokenizerState::Data => self.handle_data_state(current),
            TokenizerState::RCDATA => self.handle_rcdata_state(current),
            TokenizerState::RAWTEXT => self.handle_rawtext_state(current),
            TokenizerState::ScriptData => self.handle_script_data_state(current),
            TokenizerState::PLAINTEXT => self.handle_plaintext_state(current),
            TokenizerState::TagOpen => self.handle_tag_open_state(current),
            TokenizerState::EndTagOpen => self.handle_end_tag_open_state(current),
            TokenizerState::TagName => self.handle_tag_name_state(current),
            TokenizerState::RCDATALessThanSign => self.handle_rcdata_less_than_sign_state(current),
            TokenizerState::RCDATAEndTagOpen => self.handle_rcdata_end_tag_open_state(current),
            TokenizerState::RCDATAEndTagName => self.handle_rcdata_end_tag_name_state(current),
            TokenizerState::RAWTEXTLessThanSign => {
                self.handle_rawtext_less_than_sign_state(current);
            }
            TokenizerState::RAWTEXTEndTagOpen => self.handle_rawtext_end_tag_open_state(current),
            TokenizerState::RAWTEXTEndTagName => self.handle_rawtext_end_tag_name_state(current),
            TokenizerState::ScriptDataLessThanSign => {
                self.handle_script_data_less_than_sign_state(current);
            }
            TokenizerState::ScriptDataEndTagOpen => {
                self.handle_script_data_end_tag_open_state(current);
            }
            TokenizerState::ScriptDataEndTagName => {
                self.handle_script_data_end_tag_name_state(current);
            }
            TokenizerState::ScriptDataEscapeStart => {
                self.handle_script_data_escape_start_state(current);
            }
            TokenizerState::ScriptDataEscapeStartDash => {
                self.handle_script_data_escape_start_dash_state(current);
            }
            TokenizerState::ScriptDataEscaped => self.handle_script_data_escaped_state(current),
            TokenizerState::ScriptDataEscapedDash => {
                self.handle_script_data_escaped_dash_state(current);
            }
            TokenizerState::ScriptDataEscapedDashDash => {
                self.handle_script_data_escaped_dash_dash_state(current);
            }
            TokenizerState::ScriptDataEscapedLessThanSign => {
                self.handle_script_data_escaped_less_than_sign_state(current);
            }
            TokenizerState::ScriptDataEscapedEndTagOpen => {
                self.handle_script_data_escaped_end_tag_open_state(current);
            }
            TokenizerState::ScriptDataEscapedEndTagName => {
                self.handle_script_data_escaped_end_tag_name_state(current);
            }
            TokenizerState::ScriptDataDoubleEscapeStart => {
                self.handle_script_data_double_escape_start_state(current);
            }
            TokenizerState::ScriptDataDoubleEscaped => {
                self.handle_script_data_double_escaped_state(current);
            }
            TokenizerState::ScriptDataDoubleEscapedDash => {
                self.handle_script_data_double_escaped_dash_state(current);
            }
            TokenizerState::ScriptDataDoubleEscapedDashDash => {
                self.handle_script_data_double_escaped_dash_dash_state(current);
            }
            TokenizerState::ScriptDataDoubleEscapedLessThanSign => {
                self.handle_script_data_double_escaped_less_than_sign_state(current);
            }
            TokenizerState::ScriptDataDoubleEscapeEnd => {
                self.handle_script_data_double_escape_end_state(current);
            }
            TokenizerState::BeforeAttributeName => {
                self.handle_before_attribute_name_state(current);
            }
            TokenizerState::AttributeName => self.handle_attribute_name_state(current),
            TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(current),
            TokenizerState::BeforeAttributeValue => {
                self.handle_before_attribute_value_state(current);
            }
            TokenizerState::AttributeValueDoubleQuoted => {
                self.handle_attribute_value_double_quoted_state(current);
            }
            TokenizerState::AttributeValueSingleQuoted => {
                self.handle_attribute_value_single_quoted_state(current);
            }
            TokenizerState::AttributeValueUnquoted => {
                self.handle_attribute_value_unquoted_state(current);
            }
            TokenizerState::AfterAttributeValueQuoted => {
                self.handle_after_attribute_value_quoted_state(current);
            }
            TokenizerState::SelfClosingStartTag => {
                self.handle_self_closing_start_tag_state(current);
            }
            TokenizerState::BogusComment => self.handle_bogus_comment_state(current),
            TokenizerState::CommentStart => self.handle_comment_start_state(current),
            TokenizerState::CommentStartDash => self.handle_comment_start_dash_state(current),
            TokenizerState::Comment => self.handle_comment_state(current),
            TokenizerState::CommentLessThanSign => {
                self.handle_comment_less_than_sign_state(current);
            }
            TokenizerState::CommentLessThanSignBang => {
                self.handle_comment_less_than_sign_bang_state(current);
            }
            TokenizerState::CommentLessThanSignBangDash => {
                self.handle_comment_less_than_sign_bang_dash_state(current);
            }
            TokenizerState::CommentLessThanSignBangDashDash => {
                self.handle_comment_less_than_sign_bang_dash_dash_state(current);
            }
            TokenizerState::CommentEndDash => self.handle_comment_end_dash_state(current),
            TokenizerState::CommentEnd => self.handle_comment_end_state(current),
            TokenizerState::CommentEndBang => self.handle_comment_end_bang_state(current),
            TokenizerState::DOCTYPE => self.handle_doctype_state(current),
            TokenizerState::BeforeDOCTYPEName => self.handle_before_doctype_name_state(current),
            TokenizerState::DOCTYPEName => self.handle_doctype_name_state(current),
            TokenizerState::AfterDOCTYPEName => self.handle_after_doctype_name_state(current),
            TokenizerState::AfterDOCTYPEPublicKeyword => {
                self.handle_after_doctype_public_keyword_state(current);
            }
            TokenizerState::BeforeDOCTYPEPublicIdentifier => {
                self.handle_before_doctype_public_identifier_state(current);
            }
            TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted => {
                self.handle_doctype_public_identifier_double_quoted_state(current);
            }
            TokenizerState::DOCTYPEPublicIdentifierSingleQuoted => {
                self.handle_doctype_public_identifier_single_quoted_state(current);
            }
            TokenizerState::AfterDOCTYPEPublicIdentifier => {
                self.handle_after_doctype_public_identifier_state(current);
            }
            TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers => {
                self.handle_between_doctype_public_and_system_identifiers_state(current);
            }
            TokenizerState::AfterDOCTYPESystemKeyword => {
                self.handle_after_doctype_system_keyword_state(current);
            }
            TokenizerState::BeforeDOCTYPESystemIdentifier => {
                self.handle_before_doctype_system_identifier_state(current);
            }
            TokenizerState::DOCTYPESystemIdentifierDoubleQuoted => {
                self.handle_doctype_system_identifier_double_quoted_state(current);
            }
            TokenizerState::DOCTYPESystemIdentifierSingleQuoted => {
                self.handle_doctype_system_identifier_single_quoted_state(current);
            }
            TokenizerState::AfterDOCTYPESystemIdentifier => {
                self.handle_after_doctype_system_identifier_state(current);
            }
            TokenizerState::BogusDOCTYPE => self.handle_bogus_doctype_state(current),
            TokenizerState::CDATASection => self.handle_cdata_section_state(current),
            TokenizerState::CDATASectionBracket => {
                self.handle_cdata_section_bracket_state(current);
            }
            TokenizerState::CDATASectionEnd => self.handle_cdata_section_end_state(current),
            TokenizerState::CharacterReference => self.handle_character_reference_state(current),
            TokenizerState::AmbiguousAmpersand => self.handle_ambiguous_ampersand_state(current),
            TokenizerState::NumericCharacterReference => {
                self.handle_numeric_character_reference_state(current);
            }
            TokenizerState::HexadecimalCharacterReferenceStart => {
                self.handle_hexadecimal_character_reference_start_state(current);
            }
            TokenizerState::DecimalCharacterReferenceStart => {
                self.handle_decimal_character_reference_start_state(current);
            }
            TokenizerState::HexadecimalCharacterReference => {
                self.handle_hexadecimal_character_reference_state(current);
            }
            TokenizerState::DecimalCharacterReference => {
                self.handle_decimal_character_reference_state(current);
            }
            TokenizerState::MarkupDeclarationOpen
            | TokenizerState::NamedCharacterReference
            | TokenizerState::NumericCharacterReferenceEnd => {
                unreachable!("lookahead states are dispatched before consuming")
            }
        }
    }
}

// =============================================================================
// Text States
// =============================================================================

impl Tokenizer<'_> {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    fn handle_data_state(&mut self, current: Option<char>) {
        match current {
            // "U+0026 AMPERSAND (&) - Set the return state to the data state.
            // Switch to the character reference state."
            Some('&') => {
                self.return_state = Some(TokenizerState::Data);
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the tag open state."
            Some('<') => {
                self.switch_to(TokenizerState::TagOpen);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse error.
            // Emit the current input character as a character token."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emit_character_token('\0');
            }
            // "EOF - Emit an end-of-file token."
            None => {
                self.emit_eof_token();
            }
            // "Anything else - Emit the current input character as a
            // character token."
            Some(c) => {
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    fn handle_rcdata_state(&mut self, current: Option<char>) {
        match current {
            // "U+0026 AMPERSAND (&) - Set the return state to the RCDATA
            // state. Switch to the character reference state."
            Some('&') => {
                self.return_state = Some(TokenizerState::RCDATA);
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the RCDATA less-than
            // sign state."
            Some('<') => {
                self.switch_to(TokenizerState::RCDATALessThanSign);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Emit a U+FFFD REPLACEMENT CHARACTER character token."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emit_character_token('\u{FFFD}');
            }
            // "EOF - Emit an end-of-file token."
            None => {
                self.emit_eof_token();
            }
            // "Anything else - Emit the current input character as a
            // character token."
            Some(c) => {
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    fn handle_rawtext_state(&mut self, current: Option<char>) {
        match current {
            // "U+003C LESS-THAN SIGN (<) - Switch to the RAWTEXT less-than
            // sign state."
            Some('<') => {
                self.switch_to(TokenizerState::RAWTEXTLessThanSign);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Emit a U+FFFD REPLACEMENT CHARACTER character token."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emit_character_token('\u{FFFD}');
            }
            // "EOF - Emit an end-of-file token."
            None => {
                self.emit_eof_token();
            }
            // "Anything else - Emit the current input character as a
            // character token."
            Some(c) => {
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.4 Script data state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state)
    fn handle_script_data_state(&mut self, current: Option<char>) {
        match current {
            // "U+003C LESS-THAN SIGN (<) - Switch to the script data
            // less-than sign state."
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataLessThanSign);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Emit a U+FFFD REPLACEMENT CHARACTER character token."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emit_character_token('\u{FFFD}');
            }
            // "EOF - Emit an end-of-file token."
            None => {
                self.emit_eof_token();
            }
            // "Anything else - Emit the current input character as a
            // character token."
            Some(c) => {
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    fn handle_plaintext_state(&mut self, current: Option<char>) {
        match current {
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Emit a U+FFFD REPLACEMENT CHARACTER character token."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emit_character_token('\u{FFFD}');
            }
            // "EOF - Emit an end-of-file token."
            None => {
                self.emit_eof_token();
            }
            // "Anything else - Emit the current input character as a
            // character token."
            Some(c) => {
                self.emit_character_token(c);
            }
        }
    }
}

// =============================================================================
// Tag States
// =============================================================================

impl Tokenizer<'_> {
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    fn handle_tag_open_state(&mut self, current: Option<char>) {
        match current {
            // "U+0021 EXCLAMATION MARK (!) - Switch to the markup declaration
            // open state." That state works on lookahead and consumes nothing
            // on entry.
            Some('!') => {
                self.switch_to(TokenizerState::MarkupDeclarationOpen);
            }
            // "U+002F SOLIDUS (/) - Switch to the end tag open state."
            Some('/') => {
                self.switch_to(TokenizerState::EndTagOpen);
            }
            // "ASCII alpha - Create a new start tag token, set its tag name
            // to the empty string. Reconsume in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.builder.create_start_tag();
                self.reconsume_in(TokenizerState::TagName);
            }
            // "U+003F QUESTION MARK (?) - This is an
            // unexpected-question-mark-instead-of-tag-name parse error.
            // Create a comment token whose data is the empty string.
            // Reconsume in the bogus comment state."
            Some('?') => {
                self.log_parse_error(ParseErrorKind::UnexpectedQuestionMarkInsteadOfTagName);
                self.builder.create_comment();
                self.reconsume_in(TokenizerState::BogusComment);
            }
            // "EOF - This is an eof-before-tag-name parse error. Emit a
            // U+003C LESS-THAN SIGN character token and an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofBeforeTagName);
                self.emit_character_token('<');
                self.emit_eof_token();
            }
            // "Anything else - This is an invalid-first-character-of-tag-name
            // parse error. Emit a U+003C LESS-THAN SIGN character token.
            // Reconsume in the data state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::InvalidFirstCharacterOfTagName);
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::Data);
            }
        }
    }

    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    fn handle_end_tag_open_state(&mut self, current: Option<char>) {
        match current {
            // "ASCII alpha - Create a new end tag token, set its tag name to
            // the empty string. Reconsume in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.builder.create_end_tag();
                self.reconsume_in(TokenizerState::TagName);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-end-tag-name
            // parse error. Switch to the data state."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::MissingEndTagName);
                self.switch_to(TokenizerState::Data);
            }
            // "EOF - This is an eof-before-tag-name parse error. Emit a
            // U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS
            // character token and an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofBeforeTagName);
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.emit_eof_token();
            }
            // "Anything else - This is an invalid-first-character-of-tag-name
            // parse error. Create a comment token whose data is the empty
            // string. Reconsume in the bogus comment state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::InvalidFirstCharacterOfTagName);
                self.builder.create_comment();
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    fn handle_tag_name_state(&mut self, current: Option<char>) {
        match current {
            // "U+0009 CHARACTER TABULATION, U+000A LINE FEED, U+000C FORM
            // FEED, U+0020 SPACE - Switch to the before attribute name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            // "U+002F SOLIDUS (/) - Switch to the self-closing start tag
            // state."
            Some('/') => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the current tag token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "ASCII upper alpha - Append the lowercase version of the
            // current input character (add 0x0020 to the character's code
            // point) to the current tag token's tag name."
            Some(c) if c.is_ascii_uppercase() => {
                self.builder.append_to_tag_name(c.to_ascii_lowercase());
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Append a U+FFFD REPLACEMENT CHARACTER to the current
            // tag token's tag name."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_tag_name('\u{FFFD}');
            }
            // "EOF - This is an eof-in-tag parse error. Emit an end-of-file
            // token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInTag);
                self.emit_eof_token();
            }
            // "Anything else - Append the current input character to the
            // current tag token's tag name."
            Some(c) => {
                self.builder.append_to_tag_name(c);
            }
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    fn handle_self_closing_start_tag_state(&mut self, current: Option<char>) {
        match current {
            // "U+003E GREATER-THAN SIGN (>) - Set the self-closing flag of
            // the current tag token. Switch to the data state. Emit the
            // current tag token."
            Some('>') => {
                self.builder.set_self_closing();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - This is an eof-in-tag parse error. Emit an end-of-file
            // token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInTag);
                self.emit_eof_token();
            }
            // "Anything else - This is an unexpected-solidus-in-tag parse
            // error. Reconsume in the before attribute name state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::UnexpectedSolidusInTag);
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }
}

// =============================================================================
// RCDATA / RAWTEXT End Tag States
// =============================================================================

impl Tokenizer<'_> {
    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    fn handle_rcdata_less_than_sign_state(&mut self, current: Option<char>) {
        match current {
            // "U+002F SOLIDUS (/) - Set the temporary buffer to the empty
            // string. Switch to the RCDATA end tag open state."
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::RCDATAEndTagOpen);
            }
            // "Anything else - Emit a U+003C LESS-THAN SIGN character token.
            // Reconsume in the RCDATA state."
            _ => {
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::RCDATA);
            }
        }
    }

    /// [§ 13.2.5.10 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    fn handle_rcdata_end_tag_open_state(&mut self, current: Option<char>) {
        match current {
            // "ASCII alpha - Create a new end tag token, set its tag name to
            // the empty string. Reconsume in the RCDATA end tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.builder.create_end_tag();
                self.reconsume_in(TokenizerState::RCDATAEndTagName);
            }
            // "Anything else - Emit a U+003C LESS-THAN SIGN character token
            // and a U+002F SOLIDUS character token. Reconsume in the RCDATA
            // state."
            _ => {
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.reconsume_in(TokenizerState::RCDATA);
            }
        }
    }

    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    fn handle_rcdata_end_tag_name_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "If the current end tag token is an appropriate end
            // tag token, then switch to the before attribute name state.
            // Otherwise, treat it as per the 'anything else' entry below."
            Some(c) if Self::is_whitespace_char(c) => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::BeforeAttributeName);
                } else {
                    self.abort_end_tag_match(TokenizerState::RCDATA);
                }
            }
            // "U+002F SOLIDUS (/) - If ... appropriate ..., then switch to
            // the self-closing start tag state."
            Some('/') => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::SelfClosingStartTag);
                } else {
                    self.abort_end_tag_match(TokenizerState::RCDATA);
                }
            }
            // "U+003E GREATER-THAN SIGN (>) - If ... appropriate ..., then
            // switch to the data state and emit the current tag token."
            Some('>') => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::Data);
                    self.emit_current_token();
                } else {
                    self.abort_end_tag_match(TokenizerState::RCDATA);
                }
            }
            // "ASCII upper alpha - Append the lowercase version of the
            // current input character to the current tag token's tag name.
            // Append the current input character to the temporary buffer."
            Some(c) if c.is_ascii_uppercase() => {
                self.builder.append_to_tag_name(c.to_ascii_lowercase());
                self.temporary_buffer.push(c);
            }
            // "ASCII lower alpha - Append the current input character to the
            // current tag token's tag name. Append the current input
            // character to the temporary buffer."
            Some(c) if c.is_ascii_lowercase() => {
                self.builder.append_to_tag_name(c);
                self.temporary_buffer.push(c);
            }
            // "Anything else - Emit a U+003C LESS-THAN SIGN character token,
            // a U+002F SOLIDUS character token, and a character token for
            // each of the characters in the temporary buffer. Reconsume in
            // the RCDATA state."
            _ => {
                self.abort_end_tag_match(TokenizerState::RCDATA);
            }
        }
    }

    /// [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    fn handle_rawtext_less_than_sign_state(&mut self, current: Option<char>) {
        match current {
            // "U+002F SOLIDUS (/) - Set the temporary buffer to the empty
            // string. Switch to the RAWTEXT end tag open state."
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::RAWTEXTEndTagOpen);
            }
            // "Anything else - Emit a U+003C LESS-THAN SIGN character token.
            // Reconsume in the RAWTEXT state."
            _ => {
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::RAWTEXT);
            }
        }
    }

    /// [§ 13.2.5.13 RAWTEXT end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state)
    fn handle_rawtext_end_tag_open_state(&mut self, current: Option<char>) {
        match current {
            // "ASCII alpha - Create a new end tag token, set its tag name to
            // the empty string. Reconsume in the RAWTEXT end tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.builder.create_end_tag();
                self.reconsume_in(TokenizerState::RAWTEXTEndTagName);
            }
            // "Anything else - Emit a U+003C LESS-THAN SIGN character token
            // and a U+002F SOLIDUS character token. Reconsume in the RAWTEXT
            // state."
            _ => {
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.reconsume_in(TokenizerState::RAWTEXT);
            }
        }
    }

    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    fn handle_rawtext_end_tag_name_state(&mut self, current: Option<char>) {
        match current {
            Some(c) if Self::is_whitespace_char(c) => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::BeforeAttributeName);
                } else {
                    self.abort_end_tag_match(TokenizerState::RAWTEXT);
                }
            }
            Some('/') => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::SelfClosingStartTag);
                } else {
                    self.abort_end_tag_match(TokenizerState::RAWTEXT);
                }
            }
            Some('>') => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::Data);
                    self.emit_current_token();
                } else {
                    self.abort_end_tag_match(TokenizerState::RAWTEXT);
                }
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.builder.append_to_tag_name(c.to_ascii_lowercase());
                self.temporary_buffer.push(c);
            }
            Some(c) if c.is_ascii_lowercase() => {
                self.builder.append_to_tag_name(c);
                self.temporary_buffer.push(c);
            }
            _ => {
                self.abort_end_tag_match(TokenizerState::RAWTEXT);
            }
        }
    }
}

// =============================================================================
// Script Data States
// =============================================================================

impl Tokenizer<'_> {
    /// [§ 13.2.5.15 Script data less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-less-than-sign-state)
    fn handle_script_data_less_than_sign_state(&mut self, current: Option<char>) {
        match current {
            // "U+002F SOLIDUS (/) - Set the temporary buffer to the empty
            // string. Switch to the script data end tag open state."
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::ScriptDataEndTagOpen);
            }
            // "U+0021 EXCLAMATION MARK (!) - Switch to the script data
            // escape start state. Emit a U+003C LESS-THAN SIGN character
            // token and a U+0021 EXCLAMATION MARK character token."
            Some('!') => {
                self.switch_to(TokenizerState::ScriptDataEscapeStart);
                self.emit_character_token('<');
                self.emit_character_token('!');
            }
            // "Anything else - Emit a U+003C LESS-THAN SIGN character token.
            // Reconsume in the script data state."
            _ => {
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::ScriptData);
            }
        }
    }

    /// [§ 13.2.5.16 Script data end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-open-state)
    fn handle_script_data_end_tag_open_state(&mut self, current: Option<char>) {
        match current {
            // "ASCII alpha - Create a new end tag token, set its tag name to
            // the empty string. Reconsume in the script data end tag name
            // state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.builder.create_end_tag();
                self.reconsume_in(TokenizerState::ScriptDataEndTagName);
            }
            // "Anything else - Emit a U+003C LESS-THAN SIGN character token
            // and a U+002F SOLIDUS character token. Reconsume in the script
            // data state."
            _ => {
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.reconsume_in(TokenizerState::ScriptData);
            }
        }
    }

    /// [§ 13.2.5.17 Script data end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-name-state)
    fn handle_script_data_end_tag_name_state(&mut self, current: Option<char>) {
        match current {
            Some(c) if Self::is_whitespace_char(c) => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::BeforeAttributeName);
                } else {
                    self.abort_end_tag_match(TokenizerState::ScriptData);
                }
            }
            Some('/') => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::SelfClosingStartTag);
                } else {
                    self.abort_end_tag_match(TokenizerState::ScriptData);
                }
            }
            Some('>') => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::Data);
                    self.emit_current_token();
                } else {
                    self.abort_end_tag_match(TokenizerState::ScriptData);
                }
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.builder.append_to_tag_name(c.to_ascii_lowercase());
                self.temporary_buffer.push(c);
            }
            Some(c) if c.is_ascii_lowercase() => {
                self.builder.append_to_tag_name(c);
                self.temporary_buffer.push(c);
            }
            _ => {
                self.abort_end_tag_match(TokenizerState::ScriptData);
            }
        }
    }

    /// [§ 13.2.5.18 Script data escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-state)
    fn handle_script_data_escape_start_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Switch to the script data escape
            // start dash state. Emit a U+002D HYPHEN-MINUS character token."
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataEscapeStartDash);
                self.emit_character_token('-');
            }
            // "Anything else - Reconsume in the script data state."
            _ => {
                self.reconsume_in(TokenizerState::ScriptData);
            }
        }
    }

    /// [§ 13.2.5.19 Script data escape start dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-dash-state)
    fn handle_script_data_escape_start_dash_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Switch to the script data escaped
            // dash dash state. Emit a U+002D HYPHEN-MINUS character token."
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataEscapedDashDash);
                self.emit_character_token('-');
            }
            // "Anything else - Reconsume in the script data state."
            _ => {
                self.reconsume_in(TokenizerState::ScriptData);
            }
        }
    }

    /// [§ 13.2.5.20 Script data escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-state)
    fn handle_script_data_escaped_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Switch to the script data escaped
            // dash state. Emit a U+002D HYPHEN-MINUS character token."
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataEscapedDash);
                self.emit_character_token('-');
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the script data escaped
            // less-than sign state."
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataEscapedLessThanSign);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Emit a U+FFFD REPLACEMENT CHARACTER character token."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emit_character_token('\u{FFFD}');
            }
            // "EOF - This is an eof-in-script-html-comment-like-text parse
            // error. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);
                self.emit_eof_token();
            }
            // "Anything else - Emit the current input character as a
            // character token."
            Some(c) => {
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.21 Script data escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-state)
    fn handle_script_data_escaped_dash_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Switch to the script data escaped
            // dash dash state. Emit a U+002D HYPHEN-MINUS character token."
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataEscapedDashDash);
                self.emit_character_token('-');
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the script data escaped
            // less-than sign state."
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataEscapedLessThanSign);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Switch to the script data escaped state. Emit a U+FFFD
            // REPLACEMENT CHARACTER character token."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.switch_to(TokenizerState::ScriptDataEscaped);
                self.emit_character_token('\u{FFFD}');
            }
            // "EOF - This is an eof-in-script-html-comment-like-text parse
            // error. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);
                self.emit_eof_token();
            }
            // "Anything else - Switch to the script data escaped state. Emit
            // the current input character as a character token."
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataEscaped);
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.22 Script data escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-dash-state)
    fn handle_script_data_escaped_dash_dash_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Emit a U+002D HYPHEN-MINUS
            // character token."
            Some('-') => {
                self.emit_character_token('-');
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the script data escaped
            // less-than sign state."
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataEscapedLessThanSign);
            }
            // "U+003E GREATER-THAN SIGN (>) - Switch to the script data
            // state. Emit a U+003E GREATER-THAN SIGN character token."
            Some('>') => {
                self.switch_to(TokenizerState::ScriptData);
                self.emit_character_token('>');
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Switch to the script data escaped state. Emit a U+FFFD
            // REPLACEMENT CHARACTER character token."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.switch_to(TokenizerState::ScriptDataEscaped);
                self.emit_character_token('\u{FFFD}');
            }
            // "EOF - This is an eof-in-script-html-comment-like-text parse
            // error. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);
                self.emit_eof_token();
            }
            // "Anything else - Switch to the script data escaped state. Emit
            // the current input character as a character token."
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataEscaped);
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.23 Script data escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-less-than-sign-state)
    fn handle_script_data_escaped_less_than_sign_state(&mut self, current: Option<char>) {
        match current {
            // "U+002F SOLIDUS (/) - Set the temporary buffer to the empty
            // string. Switch to the script data escaped end tag open state."
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::ScriptDataEscapedEndTagOpen);
            }
            // "ASCII alpha - Set the temporary buffer to the empty string.
            // Emit a U+003C LESS-THAN SIGN character token. Reconsume in the
            // script data double escape start state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.temporary_buffer.clear();
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::ScriptDataDoubleEscapeStart);
            }
            // "Anything else - Emit a U+003C LESS-THAN SIGN character token.
            // Reconsume in the script data escaped state."
            _ => {
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::ScriptDataEscaped);
            }
        }
    }

    /// [§ 13.2.5.24 Script data escaped end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-open-state)
    fn handle_script_data_escaped_end_tag_open_state(&mut self, current: Option<char>) {
        match current {
            // "ASCII alpha - Create a new end tag token, set its tag name to
            // the empty string. Reconsume in the script data escaped end tag
            // name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.builder.create_end_tag();
                self.reconsume_in(TokenizerState::ScriptDataEscapedEndTagName);
            }
            // "Anything else - Emit a U+003C LESS-THAN SIGN character token
            // and a U+002F SOLIDUS character token. Reconsume in the script
            // data escaped state."
            _ => {
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.reconsume_in(TokenizerState::ScriptDataEscaped);
            }
        }
    }

    /// [§ 13.2.5.25 Script data escaped end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-name-state)
    fn handle_script_data_escaped_end_tag_name_state(&mut self, current: Option<char>) {
        match current {
            Some(c) if Self::is_whitespace_char(c) => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::BeforeAttributeName);
                } else {
                    self.abort_end_tag_match(TokenizerState::ScriptDataEscaped);
                }
            }
            Some('/') => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::SelfClosingStartTag);
                } else {
                    self.abort_end_tag_match(TokenizerState::ScriptDataEscaped);
                }
            }
            Some('>') => {
                if self.is_appropriate_end_tag_token() {
                    self.switch_to(TokenizerState::Data);
                    self.emit_current_token();
                } else {
                    self.abort_end_tag_match(TokenizerState::ScriptDataEscaped);
                }
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.builder.append_to_tag_name(c.to_ascii_lowercase());
                self.temporary_buffer.push(c);
            }
            Some(c) if c.is_ascii_lowercase() => {
                self.builder.append_to_tag_name(c);
                self.temporary_buffer.push(c);
            }
            _ => {
                self.abort_end_tag_match(TokenizerState::ScriptDataEscaped);
            }
        }
    }

    /// [§ 13.2.5.26 Script data double escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-start-state)
    fn handle_script_data_double_escape_start_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace, '/' or '>': "If the temporary buffer is the string
            // 'script', then switch to the script data double escaped state.
            // Otherwise, switch to the script data escaped state. Emit the
            // current input character as a character token."
            Some(c) if Self::is_whitespace_char(c) || c == '/' || c == '>' => {
                if self.temporary_buffer == "script" {
                    self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                } else {
                    self.switch_to(TokenizerState::ScriptDataEscaped);
                }
                self.emit_character_token(c);
            }
            // "ASCII upper alpha - Append the lowercase version of the
            // current input character to the temporary buffer. Emit the
            // current input character as a character token."
            Some(c) if c.is_ascii_uppercase() => {
                self.temporary_buffer.push(c.to_ascii_lowercase());
                self.emit_character_token(c);
            }
            // "ASCII lower alpha - Append the current input character to the
            // temporary buffer. Emit the current input character as a
            // character token."
            Some(c) if c.is_ascii_lowercase() => {
                self.temporary_buffer.push(c);
                self.emit_character_token(c);
            }
            // "Anything else - Reconsume in the script data escaped state."
            _ => {
                self.reconsume_in(TokenizerState::ScriptDataEscaped);
            }
        }
    }

    /// [§ 13.2.5.27 Script data double escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-state)
    fn handle_script_data_double_escaped_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Switch to the script data double
            // escaped dash state. Emit a U+002D HYPHEN-MINUS character token."
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedDash);
                self.emit_character_token('-');
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the script data double
            // escaped less-than sign state. Emit a U+003C LESS-THAN SIGN
            // character token."
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
                self.emit_character_token('<');
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Emit a U+FFFD REPLACEMENT CHARACTER character token."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emit_character_token('\u{FFFD}');
            }
            // "EOF - This is an eof-in-script-html-comment-like-text parse
            // error. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);
                self.emit_eof_token();
            }
            // "Anything else - Emit the current input character as a
            // character token."
            Some(c) => {
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.28 Script data double escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-state)
    fn handle_script_data_double_escaped_dash_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Switch to the script data double
            // escaped dash dash state. Emit a U+002D HYPHEN-MINUS character
            // token."
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedDashDash);
                self.emit_character_token('-');
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the script data double
            // escaped less-than sign state. Emit a U+003C LESS-THAN SIGN
            // character token."
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
                self.emit_character_token('<');
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Switch to the script data double escaped state. Emit a
            // U+FFFD REPLACEMENT CHARACTER character token."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                self.emit_character_token('\u{FFFD}');
            }
            // "EOF - This is an eof-in-script-html-comment-like-text parse
            // error. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);
                self.emit_eof_token();
            }
            // "Anything else - Switch to the script data double escaped
            // state. Emit the current input character as a character token."
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.29 Script data double escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-dash-state)
    fn handle_script_data_double_escaped_dash_dash_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Emit a U+002D HYPHEN-MINUS
            // character token."
            Some('-') => {
                self.emit_character_token('-');
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the script data double
            // escaped less-than sign state. Emit a U+003C LESS-THAN SIGN
            // character token."
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
                self.emit_character_token('<');
            }
            // "U+003E GREATER-THAN SIGN (>) - Switch to the script data
            // state. Emit a U+003E GREATER-THAN SIGN character token."
            Some('>') => {
                self.switch_to(TokenizerState::ScriptData);
                self.emit_character_token('>');
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Switch to the script data double escaped state. Emit a
            // U+FFFD REPLACEMENT CHARACTER character token."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                self.emit_character_token('\u{FFFD}');
            }
            // "EOF - This is an eof-in-script-html-comment-like-text parse
            // error. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInScriptHtmlCommentLikeText);
                self.emit_eof_token();
            }
            // "Anything else - Switch to the script data double escaped
            // state. Emit the current input character as a character token."
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.30 Script data double escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-less-than-sign-state)
    fn handle_script_data_double_escaped_less_than_sign_state(&mut self, current: Option<char>) {
        match current {
            // "U+002F SOLIDUS (/) - Set the temporary buffer to the empty
            // string. Switch to the script data double escape end state.
            // Emit a U+002F SOLIDUS character token."
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::ScriptDataDoubleEscapeEnd);
                self.emit_character_token('/');
            }
            // "Anything else - Reconsume in the script data double escaped
            // state."
            _ => {
                self.reconsume_in(TokenizerState::ScriptDataDoubleEscaped);
            }
        }
    }

    /// [§ 13.2.5.31 Script data double escape end state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state)
    fn handle_script_data_double_escape_end_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace, '/' or '>': "If the temporary buffer is the string
            // 'script', then switch to the script data escaped state.
            // Otherwise, switch to the script data double escaped state.
            // Emit the current input character as a character token."
            Some(c) if Self::is_whitespace_char(c) || c == '/' || c == '>' => {
                if self.temporary_buffer == "script" {
                    self.switch_to(TokenizerState::ScriptDataEscaped);
                } else {
                    self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                }
                self.emit_character_token(c);
            }
            // "ASCII upper alpha - Append the lowercase version of the
            // current input character to the temporary buffer. Emit the
            // current input character as a character token."
            Some(c) if c.is_ascii_uppercase() => {
                self.temporary_buffer.push(c.to_ascii_lowercase());
                self.emit_character_token(c);
            }
            // "ASCII lower alpha - Append the current input character to the
            // temporary buffer. Emit the current input character as a
            // character token."
            Some(c) if c.is_ascii_lowercase() => {
                self.temporary_buffer.push(c);
                self.emit_character_token(c);
            }
            // "Anything else - Reconsume in the script data double escaped
            // state."
            _ => {
                self.reconsume_in(TokenizerState::ScriptDataDoubleEscaped);
            }
        }
    }
}

// =============================================================================
// Attribute States
// =============================================================================

impl Tokenizer<'_> {
    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    fn handle_before_attribute_name_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+002F SOLIDUS (/), U+003E GREATER-THAN SIGN (>), EOF -
            // Reconsume in the after attribute name state."
            Some('/' | '>') | None => {
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            // "U+003D EQUALS SIGN (=) - This is an
            // unexpected-equals-sign-before-attribute-name parse error.
            // Start a new attribute in the current tag token. Set that
            // attribute's name to the current input character, and its value
            // to the empty string. Switch to the attribute name state."
            Some('=') => {
                self.log_parse_error(ParseErrorKind::UnexpectedEqualsSignBeforeAttributeName);
                self.start_new_attribute();
                self.builder.append_to_attribute_name('=');
                self.switch_to(TokenizerState::AttributeName);
            }
            // "Anything else - Start a new attribute in the current tag
            // token. Set that attribute name and value to the empty string.
            // Reconsume in the attribute name state."
            Some(_) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    fn handle_attribute_name_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace, '/', '>', EOF: "Reconsume in the after attribute
            // name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            Some('/' | '>') | None => {
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            // "U+003D EQUALS SIGN (=) - Switch to the before attribute value
            // state."
            Some('=') => {
                self.switch_to(TokenizerState::BeforeAttributeValue);
            }
            // "ASCII upper alpha - Append the lowercase version of the
            // current input character to the current attribute's name."
            Some(c) if c.is_ascii_uppercase() => {
                self.builder.append_to_attribute_name(c.to_ascii_lowercase());
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Append a U+FFFD REPLACEMENT CHARACTER to the current
            // attribute's name."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_attribute_name('\u{FFFD}');
            }
            // "U+0022 QUOTATION MARK ("), U+0027 APOSTROPHE ('), U+003C
            // LESS-THAN SIGN (<) - This is an
            // unexpected-character-in-attribute-name parse error. Treat it
            // as per the 'anything else' entry below."
            Some(c @ ('"' | '\'' | '<')) => {
                self.log_parse_error(ParseErrorKind::UnexpectedCharacterInAttributeName);
                self.builder.append_to_attribute_name(c);
            }
            // "Anything else - Append the current input character to the
            // current attribute's name."
            Some(c) => {
                self.builder.append_to_attribute_name(c);
            }
        }
    }

    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    fn handle_after_attribute_name_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+002F SOLIDUS (/) - Switch to the self-closing start tag
            // state."
            Some('/') => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            // "U+003D EQUALS SIGN (=) - Switch to the before attribute value
            // state."
            Some('=') => {
                self.switch_to(TokenizerState::BeforeAttributeValue);
            }
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the current tag token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - This is an eof-in-tag parse error. Emit an end-of-file
            // token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInTag);
                self.emit_eof_token();
            }
            // "Anything else - Start a new attribute in the current tag
            // token. Set that attribute name and value to the empty string.
            // Reconsume in the attribute name state."
            Some(_) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    fn handle_before_attribute_value_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+0022 QUOTATION MARK (\") - Switch to the attribute value
            // (double-quoted) state."
            Some('"') => {
                self.switch_to(TokenizerState::AttributeValueDoubleQuoted);
            }
            // "U+0027 APOSTROPHE (') - Switch to the attribute value
            // (single-quoted) state."
            Some('\'') => {
                self.switch_to(TokenizerState::AttributeValueSingleQuoted);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a
            // missing-attribute-value parse error. Switch to the data state.
            // Emit the current tag token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::MissingAttributeValue);
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "Anything else - Reconsume in the attribute value (unquoted)
            // state."
            _ => {
                self.reconsume_in(TokenizerState::AttributeValueUnquoted);
            }
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    fn handle_attribute_value_double_quoted_state(&mut self, current: Option<char>) {
        match current {
            // "U+0022 QUOTATION MARK (\") - Switch to the after attribute
            // value (quoted) state."
            Some('"') => {
                self.switch_to(TokenizerState::AfterAttributeValueQuoted);
            }
            // "U+0026 AMPERSAND (&) - Set the return state to the attribute
            // value (double-quoted) state. Switch to the character reference
            // state."
            Some('&') => {
                self.return_state = Some(TokenizerState::AttributeValueDoubleQuoted);
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Append a U+FFFD REPLACEMENT CHARACTER to the current
            // attribute's value."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_attribute_value('\u{FFFD}');
            }
            // "EOF - This is an eof-in-tag parse error. Emit an end-of-file
            // token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInTag);
                self.emit_eof_token();
            }
            // "Anything else - Append the current input character to the
            // current attribute's value."
            Some(c) => {
                self.builder.append_to_attribute_value(c);
            }
        }
    }

    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    fn handle_attribute_value_single_quoted_state(&mut self, current: Option<char>) {
        match current {
            // "U+0027 APOSTROPHE (') - Switch to the after attribute value
            // (quoted) state."
            Some('\'') => {
                self.switch_to(TokenizerState::AfterAttributeValueQuoted);
            }
            // "U+0026 AMPERSAND (&) - Set the return state to the attribute
            // value (single-quoted) state. Switch to the character reference
            // state."
            Some('&') => {
                self.return_state = Some(TokenizerState::AttributeValueSingleQuoted);
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Append a U+FFFD REPLACEMENT CHARACTER to the current
            // attribute's value."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_attribute_value('\u{FFFD}');
            }
            // "EOF - This is an eof-in-tag parse error. Emit an end-of-file
            // token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInTag);
                self.emit_eof_token();
            }
            // "Anything else - Append the current input character to the
            // current attribute's value."
            Some(c) => {
                self.builder.append_to_attribute_value(c);
            }
        }
    }

    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    fn handle_attribute_value_unquoted_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Switch to the before attribute name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            // "U+0026 AMPERSAND (&) - Set the return state to the attribute
            // value (unquoted) state. Switch to the character reference
            // state."
            Some('&') => {
                self.return_state = Some(TokenizerState::AttributeValueUnquoted);
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the current tag token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Append a U+FFFD REPLACEMENT CHARACTER to the current
            // attribute's value."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_attribute_value('\u{FFFD}');
            }
            // "U+0022 QUOTATION MARK (\"), U+0027 APOSTROPHE ('), U+003C
            // LESS-THAN SIGN (<), U+003D EQUALS SIGN (=), U+0060 GRAVE
            // ACCENT (`) - This is an
            // unexpected-character-in-unquoted-attribute-value parse error.
            // Treat it as per the 'anything else' entry below."
            Some(c @ ('"' | '\'' | '<' | '=' | '`')) => {
                self.log_parse_error(ParseErrorKind::UnexpectedCharacterInUnquotedAttributeValue);
                self.builder.append_to_attribute_value(c);
            }
            // "EOF - This is an eof-in-tag parse error. Emit an end-of-file
            // token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInTag);
                self.emit_eof_token();
            }
            // "Anything else - Append the current input character to the
            // current attribute's value."
            Some(c) => {
                self.builder.append_to_attribute_value(c);
            }
        }
    }

    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    fn handle_after_attribute_value_quoted_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Switch to the before attribute name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            // "U+002F SOLIDUS (/) - Switch to the self-closing start tag
            // state."
            Some('/') => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the current tag token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - This is an eof-in-tag parse error. Emit an end-of-file
            // token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInTag);
                self.emit_eof_token();
            }
            // "Anything else - This is a missing-whitespace-between-attributes
            // parse error. Reconsume in the before attribute name state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::MissingWhitespaceBetweenAttributes);
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }
}

// =============================================================================
// Comment States
// =============================================================================

impl Tokenizer<'_> {
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    fn handle_bogus_comment_state(&mut self, current: Option<char>) {
        match current {
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the current comment token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - Emit the comment. Emit an end-of-file token."
            None => {
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Append a U+FFFD REPLACEMENT CHARACTER to the comment
            // token's data."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_comment('\u{FFFD}');
            }
            // "Anything else - Append the current input character to the
            // comment token's data."
            Some(c) => {
                self.builder.append_to_comment(c);
            }
        }
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// Works entirely on lookahead; nothing has been consumed on entry.
    fn handle_markup_declaration_open_state(&mut self) {
        // "If the next two characters are both U+002D HYPHEN-MINUS
        // characters (-), consume those two characters, create a comment
        // token whose data is the empty string, and switch to the comment
        // start state."
        if self.next_few_characters_are("--") {
            self.consume_string("--");
            self.builder.create_comment();
            self.switch_to(TokenizerState::CommentStart);
        }
        // "Otherwise, if the next seven characters are an ASCII
        // case-insensitive match for the word 'DOCTYPE', then consume those
        // characters and switch to the DOCTYPE state."
        else if self.next_few_characters_are_case_insensitive("DOCTYPE") {
            self.consume_string("DOCTYPE");
            self.switch_to(TokenizerState::DOCTYPE);
        }
        // "Otherwise, if the next seven characters are a case-sensitive
        // match for the string '[CDATA[', then consume those characters.
        // If there is an adjusted current node and it is not an element in
        // the HTML namespace, then switch to the CDATA section state.
        // Otherwise, this is a cdata-in-html-content parse error. Create a
        // comment token whose data is the '[CDATA[' string. Switch to the
        // bogus comment state."
        else if self.next_few_characters_are("[CDATA[") {
            self.consume_string("[CDATA[");
            if self.in_foreign_content {
                self.switch_to(TokenizerState::CDATASection);
            } else {
                self.log_parse_error(ParseErrorKind::CdataInHtmlContent);
                self.builder.create_comment();
                self.builder.push_str_to_comment("[CDATA[");
                self.switch_to(TokenizerState::BogusComment);
            }
        }
        // "Otherwise, this is an incorrectly-opened-comment parse error.
        // Create a comment token whose data is the empty string. Switch to
        // the bogus comment state (don't consume anything in the current
        // state)."
        else {
            self.log_parse_error(ParseErrorKind::IncorrectlyOpenedComment);
            self.builder.create_comment();
            self.switch_to(TokenizerState::BogusComment);
        }
    }

    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    fn handle_comment_start_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Switch to the comment start dash
            // state."
            Some('-') => {
                self.switch_to(TokenizerState::CommentStartDash);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is an
            // abrupt-closing-of-empty-comment parse error. Switch to the
            // data state. Emit the current comment token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::AbruptClosingOfEmptyComment);
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "Anything else - Reconsume in the comment state."
            _ => {
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    fn handle_comment_start_dash_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Switch to the comment end state."
            Some('-') => {
                self.switch_to(TokenizerState::CommentEnd);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is an
            // abrupt-closing-of-empty-comment parse error. Switch to the
            // data state. Emit the current comment token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::AbruptClosingOfEmptyComment);
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - This is an eof-in-comment parse error. Emit the current
            // comment token. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInComment);
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - Append a U+002D HYPHEN-MINUS character (-) to
            // the comment token's data. Reconsume in the comment state."
            Some(_) => {
                self.builder.append_to_comment('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    fn handle_comment_state(&mut self, current: Option<char>) {
        match current {
            // "U+003C LESS-THAN SIGN (<) - Append the current input
            // character to the comment token's data. Switch to the comment
            // less-than sign state."
            Some('<') => {
                self.builder.append_to_comment('<');
                self.switch_to(TokenizerState::CommentLessThanSign);
            }
            // "U+002D HYPHEN-MINUS (-) - Switch to the comment end dash
            // state."
            Some('-') => {
                self.switch_to(TokenizerState::CommentEndDash);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Append a U+FFFD REPLACEMENT CHARACTER to the comment
            // token's data."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_comment('\u{FFFD}');
            }
            // "EOF - This is an eof-in-comment parse error. Emit the current
            // comment token. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInComment);
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - Append the current input character to the
            // comment token's data."
            Some(c) => {
                self.builder.append_to_comment(c);
            }
        }
    }

    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    fn handle_comment_less_than_sign_state(&mut self, current: Option<char>) {
        match current {
            // "U+0021 EXCLAMATION MARK (!) - Append the current input
            // character to the comment token's data. Switch to the comment
            // less-than sign bang state."
            Some('!') => {
                self.builder.append_to_comment('!');
                self.switch_to(TokenizerState::CommentLessThanSignBang);
            }
            // "U+003C LESS-THAN SIGN (<) - Append the current input
            // character to the comment token's data."
            Some('<') => {
                self.builder.append_to_comment('<');
            }
            // "Anything else - Reconsume in the comment state."
            _ => {
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    fn handle_comment_less_than_sign_bang_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Switch to the comment less-than
            // sign bang dash state."
            Some('-') => {
                self.switch_to(TokenizerState::CommentLessThanSignBangDash);
            }
            // "Anything else - Reconsume in the comment state."
            _ => {
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    fn handle_comment_less_than_sign_bang_dash_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Switch to the comment less-than
            // sign bang dash dash state."
            Some('-') => {
                self.switch_to(TokenizerState::CommentLessThanSignBangDashDash);
            }
            // "Anything else - Reconsume in the comment end dash state."
            _ => {
                self.reconsume_in(TokenizerState::CommentEndDash);
            }
        }
    }

    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    fn handle_comment_less_than_sign_bang_dash_dash_state(&mut self, current: Option<char>) {
        match current {
            // "U+003E GREATER-THAN SIGN (>), EOF - Reconsume in the comment
            // end state."
            Some('>') | None => {
                self.reconsume_in(TokenizerState::CommentEnd);
            }
            // "Anything else - This is a nested-comment parse error.
            // Reconsume in the comment end state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::NestedComment);
                self.reconsume_in(TokenizerState::CommentEnd);
            }
        }
    }

    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    fn handle_comment_end_dash_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Switch to the comment end state."
            Some('-') => {
                self.switch_to(TokenizerState::CommentEnd);
            }
            // "EOF - This is an eof-in-comment parse error. Emit the current
            // comment token. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInComment);
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - Append a U+002D HYPHEN-MINUS character (-) to
            // the comment token's data. Reconsume in the comment state."
            Some(_) => {
                self.builder.append_to_comment('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    fn handle_comment_end_state(&mut self, current: Option<char>) {
        match current {
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the current comment token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "U+0021 EXCLAMATION MARK (!) - Switch to the comment end bang
            // state."
            Some('!') => {
                self.switch_to(TokenizerState::CommentEndBang);
            }
            // "U+002D HYPHEN-MINUS (-) - Append a U+002D HYPHEN-MINUS
            // character (-) to the comment token's data."
            Some('-') => {
                self.builder.append_to_comment('-');
            }
            // "EOF - This is an eof-in-comment parse error. Emit the current
            // comment token. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInComment);
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - Append two U+002D HYPHEN-MINUS characters (-)
            // to the comment token's data. Reconsume in the comment state."
            Some(_) => {
                self.builder.push_str_to_comment("--");
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    fn handle_comment_end_bang_state(&mut self, current: Option<char>) {
        match current {
            // "U+002D HYPHEN-MINUS (-) - Append two U+002D HYPHEN-MINUS
            // characters (-) and a U+0021 EXCLAMATION MARK character (!) to
            // the comment token's data. Switch to the comment end dash state."
            Some('-') => {
                self.builder.push_str_to_comment("--!");
                self.switch_to(TokenizerState::CommentEndDash);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is an
            // incorrectly-closed-comment parse error. Switch to the data
            // state. Emit the current comment token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::IncorrectlyClosedComment);
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - This is an eof-in-comment parse error. Emit the current
            // comment token. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInComment);
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - Append two U+002D HYPHEN-MINUS characters (-)
            // and a U+0021 EXCLAMATION MARK character (!) to the comment
            // token's data. Reconsume in the comment state."
            Some(_) => {
                self.builder.push_str_to_comment("--!");
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }
}

// =============================================================================
// DOCTYPE States
// =============================================================================

impl Tokenizer<'_> {
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    fn handle_doctype_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Switch to the before DOCTYPE name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPEName);
            }
            // "U+003E GREATER-THAN SIGN (>) - Reconsume in the before
            // DOCTYPE name state."
            Some('>') => {
                self.reconsume_in(TokenizerState::BeforeDOCTYPEName);
            }
            // "EOF - This is an eof-in-doctype parse error. Create a new
            // DOCTYPE token. Set its force-quirks flag to on. Emit the
            // current token. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.create_doctype();
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - This is a
            // missing-whitespace-before-doctype-name parse error. Reconsume
            // in the before DOCTYPE name state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::MissingWhitespaceBeforeDoctypeName);
                self.reconsume_in(TokenizerState::BeforeDOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    fn handle_before_doctype_name_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "ASCII upper alpha - Create a new DOCTYPE token. Set the
            // token's name to the lowercase version of the current input
            // character. Switch to the DOCTYPE name state."
            Some(c) if c.is_ascii_uppercase() => {
                self.builder.create_doctype();
                self.builder.append_to_doctype_name(c.to_ascii_lowercase());
                self.switch_to(TokenizerState::DOCTYPEName);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Create a new DOCTYPE token. Set the token's name to a
            // U+FFFD REPLACEMENT CHARACTER. Switch to the DOCTYPE name
            // state."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.create_doctype();
                self.builder.append_to_doctype_name('\u{FFFD}');
                self.switch_to(TokenizerState::DOCTYPEName);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-doctype-name
            // parse error. Create a new DOCTYPE token. Set its force-quirks
            // flag to on. Switch to the data state. Emit the current token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::MissingDoctypeName);
                self.builder.create_doctype();
                self.builder.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - This is an eof-in-doctype parse error. Create a new
            // DOCTYPE token. Set its force-quirks flag to on. Emit the
            // current token. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.create_doctype();
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - Create a new DOCTYPE token. Set the token's
            // name to the current input character. Switch to the DOCTYPE
            // name state."
            Some(c) => {
                self.builder.create_doctype();
                self.builder.append_to_doctype_name(c);
                self.switch_to(TokenizerState::DOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    fn handle_doctype_name_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Switch to the after DOCTYPE name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterDOCTYPEName);
            }
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the current DOCTYPE token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "ASCII upper alpha - Append the lowercase version of the
            // current input character to the current DOCTYPE token's name."
            Some(c) if c.is_ascii_uppercase() => {
                self.builder.append_to_doctype_name(c.to_ascii_lowercase());
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Append a U+FFFD REPLACEMENT CHARACTER to the current
            // DOCTYPE token's name."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_doctype_name('\u{FFFD}');
            }
            // "EOF - This is an eof-in-doctype parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Emit the current
            // DOCTYPE token. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - Append the current input character to the
            // current DOCTYPE token's name."
            Some(c) => {
                self.builder.append_to_doctype_name(c);
            }
        }
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    fn handle_after_doctype_name_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the current DOCTYPE token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - This is an eof-in-doctype parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Emit the current
            // DOCTYPE token. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "If the six characters starting from the current input
            // character are an ASCII case-insensitive match for the word
            // 'PUBLIC', then consume those characters and switch to the
            // after DOCTYPE public keyword state."
            Some(c) if c.eq_ignore_ascii_case(&'p')
                && self.next_few_characters_are_case_insensitive("UBLIC") =>
            {
                self.consume_string("UBLIC");
                self.switch_to(TokenizerState::AfterDOCTYPEPublicKeyword);
            }
            // "Otherwise, if the six characters starting from the current
            // input character are an ASCII case-insensitive match for the
            // word 'SYSTEM', then consume those characters and switch to the
            // after DOCTYPE system keyword state."
            Some(c) if c.eq_ignore_ascii_case(&'s')
                && self.next_few_characters_are_case_insensitive("YSTEM") =>
            {
                self.consume_string("YSTEM");
                self.switch_to(TokenizerState::AfterDOCTYPESystemKeyword);
            }
            // "Otherwise, this is an
            // invalid-character-sequence-after-doctype-name parse error. Set
            // the current DOCTYPE token's force-quirks flag to on. Reconsume
            // in the bogus DOCTYPE state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName);
                self.builder.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    fn handle_after_doctype_public_keyword_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Switch to the before DOCTYPE public identifier
            // state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPEPublicIdentifier);
            }
            // "U+0022 QUOTATION MARK (\") - This is a
            // missing-whitespace-after-doctype-public-keyword parse error.
            // Set the current DOCTYPE token's public identifier to the empty
            // string (not missing), then switch to the DOCTYPE public
            // identifier (double-quoted) state."
            Some('"') => {
                self.log_parse_error(ParseErrorKind::MissingWhitespaceAfterDoctypePublicKeyword);
                self.builder.init_public_identifier();
                self.switch_to(TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted);
            }
            // "U+0027 APOSTROPHE (') - Same, single-quoted."
            Some('\'') => {
                self.log_parse_error(ParseErrorKind::MissingWhitespaceAfterDoctypePublicKeyword);
                self.builder.init_public_identifier();
                self.switch_to(TokenizerState::DOCTYPEPublicIdentifierSingleQuoted);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a
            // missing-doctype-public-identifier parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Switch to the data
            // state. Emit the current DOCTYPE token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::MissingDoctypePublicIdentifier);
                self.builder.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - This is an eof-in-doctype parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Emit the current
            // DOCTYPE token. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - This is a
            // missing-quote-before-doctype-public-identifier parse error.
            // Set the current DOCTYPE token's force-quirks flag to on.
            // Reconsume in the bogus DOCTYPE state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::MissingQuoteBeforeDoctypePublicIdentifier);
                self.builder.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    fn handle_before_doctype_public_identifier_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+0022 QUOTATION MARK (\") - Set the current DOCTYPE token's
            // public identifier to the empty string (not missing), then
            // switch to the DOCTYPE public identifier (double-quoted) state."
            Some('"') => {
                self.builder.init_public_identifier();
                self.switch_to(TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted);
            }
            // "U+0027 APOSTROPHE (') - Same, single-quoted."
            Some('\'') => {
                self.builder.init_public_identifier();
                self.switch_to(TokenizerState::DOCTYPEPublicIdentifierSingleQuoted);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a
            // missing-doctype-public-identifier parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Switch to the data
            // state. Emit the current DOCTYPE token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::MissingDoctypePublicIdentifier);
                self.builder.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - eof-in-doctype parse error; force-quirks on; emit; EOF."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - This is a
            // missing-quote-before-doctype-public-identifier parse error.
            // Set the current DOCTYPE token's force-quirks flag to on.
            // Reconsume in the bogus DOCTYPE state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::MissingQuoteBeforeDoctypePublicIdentifier);
                self.builder.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    fn handle_doctype_public_identifier_double_quoted_state(&mut self, current: Option<char>) {
        match current {
            // "U+0022 QUOTATION MARK (\") - Switch to the after DOCTYPE
            // public identifier state."
            Some('"') => {
                self.switch_to(TokenizerState::AfterDOCTYPEPublicIdentifier);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Append a U+FFFD REPLACEMENT CHARACTER to the current
            // DOCTYPE token's public identifier."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_public_identifier('\u{FFFD}');
            }
            // "U+003E GREATER-THAN SIGN (>) - This is an
            // abrupt-doctype-public-identifier parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Switch to the data
            // state. Emit the current DOCTYPE token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::AbruptDoctypePublicIdentifier);
                self.builder.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - eof-in-doctype parse error; force-quirks on; emit; EOF."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - Append the current input character to the
            // current DOCTYPE token's public identifier."
            Some(c) => {
                self.builder.append_to_public_identifier(c);
            }
        }
    }

    /// [§ 13.2.5.60 DOCTYPE public identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state)
    fn handle_doctype_public_identifier_single_quoted_state(&mut self, current: Option<char>) {
        match current {
            // "U+0027 APOSTROPHE (') - Switch to the after DOCTYPE public
            // identifier state."
            Some('\'') => {
                self.switch_to(TokenizerState::AfterDOCTYPEPublicIdentifier);
            }
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_public_identifier('\u{FFFD}');
            }
            Some('>') => {
                self.log_parse_error(ParseErrorKind::AbruptDoctypePublicIdentifier);
                self.builder.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(c) => {
                self.builder.append_to_public_identifier(c);
            }
        }
    }

    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    fn handle_after_doctype_public_identifier_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Switch to the between DOCTYPE public and system
            // identifiers state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers);
            }
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the current DOCTYPE token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "U+0022 QUOTATION MARK (\") - This is a
            // missing-whitespace-between-doctype-public-and-system-identifiers
            // parse error. Set the current DOCTYPE token's system identifier
            // to the empty string (not missing), then switch to the DOCTYPE
            // system identifier (double-quoted) state."
            Some('"') => {
                self.log_parse_error(
                    ParseErrorKind::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );
                self.builder.init_system_identifier();
                self.switch_to(TokenizerState::DOCTYPESystemIdentifierDoubleQuoted);
            }
            // "U+0027 APOSTROPHE (') - Same, single-quoted."
            Some('\'') => {
                self.log_parse_error(
                    ParseErrorKind::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );
                self.builder.init_system_identifier();
                self.switch_to(TokenizerState::DOCTYPESystemIdentifierSingleQuoted);
            }
            // "EOF - eof-in-doctype parse error; force-quirks on; emit; EOF."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - This is a
            // missing-quote-before-doctype-system-identifier parse error.
            // Set the current DOCTYPE token's force-quirks flag to on.
            // Reconsume in the bogus DOCTYPE state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);
                self.builder.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    fn handle_between_doctype_public_and_system_identifiers_state(
        &mut self,
        current: Option<char>,
    ) {
        match current {
            // Whitespace: "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the current DOCTYPE token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "U+0022 QUOTATION MARK (\") - Set the current DOCTYPE token's
            // system identifier to the empty string (not missing), then
            // switch to the DOCTYPE system identifier (double-quoted) state."
            Some('"') => {
                self.builder.init_system_identifier();
                self.switch_to(TokenizerState::DOCTYPESystemIdentifierDoubleQuoted);
            }
            // "U+0027 APOSTROPHE (') - Same, single-quoted."
            Some('\'') => {
                self.builder.init_system_identifier();
                self.switch_to(TokenizerState::DOCTYPESystemIdentifierSingleQuoted);
            }
            // "EOF - eof-in-doctype parse error; force-quirks on; emit; EOF."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - missing-quote-before-doctype-system-identifier
            // parse error; force-quirks on; reconsume in the bogus DOCTYPE
            // state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);
                self.builder.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    fn handle_after_doctype_system_keyword_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Switch to the before DOCTYPE system identifier
            // state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPESystemIdentifier);
            }
            // "U+0022 QUOTATION MARK (\") - This is a
            // missing-whitespace-after-doctype-system-keyword parse error.
            // Set the current DOCTYPE token's system identifier to the empty
            // string (not missing), then switch to the DOCTYPE system
            // identifier (double-quoted) state."
            Some('"') => {
                self.log_parse_error(ParseErrorKind::MissingWhitespaceAfterDoctypeSystemKeyword);
                self.builder.init_system_identifier();
                self.switch_to(TokenizerState::DOCTYPESystemIdentifierDoubleQuoted);
            }
            // "U+0027 APOSTROPHE (') - Same, single-quoted."
            Some('\'') => {
                self.log_parse_error(ParseErrorKind::MissingWhitespaceAfterDoctypeSystemKeyword);
                self.builder.init_system_identifier();
                self.switch_to(TokenizerState::DOCTYPESystemIdentifierSingleQuoted);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a
            // missing-doctype-system-identifier parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Switch to the data
            // state. Emit the current DOCTYPE token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::MissingDoctypeSystemIdentifier);
                self.builder.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - eof-in-doctype parse error; force-quirks on; emit; EOF."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - missing-quote-before-doctype-system-identifier
            // parse error; force-quirks on; reconsume in the bogus DOCTYPE
            // state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);
                self.builder.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    fn handle_before_doctype_system_identifier_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+0022 QUOTATION MARK (\") - Set the current DOCTYPE token's
            // system identifier to the empty string (not missing), then
            // switch to the DOCTYPE system identifier (double-quoted) state."
            Some('"') => {
                self.builder.init_system_identifier();
                self.switch_to(TokenizerState::DOCTYPESystemIdentifierDoubleQuoted);
            }
            // "U+0027 APOSTROPHE (') - Same, single-quoted."
            Some('\'') => {
                self.builder.init_system_identifier();
                self.switch_to(TokenizerState::DOCTYPESystemIdentifierSingleQuoted);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a
            // missing-doctype-system-identifier parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Switch to the data
            // state. Emit the current DOCTYPE token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::MissingDoctypeSystemIdentifier);
                self.builder.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - eof-in-doctype parse error; force-quirks on; emit; EOF."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - missing-quote-before-doctype-system-identifier
            // parse error; force-quirks on; reconsume in the bogus DOCTYPE
            // state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);
                self.builder.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.65 DOCTYPE system identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    fn handle_doctype_system_identifier_double_quoted_state(&mut self, current: Option<char>) {
        match current {
            // "U+0022 QUOTATION MARK (\") - Switch to the after DOCTYPE
            // system identifier state."
            Some('"') => {
                self.switch_to(TokenizerState::AfterDOCTYPESystemIdentifier);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Append a U+FFFD REPLACEMENT CHARACTER to the current
            // DOCTYPE token's system identifier."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_system_identifier('\u{FFFD}');
            }
            // "U+003E GREATER-THAN SIGN (>) - This is an
            // abrupt-doctype-system-identifier parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Switch to the data
            // state. Emit the current DOCTYPE token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::AbruptDoctypeSystemIdentifier);
                self.builder.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - eof-in-doctype parse error; force-quirks on; emit; EOF."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - Append the current input character to the
            // current DOCTYPE token's system identifier."
            Some(c) => {
                self.builder.append_to_system_identifier(c);
            }
        }
    }

    /// [§ 13.2.5.66 DOCTYPE system identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state)
    fn handle_doctype_system_identifier_single_quoted_state(&mut self, current: Option<char>) {
        match current {
            // "U+0027 APOSTROPHE (') - Switch to the after DOCTYPE system
            // identifier state."
            Some('\'') => {
                self.switch_to(TokenizerState::AfterDOCTYPESystemIdentifier);
            }
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.builder.append_to_system_identifier('\u{FFFD}');
            }
            Some('>') => {
                self.log_parse_error(ParseErrorKind::AbruptDoctypeSystemIdentifier);
                self.builder.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(c) => {
                self.builder.append_to_system_identifier(c);
            }
        }
    }

    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    fn handle_after_doctype_system_identifier_state(&mut self, current: Option<char>) {
        match current {
            // Whitespace: "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the current DOCTYPE token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - eof-in-doctype parse error; force-quirks on; emit; EOF."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.builder.set_force_quirks();
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - This is an
            // unexpected-character-after-doctype-system-identifier parse
            // error. Reconsume in the bogus DOCTYPE state. (This does not
            // set the current DOCTYPE token's force-quirks flag to on.)"
            Some(_) => {
                self.log_parse_error(
                    ParseErrorKind::UnexpectedCharacterAfterDoctypeSystemIdentifier,
                );
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    fn handle_bogus_doctype_state(&mut self, current: Option<char>) {
        match current {
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit
            // the DOCTYPE token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "U+0000 NULL - This is an unexpected-null-character parse
            // error. Ignore the character."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
            }
            // "EOF - Emit the DOCTYPE token. Emit an end-of-file token."
            None => {
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "Anything else - Ignore the character."
            Some(_) => {}
        }
    }
}

// =============================================================================
// CDATA Section States
// =============================================================================

impl Tokenizer<'_> {
    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    fn handle_cdata_section_state(&mut self, current: Option<char>) {
        match current {
            // "U+005D RIGHT SQUARE BRACKET (]) - Switch to the CDATA section
            // bracket state."
            Some(']') => {
                self.switch_to(TokenizerState::CDATASectionBracket);
            }
            // "EOF - This is an eof-in-cdata parse error. Emit an
            // end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInCdata);
                self.emit_eof_token();
            }
            // "Anything else - Emit the current input character as a
            // character token." (NULL characters are handled in the tree
            // construction stage, as part of the in foreign content
            // insertion mode.)
            Some(c) => {
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.70 CDATA section bracket state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state)
    fn handle_cdata_section_bracket_state(&mut self, current: Option<char>) {
        match current {
            // "U+005D RIGHT SQUARE BRACKET (]) - Switch to the CDATA section
            // end state."
            Some(']') => {
                self.switch_to(TokenizerState::CDATASectionEnd);
            }
            // "Anything else - Emit a U+005D RIGHT SQUARE BRACKET character
            // token. Reconsume in the CDATA section state."
            _ => {
                self.emit_character_token(']');
                self.reconsume_in(TokenizerState::CDATASection);
            }
        }
    }

    /// [§ 13.2.5.71 CDATA section end state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state)
    fn handle_cdata_section_end_state(&mut self, current: Option<char>) {
        match current {
            // "U+005D RIGHT SQUARE BRACKET (]) - Emit a U+005D RIGHT SQUARE
            // BRACKET character token."
            Some(']') => {
                self.emit_character_token(']');
            }
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
            }
            // "Anything else - Emit two U+005D RIGHT SQUARE BRACKET
            // character tokens. Reconsume in the CDATA section state."
            _ => {
                self.emit_character_token(']');
                self.emit_character_token(']');
                self.reconsume_in(TokenizerState::CDATASection);
            }
        }
    }
}

// =============================================================================
// Character Reference States
// =============================================================================

impl Tokenizer<'_> {
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    fn handle_character_reference_state(&mut self, current: Option<char>) {
        // "Set the temporary buffer to the empty string. Append a U+0026
        // AMPERSAND character (&) to the temporary buffer."
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');
        match current {
            // "ASCII alphanumeric - Reconsume in the named character
            // reference state."
            Some(c) if c.is_ascii_alphanumeric() => {
                self.reconsume_in(TokenizerState::NamedCharacterReference);
            }
            // "U+0023 NUMBER SIGN (#) - Append the current input character
            // to the temporary buffer. Switch to the numeric character
            // reference state."
            Some('#') => {
                self.temporary_buffer.push('#');
                self.switch_to(TokenizerState::NumericCharacterReference);
            }
            // "Anything else - Flush code points consumed as a character
            // reference. Reconsume in the return state."
            _ => {
                self.flush_code_points_consumed_as_character_reference();
                self.reconsume_in_return_state();
            }
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// Matches the longest table identifier by lookahead, then consumes
    /// exactly the matched characters; nothing is consumed on a miss.
    fn handle_named_character_reference_state(&mut self) {
        // "Consume the maximum number of characters possible, where the
        // consumed characters are one of the identifiers in the first column
        // of the named character references table."
        let lookahead = self.cursor.peek_n(LOOKAHEAD_LIMIT);
        match longest_entity_match(lookahead) {
            Some((matched_len, replacement)) => {
                let matched = &lookahead[..matched_len];
                self.consume_chars(matched_len);
                let ends_with_semicolon = matched.ends_with(';');

                // "If the character reference was consumed as part of an
                // attribute, and the last character matched is not a U+003B
                // SEMICOLON character (;), and the next input character is
                // either a U+003D EQUALS SIGN character (=) or an ASCII
                // alphanumeric, then, for historical reasons, flush code
                // points consumed as a character reference. Switch to the
                // return state."
                if self.is_consumed_as_part_of_attribute() && !ends_with_semicolon {
                    let next = self.cursor.peek();
                    if next == Some('=') || next.is_some_and(|c| c.is_ascii_alphanumeric()) {
                        self.temporary_buffer.push_str(matched);
                        self.flush_code_points_consumed_as_character_reference();
                        self.switch_to_return_state();
                        return;
                    }
                }

                // "If the last character matched is not a U+003B SEMICOLON
                // character (;), then this is a
                // missing-semicolon-after-character-reference parse error."
                if !ends_with_semicolon {
                    self.log_parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);
                }

                // "Set the temporary buffer to the empty string. Append one
                // or two characters corresponding to the character reference
                // name to the temporary buffer. Flush code points consumed
                // as a character reference. Switch to the return state."
                self.temporary_buffer.clear();
                self.temporary_buffer.push_str(replacement);
                self.flush_code_points_consumed_as_character_reference();
                self.switch_to_return_state();
            }
            None => {
                // "Otherwise - Flush code points consumed as a character
                // reference. Switch to the ambiguous ampersand state."
                self.flush_code_points_consumed_as_character_reference();
                self.switch_to(TokenizerState::AmbiguousAmpersand);
            }
        }
    }

    /// [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
    fn handle_ambiguous_ampersand_state(&mut self, current: Option<char>) {
        match current {
            // "ASCII alphanumeric - If the character reference was consumed
            // as part of an attribute, then append the current input
            // character to the current attribute's value. Otherwise, emit
            // the current input character as a character token."
            Some(c) if c.is_ascii_alphanumeric() => {
                if self.is_consumed_as_part_of_attribute() {
                    self.builder.append_to_attribute_value(c);
                } else {
                    self.emit_character_token(c);
                }
            }
            // "U+003B SEMICOLON (;) - This is an
            // unknown-named-character-reference parse error. Reconsume in
            // the return state."
            Some(';') => {
                self.log_parse_error(ParseErrorKind::UnknownNamedCharacterReference);
                self.reconsume_in_return_state();
            }
            // "Anything else - Reconsume in the return state."
            _ => {
                self.reconsume_in_return_state();
            }
        }
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    fn handle_numeric_character_reference_state(&mut self, current: Option<char>) {
        // "Set the character reference code to zero (0)."
        self.character_reference_code = 0;
        match current {
            // "U+0078 LATIN SMALL LETTER X, U+0058 LATIN CAPITAL LETTER X -
            // Append the current input character to the temporary buffer.
            // Switch to the hexadecimal character reference start state."
            Some(c @ ('x' | 'X')) => {
                self.temporary_buffer.push(c);
                self.switch_to(TokenizerState::HexadecimalCharacterReferenceStart);
            }
            // "Anything else - Reconsume in the decimal character reference
            // start state."
            _ => {
                self.reconsume_in(TokenizerState::DecimalCharacterReferenceStart);
            }
        }
    }

    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    fn handle_hexadecimal_character_reference_start_state(&mut self, current: Option<char>) {
        match current {
            // "ASCII hex digit - Reconsume in the hexadecimal character
            // reference state."
            Some(c) if c.is_ascii_hexdigit() => {
                self.reconsume_in(TokenizerState::HexadecimalCharacterReference);
            }
            // "Anything else - This is an
            // absence-of-digits-in-numeric-character-reference parse error.
            // Flush code points consumed as a character reference. Reconsume
            // in the return state."
            _ => {
                self.log_parse_error(ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference);
                self.flush_code_points_consumed_as_character_reference();
                self.reconsume_in_return_state();
            }
        }
    }

    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    fn handle_decimal_character_reference_start_state(&mut self, current: Option<char>) {
        match current {
            // "ASCII digit - Reconsume in the decimal character reference
            // state."
            Some(c) if c.is_ascii_digit() => {
                self.reconsume_in(TokenizerState::DecimalCharacterReference);
            }
            // "Anything else - This is an
            // absence-of-digits-in-numeric-character-reference parse error.
            // Flush code points consumed as a character reference. Reconsume
            // in the return state."
            _ => {
                self.log_parse_error(ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference);
                self.flush_code_points_consumed_as_character_reference();
                self.reconsume_in_return_state();
            }
        }
    }

    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    fn handle_hexadecimal_character_reference_state(&mut self, current: Option<char>) {
        match current {
            // "ASCII hex digit - Multiply the character reference code by
            // 16. Add a numeric version of the current input character to
            // the character reference code."
            Some(c) if c.is_ascii_hexdigit() => {
                let digit = c.to_digit(16).unwrap_or(0);
                self.character_reference_code = self
                    .character_reference_code
                    .saturating_mul(16)
                    .saturating_add(digit);
            }
            // "U+003B SEMICOLON - Switch to the numeric character reference
            // end state."
            Some(';') => {
                self.switch_to(TokenizerState::NumericCharacterReferenceEnd);
            }
            // "Anything else - This is a
            // missing-semicolon-after-character-reference parse error.
            // Reconsume in the numeric character reference end state."
            _ => {
                self.log_parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);
                self.reconsume_in(TokenizerState::NumericCharacterReferenceEnd);
            }
        }
    }

    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    fn handle_decimal_character_reference_state(&mut self, current: Option<char>) {
        match current {
            // "ASCII digit - Multiply the character reference code by 10.
            // Add a numeric version of the current input character to the
            // character reference code."
            Some(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).unwrap_or(0);
                self.character_reference_code = self
                    .character_reference_code
                    .saturating_mul(10)
                    .saturating_add(digit);
            }
            // "U+003B SEMICOLON - Switch to the numeric character reference
            // end state."
            Some(';') => {
                self.switch_to(TokenizerState::NumericCharacterReferenceEnd);
            }
            // "Anything else - This is a
            // missing-semicolon-after-character-reference parse error.
            // Reconsume in the numeric character reference end state."
            _ => {
                self.log_parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);
                self.reconsume_in(TokenizerState::NumericCharacterReferenceEnd);
            }
        }
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    ///
    /// Consumes nothing; operates on the accumulated character reference
    /// code. A pending reconsume (from the digit states' "anything else")
    /// survives into the return state.
    fn handle_numeric_character_reference_end_state(&mut self) {
        // "Check the character reference code" - validation, replacement and
        // C1 remapping.
        let resolved = self.check_numeric_character_reference_code();
        // "Set the temporary buffer to the empty string. Append a code point
        // equal to the character reference code to the temporary buffer.
        // Flush code points consumed as a character reference. Switch to the
        // return state."
        self.temporary_buffer.clear();
        self.temporary_buffer.push(resolved);
        self.flush_code_points_consumed_as_character_reference();
        self.switch_to_return_state();
    }
}
