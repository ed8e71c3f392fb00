//! Tokenizer parse errors.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! "The error handling for parse errors is well-defined... This
//! specification defines the parsing rules for HTML documents, whether they
//! are syntactically correct or not."
//!
//! Parse errors never abort tokenization. They are queued alongside tokens
//! and surfaced to the driver in detection order, each carrying the source
//! position at which it was noticed.

use core::fmt;

use strum_macros::Display;

/// The closed set of tokenizer parse errors.
///
/// One variant per named error in
/// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors).
/// The `Display` impl renders the spec's error code, e.g.
/// `ParseErrorKind::EofInTag` prints as `eof-in-tag` — the same codes the
/// html5lib conformance fixtures use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ParseErrorKind {
    /// [abrupt-closing-of-empty-comment](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-abrupt-closing-of-empty-comment)
    AbruptClosingOfEmptyComment,
    /// [abrupt-doctype-public-identifier](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-abrupt-doctype-public-identifier)
    AbruptDoctypePublicIdentifier,
    /// [abrupt-doctype-system-identifier](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-abrupt-doctype-system-identifier)
    AbruptDoctypeSystemIdentifier,
    /// [absence-of-digits-in-numeric-character-reference](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-absence-of-digits-in-numeric-character-reference)
    AbsenceOfDigitsInNumericCharacterReference,
    /// [cdata-in-html-content](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-cdata-in-html-content)
    CdataInHtmlContent,
    /// [character-reference-outside-unicode-range](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-character-reference-outside-unicode-range)
    CharacterReferenceOutsideUnicodeRange,
    /// [control-character-reference](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-control-character-reference)
    ControlCharacterReference,
    /// [duplicate-attribute](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-duplicate-attribute)
    DuplicateAttribute,
    /// [end-tag-with-attributes](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-end-tag-with-attributes)
    EndTagWithAttributes,
    /// [end-tag-with-trailing-solidus](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-end-tag-with-trailing-solidus)
    EndTagWithTrailingSolidus,
    /// [eof-before-tag-name](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-eof-before-tag-name)
    EofBeforeTagName,
    /// [eof-in-cdata](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-eof-in-cdata)
    EofInCdata,
    /// [eof-in-comment](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-eof-in-comment)
    EofInComment,
    /// [eof-in-doctype](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-eof-in-doctype)
    EofInDoctype,
    /// [eof-in-script-html-comment-like-text](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-eof-in-script-html-comment-like-text)
    EofInScriptHtmlCommentLikeText,
    /// [eof-in-tag](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-eof-in-tag)
    EofInTag,
    /// [incorrectly-closed-comment](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-incorrectly-closed-comment)
    IncorrectlyClosedComment,
    /// [incorrectly-opened-comment](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-incorrectly-opened-comment)
    IncorrectlyOpenedComment,
    /// [invalid-character-sequence-after-doctype-name](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-invalid-character-sequence-after-doctype-name)
    InvalidCharacterSequenceAfterDoctypeName,
    /// [invalid-first-character-of-tag-name](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-invalid-first-character-of-tag-name)
    InvalidFirstCharacterOfTagName,
    /// [missing-attribute-value](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-attribute-value)
    MissingAttributeValue,
    /// [missing-doctype-name](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-doctype-name)
    MissingDoctypeName,
    /// [missing-doctype-public-identifier](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-doctype-public-identifier)
    MissingDoctypePublicIdentifier,
    /// [missing-doctype-system-identifier](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-doctype-system-identifier)
    MissingDoctypeSystemIdentifier,
    /// [missing-end-tag-name](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-end-tag-name)
    MissingEndTagName,
    /// [missing-quote-before-doctype-public-identifier](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-quote-before-doctype-public-identifier)
    MissingQuoteBeforeDoctypePublicIdentifier,
    /// [missing-quote-before-doctype-system-identifier](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-quote-before-doctype-system-identifier)
    MissingQuoteBeforeDoctypeSystemIdentifier,
    /// [missing-semicolon-after-character-reference](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-semicolon-after-character-reference)
    MissingSemicolonAfterCharacterReference,
    /// [missing-whitespace-after-doctype-public-keyword](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-whitespace-after-doctype-public-keyword)
    MissingWhitespaceAfterDoctypePublicKeyword,
    /// [missing-whitespace-after-doctype-system-keyword](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-whitespace-after-doctype-system-keyword)
    MissingWhitespaceAfterDoctypeSystemKeyword,
    /// [missing-whitespace-before-doctype-name](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-whitespace-before-doctype-name)
    MissingWhitespaceBeforeDoctypeName,
    /// [missing-whitespace-between-attributes](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-whitespace-between-attributes)
    MissingWhitespaceBetweenAttributes,
    /// [missing-whitespace-between-doctype-public-and-system-identifiers](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-missing-whitespace-between-doctype-public-and-system-identifiers)
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    /// [nested-comment](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-nested-comment)
    NestedComment,
    /// [noncharacter-character-reference](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-noncharacter-character-reference)
    NoncharacterCharacterReference,
    /// [non-void-html-element-start-tag-with-trailing-solidus](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-non-void-html-element-start-tag-with-trailing-solidus)
    ///
    /// Raised by the tree construction stage, not the state machine; part of
    /// the taxonomy so consumers can report every spec error through one type.
    NonVoidHtmlElementStartTagWithTrailingSolidus,
    /// [null-character-reference](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-null-character-reference)
    NullCharacterReference,
    /// [surrogate-character-reference](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-surrogate-character-reference)
    SurrogateCharacterReference,
    /// [unexpected-character-after-doctype-system-identifier](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-unexpected-character-after-doctype-system-identifier)
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    /// [unexpected-character-in-attribute-name](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-unexpected-character-in-attribute-name)
    UnexpectedCharacterInAttributeName,
    /// [unexpected-character-in-unquoted-attribute-value](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-unexpected-character-in-unquoted-attribute-value)
    UnexpectedCharacterInUnquotedAttributeValue,
    /// [unexpected-equals-sign-before-attribute-name](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-unexpected-equals-sign-before-attribute-name)
    UnexpectedEqualsSignBeforeAttributeName,
    /// [unexpected-null-character](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-unexpected-null-character)
    UnexpectedNullCharacter,
    /// [unexpected-question-mark-instead-of-tag-name](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-unexpected-question-mark-instead-of-tag-name)
    UnexpectedQuestionMarkInsteadOfTagName,
    /// [unexpected-solidus-in-tag](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-unexpected-solidus-in-tag)
    UnexpectedSolidusInTag,
    /// [unknown-named-character-reference](https://html.spec.whatwg.org/multipage/parsing.html#parse-error-unknown-named-character-reference)
    UnknownNamedCharacterReference,
}

/// A parse error with the source position at which it was detected.
///
/// Lines are 1-based; columns are 0-based and advance on every consumed
/// character. Positions are advisory when comparing against conformance
/// fixtures (the fixtures themselves are inconsistent about them); the kind
/// alone identifies the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// Which named error occurred.
    pub kind: ParseErrorKind,
    /// 1-based line of the character that triggered the error.
    pub line: usize,
    /// 0-based column of the character that triggered the error.
    pub column: usize,
}

impl ParseError {
    /// The spec's error code for this error, e.g. `"eof-in-tag"`.
    #[must_use]
    pub fn code(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.kind, self.line, self.column)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_render_as_spec_codes() {
        assert_eq!(
            ParseErrorKind::AbruptClosingOfEmptyComment.to_string(),
            "abrupt-closing-of-empty-comment"
        );
        assert_eq!(ParseErrorKind::EofInTag.to_string(), "eof-in-tag");
        assert_eq!(
            ParseErrorKind::CdataInHtmlContent.to_string(),
            "cdata-in-html-content"
        );
        assert_eq!(
            ParseErrorKind::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers.to_string(),
            "missing-whitespace-between-doctype-public-and-system-identifiers"
        );
        assert_eq!(
            ParseErrorKind::NonVoidHtmlElementStartTagWithTrailingSolidus.to_string(),
            "non-void-html-element-start-tag-with-trailing-solidus"
        );
    }

    #[test]
    fn display_includes_position() {
        let error = ParseError {
            kind: ParseErrorKind::UnexpectedNullCharacter,
            line: 3,
            column: 14,
        };
        assert_eq!(error.to_string(), "unexpected-null-character at 3:14");
    }
}
