//! Integration tests for the HTML tokenizer.

use wombat_html::{ParseError, ParseErrorKind, Token, Tokenizer, TokenizerState};

/// Tokenize a string from the data state, collecting tokens (end-of-file
/// included) and parse errors.
fn tokenize(input: &str) -> (Vec<Token>, Vec<ParseError>) {
    tokenize_with(input, None, None)
}

/// Tokenize with an initial state override and a seeded last start tag.
fn tokenize_with(
    input: &str,
    state: Option<TokenizerState>,
    last_start_tag: Option<&str>,
) -> (Vec<Token>, Vec<ParseError>) {
    let mut tokenizer = Tokenizer::new(input);
    if let Some(state) = state {
        tokenizer.set_state(state);
    }
    tokenizer.set_last_start_tag(last_start_tag);
    drain(&mut tokenizer)
}

fn drain(tokenizer: &mut Tokenizer) -> (Vec<Token>, Vec<ParseError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    loop {
        match tokenizer.next_token() {
            Ok(token) => {
                let done = token.is_eof();
                tokens.push(token);
                if done {
                    break;
                }
            }
            Err(error) => errors.push(error),
        }
    }
    (tokens, errors)
}

fn error_kinds(errors: &[ParseError]) -> Vec<ParseErrorKind> {
    errors.iter().map(|error| error.kind).collect()
}

/// Concatenate the data of all character tokens.
fn character_data(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Character { data } => Some(*data),
            _ => None,
        })
        .collect()
}

#[test]
fn plain_text() {
    let (tokens, errors) = tokenize("Hello");
    assert_eq!(tokens.len(), 6); // 5 chars + EOF
    assert!(matches!(tokens[0], Token::Character { data: 'H' }));
    assert!(matches!(tokens[4], Token::Character { data: 'o' }));
    assert!(matches!(tokens[5], Token::EndOfFile));
    assert!(errors.is_empty());
}

#[test]
fn start_tag_with_text_and_end_tag() {
    let (tokens, errors) = tokenize("<h1>Hi</h1>");
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "h1");
            assert!(!self_closing);
            assert!(attributes.is_empty());
        }
        other => panic!("expected StartTag, got {other:?}"),
    }
    assert!(matches!(tokens[1], Token::Character { data: 'H' }));
    assert!(matches!(tokens[2], Token::Character { data: 'i' }));
    match &tokens[3] {
        Token::EndTag { name, .. } => assert_eq!(name, "h1"),
        other => panic!("expected EndTag, got {other:?}"),
    }
    assert!(matches!(tokens[4], Token::EndOfFile));
}

#[test]
fn self_closing_tag() {
    let (tokens, errors) = tokenize("<br/>");
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::StartTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        other => panic!("expected self-closing StartTag, got {other:?}"),
    }
}

#[test]
fn unquoted_and_empty_attributes() {
    let (tokens, errors) = tokenize("<a b=c d>");
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 2);
            assert_eq!(attributes[0].name, "b");
            assert_eq!(attributes[0].value, "c");
            assert_eq!(attributes[1].name, "d");
            assert_eq!(attributes[1].value, "");
        }
        other => panic!("expected StartTag, got {other:?}"),
    }
}

#[test]
fn duplicate_attribute_keeps_first_value() {
    let (tokens, errors) = tokenize("<a b=c b=d>");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::DuplicateAttribute]);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].name, "b");
            assert_eq!(attributes[0].value, "c");
        }
        other => panic!("expected StartTag, got {other:?}"),
    }
}

#[test]
fn tag_and_attribute_names_are_lowercased() {
    let (tokens, errors) = tokenize(r#"<DIV Class="Foo">"#);
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::StartTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "div");
            assert_eq!(attributes[0].name, "class");
            // values keep their case
            assert_eq!(attributes[0].value, "Foo");
        }
        other => panic!("expected StartTag, got {other:?}"),
    }
}

#[test]
fn quoted_attributes() {
    let (tokens, errors) = tokenize(r#"<input type="text" id='name' disabled>"#);
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 3);
            assert_eq!((&*attributes[0].name, &*attributes[0].value), ("type", "text"));
            assert_eq!((&*attributes[1].name, &*attributes[1].value), ("id", "name"));
            assert_eq!((&*attributes[2].name, &*attributes[2].value), ("disabled", ""));
        }
        other => panic!("expected StartTag, got {other:?}"),
    }
}

#[test]
fn missing_attribute_value() {
    let (tokens, errors) = tokenize("<a b=>");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::MissingAttributeValue]);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].name, "b");
            assert_eq!(attributes[0].value, "");
        }
        other => panic!("expected StartTag, got {other:?}"),
    }
}

#[test]
fn equals_sign_before_attribute_name() {
    let (tokens, errors) = tokenize("<a =b>");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::UnexpectedEqualsSignBeforeAttributeName]
    );
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].name, "=b");
        }
        other => panic!("expected StartTag, got {other:?}"),
    }
}

#[test]
fn end_tag_with_attributes_is_reported() {
    let (tokens, errors) = tokenize("</a b=c>");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::EndTagWithAttributes]);
    match &tokens[0] {
        Token::EndTag { name, .. } => assert_eq!(name, "a"),
        other => panic!("expected EndTag, got {other:?}"),
    }
}

#[test]
fn end_tag_with_trailing_solidus_is_reported() {
    let (tokens, errors) = tokenize("</a/>");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::EndTagWithTrailingSolidus]
    );
    match &tokens[0] {
        Token::EndTag { name, .. } => assert_eq!(name, "a"),
        other => panic!("expected EndTag, got {other:?}"),
    }
}

#[test]
fn missing_end_tag_name() {
    let (tokens, errors) = tokenize("</>");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::MissingEndTagName]);
    assert_eq!(tokens, vec![Token::EndOfFile]);
}

#[test]
fn question_mark_becomes_bogus_comment() {
    let (tokens, errors) = tokenize("<?x>");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::UnexpectedQuestionMarkInsteadOfTagName]
    );
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, "?x"),
        other => panic!("expected Comment, got {other:?}"),
    }
}

#[test]
fn eof_in_tag_drops_the_partial_tag() {
    let (tokens, errors) = tokenize("<a b");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::EofInTag]);
    assert_eq!(tokens, vec![Token::EndOfFile]);
}

// -----------------------------------------------------------------------------
// Boundary cases
// -----------------------------------------------------------------------------

#[test]
fn empty_input_yields_only_eof() {
    let (tokens, errors) = tokenize("");
    assert_eq!(tokens, vec![Token::EndOfFile]);
    assert!(errors.is_empty());
}

#[test]
fn lone_less_than_sign() {
    let (tokens, errors) = tokenize("<");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::EofBeforeTagName]);
    assert_eq!(
        tokens,
        vec![Token::Character { data: '<' }, Token::EndOfFile]
    );
}

#[test]
fn unclosed_comment_open() {
    let (tokens, errors) = tokenize("<!--");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::EofInComment]);
    assert_eq!(
        tokens,
        vec![
            Token::Comment {
                data: String::new()
            },
            Token::EndOfFile
        ]
    );
}

#[test]
fn eof_token_is_idempotent() {
    let mut tokenizer = Tokenizer::new("x");
    assert!(matches!(
        tokenizer.next_token(),
        Ok(Token::Character { data: 'x' })
    ));
    assert!(matches!(tokenizer.next_token(), Ok(Token::EndOfFile)));
    for _ in 0..3 {
        assert!(matches!(tokenizer.next_token(), Ok(Token::EndOfFile)));
    }
}

#[test]
fn same_input_produces_identical_streams() {
    let input = r#"<!DOCTYPE html><p class="a">x &amp y</p><!-- done -->"#;
    let first = tokenize(input);
    let second = tokenize(input);
    assert_eq!(first, second);
}

// -----------------------------------------------------------------------------
// Comments
// -----------------------------------------------------------------------------

#[test]
fn comment_with_inner_dashes() {
    let (tokens, errors) = tokenize("<!-- a -- b -->");
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, " a -- b "),
        other => panic!("expected Comment, got {other:?}"),
    }
}

#[test]
fn empty_comment() {
    let (tokens, errors) = tokenize("<!---->");
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, ""),
        other => panic!("expected Comment, got {other:?}"),
    }
}

#[test]
fn abruptly_closed_comment() {
    let (tokens, errors) = tokenize("<!-->");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::AbruptClosingOfEmptyComment]
    );
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, ""),
        other => panic!("expected Comment, got {other:?}"),
    }
}

#[test]
fn incorrectly_closed_comment() {
    let (tokens, errors) = tokenize("<!--x--!>");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::IncorrectlyClosedComment]
    );
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, "x"),
        other => panic!("expected Comment, got {other:?}"),
    }
}

#[test]
fn nested_comment_open_is_reported() {
    let (tokens, errors) = tokenize("<!--<!-- -->");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::NestedComment]);
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, "<!-- "),
        other => panic!("expected Comment, got {other:?}"),
    }
}

#[test]
fn incorrectly_opened_comment_becomes_bogus() {
    let (tokens, errors) = tokenize("<!x>");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::IncorrectlyOpenedComment]
    );
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, "x"),
        other => panic!("expected Comment, got {other:?}"),
    }
}

// -----------------------------------------------------------------------------
// DOCTYPE
// -----------------------------------------------------------------------------

#[test]
fn simple_doctype() {
    let (tokens, errors) = tokenize("<!DOCTYPE html>");
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert_eq!(*public_identifier, None);
            assert_eq!(*system_identifier, None);
            assert!(!force_quirks);
        }
        other => panic!("expected DOCTYPE, got {other:?}"),
    }
}

#[test]
fn doctype_with_public_and_system_identifiers() {
    let (tokens, errors) = tokenize(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#,
    );
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert_eq!(public_identifier.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
            assert_eq!(
                system_identifier.as_deref(),
                Some("http://www.w3.org/TR/html4/strict.dtd")
            );
            assert!(!force_quirks);
        }
        other => panic!("expected DOCTYPE, got {other:?}"),
    }
}

#[test]
fn doctype_empty_system_identifier_is_not_missing() {
    let (tokens, errors) = tokenize(r#"<!DOCTYPE html SYSTEM "">"#);
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::Doctype {
            public_identifier,
            system_identifier,
            ..
        } => {
            assert_eq!(*public_identifier, None);
            // empty string, distinct from missing
            assert_eq!(system_identifier.as_deref(), Some(""));
        }
        other => panic!("expected DOCTYPE, got {other:?}"),
    }
}

#[test]
fn doctype_without_name_forces_quirks() {
    let (tokens, errors) = tokenize("<!DOCTYPE>");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::MissingDoctypeName]);
    match &tokens[0] {
        Token::Doctype {
            name, force_quirks, ..
        } => {
            assert_eq!(*name, None);
            assert!(force_quirks);
        }
        other => panic!("expected DOCTYPE, got {other:?}"),
    }
}

#[test]
fn doctype_keyword_is_case_insensitive() {
    let (tokens, errors) = tokenize("<!doctype HTML>");
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::Doctype { name, .. } => assert_eq!(name.as_deref(), Some("html")),
        other => panic!("expected DOCTYPE, got {other:?}"),
    }
}

#[test]
fn bogus_doctype_after_invalid_keyword() {
    let (tokens, errors) = tokenize("<!DOCTYPE html PUBLISH>");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName]
    );
    match &tokens[0] {
        Token::Doctype {
            name, force_quirks, ..
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert!(force_quirks);
        }
        other => panic!("expected DOCTYPE, got {other:?}"),
    }
}

// -----------------------------------------------------------------------------
// Character references
// -----------------------------------------------------------------------------

#[test]
fn named_reference_with_semicolon() {
    let (tokens, errors) = tokenize("&amp;");
    assert!(errors.is_empty());
    assert_eq!(
        tokens,
        vec![Token::Character { data: '&' }, Token::EndOfFile]
    );
}

#[test]
fn named_reference_without_semicolon() {
    let (tokens, errors) = tokenize("&amp");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::MissingSemicolonAfterCharacterReference]
    );
    assert_eq!(
        tokens,
        vec![Token::Character { data: '&' }, Token::EndOfFile]
    );
}

#[test]
fn longest_reference_wins() {
    let (tokens, errors) = tokenize("&notin;");
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "\u{2209}");

    // only "not" matches; the rest re-enters the input
    let (tokens, errors) = tokenize("&notit;");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::MissingSemicolonAfterCharacterReference]
    );
    assert_eq!(character_data(&tokens), "\u{00AC}it;");
}

#[test]
fn unknown_reference_flushes_and_reports_on_semicolon() {
    let (tokens, errors) = tokenize("&xyz;");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::UnknownNamedCharacterReference]
    );
    assert_eq!(character_data(&tokens), "&xyz;");
}

#[test]
fn bare_ampersand_passes_through() {
    let (tokens, errors) = tokenize("a & b");
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "a & b");
}

#[test]
fn reference_in_attribute_value() {
    let (tokens, errors) = tokenize(r#"<a title="&amp;">"#);
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::StartTag { attributes, .. } => assert_eq!(attributes[0].value, "&"),
        other => panic!("expected StartTag, got {other:?}"),
    }
}

#[test]
fn attribute_reference_historical_exception() {
    // "&copy=" inside an attribute stays literal and raises no error
    let (tokens, errors) = tokenize(r#"<a href="?a=b&copy=c">"#);
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].value, "?a=b&copy=c");
        }
        other => panic!("expected StartTag, got {other:?}"),
    }
}

#[test]
fn attribute_reference_without_semicolon_still_resolves() {
    let (tokens, errors) = tokenize(r#"<a title="&copy!">"#);
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::MissingSemicolonAfterCharacterReference]
    );
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].value, "\u{00A9}!");
        }
        other => panic!("expected StartTag, got {other:?}"),
    }
}

#[test]
fn decimal_and_hexadecimal_references() {
    let (tokens, errors) = tokenize("&#60;&#x3C;&#X3c;");
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "<<<");
}

#[test]
fn numeric_reference_missing_semicolon() {
    let (tokens, errors) = tokenize("&#65 ");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::MissingSemicolonAfterCharacterReference]
    );
    assert_eq!(character_data(&tokens), "A ");
}

#[test]
fn numeric_reference_validation_ladder() {
    let (tokens, errors) = tokenize("&#0;");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::NullCharacterReference]);
    assert_eq!(character_data(&tokens), "\u{FFFD}");

    let (tokens, errors) = tokenize("&#x110000;");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::CharacterReferenceOutsideUnicodeRange]
    );
    assert_eq!(character_data(&tokens), "\u{FFFD}");

    let (tokens, errors) = tokenize("&#xD800;");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::SurrogateCharacterReference]
    );
    assert_eq!(character_data(&tokens), "\u{FFFD}");

    let (tokens, errors) = tokenize("&#xFDD0;");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::NoncharacterCharacterReference]
    );
    assert_eq!(character_data(&tokens), "\u{FDD0}");

    // C1 control: reported, then remapped per the translation table
    let (tokens, errors) = tokenize("&#x80;");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::ControlCharacterReference]
    );
    assert_eq!(character_data(&tokens), "\u{20AC}");
}

#[test]
fn numeric_reference_without_digits() {
    let (tokens, errors) = tokenize("&#z");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference]
    );
    assert_eq!(character_data(&tokens), "&#z");
}

// -----------------------------------------------------------------------------
// State overrides: RCDATA / RAWTEXT / script data / PLAINTEXT / CDATA
// -----------------------------------------------------------------------------

#[test]
fn rcdata_appropriate_end_tag() {
    let (tokens, errors) = tokenize_with(
        "foo</title>",
        Some(TokenizerState::RCDATA),
        Some("title"),
    );
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "foo");
    match &tokens[3] {
        Token::EndTag { name, .. } => assert_eq!(name, "title"),
        other => panic!("expected EndTag, got {other:?}"),
    }
}

#[test]
fn rcdata_inappropriate_end_tag_is_text() {
    let (tokens, errors) = tokenize_with("</b>", Some(TokenizerState::RCDATA), Some("title"));
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "</b>");
    assert!(tokens.iter().all(|t| !matches!(t, Token::EndTag { .. })));
}

#[test]
fn rcdata_resolves_character_references() {
    let (tokens, errors) = tokenize_with("a&amp;b", Some(TokenizerState::RCDATA), None);
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "a&b");
}

#[test]
fn rawtext_ignores_character_references() {
    let (tokens, errors) = tokenize_with(
        "a&amp;b</style>",
        Some(TokenizerState::RAWTEXT),
        Some("style"),
    );
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "a&amp;b");
}

#[test]
fn plaintext_never_ends() {
    let (tokens, errors) = tokenize_with("a<b></b>", Some(TokenizerState::PLAINTEXT), None);
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "a<b></b>");
}

#[test]
fn script_data_escaped_comment() {
    let (tokens, errors) = tokenize_with(
        "a<!--b--></script>",
        Some(TokenizerState::ScriptData),
        Some("script"),
    );
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "a<!--b-->");
    match tokens.iter().rev().nth(1) {
        Some(Token::EndTag { name, .. }) => assert_eq!(name, "script"),
        other => panic!("expected EndTag before EOF, got {other:?}"),
    }
}

#[test]
fn script_data_double_escape() {
    let input = "<!--<script>x</script>--></script>";
    let (tokens, errors) =
        tokenize_with(input, Some(TokenizerState::ScriptData), Some("script"));
    assert!(errors.is_empty());
    // everything up to the real end tag is character data
    assert_eq!(character_data(&tokens), "<!--<script>x</script>-->");
    match tokens.iter().rev().nth(1) {
        Some(Token::EndTag { name, .. }) => assert_eq!(name, "script"),
        other => panic!("expected EndTag before EOF, got {other:?}"),
    }
}

#[test]
fn eof_in_script_comment_like_text() {
    let (tokens, errors) = tokenize_with("<!--x", Some(TokenizerState::ScriptData), None);
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::EofInScriptHtmlCommentLikeText]
    );
    assert_eq!(character_data(&tokens), "<!--x");
}

#[test]
fn cdata_in_foreign_content() {
    let mut tokenizer = Tokenizer::new("<![CDATA[x]]y]]>z");
    tokenizer.set_in_foreign_content(true);
    let (tokens, errors) = drain(&mut tokenizer);
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "x]]yz");
}

#[test]
fn cdata_in_html_content_is_a_bogus_comment() {
    let (tokens, errors) = tokenize("<![CDATA[x]]>");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::CdataInHtmlContent]);
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, "[CDATA[x]]"),
        other => panic!("expected Comment, got {other:?}"),
    }
}

#[test]
fn eof_in_cdata() {
    let mut tokenizer = Tokenizer::new("<![CDATA[x");
    tokenizer.set_in_foreign_content(true);
    let (tokens, errors) = drain(&mut tokenizer);
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::EofInCdata]);
    assert_eq!(character_data(&tokens), "x");
}

#[test]
fn cdata_section_initial_state() {
    let (tokens, errors) = tokenize_with("x]]>y", Some(TokenizerState::CDATASection), None);
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "xy");
}

// -----------------------------------------------------------------------------
// Positions and misc
// -----------------------------------------------------------------------------

#[test]
fn error_positions_track_lines_and_columns() {
    let (_, errors) = tokenize("ab\ncd\u{0000}");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::UnexpectedNullCharacter]);
    assert_eq!(errors[0].line, 2);
    assert_eq!(errors[0].column, 3);
}

#[test]
fn null_in_data_state_passes_through() {
    let (tokens, errors) = tokenize("a\u{0000}b");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::UnexpectedNullCharacter]);
    assert_eq!(character_data(&tokens), "a\u{0000}b");
}

#[test]
fn null_in_tag_name_is_replaced() {
    let (tokens, errors) = tokenize("<a\u{0000}b>");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::UnexpectedNullCharacter]);
    match &tokens[0] {
        Token::StartTag { name, .. } => assert_eq!(name, "a\u{FFFD}b"),
        other => panic!("expected StartTag, got {other:?}"),
    }
}

#[test]
fn non_ascii_text_passes_through_whole() {
    let (tokens, errors) = tokenize("é<p>ß</p>");
    assert!(errors.is_empty());
    assert_eq!(character_data(&tokens), "éß");
}

#[test]
fn invalid_first_tag_character() {
    let (tokens, errors) = tokenize("<3>");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::InvalidFirstCharacterOfTagName]
    );
    assert_eq!(character_data(&tokens), "<3>");
}

#[test]
fn unexpected_solidus_in_tag() {
    let (tokens, errors) = tokenize("<a / b>");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::UnexpectedSolidusInTag]);
    match &tokens[0] {
        Token::StartTag {
            self_closing,
            attributes,
            ..
        } => {
            assert!(!self_closing);
            assert_eq!(attributes[0].name, "b");
        }
        other => panic!("expected StartTag, got {other:?}"),
    }
}

#[test]
fn concatenation_at_a_tag_boundary() {
    let first = "x<p>y</p>";
    let second = "<p>z";
    let (mut first_tokens, first_errors) = tokenize(first);
    let (second_tokens, second_errors) = tokenize(second);
    let (combined_tokens, combined_errors) = tokenize(&format!("{first}{second}"));

    assert!(first_errors.is_empty() && second_errors.is_empty());
    assert!(combined_errors.is_empty());

    // the combined stream is the first stream (minus its EOF) followed by
    // the second stream
    assert!(matches!(first_tokens.pop(), Some(Token::EndOfFile)));
    let expected: Vec<Token> = first_tokens.into_iter().chain(second_tokens).collect();
    assert_eq!(combined_tokens, expected);
}
