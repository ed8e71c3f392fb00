//! Shared support for the html5lib-tests tokenizer fixture format.
//!
//! Each test case carries `description`, `input`, `output` (the expected
//! token list in the suite's array encoding), `errors` (objects with `code`,
//! `line`, `col`), optionally `initialStates`, `lastStartTag`, and
//! `doubleEscaped` (strings contain `\uXXXX` escapes that must be decoded
//! before use).

use serde::Deserialize;
use serde_json::{json, Value};
use wombat_html::{Token, Tokenizer, TokenizerState};

#[derive(Debug, Deserialize)]
pub struct FixtureFile {
    pub tests: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub description: String,
    pub input: String,
    pub output: Vec<Value>,
    #[serde(default)]
    pub errors: Vec<FixtureError>,
    #[serde(default)]
    pub initial_states: Vec<String>,
    #[serde(default)]
    pub double_escaped: bool,
    #[serde(default)]
    pub last_start_tag: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureError {
    pub code: String,
    #[serde(default)]
    pub line: u64,
    #[serde(default)]
    pub col: u64,
}

/// Map the suite's state names onto tokenizer states.
pub fn parse_initial_state(name: &str) -> TokenizerState {
    match name {
        "Data state" => TokenizerState::Data,
        "PLAINTEXT state" => TokenizerState::PLAINTEXT,
        "RCDATA state" => TokenizerState::RCDATA,
        "RAWTEXT state" => TokenizerState::RAWTEXT,
        "Script data state" => TokenizerState::ScriptData,
        "CDATA section state" => TokenizerState::CDATASection,
        other => panic!("unknown initial state in fixture: {other:?}"),
    }
}

/// Decode the suite's `doubleEscaped` encoding: `\uXXXX` sequences,
/// including surrogate pairs, become the code points they name.
pub fn unescape(escaped: &str) -> String {
    fn take_code_unit(chars: &mut std::iter::Peekable<std::str::Chars>) -> u32 {
        let mut unit = 0u32;
        for _ in 0..4 {
            let digit = chars
                .next()
                .and_then(|c| c.to_digit(16))
                .expect("malformed \\uXXXX escape in fixture");
            unit = unit * 16 + digit;
        }
        unit
    }

    let mut out = String::new();
    let mut chars = escaped.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' || chars.peek() != Some(&'u') {
            out.push(c);
            continue;
        }
        chars.next(); // 'u'
        let unit = take_code_unit(&mut chars);
        let code = if (0xD800..0xDC00).contains(&unit) {
            // high surrogate; pair it with the following \uXXXX
            let mut lookahead = chars.clone();
            if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
                chars.next();
                chars.next();
                let low = take_code_unit(&mut chars);
                0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
            } else {
                unit
            }
        } else {
            unit
        };
        out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
    }
    out
}

/// Apply [`unescape`] to every string inside an expected-output value.
pub fn unescape_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(unescape(s)),
        Value::Array(items) => Value::Array(items.iter().map(unescape_value).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (unescape(key), unescape_value(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Serialize an emitted token stream into the suite's array encoding,
/// coalescing adjacent character tokens and dropping the end-of-file token.
pub fn serialize_tokens(tokens: &[Token]) -> Vec<Value> {
    let mut out = Vec::new();
    let mut text = String::new();
    for token in tokens {
        if let Token::Character { data } = token {
            text.push(*data);
            continue;
        }
        if !text.is_empty() {
            out.push(json!(["Character", std::mem::take(&mut text)]));
        }
        match token {
            Token::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            } => {
                // the suite's final field is "correctness": the inverse of
                // force-quirks
                out.push(json!([
                    "DOCTYPE",
                    name,
                    public_identifier,
                    system_identifier,
                    !force_quirks
                ]));
            }
            Token::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                let attrs: serde_json::Map<String, Value> = attributes
                    .iter()
                    .map(|attr| (attr.name.clone(), Value::String(attr.value.clone())))
                    .collect();
                if *self_closing {
                    out.push(json!(["StartTag", name, attrs, true]));
                } else {
                    out.push(json!(["StartTag", name, attrs]));
                }
            }
            Token::EndTag { name, .. } => {
                out.push(json!(["EndTag", name]));
            }
            Token::Comment { data } => {
                out.push(json!(["Comment", data]));
            }
            Token::Character { .. } | Token::EndOfFile => {}
        }
    }
    if !text.is_empty() {
        out.push(json!(["Character", text]));
    }
    out
}

/// Run one fixture case under each of its initial states, comparing tokens
/// exactly and errors by code (positions in the suite are advisory).
pub fn run_case(case: &TestCase) {
    let input = if case.double_escaped {
        unescape(&case.input)
    } else {
        case.input.clone()
    };
    let expected_output: Vec<Value> = if case.double_escaped {
        case.output.iter().map(unescape_value).collect()
    } else {
        case.output.clone()
    };
    let mut expected_codes: Vec<&str> = case.errors.iter().map(|e| e.code.as_str()).collect();
    expected_codes.sort_unstable();

    let states = if case.initial_states.is_empty() {
        vec!["Data state".to_string()]
    } else {
        case.initial_states.clone()
    };

    for state_name in &states {
        let mut tokenizer = Tokenizer::new(&input);
        tokenizer.set_state(parse_initial_state(state_name));
        tokenizer.set_last_start_tag(case.last_start_tag.as_deref());

        let mut tokens = Vec::new();
        let mut codes = Vec::new();
        loop {
            match tokenizer.next_token() {
                Ok(Token::EndOfFile) => break,
                Ok(token) => tokens.push(token),
                Err(error) => codes.push(error.kind.to_string()),
            }
        }

        assert_eq!(
            serialize_tokens(&tokens),
            expected_output,
            "token mismatch for {:?} in {state_name}",
            case.description
        );
        let mut codes: Vec<&str> = codes.iter().map(String::as_str).collect();
        codes.sort_unstable();
        assert_eq!(
            codes, expected_codes,
            "error mismatch for {:?} in {state_name}",
            case.description
        );
    }
}
