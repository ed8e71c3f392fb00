//! Tokenizer cases in the html5lib-tests JSON fixture format.
//!
//! The cases are embedded so the suite is self-contained; the harness in
//! `common` accepts the same shape as the upstream `tokenizer/*.test` files,
//! so pointing it at a checkout of html5lib-tests is a parsing step away.

mod common;

use common::FixtureFile;

const TOKENIZER_CASES: &str = r##"{
    "tests": [
        {
            "description": "Empty input",
            "input": "",
            "output": []
        },
        {
            "description": "Plain text",
            "input": "abc",
            "output": [["Character", "abc"]]
        },
        {
            "description": "Simple DOCTYPE",
            "input": "<!DOCTYPE html>",
            "output": [["DOCTYPE", "html", null, null, true]]
        },
        {
            "description": "DOCTYPE with public identifier",
            "input": "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01//EN\">",
            "output": [["DOCTYPE", "html", "-//W3C//DTD HTML 4.01//EN", null, true]]
        },
        {
            "description": "Start tag with attribute",
            "input": "<h1 class=x>",
            "output": [["StartTag", "h1", {"class": "x"}]]
        },
        {
            "description": "Self-closing start tag",
            "input": "<br/>",
            "output": [["StartTag", "br", {}, true]]
        },
        {
            "description": "End tag",
            "input": "</p>",
            "output": [["EndTag", "p"]]
        },
        {
            "description": "Comment",
            "input": "<!--c-->",
            "output": [["Comment", "c"]]
        },
        {
            "description": "Named references",
            "input": "&lt;&gt;",
            "output": [["Character", "<>"]]
        },
        {
            "description": "Numeric references",
            "input": "&#x41;&#66;",
            "output": [["Character", "AB"]]
        },
        {
            "description": "Null character reference",
            "input": "&#0;",
            "output": [["Character", "�"]],
            "errors": [{"code": "null-character-reference", "line": 1, "col": 4}]
        },
        {
            "description": "Empty end tag",
            "input": "</>",
            "output": [],
            "errors": [{"code": "missing-end-tag-name", "line": 1, "col": 3}]
        },
        {
            "description": "Duplicate attribute",
            "input": "<a b=1 b=2>",
            "output": [["StartTag", "a", {"b": "1"}]],
            "errors": [{"code": "duplicate-attribute", "line": 1, "col": 11}]
        },
        {
            "description": "Double-escaped text",
            "doubleEscaped": true,
            "input": "\\u0041\\u00E9",
            "output": [["Character", "\\u0041\\u00E9"]]
        },
        {
            "description": "Same text under two states",
            "initialStates": ["Data state", "RCDATA state"],
            "input": "ab",
            "output": [["Character", "ab"]]
        },
        {
            "description": "RCDATA end tag",
            "initialStates": ["RCDATA state"],
            "lastStartTag": "title",
            "input": "x</title>",
            "output": [["Character", "x"], ["EndTag", "title"]]
        },
        {
            "description": "RAWTEXT leaves references alone",
            "initialStates": ["RAWTEXT state"],
            "lastStartTag": "style",
            "input": "&amp;</style>",
            "output": [["Character", "&amp;"], ["EndTag", "style"]]
        },
        {
            "description": "Script data end tag",
            "initialStates": ["Script data state"],
            "lastStartTag": "script",
            "input": "x</script>",
            "output": [["Character", "x"], ["EndTag", "script"]]
        },
        {
            "description": "PLAINTEXT swallows everything",
            "initialStates": ["PLAINTEXT state"],
            "input": "a</b>",
            "output": [["Character", "a</b>"]]
        },
        {
            "description": "CDATA section state",
            "initialStates": ["CDATA section state"],
            "input": "x]]>y",
            "output": [["Character", "xy"]]
        }
    ]
}"##;

#[test]
fn html5lib_format_cases() {
    let file: FixtureFile =
        serde_json::from_str(TOKENIZER_CASES).expect("embedded fixture JSON parses");
    assert!(!file.tests.is_empty());
    for case in &file.tests {
        common::run_case(case);
    }
}

#[test]
fn double_escaped_decoding() {
    assert_eq!(common::unescape(r"\u0041\u00E9"), "A\u{00E9}");
    // surrogate pairs combine into a single code point
    assert_eq!(common::unescape(r"\uD83D\uDE00"), "\u{1F600}");
    // untouched text passes through
    assert_eq!(common::unescape("plain"), "plain");
}
