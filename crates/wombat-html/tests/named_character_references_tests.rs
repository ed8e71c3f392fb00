//! Integration tests for the named character reference table and matcher.

use wombat_html::tokenizer::named_character_references::{longest_entity_match, lookup_entity};

#[test]
fn predefined_entities() {
    assert_eq!(lookup_entity("amp;"), Some("&"));
    assert_eq!(lookup_entity("lt;"), Some("<"));
    assert_eq!(lookup_entity("gt;"), Some(">"));
    assert_eq!(lookup_entity("quot;"), Some("\""));
    assert_eq!(lookup_entity("apos;"), Some("'"));
}

#[test]
fn legacy_entities_match_without_semicolon() {
    for name in ["amp", "lt", "gt", "quot", "copy", "nbsp", "not", "AElig"] {
        assert!(
            lookup_entity(name).is_some(),
            "legacy entity {name:?} should match without a semicolon"
        );
    }
    // semicolon-only entities must not
    assert_eq!(lookup_entity("euro"), None);
    assert_eq!(lookup_entity("notin"), None);
}

#[test]
fn case_matters() {
    assert_eq!(lookup_entity("Auml;"), Some("\u{00C4}"));
    assert_eq!(lookup_entity("auml;"), Some("\u{00E4}"));
    assert_eq!(lookup_entity("AUML;"), None);
}

#[test]
fn longest_match_is_preferred() {
    assert_eq!(longest_entity_match("notin;x"), Some((6, "\u{2209}")));
    assert_eq!(longest_entity_match("notit;"), Some((3, "\u{00AC}")));
    assert_eq!(longest_entity_match("gtq"), Some((2, ">")));
}

#[test]
fn semicolon_form_beats_the_legacy_form() {
    // "amp;" (4 bytes) wins over "amp" (3 bytes)
    assert_eq!(longest_entity_match("amp;"), Some((4, "&")));
    assert_eq!(longest_entity_match("amp"), Some((3, "&")));
}

#[test]
fn no_identifier_no_match() {
    assert_eq!(longest_entity_match("zzq;"), None);
    assert_eq!(longest_entity_match("#60;"), None);
    assert_eq!(longest_entity_match(""), None);
}

#[test]
fn replacements_can_be_two_code_points() {
    let (len, replacement) = longest_entity_match("fjlig;").expect("fjlig; is in the table");
    assert_eq!(len, 6);
    assert_eq!(replacement.chars().count(), 2);
}
