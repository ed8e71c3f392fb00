//! Named character reference lookup table.
//!
//! [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
//!
//! Maps entity identifiers (without the leading `&`) to their replacement
//! text. The spec's table defines 2,231 identifiers; this table carries every
//! legacy identifier that may appear without its terminating semicolon
//! (those also match mid-text, so they are required for correct matching)
//! together with the commonly used semicolon-terminated ones. The matching
//! policy in [`longest_entity_match`] is complete either way — growing the
//! table is data-only work.
//!
//! NOTE: Some identifiers map to multiple code points (e.g. `fjlig;` -> "fj").

use std::collections::HashMap;
use std::sync::LazyLock;

/// Upper bound on the lookahead the matcher needs. The longest identifier in
/// the spec's table is 32 bytes including its semicolon.
pub(super) const LOOKAHEAD_LIMIT: usize = 64;

/// The named character reference table, keyed by identifier.
///
/// Identifiers listed both with and without a semicolon are the spec's
/// legacy entities; the semicolon-less form matches even when followed by
/// more text (with a `missing-semicolon-after-character-reference` error).
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // The five predefined XML entities.
        ("amp;", "&"), ("amp", "&"),
        ("lt;", "<"), ("lt", "<"),
        ("gt;", ">"), ("gt", ">"),
        ("quot;", "\""), ("quot", "\""),
        ("apos;", "'"),
        // Uppercase legacy forms of the same.
        ("AMP;", "&"), ("AMP", "&"),
        ("LT;", "<"), ("LT", "<"),
        ("GT;", ">"), ("GT", ">"),
        ("QUOT;", "\""), ("QUOT", "\""),
        // Latin-1 punctuation and symbols (all legacy).
        ("nbsp;", "\u{00A0}"), ("nbsp", "\u{00A0}"),
        ("iexcl;", "\u{00A1}"), ("iexcl", "\u{00A1}"),
        ("cent;", "\u{00A2}"), ("cent", "\u{00A2}"),
        ("pound;", "\u{00A3}"), ("pound", "\u{00A3}"),
        ("curren;", "\u{00A4}"), ("curren", "\u{00A4}"),
        ("yen;", "\u{00A5}"), ("yen", "\u{00A5}"),
        ("brvbar;", "\u{00A6}"), ("brvbar", "\u{00A6}"),
        ("sect;", "\u{00A7}"), ("sect", "\u{00A7}"),
        ("uml;", "\u{00A8}"), ("uml", "\u{00A8}"),
        ("copy;", "\u{00A9}"), ("copy", "\u{00A9}"),
        ("COPY;", "\u{00A9}"), ("COPY", "\u{00A9}"),
        ("ordf;", "\u{00AA}"), ("ordf", "\u{00AA}"),
        ("laquo;", "\u{00AB}"), ("laquo", "\u{00AB}"),
        ("not;", "\u{00AC}"), ("not", "\u{00AC}"),
        ("shy;", "\u{00AD}"), ("shy", "\u{00AD}"),
        ("reg;", "\u{00AE}"), ("reg", "\u{00AE}"),
        ("REG;", "\u{00AE}"), ("REG", "\u{00AE}"),
        ("macr;", "\u{00AF}"), ("macr", "\u{00AF}"),
        ("deg;", "\u{00B0}"), ("deg", "\u{00B0}"),
        ("plusmn;", "\u{00B1}"), ("plusmn", "\u{00B1}"),
        ("sup2;", "\u{00B2}"), ("sup2", "\u{00B2}"),
        ("sup3;", "\u{00B3}"), ("sup3", "\u{00B3}"),
        ("acute;", "\u{00B4}"), ("acute", "\u{00B4}"),
        ("micro;", "\u{00B5}"), ("micro", "\u{00B5}"),
        ("para;", "\u{00B6}"), ("para", "\u{00B6}"),
        ("middot;", "\u{00B7}"), ("middot", "\u{00B7}"),
        ("cedil;", "\u{00B8}"), ("cedil", "\u{00B8}"),
        ("sup1;", "\u{00B9}"), ("sup1", "\u{00B9}"),
        ("ordm;", "\u{00BA}"), ("ordm", "\u{00BA}"),
        ("raquo;", "\u{00BB}"), ("raquo", "\u{00BB}"),
        ("frac14;", "\u{00BC}"), ("frac14", "\u{00BC}"),
        ("frac12;", "\u{00BD}"), ("frac12", "\u{00BD}"),
        ("frac34;", "\u{00BE}"), ("frac34", "\u{00BE}"),
        ("iquest;", "\u{00BF}"), ("iquest", "\u{00BF}"),
        ("times;", "\u{00D7}"), ("times", "\u{00D7}"),
        ("divide;", "\u{00F7}"), ("divide", "\u{00F7}"),
        // Latin-1 letters (all legacy).
        ("Agrave;", "\u{00C0}"), ("Agrave", "\u{00C0}"),
        ("Aacute;", "\u{00C1}"), ("Aacute", "\u{00C1}"),
        ("Acirc;", "\u{00C2}"), ("Acirc", "\u{00C2}"),
        ("Atilde;", "\u{00C3}"), ("Atilde", "\u{00C3}"),
        ("Auml;", "\u{00C4}"), ("Auml", "\u{00C4}"),
        ("Aring;", "\u{00C5}"), ("Aring", "\u{00C5}"),
        ("AElig;", "\u{00C6}"), ("AElig", "\u{00C6}"),
        ("Ccedil;", "\u{00C7}"), ("Ccedil", "\u{00C7}"),
        ("Egrave;", "\u{00C8}"), ("Egrave", "\u{00C8}"),
        ("Eacute;", "\u{00C9}"), ("Eacute", "\u{00C9}"),
        ("Ecirc;", "\u{00CA}"), ("Ecirc", "\u{00CA}"),
        ("Euml;", "\u{00CB}"), ("Euml", "\u{00CB}"),
        ("Igrave;", "\u{00CC}"), ("Igrave", "\u{00CC}"),
        ("Iacute;", "\u{00CD}"), ("Iacute", "\u{00CD}"),
        ("Icirc;", "\u{00CE}"), ("Icirc", "\u{00CE}"),
        ("Iuml;", "\u{00CF}"), ("Iuml", "\u{00CF}"),
        ("ETH;", "\u{00D0}"), ("ETH", "\u{00D0}"),
        ("Ntilde;", "\u{00D1}"), ("Ntilde", "\u{00D1}"),
        ("Ograve;", "\u{00D2}"), ("Ograve", "\u{00D2}"),
        ("Oacute;", "\u{00D3}"), ("Oacute", "\u{00D3}"),
        ("Ocirc;", "\u{00D4}"), ("Ocirc", "\u{00D4}"),
        ("Otilde;", "\u{00D5}"), ("Otilde", "\u{00D5}"),
        ("Ouml;", "\u{00D6}"), ("Ouml", "\u{00D6}"),
        ("Oslash;", "\u{00D8}"), ("Oslash", "\u{00D8}"),
        ("Ugrave;", "\u{00D9}"), ("Ugrave", "\u{00D9}"),
        ("Uacute;", "\u{00DA}"), ("Uacute", "\u{00DA}"),
        ("Ucirc;", "\u{00DB}"), ("Ucirc", "\u{00DB}"),
        ("Uuml;", "\u{00DC}"), ("Uuml", "\u{00DC}"),
        ("Yacute;", "\u{00DD}"), ("Yacute", "\u{00DD}"),
        ("THORN;", "\u{00DE}"), ("THORN", "\u{00DE}"),
        ("szlig;", "\u{00DF}"), ("szlig", "\u{00DF}"),
        ("agrave;", "\u{00E0}"), ("agrave", "\u{00E0}"),
        ("aacute;", "\u{00E1}"), ("aacute", "\u{00E1}"),
        ("acirc;", "\u{00E2}"), ("acirc", "\u{00E2}"),
        ("atilde;", "\u{00E3}"), ("atilde", "\u{00E3}"),
        ("auml;", "\u{00E4}"), ("auml", "\u{00E4}"),
        ("aring;", "\u{00E5}"), ("aring", "\u{00E5}"),
        ("aelig;", "\u{00E6}"), ("aelig", "\u{00E6}"),
        ("ccedil;", "\u{00E7}"), ("ccedil", "\u{00E7}"),
        ("egrave;", "\u{00E8}"), ("egrave", "\u{00E8}"),
        ("eacute;", "\u{00E9}"), ("eacute", "\u{00E9}"),
        ("ecirc;", "\u{00EA}"), ("ecirc", "\u{00EA}"),
        ("euml;", "\u{00EB}"), ("euml", "\u{00EB}"),
        ("igrave;", "\u{00EC}"), ("igrave", "\u{00EC}"),
        ("iacute;", "\u{00ED}"), ("iacute", "\u{00ED}"),
        ("icirc;", "\u{00EE}"), ("icirc", "\u{00EE}"),
        ("iuml;", "\u{00EF}"), ("iuml", "\u{00EF}"),
        ("eth;", "\u{00F0}"), ("eth", "\u{00F0}"),
        ("ntilde;", "\u{00F1}"), ("ntilde", "\u{00F1}"),
        ("ograve;", "\u{00F2}"), ("ograve", "\u{00F2}"),
        ("oacute;", "\u{00F3}"), ("oacute", "\u{00F3}"),
        ("ocirc;", "\u{00F4}"), ("ocirc", "\u{00F4}"),
        ("otilde;", "\u{00F5}"), ("otilde", "\u{00F5}"),
        ("ouml;", "\u{00F6}"), ("ouml", "\u{00F6}"),
        ("oslash;", "\u{00F8}"), ("oslash", "\u{00F8}"),
        ("ugrave;", "\u{00F9}"), ("ugrave", "\u{00F9}"),
        ("uacute;", "\u{00FA}"), ("uacute", "\u{00FA}"),
        ("ucirc;", "\u{00FB}"), ("ucirc", "\u{00FB}"),
        ("uuml;", "\u{00FC}"), ("uuml", "\u{00FC}"),
        ("yacute;", "\u{00FD}"), ("yacute", "\u{00FD}"),
        ("thorn;", "\u{00FE}"), ("thorn", "\u{00FE}"),
        ("yuml;", "\u{00FF}"), ("yuml", "\u{00FF}"),
        // Latin Extended-A.
        ("OElig;", "\u{0152}"),
        ("oelig;", "\u{0153}"),
        ("Scaron;", "\u{0160}"),
        ("scaron;", "\u{0161}"),
        ("Yuml;", "\u{0178}"),
        ("fnof;", "\u{0192}"),
        // Spacing modifier letters.
        ("circ;", "\u{02C6}"),
        ("tilde;", "\u{02DC}"),
        // General punctuation.
        ("ensp;", "\u{2002}"),
        ("emsp;", "\u{2003}"),
        ("thinsp;", "\u{2009}"),
        ("zwnj;", "\u{200C}"),
        ("zwj;", "\u{200D}"),
        ("lrm;", "\u{200E}"),
        ("rlm;", "\u{200F}"),
        ("ndash;", "\u{2013}"),
        ("mdash;", "\u{2014}"),
        ("lsquo;", "\u{2018}"),
        ("rsquo;", "\u{2019}"),
        ("sbquo;", "\u{201A}"),
        ("ldquo;", "\u{201C}"),
        ("rdquo;", "\u{201D}"),
        ("bdquo;", "\u{201E}"),
        ("dagger;", "\u{2020}"),
        ("Dagger;", "\u{2021}"),
        ("bull;", "\u{2022}"),
        ("hellip;", "\u{2026}"),
        ("permil;", "\u{2030}"),
        ("prime;", "\u{2032}"),
        ("Prime;", "\u{2033}"),
        ("lsaquo;", "\u{2039}"),
        ("rsaquo;", "\u{203A}"),
        ("oline;", "\u{203E}"),
        ("frasl;", "\u{2044}"),
        ("euro;", "\u{20AC}"),
        ("trade;", "\u{2122}"),
        // Arrows.
        ("larr;", "\u{2190}"),
        ("uarr;", "\u{2191}"),
        ("rarr;", "\u{2192}"),
        ("darr;", "\u{2193}"),
        ("harr;", "\u{2194}"),
        // Mathematical operators.
        ("forall;", "\u{2200}"),
        ("part;", "\u{2202}"),
        ("exist;", "\u{2203}"),
        ("empty;", "\u{2205}"),
        ("nabla;", "\u{2207}"),
        ("isin;", "\u{2208}"),
        ("notin;", "\u{2209}"),
        ("ni;", "\u{220B}"),
        ("prod;", "\u{220F}"),
        ("sum;", "\u{2211}"),
        ("minus;", "\u{2212}"),
        ("lowast;", "\u{2217}"),
        ("radic;", "\u{221A}"),
        ("prop;", "\u{221D}"),
        ("infin;", "\u{221E}"),
        ("ang;", "\u{2220}"),
        ("and;", "\u{2227}"),
        ("or;", "\u{2228}"),
        ("cap;", "\u{2229}"),
        ("cup;", "\u{222A}"),
        ("int;", "\u{222B}"),
        ("there4;", "\u{2234}"),
        ("sim;", "\u{223C}"),
        ("cong;", "\u{2245}"),
        ("asymp;", "\u{2248}"),
        ("ne;", "\u{2260}"),
        ("equiv;", "\u{2261}"),
        ("le;", "\u{2264}"),
        ("ge;", "\u{2265}"),
        ("sub;", "\u{2282}"),
        ("sup;", "\u{2283}"),
        ("nsub;", "\u{2284}"),
        ("sube;", "\u{2286}"),
        ("supe;", "\u{2287}"),
        ("oplus;", "\u{2295}"),
        ("otimes;", "\u{2297}"),
        ("perp;", "\u{22A5}"),
        ("sdot;", "\u{22C5}"),
        ("lceil;", "\u{2308}"),
        ("rceil;", "\u{2309}"),
        ("lfloor;", "\u{230A}"),
        ("rfloor;", "\u{230B}"),
        ("lang;", "\u{27E8}"),
        ("rang;", "\u{27E9}"),
        // Geometric shapes and suits.
        ("loz;", "\u{25CA}"),
        ("spades;", "\u{2660}"),
        ("clubs;", "\u{2663}"),
        ("hearts;", "\u{2665}"),
        ("diams;", "\u{2666}"),
        // Greek.
        ("Alpha;", "\u{0391}"), ("alpha;", "\u{03B1}"),
        ("Beta;", "\u{0392}"), ("beta;", "\u{03B2}"),
        ("Gamma;", "\u{0393}"), ("gamma;", "\u{03B3}"),
        ("Delta;", "\u{0394}"), ("delta;", "\u{03B4}"),
        ("Epsilon;", "\u{0395}"), ("epsilon;", "\u{03B5}"),
        ("Zeta;", "\u{0396}"), ("zeta;", "\u{03B6}"),
        ("Eta;", "\u{0397}"), ("eta;", "\u{03B7}"),
        ("Theta;", "\u{0398}"), ("theta;", "\u{03B8}"),
        ("Iota;", "\u{0399}"), ("iota;", "\u{03B9}"),
        ("Kappa;", "\u{039A}"), ("kappa;", "\u{03BA}"),
        ("Lambda;", "\u{039B}"), ("lambda;", "\u{03BB}"),
        ("Mu;", "\u{039C}"), ("mu;", "\u{03BC}"),
        ("Nu;", "\u{039D}"), ("nu;", "\u{03BD}"),
        ("Xi;", "\u{039E}"), ("xi;", "\u{03BE}"),
        ("Omicron;", "\u{039F}"), ("omicron;", "\u{03BF}"),
        ("Pi;", "\u{03A0}"), ("pi;", "\u{03C0}"),
        ("Rho;", "\u{03A1}"), ("rho;", "\u{03C1}"),
        ("Sigma;", "\u{03A3}"), ("sigma;", "\u{03C3}"),
        ("sigmaf;", "\u{03C2}"),
        ("Tau;", "\u{03A4}"), ("tau;", "\u{03C4}"),
        ("Upsilon;", "\u{03A5}"), ("upsilon;", "\u{03C5}"),
        ("Phi;", "\u{03A6}"), ("phi;", "\u{03C6}"),
        ("Chi;", "\u{03A7}"), ("chi;", "\u{03C7}"),
        ("Psi;", "\u{03A8}"), ("psi;", "\u{03C8}"),
        ("Omega;", "\u{03A9}"), ("omega;", "\u{03C9}"),
        // Multi-code-point replacements.
        ("fjlig;", "fj"),
        ("NotEqualTilde;", "\u{2242}\u{0338}"),
        ("ThickSpace;", "\u{205F}\u{200A}"),
    ])
});

/// Look up a named character reference identifier.
///
/// The `name` should NOT include the leading `&`. Identifiers are matched
/// exactly, including any terminating semicolon.
///
/// # Example
/// ```ignore
/// lookup_entity("amp;")  // Some("&")
/// lookup_entity("amp")   // Some("&") - legacy form
/// lookup_entity("xyz;")  // None
/// ```
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// "Consume the maximum number of characters possible, where the consumed
/// characters are one of the identifiers in the first column of the named
/// character references table."
///
/// `input` is the text immediately following the `&`. Returns the byte
/// length of the longest identifier that prefixes it together with the
/// replacement text, or `None` when no identifier matches at all.
///
/// Identifiers consist of ASCII alphanumerics plus an optional final
/// semicolon, so the candidates are exactly the prefixes of the leading
/// alphanumeric run, longest first, with the run-plus-semicolon form tried
/// ahead of them when a semicolon immediately follows the run.
pub fn longest_entity_match(input: &str) -> Option<(usize, &'static str)> {
    let run_len = input
        .bytes()
        .take_while(u8::is_ascii_alphanumeric)
        .count();
    if run_len == 0 {
        return None;
    }
    if input.as_bytes().get(run_len) == Some(&b';') {
        if let Some(replacement) = lookup_entity(&input[..=run_len]) {
            return Some((run_len + 1, replacement));
        }
    }
    for len in (1..=run_len).rev() {
        if let Some(replacement) = lookup_entity(&input[..len]) {
            return Some((len, replacement));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_common_entities() {
        assert_eq!(lookup_entity("amp;"), Some("&"));
        assert_eq!(lookup_entity("lt;"), Some("<"));
        assert_eq!(lookup_entity("gt;"), Some(">"));
        assert_eq!(lookup_entity("quot;"), Some("\""));
        assert_eq!(lookup_entity("nbsp;"), Some("\u{00A0}"));
    }

    #[test]
    fn lookup_legacy_entities() {
        assert_eq!(lookup_entity("amp"), Some("&"));
        assert_eq!(lookup_entity("AMP"), Some("&"));
        assert_eq!(lookup_entity("copy"), Some("\u{00A9}"));
        // apos has no legacy form
        assert_eq!(lookup_entity("apos"), None);
    }

    #[test]
    fn lookup_unknown_entity() {
        assert_eq!(lookup_entity("notarealentity;"), None);
        assert_eq!(lookup_entity(""), None);
    }

    #[test]
    fn match_prefers_the_semicolon_form() {
        assert_eq!(longest_entity_match("amp;x"), Some((4, "&")));
        assert_eq!(longest_entity_match("not;x"), Some((4, "\u{00AC}")));
    }

    #[test]
    fn match_takes_the_longest_identifier() {
        // "notin;" over the shorter "not"
        assert_eq!(longest_entity_match("notin;"), Some((6, "\u{2209}")));
        // only "not" matches here; "it;" stays in the input
        assert_eq!(longest_entity_match("notit;"), Some((3, "\u{00AC}")));
    }

    #[test]
    fn legacy_match_without_semicolon() {
        assert_eq!(longest_entity_match("amp"), Some((3, "&")));
        assert_eq!(longest_entity_match("ampx"), Some((3, "&")));
    }

    #[test]
    fn no_match_at_all() {
        assert_eq!(longest_entity_match("zqx;"), None);
        assert_eq!(longest_entity_match(";"), None);
        assert_eq!(longest_entity_match(""), None);
    }

    #[test]
    fn multi_code_point_replacement() {
        assert_eq!(longest_entity_match("fjlig;"), Some((6, "fj")));
    }
}
