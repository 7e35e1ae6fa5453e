//! Tests for the resolver.

#[cfg(not(test))]
compile_error!("`tests` module should be enable only when `cfg(tests)`");

use super::*;

fn iri(s: &str) -> Iri {
    Iri::parse(s).expect("test case should be valid")
}

/// Test cases.
///
/// Fragments of the references are never kept, so the expected outputs of RFC 3986
/// examples with fragments (`#s`, `g#s`, ...) have theirs removed.
// [(base, [(input, output)])]
const TEST_CASES: &[(&str, &[(&str, &str)])] = &[
    // RFC 3986, section 5.2.4.
    ("scheme://x/a/b/c/./../../", &[("g", "scheme://x/a/g")]),
    ("scheme://x/a/b/c/./../", &[("../g", "scheme://x/a/g")]),
    ("scheme://x/a/b/c/./", &[("../../g", "scheme://x/a/g")]),
    ("scheme://x/a/b/c/", &[("./../../g", "scheme://x/a/g")]),
    ("scheme://x/a/b/", &[("c/./../../g", "scheme://x/a/g")]),
    ("scheme://x/a/", &[("b/c/./../../g", "scheme://x/a/g")]),
    ("scheme://x/", &[("a/b/c/./../../g", "scheme://x/a/g")]),
    ("scheme:mid/content=5/../", &[("6", "scheme:mid/6")]),
    ("scheme:mid/content=5/", &[("../6", "scheme:mid/6")]),
    ("scheme:mid/", &[("content=5/../6", "scheme:mid/6")]),
    // RFC 3986, section 5.4.1.
    (
        "http://a/b/c/d;p?q",
        &[
            ("g:h", "g:h"),
            ("g", "http://a/b/c/g"),
            ("./g", "http://a/b/c/g"),
            ("g/", "http://a/b/c/g/"),
            ("/g", "http://a/g"),
            ("//g", "http://g"),
            ("?y", "http://a/b/c/d;p?y"),
            ("g?y", "http://a/b/c/g?y"),
            // Fragment removed.
            ("#s", "http://a/b/c/d;p?q"),
            ("g#s", "http://a/b/c/g"),
            ("g?y#s", "http://a/b/c/g?y"),
            (";x", "http://a/b/c/;x"),
            ("g;x", "http://a/b/c/g;x"),
            ("g;x?y#s", "http://a/b/c/g;x?y"),
            ("", "http://a/b/c/d;p?q"),
            (".", "http://a/b/c/"),
            ("./", "http://a/b/c/"),
            ("..", "http://a/b/"),
            ("../", "http://a/b/"),
            ("../g", "http://a/b/g"),
            ("../..", "http://a/"),
            ("../../", "http://a/"),
            ("../../g", "http://a/g"),
        ],
    ),
    // RFC 3986, section 5.4.2.
    (
        "http://a/b/c/d;p?q",
        &[
            ("../../../g", "http://a/g"),
            ("../../../../g", "http://a/g"),
            ("/./g", "http://a/g"),
            ("/../g", "http://a/g"),
            ("g.", "http://a/b/c/g."),
            (".g", "http://a/b/c/.g"),
            ("g..", "http://a/b/c/g.."),
            ("..g", "http://a/b/c/..g"),
            ("./../g", "http://a/b/g"),
            ("./g/.", "http://a/b/c/g/"),
            ("g/./h", "http://a/b/c/g/h"),
            ("g/../h", "http://a/b/c/h"),
            ("g;x=1/./y", "http://a/b/c/g;x=1/y"),
            ("g;x=1/../y", "http://a/b/c/y"),
            ("g?y/./x", "http://a/b/c/g?y/./x"),
            ("g?y/../x", "http://a/b/c/g?y/../x"),
            ("g#s/./x", "http://a/b/c/g"),
            ("g#s/../x", "http://a/b/c/g"),
            ("http:g", "http:g"),
        ],
    ),
    // Authorities.
    (
        "https://user@example.com:8443/a/b?q",
        &[
            ("c", "https://user@example.com:8443/a/c"),
            ("//other.example/x/../y", "https://other.example/y"),
            ("//u@other.example:80", "https://u@other.example:80"),
            ("?", "https://user@example.com:8443/a/b?q"),
        ],
    ),
    // Bases without authorities nor slashes.
    (
        "scheme:",
        &[("g", "scheme:/g"), ("?q", "scheme:?q"), ("/g", "scheme:/g")],
    ),
    ("scheme:a", &[("g", "scheme:/g"), ("../g", "scheme:/g")]),
    ("urn:isbn:0451450523", &[("#frag", "urn:isbn:0451450523")]),
    // Paths starting with `//` keep an empty authority in front of them.
    ("foo:/x", &[("/..//g", "foo:////g"), ("..//g", "foo:////g")]),
    ("http://:80/a/b", &[("c", "http://:80/a/c")]),
];

#[test]
fn resolve_table() {
    for (base, pairs) in TEST_CASES {
        let base = iri(base);
        for (input, expected) in *pairs {
            let resolved = iri(input)
                .resolve(&base)
                .expect("base should have a scheme");
            assert_eq!(
                resolved.href(),
                *expected,
                "base = {:?}, input = {:?}",
                base.href(),
                input
            );
        }
    }
}

#[test]
fn fragment_is_always_cleared() {
    let base = iri("http://a/b#base");
    for reference in ["#s", "g#s", "//h#s", "x:y#s", ""] {
        let resolved = iri(reference).resolve(&base).unwrap();
        assert_eq!(resolved.fragment(), None, "reference = {:?}", reference);
    }
}

#[test]
fn relative_base() {
    for base in ["", "/a", "//host/a", "a?q#f"] {
        let err = iri("g").resolve(&iri(base)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBase, "base = {:?}", base);
    }
}

#[test]
fn double_slash_path_is_kept() {
    let resolved = iri("/..//g").resolve(&iri("foo:/x")).unwrap();
    assert_eq!(resolved.host(), None);
    assert_eq!(resolved.path(), Some("//g"));
    assert_eq!(iri(&resolved.href()), resolved);
}

#[test]
fn free_function() {
    let base = iri("http://a/b/c/d;p?q");
    assert_eq!(resolve(&iri("../g"), &base), iri("g").resolve(&iri("http://a/b/")));
}

#[test]
fn result_is_normalized() {
    let base = iri("HTTP://A/b/c");
    let resolved = iri("%7e/./x").resolve(&base).unwrap();
    assert_eq!(resolved.scheme(), Some("http"));
    assert_eq!(resolved.host(), Some("a"));
    assert_eq!(resolved.path(), Some("/b/~/x"));
}
