//! Tests for compiling routes into matching regexes

use fancy_regex::Regex;
use repath::{Error, Key, Options, PathRegex, PathSpec, path_to_regex, tokenize, tokens_to_regex};

fn compile(source: &str) -> PathRegex {
    PathRegex::new(source, &Options::default()).unwrap()
}

// =============================================================================
// ROUTE SCENARIOS
// =============================================================================

#[test]
fn test_named_segment() {
    let re = compile("/user/:id");

    let m = re.exec("/user/123").unwrap().unwrap();
    assert_eq!(m.matched, "/user/123");
    assert_eq!(m.get("id"), Some("123"));

    assert!(!re.is_match("/user/123/x"));
    assert!(!re.is_match("/user"));
}

#[test]
fn test_optional_segment() {
    let re = compile("/:test?");

    let m = re.exec("/").unwrap().unwrap();
    assert_eq!(m.get("test"), None);
    assert_eq!(m.params, vec![("test".to_string(), None)]);

    let m = re.exec("/route").unwrap().unwrap();
    assert_eq!(m.get("test"), Some("route"));

    assert!(!re.is_match("//"));
}

#[test]
fn test_repeated_segment() {
    let re = compile("/:test+");
    let m = re.exec("/some/basic/route").unwrap().unwrap();
    assert_eq!(m.get("test"), Some("some/basic/route"));
    assert!(!re.is_match("/"));
}

#[test]
fn test_wildcard_segment() {
    let re = compile("/*");
    let m = re.exec("/foo/bar").unwrap().unwrap();
    assert_eq!(m.get("0"), Some("foo/bar"));
    assert_eq!(re.keys()[0].pattern.as_deref(), Some(".*"));
}

#[test]
fn test_strict_route() {
    let re = PathRegex::new("/test", &Options::default().strict(true)).unwrap();
    assert!(re.is_match("/test"));
    assert!(!re.is_match("/test/"));
}

// =============================================================================
// OPTIONS
// =============================================================================

#[test]
fn test_non_strict_allows_one_trailing_slash() {
    let re = compile("/test");
    assert!(re.is_match("/test"));
    assert!(re.is_match("/test/"));
    assert!(!re.is_match("/test//"));
}

#[test]
fn test_end_false_matches_prefix() {
    let re = PathRegex::new("/test", &Options::default().end(false)).unwrap();

    let m = re.exec("/test/route").unwrap().unwrap();
    assert_eq!(m.matched, "/test");
    assert!(!re.is_match("/tests"));
}

#[test]
fn test_case_sensitivity() {
    let insensitive = compile("/Test/:id");
    assert!(insensitive.is_match("/TEST/1"));

    let sensitive = PathRegex::new("/Test/:id", &Options::default().sensitive(true)).unwrap();
    assert!(sensitive.is_match("/Test/1"));
    assert!(!sensitive.is_match("/TEST/1"));

    assert_eq!(insensitive.as_str(), sensitive.as_str());
}

#[test]
fn test_match_must_start_at_beginning() {
    let re = PathRegex::new("/test", &Options::default().end(false)).unwrap();
    assert!(re.exec("/prefix/test").unwrap().is_none());
}

#[test]
fn test_backslash_in_literal() {
    let trailing = compile(r"/a\");
    assert_eq!(trailing.as_str(), r"^/a\\(?:/(?=$))?$");
    assert!(trailing.is_match(r"/a\"));

    let escaped = compile(r"/a\\b");
    assert!(escaped.is_match(r"/a\b"));
    assert!(!escaped.is_match("/ab"));
}

// =============================================================================
// KEYS
// =============================================================================

#[test]
fn test_keys_follow_group_order() {
    let re = compile("/:a/(\\d+)/:b?/*");
    let names: Vec<&str> = re.keys().iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, ["a", "0", "b", "1"]);

    let m = re.exec("/x/42/y/rest/of/it").unwrap().unwrap();
    assert_eq!(m.get("a"), Some("x"));
    assert_eq!(m.get("0"), Some("42"));
    assert_eq!(m.get("b"), Some("y"));
    assert_eq!(m.get("1"), Some("rest/of/it"));
}

#[test]
fn test_key_describes_param() {
    let re = compile("/file.:ext*");
    assert_eq!(
        re.keys(),
        [Key {
            name: "ext".to_string(),
            prefix: Some(".".to_string()),
            delimiter: Some('.'),
            optional: true,
            repeat: true,
            pattern: Some("[^.]+?".to_string()),
        }]
    );
}

// =============================================================================
// DISPATCH
// =============================================================================

#[test]
fn test_route_list_is_alternation() {
    let spec = PathSpec::from(vec!["/user/:id", "/team/:team/:id"]);
    let re = PathRegex::new(spec, &Options::default()).unwrap();

    assert!(re.as_str().starts_with("(?:^/user/"));
    assert_eq!(re.keys().len(), 3);

    let m = re.exec("/team/core/7").unwrap().unwrap();
    assert_eq!(m.groups, vec![None, Some("core".to_string()), Some("7".to_string())]);
    assert!(!re.is_match("/other"));
}

#[test]
fn test_nested_route_list() {
    let spec = PathSpec::List(vec![PathSpec::from("/a"), PathSpec::from(vec!["/b", "/c"])]);
    let re = PathRegex::new(spec, &Options::default()).unwrap();
    assert!(re.is_match("/a"));
    assert!(re.is_match("/c"));
    assert!(!re.is_match("/d"));
}

#[test]
fn test_precompiled_regex_passes_through() {
    let regex = Regex::new(r"^/(\w+)/(?:x|y)/(\d+)$").unwrap();
    let re = PathRegex::new(regex, &Options::default().sensitive(true)).unwrap();

    assert_eq!(re.as_str(), r"^/(\w+)/(?:x|y)/(\d+)$");
    assert_eq!(re.keys(), [Key::positional(0), Key::positional(1)]);

    let m = re.exec("/abc/x/12").unwrap().unwrap();
    assert_eq!(m.get("0"), Some("abc"));
    assert_eq!(m.get("1"), Some("12"));
}

#[test]
fn test_precompiled_regex_ignores_escaped_parens() {
    let regex = Regex::new(r"^/\(literal\)/(\d+)$").unwrap();
    let re = path_to_regex(regex, &Options::default()).unwrap();
    assert_eq!(re.keys(), [Key::positional(0)]);
}

#[test]
fn test_into_parts() {
    let (regex, keys) = compile("/user/:id").into_parts();
    assert!(regex.is_match("/USER/1").unwrap());
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].name, "id");
}

#[test]
fn test_path_spec_as_path() {
    assert_eq!(PathSpec::from("/a").as_path(), Some("/a"));
    assert_eq!(PathSpec::from(vec!["/a"]).as_path(), None);
    assert_eq!(PathSpec::from(Regex::new("^/a$").unwrap()).as_path(), None);
}

#[test]
fn test_tokens_to_regex_matches_path_to_regex() {
    let options = Options::default().strict(true);
    let from_tokens = tokens_to_regex(&tokenize("/:a.:b?"), &options).unwrap();
    let from_source = path_to_regex("/:a.:b?", &options).unwrap();
    assert_eq!(from_tokens.as_str(), from_source.as_str());
    assert_eq!(from_tokens.keys(), from_source.keys());
}

#[test]
fn test_invalid_capture_reports_regex_error() {
    let err = PathRegex::new("/:id([a-)", &Options::default()).unwrap_err();
    assert!(matches!(err, Error::Regex { .. }));
}
