//! Tests for splitting route sources into tokens

use repath::{Param, Token, tokenize};

#[test]
fn test_literal_and_param() {
    assert_eq!(tokenize("/user/:id"), vec![Token::from("/user"), Param::new("id", "/").into()]);
}

#[test]
fn test_empty_source_has_no_tokens() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_repeat_with_custom_pattern() {
    let tokens = tokenize(r"/:test(\d+)+");
    assert_eq!(
        tokens,
        vec![Token::from(Param::new("test", "/").with_repeat(true).with_pattern(r"\d+"))]
    );
}

#[test]
fn test_param_without_prefix() {
    let tokens = tokenize("/user:id");
    let param = tokens[1].as_param().unwrap();
    assert_eq!(tokens[0].as_literal(), Some("/user"));
    assert_eq!(param.prefix, "");
    assert_eq!(param.delimiter, '/');
    assert_eq!(param.pattern, "[^/]+?");
}

#[test]
fn test_unnamed_and_wildcard_share_counter() {
    let tokens = tokenize("/(a|b)/*/:name/(c)");
    let names: Vec<&str> =
        tokens.iter().filter_map(Token::as_param).map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["0", "1", "name", "2"]);
}

#[test]
fn test_escaped_specials_stay_literal() {
    assert_eq!(tokenize(r"/\(foo\)/\*"), vec![Token::from("/(foo)/*")]);
}

#[test]
fn test_literal_runs_between_params() {
    let tokens = tokenize("/a/:b/c/:d.json");
    let literals: Vec<&str> = tokens.iter().filter_map(Token::as_literal).collect();
    assert_eq!(literals, ["/a", "/c", ".json"]);
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_tokens_serialize_untagged() {
    let json = serde_json::to_value(tokenize("/a/:b?")).unwrap();
    assert_eq!(json[0], "/a");
    assert_eq!(json[1]["name"], "b");
    assert_eq!(json[1]["optional"], true);
    assert_eq!(json[1]["delimiter"], "/");
}
