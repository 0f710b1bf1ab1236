use route_pattern_rs::{PatternError, RouteError, RouteMatcher, compile_route};

fn matcher() -> RouteMatcher {
    RouteMatcher::new(None).expect("default options should construct")
}

#[test]
fn matcher_when_single_wildcard_used_then_matches_one_segment_uncaptured() {
    let matcher = matcher();

    assert!(
        matcher
            .does_route_match("/files/*/meta", "/files/report/meta")
            .expect("template should compile")
    );
    assert!(
        !matcher
            .does_route_match("/files/*/meta", "/files/a/b/meta")
            .expect("template should compile")
    );

    let params = matcher
        .route_params("/files/*/meta", "/files/report/meta")
        .expect("template should compile");
    assert!(params.is_empty());
}

#[test]
fn matcher_when_multi_wildcard_terminal_then_matches_nested_paths() {
    let matcher = matcher();

    assert!(
        matcher
            .does_route_match("/assets/**", "/assets/a/b/c.js")
            .expect("template should compile")
    );
    assert!(
        matcher
            .does_route_match("/assets/**", "/assets/x")
            .expect("template should compile")
    );
}

#[test]
fn matcher_when_multi_wildcard_has_no_content_then_does_not_match() {
    let matcher = matcher();

    assert!(
        !matcher
            .does_route_match("/assets/**", "/assets")
            .expect("template should compile")
    );
}

#[test]
fn matcher_when_multi_wildcard_not_terminal_then_returns_error() {
    let matcher = matcher();

    let err = matcher
        .does_route_match("/a/**/b", "/a/x/b")
        .expect_err("non-terminal multi wildcard should fail");

    match err {
        RouteError::Pattern(PatternError::MisplacedMultiWildcard { segment }) => {
            assert_eq!(segment, "**");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_route_when_multi_wildcard_present_then_flag_is_set() {
    let compiled = compile_route("/assets/**").expect("template should compile");
    assert!(compiled.has_multi_wildcard());

    let compiled = compile_route("/assets/*").expect("template should compile");
    assert!(!compiled.has_multi_wildcard());
}
