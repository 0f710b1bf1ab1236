use route_pattern_rs::{PatternError, RouteError, RouteMatcher};

fn matcher() -> RouteMatcher {
    RouteMatcher::new(None).expect("default options should construct")
}

#[test]
fn matcher_when_glob_segment_used_then_matches_without_capturing() {
    let matcher = matcher();

    assert!(
        matcher
            .does_route_match("/img/*.png", "/img/logo.png")
            .expect("template should compile")
    );
    assert!(
        !matcher
            .does_route_match("/img/*.png", "/img/logo.svg")
            .expect("template should compile")
    );

    let params = matcher
        .route_params("/img/*.png", "/img/logo.png")
        .expect("template should compile");
    assert!(params.is_empty());
}

#[test]
fn matcher_when_alternation_glob_used_then_each_alternative_matches() {
    let matcher = matcher();

    for path in ["/img/logo.png", "/img/logo.svg"] {
        assert!(
            matcher
                .does_route_match("/img/*.{png,svg}", path)
                .expect("template should compile"),
            "expected {path:?} to match"
        );
    }
    assert!(
        !matcher
            .does_route_match("/img/*.{png,svg}", "/img/logo.gif")
            .expect("template should compile")
    );
}

#[test]
fn matcher_when_terminal_multi_glob_used_then_matches_nested_paths() {
    let matcher = matcher();

    for path in ["/img/c.png", "/img/a/b/c.png", "/img/a/b/c.svg"] {
        assert!(
            matcher
                .does_route_match("/img/**.{png,svg}", path)
                .expect("template should compile"),
            "expected {path:?} to match"
        );
    }
    assert!(
        !matcher
            .does_route_match("/img/**.{png,svg}", "/img/a/b/c.gif")
            .expect("template should compile")
    );
}

#[test]
fn matcher_when_multi_glob_not_terminal_then_returns_error() {
    let matcher = matcher();

    let err = matcher
        .does_route_match("/a/**.png/b", "/a/x.png/b")
        .expect_err("non-terminal multi glob should fail");

    match err {
        RouteError::Pattern(PatternError::MisplacedMultiWildcard { segment }) => {
            assert_eq!(segment, "**.png");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn matcher_when_alternation_is_unterminated_then_returns_error() {
    let matcher = matcher();

    let err = matcher
        .does_route_match("/f/*.{png", "/f/a.png")
        .expect_err("unterminated alternation should fail");

    match err {
        RouteError::Pattern(PatternError::UnterminatedAlternation { glob }) => {
            assert_eq!(glob, "*.{png");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn matcher_when_alternation_is_empty_then_returns_error() {
    let matcher = matcher();

    let err = matcher
        .does_route_match("/f/*.{}", "/f/a.b")
        .expect_err("empty alternation should fail");

    match err {
        RouteError::Pattern(PatternError::EmptyAlternation { glob }) => {
            assert_eq!(glob, "*.{}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
