use super::*;

#[test]
fn first_observation_is_initial() {
    let mut b = RouteBridge::new();
    assert_eq!(
        b.observe("/"),
        Some(PathChanged {
            path: "/".to_string(),
            initial: true
        })
    );
    assert_eq!(b.observe("/"), None);
    assert_eq!(b.last_path(), Some("/"));
}

#[test]
fn changes_are_keyed_on_normalized_path() {
    let mut b = RouteBridge::new();
    b.observe("/about");
    assert_eq!(b.observe("/about/"), None);
    let ev = b.observe(" /contact ").unwrap();
    assert_eq!(ev.path, "/contact");
    assert!(!ev.initial);
    assert!(b.observe("/about").is_some());
}

#[test]
fn recorded_path_suppresses_the_next_observation() {
    let mut b = RouteBridge::new();
    b.record("/gallery/");
    assert_eq!(b.last_path(), Some("/gallery"));
    assert_eq!(b.observe("/gallery"), None);
    assert!(!b.observe("/").unwrap().initial);
}

#[test]
fn normalize_keeps_root() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("///"), "/");
    assert_eq!(normalize_path("/gallery/"), "/gallery");
}
