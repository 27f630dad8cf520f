//! Unit tests for the scope stack.

use super::scope_stack::ScopeStack;

#[test]
fn test_lookup_searches_outwards() {
    let mut scopes = ScopeStack::new();
    scopes.push();
    scopes.define("Global", 1);
    scopes.push();
    scopes.define("Inner", 2);

    assert_eq!(scopes.lookup("Global"), Some(&1));
    assert_eq!(scopes.lookup("Inner"), Some(&2));
    assert_eq!(scopes.lookup("Missing"), None);
}

#[test]
fn test_inner_definition_shadows() {
    let mut scopes = ScopeStack::new();
    scopes.push();
    scopes.define("X", "outer");
    scopes.push();
    scopes.define("X", "inner");

    assert_eq!(scopes.lookup("X"), Some(&"inner"));

    scopes.pop();
    assert_eq!(scopes.lookup("X"), Some(&"outer"));
}

#[test]
fn test_define_overwrites_same_frame() {
    let mut scopes = ScopeStack::new();
    scopes.push();
    scopes.define("X", 1);
    scopes.define("X", 2);

    assert_eq!(scopes.lookup("X"), Some(&2));
    assert_eq!(scopes.get_nth_parent_frame(0).len(), 1);
}

#[test]
fn test_pop_discards_bindings() {
    let mut scopes = ScopeStack::new();
    scopes.push();
    scopes.push();
    scopes.define("Local", true);

    let frame = scopes.pop();
    assert_eq!(frame.get_variable("Local"), Some(&true));
    assert!(!frame.is_empty());
    assert!(scopes.get_nth_parent_frame(0).is_empty());
    assert_eq!(scopes.lookup("Local"), None);
    assert_eq!(scopes.depth(), 1);
}

#[test]
fn test_nth_parent_frame() {
    let mut scopes = ScopeStack::new();
    scopes.push();
    scopes.define("A", 'a');
    scopes.push();
    scopes.define("B", 'b');

    assert!(scopes.get_nth_parent_frame(0).get_variable("B").is_some());
    assert!(scopes.get_nth_parent_frame(1).get_variable("A").is_some());
}

#[test]
#[should_panic(expected = "empty scope stack")]
fn test_pop_empty_panics() {
    let mut scopes: ScopeStack<i32> = ScopeStack::new();
    scopes.pop();
}

#[test]
#[should_panic(expected = "no open scope")]
fn test_define_without_frame_panics() {
    let mut scopes = ScopeStack::new();
    scopes.define("X", 1);
}

#[test]
#[should_panic(expected = "with 1 frames")]
fn test_nth_parent_out_of_range_panics() {
    let mut scopes: ScopeStack<i32> = ScopeStack::new();
    scopes.push();
    scopes.get_nth_parent_frame(1);
}
