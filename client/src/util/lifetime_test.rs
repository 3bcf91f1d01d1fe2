use super::*;

#[test]
fn new_lifetime_is_alive() {
    assert!(ScreenLifetime::new().is_alive());
}

#[test]
fn end_is_visible_through_clones() {
    let lifetime = ScreenLifetime::new();
    let task_copy = lifetime.clone();

    lifetime.end();
    assert!(!task_copy.is_alive());

    lifetime.end();
    assert!(!lifetime.is_alive());
}

#[test]
fn separate_lifetimes_are_independent() {
    let first = ScreenLifetime::new();
    let second = ScreenLifetime::default();
    first.end();
    assert!(second.is_alive());
}
