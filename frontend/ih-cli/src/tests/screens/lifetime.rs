use crate::screens::ScreenLifetime;

#[test]
fn test_generation_is_current_until_end() {
    let lifetime = ScreenLifetime::new();
    let generation = lifetime.current();

    assert!(lifetime.is_current(generation));

    lifetime.end();

    assert!(!lifetime.is_current(generation));
    assert!(lifetime.is_current(lifetime.current()));
}

#[test]
fn test_clones_share_the_counter() {
    let lifetime = ScreenLifetime::new();
    let handle = lifetime.clone();
    let generation = lifetime.current();

    handle.end();

    assert!(!lifetime.is_current(generation));
}
