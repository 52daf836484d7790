use super::*;

#[test]
fn test_untouched_counter_is_zero() {
    let counters = Counters::new();
    assert_eq!(counters.get(names::DRAW_CALLS), 0);
    assert!(counters.is_empty());
}

#[test]
fn test_increment_accumulates() {
    let mut counters = Counters::new();
    counters.increment(names::MESHES, 1);
    counters.increment(names::MESHES, 1);
    counters.increment(names::SHADERS, 1);

    assert_eq!(counters.get(names::MESHES), 2);
    assert_eq!(counters.get(names::SHADERS), 1);
    assert_eq!(counters.len(), 2);
}

#[test]
fn test_set_overwrites() {
    let mut counters = Counters::new();
    counters.set(names::DRAW_CALLS, 12);
    counters.set(names::DRAW_CALLS, 3);
    assert_eq!(counters.get(names::DRAW_CALLS), 3);
}

#[test]
fn test_iter_and_clear() {
    let mut counters = Counters::new();
    counters.set(names::RENDERABLES, 4);
    counters.set(names::DYNAMIC_RENDERABLES, 2);

    let mut collected: Vec<(String, i64)> = counters.iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    collected.sort();
    assert_eq!(collected, vec![
        ("Renderables".to_string(), 4),
        ("Renderables (Dynamic)".to_string(), 2),
    ]);

    counters.clear();
    assert!(counters.is_empty());
}
