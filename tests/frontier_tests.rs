use ordered_float::OrderedFloat;
use sssp_engine::data_structures::Frontier;

#[test]
fn test_pop_returns_smallest_priority_first() {
    let mut frontier: Frontier<usize, OrderedFloat<f64>> = Frontier::new();
    frontier.push(1, OrderedFloat(10.0));
    frontier.push(2, OrderedFloat(5.0));
    frontier.push(3, OrderedFloat(7.5));

    assert_eq!(frontier.pop(), Some((2, OrderedFloat(5.0))));
    assert_eq!(frontier.pop(), Some((3, OrderedFloat(7.5))));
    assert_eq!(frontier.pop(), Some((1, OrderedFloat(10.0))));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn test_ties_break_on_node_identifier() {
    let mut frontier: Frontier<&str, u32> = Frontier::new();
    frontier.push("delta", 3);
    frontier.push("alpha", 3);
    frontier.push("charlie", 3);

    assert_eq!(frontier.pop(), Some(("alpha", 3)));
    assert_eq!(frontier.pop(), Some(("charlie", 3)));
    assert_eq!(frontier.pop(), Some(("delta", 3)));
}

#[test]
fn test_duplicate_entries_are_kept() {
    // Lazy deletion: an improved distance is pushed as a second entry and the
    // stale one surfaces later.
    let mut frontier: Frontier<usize, u32> = Frontier::new();
    frontier.push(9, 14);
    frontier.push(9, 6);

    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(), Some((9, 6)));
    assert_eq!(frontier.pop(), Some((9, 14)));
}

#[test]
fn test_peek_does_not_remove() {
    let mut frontier: Frontier<usize, u32> = Frontier::new();
    assert!(frontier.is_empty());
    assert_eq!(frontier.peek(), None);

    frontier.push(4, 2);
    frontier.push(8, 1);

    assert_eq!(frontier.peek(), Some((&8, &1)));
    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(), Some((8, 1)));
}

#[test]
fn test_clear_empties_the_frontier() {
    let mut frontier: Frontier<usize, u32> = Frontier::new();
    frontier.push(1, 1);
    frontier.push(2, 2);

    frontier.clear();
    assert!(frontier.is_empty());
    assert_eq!(frontier.pop(), None);
}
