use dollar_game::Puzzle;

#[test]
fn genus_bound_marks_guaranteed_boards() {
    let mut puzzle = Puzzle::new();
    let a = puzzle.add_node(1);
    let b = puzzle.add_node(0);
    let c = puzzle.add_node(0);
    puzzle.connect(a, b).unwrap();
    puzzle.connect(b, c).unwrap();
    puzzle.connect(c, a).unwrap();
    assert_eq!(puzzle.genus(), Some(1));
    assert_eq!(puzzle.total(), 1);
    assert!(puzzle.is_guaranteed_solvable());

    puzzle.set_balance(a, 0).unwrap();
    assert!(!puzzle.is_guaranteed_solvable());
}

#[test]
fn disconnected_boards_are_never_guaranteed() {
    let mut puzzle = Puzzle::new();
    puzzle.add_node(5);
    puzzle.add_node(5);
    assert!(!puzzle.is_connected());
    assert!(!puzzle.is_guaranteed_solvable());
}
