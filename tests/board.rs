use fifteen_rs::{count_inversions, is_solvable, Board, Position, GOAL, SIZE};

#[test]
fn goal_constant_matches_ascending_order_with_trailing_empty() {
    let expected: Vec<u8> = (1..16).chain([0]).collect();
    assert_eq!(GOAL.as_slice(), expected.as_slice());
    assert!(Board::goal().is_solved());
}

#[test]
fn final_slide_reaches_the_goal() {
    // Empty at (3,2); clicking (3,3) slides tile 15 left and solves the board.
    let mut b = Board::from_rows([
        [1, 2, 3, 4],
        [5, 6, 7, 8],
        [9, 10, 11, 12],
        [13, 14, 0, 15],
    ]);
    assert_eq!(b.find_empty(), Some(Position::new(3, 2)));
    assert_eq!(b.get(Position::new(3, 3)), 15);
    assert!(!b.is_solved());

    b.swap(Position::new(3, 2), Position::new(3, 3));
    assert!(b.is_solved());
    assert_eq!(b.get(Position::new(3, 2)), 15);
    assert_eq!(b.find_empty(), Some(Position::new(3, 3)));
}

#[test]
fn swap_preserves_the_value_multiset() {
    let mut b = Board::from_rows([
        [1, 2, 3, 4],
        [5, 6, 7, 8],
        [9, 10, 11, 0],
        [13, 14, 15, 12],
    ]);
    b.swap(Position::new(2, 3), Position::new(3, 3));
    let mut sorted = b.cells;
    sorted.sort_unstable();
    let expected: Vec<u8> = (0..16).collect();
    assert_eq!(sorted.as_slice(), expected.as_slice());
}

#[test]
fn width_two_analogue_of_the_parity_formula() {
    // [1,0,3,2]: one inversion (3,2), empty on 1-indexed row 1, sum even.
    assert_eq!(count_inversions(&[1, 0, 3, 2]), 1);
    assert!(is_solvable(&[1, 0, 3, 2], 2));
}

#[test]
fn board_state_serializes_deterministically() {
    let json = serde_json::to_string(&Board::goal()).unwrap();
    assert_eq!(
        json,
        r#"{"cells":[1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,0]}"#
    );
    let back: Board = serde_json::from_str(&json).unwrap();
    assert!(back.is_solved());
}

#[test]
fn every_cell_position_is_in_bounds_and_indexable() {
    for row in 0..SIZE {
        for col in 0..SIZE {
            let p = Position::new(row, col);
            assert!(p.in_bounds());
            assert_eq!(p.index(), row * SIZE + col);
        }
    }
    assert!(!Position::new(SIZE, 0).in_bounds());
}
