use super::*;

// =============================================================
// Position
// =============================================================

#[test]
fn position_from_index_is_row_major() {
    assert_eq!(Position::from_index(0), Some(Position { row: 0, col: 0 }));
    assert_eq!(Position::from_index(2), Some(Position { row: 0, col: 2 }));
    assert_eq!(Position::from_index(3), Some(Position { row: 1, col: 0 }));
    assert_eq!(Position::from_index(8), Some(Position { row: 2, col: 2 }));
}

#[test]
fn position_from_index_rejects_off_board() {
    assert_eq!(Position::from_index(9), None);
    assert_eq!(Position::from_index(usize::MAX), None);
}

#[test]
fn position_index_round_trips() {
    for index in 0..TILE_COUNT {
        let pos = Position::from_index(index).unwrap();
        assert_eq!(pos.index(), index);
    }
}

#[test]
fn position_distance_is_manhattan() {
    let a = Position { row: 0, col: 0 };
    let b = Position { row: 2, col: 1 };
    assert_eq!(a.distance(b), 3);
    assert_eq!(b.distance(a), 3);
    assert_eq!(a.distance(a), 0);
}

// =============================================================
// Adjacency
// =============================================================

#[test]
fn adjacent_horizontal_and_vertical() {
    assert!(is_adjacent(0, 1));
    assert!(is_adjacent(1, 0));
    assert!(is_adjacent(4, 7));
    assert!(is_adjacent(7, 8));
}

#[test]
fn not_adjacent_to_self() {
    for index in 0..TILE_COUNT {
        assert!(!is_adjacent(index, index));
    }
}

#[test]
fn not_adjacent_diagonally() {
    assert!(!is_adjacent(0, 4));
    assert!(!is_adjacent(4, 8));
    assert!(!is_adjacent(2, 4));
}

#[test]
fn row_wrap_is_not_adjacent() {
    // Index 2 ends row 0 and index 3 starts row 1.
    assert!(!is_adjacent(2, 3));
    assert!(!is_adjacent(5, 6));
}

#[test]
fn off_board_is_never_adjacent() {
    assert!(!is_adjacent(8, 9));
    assert!(!is_adjacent(9, 8));
    assert!(!is_adjacent(11, 12));
}

#[test]
fn neighbors_counts() {
    assert_eq!(neighbors(0), vec![1, 3]);
    assert_eq!(neighbors(4), vec![1, 3, 5, 7]);
    assert_eq!(neighbors(8), vec![5, 7]);
    assert_eq!(neighbors(1), vec![0, 2, 4]);
}

// =============================================================
// BackgroundOffset
// =============================================================

#[test]
fn offset_for_first_cell_is_origin() {
    assert_eq!(BackgroundOffset::for_index(0), BackgroundOffset { x_pct: 0, y_pct: 0 });
}

#[test]
fn offset_uses_column_for_x_and_row_for_y() {
    assert_eq!(BackgroundOffset::for_index(1), BackgroundOffset { x_pct: -100, y_pct: 0 });
    assert_eq!(BackgroundOffset::for_index(3), BackgroundOffset { x_pct: 0, y_pct: -100 });
    assert_eq!(BackgroundOffset::for_index(5), BackgroundOffset { x_pct: -200, y_pct: -100 });
    assert_eq!(BackgroundOffset::for_index(8), BackgroundOffset { x_pct: -200, y_pct: -200 });
}
