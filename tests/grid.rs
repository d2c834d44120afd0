use maze_walk::{Cell, Error, Grid, Position, Preset};

#[test]
fn endpoints_are_located() {
    let grid = Preset::Common.grid().unwrap();

    assert_eq!(grid.start_pos(), Some(&Position::new(8, 1)));
    assert_eq!(grid.end_pos(), Some(&Position::new(5, 8)));
    assert_eq!(grid.cell(&Position::new(0, 0)), Some(&Cell::Wall));
    assert_eq!(grid.cell(&Position::new(1, 1)), Some(&Cell::Corridor));
}

#[test]
fn missing_endpoints_are_unknown() {
    let grid = Grid::from_rows(&["X X"]).unwrap();

    assert_eq!(grid.start_pos(), None);
    assert_eq!(grid.end_pos(), None);
}

#[test]
fn rows_keep_their_own_length() {
    let grid = Grid::from_rows(&["S ", "X", "X  E"]).unwrap();

    assert_eq!(grid.row_n(), 3);
    assert_eq!(grid.col_n(1), Some(1));
    assert_eq!(grid.col_n(2), Some(4));
    assert_eq!(grid.cell(&Position::new(1, 1)), None);
}

#[test]
fn unknown_char_is_rejected() {
    let err = Grid::from_rows(&["XS.E"]).unwrap_err();

    assert!(matches!(err, Error::InvalidCharForGrid('.')));
}

#[test]
fn second_start_is_rejected() {
    let err = Grid::from_rows(&["XSX", "XSE"]).unwrap_err();

    assert!(
        matches!(err, Error::MultipleStartPosition(first, second) if first == Position::new(0, 1) && second == Position::new(1, 1))
    );
}

#[test]
fn second_end_is_rejected() {
    let err = Grid::from_rows(&["SEE"]).unwrap_err();

    assert!(matches!(err, Error::MultipleEndPosition(_, _)));
}

#[test]
fn empty_grid_is_rejected() {
    let err = Grid::from_rows::<&str>(&[]).unwrap_err();

    assert!(matches!(err, Error::EmptyGrid));
}

#[test]
fn grid_is_read_from_file() {
    let grid = maze_walk::read_grid("mazes/common.txt").unwrap();

    assert_eq!(grid.row_n(), 10);
    assert_eq!(grid.start_pos(), Some(&Position::new(8, 1)));
}

#[test]
fn carriage_returns_are_dropped() {
    let grid = maze_walk::read_grid("mazes/crlf.txt").unwrap();

    assert_eq!(grid.col_n(1), Some(4));
    assert_eq!(grid.end_pos(), Some(&Position::new(1, 2)));
}

#[test]
fn menu_ids_follow_listing_order() {
    assert_eq!(Preset::from_menu_id(1), Some(Preset::Best));
    assert_eq!(Preset::from_menu_id(4), Some(Preset::Unreachable));
    assert_eq!(Preset::from_menu_id(0), None);
    assert_eq!(Preset::from_menu_id(5), None);
    assert_eq!(Preset::from_menu_id(-1), None);
    assert!(Preset::all_presets()
        .iter()
        .all(|preset| Preset::from_menu_id(preset.menu_id()) == Some(*preset)));
}
