use algo_drills::{
    problems::grid_paths::{all_paths, count_paths, GridPaths, Move},
    AlgoError,
};

fn binomial(n: u128, k: u128) -> u128 {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[test]
fn open_grids_follow_binomials() {
    for rows in 1..8usize {
        for cols in 1..8usize {
            let grid = vec![vec![0u8; cols]; rows];
            let want = binomial((rows + cols - 2) as u128, (rows - 1) as u128);
            assert_eq!(count_paths(&grid), want, "{rows}x{cols}");
        }
    }
}

#[test]
fn walls_at_endpoints_block_everything() {
    let start_wall = [[1u8, 0], [0, 0]];
    let end_wall = [[0u8, 0], [0, 1]];
    assert_eq!(count_paths(&start_wall), 0);
    assert_eq!(count_paths(&end_wall), 0);
    assert!(all_paths(&end_wall).is_empty());
}

#[test]
fn full_walls_separate_start_and_end() {
    let blocking_row = [[0u8, 0, 0], [1, 1, 1], [0, 0, 0]];
    let blocking_col = [[0u8, 1, 0], [0, 1, 0], [0, 1, 0]];
    for grid in [blocking_row, blocking_col] {
        assert_eq!(count_paths(&grid), 0);
        assert!(all_paths(&grid).is_empty());
    }
}

#[test]
fn empty_and_single_cell() {
    let empty: [[u8; 0]; 0] = [];
    assert_eq!(count_paths(&empty), 0);
    let no_cols: [[u8; 0]; 2] = [[], []];
    assert_eq!(count_paths(&no_cols), 0);
    assert_eq!(count_paths(&[[0u8]]), 1);
    assert_eq!(count_paths(&[[1u8]]), 0);
}

#[test]
fn enumeration_matches_count() {
    let grid = [
        [0u8, 0, 0, 0],
        [0, 1, 0, 0],
        [0, 0, 0, 1],
        [1, 0, 0, 0],
    ];
    let paths = all_paths(&grid);
    assert_eq!(paths.len() as u128, count_paths(&grid));
    for path in &paths {
        assert_eq!(path.cells().first(), Some(&(0, 0)));
        assert_eq!(path.cells().last(), Some(&(3, 3)));
        let moves = path.moves();
        assert_eq!(moves.iter().filter(|&&m| m == Move::Down).count(), 3);
        assert_eq!(moves.iter().filter(|&&m| m == Move::Right).count(), 3);
        assert!(path.cells().iter().all(|&(r, c)| grid[r][c] == 0));
    }
}

#[test]
fn vec_rows_are_accepted() {
    let grid: Vec<Vec<u8>> = vec![vec![0, 0, 1], vec![0, 0, 1], vec![1, 0, 0]];
    assert_eq!(count_paths(&grid), 2);
}

#[test]
fn validating_constructor() {
    let ragged: Vec<Vec<u8>> = vec![vec![0, 0], vec![0]];
    assert_eq!(
        GridPaths::try_new(&ragged).map(|g| g.count()),
        Err(AlgoError::RaggedGrid {
            row: 1,
            expected: 2,
            found: 1
        })
    );
    let bad_cell = [[0u8, 2]];
    assert_eq!(
        GridPaths::try_new(&bad_cell).map(|g| g.count()),
        Err(AlgoError::InvalidCell {
            row: 0,
            col: 1,
            value: 2
        })
    );
    let ok = [[0u8, 0], [0, 0]];
    assert_eq!(GridPaths::try_new(&ok).map(|g| g.count()), Ok(2));
}

#[test]
fn large_open_grid_saturates() {
    // C(2*150-2, 149) far exceeds u128::MAX
    let grid = vec![vec![0u8; 150]; 150];
    assert_eq!(count_paths(&grid), u128::MAX);
}
