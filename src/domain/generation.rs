use super::{Grid, neighborhood::live_neighbors};

/// Compute the next generation into a fresh buffer.
/// Every cell reads only `grid`, so no update can leak into a neighbor's count.
pub fn next_generation(grid: &Grid) -> Grid {
    let cells = grid
        .iter_cells()
        .map(|(coord, cell)| cell.evolve(live_neighbors(grid, coord)))
        .collect();
    grid.with_cells(cells)
}

/// Replace `grid` with its next generation.
/// Returns `false` when nothing changed (the grid is a still life or empty).
pub fn advance(grid: &mut Grid) -> bool {
    let next = next_generation(grid);
    if next == *grid {
        return false;
    }
    *grid = next;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn grid_with(width: usize, height: usize, alive: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set_status(x, y, Cell::Alive).unwrap();
        }
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(i32, i32)> {
        grid.iter_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(c, _)| (c.x, c.y))
            .collect()
    }

    #[test]
    fn test_empty_stays_empty() {
        let grid = Grid::new(10, 10).unwrap();
        assert_eq!(next_generation(&grid), grid);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        assert_eq!(next_generation(&grid).population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        assert_eq!(next_generation(&grid), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let once = next_generation(&horizontal);
        assert_eq!(alive_cells(&once), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(next_generation(&once), horizontal);
    }

    #[test]
    fn test_update_is_two_phase() {
        // A single-pass in-place update would kill (2, 2) before (1, 2) and (3, 2)
        // are counted, and the blinker would collapse.
        let grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(next_generation(&grid).population(), 3);
    }

    #[test]
    fn test_corner_block_survives_without_wrap() {
        let grid = grid_with(4, 4, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(next_generation(&grid), grid);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut grid = grid_with(8, 8, &glider);
        for _ in 0..4 {
            grid = next_generation(&grid);
        }
        let shifted: Vec<_> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        let mut expected = shifted;
        expected.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(alive_cells(&grid), expected);
    }

    #[test]
    fn test_advance_reports_change() {
        let mut block = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        assert!(!advance(&mut block));

        let mut blinker = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        assert!(advance(&mut blinker));
        assert_eq!(alive_cells(&blinker), vec![(2, 1), (2, 2), (2, 3)]);
    }
}
