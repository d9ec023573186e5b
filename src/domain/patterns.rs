use log::{info, warn};

use super::{Cell, Coord, Grid};
use crate::config::{ALIVE_MARKER, PATTERN_HEADER_LINES};

/// A rectangular block of cells parsed from plain text, stamped onto a grid
/// centered and then discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: Option<String>,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

/// Outcome of stamping a pattern onto a grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StampReport {
    /// Cells set alive
    pub placed: usize,
    /// Cells dropped because they fell outside the grid
    pub skipped: usize,
}

impl Pattern {
    /// Parse the plain-text format: the first two lines are a header, every
    /// following line is a row where `O` is alive and anything else is dead.
    ///
    /// Never fails. Ragged rows are allowed; the width is the longest row.
    pub fn parse(text: &str) -> Self {
        let name = text
            .lines()
            .next()
            .and_then(|line| line.strip_prefix("!Name:"))
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty());

        let rows: Vec<&str> = text.lines().skip(PATTERN_HEADER_LINES).collect();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == ALIVE_MARKER)
                    .map(move |(x, _)| (x, y))
            })
            .collect();

        Self {
            name,
            width,
            height: rows.len(),
            cells,
        }
    }

    /// Display name, falling back for files without a `!Name:` header
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled")
    }

    /// Top-left grid position that centers this pattern on `grid`
    pub fn centered_origin(&self, grid: &Grid) -> Coord {
        // Grid dimensions always fit in i32; pattern extents are clamped
        let half = |n: usize| i32::try_from(n / 2).unwrap_or(i32::MAX);
        let start_x = half(grid.width()).saturating_sub(half(self.width));
        let start_y = half(grid.height()).saturating_sub(half(self.height));
        Coord::new(start_x, start_y)
    }

    /// Stamp the alive cells onto `grid`, centered.
    /// Cells outside the pattern's alive set are left untouched, and cells
    /// landing off the grid are skipped.
    pub fn stamp(&self, grid: &mut Grid) -> StampReport {
        let origin = self.centered_origin(grid);
        let mut report = StampReport::default();

        for &(dx, dy) in &self.cells {
            let target = i32::try_from(dx)
                .ok()
                .zip(i32::try_from(dy).ok())
                .and_then(|(dx, dy)| origin.checked_offset(dx, dy));
            match target.map(|t| grid.set_status(t.x, t.y, Cell::Alive)) {
                Some(Ok(())) => report.placed += 1,
                _ => report.skipped += 1,
            }
        }

        if report.skipped > 0 {
            warn!(
                "pattern '{}' ({}x{}) cropped by grid edge: {} cells skipped",
                self.name(),
                self.width,
                self.height,
                report.skipped
            );
        }
        info!(
            "stamped pattern '{}' at {origin}: {} cells",
            self.name(),
            report.placed
        );
        report
    }
}

/// Parse `text` and stamp it centered onto `grid`.
/// Does not clear the grid first.
pub fn load_pattern(grid: &mut Grid, text: &str) -> StampReport {
    Pattern::parse(text).stamp(grid)
}

/// Classic Game of Life patterns, in the same text format as pattern files
pub mod presets {
    use super::Pattern;

    const BLOCK: &str = "!Name: Block\n!Still life\nOO\nOO\n";

    const BLINKER: &str = "!Name: Blinker\n!Oscillator (period 2)\nOOO\n";

    const TOAD: &str = "!Name: Toad\n!Oscillator (period 2)\n.OOO\nOOO.\n";

    const BEACON: &str = "!Name: Beacon\n!Oscillator (period 2)\nOO..\nO...\n...O\n..OO\n";

    const GLIDER: &str = "!Name: Glider\n!Moves diagonally (period 4)\n.O.\n..O\nOOO\n";

    const LWSS: &str = "!Name: LWSS\n!Lightweight spaceship\n.O..O\nO....\nO...O\nOOOO.\n";

    const R_PENTOMINO: &str = "!Name: R-pentomino\n!Methuselah\n.OO\nOO.\n.O.\n";

    const PULSAR: &str = "!Name: Pulsar
!Oscillator (period 3)
..OOO...OOO..
.............
O....O.O....O
O....O.O....O
O....O.O....O
..OOO...OOO..
.............
..OOO...OOO..
O....O.O....O
O....O.O....O
O....O.O....O
.............
..OOO...OOO..
";

    pub fn block() -> Pattern {
        Pattern::parse(BLOCK)
    }

    pub fn blinker() -> Pattern {
        Pattern::parse(BLINKER)
    }

    pub fn toad() -> Pattern {
        Pattern::parse(TOAD)
    }

    pub fn beacon() -> Pattern {
        Pattern::parse(BEACON)
    }

    pub fn glider() -> Pattern {
        Pattern::parse(GLIDER)
    }

    pub fn lwss() -> Pattern {
        Pattern::parse(LWSS)
    }

    pub fn r_pentomino() -> Pattern {
        Pattern::parse(R_PENTOMINO)
    }

    pub fn pulsar() -> Pattern {
        Pattern::parse(PULSAR)
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            r_pentomino(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::next_generation;

    #[test]
    fn test_parse_skips_header() {
        let pattern = Pattern::parse("!Name: Glider\n!\n.O.\n..O\nOOO\n");
        assert_eq!(pattern.name(), "Glider");
        assert_eq!((pattern.width, pattern.height), (3, 3));
        assert_eq!(pattern.cells, vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_width_is_longest_row() {
        let pattern = Pattern::parse("h1\nh2\nO\n..O.O\nOO\n");
        assert_eq!((pattern.width, pattern.height), (5, 3));
    }

    #[test]
    fn test_unknown_characters_are_dead() {
        let pattern = Pattern::parse("x\ny\nO*o#\n0 O\n");
        assert_eq!(pattern.cells, vec![(0, 0), (2, 1)]);
        assert_eq!(pattern.name(), "Untitled");
    }

    #[test]
    fn test_crlf_line_endings() {
        let pattern = Pattern::parse("!Name: Blinker\r\n!\r\nOOO\r\n");
        assert_eq!(pattern.name(), "Blinker");
        assert_eq!((pattern.width, pattern.height), (3, 1));
    }

    #[test]
    fn test_header_only_is_empty() {
        let mut grid = Grid::new(8, 8).unwrap();
        let report = load_pattern(&mut grid, "!Name: Nothing\n!\n");
        assert_eq!(report, StampReport::default());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_three_by_three_is_centered() {
        let mut grid = Grid::new(32, 32).unwrap();
        let report = load_pattern(&mut grid, "h\nh\nOOO\nOOO\nOOO\n");
        assert_eq!(report, StampReport { placed: 9, skipped: 0 });
        grid.for_each_cell(|x, y, cell| {
            let inside = (15..=17).contains(&x) && (15..=17).contains(&y);
            assert_eq!(cell.is_alive(), inside, "({x}, {y})");
        });
    }

    #[test]
    fn test_stamp_leaves_other_cells_alone() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set_status(0, 0, Cell::Alive).unwrap();
        // Toad lands at (3, 4); its top-left cell is dead
        grid.set_status(3, 4, Cell::Alive).unwrap();
        let report = presets::toad().stamp(&mut grid);
        assert_eq!(report.placed, 6);
        assert_eq!(grid.status(0, 0), Ok(Cell::Alive));
        assert_eq!(grid.status(3, 4), Ok(Cell::Alive));
        assert_eq!(grid.population(), 8);
    }

    #[test]
    fn test_oversized_pattern_is_cropped() {
        let mut grid = Grid::new(5, 5).unwrap();
        let report = presets::pulsar().stamp(&mut grid);
        assert_eq!(report.placed + report.skipped, 48);
        assert!(report.skipped > 0);
        assert_eq!(grid.population(), report.placed);
    }

    #[test]
    fn test_cells_beyond_coordinate_range_are_skipped() {
        let mut grid = Grid::new(4, 4).unwrap();
        let pattern = Pattern {
            name: None,
            width: usize::MAX,
            height: 1,
            cells: vec![(0, 0), (usize::MAX - 1, 0)],
        };
        let report = pattern.stamp(&mut grid);
        assert_eq!(report, StampReport { placed: 0, skipped: 2 });
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_presets_parse() {
        let patterns = presets::all_patterns();
        assert_eq!(patterns.len(), 8);
        for pattern in &patterns {
            assert!(pattern.name.is_some());
            assert!(!pattern.cells.is_empty());
        }
        assert_eq!(presets::pulsar().cells.len(), 48);
        assert_eq!((presets::lwss().width, presets::lwss().height), (5, 4));
    }

    #[test]
    fn test_loaded_block_is_still_life() {
        let mut grid = Grid::new(32, 32).unwrap();
        presets::block().stamp(&mut grid);
        assert_eq!(next_generation(&grid), grid);
    }
}
