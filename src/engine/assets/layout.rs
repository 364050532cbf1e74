// Tile layouts exported from the map editor as delimited text

/// Code marking an empty cell
pub const EMPTY_CELL: i32 = -1;

/// Errors from parsing a tile layout
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid tile code '{value}' at row {row}, column {column}")]
    InvalidCode {
        row: usize,
        column: usize,
        value: String,
    },
}

/// A 2D grid of tile codes, row-major
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileLayout {
    rows: Vec<Vec<i32>>,
}

impl TileLayout {
    /// Parse comma-separated rows of integer codes.
    ///
    /// Cells are trimmed; blank lines are skipped. Rows may differ in length.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut rows = Vec::new();

        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            let row_index = rows.len();
            let row = line
                .split(',')
                .enumerate()
                .map(|(column, cell)| {
                    let cell = cell.trim();
                    cell.parse::<i32>().map_err(|_| LayoutError::InvalidCode {
                        row: row_index,
                        column,
                        value: cell.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Every non-empty cell as `(row, column, code)`
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, code)| **code != EMPTY_CELL)
                .map(move |(column, code)| (row, column, *code))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid() {
        let layout = TileLayout::parse("-1,395,-1\n0,-1,-1\n").unwrap();
        assert_eq!(layout.rows, vec![vec![-1, 395, -1], vec![0, -1, -1]]);
    }

    #[test]
    fn test_occupied_skips_empty_cells() {
        let layout = TileLayout::parse("-1,395,-1\n0,-1,7").unwrap();
        let cells: Vec<_> = layout.occupied().collect();
        assert_eq!(cells, vec![(0, 1, 395), (1, 0, 0), (1, 2, 7)]);
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let layout = TileLayout::parse(" 1 , -1\r\n\n  \n-1,2\n").unwrap();
        assert_eq!(layout.rows, vec![vec![1, -1], vec![-1, 2]]);
    }

    #[test]
    fn test_invalid_code_reports_position() {
        let err = TileLayout::parse("-1,-1\n-1,x").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidCode {
                row: 1,
                column: 1,
                value: "x".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Invalid tile code 'x' at row 1, column 1");
    }

    #[test]
    fn test_empty_text() {
        let layout = TileLayout::parse("").unwrap();
        assert!(layout.rows.is_empty());
        assert_eq!(layout.occupied().count(), 0);
    }
}
