//! Braille dot packing.
//!
//! Each braille character represents a 2x4 dot matrix, giving 8 independent
//! brightness decisions per terminal cell instead of one.

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// Bit for each dot, indexed `[column][row]`:
/// ```text
/// [0,0]=0x01  [1,0]=0x08
/// [0,1]=0x02  [1,1]=0x10
/// [0,2]=0x04  [1,2]=0x20
/// [0,3]=0x40  [1,3]=0x80
/// ```
pub const DOT_BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

/// Pack a 2x4 dot grid into a mask.
///
/// `grid[x][y]` is the dot at column `x`, row `y`.
pub fn pack_dots(grid: [[bool; 4]; 2]) -> u8 {
    let mut mask = 0u8;
    for (x, column) in grid.iter().enumerate() {
        for (y, &on) in column.iter().enumerate() {
            if on {
                mask |= DOT_BITS[x][y];
            }
        }
    }
    mask
}

/// The braille character for a dot mask (U+2800 to U+28FF).
pub fn mask_to_char(mask: u8) -> char {
    // Every offset in 0..=255 lands inside the Braille Patterns block
    char::from_u32(BRAILLE_BASE as u32 + u32::from(mask)).unwrap_or(BRAILLE_BASE)
}

/// Pack per-sample dots into one mask per character cell.
///
/// `dots` is row-major over the sub-grid, which is `cols * 2` wide and
/// `rows * 4` tall. Returns `cols * rows` masks, row-major.
pub fn pack_grid(dots: &[bool], cols: usize, rows: usize) -> Vec<u8> {
    let sub_width = cols * 2;
    let mut masks = Vec::with_capacity(cols * rows);

    for cy in 0..rows {
        for cx in 0..cols {
            let mut grid = [[false; 4]; 2];
            for (dy, row) in (cy * 4..cy * 4 + 4).enumerate() {
                for (dx, col) in (cx * 2..cx * 2 + 2).enumerate() {
                    grid[dx][dy] = dots[row * sub_width + col];
                }
            }
            masks.push(pack_dots(grid));
        }
    }

    masks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braille_base() {
        assert_eq!(BRAILLE_BASE, '\u{2800}');
    }

    #[test]
    fn test_pack_empty_and_full() {
        assert_eq!(pack_dots([[false; 4]; 2]), 0);
        assert_eq!(pack_dots([[true; 4]; 2]), 0xFF);
        assert_eq!(mask_to_char(0), BRAILLE_BASE);
        assert_eq!(mask_to_char(0xFF), '\u{28FF}');
    }

    #[test]
    fn test_single_dots() {
        let expected = [
            ((0, 0), 0x01),
            ((0, 1), 0x02),
            ((0, 2), 0x04),
            ((0, 3), 0x40),
            ((1, 0), 0x08),
            ((1, 1), 0x10),
            ((1, 2), 0x20),
            ((1, 3), 0x80),
        ];
        for ((x, y), bit) in expected {
            let mut grid = [[false; 4]; 2];
            grid[x][y] = true;
            assert_eq!(pack_dots(grid), bit, "dot ({}, {})", x, y);
        }
    }

    #[test]
    fn test_corner_dots() {
        let mut grid = [[false; 4]; 2];
        grid[0][0] = true;
        grid[1][3] = true;
        let mask = pack_dots(grid);
        assert_eq!(mask, 0x81);
        assert_eq!(mask_to_char(mask), '\u{2881}');
    }

    #[test]
    fn test_pack_grid_two_cells() {
        // 2 cells wide, 1 tall: left cell full, right cell only its top-left dot
        let mut dots = vec![false; 4 * 4];
        for y in 0..4 {
            dots[y * 4] = true;
            dots[y * 4 + 1] = true;
        }
        dots[2] = true;
        assert_eq!(pack_grid(&dots, 2, 1), vec![0xFF, 0x01]);
    }
}
