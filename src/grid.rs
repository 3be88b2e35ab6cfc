//! Occupancy grid and the greedy composite-block tiler.
//!
//! The grid is a flat row-major arena of cell owners. Blocks store only their
//! anchor and size; cells point back to a block through its [`BlockId`], so
//! there are no references between cells and blocks.
//!
//! Tiling walks every cell in row-major order. At each empty cell a random size
//! in `1..=max_block_number` is drawn and shrunk until the square both stays in
//! bounds and covers only empty cells. Sizes rejected at an anchor are never
//! retried, so the result is greedy rather than optimal.

use rand::Rng;

use crate::config::DEFAULT_MIN_OPACITY;

/// Index of a block in the placed-block list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub usize);

/// A placed square tile.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub anchor_row: usize,
    pub anchor_col: usize,
    pub size: usize, // side length in cells, >= 1
    pub opacity: f64,
}

impl Block {
    pub fn pixel_length(&self, block_length: u32) -> f64 {
        (self.size as u64 * block_length as u64) as f64
    }

    /// Top-left corner in pixels.
    pub fn pixel_origin(&self, block_length: u32) -> (f64, f64) {
        let len = block_length as f64;
        (self.anchor_col as f64 * len, self.anchor_row as f64 * len)
    }

    pub fn contains(&self, y: usize, x: usize) -> bool {
        (self.anchor_row..self.anchor_row + self.size).contains(&y)
            && (self.anchor_col..self.anchor_col + self.size).contains(&x)
    }

    /// Every `(row, col)` in the footprint.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size * self.size).map(move |i| (self.anchor_row + i / self.size, self.anchor_col + i % self.size))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Option<BlockId>>, // row-major, len = height * width
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width, cells: vec![None; height * width] }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn idx(&self, y: usize, x: usize) -> usize {
        assert!(y < self.height && x < self.width, "cell ({y},{x}) outside {}x{} grid", self.height, self.width);
        y * self.width + x
    }

    pub fn cell(&self, y: usize, x: usize) -> Option<BlockId> {
        self.cells[self.idx(y, x)]
    }

    pub fn is_occupied(&self, y: usize, x: usize) -> bool {
        self.cell(y, x).is_some()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Mark the block's footprint as owned by it. Overwrites whatever was there;
    /// callers check [`can_fit`] first.
    pub fn place(&mut self, block: &Block) {
        for (y, x) in block.cells() {
            let i = self.idx(y, x);
            self.cells[i] = Some(block.id);
        }
    }

    /// Set a single cell's owner, bypassing block placement.
    #[doc(hidden)]
    pub fn mark(&mut self, y: usize, x: usize, owner: Option<BlockId>) {
        let i = self.idx(y, x);
        self.cells[i] = owner;
    }
}

/// True iff every one of the `size * size` cells anchored at `(anchor_y, anchor_x)`
/// is empty. No bounds checking: out-of-range cells panic.
pub fn can_fit(grid: &Grid, size: usize, anchor_y: usize, anchor_x: usize) -> bool {
    (0..size * size).all(|i| !grid.is_occupied(anchor_y + i / size, anchor_x + i % size))
}

/// Tile a `height x width` grid with opacity floored at the default minimum.
pub fn tile<R: Rng>(height: usize, width: usize, max_block_number: usize, rng: &mut R) -> (Grid, Vec<Block>) {
    tile_with_opacity(height, width, max_block_number, DEFAULT_MIN_OPACITY, rng)
}

pub fn tile_with_opacity<R: Rng>(
    height: usize,
    width: usize,
    max_block_number: usize,
    min_opacity: f64,
    rng: &mut R,
) -> (Grid, Vec<Block>) {
    let mut grid = Grid::new(height, width);
    let mut blocks: Vec<Block> = Vec::new();
    let max_size = max_block_number.max(1);

    for y in 0..height {
        for x in 0..width {
            if grid.is_occupied(y, x) {
                continue;
            }
            // clamp to the grid edge up front; shrinking past it one step at a
            // time would be linear in max_block_number
            let mut size = rng.gen_range(1..=max_size).min(width - x).min(height - y);
            while size > 0 {
                // bounds
                if x + size > width || y + size > height {
                    size -= 1;
                    continue;
                }
                if can_fit(&grid, size, y, x) {
                    let block = Block {
                        id: BlockId(blocks.len()),
                        anchor_row: y,
                        anchor_col: x,
                        size,
                        opacity: rng.gen_range(0.0..1.0_f64).max(min_opacity).min(1.0),
                    };
                    grid.place(&block);
                    blocks.push(block);
                    break;
                }
                size -= 1;
            }
        }
    }
    (grid, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_block_cells_cover_square() {
        let b = Block { id: BlockId(0), anchor_row: 2, anchor_col: 3, size: 2, opacity: 1.0 };
        let cells: Vec<_> = b.cells().collect();
        assert_eq!(cells, vec![(2, 3), (2, 4), (3, 3), (3, 4)]);
        assert!(b.contains(3, 4));
        assert!(!b.contains(4, 4));
        assert_eq!(b.pixel_length(30), 60.0);
        assert_eq!(b.pixel_origin(30), (90.0, 60.0));
    }

    #[test]
    fn test_can_fit_detects_single_occupied_cell() {
        let mut g = Grid::new(4, 4);
        assert!(can_fit(&g, 3, 0, 0));
        g.mark(2, 1, Some(BlockId(7)));
        assert!(!can_fit(&g, 3, 0, 0));
        assert!(can_fit(&g, 2, 0, 0));
        assert!(can_fit(&g, 1, 3, 3));
    }

    #[test]
    fn test_place_marks_footprint() {
        let mut g = Grid::new(3, 3);
        let b = Block { id: BlockId(4), anchor_row: 1, anchor_col: 1, size: 2, opacity: 0.5 };
        g.place(&b);
        assert_eq!(g.occupied_count(), 4);
        assert_eq!(g.cell(2, 2), Some(BlockId(4)));
        assert_eq!(g.cell(0, 0), None);
    }

    #[test]
    fn test_single_size_blocks_fill_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let (grid, blocks) = tile(2, 2, 1, &mut rng);
        assert_eq!(blocks.len(), 4);
        assert!(blocks.iter().all(|b| b.size == 1));
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn test_one_cell_grid_forbids_large_blocks() {
        let mut rng = StdRng::seed_from_u64(9);
        let (_, blocks) = tile(1, 1, 4, &mut rng);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].size, 1);
    }

    #[test]
    fn test_opacity_floor() {
        let mut rng = StdRng::seed_from_u64(3);
        let (_, blocks) = tile_with_opacity(10, 10, 3, 0.4, &mut rng);
        assert!(blocks.iter().all(|b| (0.4..=1.0).contains(&b.opacity)));
    }

    #[test]
    fn test_huge_max_block_number_is_clamped_to_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let (grid, blocks) = tile(2, 3, usize::MAX, &mut rng);
        assert_eq!(grid.occupied_count(), 6);
        assert!(blocks.iter().all(|b| b.anchor_row + b.size <= 2 && b.anchor_col + b.size <= 3));
    }

    #[test]
    #[should_panic]
    fn test_can_fit_out_of_bounds_panics() {
        let g = Grid::new(2, 2);
        can_fit(&g, 2, 1, 1);
    }
}
