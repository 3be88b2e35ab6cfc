// Property-style checks for the tiler, fit check, pair selection and oscillator,
// driven by seeded RNGs over many layouts.

use composite_blocks::grid::{Grid, tile};
use composite_blocks::{BlockId, can_fit, choose_pair, triangle_wave};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn tiles_never_overlap_and_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(0xB10C);
    for _ in 0..200 {
        let height = rng.gen_range(1..=20);
        let width = rng.gen_range(1..=30);
        let max = rng.gen_range(1..=6);
        let (grid, blocks) = tile(height, width, max, &mut rng);

        let mut owners = vec![None; height * width];
        for (i, b) in blocks.iter().enumerate() {
            assert_eq!(b.id, BlockId(i));
            assert!(b.size >= 1 && b.size <= max);
            assert!(b.anchor_row + b.size <= height);
            assert!(b.anchor_col + b.size <= width);
            for (y, x) in b.cells() {
                let slot = &mut owners[y * width + x];
                assert!(slot.is_none(), "cell ({},{}) claimed twice", y, x);
                *slot = Some(b.id);
            }
        }
        for y in 0..height {
            for x in 0..width {
                assert_eq!(grid.cell(y, x), owners[y * width + x]);
            }
        }
    }
}

#[test]
fn fully_covered_since_unit_blocks_always_fit() {
    let mut rng = StdRng::seed_from_u64(42);
    let (grid, _) = tile(17, 23, 4, &mut rng);
    assert_eq!(grid.occupied_count(), 17 * 23);
}

#[test]
fn two_by_two_unit_blocks() {
    let mut rng = StdRng::seed_from_u64(7);
    let (grid, blocks) = tile(2, 2, 1, &mut rng);
    assert_eq!(blocks.len(), 4);
    assert!(blocks.iter().all(|b| b.size == 1));
    assert_eq!(grid.occupied_count(), 4);
}

#[test]
fn one_by_one_grid() {
    let mut rng = StdRng::seed_from_u64(8);
    let (_, blocks) = tile(1, 1, 4, &mut rng);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].size, 1);
}

#[test]
fn can_fit_matches_occupancy_mask() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..500 {
        let mut grid = Grid::new(6, 6);
        let mut mask = [[false; 6]; 6];
        for (y, row) in mask.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if rng.gen_bool(0.15) {
                    *cell = true;
                    grid.mark(y, x, Some(BlockId(0)));
                }
            }
        }
        let size = rng.gen_range(1..=4);
        let ay = rng.gen_range(0..=6 - size);
        let ax = rng.gen_range(0..=6 - size);
        let any_taken = (ay..ay + size).any(|y| (ax..ax + size).any(|x| mask[y][x]));
        assert_eq!(can_fit(&grid, size, ay, ax), !any_taken);
    }
}

#[test]
fn selected_pair_shares_width() {
    let mut rng = StdRng::seed_from_u64(55);
    for _ in 0..50 {
        let (_, blocks) = tile(12, 16, 4, &mut rng);
        let (a, b) = choose_pair(&blocks, 30, &mut rng).unwrap();
        assert_ne!(a, b);
        assert_eq!(blocks[a.0].size, blocks[b.0].size);
    }
}

#[test]
fn oscillator_period_and_bounds() {
    let (x0, period) = (100.0, 3000.0);
    assert!(triangle_wave(0.0, period, x0).abs() < 1e-9);
    assert!((triangle_wave(1500.0, period, x0) - 100.0).abs() < 1e-9);
    assert!(triangle_wave(3000.0, period, x0).abs() < 1e-9);

    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..1000 {
        let t: f64 = rng.gen_range(0.0..100_000.0);
        let x = triangle_wave(t, period, x0);
        assert!((0.0..=x0).contains(&x));
        assert!((x - triangle_wave(t + period, period, x0)).abs() < 1e-6);
    }
    for k in 0..10 {
        let base = k as f64 * period;
        assert!(triangle_wave(base, period, x0).abs() < 1e-6);
        assert!((triangle_wave(base + period / 2.0, period, x0) - x0).abs() < 1e-6);
    }
}
