//! Brick grid construction from a colour-code layout

use super::state::{Brick, BrickColor, Rect};
use crate::tuning::Tuning;

/// Build the initial brick set in row-major order
///
/// Cell `(row, col)` sits at
/// `wall + (brick_width + gap) * col, wall + (brick_height + gap) * row`.
/// Empty rows still advance the row index.
pub fn build_bricks(tuning: &Tuning) -> Vec<Brick> {
    let pitch_x = tuning.brick_width + tuning.brick_gap;
    let pitch_y = tuning.brick_height + tuning.brick_gap;

    let mut bricks = Vec::new();
    for (row, codes) in tuning.layout.iter().enumerate() {
        for (col, code) in codes.chars().enumerate() {
            let Some(color) = BrickColor::from_code(code) else {
                continue;
            };
            bricks.push(Brick {
                rect: Rect::new(
                    tuning.wall_size + pitch_x * col as f32,
                    tuning.wall_size + pitch_y * row as f32,
                    tuning.brick_width,
                    tuning.brick_height,
                ),
                color,
            });
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_default_grid() {
        let bricks = build_bricks(&Tuning::default());
        assert_eq!(bricks.len(), 8 * 14);

        // First brick: row 6, col 0
        assert_eq!(bricks[0].color, BrickColor::Red);
        assert_eq!(bricks[0].rect.pos, Vec2::new(12.0, 96.0));
        assert_eq!(bricks[0].rect.size, Vec2::new(25.0, 12.0));

        // Last brick of the first row
        assert_eq!(bricks[13].rect.pos, Vec2::new(12.0 + 27.0 * 13.0, 96.0));

        // Last brick: row 13, col 13
        let last = bricks.last().unwrap();
        assert_eq!(last.color, BrickColor::Yellow);
        assert_eq!(last.rect.pos, Vec2::new(363.0, 194.0));
    }

    #[test]
    fn test_colour_bands_in_order() {
        let bricks = build_bricks(&Tuning::default());
        let bands: Vec<BrickColor> = bricks.chunks(28).map(|c| c[0].color).collect();
        assert_eq!(
            bands,
            vec![
                BrickColor::Red,
                BrickColor::Orange,
                BrickColor::Green,
                BrickColor::Yellow
            ]
        );
        for chunk in bricks.chunks(28) {
            assert!(chunk.iter().all(|b| b.color == chunk[0].color));
        }
    }

    #[test]
    fn test_row_major_order() {
        let bricks = build_bricks(&Tuning::default());
        for pair in bricks.windows(2) {
            let (a, b) = (pair[0].rect.pos, pair[1].rect.pos);
            assert!(a.y < b.y || (a.y == b.y && a.x < b.x));
        }
    }

    #[test]
    fn test_sparse_layout() {
        let tuning = Tuning {
            layout: vec!["".into(), "R.Y".into()],
            ..Tuning::default()
        };
        let bricks = build_bricks(&tuning);
        assert_eq!(bricks.len(), 2);
        assert_eq!(bricks[0].rect.pos, Vec2::new(12.0, 26.0));
        assert_eq!(bricks[1].rect.pos, Vec2::new(66.0, 26.0));
        assert_eq!(bricks[1].color, BrickColor::Yellow);
    }
}
