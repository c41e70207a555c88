//! Characters used to draw the snake.
//!
//! Body cells join their two neighbours with box-drawing lines, the head
//! points where the snake is going and the tail stub points at the body.

use crate::game::{Cell, Direction};

/// How a body cell connects to the cells before and after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentShape {
    Vertical,
    Horizontal,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl SegmentShape {
    pub fn glyph(self) -> char {
        match self {
            SegmentShape::Vertical => '│',
            SegmentShape::Horizontal => '─',
            SegmentShape::UpRight => '└',
            SegmentShape::UpLeft => '┘',
            SegmentShape::DownRight => '┌',
            SegmentShape::DownLeft => '┐',
        }
    }

    /// Whether the line leaves the cell through its right edge
    pub fn opens_right(self) -> bool {
        matches!(
            self,
            SegmentShape::Horizontal | SegmentShape::UpRight | SegmentShape::DownRight
        )
    }
}

/// Shape of `cell` given its neighbours toward the head and toward the tail.
///
/// `None` if either neighbour is not adjacent.
pub fn segment_shape(toward_head: Cell, cell: Cell, toward_tail: Cell) -> Option<SegmentShape> {
    use Direction::*;

    let a = Direction::between(cell, toward_head)?;
    let b = Direction::between(cell, toward_tail)?;

    let shape = match (a, b) {
        (Up, Down) | (Down, Up) => SegmentShape::Vertical,
        (Left, Right) | (Right, Left) => SegmentShape::Horizontal,
        (Up, Right) | (Right, Up) => SegmentShape::UpRight,
        (Up, Left) | (Left, Up) => SegmentShape::UpLeft,
        (Down, Right) | (Right, Down) => SegmentShape::DownRight,
        (Down, Left) | (Left, Down) => SegmentShape::DownLeft,
        _ => return None,
    };
    Some(shape)
}

pub fn head_glyph(heading: Direction) -> char {
    match heading {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

/// Half line from the tail toward the rest of the body
pub fn tail_glyph(toward_body: Direction) -> char {
    match toward_body {
        Direction::Up => '╵',
        Direction::Down => '╷',
        Direction::Left => '╴',
        Direction::Right => '╶',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ARENA_SIZE;

    fn cell(row: i32, col: i32) -> Cell {
        Cell::encode(row, col, ARENA_SIZE).unwrap()
    }

    #[test]
    fn test_straight_segments() {
        assert_eq!(
            segment_shape(cell(1, 5), cell(2, 5), cell(3, 5)),
            Some(SegmentShape::Vertical)
        );
        assert_eq!(
            segment_shape(cell(2, 6), cell(2, 5), cell(2, 4)),
            Some(SegmentShape::Horizontal)
        );
    }

    #[test]
    fn test_corner_segments_ignore_order() {
        let up = cell(1, 5);
        let right = cell(2, 6);
        let mid = cell(2, 5);
        assert_eq!(segment_shape(up, mid, right), Some(SegmentShape::UpRight));
        assert_eq!(segment_shape(right, mid, up), Some(SegmentShape::UpRight));

        assert_eq!(
            segment_shape(cell(3, 5), mid, cell(2, 4)),
            Some(SegmentShape::DownLeft)
        );
        assert_eq!(
            segment_shape(cell(3, 5), mid, cell(2, 6)),
            Some(SegmentShape::DownRight)
        );
        assert_eq!(
            segment_shape(cell(1, 5), mid, cell(2, 4)),
            Some(SegmentShape::UpLeft)
        );
    }

    #[test]
    fn test_disconnected_segment() {
        assert_eq!(segment_shape(cell(0, 0), cell(2, 5), cell(3, 5)), None);
    }

    #[test]
    fn test_opens_right() {
        assert!(SegmentShape::Horizontal.opens_right());
        assert!(SegmentShape::DownRight.opens_right());
        assert!(!SegmentShape::Vertical.opens_right());
        assert!(!SegmentShape::UpLeft.opens_right());
    }

    #[test]
    fn test_head_and_tail_glyphs() {
        assert_eq!(head_glyph(Direction::Right), '▶');
        assert_eq!(head_glyph(Direction::Up), '▲');
        assert_eq!(tail_glyph(Direction::Right), '╶');
        assert_eq!(tail_glyph(Direction::Down), '╷');
    }

    #[test]
    fn test_tail_stub_points_toward_body() {
        // The stub's line half sits on the side where the body continues
        let tail = cell(5, 5);
        let expected = [('╵', 4, 5), ('╷', 6, 5), ('╴', 5, 4), ('╶', 5, 6)];

        for (glyph, row, col) in expected {
            let toward_body = Direction::between(tail, cell(row, col)).unwrap();
            assert_eq!(tail_glyph(toward_body), glyph);
        }
    }
}
