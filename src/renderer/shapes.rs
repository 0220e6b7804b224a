//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Axis-aligned rectangle in court pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Drop the fractional part of every component, like integer pixel rects
    pub fn snapped(self) -> Self {
        Self {
            min: self.min.trunc(),
            size: self.size.trunc(),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }
}

/// Two triangles covering a filled rectangle
pub fn filled_rect(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let Vec2 { x: x0, y: y0 } = rect.min;
    let Vec2 { x: x1, y: y1 } = rect.max();

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapped_truncates() {
        let rect = Rect::new(10.9, 20.2, 15.0, 15.7).snapped();
        assert_eq!(rect, Rect::new(10.0, 20.0, 15.0, 15.0));
    }

    #[test]
    fn test_filled_rect_corners() {
        let color = [1.0; 4];
        let verts = filled_rect(Rect::new(1.0, 2.0, 3.0, 4.0), color);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();

        assert!(xs.iter().all(|&x| x == 1.0 || x == 4.0));
        assert!(ys.iter().all(|&y| y == 2.0 || y == 6.0));
        assert!(verts.contains(&Vertex::new(1.0, 2.0, color)));
        assert!(verts.contains(&Vertex::new(4.0, 6.0, color)));
    }
}
