/// Axis-aligned collision detection.
///
/// Every collision shape in this game is a rectangle: the actor's box is
/// tested against the two solid halves of each pipe. The functions here are
/// pure and stateless.
use sdl2::rect::Rect;

/// Checks if two axis-aligned bounding boxes intersect.
///
/// For two rectangles to NOT intersect, one must lie completely to the left,
/// right, above, or below the other. If none of those hold, they overlap.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        // Rectangles touching at edges do not intersect (exclusive bounds)
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(32, 0, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_separated() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(100, 100, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 50, 50);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_aabb_intersect_negative_coordinates() {
        // Pipes keep colliding while partially scrolled off the left edge
        let on_screen = Rect::new(10, 0, 32, 32);
        let partly_off = Rect::new(-20, 0, 70, 320);

        assert!(aabb_intersect(&on_screen, &partly_off));
    }
}
