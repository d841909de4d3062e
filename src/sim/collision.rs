//! Axis-separated collision resolution against static rectangles
//!
//! The body is moved one axis at a time. After each move, every platform the
//! body overlaps pushes it back out along that axis, opposite to the direction
//! of travel, and the velocity on that axis is cancelled. Platforms are visited
//! in list order and the direction test reads the live velocity, so once a
//! contact has zeroed it, later overlaps on the same axis no longer move the
//! body.

use super::rect::{Bounds, Rect, overlaps};

/// Contacts produced by one axis sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisHit {
    /// At least one platform was overlapped after the move
    pub blocked: bool,
    /// Snapped onto a platform top while falling (Y sweep only)
    pub landed: bool,
    /// Snapped under a platform bottom while rising (Y sweep only)
    pub bumped: bool,
}

/// Move `body` by `vx` horizontally and resolve overlaps.
pub fn sweep_x<B: Bounds>(body: &mut Rect, vx: &mut f32, platforms: &[B]) -> AxisHit {
    let mut hit = AxisHit::default();
    body.x += *vx;

    for platform in platforms {
        if !overlaps(&*body, platform) {
            continue;
        }
        let p = platform.rect();
        if *vx > 0.0 {
            body.x = p.x - body.w;
        } else if *vx < 0.0 {
            body.x = p.right();
        }
        *vx = 0.0;
        hit.blocked = true;
    }

    hit
}

/// Move `body` by `vy` vertically and resolve overlaps.
///
/// `landed` in the result is the new on-ground state.
pub fn sweep_y<B: Bounds>(body: &mut Rect, vy: &mut f32, platforms: &[B]) -> AxisHit {
    let mut hit = AxisHit::default();
    body.y += *vy;

    for platform in platforms {
        if !overlaps(&*body, platform) {
            continue;
        }
        let p = platform.rect();
        if *vy > 0.0 {
            // Falling: rest on the platform top
            body.y = p.y - body.h;
            *vy = 0.0;
            hit.landed = true;
        } else if *vy < 0.0 {
            // Rising: head bump
            body.y = p.bottom();
            *vy = 0.0;
            hit.bumped = true;
        }
        hit.blocked = true;
    }

    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_x_right_snaps_to_left_face() {
        let wall = [Rect::new(100.0, 0.0, 20.0, 100.0)];
        let mut body = Rect::new(45.0, 10.0, 52.0, 52.0);
        let mut vx = 4.0;

        let hit = sweep_x(&mut body, &mut vx, &wall);
        assert!(hit.blocked);
        assert_eq!(body.right(), 100.0);
        assert_eq!(vx, 0.0);
    }

    #[test]
    fn test_sweep_x_left_snaps_to_right_face() {
        let wall = [Rect::new(0.0, 0.0, 20.0, 100.0)];
        let mut body = Rect::new(22.0, 10.0, 52.0, 52.0);
        let mut vx = -4.0;

        sweep_x(&mut body, &mut vx, &wall);
        assert_eq!(body.x, 20.0);
        assert_eq!(vx, 0.0);
    }

    #[test]
    fn test_sweep_x_free_move() {
        let platforms: [Rect; 0] = [];
        let mut body = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut vx = 3.5;

        let hit = sweep_x(&mut body, &mut vx, &platforms);
        assert!(!hit.blocked);
        assert_eq!(body.x, 3.5);
        assert_eq!(vx, 3.5);
    }

    #[test]
    fn test_sweep_y_landing() {
        let floor = [Rect::new(100.0, 300.0, 100.0, 20.0)];
        // Bottom at 298, falls 5 => crosses the top by 3
        let mut body = Rect::new(120.0, 246.0, 52.0, 52.0);
        let mut vy = 5.0;

        let hit = sweep_y(&mut body, &mut vy, &floor);
        assert!(hit.landed);
        assert!(!hit.bumped);
        assert_eq!(body.bottom(), 300.0);
        assert_eq!(vy, 0.0);
    }

    #[test]
    fn test_sweep_y_head_bump() {
        let ceiling = [Rect::new(0.0, 0.0, 200.0, 20.0)];
        let mut body = Rect::new(50.0, 25.0, 52.0, 52.0);
        let mut vy = -11.0;

        let hit = sweep_y(&mut body, &mut vy, &ceiling);
        assert!(hit.bumped);
        assert!(!hit.landed);
        assert_eq!(body.y, 20.0);
        assert_eq!(vy, 0.0);
    }

    #[test]
    fn test_first_contact_wins_once_velocity_is_zeroed() {
        // Two stacked floors both overlapped after the move
        let floors = [
            Rect::new(0.0, 300.0, 200.0, 20.0),
            Rect::new(0.0, 290.0, 200.0, 20.0),
        ];
        let mut body = Rect::new(10.0, 250.0, 52.0, 52.0);
        let mut vy = 12.0;

        let hit = sweep_y(&mut body, &mut vy, &floors);
        assert!(hit.landed);
        // Snapped onto the first floor; the second still overlaps but vy is 0
        assert_eq!(body.bottom(), 300.0);
    }

    #[test]
    fn test_first_wall_in_list_order_decides_x_snap() {
        // Two overlapping walls; the nearer one is listed second
        let walls = [
            Rect::new(110.0, 0.0, 20.0, 100.0),
            Rect::new(100.0, 0.0, 20.0, 100.0),
        ];
        let mut body = Rect::new(50.0, 10.0, 52.0, 52.0);
        let mut vx = 12.0;

        let hit = sweep_x(&mut body, &mut vx, &walls);
        assert!(hit.blocked);
        // Snapped against the first wall; the second still overlaps but vx is 0
        assert_eq!(body.right(), 110.0);
        assert_eq!(vx, 0.0);

        let mut body = Rect::new(50.0, 10.0, 52.0, 52.0);
        let mut vx = 12.0;
        sweep_x(&mut body, &mut vx, &[walls[1], walls[0]]);
        assert_eq!(body.right(), 100.0);
    }

    #[test]
    fn test_duplicate_platforms_resolve_identically() {
        let p = Rect::new(100.0, 300.0, 100.0, 20.0);
        let mut body = Rect::new(120.0, 250.0, 52.0, 52.0);
        let mut vy = 6.0;

        sweep_y(&mut body, &mut vy, &[p, p]);
        assert_eq!(body.bottom(), 300.0);
        assert_eq!(vy, 0.0);
    }
}
