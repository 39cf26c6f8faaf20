use std::ops::{Add, AddAssign, Mul};

/// World-space vector. Positions use a bottom-left origin with y pointing up;
/// velocities are in units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, scale: f32) -> Vec2 {
        Vec2 {
            x: self.x * scale,
            y: self.y * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_componentwise() {
        let sum = Vec2 { x: 1.0, y: -2.0 } + Vec2 { x: 0.5, y: 4.0 };
        assert_eq!(sum, Vec2 { x: 1.5, y: 2.0 });
    }

    #[test]
    fn add_assign_accumulates() {
        let mut position = Vec2 { x: 3.0, y: 1.0 };
        position += Vec2 { x: -1.0, y: 2.0 };
        assert_eq!(position, Vec2 { x: 2.0, y: 3.0 });
    }

    #[test]
    fn scale_multiplies_both_components() {
        let scaled = Vec2 { x: 2.0, y: -3.0 } * 0.5;
        assert_eq!(scaled, Vec2 { x: 1.0, y: -1.5 });
    }

    #[test]
    fn scaled_velocity_integrates_into_position() {
        let mut position = Vec2 { x: 50.0, y: 96.0 };
        let velocity = Vec2 { x: 100.0, y: -40.0 };
        position += velocity * 0.25;
        assert_eq!(position, Vec2 { x: 75.0, y: 86.0 });
    }
}
