//! Axis-aligned overlap tests between the ball, the court and the paddles
//!
//! These are per-frame overlap checks, not swept collision: a ball that has
//! crossed a paddle's face this frame is judged on where it is now.

use super::state::{Ball, Paddle, Side};
use crate::consts::COURT_HEIGHT;

/// Outcome of the ball reaching a paddle's face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Ball is fully inside the paddle's vertical span
    Bounce,
    /// Ball is at least partly outside the span
    Miss,
}

/// True when the ball pokes past the top or bottom of the court
pub fn hits_wall(ball: &Ball) -> bool {
    ball.top() < 0.0 || ball.bottom() > COURT_HEIGHT
}

/// True when the ball has crossed the paddle's inner face
pub fn crossed_face(ball: &Ball, paddle: &Paddle) -> bool {
    match paddle.side {
        Side::Left => ball.left() < paddle.right(),
        Side::Right => ball.right() > paddle.left(),
    }
}

/// True when the ball's vertical span lies entirely within the paddle's
pub fn within_span(ball: &Ball, paddle: &Paddle) -> bool {
    ball.top() >= paddle.top() && ball.bottom() <= paddle.bottom()
}

/// Check the ball against one paddle; `None` while it hasn't reached it
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> Option<Contact> {
    if !crossed_face(ball, paddle) {
        return None;
    }
    if within_span(ball, paddle) {
        Some(Contact::Bounce)
    } else {
        Some(Contact::Miss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            diameter: BALL_DIAMETER,
        }
    }

    #[test]
    fn test_wall_edges() {
        assert!(!hits_wall(&ball_at(400.0, 0.0)));
        assert!(hits_wall(&ball_at(400.0, -0.1)));
        assert!(!hits_wall(&ball_at(400.0, COURT_HEIGHT - BALL_DIAMETER)));
        assert!(hits_wall(&ball_at(400.0, COURT_HEIGHT - BALL_DIAMETER + 0.1)));
    }

    #[test]
    fn test_left_paddle_contact() {
        let paddle = Paddle::new(Side::Left);
        let face = paddle.right();

        assert_eq!(paddle_contact(&ball_at(face, 300.0), &paddle), None);
        assert_eq!(
            paddle_contact(&ball_at(face - 1.0, paddle.top()), &paddle),
            Some(Contact::Bounce)
        );
        assert_eq!(
            paddle_contact(&ball_at(face - 1.0, paddle.top() - 1.0), &paddle),
            Some(Contact::Miss)
        );
        assert_eq!(
            paddle_contact(&ball_at(face - 1.0, paddle.bottom() - 10.0), &paddle),
            Some(Contact::Miss)
        );
    }

    #[test]
    fn test_right_paddle_contact() {
        let paddle = Paddle::new(Side::Right);
        let face = paddle.left() - BALL_DIAMETER;

        assert_eq!(paddle_contact(&ball_at(face, 300.0), &paddle), None);
        assert_eq!(
            paddle_contact(&ball_at(face + 1.0, paddle.bottom() - BALL_DIAMETER), &paddle),
            Some(Contact::Bounce)
        );
        assert_eq!(
            paddle_contact(&ball_at(face + 1.0, 0.0), &paddle),
            Some(Contact::Miss)
        );
    }
}
