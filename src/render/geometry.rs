/// Clock face geometry — hand angles and numeral placement.
/// All angles are radians with 0 at 12 o'clock, increasing clockwise.
/// Surface coordinates grow rightward/downward, so endpoints are computed
/// directly with sin/cos instead of rotating the coordinate frame.
use std::f32::consts::PI;

/// Hour hand angle, advancing continuously with the minute.
pub fn hour_angle(hour: u32, minute: u32) -> f32 {
    ((hour % 12) as f32 + minute as f32 / 60.0) * (PI / 6.0)
}

/// Minute hand angle, advancing continuously with the second.
pub fn minute_angle(minute: u32, second: u32) -> f32 {
    (minute as f32 + second as f32 / 60.0) * (PI / 30.0)
}

/// Second hand angle, snapping to whole seconds.
pub fn second_angle(second: u32) -> f32 {
    second as f32 * (PI / 30.0)
}

/// Endpoint of a hand of the given length, relative to center.
/// Angle 0 points to 12 (straight up), pi/2 points to 3.
pub fn hand_tip(angle: f32, length: f32) -> (f32, f32) {
    (length * angle.sin(), -length * angle.cos())
}

/// Position and font size for numeral `num` (1-12).
/// Cardinals (12, 3, 6, 9) sit at 80% radius in a 30%-radius font;
/// the rest at 83% radius in a 15%-radius font.
pub fn numeral_layout(num: u32, radius: f32) -> (f32, f32, f32) {
    let angle = num as f32 * (PI / 6.0) - PI / 2.0;
    let (dist, font_size) = if num % 3 == 0 {
        (0.8, radius * 0.3)
    } else {
        (0.83, radius * 0.15)
    };
    let x = radius * dist * angle.cos();
    let y = radius * dist * angle.sin();
    (x, y, font_size)
}
