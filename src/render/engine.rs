/// Clock renderer — paints the full face for one instant onto a surface
/// using tiny-skia: face circle, numerals, hands, date, weekday, and the
/// digital time overlay, all scaled to the reduced radius.
use std::path::Path;

use anyhow::{Context, Result};
use tiny_skia::{Color, FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::{error, info};

use crate::clock::{self, TimeFields, TimeSource};
use crate::render::geometry;
use crate::render::surface::Surface;
use crate::render::text::TextPainter;

const FACE_FILL: (u8, u8, u8) = (0x81, 0xD8, 0xD0);
const FACE_RIM: (u8, u8, u8) = (169, 169, 169); // darkgray
const NUMERAL_COLOR: (u8, u8, u8) = (0, 0, 0);
const HAND_COLOR: (u8, u8, u8) = (0x33, 0x33, 0x33);
const SECOND_HAND_COLOR: (u8, u8, u8) = (255, 0, 0);
const DATE_COLOR: (u8, u8, u8) = (0, 0, 0);
const DIGITAL_COLOR: (u8, u8, u8) = (255, 255, 255);

pub struct ClockRenderer {
    text: TextPainter,
    time_source: Box<dyn TimeSource>,
}

impl ClockRenderer {
    pub fn new(font_path: &Path, time_source: Box<dyn TimeSource>) -> Result<Self> {
        let font_data = std::fs::read(font_path)
            .with_context(|| format!("Failed to read font file: {}", font_path.display()))?;
        let font = rusttype::Font::try_from_vec(font_data)
            .with_context(|| format!("Failed to parse font: {}", font_path.display()))?;
        Ok(Self {
            text: TextPainter::new(font),
            time_source,
        })
    }

    /// Paint one complete pass for the current instant.
    /// Logs and no-ops if the surface has no drawable area.
    pub fn render(&self, surface: &mut Surface) {
        let radius = surface.height() as f32 / 2.0 * 0.9;
        if radius <= 0.0 {
            error!("Drawing surface has no height, skipping paint pass");
            return;
        }
        let cx = surface.width() as f32 / 2.0;
        let cy = surface.height() as f32 / 2.0;

        let now = self.time_source.now();
        info!("{}", clock::format_hms(&now));

        let ctx = surface.context_mut();
        ctx.fill(Color::BLACK);

        self.draw_face(ctx, cx, cy, radius);
        self.draw_numerals(ctx, cx, cy, radius);
        self.draw_hands(ctx, cx, cy, radius, &now);
        self.draw_date(ctx, cx, cy, radius, &now);
        self.draw_weekday(ctx, cx, cy, radius, &now);
        self.draw_digital_time(ctx, cx, cy, radius, &now);
    }

    fn draw_face(&self, ctx: &mut Pixmap, cx: f32, cy: f32, radius: f32) {
        let mut pb = PathBuilder::new();
        pb.push_circle(cx, cy, radius);
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color_rgba8(FACE_FILL.0, FACE_FILL.1, FACE_FILL.2, 255);
        ctx.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        paint.set_color_rgba8(FACE_RIM.0, FACE_RIM.1, FACE_RIM.2, 255);
        let stroke = Stroke {
            width: radius * 0.03,
            ..Stroke::default()
        };
        ctx.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn draw_numerals(&self, ctx: &mut Pixmap, cx: f32, cy: f32, radius: f32) {
        for num in 1..=12 {
            let (x, y, font_size) = geometry::numeral_layout(num, radius);
            self.text.draw_centered(
                ctx,
                &num.to_string(),
                cx + x,
                cy + y,
                font_size,
                NUMERAL_COLOR,
            );
        }
    }

    fn draw_hands(&self, ctx: &mut Pixmap, cx: f32, cy: f32, radius: f32, now: &TimeFields) {
        let hour_angle = geometry::hour_angle(now.hour, now.minute);
        self.draw_hand(ctx, cx, cy, hour_angle, radius * 0.5, radius * 0.07, HAND_COLOR);

        let minute_angle = geometry::minute_angle(now.minute, now.second);
        self.draw_hand(ctx, cx, cy, minute_angle, radius * 0.8, radius * 0.07, HAND_COLOR);

        let second_angle = geometry::second_angle(now.second);
        self.draw_hand(
            ctx,
            cx,
            cy,
            second_angle,
            radius * 0.9,
            radius * 0.02,
            SECOND_HAND_COLOR,
        );
    }

    fn draw_hand(
        &self,
        ctx: &mut Pixmap,
        cx: f32,
        cy: f32,
        angle: f32,
        length: f32,
        width: f32,
        color: (u8, u8, u8),
    ) {
        let (dx, dy) = geometry::hand_tip(angle, length);

        let mut pb = PathBuilder::new();
        pb.move_to(cx, cy);
        pb.line_to(cx + dx, cy + dy);
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color_rgba8(color.0, color.1, color.2, 255);
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        ctx.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// "Month Day" label above center, on the 12 o'clock ray pulled back
    /// toward center by 25% of radius.
    fn draw_date(&self, ctx: &mut Pixmap, cx: f32, cy: f32, radius: f32, now: &TimeFields) {
        let label = format!("{} {}", clock::month_name(now.month0), now.day);
        let y = cy - radius * 0.8 + radius * 0.25;
        self.text
            .draw_centered(ctx, &label, cx, y, radius * 0.1, DATE_COLOR);
    }

    /// Weekday label below center, mirroring the date label's offset,
    /// color-coded by weekday index.
    fn draw_weekday(&self, ctx: &mut Pixmap, cx: f32, cy: f32, radius: f32, now: &TimeFields) {
        let label = clock::weekday_name(now.weekday0);
        let color = clock::weekday_color(now.weekday0);
        let y = cy + radius * 0.8 - radius * 0.25;
        self.text.draw_centered(ctx, label, cx, y, radius * 0.1, color);
    }

    fn draw_digital_time(
        &self,
        ctx: &mut Pixmap,
        cx: f32,
        cy: f32,
        radius: f32,
        now: &TimeFields,
    ) {
        let time_str = clock::format_hms(now);
        let y = cy - radius * 0.3;
        self.text
            .draw_centered(ctx, &time_str, cx, y, radius * 0.2, DIGITAL_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(TimeFields);

    impl TimeSource for FixedClock {
        fn now(&self) -> TimeFields {
            self.0
        }
    }

    fn test_font_path() -> Option<std::path::PathBuf> {
        let candidates = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
        ];
        candidates
            .into_iter()
            .map(std::path::PathBuf::from)
            .find(|p| p.exists())
    }

    #[test]
    fn test_render_paints_face_pixels() {
        let Some(font_path) = test_font_path() else {
            return; // no system font available
        };

        let fields = TimeFields {
            hour: 10,
            minute: 9,
            second: 30,
            day: 15,
            month0: 5,
            weekday0: 3,
        };
        let renderer = ClockRenderer::new(&font_path, Box::new(FixedClock(fields))).unwrap();
        let mut surface = Surface::new(200, 200).unwrap();
        renderer.render(&mut surface);

        // Center pixel sits inside the face circle
        let data = surface.data();
        let idx = (100 * 200 + 100) * 4;
        let center = (data[idx], data[idx + 1], data[idx + 2]);
        assert_ne!(center, (0, 0, 0), "face should be painted over the background");
    }

    #[test]
    fn test_missing_font_fails_construction() {
        let err = ClockRenderer::new(
            Path::new("/nonexistent/font.ttf"),
            Box::new(FixedClock(TimeFields {
                hour: 0,
                minute: 0,
                second: 0,
                day: 1,
                month0: 0,
                weekday0: 0,
            })),
        );
        assert!(err.is_err());
    }
}
