/// Text rasterization — lays out a string with rusttype and alpha-blends
/// the glyph coverage into the pixmap, centered on a given point.
use tiny_skia::Pixmap;

pub struct TextPainter {
    font: rusttype::Font<'static>,
}

impl TextPainter {
    pub fn new(font: rusttype::Font<'static>) -> Self {
        Self { font }
    }

    /// Draw `text` centered horizontally and vertically on (cx, cy).
    pub fn draw_centered(
        &self,
        target: &mut Pixmap,
        text: &str,
        cx: f32,
        cy: f32,
        font_size: f32,
        color: (u8, u8, u8),
    ) {
        if text.is_empty() || font_size <= 0.0 {
            return;
        }

        let scale = rusttype::Scale::uniform(font_size);
        let v_metrics = self.font.v_metrics(scale);
        // Middle baseline: shift so the glyph box straddles cy
        let baseline = cy + (v_metrics.ascent + v_metrics.descent) / 2.0;

        let glyphs: Vec<_> = self
            .font
            .layout(text, scale, rusttype::point(0.0, baseline))
            .collect();

        let text_width = glyphs
            .last()
            .and_then(|g| g.pixel_bounding_box().map(|bb| bb.max.x))
            .unwrap_or(0);
        let x_offset = (cx - text_width as f32 / 2.0).round() as i32;

        let (r, g, b) = color;
        let tw = target.width() as i32;
        let th = target.height() as i32;
        let data = target.data_mut();

        for glyph in &glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = x_offset + bb.min.x + gx as i32;
                    let py = bb.min.y + gy as i32;

                    if px >= 0 && px < tw && py >= 0 && py < th {
                        let alpha = (v * 255.0) as u8;
                        if alpha > 0 {
                            let idx = ((py * tw + px) * 4) as usize;
                            let a = alpha as f32 / 255.0;
                            let dst_a = data[idx + 3] as f32 / 255.0;
                            let out_a = a + dst_a * (1.0 - a);
                            if out_a > 0.0 {
                                data[idx] = ((r as f32 * a
                                    + data[idx] as f32 * dst_a * (1.0 - a))
                                    / out_a) as u8;
                                data[idx + 1] = ((g as f32 * a
                                    + data[idx + 1] as f32 * dst_a * (1.0 - a))
                                    / out_a) as u8;
                                data[idx + 2] = ((b as f32 * a
                                    + data[idx + 2] as f32 * dst_a * (1.0 - a))
                                    / out_a) as u8;
                                data[idx + 3] = (out_a * 255.0) as u8;
                            }
                        }
                    }
                });
            }
        }
    }
}
