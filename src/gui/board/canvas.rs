use super::model::{Path, PathCommand};
use super::surface::{Surface, TextStyle};
use cairo::{Context, FillRule, FontSlant, FontWeight};
use palette::Srgb;

const LABEL_FONT: &str = "Sans";

/// [`Surface`] backed by a cairo context, e.g. the one a GTK draw func hands out.
pub struct CairoSurface<'a> {
    cr: &'a Context,
}

impl<'a> CairoSurface<'a> {
    pub fn new(cr: &'a Context) -> Self {
        Self { cr }
    }

    fn trace(&self, path: &Path) {
        self.cr.new_path();
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo(p) => self.cr.move_to(p.x, p.y),
                PathCommand::LineTo(p) => self.cr.line_to(p.x, p.y),
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    let (from, to) = (
                        start_angle.to_radians(),
                        (start_angle + sweep_angle).to_radians(),
                    );
                    if sweep_angle < 0.0 {
                        self.cr.arc_negative(center.x, center.y, radius, from, to);
                    } else {
                        self.cr.arc(center.x, center.y, radius, from, to);
                    }
                }
            }
        }
    }

    fn set_color(&self, color: Srgb<u8>) {
        let (r, g, b) = color.into_format::<f64>().into_components();
        self.cr.set_source_rgb(r, g, b);
    }

    fn glyph_advances(&self, text: &str) -> Result<Vec<(String, f64)>, cairo::Error> {
        text.chars()
            .map(|c| {
                let glyph = c.to_string();
                let ext = self.cr.text_extents(&glyph)?;
                Ok((glyph, ext.x_advance()))
            })
            .collect()
    }
}

impl Surface for CairoSurface<'_> {
    type Error = cairo::Error;

    fn fill_path(&mut self, path: &Path, color: Srgb<u8>) -> Result<(), Self::Error> {
        self.trace(path);
        self.set_color(color);
        self.cr.set_fill_rule(FillRule::Winding);
        self.cr.fill()
    }

    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &Path,
        h_offset: f64,
        v_offset: f64,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        let length = path.length();
        // cairo rejects a zero font matrix
        if style.size.is_nan() || style.size <= 0.0 || length <= 0.0 {
            return Ok(());
        }

        self.cr.save()?;
        self.cr.new_path();
        self.set_color(style.color);
        self.cr
            .select_font_face(LABEL_FONT, FontSlant::Normal, FontWeight::Bold);
        self.cr.set_font_size(style.size);

        let glyphs = self.glyph_advances(text)?;
        let width: f64 = glyphs.iter().map(|(_, advance)| advance).sum();
        let mut cursor = h_offset + style.align.shift(length, width);

        for (glyph, advance) in &glyphs {
            if let Some(sample) = path.point_at(cursor + advance / 2.0) {
                self.cr.save()?;
                self.cr.translate(sample.point.x, sample.point.y);
                self.cr.rotate(sample.angle);
                self.cr.move_to(-advance / 2.0, v_offset);
                self.cr.show_text(glyph)?;
                self.cr.restore()?;
            }
            cursor += advance;
        }

        self.cr.restore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::board::model::{Point, label_path, preferred_text_size, wedge_path};
    use crate::gui::board::surface::TextAlign;
    use cairo::{Format, ImageSurface};

    fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> u32 {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y * stride + x * 4;
        u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ])
    }

    #[test]
    fn test_fill_wedge_covers_its_sector_only() {
        let mut image = ImageSurface::create(Format::ARgb32, 100, 100).unwrap();
        {
            let cr = Context::new(&image).unwrap();
            let mut path = Path::new();
            wedge_path(&mut path, Point::new(50.0, 50.0), 10.0, 50.0, 0.0, 30.0);
            CairoSurface::new(&cr)
                .fill_path(&path, Srgb::new(0xFE, 0x32, 0x06))
                .unwrap();
        }

        // inside the wedge, just below the +x axis
        assert_eq!(pixel(&mut image, 80, 55), 0xFFFE3206);
        // above the +x axis is outside the clockwise sweep
        assert_eq!(pixel(&mut image, 80, 45), 0);
        // inside the inner radius
        assert_eq!(pixel(&mut image, 53, 51), 0);
    }

    #[test]
    fn test_zero_size_text_is_skipped() {
        let image = ImageSurface::create(Format::ARgb32, 10, 10).unwrap();
        let cr = Context::new(&image).unwrap();
        let mut path = Path::new();
        path.move_to(Point::new(5.0, 5.0))
            .arc_to(Point::new(5.0, 5.0), 0.0, 0.0, 30.0);
        let style = TextStyle {
            size: 0.0,
            color: Srgb::new(255, 255, 255),
            align: TextAlign::Center,
        };

        assert!(
            CairoSurface::new(&cr)
                .draw_text_on_path("20", &path, 0.0, 0.0, &style)
                .is_ok()
        );
    }

    #[test]
    fn test_label_is_centered_outside_its_baseline() {
        let center = Point::new(100.0, 100.0);
        let (inner, outer, start, sweep) = (60.0, 100.0, -105.0, 30.0);
        let size = preferred_text_size(inner, outer, sweep);
        let baseline = (outer + inner) / 2.0 - size / 2.0;

        let mut image = ImageSurface::create(Format::ARgb32, 200, 200).unwrap();
        {
            let cr = Context::new(&image).unwrap();
            let mut path = Path::new();
            label_path(&mut path, center, inner, outer, start, sweep, size);
            let style = TextStyle {
                size,
                color: Srgb::new(255, 255, 255),
                align: TextAlign::Center,
            };
            CairoSurface::new(&cr)
                .draw_text_on_path("20", &path, 0.0, 0.0, &style)
                .unwrap();
        }

        let mut inked = Vec::new();
        for y in 0..200 {
            for x in 0..200 {
                if pixel(&mut image, x, y) >> 24 > 0x80 {
                    let (dx, dy) = (x as f64 + 0.5 - center.x, y as f64 + 0.5 - center.y);
                    inked.push((dx.hypot(dy), dy.atan2(dx).to_degrees()));
                }
            }
        }

        assert!(inked.len() > 20, "only {} label pixels", inked.len());
        for &(radius, angle) in &inked {
            // glyphs stand on the baseline and grow outward, within the ring band
            assert!(radius > baseline - 3.0 && radius < outer, "radius {radius}");
            // nothing near either end of the arc
            assert!(angle > start + 2.0 && angle < start + sweep - 2.0, "angle {angle}");
        }

        let count = inked.len() as f64;
        let mean_radius = inked.iter().map(|(r, _)| r).sum::<f64>() / count;
        let mean_angle = inked.iter().map(|(_, a)| a).sum::<f64>() / count;
        assert!(mean_radius > baseline);
        assert!((mean_angle - (start + sweep / 2.0)).abs() < 3.0, "mean angle {mean_angle}");
    }
}
