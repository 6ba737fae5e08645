use super::model::{
    BoardGeometry, BoardLayout, LayoutError, Path, Segment, label_path, preferred_text_size,
    wedge_path,
};
use super::surface::{Surface, TextAlign, TextStyle};
use super::{CLASSIC, LABEL_COLOR};
use std::iter::zip;

/// Paints a [`BoardLayout`] onto any [`Surface`], scaled to the surface's minor dimension.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRenderer {
    layout: &'static BoardLayout,
}

impl Default for SegmentRenderer {
    fn default() -> Self {
        Self { layout: &CLASSIC }
    }
}

impl SegmentRenderer {
    pub fn new(layout: &'static BoardLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &'static BoardLayout {
        self.layout
    }

    /// Draws every segment's ring wedges followed by its label. Geometry is recomputed on each
    /// call; only surface failures are reported.
    pub fn render<S: Surface>(
        &self,
        width: f64,
        height: f64,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        let geometry = BoardGeometry::new(width, height);
        log::trace!(
            "Painting board on {}x{} surface, radius {}",
            width,
            height,
            geometry.max_radius
        );

        let mut path = Path::new();
        for segment in self.layout.segments() {
            self.draw_full_segment(&geometry, &segment, &mut path, surface)?;
        }
        Ok(())
    }

    fn draw_full_segment<S: Surface>(
        &self,
        geometry: &BoardGeometry,
        segment: &Segment,
        path: &mut Path,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        let rings = self.layout.rings;
        let last = rings.len().saturating_sub(1);

        for (i, (ring, (inner, outer))) in zip(rings, geometry.ring_radii(rings)).enumerate() {
            wedge_path(
                path,
                geometry.center,
                inner,
                outer,
                segment.start_angle,
                segment.sweep_angle,
            );
            let filled = surface.fill_path(path, ring.color_for(segment.is_even()));
            path.reset();
            filled?;

            if i == last {
                self.draw_label(geometry, segment, inner, outer, path, surface)?;
            }
        }
        Ok(())
    }

    fn draw_label<S: Surface>(
        &self,
        geometry: &BoardGeometry,
        segment: &Segment,
        inner: f64,
        outer: f64,
        path: &mut Path,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        let style = TextStyle {
            size: preferred_text_size(inner, outer, segment.sweep_angle),
            color: LABEL_COLOR,
            align: TextAlign::Center,
        };

        label_path(
            path,
            geometry.center,
            inner,
            outer,
            segment.start_angle,
            segment.sweep_angle,
            style.size,
        );
        log::trace!(
            "Label {} at {:.1}px, {}-aligned from {}°",
            segment.number,
            style.size,
            style.align,
            segment.start_angle
        );
        let drawn = surface.draw_text_on_path(&segment.number.to_string(), path, 0.0, 0.0, &style);
        path.reset();
        drawn
    }
}
