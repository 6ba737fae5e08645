use palette::Srgb;
use std::f64::consts::FRAC_PI_2;
use thiserror::Error;

pub const FULL_TURN: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on the circle of `radius` around `self`, at `angle` degrees clockwise from +x.
    pub fn polar(&self, radius: f64, angle: f64) -> Self {
        let rad = angle.to_radians();
        Self::new(self.x + radius * rad.cos(), self.y + radius * rad.sin())
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub color_when_even: Srgb<u8>,
    pub color_when_odd: Srgb<u8>,
    /// Fraction of the board radius where this ring ends.
    pub outer_ratio: f64,
}

impl RingSpec {
    pub const fn new(color_when_even: Srgb<u8>, color_when_odd: Srgb<u8>, outer_ratio: f64) -> Self {
        Self {
            color_when_even,
            color_when_odd,
            outer_ratio,
        }
    }

    pub fn color_for(&self, is_even_segment: bool) -> Srgb<u8> {
        if is_even_segment {
            self.color_when_even
        } else {
            self.color_when_odd
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Board layout has no rings")]
    NoRings,
    #[error("Board layout has no segment numbers")]
    NoSegments,
    #[error("Ring {index} has non-positive outer ratio {ratio}")]
    NonPositiveRatio { index: usize, ratio: f64 },
    #[error("Ring {index} outer ratio {ratio} does not exceed previous ratio {previous}")]
    NotIncreasing {
        index: usize,
        ratio: f64,
        previous: f64,
    },
    #[error("Outermost ring ends at ratio {0}, expected 1")]
    OpenBoard(f64),
}

/// Static description of a board: rings from the bull outward and segment labels clockwise
/// from 0°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub rings: &'static [RingSpec],
    pub numbers: &'static [u32],
}

impl BoardLayout {
    pub const fn new(rings: &'static [RingSpec], numbers: &'static [u32]) -> Self {
        Self { rings, numbers }
    }

    pub fn sweep_angle(&self) -> f64 {
        FULL_TURN / self.numbers.len() as f64
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let sweep_angle = self.sweep_angle();
        self.numbers
            .iter()
            .enumerate()
            .map(move |(index, &number)| Segment {
                index,
                number,
                start_angle: index as f64 * sweep_angle,
                sweep_angle,
            })
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.numbers.is_empty() {
            return Err(LayoutError::NoSegments);
        }

        let mut previous = 0.0;
        for (index, ring) in self.rings.iter().enumerate() {
            let ratio = ring.outer_ratio;
            if ratio.is_nan() || ratio <= 0.0 {
                return Err(LayoutError::NonPositiveRatio { index, ratio });
            }
            if ratio <= previous {
                return Err(LayoutError::NotIncreasing {
                    index,
                    ratio,
                    previous,
                });
            }
            previous = ratio;
        }

        match self.rings.last() {
            None => Err(LayoutError::NoRings),
            Some(ring) if ring.outer_ratio != 1.0 => Err(LayoutError::OpenBoard(ring.outer_ratio)),
            Some(_) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub number: u32,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl Segment {
    pub fn is_even(&self) -> bool {
        self.index % 2 == 0
    }

    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }
}

/// Where the board sits on a surface of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub minor_size: f64,
    pub max_radius: f64,
    pub center: Point,
}

impl BoardGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        // f64::max drops NaN, so this also clamps NaN to 0
        let minor_size = width.max(0.0).min(height.max(0.0));
        let half = minor_size / 2.0;

        Self {
            minor_size,
            max_radius: half,
            center: Point::new(half, half),
        }
    }

    /// `(inner, outer)` radius of every ring, innermost first.
    pub fn ring_radii<'a>(
        &'a self,
        rings: &'a [RingSpec],
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        rings.iter().scan(0.0, move |inner, ring| {
            let outer = self.max_radius * ring.outer_ratio;
            let bounds = (*inner, outer);
            *inner = outer;
            Some(bounds)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Angles in degrees. Connects to the arc start with a line if the pen is elsewhere.
    ArcTo {
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub point: Point,
    /// Direction of travel in radians.
    pub angle: f64,
}

#[derive(Debug, Clone, Copy)]
enum Piece {
    Line(Point, Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    },
}

impl Piece {
    fn length(&self) -> f64 {
        match *self {
            Piece::Line(from, to) => from.distance(to),
            Piece::Arc {
                radius,
                sweep_angle,
                ..
            } => sweep_angle.to_radians().abs() * radius,
        }
    }

    fn sample(&self, distance: f64) -> PathSample {
        match *self {
            Piece::Line(from, to) => {
                let length = self.length();
                let t = if length > 0.0 { distance / length } else { 0.0 };
                PathSample {
                    point: Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t),
                    angle: (to.y - from.y).atan2(to.x - from.x),
                }
            }
            Piece::Arc {
                center,
                radius,
                start_angle,
                sweep_angle,
            } => {
                let length = self.length();
                let t = if length > 0.0 { distance / length } else { 0.0 };
                let angle = start_angle + sweep_angle * t;
                let normal = angle.to_radians();
                PathSample {
                    point: center.polar(radius, angle),
                    angle: if sweep_angle < 0.0 {
                        normal - FRAC_PI_2
                    } else {
                        normal + FRAC_PI_2
                    },
                }
            }
        }
    }
}

/// Owned path built from lines and circular arcs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    pub fn line_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    pub fn arc_to(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            center,
            radius,
            start_angle,
            sweep_angle,
        });
        self
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn pieces(&self) -> Vec<Piece> {
        let mut pieces = Vec::with_capacity(self.commands.len());
        let mut current: Option<Point> = None;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => current = Some(point),
                PathCommand::LineTo(point) => {
                    if let Some(from) = current {
                        pieces.push(Piece::Line(from, point));
                    }
                    current = Some(point);
                }
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    let start = center.polar(radius, start_angle);
                    if let Some(from) = current.filter(|&p| p != start) {
                        pieces.push(Piece::Line(from, start));
                    }
                    pieces.push(Piece::Arc {
                        center,
                        radius,
                        start_angle,
                        sweep_angle,
                    });
                    current = Some(center.polar(radius, start_angle + sweep_angle));
                }
            }
        }

        pieces
    }

    pub fn length(&self) -> f64 {
        self.pieces().iter().map(Piece::length).sum()
    }

    /// Position and heading at `distance` along the path, clamped to its ends.
    pub fn point_at(&self, distance: f64) -> Option<PathSample> {
        let pieces = self.pieces();
        let last = pieces.last().copied()?;

        let mut remaining = distance.max(0.0);
        for piece in &pieces {
            let length = piece.length();
            if remaining <= length {
                return Some(piece.sample(remaining));
            }
            remaining -= length;
        }

        Some(last.sample(last.length()))
    }
}

/// Ring wedge: out along the start ray, clockwise on the outer circle, back in along the end ray,
/// then counter-clockwise on the inner circle.
pub fn wedge_path(
    path: &mut Path,
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    sweep_angle: f64,
) {
    let end_angle = start_angle + sweep_angle;

    path.move_to(center.polar(inner_radius, start_angle))
        .line_to(center.polar(outer_radius, start_angle))
        .arc_to(center, outer_radius, start_angle, sweep_angle)
        .line_to(center.polar(inner_radius, end_angle))
        .arc_to(center, inner_radius, end_angle, -sweep_angle);
}

/// Largest font size that fits both the outer arc length and the ring thickness, halved.
pub fn preferred_text_size(inner_radius: f64, outer_radius: f64, sweep_angle: f64) -> f64 {
    let outer_arc_length = sweep_angle.to_radians() * outer_radius;
    let thickness = outer_radius - inner_radius;
    outer_arc_length.min(thickness) / 2.0
}

/// Baseline radius for a label in the ring band. Uses the font size, not measured glyph height.
pub fn label_radius(inner_radius: f64, outer_radius: f64, text_size: f64) -> f64 {
    (outer_radius + inner_radius) / 2.0 - text_size / 2.0
}

pub fn label_path(
    path: &mut Path,
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    sweep_angle: f64,
    text_size: f64,
) {
    let radius = label_radius(inner_radius, outer_radius, text_size);

    path.move_to(center.polar(radius, start_angle))
        .arc_to(center, radius, start_angle, sweep_angle);
}
