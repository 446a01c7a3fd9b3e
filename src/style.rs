use plotters::element::{Drawable, PointCollection};
use plotters::style::{Color, RGBColor, ShapeStyle};
use plotters_backend::{BackendCoord, DrawingBackend, DrawingErrorKind};

/// category palette, one colour per series, cycling
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

pub const SOLID: DashPattern = DashPattern(&[]);
pub const DASHED: DashPattern = DashPattern(&[8., 3.]);
pub const DASH_DOT: DashPattern = DashPattern(&[13., 3., 2., 3.]);
pub const DOTTED: DashPattern = DashPattern(&[2., 3.]);

/// line variants, all drawn with circle markers
pub const LINE_STYLES: [DashPattern; 4] = [SOLID, DASHED, DASH_DOT, DOTTED];

pub const STROKE_WIDTH: u32 = 2;
pub const MARKER_RADIUS: u32 = 4;

/// Alternating on/off lengths in pixels, starting with "on".
/// An empty pattern is a solid line.
/// The pattern must have an even number of strictly positive lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern(&'static [f64]);

impl DashPattern {
    pub fn is_solid(&self) -> bool {
        self.0.is_empty()
    }

    /// cuts the path into the pieces covered by the "on" dashes,
    /// the pattern phase continues across the vertices of the path
    pub fn split(&self, path: &[BackendCoord]) -> Vec<Vec<BackendCoord>> {
        if self.is_solid() || path.len() < 2 {
            return if path.is_empty() {
                vec![]
            } else {
                vec![path.to_vec()]
            };
        }
        let mut pieces: Vec<Vec<BackendCoord>> = Vec::new();
        let mut current: Vec<BackendCoord> = vec![path[0]];
        let mut idx = 0;
        let mut left = self.0[0];
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dx = f64::from(b.0 - a.0);
            let dy = f64::from(b.1 - a.1);
            let seg_len = dx.hypot(dy);
            let mut pos = 0.;
            while seg_len - pos > left {
                pos += left;
                let t = pos / seg_len;
                let p = (
                    (f64::from(a.0) + dx * t).round() as i32,
                    (f64::from(a.1) + dy * t).round() as i32,
                );
                current.push(p);
                if idx % 2 == 0 {
                    pieces.push(std::mem::take(&mut current));
                }
                idx = (idx + 1) % self.0.len();
                left = self.0[idx];
            }
            left -= seg_len - pos;
            if idx % 2 == 0 {
                current.push(b);
            }
        }
        if idx % 2 == 0 && current.len() > 1 {
            pieces.push(current);
        }
        pieces
    }
}

/// How one series is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: RGBColor,
    pub dash: DashPattern,
    pub stroke_width: u32,
    pub marker_radius: u32,
}

impl SeriesStyle {
    /// line variant and colour cycle independently over the series index
    pub fn for_index(index: usize) -> SeriesStyle {
        SeriesStyle {
            color: PALETTE[index % PALETTE.len()],
            dash: LINE_STYLES[index % LINE_STYLES.len()],
            stroke_width: STROKE_WIDTH,
            marker_radius: MARKER_RADIUS,
        }
    }

    pub fn line(&self) -> ShapeStyle {
        self.color.stroke_width(self.stroke_width)
    }

    pub fn marker(&self) -> ShapeStyle {
        self.color.filled()
    }
}

/// A polyline drawn with the dash pattern of a series style.
/// The dashes are laid out in backend pixels, after the coordinate mapping.
pub struct StyledPath<Coord> {
    points: Vec<Coord>,
    style: SeriesStyle,
}

impl<Coord> StyledPath<Coord> {
    pub fn new(points: Vec<Coord>, style: SeriesStyle) -> Self {
        StyledPath { points, style }
    }
}

impl<'a, Coord> PointCollection<'a, Coord> for &'a StyledPath<Coord> {
    type Point = &'a Coord;
    type IntoIter = &'a [Coord];
    fn point_iter(self) -> &'a [Coord] {
        &self.points
    }
}

impl<Coord, DB: DrawingBackend> Drawable<DB> for StyledPath<Coord> {
    fn draw<I: Iterator<Item = BackendCoord>>(
        &self,
        pos: I,
        backend: &mut DB,
        _: (u32, u32),
    ) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
        let path: Vec<BackendCoord> = pos.collect();
        let line = self.style.line();
        for piece in self.style.dash.split(&path) {
            backend.draw_path(piece, &line)?;
        }
        Ok(())
    }
}
