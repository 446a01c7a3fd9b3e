use crate::display;
use crate::error::{Error, Result};
use crate::legend::LegendLoc;
use crate::parse::Point;
use crate::style::{SeriesStyle, StyledPath};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_backend::DrawingBackend;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const DEFAULT_SIZE: (u32, u32) = (640, 480);
/// largest width or height accepted for a figure, in pixels
pub const MAX_SIDE: u32 = 10_000;
const LEGEND_GLYPH_LENGTH: i32 = 20;
const MAX_WIDTH: f64 = f64::MAX / 4.;

/// Everything the plotter needs besides the points
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub savefig: Option<PathBuf>,
    pub legend: Vec<String>,
    pub loc: LegendLoc,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub size: (u32, u32),
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            savefig: None,
            legend: Vec::new(),
            loc: LegendLoc::default(),
            title: None,
            xlabel: None,
            ylabel: None,
            size: DEFAULT_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Bitmap,
}

impl OutputFormat {
    /// infers the format from the file extension,
    /// a path without extension is saved as png with the extension appended
    pub fn from_path(path: &Path) -> Result<(OutputFormat, PathBuf)> {
        let ext = match path.extension() {
            Some(ext) => ext.to_string_lossy().to_lowercase(),
            None => {
                let mut with_ext = path.as_os_str().to_owned();
                with_ext.push(".png");
                return Ok((OutputFormat::Bitmap, PathBuf::from(with_ext)));
            }
        };
        match ext.as_str() {
            "svg" => Ok((OutputFormat::Svg, path.to_path_buf())),
            "png" | "bmp" | "jpg" | "jpeg" => Ok((OutputFormat::Bitmap, path.to_path_buf())),
            _ => Err(Error::UnsupportedFormat(ext)),
        }
    }
}

/// Draws the points as one line per y column.
#[derive(Debug, Clone)]
pub struct Plotter {
    config: PlotConfig,
}

impl Plotter {
    pub fn new(config: PlotConfig) -> Plotter {
        Plotter { config }
    }

    /// saves to the configured file if any, otherwise shows a window
    pub fn plot(&self, points: &[Point]) -> Result<()> {
        match &self.config.savefig {
            Some(path) => self.save(points, path),
            None => {
                eprintln!("show figure with {} backend", display::BACKEND_NAME);
                let rgb = self.render_rgb(points)?;
                let title = self.config.title.as_deref().unwrap_or("Figure 1");
                display::show(title, &rgb, self.config.size)
            }
        }
    }

    pub fn save(&self, points: &[Point], path: &Path) -> Result<()> {
        let (format, path) = OutputFormat::from_path(path)?;
        log::debug!("saving {:?} figure to {}", format, path.display());
        match format {
            OutputFormat::Svg => {
                let root = SVGBackend::new(&path, self.config.size).into_drawing_area();
                self.draw(&root, points)?;
                root.present().map_err(drawing_error)
            }
            OutputFormat::Bitmap => {
                let root = BitMapBackend::new(&path, self.config.size).into_drawing_area();
                self.draw(&root, points)?;
                root.present().map_err(drawing_error)
            }
        }
    }

    /// renders into an in-memory RGB buffer, three bytes per pixel, row major
    pub fn render_rgb(&self, points: &[Point]) -> Result<Vec<u8>> {
        let (w, h) = self.config.size;
        let mut buffer = vec![0u8; w as usize * h as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (w, h)).into_drawing_area();
            self.draw(&root, points)?;
            root.present().map_err(drawing_error)?;
        }
        Ok(buffer)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        points: &[Point],
    ) -> Result<()> {
        let xs: Vec<f64> = points.iter().map(Point::x).collect();
        let series = series(points);
        log::info!("plotting {} series of {} points", series.len(), points.len());
        if !self.config.legend.is_empty() && self.config.legend.len() != series.len() {
            log::warn!(
                "{} legend entries for {} series",
                self.config.legend.len(),
                series.len()
            );
        }
        let xrange = axis_range(xs.iter().copied());
        let yrange = axis_range(series.iter().flatten().copied());

        root.fill(&WHITE).map_err(drawing_error)?;
        let mut builder = ChartBuilder::on(root);
        builder
            .margin(15)
            .x_label_area_size(if self.config.xlabel.is_some() { 50 } else { 30 })
            .y_label_area_size(if self.config.ylabel.is_some() { 70 } else { 50 });
        if let Some(title) = &self.config.title {
            builder.caption(title, ("sans-serif", 22));
        }
        let mut chart = builder
            .build_cartesian_2d(xrange.clone(), yrange.clone())
            .map_err(drawing_error)?;

        let mut mesh = chart.configure_mesh();
        mesh.light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(220, 220, 220).stroke_width(1))
            .label_style(("sans-serif", 14));
        if let Some(xlabel) = &self.config.xlabel {
            mesh.x_desc(xlabel.as_str());
        }
        if let Some(ylabel) = &self.config.ylabel {
            mesh.y_desc(ylabel.as_str());
        }
        mesh.draw().map_err(drawing_error)?;

        for (i, ys) in series.iter().enumerate() {
            let style = SeriesStyle::for_index(i);
            let runs: Vec<Vec<(f64, f64)>> = finite_runs(&xs, ys)
                .into_iter()
                .map(|run| {
                    run.into_iter()
                        .map(|(x, y)| (clamp(x, &xrange), clamp(y, &yrange)))
                        .collect()
                })
                .collect();
            let anno = chart
                .draw_series(runs.iter().map(|run| StyledPath::new(run.clone(), style)))
                .map_err(drawing_error)?;
            if let Some(label) = self.config.legend.get(i) {
                anno.label(label.as_str()).legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + StyledPath::new(vec![(0, 0), (LEGEND_GLYPH_LENGTH, 0)], style)
                        + Circle::new(
                            (LEGEND_GLYPH_LENGTH / 2, 0),
                            style.marker_radius,
                            style.marker(),
                        )
                });
            }
            chart
                .draw_series(runs.iter().flatten().map(|&p| {
                    Circle::new(p, style.marker_radius, style.marker())
                }))
                .map_err(drawing_error)?;
        }

        if !self.config.legend.is_empty() {
            chart
                .configure_series_labels()
                .position(self.config.loc.position())
                .legend_area_size(LEGEND_GLYPH_LENGTH + 10)
                .background_style(WHITE.mix(0.8))
                .border_style(RGBColor(200, 200, 200))
                .label_font(("sans-serif", 14))
                .draw()
                .map_err(drawing_error)?;
        }
        Ok(())
    }
}

fn drawing_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Drawing(e.to_string())
}

/// one sequence per y column, in point order;
/// the number of series is the shortest ys among the points
pub fn series(points: &[Point]) -> Vec<Vec<f64>> {
    let width = points.iter().map(|p| p.ys().len()).min().unwrap_or(0);
    (0..width)
        .map(|i| points.iter().map(|p| p.ys()[i]).collect())
        .collect()
}

/// splits the line into the runs of finite values,
/// so that NAN and infinite values leave a gap
pub fn finite_runs(xs: &[f64], ys: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let pairs: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    pairs
        .split(|(x, y)| !x.is_finite() || !y.is_finite())
        .filter(|run| !run.is_empty())
        .map(|run| run.to_vec())
        .collect()
}

/// range of the finite values with a 5% margin on each side.
/// The width stays within a quarter of f64::MAX, leaving room for the tick
/// computations: data spreading wider than that keeps its centre and loses
/// the extremes.
pub fn axis_range<I: IntoIterator<Item = f64>>(values: I) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });
    if min > max {
        return 0.0..1.0;
    }
    // halved first, max - min overflows for values of opposite sign near f64::MAX
    let half_span = max / 2. - min / 2.;
    let margin = if half_span > 0. {
        half_span * 0.1
    } else if min == 0. {
        0.5
    } else {
        min.abs() * 0.05
    };
    let start = (min - margin).max(f64::MIN);
    let end = (max + margin).min(f64::MAX);
    if end - start <= MAX_WIDTH {
        return start..end;
    }
    let centre = start / 2. + end / 2.;
    let half = MAX_WIDTH / 2.;
    (centre - half)..(centre + half)
}

/// keeps a value inside the axis range, so that it is drawn on the border
fn clamp(v: f64, range: &Range<f64>) -> f64 {
    v.max(range.start).min(range.end)
}
