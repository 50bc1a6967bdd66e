//! SVG path data: building and tokenizing.
//!
//! [`PathData`] follows the d3-path serialization rules exactly (command
//! letters immediately followed by comma-separated numbers, coordinates rounded
//! to a fixed number of decimals) so generated petals match the shapes the
//! page was designed against. [`parse_path`] goes the other way and splits
//! path data back into commands.

use glam::{DVec2, dvec2};
use pest::Parser;
use pest_derive::Parser;
use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use crate::errors::RenderError;

/// Coincidence threshold for path points (d3-path uses 1e-6)
const PATH_EPSILON: f64 = 1e-6;

/// Round like JavaScript's `Math.round(v * 10^digits) / 10^digits`, then
/// print the shortest representation. Negative zero prints as `0`.
pub fn fmt_coord(value: f64, digits: u32) -> String {
    let k = 10_f64.powi(digits as i32);
    let rounded = (value * k + 0.5).floor() / k;
    fmt_num(rounded)
}

/// Shortest round-trip representation, with `-0` normalized to `0`.
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Builder for SVG path data.
///
/// ```ignore
/// let d = PathData::new(3)
///     .m(dvec2(0.0, -10.0))
///     .arc(DVec2::ZERO, 10.0, -FRAC_PI_2, 0.0, false)
///     .l(dvec2(0.0, 0.0))
///     .z();
/// assert_eq!(d.as_str(), "M0,-10A10,10,0,0,1,10,0L0,0Z");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    buf: String,
    digits: u32,
    /// Start of the current subpath
    start: Option<DVec2>,
    /// Current point
    current: Option<DVec2>,
}

impl PathData {
    pub fn new(digits: u32) -> Self {
        Self {
            buf: String::new(),
            digits,
            start: None,
            current: None,
        }
    }

    fn push(&mut self, cmd: char, values: &[f64]) {
        self.buf.push(cmd);
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            self.buf.push_str(&fmt_coord(*v, self.digits));
        }
    }

    /// Move to a point, starting a new subpath.
    pub fn m(mut self, p: DVec2) -> Self {
        self.push('M', &[p.x, p.y]);
        self.start = Some(p);
        self.current = Some(p);
        self
    }

    /// Straight line to a point.
    pub fn l(mut self, p: DVec2) -> Self {
        self.push('L', &[p.x, p.y]);
        self.current = Some(p);
        self
    }

    /// Circular arc around `center` from angle `a0` to `a1` (radians, 0 at
    /// 3 o'clock, increasing clockwise in SVG's y-down space).
    ///
    /// Emits a move (empty path) or line (disjoint current point) to the arc
    /// start first. Full circles are split into two half arcs since a single
    /// SVG arc cannot end where it starts.
    pub fn arc(mut self, center: DVec2, r: f64, a0: f64, a1: f64, ccw: bool) -> Self {
        let d = dvec2(r * a0.cos(), r * a0.sin());
        let p0 = center + d;
        let sweep = if ccw { 0.0 } else { 1.0 };
        let mut da = if ccw { a0 - a1 } else { a1 - a0 };

        match self.current {
            None => self.push('M', &[p0.x, p0.y]),
            Some(cur) if (cur.x - p0.x).abs() > PATH_EPSILON || (cur.y - p0.y).abs() > PATH_EPSILON => {
                self.push('L', &[p0.x, p0.y])
            }
            Some(_) => {}
        }

        if r == 0.0 {
            return self;
        }

        if da < 0.0 {
            da = da % TAU + TAU;
        }

        if da > TAU - PATH_EPSILON {
            let opposite = center - d;
            self.push('A', &[r, r, 0.0, 1.0, sweep, opposite.x, opposite.y]);
            self.push('A', &[r, r, 0.0, 1.0, sweep, p0.x, p0.y]);
            self.current = Some(p0);
        } else if da > PATH_EPSILON {
            let end = center + dvec2(r * a1.cos(), r * a1.sin());
            let large = if da >= PI { 1.0 } else { 0.0 };
            self.push('A', &[r, r, 0.0, large, sweep, end.x, end.y]);
            self.current = Some(end);
        }
        self
    }

    /// Close the current subpath.
    pub fn z(mut self) -> Self {
        if self.current.is_some() {
            self.current = self.start;
            self.buf.push('Z');
        }
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[derive(Parser)]
#[grammar = "grammar/svg_path.pest"]
struct SvgPathParser;

/// One path command with its numeric arguments
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub cmd: char,
    pub args: Vec<f64>,
}

impl PathCommand {
    pub fn is_line_to(&self) -> bool {
        matches!(self.cmd, 'L' | 'l')
    }

    pub fn is_arc(&self) -> bool {
        matches!(self.cmd, 'A' | 'a')
    }
}

/// Split path data into commands.
pub fn parse_path(d: &str) -> Result<Vec<PathCommand>, RenderError> {
    let pairs = SvgPathParser::parse(Rule::path, d).map_err(|e| RenderError::InvalidPath {
        message: e.to_string(),
    })?;

    let mut commands = Vec::new();
    for pair in pairs.flatten() {
        match pair.as_rule() {
            Rule::op => {
                let cmd = pair.as_str().chars().next().unwrap_or('M');
                commands.push(PathCommand { cmd, args: Vec::new() });
            }
            Rule::number => {
                let value: f64 = pair.as_str().parse().map_err(|_| RenderError::InvalidPath {
                    message: format!("bad number `{}`", pair.as_str()),
                })?;
                if let Some(last) = commands.last_mut() {
                    last.args.push(value);
                }
            }
            _ => {}
        }
    }
    Ok(commands)
}

/// Serialize commands with single spaces between all tokens.
pub fn commands_to_string(commands: &[PathCommand]) -> Result<String, RenderError> {
    let mut out = String::new();
    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(command.cmd);
        for arg in &command.args {
            write!(out, " {}", fmt_num(*arg))?;
        }
    }
    Ok(out)
}

/// The open curve at the front of a closed arc path: every command before
/// the first line-to, with separators normalized to spaces.
///
/// Returns `None` when there is no line-to to cut at, or when what precedes it
/// contains no arc (a zero-span sector that collapsed to a point).
pub fn open_arc_prefix(d: &str) -> Result<Option<String>, RenderError> {
    let commands = parse_path(d)?;
    let Some(cut) = commands.iter().position(PathCommand::is_line_to) else {
        return Ok(None);
    };
    let prefix = &commands[..cut];
    if !prefix.iter().any(PathCommand::is_arc) {
        return Ok(None);
    }
    commands_to_string(prefix).map(Some)
}
