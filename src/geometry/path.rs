//! SVG path data for connectors and arrowheads.

use std::fmt::Write as _;

use glam::DVec2;

/// Values closer to zero than this print as `0` (trig noise such as `tan(π)`).
const SNAP_TO_ZERO: f64 = 1e-9;

/// Incremental builder for an SVG `d` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    d: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(self, p: DVec2) -> Self {
        self.command('M', p)
    }

    pub fn line_to(self, p: DVec2) -> Self {
        self.command('L', p)
    }

    pub fn close(mut self) -> Self {
        self.push_separator();
        self.d.push('Z');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.d
    }

    fn command(mut self, cmd: char, p: DVec2) -> Self {
        self.push_separator();
        // Writing into a String cannot fail
        let _ = write!(self.d, "{cmd} {} {}", fmt_num(p.x), fmt_num(p.y));
        self
    }

    fn push_separator(&mut self) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
    }
}

impl std::fmt::Display for PathData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.d)
    }
}

/// Format a coordinate with 6 significant figures, trailing zeros trimmed.
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value.abs() < SNAP_TO_ZERO {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
