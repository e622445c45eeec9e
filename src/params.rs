//! Parameter Set Module
//! User-adjustable inputs for one render pass and the dashboard profiles that offer them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Smallest number of points the slider allows
pub const MIN_POINTS: usize = 10;
/// Largest number of points the slider allows
pub const MAX_POINTS: usize = 100;
/// Slider start value
pub const DEFAULT_POINTS: usize = 30;
pub const DEFAULT_TITLE: &str = "My Chart";
pub const DEFAULT_COLOR_HEX: &str = "#1f77b4";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Point count {0} outside [10, 100]")]
    PointCountOutOfRange(usize),
    #[error("Chart kind '{kind}' is not offered by the {profile} dashboard")]
    UnsupportedChartKind { kind: ChartKind, profile: DashboardProfile },
    #[error("Pattern '{pattern}' is not offered by the {profile} dashboard")]
    UnsupportedPattern { pattern: Pattern, profile: DashboardProfile },
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),
}

/// Formula family used to synthesize the Y values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// Cumulative sum of standard-normal steps around 50
    RandomWalk,
    /// Independent normal draws around 50
    Noise,
    Linear,
    SineWave,
    Exponential,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::RandomWalk,
        Pattern::Noise,
        Pattern::Linear,
        Pattern::SineWave,
        Pattern::Exponential,
    ];

    /// Label shown in the radio group.
    pub fn label(self) -> &'static str {
        match self {
            Pattern::RandomWalk | Pattern::Noise => "Random",
            Pattern::Linear => "Linear",
            Pattern::SineWave => "Sine Wave",
            Pattern::Exponential => "Exponential",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual encoding applied to the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
    Area,
    Scatter,
    Histogram,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Area,
        ChartKind::Scatter,
        ChartKind::Histogram,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Line => "Line Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Area => "Area Chart",
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::Histogram => "Histogram",
        }
    }

    /// Whether the single user color applies to this encoding.
    pub fn uses_color(self) -> bool {
        matches!(self, ChartKind::Line | ChartKind::Bar | ChartKind::Area)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two dashboards: which options they offer and how they label the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashboardProfile {
    #[default]
    Simple,
    Advanced,
}

impl DashboardProfile {
    pub fn title(self) -> &'static str {
        match self {
            DashboardProfile::Simple => "Simple Data Visualizer",
            DashboardProfile::Advanced => "Advanced Data Visualizer",
        }
    }

    pub fn chart_kinds(self) -> &'static [ChartKind] {
        match self {
            DashboardProfile::Simple => &[ChartKind::Line, ChartKind::Bar, ChartKind::Area],
            DashboardProfile::Advanced => &[
                ChartKind::Line,
                ChartKind::Bar,
                ChartKind::Scatter,
                ChartKind::Histogram,
            ],
        }
    }

    pub fn patterns(self) -> &'static [Pattern] {
        match self {
            DashboardProfile::Simple => &[Pattern::RandomWalk, Pattern::Linear, Pattern::SineWave],
            DashboardProfile::Advanced => &[
                Pattern::Noise,
                Pattern::Linear,
                Pattern::SineWave,
                Pattern::Exponential,
            ],
        }
    }

    pub fn show_std_dev(self) -> bool {
        matches!(self, DashboardProfile::Simple)
    }

    pub fn csv_file_name(self) -> &'static str {
        match self {
            DashboardProfile::Simple => "visualization_data.csv",
            DashboardProfile::Advanced => "data.csv",
        }
    }
}

impl fmt::Display for DashboardProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// 24-bit RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn from_hex(hex: &str) -> Result<Self, ParameterError> {
        let invalid = || ParameterError::InvalidColor(hex.to_string());
        let digits = hex.trim().strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Default series blue.
    pub fn default_blue() -> Self {
        Rgb(0x1f, 0x77, 0xb4)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// Current values of every input widget. Replaced as a whole on each change.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    pub chart_kind: ChartKind,
    pub point_count: usize,
    pub pattern: Pattern,
    pub title: String,
    pub color: Option<Rgb>,
}

impl ParameterSet {
    /// Widget defaults for a dashboard profile.
    pub fn defaults_for(profile: DashboardProfile) -> Self {
        Self {
            chart_kind: profile.chart_kinds()[0],
            point_count: DEFAULT_POINTS,
            pattern: profile.patterns()[0],
            title: DEFAULT_TITLE.to_string(),
            color: Some(Rgb::default_blue()),
        }
    }

    /// Reject values the profile's widgets could never produce.
    pub fn validate(&self, profile: DashboardProfile) -> Result<(), ParameterError> {
        if !(MIN_POINTS..=MAX_POINTS).contains(&self.point_count) {
            return Err(ParameterError::PointCountOutOfRange(self.point_count));
        }
        if !profile.chart_kinds().contains(&self.chart_kind) {
            return Err(ParameterError::UnsupportedChartKind {
                kind: self.chart_kind,
                profile,
            });
        }
        if !profile.patterns().contains(&self.pattern) {
            return Err(ParameterError::UnsupportedPattern {
                pattern: self.pattern,
                profile,
            });
        }
        Ok(())
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::defaults_for(DashboardProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_initial_values() {
        let params = ParameterSet::default();
        assert_eq!(params.chart_kind, ChartKind::Line);
        assert_eq!(params.point_count, 30);
        assert_eq!(params.pattern, Pattern::RandomWalk);
        assert_eq!(params.title, "My Chart");
        assert_eq!(params.color.map(Rgb::to_hex).as_deref(), Some(DEFAULT_COLOR_HEX));
    }

    #[test]
    fn advanced_defaults_use_noise_pattern() {
        let params = ParameterSet::defaults_for(DashboardProfile::Advanced);
        assert_eq!(params.pattern, Pattern::Noise);
        assert!(params.validate(DashboardProfile::Advanced).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_point_count() {
        let mut params = ParameterSet::default();
        params.point_count = 9;
        assert_eq!(
            params.validate(DashboardProfile::Simple),
            Err(ParameterError::PointCountOutOfRange(9))
        );
        params.point_count = 101;
        assert!(params.validate(DashboardProfile::Simple).is_err());
        params.point_count = 100;
        assert!(params.validate(DashboardProfile::Simple).is_ok());
    }

    #[test]
    fn validate_rejects_options_outside_profile() {
        let mut params = ParameterSet::default();
        params.chart_kind = ChartKind::Histogram;
        assert!(matches!(
            params.validate(DashboardProfile::Simple),
            Err(ParameterError::UnsupportedChartKind { .. })
        ));

        let mut params = ParameterSet::default();
        params.pattern = Pattern::Exponential;
        assert!(matches!(
            params.validate(DashboardProfile::Simple),
            Err(ParameterError::UnsupportedPattern { .. })
        ));
    }

    #[test]
    fn hex_color_parses_and_renders() {
        let rgb = Rgb::from_hex("#FF8000").unwrap();
        assert_eq!(rgb, Rgb(255, 128, 0));
        assert_eq!(rgb.to_hex(), "#ff8000");
        assert!(Rgb::from_hex("ff8000").is_err());
        assert!(Rgb::from_hex("#ff80").is_err());
        assert!(Rgb::from_hex("#gg8000").is_err());
    }

    #[test]
    fn both_random_patterns_share_a_label() {
        assert_eq!(Pattern::RandomWalk.label(), Pattern::Noise.label());
    }
}
