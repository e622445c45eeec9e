//! Charts module - encoding, presentation and rendering

mod encoding;
mod plotter;
mod presenter;
mod renderer;

pub use encoding::{histogram, plasma, ColoredPoint, Encoding, HistogramBin, HISTOGRAM_BINS};
pub use plotter::ChartPlotter;
pub use presenter::{Presenter, PresenterError, RenderOutput};
pub use renderer::{RenderError, StaticChartRenderer};
