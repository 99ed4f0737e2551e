pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::ChartStyle;
