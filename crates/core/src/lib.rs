pub mod error;
pub mod handle;
pub mod status;

pub use error::{ChartError, Result};
pub use handle::{Axis, AxisRange, ChartHandle, ChartType, Geometry, UpdateMode};
pub use status::{SkipReason, UpdateStatus};
