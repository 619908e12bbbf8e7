//! Core of a circular slider: value/angle mapping, thumb hit testing and the drag state machine.
//! Drawing is left to an implementation of [`Renderer`].

pub mod angle;
pub mod attributes;
pub mod control;
pub mod error;
pub mod geometry;
pub mod range;
pub mod render;
pub mod style;
pub mod tracker;

pub use angle::{AngleMapper, AngularSpan};
pub use attributes::Attributes;
pub use control::{Control, ValueObserver};
pub use error::ControlError;
pub use geometry::{Bounds, GeometryContext, Point};
pub use range::ValueRange;
pub use render::{DrawRequest, Renderer, RingSlice, Shadow, ThumbRequest};
pub use style::{HandleType, Style, Tint};
pub use tracker::{DragSession, DragTracker, Grab, TrackerState};
