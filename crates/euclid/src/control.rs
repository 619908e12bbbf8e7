use crate::angle::{AngleMapper, AngularSpan};
use crate::attributes::Attributes;
use crate::error::ControlError;
use crate::geometry::{Bounds, GeometryContext, Point};
use crate::range::ValueRange;
use crate::render::{DrawRequest, Renderer};
use crate::style::Style;
use crate::tracker::{DragTracker, Grab};
use std::fmt;

pub type ValueObserver = Box<dyn FnMut(f64)>;

/// A circular slider: a value on a ring-shaped track, moved by dragging or tapping.
///
/// The control never draws by itself. State-affecting writes raise a redraw flag that the host
/// collects with [`Control::take_redraw`], and [`Control::draw_request`] describes the frame.
pub struct Control {
    range: ValueRange,
    span: AngularSpan,
    style: Style,
    bounds: Bounds,
    value: f64,
    tracker: DragTracker,
    observers: Vec<ValueObserver>,
    needs_redraw: bool,
}

impl Default for Control {
    fn default() -> Self {
        Self::new(Bounds::default())
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("range", &self.range)
            .field("span", &self.span)
            .field("bounds", &self.bounds)
            .field("value", &self.value)
            .field("tracker", &self.tracker)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Control {
    pub fn new(bounds: Bounds) -> Self {
        let range = ValueRange::default();
        Self {
            range,
            span: AngularSpan::default(),
            style: Style::default(),
            bounds,
            value: range.midpoint(),
            tracker: DragTracker::new(),
            observers: Vec::new(),
            needs_redraw: true,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Writes the clamped value. Returns whether the observable value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        let value = self.range.clamp(value);
        if value == self.value {
            return false;
        }

        self.value = value;
        self.needs_redraw = true;
        for observer in &mut self.observers {
            observer(value);
        }
        true
    }

    pub fn value_range(&self) -> ValueRange {
        self.range
    }

    pub fn value_minimum(&self) -> f64 {
        self.range.minimum()
    }

    pub fn value_maximum(&self) -> f64 {
        self.range.maximum()
    }

    pub fn set_value_minimum(&mut self, minimum: f64) -> Result<(), ControlError> {
        self.set_value_range(minimum, self.range.maximum())
    }

    pub fn set_value_maximum(&mut self, maximum: f64) -> Result<(), ControlError> {
        self.set_value_range(self.range.minimum(), maximum)
    }

    /// Replaces both bounds at once, for moves that would pass through an empty range when done
    /// one bound at a time. The current value is re-clamped.
    pub fn set_value_range(&mut self, minimum: f64, maximum: f64) -> Result<(), ControlError> {
        self.set_range_and_value(minimum, maximum, self.value)?;
        Ok(())
    }

    /// Replaces the bounds and writes `value` clamped to them, notifying observers at most once.
    /// Returns whether the observable value changed.
    pub fn set_range_and_value(
        &mut self,
        minimum: f64,
        maximum: f64,
        value: f64,
    ) -> Result<bool, ControlError> {
        self.range = ValueRange::new(minimum, maximum)?;
        self.needs_redraw = true;
        Ok(self.set_value(value))
    }

    pub fn span(&self) -> AngularSpan {
        self.span
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.needs_redraw = true;
        }
    }

    /// Applies a sparse batch of attributes. Fields the batch leaves unset keep their current
    /// setting; an invalid batch is rejected as a whole.
    pub fn configure(&mut self, attributes: &Attributes) -> Result<(), ControlError> {
        let (style, span) = attributes.resolve(&self.style, self.span)?;

        if !style.has_thumb && self.tracker.is_tracking() {
            log::debug!("thumb removed mid-drag, ending drag");
            self.tracker.end();
        }

        self.style = style;
        self.span = span;
        self.needs_redraw = true;
        Ok(())
    }

    pub fn mapper(&self) -> AngleMapper {
        AngleMapper::new(self.range, self.span)
    }

    pub fn geometry(&self) -> GeometryContext {
        GeometryContext::compute(
            self.bounds,
            self.mapper().value_to_draw_angle(self.value),
            self.style.thumb_radius,
            self.style.track_width,
            self.style.has_thumb,
        )
    }

    pub fn draw_request(&self) -> DrawRequest {
        DrawRequest::new(&self.mapper(), &self.geometry(), &self.style)
    }

    /// Draws the current frame and clears the redraw flag.
    pub fn render<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.render(&self.draw_request())?;
        self.needs_redraw = false;
        Ok(())
    }

    /// Registers a callback run once for every change of the observable value.
    pub fn subscribe(&mut self, observer: impl FnMut(f64) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns and clears the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Drag accumulator of the active drag, if any. May lie outside the value range.
    pub fn pseudo_value(&self) -> Option<f64> {
        self.tracker.pseudo_value()
    }

    /// Starts a drag. Returns whether the control claims the pointer. A control without a thumb
    /// is read-only and never does.
    pub fn pointer_down(&mut self, position: Point) -> bool {
        if !self.style.has_thumb {
            return false;
        }

        let mapper = self.mapper();
        let geometry = self.geometry();
        match self
            .tracker
            .begin(position, self.value, &mapper, &geometry, self.style.thumb_radius)
        {
            Some(Grab::Track(value)) => {
                self.set_value(value);
                self.needs_redraw = true;
                true
            }
            Some(Grab::Thumb) => {
                self.needs_redraw = true;
                true
            }
            None => false,
        }
    }

    pub fn pointer_move(&mut self, position: Point) {
        if !self.style.has_thumb {
            return;
        }

        let mapper = self.mapper();
        let center = self.bounds.center();
        if let Some(value) = self.tracker.update(position, &mapper, center) {
            self.set_value(value);
        }
    }

    pub fn pointer_up(&mut self) {
        self.tracker.end();
    }

    pub fn pointer_cancel(&mut self) {
        self.tracker.end();
    }
}
