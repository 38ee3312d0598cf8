use crate::error::{MenuError, ensure_finite};
use crate::geometry::SliceGeometry;
use crate::notify::{MenuEvent, Notifier, Property, set_field};
use crate::slice::Slice;

pub const DEFAULT_START_ANGLE: f64 = 22.5;

/// The live ring: ordered slices plus the parameters their layout derives from.
#[derive(Debug)]
pub struct Pie<S: Slice> {
    slices: Vec<S>,
    diameter: f64,
    start_angle: f64,
    hole: f64,
    geometries: Vec<SliceGeometry>,
    notifier: Notifier,
}

impl<S: Slice> Pie<S> {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            slices: Vec::new(),
            diameter: 0.0,
            start_angle: DEFAULT_START_ANGLE,
            hole: 0.0,
            geometries: Vec::new(),
            notifier,
        }
    }

    pub fn slices(&self) -> &[S] {
        &self.slices
    }

    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(Slice::label).collect()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn geometries(&self) -> &[SliceGeometry] {
        &self.geometries
    }

    /// Appends a slice. Duplicates are allowed.
    pub fn add(&mut self, slice: S) {
        self.slices.push(slice);
        self.draw();
    }

    /// Adopts clones of `slices` in order, with a single layout pass.
    pub fn replace_all(&mut self, slices: &[S]) {
        self.slices.clear();
        self.slices.extend_from_slice(slices);
        self.draw();
    }

    pub fn set_diameter(&mut self, diameter: f64) -> Result<(), MenuError> {
        let diameter = ensure_finite("diameter", diameter)?;
        set_field(&self.notifier, &mut self.diameter, diameter, Property::Diameter);
        self.draw();
        Ok(())
    }

    pub fn set_start_angle(&mut self, angle: f64) -> Result<(), MenuError> {
        let angle = ensure_finite("start angle", angle)?;
        set_field(&self.notifier, &mut self.start_angle, angle, Property::StartAngle);
        self.draw();
        Ok(())
    }

    /// Diameter of the centre button, which bounds the inner edge of every slice.
    pub(crate) fn set_hole(&mut self, hole: f64) {
        if self.hole != hole {
            self.hole = hole;
            self.draw();
        }
    }

    /// Recomputes every slice's placement, pushes it down to the slices and
    /// requests one repaint.
    pub fn draw(&mut self) {
        self.geometries =
            SliceGeometry::ring(self.slices.len(), self.diameter, self.hole, self.start_angle);

        for (slice, geometry) in self.slices.iter_mut().zip(&self.geometries) {
            slice.arrange(geometry);
        }

        self.notifier.emit(MenuEvent::Redraw {
            slices: self.slices.len(),
        });
    }
}
