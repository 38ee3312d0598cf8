use crate::geometry::SliceGeometry;
use std::fmt::Debug;

/// A selectable wedge of the ring.
///
/// Slices are plain values: a ring owns its slices and a history entry owns
/// its own clones, so restoring a ring never observes later edits to the live
/// one. Painting is left to the host; the engine only hands each slice its
/// placement whenever the layout is recomputed.
pub trait Slice: Clone + Debug {
    /// Text identifying the slice, used for logging and equality in tests.
    fn label(&self) -> &str;

    /// Receives fresh placement after any change to the ring.
    fn arrange(&mut self, geometry: &SliceGeometry);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Wedge {
        pub name: String,
        pub geometry: Option<SliceGeometry>,
    }

    impl Slice for Wedge {
        fn label(&self) -> &str {
            &self.name
        }

        fn arrange(&mut self, geometry: &SliceGeometry) {
            self.geometry = Some(*geometry);
        }
    }

    pub fn wedges(names: &[&str]) -> Vec<Wedge> {
        names
            .iter()
            .map(|n| Wedge {
                name: n.to_string(),
                geometry: None,
            })
            .collect()
    }
}
