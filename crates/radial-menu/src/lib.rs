//! Navigation and layout engine for a radial menu: a centre button surrounded
//! by a ring of pie slices, with back-navigation through previously shown rings.
//!
//! The engine is toolkit independent. A host paints slices and forwards
//! centre-button gestures; the engine owns the live ring, the live centre
//! button and the history stacks, and tells the host when to repaint.

pub mod brush;
pub mod button;
pub mod error;
pub mod geometry;
pub mod history;
pub mod macros;
pub mod menu;
pub mod notify;
pub mod pie;
pub mod settings;
pub mod slice;

pub use brush::Brush;
pub use button::{CenterButton, CenterButtonSnapshot, Glyph};
pub use error::MenuError;
pub use geometry::{Point, SliceGeometry};
pub use history::History;
pub use menu::{Activation, Gesture, HandlerId, MenuPage, Navigation, RadialMenu};
pub use notify::{MenuEvent, Notifier, Property, SubscriptionId};
pub use pie::Pie;
pub use settings::{CenterSettings, Settings};
pub use slice::Slice;
