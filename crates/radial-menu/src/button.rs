use crate::brush::Brush;
use crate::notify::{Notifier, Property, set_field};
use derive_more::{AsRef, Deref, Display, From, Into};
use palette::named;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIZE: u32 = 60;
pub const DEFAULT_FONT_SIZE: f64 = 19.0;

/// Icon text shown on a button, typically a single symbol-font character.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Glyph(String);

crate::impl_text_newtype!(Glyph);

/// Frozen copy of the centre button's appearance, kept for back-navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterButtonSnapshot {
    pub border: Brush,
    pub background: Brush,
    pub icon: Glyph,
    pub font_size: f64,
}

impl Default for CenterButtonSnapshot {
    fn default() -> Self {
        Self {
            border: Brush::transparent(),
            background: Brush::opaque(named::WHITESMOKE),
            icon: Glyph::default(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// The live centre button. Every setter raises a change event, but only when
/// the value actually changes.
#[derive(Debug)]
pub struct CenterButton {
    background: Brush,
    border: Brush,
    icon: Glyph,
    size: u32,
    font_size: f64,
    navigation_enabled: bool,
    notifier: Notifier,
}

impl CenterButton {
    pub fn new(notifier: Notifier) -> Self {
        let look = CenterButtonSnapshot::default();
        Self {
            background: look.background,
            border: look.border,
            icon: look.icon,
            size: DEFAULT_SIZE,
            font_size: look.font_size,
            navigation_enabled: true,
            notifier,
        }
    }

    pub fn background(&self) -> Brush {
        self.background
    }

    pub fn border(&self) -> Brush {
        self.border
    }

    pub fn icon(&self) -> &Glyph {
        &self.icon
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn navigation_enabled(&self) -> bool {
        self.navigation_enabled
    }

    pub fn set_background(&mut self, brush: Brush) -> bool {
        set_field(
            &self.notifier,
            &mut self.background,
            brush,
            Property::CenterButtonBackground,
        )
    }

    pub fn set_border(&mut self, brush: Brush) -> bool {
        set_field(
            &self.notifier,
            &mut self.border,
            brush,
            Property::CenterButtonBorder,
        )
    }

    pub fn set_icon(&mut self, icon: impl Into<Glyph>) -> bool {
        set_field(
            &self.notifier,
            &mut self.icon,
            icon.into(),
            Property::CenterButtonIcon,
        )
    }

    pub fn set_size(&mut self, size: u32) -> bool {
        set_field(
            &self.notifier,
            &mut self.size,
            size,
            Property::CenterButtonSize,
        )
    }

    /// Any value is accepted; an identical bit pattern (NaN included) counts
    /// as unchanged.
    pub fn set_font_size(&mut self, font_size: f64) -> bool {
        if self.font_size.to_bits() == font_size.to_bits() {
            return false;
        }
        set_field(
            &self.notifier,
            &mut self.font_size,
            font_size,
            Property::CenterButtonFontSize,
        )
    }

    pub fn set_navigation_enabled(&mut self, enabled: bool) -> bool {
        set_field(
            &self.notifier,
            &mut self.navigation_enabled,
            enabled,
            Property::CenterButtonNavigation,
        )
    }

    /// Copies the four restorable properties. Size and navigation are not part
    /// of a snapshot.
    pub fn snapshot(&self) -> CenterButtonSnapshot {
        CenterButtonSnapshot {
            border: self.border,
            background: self.background,
            icon: self.icon.clone(),
            font_size: self.font_size,
        }
    }

    pub fn apply(&mut self, snapshot: &CenterButtonSnapshot) {
        self.set_border(snapshot.border);
        self.set_background(snapshot.background);
        self.set_icon(snapshot.icon.clone());
        self.set_font_size(snapshot.font_size);
    }
}
