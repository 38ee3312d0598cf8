use derive_more::{AsRef, Deref, Display, From, Into};
use radial_menu::{Glyph, Slice, SliceGeometry};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct MenuId(String);

radial_menu::impl_text_newtype!(MenuId);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Label(String);

radial_menu::impl_text_newtype!(Label);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ExecCommand(String);

radial_menu::impl_text_newtype!(ExecCommand);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Open(MenuId),
    Run(ExecCommand),
    Nothing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: Label,
    pub icon: Glyph,
    pub action: Action,
    pub geometry: Option<SliceGeometry>,
}

impl MenuItem {
    pub fn new(label: impl Into<Label>, icon: impl Into<Glyph>, action: Action) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            action,
            geometry: None,
        }
    }

    pub fn plain(label: impl Into<Label>) -> Self {
        Self::new(label, Glyph::default(), Action::Nothing)
    }
}

impl Slice for MenuItem {
    fn label(&self) -> &str {
        self.label.as_str()
    }

    fn arrange(&mut self, geometry: &SliceGeometry) {
        self.geometry = Some(*geometry);
    }
}
