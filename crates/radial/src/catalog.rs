use crate::config::{Config, MenuConfig, SliceConfig};
use crate::item::{Action, MenuId, MenuItem};
use radial_menu::MenuPage;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Root menu '{0}' is not defined")]
    MissingRoot(MenuId),
    #[error("Slice '{label}' in menu '{menu}' opens unknown menu '{target}'")]
    DanglingSubmenu {
        menu: MenuId,
        label: String,
        target: MenuId,
    },
    #[error("Unknown menu '{0}'")]
    UnknownMenu(MenuId),
}

/// Every menu page reachable from the configuration, resolved up front so a
/// bad submenu reference is reported at load time rather than on tap.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: MenuId,
    pages: HashMap<MenuId, MenuPage<MenuItem>>,
}

impl Catalog {
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        if !config.menus.contains_key(&config.root) {
            return Err(CatalogError::MissingRoot(config.root.clone()));
        }

        let pages = config
            .menus
            .iter()
            .map(|(id, menu)| -> Result<_, CatalogError> {
                Ok((id.clone(), Self::build_page(id, menu, config)?))
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self {
            root: config.root.clone(),
            pages,
        })
    }

    fn build_page(
        id: &MenuId,
        menu: &MenuConfig,
        config: &Config,
    ) -> Result<MenuPage<MenuItem>, CatalogError> {
        let slices = menu
            .slices
            .iter()
            .map(|slice| Self::build_item(id, slice, config))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MenuPage {
            slices,
            center: menu.center.as_ref().map(|c| c.snapshot()),
        })
    }

    fn build_item(
        menu: &MenuId,
        slice: &SliceConfig,
        config: &Config,
    ) -> Result<MenuItem, CatalogError> {
        let action = match (&slice.submenu, &slice.command) {
            (Some(target), command) => {
                if !config.menus.contains_key(target) {
                    return Err(CatalogError::DanglingSubmenu {
                        menu: menu.clone(),
                        label: slice.label.to_string(),
                        target: target.clone(),
                    });
                }
                if command.is_some() {
                    log::warn!(
                        "Slice '{}' has both a submenu and a command; the command is ignored",
                        slice.label
                    );
                }
                Action::Open(target.clone())
            }
            (None, Some(command)) => Action::Run(command.clone()),
            (None, None) => Action::Nothing,
        };

        Ok(MenuItem::new(
            slice.label.clone(),
            slice.icon.clone(),
            action,
        ))
    }

    pub fn root(&self) -> &MenuId {
        &self.root
    }

    pub fn root_page(&self) -> &MenuPage<MenuItem> {
        &self.pages[&self.root]
    }

    pub fn page(&self, id: &MenuId) -> Result<&MenuPage<MenuItem>, CatalogError> {
        self.pages
            .get(id)
            .ok_or_else(|| CatalogError::UnknownMenu(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
