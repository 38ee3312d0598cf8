use crate::item::{Action, MenuItem};
use radial_menu::{CenterButton, RadialMenu, SliceGeometry};
use std::fmt::Write;

struct SliceRenderer<'a> {
    index: usize,
    item: &'a MenuItem,
}

impl<'a> SliceRenderer<'a> {
    fn new(index: usize, item: &'a MenuItem) -> Self {
        Self { index, item }
    }

    fn draw(&self, out: &mut String) -> std::fmt::Result {
        let kind = SliceKind::resolve(self.item);
        write!(
            out,
            "  [{}] {} {:<16} {}",
            self.index,
            kind.marker(),
            self.item.label,
            self.item.icon
        )?;
        if let Some(geometry) = &self.item.geometry {
            Self::draw_geometry(out, geometry)?;
        }
        writeln!(out)
    }

    fn draw_geometry(out: &mut String, g: &SliceGeometry) -> std::fmt::Result {
        write!(
            out,
            "  {:>7.2}°..{:>7.2}°  r {:.1}..{:.1}  at ({:.1}, {:.1})",
            g.start_angle,
            g.end_angle(),
            g.inner_radius,
            g.outer_radius,
            g.anchor.x,
            g.anchor.y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SliceKind {
    Submenu,
    Command,
    Inert,
}

impl SliceKind {
    fn resolve(item: &MenuItem) -> Self {
        match item.action {
            Action::Open(_) => Self::Submenu,
            Action::Run(_) => Self::Command,
            Action::Nothing => Self::Inert,
        }
    }

    fn marker(&self) -> char {
        match self {
            Self::Submenu => '▸',
            Self::Command => '$',
            Self::Inert => '·',
        }
    }
}

fn draw_center(out: &mut String, button: &CenterButton, depth: (usize, usize)) -> std::fmt::Result {
    writeln!(
        out,
        "center {:?} fill {} border {} size {} font {} nav {} history {}/{}",
        button.icon().as_str(),
        button.background(),
        button.border(),
        button.size(),
        button.font_size(),
        if button.navigation_enabled() { "on" } else { "off" },
        depth.0,
        depth.1
    )
}

/// Text rendering of the whole menu: the centre button line followed by one
/// line per slice in ring order.
pub fn draw(menu: &RadialMenu<MenuItem>) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let pie = menu.pie();
    writeln!(
        out,
        "ring ⌀{} from {}° with {} slices",
        pie.diameter(),
        pie.start_angle(),
        pie.len()
    )?;
    draw_center(&mut out, menu.button(), menu.depth())?;

    for (i, item) in pie.slices().iter().enumerate() {
        SliceRenderer::new(i, item).draw(&mut out)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ExecCommand, MenuId};

    #[test]
    fn test_draw_lists_slices_in_order() {
        let mut menu = RadialMenu::new();
        menu.set_diameter(200.0).unwrap();
        menu.set_start_angle(0.0).unwrap();
        menu.add_slice(MenuItem::new(
            "Open",
            "+",
            Action::Open(MenuId::from("sub")),
        ));
        menu.add_slice(MenuItem::new(
            "Run",
            "!",
            Action::Run(ExecCommand::from("true")),
        ));

        let text = draw(&menu).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "ring ⌀200 from 0° with 2 slices");
        assert!(lines[1].contains("nav on history 0/0"));
        assert!(lines[2].contains("[0] ▸ Open"));
        assert!(lines[2].contains("0.00°.. 180.00°"));
        assert!(lines[3].contains("[1] $ Run"));
        assert!(lines[3].contains("r 30.0..100.0"));
    }
}
