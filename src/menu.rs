//! Menu bar registry and geometry
//!
//! The menu bar is drawn by the renderer, not by the OS, so its layout lives
//! here next to the registry and is shared with mouse handling.

use crate::grid::{LayoutMetrics, Rect, Table};
use crate::messages::{FileMsg, GridMsg, Msg};

/// Top-level menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    File,
    Edit,
}

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItemId {
    New,
    Open,
    Save,
    Quit,
    AddColumn,
    AddRow,
    DeleteColumn,
    DeleteRow,
    EditContents,
}

/// A menu entry definition
#[derive(Debug, Clone)]
pub struct MenuItemDef {
    pub id: MenuItemId,
    pub label: &'static str,
    pub shortcut: Option<&'static str>,
}

/// A top-level menu definition
#[derive(Debug, Clone)]
pub struct MenuDef {
    pub id: MenuId,
    pub label: &'static str,
    pub items: &'static [MenuItemDef],
}

/// Static registry of all menus, in display order
pub static MENUS: &[MenuDef] = &[
    MenuDef {
        id: MenuId::File,
        label: "File",
        items: &[
            MenuItemDef {
                id: MenuItemId::New,
                label: "New",
                shortcut: Some("Ctrl+N"),
            },
            MenuItemDef {
                id: MenuItemId::Open,
                label: "Open",
                shortcut: Some("Ctrl+O"),
            },
            MenuItemDef {
                id: MenuItemId::Save,
                label: "Save",
                shortcut: Some("Ctrl+S"),
            },
            MenuItemDef {
                id: MenuItemId::Quit,
                label: "Quit",
                shortcut: Some("Ctrl+Q"),
            },
        ],
    },
    MenuDef {
        id: MenuId::Edit,
        label: "Edit",
        items: &[
            MenuItemDef {
                id: MenuItemId::AddColumn,
                label: "Add column",
                shortcut: Some("Ctrl+Alt+Right"),
            },
            MenuItemDef {
                id: MenuItemId::AddRow,
                label: "Add row",
                shortcut: Some("Ctrl+Alt+Down"),
            },
            MenuItemDef {
                id: MenuItemId::DeleteColumn,
                label: "Delete column",
                shortcut: Some("Ctrl+Alt+Left"),
            },
            MenuItemDef {
                id: MenuItemId::DeleteRow,
                label: "Delete row",
                shortcut: Some("Ctrl+Alt+Up"),
            },
            MenuItemDef {
                id: MenuItemId::EditContents,
                label: "Edit contents",
                shortcut: Some("Ctrl+E"),
            },
        ],
    },
];

impl MenuId {
    pub fn def(self) -> &'static MenuDef {
        match self {
            MenuId::File => &MENUS[0],
            MenuId::Edit => &MENUS[1],
        }
    }
}

impl MenuItemId {
    /// Message sent when the item is activated
    pub fn to_msg(self) -> Msg {
        match self {
            MenuItemId::New => Msg::File(FileMsg::New),
            MenuItemId::Open => Msg::File(FileMsg::Open),
            MenuItemId::Save => Msg::File(FileMsg::Save),
            MenuItemId::Quit => Msg::App(crate::messages::AppMsg::Quit),
            MenuItemId::AddColumn => Msg::Grid(GridMsg::AddColumn),
            MenuItemId::AddRow => Msg::Grid(GridMsg::AddRow),
            MenuItemId::DeleteColumn => Msg::Grid(GridMsg::DeleteColumn),
            MenuItemId::DeleteRow => Msg::Grid(GridMsg::DeleteRow),
            MenuItemId::EditContents => Msg::Grid(GridMsg::ToggleHeaderEdit),
        }
    }

    /// Whether the item can run against the current table
    pub fn is_enabled(self, table: &Table) -> bool {
        match self {
            MenuItemId::AddColumn
            | MenuItemId::AddRow
            | MenuItemId::DeleteColumn
            | MenuItemId::DeleteRow => !table.is_folded(),
            _ => true,
        }
    }
}

/// Horizontal padding around menu titles and items
const TITLE_PADDING: usize = 10;
/// Gap between an item label and its shortcut
const SHORTCUT_GAP: usize = 24;

/// Geometry of the menu bar and its drop-downs
#[derive(Debug, Clone, PartialEq)]
pub struct MenuBarLayout {
    /// Title rectangle per menu, in `MENUS` order
    pub titles: Vec<(MenuId, Rect)>,
    pub bar_height: usize,
    pub item_height: usize,
    char_width: f32,
}

impl MenuBarLayout {
    pub fn calculate(metrics: &LayoutMetrics) -> Self {
        let bar_height = metrics.menu_bar_height();
        let mut titles = Vec::with_capacity(MENUS.len());
        let mut x = 0;
        for menu in MENUS {
            let width = text_width(menu.label, metrics.char_width) + TITLE_PADDING * 2;
            titles.push((menu.id, Rect::new(x, 0, width, bar_height)));
            x += width;
        }
        Self {
            titles,
            bar_height,
            item_height: metrics.row_height(),
            char_width: metrics.char_width,
        }
    }

    /// Menu title under the pointer
    pub fn title_at(&self, x: f64, y: f64) -> Option<MenuId> {
        self.titles
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| *id)
    }

    pub fn title_rect(&self, menu: MenuId) -> Option<Rect> {
        self.titles
            .iter()
            .find(|(id, _)| *id == menu)
            .map(|(_, rect)| *rect)
    }

    /// Drop-down rectangle below a title
    pub fn dropdown_rect(&self, menu: MenuId) -> Option<Rect> {
        let title = self.title_rect(menu)?;
        let def = menu.def();
        let width = def
            .items
            .iter()
            .map(|item| {
                let shortcut = item
                    .shortcut
                    .map(|s| text_width(s, self.char_width) + SHORTCUT_GAP)
                    .unwrap_or(0);
                text_width(item.label, self.char_width) + shortcut
            })
            .max()
            .unwrap_or(0)
            + TITLE_PADDING * 2;
        Some(Rect::new(
            title.x,
            self.bar_height,
            width,
            def.items.len() * self.item_height,
        ))
    }

    /// Rectangle of each item in an open drop-down
    pub fn item_rects(&self, menu: MenuId) -> Vec<(MenuItemId, Rect)> {
        let Some(dropdown) = self.dropdown_rect(menu) else {
            return Vec::new();
        };
        menu.def()
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let rect = Rect::new(
                    dropdown.x,
                    dropdown.y + i * self.item_height,
                    dropdown.width,
                    self.item_height,
                );
                (item.id, rect)
            })
            .collect()
    }

    /// Item under the pointer in an open drop-down
    pub fn item_at(&self, menu: MenuId, x: f64, y: f64) -> Option<MenuItemId> {
        self.item_rects(menu)
            .into_iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| id)
    }

    /// Whether `(x, y)` falls on the bar or the open drop-down
    pub fn contains(&self, open: Option<MenuId>, x: f64, y: f64) -> bool {
        if y >= 0.0 && y < self.bar_height as f64 {
            return true;
        }
        open.and_then(|menu| self.dropdown_rect(menu))
            .is_some_and(|rect| rect.contains(x, y))
    }
}

fn text_width(text: &str, char_width: f32) -> usize {
    (text.chars().count() as f32 * char_width).ceil() as usize
}
