//! Drawn menu bar: opening, hovering and running items

mod common;

use common::{leaves, people, send};
use semicell::menu::{MenuBarLayout, MenuId, MenuItemId, MENUS};
use semicell::messages::{GridMsg, MenuMsg, Msg};
use semicell::Cmd;

fn activate(model: &mut semicell::AppModel, item: MenuItemId) -> Vec<Cmd> {
    leaves(send(model, Msg::Menu(MenuMsg::Activate(item))))
}

#[test]
fn test_open_toggles_same_menu() {
    let mut model = people();
    send(&mut model, Msg::Menu(MenuMsg::Open(MenuId::File)));
    assert_eq!(model.ui.menu.open, Some(MenuId::File));
    send(&mut model, Msg::Menu(MenuMsg::Open(MenuId::File)));
    assert_eq!(model.ui.menu.open, None);
}

#[test]
fn test_switching_menus_clears_hover() {
    let mut model = people();
    send(&mut model, Msg::Menu(MenuMsg::Open(MenuId::File)));
    send(&mut model, Msg::Menu(MenuMsg::Hover(Some(MenuItemId::Save))));
    send(&mut model, Msg::Menu(MenuMsg::Open(MenuId::Edit)));

    assert_eq!(model.ui.menu.open, Some(MenuId::Edit));
    assert_eq!(model.ui.menu.hovered, None);
}

#[test]
fn test_repeated_hover_does_not_redraw() {
    let mut model = people();
    send(&mut model, Msg::Menu(MenuMsg::Open(MenuId::Edit)));
    assert!(send(&mut model, Msg::Menu(MenuMsg::Hover(Some(MenuItemId::AddRow)))).is_some());
    assert!(send(&mut model, Msg::Menu(MenuMsg::Hover(Some(MenuItemId::AddRow)))).is_none());
}

#[test]
fn test_close_when_closed_is_a_no_op() {
    let mut model = people();
    assert!(send(&mut model, Msg::Menu(MenuMsg::Close)).is_none());
}

#[test]
fn test_activate_runs_item_and_closes_menu() {
    let mut model = people();
    send(&mut model, Msg::Menu(MenuMsg::Open(MenuId::Edit)));
    activate(&mut model, MenuItemId::AddColumn);

    assert_eq!(model.ui.menu.open, None);
    assert_eq!(model.sheet.table.column_count(), 4);
}

#[test]
fn test_file_items_map_to_commands() {
    let mut model = people();
    let open = activate(&mut model, MenuItemId::Open);
    assert!(open
        .iter()
        .any(|c| matches!(c, Cmd::ShowOpenFileDialog { .. })));

    let save = activate(&mut model, MenuItemId::Save);
    assert!(save
        .iter()
        .any(|c| matches!(c, Cmd::ShowSaveFileDialog { .. })));

    let quit = activate(&mut model, MenuItemId::Quit);
    assert!(quit.contains(&Cmd::Quit));
}

#[test]
fn test_edit_contents_item_toggles_header_mode() {
    let mut model = people();
    activate(&mut model, MenuItemId::EditContents);
    assert!(model.sheet.table.is_folded());
    activate(&mut model, MenuItemId::EditContents);
    assert!(!model.sheet.table.is_folded());
}

#[test]
fn test_structure_items_disabled_while_folded() {
    let mut model = people();
    send(&mut model, Msg::Grid(GridMsg::ToggleHeaderEdit));

    for item in [
        MenuItemId::AddColumn,
        MenuItemId::AddRow,
        MenuItemId::DeleteColumn,
        MenuItemId::DeleteRow,
    ] {
        assert!(!item.is_enabled(&model.sheet.table));
        activate(&mut model, item);
    }
    assert_eq!(model.sheet.table.row_count(), 4);
    assert_eq!(model.sheet.table.column_count(), 3);
    assert!(MenuItemId::EditContents.is_enabled(&model.sheet.table));
}

#[test]
fn test_every_item_is_hit_at_its_own_rect() {
    let model = people();
    let layout: MenuBarLayout = model.menu_layout();

    for menu in MENUS {
        let title = layout.title_rect(menu.id).unwrap();
        let (cx, cy) = center(title);
        assert_eq!(layout.title_at(cx, cy), Some(menu.id));

        let dropdown = layout.dropdown_rect(menu.id).unwrap();
        let items = layout.item_rects(menu.id);
        assert_eq!(items.len(), menu.items.len());
        for (id, rect) in items {
            let (x, y) = center(rect);
            assert!(dropdown.contains(x, y));
            assert_eq!(layout.item_at(menu.id, x, y), Some(id));
            assert!(layout.contains(Some(menu.id), x, y));
        }
    }
}

#[test]
fn test_titles_sit_side_by_side_in_bar() {
    let model = people();
    let layout = model.menu_layout();
    let file = layout.title_rect(MenuId::File).unwrap();
    let edit = layout.title_rect(MenuId::Edit).unwrap();

    assert_eq!(file.x, 0);
    assert_eq!(edit.x, file.x + file.width);
    assert_eq!(file.height, layout.bar_height);
    assert_eq!(layout.bar_height, model.table_layout().heading_y.unwrap());
}

fn center(rect: semicell::grid::Rect) -> (f64, f64) {
    (
        (rect.x + rect.width / 2) as f64,
        (rect.y + rect.height / 2) as f64,
    )
}
