//! Menu bar update functions

use crate::commands::Cmd;
use crate::messages::MenuMsg;
use crate::model::AppModel;

/// Handle menu messages
pub fn update_menu(model: &mut AppModel, msg: MenuMsg) -> Option<Cmd> {
    match msg {
        MenuMsg::Open(menu) => {
            if model.ui.menu.open == Some(menu) {
                model.ui.close_menu();
            } else {
                model.ui.menu.open = Some(menu);
                model.ui.menu.hovered = None;
            }
            Some(Cmd::Redraw)
        }
        MenuMsg::Close => {
            if !model.ui.is_menu_open() {
                return None;
            }
            model.ui.close_menu();
            Some(Cmd::Redraw)
        }
        MenuMsg::Hover(item) => {
            if model.ui.menu.hovered == item {
                return None;
            }
            model.ui.menu.hovered = item;
            Some(Cmd::Redraw)
        }
        MenuMsg::Activate(item) => {
            model.ui.close_menu();
            if !item.is_enabled(&model.sheet.table) {
                tracing::debug!(?item, "menu item disabled");
                let status = model.locale().strings().structure_locked;
                model.ui.set_status(status);
                return Some(Cmd::Redraw);
            }
            let cmd = super::update(model, item.to_msg());
            Some(Cmd::batch(vec![Cmd::Redraw, cmd.unwrap_or_default()]))
        }
    }
}
