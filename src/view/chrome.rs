//! Menu bar, drop-down and status bar

use semicell::grid::LayoutMetrics;
use semicell::menu::{MenuBarLayout, MenuId, MENUS};
use semicell::model::AppModel;

use super::frame::{Frame, TextPainter};

/// Horizontal inset of text inside menu titles, items and the status bar
const TEXT_INSET: usize = 10;

pub fn render_menu_bar(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    layout: &MenuBarLayout,
) {
    let theme = &model.theme.menu_bar;
    let bg = theme.background.to_argb_u32();
    let fg = theme.foreground.to_argb_u32();
    let hover = theme.hover_background.to_argb_u32();

    let width = frame.width();
    frame.fill_rect_px(0, 0, width, layout.bar_height, bg);
    frame.fill_rect_px(
        0,
        layout.bar_height.saturating_sub(1),
        width,
        1,
        theme.border.to_argb_u32(),
    );

    let text_y = layout.bar_height.saturating_sub(painter.line_height()) / 2;
    for (menu, def) in layout.titles.iter().zip(MENUS) {
        let (id, rect) = *menu;
        if model.ui.menu.open == Some(id) {
            frame.fill_rect(rect, hover);
        }
        painter.draw(frame, rect.x + TEXT_INSET, text_y, def.label, fg);
    }
}

/// Draw the open drop-down on top of everything else
pub fn render_dropdown(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    layout: &MenuBarLayout,
    menu: MenuId,
) {
    let Some(dropdown) = layout.dropdown_rect(menu) else {
        return;
    };
    let theme = &model.theme.menu_bar;
    let fg = theme.foreground.to_argb_u32();
    let disabled = theme.disabled_foreground.to_argb_u32();

    frame.fill_rect(dropdown, theme.dropdown_background.to_argb_u32());

    for ((id, rect), item) in layout.item_rects(menu).into_iter().zip(menu.def().items) {
        let enabled = id.is_enabled(&model.sheet.table);
        if enabled && model.ui.menu.hovered == Some(id) {
            frame.fill_rect(rect, theme.hover_background.to_argb_u32());
        }
        let color = if enabled { fg } else { disabled };
        let text_y = rect.y + rect.height.saturating_sub(painter.line_height()) / 2;
        painter.draw(frame, rect.x + TEXT_INSET, text_y, item.label, color);

        if let Some(shortcut) = item.shortcut {
            let w = painter.text_width(shortcut);
            let x = (rect.x + rect.width).saturating_sub(w + TEXT_INSET);
            painter.draw(frame, x, text_y, shortcut, color);
        }
    }

    frame.stroke_rect(dropdown, 1, theme.border.to_argb_u32());
}

pub fn render_status_bar(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    metrics: &LayoutMetrics,
) {
    let theme = &model.theme.status_bar;
    let fg = theme.foreground.to_argb_u32();
    let rect = metrics.status_bar_rect();

    frame.fill_rect(rect, theme.background.to_argb_u32());
    let text_y = rect.y + rect.height.saturating_sub(painter.line_height()) / 2;

    let summary = model.status_summary();
    painter.draw(frame, rect.x + TEXT_INSET, text_y, &summary, fg);

    let message = &model.ui.status_message;
    if !message.is_empty() {
        let left_end = TEXT_INSET * 3 + painter.text_width(&summary);
        let w = painter.text_width(message);
        let x = rect.width.saturating_sub(w + TEXT_INSET).max(left_end);
        painter.draw(frame, x, text_y, message, fg);
    }
}
