//! Table rendering: gutter, heading row, cells, selection and the cell editor

use semicell::grid::{Rect, TableLayout};
use semicell::model::AppModel;
use semicell::update::{visible_edit_chars, EDIT_PADDING_PX};

use super::frame::{Frame, TextPainter};

/// Horizontal padding kept free on both sides of cell text
const CELL_PADDING_PX: usize = 4;

/// Shorten `s` to `max_chars`, marking the cut with an ellipsis
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Draw `text` centered inside `rect`, truncated to fit
fn draw_centered(frame: &mut Frame, painter: &mut TextPainter, rect: Rect, text: &str, color: u32) {
    let inner = rect.width.saturating_sub(CELL_PADDING_PX * 2);
    let max_chars = (inner as f32 / painter.char_width().max(1.0)).floor() as usize;
    let display = truncate_text(text, max_chars);
    if display.is_empty() {
        return;
    }
    let text_w = painter.text_width(&display);
    let x = rect.x + rect.width.saturating_sub(text_w) / 2;
    let y = rect.y + rect.height.saturating_sub(painter.line_height()) / 2;
    painter.draw(frame, x, y, &display, color);
}

pub fn render_table(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    layout: &TableLayout,
) {
    let theme = &model.theme;
    let table = &model.sheet.table;
    let width = frame.width();

    let grid_line = theme.table.grid_line.to_argb_u32();
    let heading_bg = theme.table.heading_background.to_argb_u32();
    let heading_fg = theme.table.heading_foreground.to_argb_u32();
    let fg = theme.table.foreground.to_argb_u32();
    let gutter_bg = theme.gutter.background.to_argb_u32();
    let gutter_fg = theme.gutter.foreground.to_argb_u32();
    let gutter_border = theme.gutter.border_color.to_argb_u32();

    let top = layout.heading_y.unwrap_or(layout.data_y);
    let bottom = layout.data_bottom;
    frame.set_clip(Rect::new(0, top, width, bottom.saturating_sub(top)));

    // Gutter
    frame.fill_rect_px(0, top, layout.gutter_width, bottom - top, gutter_bg);
    frame.fill_rect_px(
        layout.gutter_width.saturating_sub(1),
        top,
        1,
        bottom - top,
        gutter_border,
    );
    for &(row, y) in &layout.visible_rows {
        let label = (row + 1).to_string();
        let text_w = painter.text_width(&label);
        let x = layout.gutter_width.saturating_sub(text_w + 6);
        let ty = y + layout.row_height.saturating_sub(painter.line_height()) / 2;
        painter.draw(frame, x, ty, &label, gutter_fg);
    }

    let grid_right = layout.grid_right();

    // Heading row
    if let Some(hy) = layout.heading_y {
        frame.fill_rect_px(
            layout.grid_x,
            hy,
            grid_right - layout.grid_x,
            layout.row_height,
            heading_bg,
        );
        for &(col, _) in &layout.visible_columns {
            if let (Some(rect), Some(title)) = (layout.heading_rect(col), table.headings().get(col))
            {
                draw_centered(frame, painter, rect, title, heading_fg);
            }
        }
    }

    // Selection background goes under the text
    let selection_rect = model
        .sheet
        .selection
        .and_then(|sel| layout.cell_rect(sel));
    if let Some(rect) = selection_rect {
        frame.fill_rect(rect, theme.table.selection_background.to_argb_u32());
    }

    for &(row, y) in &layout.visible_rows {
        for &(col, x) in &layout.visible_columns {
            let rect = Rect::new(x, y, layout.column_width, layout.row_height);
            draw_centered(frame, painter, rect, table.cell(row, col), fg);
        }
    }

    // Grid lines
    let rows_bottom = layout
        .visible_rows
        .last()
        .map(|&(_, y)| y + layout.row_height)
        .unwrap_or(layout.data_y)
        .min(bottom);
    for &(_, y) in &layout.visible_rows {
        frame.fill_rect_px(layout.grid_x, y, grid_right - layout.grid_x, 1, grid_line);
    }
    frame.fill_rect_px(
        layout.grid_x,
        rows_bottom.saturating_sub(1),
        grid_right - layout.grid_x,
        1,
        grid_line,
    );
    if let Some(hy) = layout.heading_y {
        frame.fill_rect_px(layout.grid_x, hy, grid_right - layout.grid_x, 1, grid_line);
    }
    for &(_, x) in &layout.visible_columns {
        frame.fill_rect_px(x, top, 1, rows_bottom - top, grid_line);
    }
    frame.fill_rect_px(grid_right.saturating_sub(1), top, 1, rows_bottom - top, grid_line);

    if let Some(rect) = selection_rect {
        frame.stroke_rect(rect, 2, theme.table.selection_border.to_argb_u32());
    }

    render_cell_editor(frame, painter, model, layout);
    frame.clear_clip();
}

/// Draw the edit overlay exactly over the cell being edited
fn render_cell_editor(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    layout: &TableLayout,
) {
    let Some(edit) = &model.sheet.editing else {
        return;
    };
    let Some(rect) = layout.cell_rect(edit.position) else {
        return;
    };
    let theme = &model.theme.cell_editor;

    frame.fill_rect(rect, theme.background.to_argb_u32());
    frame.stroke_rect(rect, 1, theme.border.to_argb_u32());

    let char_width = painter.char_width();
    let text_x = rect.x + EDIT_PADDING_PX;
    let text_y = rect.y + rect.height.saturating_sub(painter.line_height()) / 2;
    let visible = visible_edit_chars(model).max(1);
    let shown: String = edit.text.chars().skip(edit.scroll_x).take(visible).collect();

    frame.set_clip(Rect::new(
        rect.x + 1,
        rect.y + 1,
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    ));
    painter.draw(frame, text_x, text_y, &shown, theme.foreground.to_argb_u32());

    if model.ui.cursor_visible {
        let caret_col = edit.caret.saturating_sub(edit.scroll_x);
        let caret_x = text_x + (caret_col as f32 * char_width).round() as usize;
        frame.fill_rect_px(
            caret_x,
            text_y,
            2,
            painter.line_height(),
            theme.cursor_color.to_argb_u32(),
        );
    }
}
