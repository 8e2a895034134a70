//! Table geometry: what is drawn where is what gets hit

mod common;

use common::{pos, send, test_model};
use semicell::messages::{AppMsg, GridMsg, Msg};

fn tall_model(rows: usize) -> semicell::AppModel {
    let values: Vec<String> = (0..rows).map(|i| i.to_string()).collect();
    let refs: Vec<[&str; 2]> = values.iter().map(|v| [v.as_str(), "x"]).collect();
    let rows: Vec<&[&str]> = refs.iter().map(|r| &r[..]).collect();
    test_model(&["n", "x"], &rows)
}

#[test]
fn test_fixed_geometry_at_default_size() {
    let model = test_model(&["a"], &[&["1"]]);
    let layout = model.table_layout();

    assert_eq!(layout.heading_y, Some(24));
    assert_eq!(layout.row_height, 22);
    assert_eq!(layout.data_y, 46);
    assert_eq!(layout.data_bottom, 376);
    assert_eq!(layout.full_rows, 15);
    assert_eq!(layout.column_width, 100);
}

#[test]
fn test_every_visible_cell_hits_itself() {
    let model = tall_model(40);
    let layout = model.table_layout();

    for &(row, _) in &layout.visible_rows {
        for &(col, _) in &layout.visible_columns {
            let rect = layout.cell_rect(pos(row, col)).unwrap();
            let x = (rect.x + rect.width / 2) as f64;
            let y = (rect.y + rect.height / 2) as f64;
            assert_eq!(layout.cell_at(x, y), Some(pos(row, col)));
            assert_eq!(layout.heading_at(x, y), None);
        }
    }
}

#[test]
fn test_heading_hits_match_heading_rects() {
    let model = test_model(&["a", "b", "c"], &[]);
    let layout = model.table_layout();
    for col in 0..3 {
        let rect = layout.heading_rect(col).unwrap();
        assert_eq!(
            layout.heading_at((rect.x + 1) as f64, (rect.y + 1) as f64),
            Some(col)
        );
        assert_eq!(layout.cell_at((rect.x + 1) as f64, (rect.y + 1) as f64), None);
    }
}

#[test]
fn test_gutter_and_empty_space_hit_nothing() {
    let model = test_model(&["a"], &[&["1"]]);
    let layout = model.table_layout();

    assert_eq!(layout.cell_at(2.0, 50.0), None);
    // Past the only column
    let right = layout.grid_right() as f64;
    assert_eq!(layout.cell_at(right + 5.0, 50.0), None);
    // Below the only row
    assert_eq!(layout.cell_at(40.0, 200.0), None);
}

#[test]
fn test_scrolled_layout_starts_at_top_row() {
    let mut model = tall_model(40);
    send(&mut model, Msg::Grid(GridMsg::Scroll(10)));
    let layout = model.table_layout();

    assert_eq!(layout.visible_rows.first().map(|&(row, _)| row), Some(10));
    let rect = layout.cell_rect(pos(10, 0)).unwrap();
    assert_eq!(rect.y, layout.data_y);
    assert_eq!(layout.cell_rect(pos(0, 0)), None);
}

#[test]
fn test_scroll_clamps_to_last_page() {
    let mut model = tall_model(40);
    send(&mut model, Msg::Grid(GridMsg::Scroll(1000)));
    let visible = model.sheet.viewport.visible_rows;
    assert_eq!(model.sheet.viewport.top_row, 40 - visible);

    send(&mut model, Msg::Grid(GridMsg::Scroll(-1000)));
    assert_eq!(model.sheet.viewport.top_row, 0);
}

#[test]
fn test_moving_selection_past_bottom_scrolls() {
    let mut model = tall_model(40);
    send(&mut model, Msg::Grid(GridMsg::SelectCell(pos(14, 0))));
    send(
        &mut model,
        Msg::Grid(GridMsg::MoveSelection(semicell::messages::Direction::Down)),
    );

    assert_eq!(model.sheet.selection, Some(pos(15, 0)));
    assert!(model.sheet.viewport.is_row_visible(15));
    assert!(model.table_layout().cell_rect(pos(15, 0)).is_some());
}

#[test]
fn test_resize_recomputes_visible_rows() {
    let mut model = tall_model(40);
    let before = model.sheet.viewport.visible_rows;
    send(&mut model, Msg::App(AppMsg::Resize(600, 800)));
    assert!(model.sheet.viewport.visible_rows > before);
    assert_eq!(model.table_layout().data_bottom, 776);
}

#[test]
fn test_wide_table_scrolls_horizontally() {
    let headings: Vec<String> = (0..12).map(|i| format!("c{}", i)).collect();
    let refs: Vec<&str> = headings.iter().map(String::as_str).collect();
    let mut model = test_model(&refs, &[]);

    send(&mut model, Msg::Grid(GridMsg::ScrollHorizontal(3)));
    let layout = model.table_layout();
    assert_eq!(layout.visible_columns.first().map(|&(col, _)| col), Some(3));
    assert_eq!(layout.heading_rect(3).unwrap().x, layout.grid_x);
}
