//! File lifecycle update functions

use crate::commands::{Cmd, Notice};
use crate::grid::{GridStore, LoadedTable, TextFormat};
use crate::messages::FileMsg;
use crate::model::AppModel;

/// Handle file messages
pub fn update_file(model: &mut AppModel, msg: FileMsg) -> Option<Cmd> {
    match msg {
        FileMsg::New => {
            model.sheet.replace(GridStore::new());
            model.file_path = None;
            model.file_format = TextFormat::default();
            model.sync_viewport();
            let status = model.locale().strings().new_table;
            model.ui.set_status(status);
            tracing::info!("Started a new table");
            Some(Cmd::Redraw)
        }
        FileMsg::Open => Some(Cmd::ShowOpenFileDialog {
            start_dir: model.dialog_dir(),
        }),
        FileMsg::Save => Some(Cmd::ShowSaveFileDialog {
            suggested_path: model.file_path.clone(),
        }),
        FileMsg::OpenPath(path) => Some(Cmd::LoadFile { path }),
        FileMsg::OpenDialogResult(path) => path.map(|path| Cmd::LoadFile { path }),
        FileMsg::SaveDialogResult(path) => path.map(|path| Cmd::SaveFile {
            path,
            records: model.sheet.table.to_records(),
            format: model.file_format,
        }),
        FileMsg::Loaded { path, result } => match result {
            Ok(LoadedTable { store, .. }) if store.is_empty() => {
                tracing::info!("{} is empty, keeping the current table", path.display());
                let status = model.locale().strings().empty_file;
                model.ui.set_status(status);
                Some(Cmd::Redraw)
            }
            Ok(LoadedTable { store, format }) => {
                tracing::info!(
                    "Opened {} ({} columns, {} rows)",
                    path.display(),
                    store.column_count(),
                    store.row_count()
                );
                model.sheet.replace(store);
                model.file_path = Some(path);
                model.file_format = format;
                model.sync_viewport();
                let status = format!(
                    "{} {}",
                    model.locale().strings().opened,
                    model.display_name()
                );
                model.ui.set_status(status);
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::error!("Failed to read {}: {}", path.display(), e);
                let locale = model.locale();
                model.ui.set_status(locale.strings().open_failed);
                Some(Cmd::batch(vec![
                    Cmd::Redraw,
                    Cmd::ShowNotice(Notice::error(
                        locale.strings().error_title,
                        locale.read_error_body(&e),
                    )),
                ]))
            }
        },
        FileMsg::Saved { path, result } => {
            let locale = model.locale();
            match result {
                Ok(()) => {
                    tracing::info!("Saved {}", path.display());
                    model.file_path = Some(path);
                    let status = format!("{} {}", locale.strings().saved, model.display_name());
                    model.ui.set_status(status);
                    Some(Cmd::batch(vec![
                        Cmd::Redraw,
                        Cmd::ShowNotice(Notice::info(
                            locale.strings().save_title,
                            locale.strings().save_success,
                        )),
                    ]))
                }
                Err(e) => {
                    tracing::error!("Failed to write {}: {}", path.display(), e);
                    model.ui.set_status(locale.strings().save_failed);
                    Some(Cmd::batch(vec![
                        Cmd::Redraw,
                        Cmd::ShowNotice(Notice::error(
                            locale.strings().error_title,
                            locale.write_error_body(&e),
                        )),
                    ]))
                }
            }
        }
    }
}
