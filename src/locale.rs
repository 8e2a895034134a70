//! User-facing notice and status texts
//!
//! Russian is the default. Menu labels are not localized.

use serde::{Deserialize, Serialize};

/// Language for notices and status messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Fixed strings for one language
#[derive(Debug)]
pub struct Strings {
    pub error_title: &'static str,
    pub read_error: &'static str,
    pub write_error: &'static str,
    pub save_title: &'static str,
    pub save_success: &'static str,
    pub new_table: &'static str,
    pub opened: &'static str,
    pub saved: &'static str,
    pub open_failed: &'static str,
    pub empty_file: &'static str,
    pub save_failed: &'static str,
    pub sorted_ascending: &'static str,
    pub sorted_descending: &'static str,
    pub header_folded: &'static str,
    pub header_restored: &'static str,
    pub structure_locked: &'static str,
    pub copied: &'static str,
    pub mode_titled: &'static str,
    pub mode_folded: &'static str,
    pub untitled: &'static str,
    pub rows: &'static str,
    pub columns: &'static str,
}

const RU: Strings = Strings {
    error_title: "Ошибка",
    read_error: "Ошибка при чтении файла:",
    write_error: "Ошибка при сохранении файла:",
    save_title: "Сохранение",
    save_success: "Файл успешно сохранён!",
    new_table: "Новая таблица",
    opened: "Открыт файл",
    saved: "Сохранён файл",
    open_failed: "Не удалось открыть файл",
    empty_file: "Файл пуст, таблица не изменена",
    save_failed: "Не удалось сохранить файл",
    sorted_ascending: "по возрастанию",
    sorted_descending: "по убыванию",
    header_folded: "Строка заголовков доступна для редактирования",
    header_restored: "Строка заголовков восстановлена",
    structure_locked: "Сначала выйдите из режима редактирования заголовков",
    copied: "Ячейка скопирована",
    mode_titled: "Таблица",
    mode_folded: "Заголовки",
    untitled: "Без имени",
    rows: "строк",
    columns: "столбцов",
};

const EN: Strings = Strings {
    error_title: "Error",
    read_error: "Error reading file:",
    write_error: "Error saving file:",
    save_title: "Save",
    save_success: "File saved successfully!",
    new_table: "New table",
    opened: "Opened",
    saved: "Saved",
    open_failed: "Could not open file",
    empty_file: "File is empty, table left unchanged",
    save_failed: "Could not save file",
    sorted_ascending: "ascending",
    sorted_descending: "descending",
    header_folded: "Header row is editable",
    header_restored: "Header row restored",
    structure_locked: "Leave header editing to change the table structure",
    copied: "Cell copied",
    mode_titled: "Table",
    mode_folded: "Header edit",
    untitled: "Untitled",
    rows: "rows",
    columns: "columns",
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    /// Body of the read-failure notice
    pub fn read_error_body(self, error: &dyn std::fmt::Display) -> String {
        format!("{}\n{}", self.strings().read_error, error)
    }

    /// Body of the write-failure notice
    pub fn write_error_body(self, error: &dyn std::fmt::Display) -> String {
        format!("{}\n{}", self.strings().write_error, error)
    }

    /// Status line after a sort
    pub fn sorted_status(self, heading: &str, descending: bool) -> String {
        let s = self.strings();
        let direction = if descending {
            s.sorted_descending
        } else {
            s.sorted_ascending
        };
        match self {
            Locale::Ru => format!("Сортировка по «{}» {}", heading, direction),
            Locale::En => format!("Sorted by \"{}\" {}", heading, direction),
        }
    }
}
