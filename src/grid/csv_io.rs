//! Reading and writing delimited files with the csv crate
//!
//! Records may have differing lengths. Quoting follows the csv crate
//! defaults: fields are quoted only when necessary and embedded quotes are
//! doubled.

use std::fmt;
use std::io::Cursor;
use std::path::Path;

use super::store::GridStore;

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b';';

/// Error reading a file into records
#[derive(Debug)]
pub enum FileReadError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file is not valid UTF-8
    Decode(std::string::FromUtf8Error),
    /// Malformed delimited text
    Parse { line: usize, message: String },
}

impl fmt::Display for FileReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileReadError::Io(e) => write!(f, "{}", e),
            FileReadError::Decode(e) => write!(f, "file is not valid UTF-8: {}", e),
            FileReadError::Parse { line, message } => {
                write!(f, "CSV parse error at line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for FileReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileReadError::Io(e) => Some(e),
            FileReadError::Decode(e) => Some(e),
            FileReadError::Parse { .. } => None,
        }
    }
}

impl From<std::io::Error> for FileReadError {
    fn from(e: std::io::Error) -> Self {
        FileReadError::Io(e)
    }
}

/// Error writing records to a file
#[derive(Debug)]
pub enum FileWriteError {
    /// The file could not be written
    Io(std::io::Error),
    /// A record could not be serialized
    Csv(String),
}

impl fmt::Display for FileWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileWriteError::Io(e) => write!(f, "{}", e),
            FileWriteError::Csv(message) => write!(f, "CSV write error: {}", message),
        }
    }
}

impl std::error::Error for FileWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileWriteError::Io(e) => Some(e),
            FileWriteError::Csv(_) => None,
        }
    }
}

impl From<std::io::Error> for FileWriteError {
    fn from(e: std::io::Error) -> Self {
        FileWriteError::Io(e)
    }
}

/// UTF-8 byte order mark
const BOM: &str = "\u{feff}";

/// Line terminator a file uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    fn terminator(self) -> csv::Terminator {
        match self {
            LineEnding::Lf => csv::Terminator::Any(b'\n'),
            LineEnding::CrLf => csv::Terminator::CRLF,
        }
    }
}

/// Byte-level layout of a file, kept so that saving writes it back the same
/// way it was read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextFormat {
    /// The file starts with a byte order mark
    pub bom: bool,
    pub line_ending: LineEnding,
}

impl TextFormat {
    /// Detect the format of decoded text. Returns the text without its BOM.
    ///
    /// The line ending is taken from the first line break.
    pub fn detect(content: &str) -> (Self, &str) {
        let (bom, body) = match content.strip_prefix(BOM) {
            Some(rest) => (true, rest),
            None => (false, content),
        };
        let line_ending = match body.find('\n') {
            Some(i) if body[..i].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        };
        (Self { bom, line_ending }, body)
    }
}

/// A file read into a grid, with the format to save it back in
#[derive(Debug)]
pub struct LoadedTable {
    pub store: GridStore,
    pub format: TextFormat,
}

/// Parse delimited text into records.
///
/// Blank lines come back as empty records so that writing the records out
/// again reproduces them. Text holding nothing but line breaks has no
/// records at all.
pub fn parse_records(content: &str, delimiter: u8) -> Result<Vec<Vec<String>>, FileReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(content.as_bytes()));

    let mut parsed = Vec::new();
    for (index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let start = record.position().map_or(0, |pos| pos.byte() as usize);
                let fields: Vec<String> = record.iter().map(str::to_string).collect();
                parsed.push((start, fields));
            }
            Err(e) => {
                let line = e
                    .position()
                    .map(|pos| pos.line() as usize)
                    .unwrap_or(index + 1);
                return Err(FileReadError::Parse {
                    line,
                    message: e.to_string(),
                });
            }
        }
    }
    Ok(restore_blank_lines(content, parsed))
}

fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Line breaks in a run of `\r` and `\n`, with `\r\n` counting once
fn count_line_breaks(run: &str) -> usize {
    run.replace("\r\n", "\n").len()
}

/// Put back the empty records the csv reader skips.
///
/// `parsed` pairs each record with the byte offset its read started at. The
/// line breaks between two records form one unbroken run: the first one ends
/// the previous record and every further break is a blank line.
fn restore_blank_lines(content: &str, parsed: Vec<(usize, Vec<String>)>) -> Vec<Vec<String>> {
    let ends: Vec<usize> = parsed
        .iter()
        .skip(1)
        .map(|&(start, _)| start)
        .chain(std::iter::once(content.len()))
        .collect();

    let mut records = Vec::with_capacity(parsed.len());
    let mut run_start = 0;
    for (i, ((start, fields), end)) in parsed.into_iter().zip(ends).enumerate() {
        let span = content.get(start..end).unwrap_or("");
        let text_start = start + (span.len() - span.trim_start_matches(is_line_break).len());
        let text_end = (start + span.trim_end_matches(is_line_break).len()).max(text_start);

        let breaks = count_line_breaks(content.get(run_start..text_start).unwrap_or(""));
        let blanks = if i == 0 { breaks } else { breaks.saturating_sub(1) };
        records.extend(std::iter::repeat_with(Vec::new).take(blanks));
        records.push(fields);
        run_start = text_end;
    }

    if !records.is_empty() {
        let breaks = count_line_breaks(content.get(run_start..).unwrap_or(""));
        records.extend(std::iter::repeat_with(Vec::new).take(breaks.saturating_sub(1)));
    }
    records
}

/// Read a file and parse it, noting its format
pub fn read_records(
    path: &Path,
    delimiter: u8,
) -> Result<(Vec<Vec<String>>, TextFormat), FileReadError> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(FileReadError::Decode)?;
    let (format, body) = TextFormat::detect(&content);
    Ok((parse_records(body, delimiter)?, format))
}

/// Read a file into a grid: first record is the headings
pub fn open(path: &Path, delimiter: u8) -> Result<LoadedTable, FileReadError> {
    let (records, format) = read_records(path, delimiter)?;
    Ok(LoadedTable {
        store: GridStore::from_records(records),
        format,
    })
}

/// Serialize records to delimited text, one terminated line each.
///
/// An empty record is written as a bare line break.
pub fn serialize_records(
    records: &[Vec<String>],
    delimiter: u8,
    format: TextFormat,
) -> Result<String, FileWriteError> {
    let mut builder = csv::WriterBuilder::new();
    builder
        .delimiter(delimiter)
        .flexible(true)
        .terminator(format.line_ending.terminator());

    let mut bytes = Vec::new();
    if format.bom {
        bytes.extend_from_slice(BOM.as_bytes());
    }
    let mut writer = builder.from_writer(bytes);

    for record in records {
        if record.is_empty() {
            // The csv writer would emit `""` for an empty record
            let mut bytes = writer
                .into_inner()
                .map_err(|e| FileWriteError::Csv(e.to_string()))?;
            bytes.extend_from_slice(format.line_ending.as_str().as_bytes());
            writer = builder.from_writer(bytes);
            continue;
        }
        writer
            .write_record(record)
            .map_err(|e| FileWriteError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FileWriteError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FileWriteError::Csv(e.to_string()))
}

/// Serialize records and write them to `path`, replacing its contents
pub fn write_records(
    path: &Path,
    records: &[Vec<String>],
    delimiter: u8,
    format: TextFormat,
) -> Result<(), FileWriteError> {
    let content = serialize_records(records, delimiter, format)?;
    std::fs::write(path, content)?;
    Ok(())
}
