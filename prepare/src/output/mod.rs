use std::io::Write;
use std::path::Path;

use marc8_codetable_source::CodeTable;
use tempfile::NamedTempFile;

use crate::emit::render;
use crate::error::PrepareError;
use crate::tables::{prepare, Options};

mod stats;

/// путь к сгенерированной таблице по умолчанию
pub const DEFAULT_OUTPUT: &str = "./../data/codetable.rs.txt";

/// компилируем таблицу и записываем сгенерированный код.
/// текст полностью формируется до того, как начинается запись
pub fn generate(table: &CodeTable, options: &Options, path: &Path) -> Result<(), PrepareError>
{
    let prepared = prepare(table, options)?;

    stats::print(&prepared);

    let output = render(&prepared, options.representation.representation());

    write(&output, path)
}

/// атомарная запись: пишем во временный файл рядом с целевым и переименовываем его.
/// при ошибке временный файл удаляется, прежний файл остаётся нетронутым
pub fn write(output: &str, path: &Path) -> Result<(), PrepareError>
{
    let failure = |source| PrepareError::OutputFailure {
        path: path.to_owned(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(failure)?;

    file.write_all(output.as_bytes()).map_err(failure)?;
    file.as_file().sync_all().map_err(failure)?;
    file.persist(path).map_err(|e| failure(e.error))?;

    log::info!("записано {} байт: {}", output.len(), path.display());

    Ok(())
}
