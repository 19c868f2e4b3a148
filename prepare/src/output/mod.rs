use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

pub use self::format::format;
pub use self::format::HEADER;
pub use self::records::rejection;
pub use self::records::FilterStats;
pub use self::records::OrderedRecords;
pub use self::records::Rejection;

mod format;
mod records;
pub mod stats;

/// записать таблицы
///
/// данные пишутся во временный файл рядом с результатом, который заменяет результат только после
/// успешной записи. при ошибке прежний файл остается нетронутым, временный - удаляется
pub fn write(path: &Path, text: &str) -> io::Result<()>
{
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;

    file.write_all(text.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    log::info!("записано: {} ({} байт)", path.display(), text.len());

    Ok(())
}
