use anyhow::Context;
use unicode_normalization_source::{CompositionExclusions, UnicodeData};

pub mod config;
pub mod output;
pub mod tables;

pub use config::Config;
pub use output::OrderedRecords;
pub use tables::NormalizationTables;

/// прочитать UCD, собрать таблицы и записать их
///
/// все данные читаются до записи результата: любая ошибка прерывает генерацию, не трогая выходной файл
pub fn run(config: &Config) -> anyhow::Result<OrderedRecords>
{
    let exclusions = CompositionExclusions::open(&config.exclusions)
        .with_context(|| format!("не удалось прочитать {}", config.exclusions.display()))?;

    let tables = UnicodeData::open(&config.unicode_data)
        .and_then(NormalizationTables::build)
        .with_context(|| format!("не удалось прочитать {}", config.unicode_data.display()))?;

    let records = OrderedRecords::new(&tables, &exclusions);

    output::write(&config.output, &output::format(&records))
        .with_context(|| format!("не удалось записать {}", config.output.display()))?;

    output::stats::log(&tables, &records);

    Ok(records)
}
