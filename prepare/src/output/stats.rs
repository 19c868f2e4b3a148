use crate::tables::NormalizationTables;

use super::OrderedRecords;

/// информация о подготовленных таблицах
pub fn log(tables: &NormalizationTables, records: &OrderedRecords)
{
    let singletons = records.decompositions.iter().filter(|d| d.2 == 0).count();

    log::info!(
        "\n  \
        классов комбинирования: {}\n  \
        декомпозиций: {} (синглтонов: {})\n  \
        композиций: {} из {}\n  \
        отброшено: исключения - {}, результат-нестартер - {}, нестартер в начале пары - {}\n  \
        перезаписанных композиций: {}",
        records.combining.len(),
        records.decompositions.len(),
        singletons,
        records.compositions.len(),
        tables.compositions.len(),
        records.filtered.excluded,
        records.filtered.non_starter_composite,
        records.filtered.non_starter_first,
        tables.collisions.len(),
    );
}
