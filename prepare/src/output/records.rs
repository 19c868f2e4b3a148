use unicode_normalization_source::CompositionExclusions;

use crate::tables::{CompositionPair, NormalizationTables};

/// упорядоченные записи для вывода
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderedRecords
{
    /// (кодпоинт, класс комбинирования), по возрастанию кодпоинта
    pub combining: Vec<(u32, u8)>,
    /// (кодпоинт, первый, второй кодпоинт декомпозиции или 0), по возрастанию кодпоинта
    pub decompositions: Vec<(u32, u32, u32)>,
    /// (первый, второй, результат), по возрастанию пары
    pub compositions: Vec<(u32, u32, u32)>,
    /// сколько композиций отброшено и почему
    pub filtered: FilterStats,
}

/// причина, по которой композиция не попадает в таблицу
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection
{
    /// результат - исключение композиции
    Excluded,
    /// результат - нестартер
    NonStarterComposite,
    /// первый кодпоинт пары - нестартер
    NonStarterFirst,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats
{
    pub excluded: usize,
    pub non_starter_composite: usize,
    pub non_starter_first: usize,
}

impl FilterStats
{
    #[inline]
    pub fn total(&self) -> usize
    {
        self.excluded + self.non_starter_composite + self.non_starter_first
    }
}

/// участвует ли композиция pair -> code в канонической композиции?
///
/// правило исключения: комбинируется только стартер с последующим кодпоинтом, результат - стартер,
/// не входящий в список исключений
pub fn rejection(
    pair: CompositionPair,
    code: u32,
    tables: &NormalizationTables,
    exclusions: &CompositionExclusions,
) -> Option<Rejection>
{
    if exclusions.is_composition_exclusion(code) {
        return Some(Rejection::Excluded);
    }

    if tables.is_non_starter(code) {
        return Some(Rejection::NonStarterComposite);
    }

    if tables.is_non_starter(pair.0) {
        return Some(Rejection::NonStarterFirst);
    }

    None
}

impl OrderedRecords
{
    pub fn new(tables: &NormalizationTables, exclusions: &CompositionExclusions) -> Self
    {
        let mut combining: Vec<(u32, u8)> = tables
            .combining
            .iter()
            .map(|(&code, &ccc)| (code, u8::from(ccc)))
            .collect();

        combining.sort();

        let mut decompositions: Vec<(u32, u32, u32)> = tables
            .decompositions
            .iter()
            .map(|(&code, codes)| {
                let first = codes.first().copied().unwrap_or(0);
                let second = codes.get(1).copied().unwrap_or(0);

                (code, first, second)
            })
            .collect();

        decompositions.sort();

        let mut pairs: Vec<(&CompositionPair, &u32)> = tables.compositions.iter().collect();
        pairs.sort();

        let mut filtered = FilterStats::default();
        let mut compositions = Vec::with_capacity(pairs.len());

        for (&pair, &code) in pairs {
            match rejection(pair, code, tables, exclusions) {
                None => compositions.push((pair.0, pair.1, code)),
                Some(Rejection::Excluded) => filtered.excluded += 1,
                Some(Rejection::NonStarterComposite) => filtered.non_starter_composite += 1,
                Some(Rejection::NonStarterFirst) => filtered.non_starter_first += 1,
            }
        }

        Self {
            combining,
            decompositions,
            compositions,
            filtered,
        }
    }
}
