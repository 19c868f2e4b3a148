use std::collections::HashMap;

use unicode_normalization_source::properties::{CanonicalCombiningClass, Decomposition};
use unicode_normalization_source::{SourceError, UnicodeDataEntry, UnicodeRecord};

/// пара кодпоинтов, комбинирующихся в один
pub type CompositionPair = (u32, u32);

/// таблицы, собранные из UnicodeData.txt
#[derive(Debug, Default, Clone)]
pub struct NormalizationTables
{
    /// кодпоинт -> ненулевой класс канонического комбинирования
    pub combining: HashMap<u32, CanonicalCombiningClass>,
    /// кодпоинт -> каноническая декомпозиция (1 или 2 кодпоинта)
    pub decompositions: HashMap<u32, Vec<u32>>,
    /// пара из декомпозиции -> результат комбинирования
    pub compositions: HashMap<CompositionPair, u32>,
    /// перезаписанные композиции
    pub collisions: Vec<Collision>,
}

/// несколько кодпоинтов канонически декомпозируются в одну и ту же пару -
/// в таблице композиций остается последний из них в порядке файла
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision
{
    pub pair: CompositionPair,
    /// кодпоинт, запись которого была перезаписана
    pub replaced: u32,
    /// кодпоинт, оставшийся в таблице
    pub code: u32,
}

impl NormalizationTables
{
    /// собрать таблицы из потока записей UnicodeData.txt. первая же ошибка потока прерывает сборку
    pub fn build<I>(entries: I) -> Result<Self, SourceError>
    where
        I: IntoIterator<Item = Result<UnicodeDataEntry, SourceError>>,
    {
        let mut tables = Self::default();

        for entry in entries {
            let (code, record) = entry?;

            tables.insert(code, &record)?;
        }

        log::info!(
            "классов комбинирования: {}, декомпозиций: {}, композиций: {}",
            tables.combining.len(),
            tables.decompositions.len(),
            tables.compositions.len()
        );

        Ok(tables)
    }

    /// добавить свойства кодпоинта
    pub fn insert(&mut self, code: u32, record: &UnicodeRecord) -> Result<(), SourceError>
    {
        if record.ccc.is_non_starter() {
            self.combining.insert(code, record.ccc);
        }

        // декомпозиции совместимости пропускаем
        let codes = match record.decomposition()? {
            Decomposition::Canonical(codes) => codes,
            Decomposition::None | Decomposition::Compatibility => return Ok(()),
        };

        if let [first, second] = codes[..] {
            let pair = (first, second);

            if let Some(replaced) = self.compositions.insert(pair, code) {
                if replaced != code {
                    log::warn!(
                        "композиция U+{:04X} + U+{:04X}: U+{:04X} заменен на U+{:04X}",
                        first,
                        second,
                        replaced,
                        code
                    );

                    self.collisions.push(Collision {
                        pair,
                        replaced,
                        code,
                    });
                }
            }
        }

        self.decompositions.insert(code, codes);

        Ok(())
    }

    /// класс комбинирования кодпоинта (0 - если его нет в таблице)
    #[inline]
    pub fn ccc(&self, code: u32) -> CanonicalCombiningClass
    {
        self.combining.get(&code).copied().unwrap_or_default()
    }

    #[inline]
    pub fn is_non_starter(&self, code: u32) -> bool
    {
        self.combining.contains_key(&code)
    }
}
