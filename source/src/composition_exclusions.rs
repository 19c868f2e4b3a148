use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{FormatError, SourceError};
use crate::properties::parse_code;

/// исключения композиции
///
/// исключения композиции не могут быть вычислены, этот список составляется консорциумом Unicode в ручном режиме.
/// кодпоинт из списка никогда не является результатом канонической композиции, даже если у него есть
/// декомпозиция из двух кодпоинтов
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionExclusions(HashSet<u32>);

impl CompositionExclusions
{
    /// разбор CompositionExclusions.txt из UCD
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError>
    {
        let path = path.as_ref();
        let file = File::open(path)?;

        log::info!("чтение {}", path.display());

        Self::read(BufReader::new(file))
    }

    /// по одному кодпоинту в строке, '#' - комментарий до конца строки
    pub fn read<R: BufRead>(reader: R) -> Result<Self, SourceError>
    {
        let mut exclusions = HashSet::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|error| SourceError::read_line(i + 1, error))?;

            let code = match line.split_once('#') {
                Some((code, _)) => code,
                None => line.as_str(),
            };

            let code = code.trim();

            if code.is_empty() {
                continue;
            }

            let code = parse_code(code)
                .map_err(|_| SourceError::format(i + 1, FormatError::InvalidCode(code.to_owned())))?;

            exclusions.insert(code);
        }

        Ok(Self(exclusions))
    }

    /// является ли кодпоинт исключением композиции?
    #[inline]
    pub fn is_composition_exclusion(&self, code: u32) -> bool
    {
        self.0.contains(&code)
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.0.is_empty()
    }
}

impl FromIterator<u32> for CompositionExclusions
{
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self
    {
        Self(iter.into_iter().collect())
    }
}
