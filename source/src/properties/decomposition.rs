use super::{parse_code, PropertiesError};

/// декомпозиция
/// берется из UCD: 5 колонка UnicodeData.txt
///
/// декомпозиция совместимости начинается с тега в угловых скобках (<font>, <compat>, ...) -
/// для канонических таблиц такие записи не нужны, поэтому ни тег, ни коды не разбираются
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition
{
    /// поле пустое
    None,
    /// каноническая декомпозиция: 1 или 2 кодпоинта
    Canonical(Vec<u32>),
    /// декомпозиция совместимости
    Compatibility,
}

impl Decomposition
{
    /// максимальная длина канонической декомпозиции в UnicodeData.txt
    pub const MAX_CANONICAL_LENGTH: usize = 2;

    /// коды канонической декомпозиции (пустой срез - если ее нет)
    #[inline]
    pub fn canonical(&self) -> &[u32]
    {
        match self {
            Self::Canonical(codes) => codes.as_slice(),
            Self::None | Self::Compatibility => &[],
        }
    }
}

impl TryFrom<&str> for Decomposition
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        if value.is_empty() {
            return Ok(Self::None);
        }

        if value.starts_with('<') {
            return Ok(Self::Compatibility);
        }

        let codes = value
            .split(' ')
            .map(parse_code)
            .collect::<Result<Vec<u32>, _>>()?;

        match codes.len() {
            1 ..= Self::MAX_CANONICAL_LENGTH => Ok(Self::Canonical(codes)),
            _ => Err(PropertiesError::UnknownPropertyValue),
        }
    }
}
