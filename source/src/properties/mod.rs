mod canonical_combining_class;
mod decomposition;

pub use canonical_combining_class::CanonicalCombiningClass;
pub use decomposition::Decomposition;

#[derive(Debug, PartialEq)]
pub enum PropertiesError
{
    UnknownPropertyValue,
}

impl From<core::num::ParseIntError> for PropertiesError
{
    fn from(_: core::num::ParseIntError) -> Self
    {
        Self::UnknownPropertyValue
    }
}

/// кодпоинт в записи UCD: шестнадцатеричное число без префикса 0x
///
/// u32::from_str_radix допускает знак '+', здесь - только цифры
pub fn parse_code(value: &str) -> Result<u32, PropertiesError>
{
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PropertiesError::UnknownPropertyValue);
    }

    Ok(u32::from_str_radix(value, 16)?)
}
