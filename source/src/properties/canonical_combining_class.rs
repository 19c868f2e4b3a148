use super::PropertiesError;

/// класс канонического комбинирования (Canonical Combining Class, CCC)
/// берется из UCD: третья колонка UnicodeData.txt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CanonicalCombiningClass(u8);

#[allow(non_upper_case_globals)]
impl CanonicalCombiningClass
{
    pub const NotReordered: Self = Self(0);
    pub const Nukta: Self = Self(7);
    pub const Below: Self = Self(220);
    pub const Above: Self = Self(230);
    pub const IotaSubscript: Self = Self(240);
}

impl CanonicalCombiningClass
{
    /// стартер - кодпоинт с нулевым классом комбинирования
    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.0 == 0
    }

    #[inline]
    pub fn is_non_starter(&self) -> bool
    {
        self.0 != 0
    }

    #[inline]
    pub fn u8(&self) -> u8
    {
        self.0
    }
}

impl From<u8> for CanonicalCombiningClass
{
    #[inline]
    fn from(value: u8) -> Self
    {
        Self(value)
    }
}

impl From<CanonicalCombiningClass> for u8
{
    #[inline]
    fn from(value: CanonicalCombiningClass) -> Self
    {
        value.0
    }
}

impl TryFrom<&str> for CanonicalCombiningClass
{
    type Error = PropertiesError;

    /// только десятичные цифры: "+5" или "256" - ошибка
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PropertiesError::UnknownPropertyValue);
        }

        Ok(Self::from(value.parse::<u8>()?))
    }
}
