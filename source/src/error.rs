use std::fmt;
use std::io;

/// ошибка чтения файлов UCD
#[derive(Debug)]
pub enum SourceError
{
    /// файл отсутствует или не может быть прочитан
    Io(io::Error),
    /// строка файла не может быть разобрана, line - номер строки (с единицы)
    Format
    {
        line: usize,
        kind: FormatError,
    },
}

/// что именно не так со строкой
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError
{
    /// неверное количество полей, разделенных ';'
    FieldCount(usize),
    /// кодпоинт не является шестнадцатеричным числом
    InvalidCode(String),
    /// класс канонического комбинирования не является числом 0 ..= 255
    InvalidCombiningClass(String),
    /// каноническая декомпозиция - не 1 или 2 шестнадцатеричных кодпоинта
    InvalidDecomposition(String),
    /// строка "Last>" без предшествующей строки "First>"
    UnexpectedRangeEnd(u32),
    /// строка "First>" внутри уже открытого диапазона
    NestedRange
    {
        open: u32,
        code: u32,
    },
    /// конец диапазона меньше его начала
    InvalidRange
    {
        first: u32,
        last: u32,
    },
    /// строка "Last>" закрывает диапазон с другим названием
    MismatchedRange
    {
        first: u32,
        last: u32,
    },
    /// файл закончился, а диапазон так и не был закрыт
    UnterminatedRange(u32),
    /// строка не является корректным UTF-8
    InvalidEncoding,
}

impl SourceError
{
    #[inline]
    pub fn format(line: usize, kind: FormatError) -> Self
    {
        Self::Format { line, kind }
    }

    /// ошибка формата (если это она)
    pub fn format_error(&self) -> Option<&FormatError>
    {
        match self {
            Self::Format { kind, .. } => Some(kind),
            Self::Io(_) => None,
        }
    }
}

impl SourceError
{
    /// ошибка чтения строки: некорректный UTF-8 - это ошибка формата строки, а не ввода-вывода
    pub fn read_line(line: usize, error: io::Error) -> Self
    {
        match error.kind() {
            io::ErrorKind::InvalidData => Self::format(line, FormatError::InvalidEncoding),
            _ => Self::Io(error),
        }
    }
}

impl From<io::Error> for SourceError
{
    fn from(error: io::Error) -> Self
    {
        Self::Io(error)
    }
}

impl fmt::Display for SourceError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::Io(error) => write!(f, "ошибка ввода-вывода: {}", error),
            Self::Format { line, kind } => write!(f, "строка {}: {}", line, kind),
        }
    }
}

impl fmt::Display for FormatError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::FieldCount(count) => write!(f, "некорректное количество полей: {}", count),
            Self::InvalidCode(value) => write!(f, "некорректный кодпоинт: {:?}", value),
            Self::InvalidCombiningClass(value) => {
                write!(f, "некорректный класс комбинирования: {:?}", value)
            }
            Self::InvalidDecomposition(value) => {
                write!(f, "некорректная декомпозиция: {:?}", value)
            }
            Self::UnexpectedRangeEnd(code) => {
                write!(f, "конец диапазона U+{:04X} без его начала", code)
            }
            Self::NestedRange { open, code } => write!(
                f,
                "начало диапазона U+{:04X} внутри открытого диапазона U+{:04X}",
                code, open
            ),
            Self::InvalidRange { first, last } => {
                write!(f, "конец диапазона U+{:04X} меньше начала U+{:04X}", last, first)
            }
            Self::MismatchedRange { first, last } => write!(
                f,
                "конец диапазона U+{:04X} не соответствует началу U+{:04X}",
                last, first
            ),
            Self::UnterminatedRange(code) => write!(f, "диапазон U+{:04X} не закрыт", code),
            Self::InvalidEncoding => write!(f, "строка не является корректным UTF-8"),
        }
    }
}

impl std::error::Error for SourceError
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
    {
        match self {
            Self::Io(error) => Some(error),
            Self::Format { .. } => None,
        }
    }
}
