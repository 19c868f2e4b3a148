use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::rc::Rc;

use crate::error::{FormatError, SourceError};
use crate::properties::*;

/// количество полей в строке UnicodeData.txt
pub const FIELDS_COUNT: usize = 15;

/// маркеры диапазонов в названии
const RANGE_FIRST: &str = ", First>";
const RANGE_LAST: &str = ", Last>";

/// запись UnicodeData.txt - только те поля, которые нужны для таблиц нормализации
#[derive(Debug, Clone, PartialEq)]
pub struct UnicodeRecord
{
    /// номер строки в файле (с единицы)
    pub line: usize,
    /// код, записанный в строке. для кодпоинтов внутри диапазона - код его первой строки
    pub code: u32,
    /// название, нужно только для того, чтобы распознать диапазоны
    pub name: String,
    /// класс канонического комбинирования
    pub ccc: CanonicalCombiningClass,
    /// поле декомпозиции как есть, разбирается по требованию
    pub decomposition: String,
}

/// элемент потока: кодпоинт и запись, свойства которой ему принадлежат
pub type UnicodeDataEntry = (u32, Rc<UnicodeRecord>);

#[derive(Debug, Clone, Copy, PartialEq)]
enum RangeBound
{
    First,
    Last,
}

impl UnicodeRecord
{
    /// разобрать строку UnicodeData.txt
    pub fn parse(line: &str, number: usize) -> Result<Self, SourceError>
    {
        let props: Vec<&str> = line.split(';').collect();

        if props.len() != FIELDS_COUNT {
            return Err(SourceError::format(number, FormatError::FieldCount(props.len())));
        }

        let code = parse_code(props[0])
            .map_err(|_| SourceError::format(number, FormatError::InvalidCode(props[0].to_owned())))?;

        let ccc = CanonicalCombiningClass::try_from(props[3]).map_err(|_| {
            SourceError::format(number, FormatError::InvalidCombiningClass(props[3].to_owned()))
        })?;

        // пропускаем остальные колонки: категория, bidi-свойства, числовые значения, регистр

        Ok(Self {
            line: number,
            code,
            name: props[1].to_owned(),
            ccc,
            decomposition: props[5].to_owned(),
        })
    }

    /// разобранное поле декомпозиции
    pub fn decomposition(&self) -> Result<Decomposition, SourceError>
    {
        Decomposition::try_from(self.decomposition.as_str()).map_err(|_| {
            SourceError::format(self.line, FormatError::InvalidDecomposition(self.decomposition.clone()))
        })
    }

    fn range_bound(&self) -> Option<RangeBound>
    {
        if self.name.ends_with(RANGE_FIRST) {
            return Some(RangeBound::First);
        }

        if self.name.ends_with(RANGE_LAST) {
            return Some(RangeBound::Last);
        }

        None
    }

    /// название диапазона без маркера: "<CJK Ideograph, First>" -> "<CJK Ideograph"
    fn range_name(&self) -> &str
    {
        self.name
            .strip_suffix(RANGE_FIRST)
            .or_else(|| self.name.strip_suffix(RANGE_LAST))
            .unwrap_or(&self.name)
    }
}

/// состояние потока записей
enum State
{
    /// читаем строки; range_start - первая строка открытого диапазона
    Scanning
    {
        range_start: Option<Rc<UnicodeRecord>>,
    },
    /// выдаем кодпоинты next ..= last закрытого диапазона со свойствами его первой строки
    Expanding
    {
        next: u32,
        last: u32,
        record: Rc<UnicodeRecord>,
    },
    /// данные закончились или произошла ошибка
    Finished,
}

/// поток записей UnicodeData.txt
///
/// большие блоки (CJK, хангыль, тангутский и т.д.) записаны в UCD двумя строками:
///
/// 4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;
/// 9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
///
/// первая строка выдается как обычная запись, после строки "Last>" поток выдает каждый кодпоинт
/// first + 1 ..= last со свойствами первой строки (свойства строки "Last>" не используются)
pub struct UnicodeData<R>
{
    lines: Lines<R>,
    line: usize,
    state: State,
}

impl UnicodeData<BufReader<File>>
{
    /// открыть UnicodeData.txt, файл закрывается вместе с потоком
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError>
    {
        let path = path.as_ref();
        let file = File::open(path)?;

        log::info!("чтение {}", path.display());

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> UnicodeData<R>
{
    pub fn new(reader: R) -> Self
    {
        Self {
            lines: reader.lines(),
            line: 0,
            state: State::Scanning { range_start: None },
        }
    }

    /// прочитать строки до следующего кодпоинта
    fn scan(
        &mut self,
        mut range_start: Option<Rc<UnicodeRecord>>,
    ) -> Option<Result<UnicodeDataEntry, SourceError>>
    {
        loop {
            let line = match self.lines.next() {
                Some(line) => line,
                None => {
                    return range_start.map(|first| {
                        Err(SourceError::format(first.line, FormatError::UnterminatedRange(first.code)))
                    })
                }
            };

            self.line += 1;

            let record = line
                .map_err(|error| SourceError::read_line(self.line, error))
                .and_then(|line| UnicodeRecord::parse(&line, self.line));

            let record = match record {
                Ok(record) => Rc::new(record),
                Err(error) => return Some(Err(error)),
            };

            match record.range_bound() {
                None => {
                    self.state = State::Scanning { range_start };
                    return Some(Ok((record.code, record)));
                }
                Some(RangeBound::First) => {
                    if let Some(open) = &range_start {
                        let kind = FormatError::NestedRange {
                            open: open.code,
                            code: record.code,
                        };

                        return Some(Err(SourceError::format(record.line, kind)));
                    }

                    self.state = State::Scanning {
                        range_start: Some(Rc::clone(&record)),
                    };

                    return Some(Ok((record.code, record)));
                }
                Some(RangeBound::Last) => {
                    let first = match range_start.take() {
                        Some(first) => first,
                        None => {
                            let kind = FormatError::UnexpectedRangeEnd(record.code);
                            return Some(Err(SourceError::format(record.line, kind)));
                        }
                    };

                    let last = record.code;

                    if first.range_name() != record.range_name() {
                        let kind = FormatError::MismatchedRange {
                            first: first.code,
                            last,
                        };

                        return Some(Err(SourceError::format(record.line, kind)));
                    }

                    if last < first.code {
                        let kind = FormatError::InvalidRange {
                            first: first.code,
                            last,
                        };

                        return Some(Err(SourceError::format(record.line, kind)));
                    }

                    log::debug!("диапазон U+{:04X} ..= U+{:04X}", first.code, last);

                    // диапазон из одного кодпоинта - он уже выдан, читаем дальше
                    if last == first.code {
                        continue;
                    }

                    let code = first.code + 1;

                    self.state = match code < last {
                        true => State::Expanding {
                            next: code + 1,
                            last,
                            record: Rc::clone(&first),
                        },
                        false => State::Scanning { range_start: None },
                    };

                    return Some(Ok((code, first)));
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for UnicodeData<R>
{
    type Item = Result<UnicodeDataEntry, SourceError>;

    fn next(&mut self) -> Option<Self::Item>
    {
        // после ошибки или конца данных состояние остается Finished
        match std::mem::replace(&mut self.state, State::Finished) {
            State::Finished => None,
            State::Scanning { range_start } => self.scan(range_start),
            State::Expanding { next, last, record } => {
                if next < last {
                    self.state = State::Expanding {
                        next: next + 1,
                        last,
                        record: Rc::clone(&record),
                    };
                } else {
                    self.state = State::Scanning { range_start: None };
                }

                Some(Ok((next, record)))
            }
        }
    }
}
