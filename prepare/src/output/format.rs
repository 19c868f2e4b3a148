use super::OrderedRecords;

/// первая строка файла с таблицами
pub const HEADER: &str = "// сгенерировано из UnicodeData.txt и CompositionExclusions.txt";

/// представить таблицы в текстовом виде - выражение Rust, которое можно подключить через include!
pub fn format(records: &OrderedRecords) -> String
{
    format!(
        "{}\n\
        NormalizationTables {{\n  \
            combining_classes: &[{}  ],\n  \
            decompositions: &[{}  ],\n  \
            compositions: &[{}  ],\n\
        }}\n",
        HEADER,
        format_entries(&records.combining, |&(code, ccc)| format!("({}, {})", hex(code), ccc)),
        format_entries(&records.decompositions, |&(code, c0, c1)| {
            format!("({}, {}, {})", hex(code), hex(c0), hex(c1))
        }),
        format_entries(&records.compositions, |&(first, second, code)| {
            format!("({}, {}, {})", hex(first), hex(second), hex(code))
        }),
    )
}

/// кодпоинт: шестнадцатеричное число, не меньше 4 знаков
#[inline]
fn hex(code: u32) -> String
{
    format!("0x{:04X}", code)
}

/// по одной записи в строке
fn format_entries<T>(entries: &[T], format_entry: impl Fn(&T) -> String) -> String
{
    let mut output = String::new();

    for entry in entries {
        output.push_str("\n    ");
        output.push_str(format_entry(entry).as_str());
        output.push(',');
    }
    output.push('\n');

    output
}
