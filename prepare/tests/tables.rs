#[macro_use]
extern crate lazy_static;

use std::io::Cursor;

use unicode_normalization_prepare::output::{rejection, FilterStats, OrderedRecords, Rejection};
use unicode_normalization_prepare::tables::{Collision, NormalizationTables};
use unicode_normalization_source::properties::CanonicalCombiningClass;
use unicode_normalization_source::{CompositionExclusions, FormatError, SourceError, UnicodeData};

lazy_static! {
    /// таблицы из тестовых данных
    static ref TABLES: NormalizationTables =
        NormalizationTables::build(UnicodeData::open("./../test_data/UnicodeData.txt").unwrap()).unwrap();

    static ref EXCLUSIONS: CompositionExclusions =
        CompositionExclusions::open("./../test_data/CompositionExclusions.txt").unwrap();

    static ref RECORDS: OrderedRecords = OrderedRecords::new(&TABLES, &EXCLUSIONS);
}

fn build(data: &str) -> Result<NormalizationTables, SourceError>
{
    NormalizationTables::build(UnicodeData::new(Cursor::new(data)))
}

const SAMPLE: &str = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
00A0;NO-BREAK SPACE;Zs;0;CS;<noBreak> 0020;;;;N;NON-BREAKING SPACE;;;;
00C0;LATIN CAPITAL LETTER A WITH GRAVE;Lu;0;L;0041 0300;;;;N;LATIN CAPITAL LETTER A GRAVE;;;00E0;
0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING GRAVE;;;;
0340;COMBINING GRAVE TONE MARK;Mn;230;NSM;0300;;;;N;NON-SPACING GRAVE TONE MARK;;;;
0345;COMBINING GREEK YPOGEGRAMMENI;Mn;240;NSM;;;;;N;GREEK NON-SPACING IOTA BELOW;;0399;;0399
";

#[test]
fn combining_classes()
{
    let tables = build(SAMPLE).unwrap();

    assert_eq!(tables.combining.len(), 3);
    assert_eq!(tables.ccc(0x300), CanonicalCombiningClass::Above);
    assert_eq!(tables.ccc(0x340), CanonicalCombiningClass::Above);
    assert_eq!(tables.ccc(0x345), CanonicalCombiningClass::IotaSubscript);

    // стартеров в таблице нет
    assert!(!tables.is_non_starter(0x41));
    assert_eq!(tables.ccc(0x41), CanonicalCombiningClass::NotReordered);
}

#[test]
fn decompositions_and_compositions()
{
    let tables = build(SAMPLE).unwrap();

    assert_eq!(tables.decompositions.len(), 2);
    assert_eq!(tables.decompositions[&0xC0], [0x41, 0x300]);
    assert_eq!(tables.decompositions[&0x340], [0x300]);

    // декомпозиция совместимости не учитывается
    assert!(!tables.decompositions.contains_key(&0xA0));

    // синглтон не дает композиции
    assert_eq!(tables.compositions.len(), 1);
    assert_eq!(tables.compositions[&(0x41, 0x300)], 0xC0);

    assert!(tables.collisions.is_empty());
}

/// повторная запись кодпоинта заменяет предыдущую
#[test]
fn duplicate_codepoints()
{
    let data = "\
0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;;;;;
0300;COMBINING GRAVE ACCENT;Mn;220;NSM;;;;;N;;;;;
";

    let tables = build(data).unwrap();

    assert_eq!(tables.ccc(0x300), CanonicalCombiningClass::Below);
}

/// две декомпозиции в одну пару: остается последняя, перезапись фиксируется
#[test]
fn composition_collision()
{
    let data = "\
00C0;LATIN CAPITAL LETTER A WITH GRAVE;Lu;0;L;0041 0300;;;;N;;;;00E0;
E000;PRIVATE DUPLICATE;Co;0;L;0041 0300;;;;N;;;;;
";

    let tables = build(data).unwrap();

    assert_eq!(tables.compositions[&(0x41, 0x300)], 0xE000);
    assert_eq!(tables.decompositions[&0xC0], [0x41, 0x300]);
    assert_eq!(tables.decompositions[&0xE000], [0x41, 0x300]);
    assert_eq!(
        tables.collisions,
        [Collision {
            pair: (0x41, 0x300),
            replaced: 0xC0,
            code: 0xE000,
        }]
    );
}

#[test]
fn malformed_decomposition()
{
    let data = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
01D5;LATIN CAPITAL LETTER U WITH DIAERESIS AND MACRON;Lu;0;L;0055 0308 0304;;;;N;;;;01D6;
";

    match build(data) {
        Err(SourceError::Format { line, kind }) => {
            assert_eq!(line, 2);
            assert_eq!(kind, FormatError::InvalidDecomposition("0055 0308 0304".to_owned()));
        }
        other => panic!("ожидалась ошибка формата, получено: {:?}", other.map(|t| t.decompositions)),
    }
}

/// ошибка потока прерывает сборку таблиц
#[test]
fn stream_error()
{
    let data = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
";

    let error = build(data).unwrap_err();

    assert_eq!(error.format_error(), Some(&FormatError::UnexpectedRangeEnd(0xD7A3)));
}

/// кодпоинты диапазона получают свойства первой строки диапазона
#[test]
fn range_attributes()
{
    let data = "\
E000;<Test Range, First>;Mn;9;L;;;;;N;;;;;
E002;<Test Range, Last>;Mn;0;L;;;;;N;;;;;
";

    let tables = build(data).unwrap();

    let mut codes: Vec<u32> = tables.combining.keys().copied().collect();
    codes.sort();

    assert_eq!(codes, [0xE000, 0xE001, 0xE002]);
    assert!(tables.combining.values().all(|&ccc| ccc == CanonicalCombiningClass::from(9)));
}

/// одна композиция - исключение, другая остается
#[test]
fn composition_filter()
{
    let data = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
00C0;LATIN CAPITAL LETTER A WITH GRAVE;Lu;0;L;0041 0300;;;;N;;;;00E0;
0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;;;;;
0915;DEVANAGARI LETTER KA;Lo;0;L;;;;;N;;;;;
093C;DEVANAGARI SIGN NUKTA;Mn;7;NSM;;;;;N;;;;;
0958;DEVANAGARI LETTER QA;Lo;0;L;0915 093C;;;;N;;;;;
";

    let tables = build(data).unwrap();
    let exclusions = CompositionExclusions::read(Cursor::new("0958    #  DEVANAGARI LETTER QA\n")).unwrap();

    let records = OrderedRecords::new(&tables, &exclusions);

    assert_eq!(records.compositions, [(0x41, 0x300, 0xC0)]);
    assert_eq!(
        records.filtered,
        FilterStats {
            excluded: 1,
            non_starter_composite: 0,
            non_starter_first: 0,
        }
    );

    // декомпозиция исключения остается
    assert_eq!(records.decompositions, [(0xC0, 0x41, 0x300), (0x958, 0x915, 0x93C)]);
}

#[test]
fn rejection_rules()
{
    let data = "\
0308;COMBINING DIAERESIS;Mn;230;NSM;;;;;N;;;;;
0301;COMBINING ACUTE ACCENT;Mn;230;NSM;;;;;N;;;;;
0344;COMBINING GREEK DIALYTIKA TONOS;Mn;230;NSM;0308 0301;;;;N;;;;;
0F71;TIBETAN VOWEL SIGN AA;Mn;129;NSM;;;;;N;;;;;
0F72;TIBETAN VOWEL SIGN I;Mn;130;NSM;;;;;N;;;;;
0F73;TIBETAN VOWEL SIGN II;Mn;0;NSM;0F71 0F72;;;;N;;;;;
";

    let tables = build(data).unwrap();
    let none = CompositionExclusions::default();
    let all: CompositionExclusions = [0x344, 0xF73].into_iter().collect();

    assert_eq!(rejection((0x308, 0x301), 0x344, &tables, &none), Some(Rejection::NonStarterComposite));
    assert_eq!(rejection((0xF71, 0xF72), 0xF73, &tables, &none), Some(Rejection::NonStarterFirst));

    // исключение проверяется первым
    assert_eq!(rejection((0x308, 0x301), 0x344, &tables, &all), Some(Rejection::Excluded));
    assert_eq!(rejection((0xF71, 0xF72), 0xF73, &tables, &all), Some(Rejection::Excluded));

    assert_eq!(rejection((0x41, 0x300), 0xC0, &tables, &none), None);

    let records = OrderedRecords::new(&tables, &none);

    assert!(records.compositions.is_empty());
    assert_eq!(records.filtered.total(), 2);
}

/// ненулевые классы комбинирования, и только они
#[test]
fn fixture_combining_classes()
{
    assert_eq!(TABLES.combining.len(), 151);
    assert!(TABLES.combining.values().all(|ccc| ccc.is_non_starter()));

    assert_eq!(TABLES.ccc(0x300), CanonicalCombiningClass::Above);
    assert_eq!(TABLES.ccc(0x93C), CanonicalCombiningClass::Nukta);
    assert_eq!(TABLES.ccc(0xF71), CanonicalCombiningClass::from(129));
    assert_eq!(TABLES.ccc(0x345), CanonicalCombiningClass::IotaSubscript);
    assert_eq!(TABLES.ccc(0xFB1E), CanonicalCombiningClass::from(26));

    // кодпоинты диапазонов - стартеры
    assert!(!TABLES.is_non_starter(0x4E01));
    assert!(!TABLES.is_non_starter(0xAC01));
}

#[test]
fn fixture_decompositions()
{
    assert_eq!(TABLES.decompositions.len(), 593);
    assert_eq!(TABLES.compositions.len(), 584);

    let singletons: usize = TABLES.decompositions.values().filter(|d| d.len() == 1).count();
    assert_eq!(singletons, 9);

    assert_eq!(TABLES.decompositions[&0x212B], [0xC5]);
    assert_eq!(TABLES.decompositions[&0x1E08], [0xC7, 0x301]);

    // декомпозиция хангыля - алгоритмическая, в UnicodeData.txt ее нет
    assert!(!TABLES.decompositions.contains_key(&0xAC00));
}

/// каждая декомпозиция из двух кодпоинтов восстанавливается композицией, если ее не перезаписали
#[test]
fn fixture_round_trip()
{
    for (&code, codes) in TABLES.decompositions.iter() {
        if codes.len() != 2 {
            continue;
        }

        let pair = (codes[0], codes[1]);
        let composed = TABLES.compositions[&pair];

        if composed != code {
            assert!(
                TABLES.collisions.iter().any(|c| c.pair == pair),
                "U+{:04X}: композиция без записи о перезаписи",
                code
            );
        }
    }

    assert!(TABLES.collisions.is_empty());
}

#[test]
fn fixture_filter()
{
    assert_eq!(RECORDS.compositions.len(), 523);
    assert_eq!(
        RECORDS.filtered,
        FilterStats {
            excluded: 57,
            non_starter_composite: 1,
            non_starter_first: 3,
        }
    );

    assert_eq!(RECORDS.compositions.first(), Some(&(0x41, 0x300, 0xC0)));
    assert_eq!(RECORDS.compositions.last(), Some(&(0x1ECD, 0x302, 0x1ED9)));

    let composes = |code: u32| RECORDS.compositions.iter().any(|c| c.2 == code);

    assert!(composes(0x929));
    assert!(composes(0x1E08));
    assert!(!composes(0x958));
    assert!(!composes(0x2ADC));
    assert!(!composes(0xFB1D));
    assert!(!composes(0x344));
    assert!(!composes(0xF73));

    // ни результат, ни первый кодпоинт не могут быть нестартерами
    for &(first, _, code) in RECORDS.compositions.iter() {
        assert!(!TABLES.is_non_starter(first));
        assert!(!TABLES.is_non_starter(code));
        assert!(!EXCLUSIONS.is_composition_exclusion(code));
    }
}

#[test]
fn fixture_order()
{
    assert!(RECORDS.combining.windows(2).all(|w| w[0].0 < w[1].0));
    assert!(RECORDS.decompositions.windows(2).all(|w| w[0].0 < w[1].0));
    assert!(RECORDS.compositions.windows(2).all(|w| (w[0].0, w[0].1) < (w[1].0, w[1].1)));

    assert_eq!(RECORDS.combining.first(), Some(&(0x300, 230)));
    assert_eq!(RECORDS.combining.last(), Some(&(0xFB1E, 26)));
    assert_eq!(RECORDS.decompositions.first(), Some(&(0xC0, 0x41, 0x300)));
    assert_eq!(RECORDS.decompositions.last(), Some(&(0xFB4E, 0x5E4, 0x5BF)));
}

#[test]
fn fixture_singleton_slots()
{
    let ohm = RECORDS.decompositions.iter().find(|d| d.0 == 0x2126);

    assert_eq!(ohm, Some(&(0x2126, 0x3A9, 0)));
}
