use marc8_codetable_source::{Charset, CodeTable};

/// маленький бюджет, чтобы нижняя полоса многобайтовой страницы делилась на несколько блоков
pub const BUDGET: usize = 4;

pub const EACC: u32 = 0x31;
pub const BASIC_LATIN: u32 = 0x42;
pub const ANSEL: u32 = 0x45;
/// набор, в котором есть отображение в U+0000 и переопределённый пробел
pub const CONTROL: u32 = 0x50;
/// известный набор без записей
pub const EMPTY: u32 = 0x51;
/// набора нет в таблице
pub const UNKNOWN: u32 = 0x99;

/// тестовая таблица перекодировки
pub fn table() -> CodeTable
{
    let mut table = CodeTable::new(EACC);

    table.insert_charset(
        EACC,
        Charset::from([
            (0x213021, Some('\u{4E00}')),
            (0x213022, Some('\u{4E01}')),
            (0x213023, Some('\u{4E03}')),
            (0x213024, Some('\u{4E09}')),
            (0x213025, Some('\u{4E0A}')),
            // 0x213026 отсутствует, находится через 0x2130A6
            (0x2130A6, Some('\u{4E0B}')),
            (0x214021, Some('\u{4E00}')),
            // 0x214022 и 0x2140A2 отсутствуют
            (0x215021, Some('\u{8173}')),
            (0x223021, None),
            (0x275021, Some('\u{4E66}')),
            (0x280000, Some('\u{3000}')),
            (0x692421, Some('\u{3041}')),
            (0x7F7FFF, Some('\u{30A2}')),
        ]),
    );

    // больше бюджета: страница делится на блоки с маршрутизатором
    table.insert_charset(
        BASIC_LATIN,
        (0x21 ..= 0x7E).map(|code| (code, char::from_u32(code))).collect(),
    );

    table.insert_charset(
        ANSEL,
        Charset::from([
            (0xA1, Some('\u{141}')),
            (0xAF, None),
            (0xE1, Some('\u{300}')),
            (0xE2, Some('\u{301}')),
        ]),
    );

    table.insert_charset(
        CONTROL,
        Charset::from([(0x20, Some('\u{3000}')), (0x30, Some('\0'))]),
    );

    table.insert_charset(EMPTY, Charset::new());

    table.insert_combining(EACC, []);
    table.insert_combining(BASIC_LATIN, []);
    table.insert_combining(ANSEL, [0xE2, 0xE1]);

    table
}

/// таблица, в которой многобайтовая страница известна, но пуста
pub fn empty_multibyte_table() -> CodeTable
{
    let mut table = CodeTable::new(EACC);

    table.insert_charset(EACC, Charset::new());
    table.insert_charset(BASIC_LATIN, Charset::from([(0x41, Some('A'))]));
    table.insert_combining(BASIC_LATIN, []);

    table
}
