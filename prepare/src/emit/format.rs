/// целочисленный литерал: 0x7E, 0x214021
pub fn hex(value: u32) -> String
{
    format!("0x{:X}", value)
}

/// символьный литерал, всегда в виде escape-последовательности: '\u{4E00}'
pub fn char_literal(c: char) -> String
{
    format!("'\\u{{{:X}}}'", u32::from(c))
}

/// значение, возвращаемое блоком для записи
pub fn lookup_literal(codepoint: Option<char>) -> String
{
    match codepoint {
        Some(c) => format!("Lookup::Char({})", char_literal(c)),
        None => "Lookup::Unmapped".to_owned(),
    }
}

/// имя блока одно- или двухбайтовой страницы
pub fn page_unit_name(selector: u32) -> String
{
    format!("lookup_charset_{:x}", selector)
}

/// имя одного из блоков страницы, не уложившейся в бюджет
pub fn page_part_name(selector: u32, start: u32, end: u32) -> String
{
    format!("lookup_charset_{:x}_{:x}_{:x}", selector, start, end)
}

/// имя блока диапазона многобайтовой страницы
pub fn multibyte_unit_name(start: u32, end: u32) -> String
{
    format!("lookup_multibyte_{:x}_{:x}", start, end)
}
