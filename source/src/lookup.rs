use crate::table::FALLBACK_BIT;

/// результат поиска кода в таблице перекодировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup
{
    /// код отображается в символ Unicode
    Char(char),
    /// набор символов известен, но код в нём не отображается
    Unmapped,
    /// набор символов отсутствует в таблице
    UnknownCharset,
}

impl Lookup
{
    /// найденный символ, если он есть
    #[inline(always)]
    pub fn char(self) -> Option<char>
    {
        match self {
            Lookup::Char(c) => Some(c),
            Lookup::Unmapped | Lookup::UnknownCharset => None,
        }
    }
}

/// поиск с одной повторной попыткой: если код не отображается, пробуем код с переключенным
/// старшим битом (0x21 <-> 0xA1 и т.п.)
#[inline(always)]
pub fn with_fallback(code: u32, lookup: impl Fn(u32) -> Lookup) -> Lookup
{
    match lookup(code) {
        Lookup::Unmapped => lookup(code ^ FALLBACK_BIT),
        found => found,
    }
}

/// операции, которые предоставляет таблица перекодировки декодеру MARC-8
pub trait CodeTableInterface
{
    /// является ли код комбинируемым символом при активных наборах G0 / G1
    fn is_combining(&self, code: u32, g0: u32, g1: u32) -> bool;

    /// символ Unicode для кода в наборе символов mode
    fn decode(&self, code: u32, mode: u32) -> Lookup;
}
