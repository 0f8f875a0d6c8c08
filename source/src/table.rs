use std::collections::HashMap;

use crate::lookup::{with_fallback, CodeTableInterface, Lookup};

/// пробел отображается сам в себя в любом наборе символов
pub const SPACE: u32 = 0x20;
/// коды до этого значения включительно относятся к набору G0, остальные - к G1
pub const G0_LAST_CODE: u32 = 0x7E;
/// бит, переключением которого получается код для повторного поиска
pub const FALLBACK_BIT: u32 = 0x80;

/// кодовая страница: код -> кодпоинт Unicode
/// None - код присутствует в таблице, но ни во что не отображается
pub type Charset = HashMap<u32, Option<char>>;

/// таблица перекодировки MARC-8 -> Unicode
///
/// после загрузки не изменяется: компилятор таблицы получает её только по ссылке.
/// порядок обхода хешмапов произволен, детерминированность результата
/// обеспечивает сортировка ключей
#[derive(Debug, Clone)]
pub struct CodeTable
{
    /// кодовые страницы по селекторам
    charsets: HashMap<u32, Charset>,
    /// комбинируемые символы по селекторам. пустой набор - "никогда не комбинируется",
    /// отсутствие селектора - комбинирование неизвестно (считается, что его нет)
    combining: HashMap<u32, Vec<u32>>,
    /// селектор многобайтовой кодовой страницы (EACC)
    multibyte: u32,
}

impl CodeTable
{
    pub fn new(multibyte: u32) -> Self
    {
        Self {
            charsets: HashMap::new(),
            combining: HashMap::new(),
            multibyte,
        }
    }

    /// добавить (или заменить) кодовую страницу
    pub fn insert_charset(&mut self, selector: u32, charset: Charset)
    {
        self.charsets.insert(selector, charset);
    }

    /// добавить комбинируемые символы набора
    pub fn insert_combining(&mut self, selector: u32, codes: impl IntoIterator<Item = u32>)
    {
        self.combining.entry(selector).or_default().extend(codes);
    }

    pub fn charsets(&self) -> &HashMap<u32, Charset>
    {
        &self.charsets
    }

    pub fn combining(&self) -> &HashMap<u32, Vec<u32>>
    {
        &self.combining
    }

    pub fn charset(&self, selector: u32) -> Option<&Charset>
    {
        self.charsets.get(&selector)
    }

    pub fn multibyte(&self) -> u32
    {
        self.multibyte
    }

    /// поиск кода в наборе символов без повторной попытки
    pub fn lookup(&self, code: u32, mode: u32) -> Lookup
    {
        if code == SPACE {
            return Lookup::Char(' ');
        }

        match self.charsets.get(&mode) {
            Some(charset) => match charset.get(&code) {
                Some(Some(c)) => Lookup::Char(*c),
                Some(None) | None => Lookup::Unmapped,
            },
            None => Lookup::UnknownCharset,
        }
    }
}

/// набор символов, к которому относится код: G0 для кодов до 0x7E включительно, иначе - G1
#[inline(always)]
pub fn active_selector(code: u32, g0: u32, g1: u32) -> u32
{
    match code <= G0_LAST_CODE {
        true => g0,
        false => g1,
    }
}

impl CodeTableInterface for CodeTable
{
    fn is_combining(&self, code: u32, g0: u32, g1: u32) -> bool
    {
        match self.combining.get(&active_selector(code, g0, g1)) {
            Some(codes) => codes.contains(&code),
            None => false,
        }
    }

    fn decode(&self, code: u32, mode: u32) -> Lookup
    {
        with_fallback(code, |code| self.lookup(code, mode))
    }
}
