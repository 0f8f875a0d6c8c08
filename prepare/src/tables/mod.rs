mod partition;
pub use partition::*;

use std::ops::RangeInclusive;

use marc8_codetable_source::{
    active_selector, with_fallback, CodeTable, CodeTableInterface, Lookup, SPACE,
};

use crate::emit::RepresentationKind;
use crate::error::PrepareError;
use crate::sort::{sorted_codes, sorted_entries, sorted_keys};

/// полосы многобайтовой страницы: плотная нижняя полоса, выше - всё более широкие и разреженные
pub const MULTIBYTE_BANDS: [RangeInclusive<u32>; 5] = [
    0x210000 ..= 0x214FFF,
    0x215000 ..= 0x21FFFF,
    0x220000 ..= 0x22FFFF,
    0x230000 ..= 0x27FFFF,
    0x280000 ..= 0x7F7FFF,
];

/// максимальное количество записей в одном блоке принятия решения
pub const DEFAULT_UNIT_BUDGET: usize = 4000;

/// запись кодовой страницы: код и кодпоинт (None - код без отображения)
pub type Entry = (u32, Option<char>);

/// политика компиляции таблицы
#[derive(Debug, Clone)]
pub struct Options
{
    /// полосы, на которые делится многобайтовая страница
    pub bands: Vec<RangeInclusive<u32>>,
    /// ограничение размера блока
    pub budget: UnitBudget,
    /// представление блоков в сгенерированном коде
    pub representation: RepresentationKind,
}

impl Default for Options
{
    fn default() -> Self
    {
        Self {
            bands: MULTIBYTE_BANDS.to_vec(),
            budget: UnitBudget::new(DEFAULT_UNIT_BUDGET),
            representation: RepresentationKind::default(),
        }
    }
}

/// комбинируемые символы набора. пустой список - набор никогда не комбинируется
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombiningCase
{
    pub selector: u32,
    /// коды по возрастанию
    pub codes: Vec<u32>,
}

/// способ поиска в наборе символов
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch
{
    /// одно- или двухбайтовая страница - один блок, либо несколько и маршрутизатор,
    /// если страница не укладывается в бюджет
    Page(Vec<Partition>),
    /// многобайтовая страница - по блоку на диапазон
    Multibyte(Vec<Partition>),
}

/// подготовленная к записи таблица: всё отсортировано, страницы разбиты на блоки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTable
{
    /// по возрастанию селекторов
    pub combining: Vec<CombiningCase>,
    /// наборы символов по возрастанию селекторов
    pub charsets: Vec<(u32, Dispatch)>,
}

/// подготавливаем таблицу перекодировки к генерации кода
pub fn prepare(table: &CodeTable, options: &Options) -> Result<PreparedTable, PrepareError>
{
    let combining = sorted_entries(table.combining())
        .into_iter()
        .map(|(selector, codes)| CombiningCase {
            selector,
            codes: sorted_codes(codes),
        })
        .collect();

    let mut charsets = vec![];

    for selector in sorted_keys(table.charsets()) {
        let Some(charset) = table.charset(selector) else {
            continue;
        };

        let entries: Vec<Entry> = sorted_entries(charset)
            .into_iter()
            .map(|(code, codepoint)| (code, *codepoint))
            .collect();

        let dispatch = match selector == table.multibyte() {
            true => Dispatch::Multibyte(partition(&entries, &options.bands, options.budget)?),
            false => Dispatch::Page(split_page(&entries, options.budget)?),
        };

        charsets.push((selector, dispatch));
    }

    Ok(PreparedTable {
        combining,
        charsets,
    })
}

/// поиск в отсортированных записях
pub fn lookup_entries(entries: &[Entry], code: u32) -> Lookup
{
    match entries.binary_search_by_key(&code, |entry| entry.0) {
        Ok(index) => match entries[index].1 {
            Some(c) => Lookup::Char(c),
            None => Lookup::Unmapped,
        },
        Err(_) => Lookup::Unmapped,
    }
}

impl Dispatch
{
    /// блоки набора символов по возрастанию кодов
    pub fn units(&self) -> &[Partition]
    {
        match self {
            Dispatch::Page(units) | Dispatch::Multibyte(units) => units,
        }
    }

    pub fn lookup(&self, code: u32) -> Lookup
    {
        match self.units().iter().find(|unit| unit.contains(code)) {
            Some(unit) => unit.lookup(code),
            None => Lookup::Unmapped,
        }
    }
}

impl PreparedTable
{
    /// поиск без повторной попытки - то же, что делает сгенерированная функция lookup
    pub fn lookup(&self, code: u32, mode: u32) -> Lookup
    {
        if code == SPACE {
            return Lookup::Char(' ');
        }

        match self.charsets.binary_search_by_key(&mode, |charset| charset.0) {
            Ok(index) => self.charsets[index].1.lookup(code),
            Err(_) => Lookup::UnknownCharset,
        }
    }

    /// количество записей во всех блоках
    pub fn entries_count(&self) -> usize
    {
        self.charsets
            .iter()
            .flat_map(|(_, dispatch)| dispatch.units())
            .map(|unit| unit.entries.len())
            .sum()
    }
}

/// подготовленная таблица сама является эталонной реализацией сгенерированного кода
impl CodeTableInterface for PreparedTable
{
    fn is_combining(&self, code: u32, g0: u32, g1: u32) -> bool
    {
        let selector = active_selector(code, g0, g1);

        match self.combining.binary_search_by_key(&selector, |case| case.selector) {
            Ok(index) => self.combining[index].codes.binary_search(&code).is_ok(),
            Err(_) => false,
        }
    }

    fn decode(&self, code: u32, mode: u32) -> Lookup
    {
        with_fallback(code, |code| self.lookup(code, mode))
    }
}
