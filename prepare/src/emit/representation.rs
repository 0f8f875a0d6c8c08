use crate::emit::format::{char_literal, hex, lookup_literal};
use crate::tables::Entry;

/// способ записи блока принятия решения - функции `fn <name>(code: u32) -> Lookup`
/// по отсортированным записям страницы или диапазона
pub trait Representation
{
    fn write_unit(&self, out: &mut String, name: &str, entries: &[Entry]);
}

/// выбор представления в политике компиляции
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepresentationKind
{
    /// match с веткой на каждый код
    #[default]
    MatchTree,
    /// отсортированный статический массив и бинарный поиск
    SortedArray,
}

impl RepresentationKind
{
    pub fn representation(self) -> &'static dyn Representation
    {
        match self {
            RepresentationKind::MatchTree => &MatchTree,
            RepresentationKind::SortedArray => &SortedArray,
        }
    }
}

pub struct MatchTree;

impl Representation for MatchTree
{
    fn write_unit(&self, out: &mut String, name: &str, entries: &[Entry])
    {
        out.push_str(&format!("fn {}(code: u32) -> Lookup\n{{\n    match code {{\n", name));

        for &(code, codepoint) in entries {
            out.push_str(&format!(
                "        {} => {},\n",
                hex(code),
                lookup_literal(codepoint)
            ));
        }

        out.push_str("        _ => Lookup::Unmapped,\n    }\n}\n");
    }
}

pub struct SortedArray;

impl Representation for SortedArray
{
    fn write_unit(&self, out: &mut String, name: &str, entries: &[Entry])
    {
        out.push_str(&format!(
            "fn {}(code: u32) -> Lookup\n{{\n    static ENTRIES: [(u32, Option<char>); {}] = [\n",
            name,
            entries.len()
        ));

        for &(code, codepoint) in entries {
            let value = match codepoint {
                Some(c) => format!("Some({})", char_literal(c)),
                None => "None".to_owned(),
            };

            out.push_str(&format!("        ({}, {}),\n", hex(code), value));
        }

        out.push_str(
            "    ];\n\n    \
             match ENTRIES.binary_search_by_key(&code, |entry| entry.0) {\n        \
                 Ok(index) => match ENTRIES[index].1 {\n            \
                     Some(c) => Lookup::Char(c),\n            \
                     None => Lookup::Unmapped,\n        \
                 },\n        \
                 Err(_) => Lookup::Unmapped,\n    \
             }\n\
             }\n",
        );
    }
}
