pub use generated::decode;
pub use generated::is_combining;
pub use marc8_codetable_source::{CodeTableInterface, Lookup};

mod generated
{
    use marc8_codetable_source::Lookup;

    include!(concat!(env!("OUT_DIR"), "/codetable.rs"));
}

/// таблица перекодировки, скомпилированная в код при сборке крейта
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratedCodeTable;

impl CodeTableInterface for GeneratedCodeTable
{
    #[inline(always)]
    fn is_combining(&self, code: u32, g0: u32, g1: u32) -> bool
    {
        generated::is_combining(code, g0, g1)
    }

    #[inline(always)]
    fn decode(&self, code: u32, mode: u32) -> Lookup
    {
        generated::decode(code, mode)
    }
}

/// символ для кода в наборе mode. None - и для неотображаемого кода, и для неизвестного набора
#[inline]
pub fn decode_char(code: u32, mode: u32) -> Option<char>
{
    decode(code, mode).char()
}
