#[macro_use]
extern crate lazy_static;

mod codetables;
mod lookup;
mod table;

pub use codetables::parse;
pub use codetables::TableError;
pub use codetables::CODE_TABLE;

pub use lookup::with_fallback;
pub use lookup::CodeTableInterface;
pub use lookup::Lookup;

pub use table::active_selector;
pub use table::Charset;
pub use table::CodeTable;
pub use table::FALLBACK_BIT;
pub use table::G0_LAST_CODE;
pub use table::SPACE;
