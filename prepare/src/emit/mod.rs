mod combining;
mod format;
mod multibyte;
mod pages;
mod representation;

pub use representation::MatchTree;
pub use representation::Representation;
pub use representation::RepresentationKind;
pub use representation::SortedArray;

use crate::tables::{Dispatch, PreparedTable};

/// имя функции-маршрутизатора многобайтовой страницы
pub const MULTIBYTE_ROUTER: &str = "lookup_multibyte";

/// заголовок сгенерированного файла. никаких дат и путей - результат зависит только от таблицы
const HEADER: &str = "\
// Таблица перекодировки MARC-8 -> Unicode.
// Сгенерировано marc8_codetable_prepare, не редактировать вручную.
// Подключается через include! в модуль, где доступен тип Lookup.
";

/// текст сгенерированного модуля: is_combining, decode и блоки поиска
pub fn render(table: &PreparedTable, representation: &dyn Representation) -> String
{
    let mut out = String::from(HEADER);

    combining::write_is_combining(&mut out, &table.combining);
    pages::write_decode(&mut out);
    pages::write_lookup(&mut out, &table.charsets);

    for (selector, dispatch) in table.charsets.iter() {
        match dispatch {
            Dispatch::Page(units) => pages::write_page(&mut out, *selector, units, representation),
            Dispatch::Multibyte(partitions) => {
                multibyte::write_multibyte(&mut out, partitions, representation)
            }
        }
    }

    out
}
