use marc8_codetable_source::{FALLBACK_BIT, SPACE};

use crate::emit::format::{hex, page_part_name, page_unit_name};
use crate::emit::multibyte::write_router;
use crate::emit::representation::Representation;
use crate::emit::MULTIBYTE_ROUTER;
use crate::tables::{Dispatch, Partition};

/// decode - поиск с одной повторной попыткой для кода с переключенным старшим битом
pub fn write_decode(out: &mut String)
{
    out.push_str(&format!(
        "\n/// символ Unicode для кода в наборе символов mode\n\
         pub fn decode(code: u32, mode: u32) -> Lookup\n\
         {{\n    \
             match lookup(code, mode) {{\n        \
                 Lookup::Unmapped => lookup(code ^ {}, mode),\n        \
                 found => found,\n    \
             }}\n\
         }}\n",
        hex(FALLBACK_BIT)
    ));
}

/// lookup - выбор блока по набору символов. неизвестный набор отличается от неизвестного кода
pub fn write_lookup(out: &mut String, charsets: &[(u32, Dispatch)])
{
    out.push_str(&format!(
        "\nfn lookup(code: u32, mode: u32) -> Lookup\n\
         {{\n    \
             if code == {} {{\n        \
                 return Lookup::Char(' ');\n    \
             }}\n\n    \
             match mode {{\n",
        hex(SPACE)
    ));

    for (selector, dispatch) in charsets {
        let unit = match dispatch {
            Dispatch::Page(_) => page_unit_name(*selector),
            Dispatch::Multibyte(_) => MULTIBYTE_ROUTER.to_owned(),
        };

        out.push_str(&format!("        {} => {}(code),\n", hex(*selector), unit));
    }

    out.push_str("        _ => Lookup::UnknownCharset,\n    }\n}\n");
}

/// блок одно- или двухбайтовой страницы. страница, разбитая на несколько блоков,
/// получает маршрутизатор с тем же именем, что и у единственного блока
pub fn write_page(
    out: &mut String,
    selector: u32,
    units: &[Partition],
    representation: &dyn Representation,
)
{
    if let [unit] = units {
        out.push_str(&format!("\n/// набор символов {}\n", hex(selector)));
        representation.write_unit(out, &page_unit_name(selector), &unit.entries);
        return;
    }

    for unit in units {
        out.push_str(&format!(
            "\n/// набор символов {}, {}..={}\n",
            hex(selector),
            hex(unit.start),
            hex(unit.end)
        ));
        representation.write_unit(
            out,
            &page_part_name(selector, unit.start, unit.end),
            &unit.entries,
        );
    }

    write_router(out, &page_unit_name(selector), units, |start, end| {
        page_part_name(selector, start, end)
    });
}
