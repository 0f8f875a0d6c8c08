use crate::emit::format::{hex, multibyte_unit_name};
use crate::emit::representation::Representation;
use crate::emit::MULTIBYTE_ROUTER;
use crate::tables::Partition;

/// блоки диапазонов многобайтовой страницы и маршрутизатор между ними
pub fn write_multibyte(
    out: &mut String,
    partitions: &[Partition],
    representation: &dyn Representation,
)
{
    for partition in partitions {
        out.push_str(&format!(
            "\n/// многобайтовая страница, {}..={}\n",
            hex(partition.start),
            hex(partition.end)
        ));
        representation.write_unit(
            out,
            &multibyte_unit_name(partition.start, partition.end),
            &partition.entries,
        );
    }

    write_router(out, MULTIBYTE_ROUTER, partitions, multibyte_unit_name);
}

/// маршрутизатор: диапазоны проверяются по возрастанию, код вне диапазонов не отображается
pub fn write_router(
    out: &mut String,
    name: &str,
    units: &[Partition],
    unit_name: impl Fn(u32, u32) -> String,
)
{
    if units.is_empty() {
        out.push_str(&format!(
            "\nfn {}(_code: u32) -> Lookup\n{{\n    Lookup::Unmapped\n}}\n",
            name
        ));
        return;
    }

    out.push_str(&format!("\nfn {}(code: u32) -> Lookup\n{{\n", name));

    for unit in units {
        out.push_str(&format!(
            "    if ({} ..= {}).contains(&code) {{\n        return {}(code);\n    }}\n",
            hex(unit.start),
            hex(unit.end),
            unit_name(unit.start, unit.end)
        ));
    }

    out.push_str("\n    Lookup::Unmapped\n}\n");
}
