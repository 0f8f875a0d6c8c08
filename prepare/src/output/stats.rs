use crate::emit::MULTIBYTE_ROUTER;
use crate::tables::{Dispatch, PreparedTable};

/// информация о сгенерированных блоках
pub fn print(table: &PreparedTable)
{
    log::info!(
        "наборов символов: {}, наборов комбинируемых символов: {}, записей: {}",
        table.charsets.len(),
        table.combining.len(),
        table.entries_count(),
    );

    for (selector, dispatch) in table.charsets.iter() {
        match dispatch {
            Dispatch::Page(units) => {
                let entries: usize = units.iter().map(|unit| unit.entries.len()).sum();

                log::info!("  0x{:X}: {} записей, {} блоков", selector, entries, units.len());
            }
            Dispatch::Multibyte(partitions) => {
                log::info!(
                    "  0x{:X}: многобайтовая страница, {} диапазонов ({})",
                    selector,
                    partitions.len(),
                    MULTIBYTE_ROUTER
                );

                for partition in partitions {
                    log::info!(
                        "    0x{:X}..=0x{:X}: {} записей",
                        partition.start,
                        partition.end,
                        partition.entries.len()
                    );
                }
            }
        }
    }
}
