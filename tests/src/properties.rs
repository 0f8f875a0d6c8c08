use marc8_codetable_prepare::tables::{prepare, Options, UnitBudget};
use marc8_codetable_source::{CodeTableInterface, Lookup, FALLBACK_BIT, SPACE};

use crate::fixture::*;

/// коды для сравнения с эталоном: однобайтовые, все ключи многобайтовой страницы и их соседи
fn codes() -> Vec<u32>
{
    let table = table();
    let mut codes: Vec<u32> = (0 .. 0x100).collect();

    for &key in table.charset(EACC).unwrap().keys() {
        codes.extend([key - 1, key, key + 1, key ^ FALLBACK_BIT]);
    }

    codes.extend([0x210000, 0x20FFFF, 0x214022, 0x7F8000, 0x7F7FFF, u32::MAX]);
    codes.sort_unstable();
    codes.dedup();

    codes
}

const SELECTORS: [u32; 6] = [EACC, BASIC_LATIN, ANSEL, CONTROL, EMPTY, UNKNOWN];

macro_rules! generated_tests {
    ($($module: ident),+) => {
        $(
            mod $module
            {
                use super::*;
                use crate::$module::{decode, is_combining};

                /// каждая запись таблицы находится по своему коду
                #[test]
                fn round_trip()
                {
                    for (&selector, charset) in table().charsets() {
                        for (&code, &codepoint) in charset {
                            if code == SPACE {
                                continue;
                            }

                            if let Some(c) = codepoint {
                                assert_eq!(
                                    decode(code, selector),
                                    Lookup::Char(c),
                                    "0x{:X} / 0x{:X}",
                                    code,
                                    selector
                                );
                            }
                        }
                    }
                }

                /// сгенерированный код ведёт себя так же, как модель таблицы
                #[test]
                fn matches_model()
                {
                    let table = table();

                    for mode in SELECTORS {
                        for code in codes() {
                            assert_eq!(
                                decode(code, mode),
                                table.decode(code, mode),
                                "0x{:X} / 0x{:X}",
                                code,
                                mode
                            );
                        }
                    }

                    for code in 0 .. 0x100 {
                        for g0 in SELECTORS {
                            for g1 in SELECTORS {
                                assert_eq!(
                                    is_combining(code, g0, g1),
                                    table.is_combining(code, g0, g1)
                                );
                            }
                        }
                    }
                }

                #[test]
                fn multibyte_scenario()
                {
                    assert_eq!(decode(0x214021, EACC), Lookup::Char('\u{4E00}'));
                    assert_eq!(decode(0x214022, EACC), Lookup::Unmapped);
                }

                #[test]
                fn fallback()
                {
                    assert_eq!(decode(0x213026, EACC), Lookup::Char('\u{4E0B}'));
                    assert_eq!(decode(0x21, ANSEL), Lookup::Char('\u{141}'));
                    // 0xAF задан без отображения, 0x2F отсутствует
                    assert_eq!(decode(0xAF, ANSEL), Lookup::Unmapped);
                    assert_eq!(decode(0x2F, ANSEL), Lookup::Unmapped);
                    // 0x223021 задан без отображения
                    assert_eq!(decode(0x223021, EACC), Lookup::Unmapped);
                }

                #[test]
                fn unknown_charset_is_distinct()
                {
                    assert_eq!(decode(0x41, UNKNOWN), Lookup::UnknownCharset);
                    assert_eq!(decode(0x41, EMPTY), Lookup::Unmapped);
                    assert_ne!(decode(0x41, UNKNOWN), decode(0x41, EMPTY));
                }

                #[test]
                fn space_passes_through()
                {
                    for mode in SELECTORS {
                        assert_eq!(decode(SPACE, mode), Lookup::Char(' '));
                    }
                }

                #[test]
                fn zero_codepoint_is_a_value()
                {
                    assert_eq!(decode(0x30, CONTROL), Lookup::Char('\0'));
                }

                #[test]
                fn partition_edges()
                {
                    assert_eq!(decode(0x280000, EACC), Lookup::Char('\u{3000}'));
                    assert_eq!(decode(0x7F7FFF, EACC), Lookup::Char('\u{30A2}'));
                    assert_eq!(decode(0x7F8000, EACC), Lookup::Unmapped);
                    assert_eq!(decode(0x20FFFF, EACC), Lookup::Unmapped);

                    // страница 0x42 разбита на блоки по BUDGET записей
                    assert_eq!(decode(0x24, BASIC_LATIN), Lookup::Char('$'));
                    assert_eq!(decode(0x25, BASIC_LATIN), Lookup::Char('%'));
                    assert_eq!(decode(0x7E, BASIC_LATIN), Lookup::Char('~'));
                    assert_eq!(decode(0xA5, BASIC_LATIN), Lookup::Char('%'));
                    assert_eq!(decode(0x7F, BASIC_LATIN), Lookup::Unmapped);
                }

                #[test]
                fn combining_predicate()
                {
                    // пустой набор - никогда
                    for code in 0 .. 0x100 {
                        assert!(!is_combining(code, BASIC_LATIN, BASIC_LATIN));
                    }

                    // {0xE1, 0xE2} - ровно эти коды
                    let combining: Vec<u32> = (0 .. 0x100)
                        .filter(|&c| is_combining(c, BASIC_LATIN, ANSEL))
                        .collect();
                    assert_eq!(combining, vec![0xE1, 0xE2]);

                    // набора нет в таблице комбинирования
                    for code in 0 .. 0x100 {
                        assert!(!is_combining(code, CONTROL, CONTROL));
                        assert!(!is_combining(code, UNKNOWN, UNKNOWN));
                    }

                    // коды до 0x7E включительно относятся к G0
                    assert!(!is_combining(0x7E, BASIC_LATIN, ANSEL));
                }
            }
        )+
    };
}

generated_tests!(match_tree, sorted_array);

/// подготовленная таблица (эталон для генератора) совпадает с моделью при любом бюджете
#[test]
fn prepared_table_matches_model_for_any_budget()
{
    let table = table();

    for budget in [1, 2, BUDGET, 1000] {
        let options = Options {
            budget: UnitBudget::new(budget),
            ..Options::default()
        };

        let prepared = prepare(&table, &options).unwrap();

        for mode in SELECTORS {
            for code in codes() {
                assert_eq!(prepared.decode(code, mode), table.decode(code, mode));
            }
        }
    }
}

/// пустая многобайтовая страница: маршрутизатор без диапазонов, любой код не отображается
#[test]
fn empty_multibyte_page_is_unmapped()
{
    use crate::empty_multibyte::decode;

    for code in [0x210000, 0x213021, 0x214021, 0x280000, 0x692421, 0x7F7FFF, 0x7F8000, 0x41] {
        assert_eq!(decode(code, EACC), Lookup::Unmapped, "0x{:X}", code);
    }

    assert_eq!(decode(0x41, BASIC_LATIN), Lookup::Char('A'));
    assert_eq!(decode(0x41, UNKNOWN), Lookup::UnknownCharset);
    assert_eq!(decode(SPACE, EACC), Lookup::Char(' '));
}
