use thiserror::Error;

use crate::table::{Charset, CodeTable};

lazy_static! {
    /// таблица перекодировки MARC-8, поставляемая вместе с крейтом
    pub static ref CODE_TABLE: CodeTable = match parse(DATA) {
        Ok(table) => table,
        Err(e) => panic!("\n\nошибка во встроенной таблице перекодировки: {}\n\n", e),
    };
}

const DATA: &str = include_str!("./../data/codetables.txt");

/// ошибка разбора текстового представления таблицы
#[derive(Debug, Error, PartialEq)]
#[error("строка {line}: {message}")]
pub struct TableError
{
    /// номер строки (с единицы), 0 - ошибка относится ко всей таблице
    pub line: usize,
    pub message: String,
}

/// разбор текстового представления таблицы:
///
/// ```text
/// multibyte 0x31              - селектор многобайтовой кодовой страницы
/// charset 0x45                - начало кодовой страницы
/// 0xA1 0x0141                 - код и кодпоинт Unicode
/// 0xAF -                      - код без отображения
/// combining 0x45 0xE0 0xE1    - комбинируемые коды набора (может быть пустым)
/// ```
pub fn parse(source: &str) -> Result<CodeTable, TableError>
{
    let mut multibyte = None;
    let mut charsets: Vec<(u32, Charset)> = vec![];
    let mut combining: Vec<(u32, Vec<u32>)> = vec![];

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;

        // отбрасываем комментарии
        let line = match line.split_once('#') {
            Some((data, _)) => data,
            None => line,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();

        let Some(&keyword) = fields.first() else {
            continue;
        };

        match keyword {
            "multibyte" => {
                expect_fields(&fields, 2, line_no)?;

                if multibyte.is_some() {
                    return Err(error(line_no, "многобайтовая страница указана повторно"));
                }

                multibyte = Some(number(fields[1], line_no)?);
            }
            "charset" => {
                expect_fields(&fields, 2, line_no)?;

                let selector = number(fields[1], line_no)?;

                if charsets.iter().any(|(s, _)| *s == selector) {
                    return Err(error(
                        line_no,
                        &format!("кодовая страница 0x{:X} указана повторно", selector),
                    ));
                }

                charsets.push((selector, Charset::new()));
            }
            "combining" => {
                if fields.len() < 2 {
                    return Err(error(line_no, "не указан селектор"));
                }

                let selector = number(fields[1], line_no)?;
                let codes = fields[2 ..]
                    .iter()
                    .map(|field| number(field, line_no))
                    .collect::<Result<Vec<u32>, TableError>>()?;

                combining.push((selector, codes));
            }
            _ => {
                expect_fields(&fields, 2, line_no)?;

                let Some((selector, charset)) = charsets.last_mut() else {
                    return Err(error(line_no, "запись вне кодовой страницы"));
                };

                let code = number(fields[0], line_no)?;
                let codepoint = match fields[1] {
                    "-" => None,
                    value => Some(codepoint(value, line_no)?),
                };

                if charset.insert(code, codepoint).is_some() {
                    return Err(error(
                        line_no,
                        &format!("код 0x{:X} повторяется в странице 0x{:X}", code, selector),
                    ));
                }
            }
        }
    }

    let Some(multibyte) = multibyte else {
        return Err(error(0, "не указана многобайтовая страница"));
    };

    let mut table = CodeTable::new(multibyte);

    for (selector, charset) in charsets {
        table.insert_charset(selector, charset);
    }

    for (selector, codes) in combining {
        table.insert_combining(selector, codes);
    }

    Ok(table)
}

fn error(line: usize, message: &str) -> TableError
{
    TableError {
        line,
        message: message.to_owned(),
    }
}

fn expect_fields(fields: &[&str], count: usize, line: usize) -> Result<(), TableError>
{
    match fields.len() == count {
        true => Ok(()),
        false => Err(error(
            line,
            &format!("ожидалось полей: {}, получено: {}", count, fields.len()),
        )),
    }
}

/// шестнадцатеричное число вида 0x...
fn number(field: &str, line: usize) -> Result<u32, TableError>
{
    let digits = field
        .strip_prefix("0x")
        .ok_or_else(|| error(line, &format!("ожидалось число вида 0x..: {}", field)))?;

    u32::from_str_radix(digits, 16)
        .map_err(|e| error(line, &format!("некорректное число {}: {}", field, e)))
}

fn codepoint(field: &str, line: usize) -> Result<char, TableError>
{
    let code = number(field, line)?;

    char::from_u32(code)
        .ok_or_else(|| error(line, &format!("U+{:04X} - не скалярное значение", code)))
}
