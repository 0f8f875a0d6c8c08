use marc8_codetable_source::G0_LAST_CODE;

use crate::emit::format::hex;
use crate::tables::CombiningCase;

/// пишем предикат is_combining: ветка на каждый известный набор, неизвестный набор - false
pub fn write_is_combining(out: &mut String, cases: &[CombiningCase])
{
    out.push_str(&format!(
        "\n/// является ли код комбинируемым символом при активных наборах G0 / G1\n\
         pub fn is_combining(code: u32, g0: u32, g1: u32) -> bool\n\
         {{\n    \
             let selector = if code <= {} {{ g0 }} else {{ g1 }};\n\n    \
             match selector {{\n",
        hex(G0_LAST_CODE)
    ));

    for case in cases {
        let value = match case.codes.is_empty() {
            true => "false".to_owned(),
            false => {
                let codes: Vec<String> = case.codes.iter().map(|&code| hex(code)).collect();
                format!("matches!(code, {})", codes.join(" | "))
            }
        };

        out.push_str(&format!("        {} => {},\n", hex(case.selector), value));
    }

    out.push_str("        _ => false,\n    }\n}\n");
}
