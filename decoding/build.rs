use std::env;
use std::path::PathBuf;

use marc8_codetable_prepare::output::generate;
use marc8_codetable_prepare::tables::Options;
use marc8_codetable_source::CODE_TABLE;

/// компилируем встроенную таблицу перекодировки в OUT_DIR/codetable.rs
fn main() -> anyhow::Result<()>
{
    println!("cargo:rerun-if-changed=build.rs");

    let out = PathBuf::from(env::var("OUT_DIR")?);

    generate(&CODE_TABLE, &Options::default(), &out.join("codetable.rs"))?;

    Ok(())
}
