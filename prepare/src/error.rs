use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// ошибки генерации. любая из них прерывает генерацию до того, как что-либо будет записано
#[derive(Debug, Error)]
pub enum PrepareError
{
    /// код многобайтовой страницы не попал ни в один диапазон - политика диапазонов
    /// не соответствует фактическому распределению кодов
    #[error("код 0x{key:X} многобайтовой страницы не попал ни в один диапазон")]
    PartitionGap { key: u32 },

    /// код многобайтовой страницы попал в несколько диапазонов
    #[error("код 0x{key:X} многобайтовой страницы попал в несколько диапазонов")]
    DuplicateClaim { key: u32 },

    /// диапазоны политики пересекаются или идут не по возрастанию
    #[error(
        "диапазоны 0x{first_start:X}..=0x{first_end:X} и 0x{second_start:X}..=0x{second_end:X} \
         пересекаются или идут не по возрастанию"
    )]
    OverlappingBands
    {
        first_start: u32,
        first_end: u32,
        second_start: u32,
        second_end: u32,
    },

    /// пустой диапазон (начало больше конца)
    #[error("пустой диапазон 0x{start:X}..=0x{end:X}")]
    InvalidBand { start: u32, end: u32 },

    /// не удалось записать результат
    #[error("не удалось записать {}: {source}", .path.display())]
    OutputFailure
    {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
