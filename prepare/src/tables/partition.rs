use std::ops::RangeInclusive;

use crate::error::PrepareError;
use crate::tables::{lookup_entries, Entry};

use marc8_codetable_source::Lookup;

/// диапазон многобайтовой страницы и попавшие в него записи
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition
{
    /// начало диапазона (включительно)
    pub start: u32,
    /// конец диапазона (включительно)
    pub end: u32,
    /// записи, ключи которых лежат в диапазоне, по возрастанию
    pub entries: Vec<Entry>,
}

impl Partition
{
    #[inline(always)]
    pub fn contains(&self, code: u32) -> bool
    {
        (self.start ..= self.end).contains(&code)
    }

    /// поиск кода в записях диапазона
    pub fn lookup(&self, code: u32) -> Lookup
    {
        lookup_entries(&self.entries, code)
    }
}

/// ограничение размера одного блока принятия решения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitBudget
{
    /// максимальное количество записей в блоке
    pub max_entries: usize,
}

impl UnitBudget
{
    pub fn new(max_entries: usize) -> Self
    {
        Self {
            max_entries: max_entries.max(1),
        }
    }
}

/// разбиваем записи многобайтовой страницы (отсортированные по возрастанию кодов) на диапазоны:
///     - каждой полосе политики соответствует хотя бы один диапазон
///     - полоса, записей в которой больше, чем позволяет бюджет, делится по границам ключей
///     - пустая страница не даёт ни одного диапазона
pub fn partition(
    entries: &[Entry],
    bands: &[RangeInclusive<u32>],
    budget: UnitBudget,
) -> Result<Vec<Partition>, PrepareError>
{
    check_bands(bands)?;

    if entries.is_empty() {
        return Ok(vec![]);
    }

    let mut partitions = vec![];

    for band in bands {
        let (start, end) = (*band.start(), *band.end());

        let from = entries.partition_point(|entry| entry.0 < start);
        let to = entries.partition_point(|entry| entry.0 <= end);

        let band_partitions = split(start, end, &entries[from .. to], budget);

        if band_partitions.len() > 1 {
            log::debug!(
                "полоса 0x{:X}..=0x{:X} ({} записей) разделена на {} диапазонов",
                start,
                end,
                to - from,
                band_partitions.len()
            );
        }

        partitions.extend(band_partitions);
    }

    verify(entries, &partitions)?;

    Ok(partitions)
}

/// делим одно- или двухбайтовую страницу на блоки не более чем по бюджету записей.
/// страница, укладывающаяся в бюджет, остаётся одним блоком на всё пространство кодов
pub fn split_page(entries: &[Entry], budget: UnitBudget) -> Result<Vec<Partition>, PrepareError>
{
    let units = split(0, u32::MAX, entries, budget);

    if units.len() > 1 {
        log::debug!(
            "страница ({} записей) разделена на {} блоков",
            entries.len(),
            units.len()
        );
    }

    verify(entries, &units)?;

    Ok(units)
}

/// полосы должны быть непустыми, идти по возрастанию и не пересекаться
fn check_bands(bands: &[RangeInclusive<u32>]) -> Result<(), PrepareError>
{
    if let Some(band) = bands.iter().find(|band| band.is_empty()) {
        return Err(PrepareError::InvalidBand {
            start: *band.start(),
            end: *band.end(),
        });
    }

    for pair in bands.windows(2) {
        if pair[0].end() >= pair[1].start() {
            return Err(PrepareError::OverlappingBands {
                first_start: *pair[0].start(),
                first_end: *pair[0].end(),
                second_start: *pair[1].start(),
                second_end: *pair[1].end(),
            });
        }
    }

    Ok(())
}

/// делим полосу на последовательные диапазоны не более чем по max_entries записей.
/// первый диапазон начинается с начала полосы, последний заканчивается её концом,
/// каждый следующий начинается с первого ключа своей порции
fn split(start: u32, end: u32, entries: &[Entry], budget: UnitBudget) -> Vec<Partition>
{
    let chunks: Vec<&[Entry]> = entries.chunks(budget.max_entries.max(1)).collect();

    if chunks.len() <= 1 {
        return vec![Partition {
            start,
            end,
            entries: entries.to_vec(),
        }];
    }

    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| Partition {
            start: match i == 0 {
                true => start,
                false => chunk[0].0,
            },
            end: match chunks.get(i + 1) {
                Some(next) => next[0].0 - 1,
                None => end,
            },
            entries: chunk.to_vec(),
        })
        .collect()
}

/// каждый ключ должен принадлежать ровно одному диапазону, причём лежать в его границах
fn verify(entries: &[Entry], partitions: &[Partition]) -> Result<(), PrepareError>
{
    for &(key, _) in entries {
        let owners: Vec<&Partition> = partitions
            .iter()
            .filter(|p| p.entries.binary_search_by_key(&key, |e| e.0).is_ok())
            .collect();

        match owners.as_slice() {
            [owner] if owner.contains(key) => (),
            [] | [_] => return Err(PrepareError::PartitionGap { key }),
            _ => return Err(PrepareError::DuplicateClaim { key }),
        }
    }

    Ok(())
}
