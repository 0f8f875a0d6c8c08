use std::collections::HashMap;

/// ключи хешмапа по возрастанию
///
/// порядок обхода хешмапа зависит от хешера, поэтому всё, что попадает в сгенерированный код,
/// перебирается только через эти функции
pub fn sorted_keys<K: Ord + Copy, V>(map: &HashMap<K, V>) -> Vec<K>
{
    let mut keys: Vec<K> = map.keys().copied().collect();
    keys.sort_unstable();

    keys
}

/// записи хешмапа по возрастанию ключей
pub fn sorted_entries<K: Ord + Copy, V>(map: &HashMap<K, V>) -> Vec<(K, &V)>
{
    let mut entries: Vec<(K, &V)> = map.iter().map(|(k, v)| (*k, v)).collect();
    entries.sort_unstable_by_key(|entry| entry.0);

    entries
}

/// коды по возрастанию, без повторов
pub fn sorted_codes(codes: &[u32]) -> Vec<u32>
{
    let mut codes = codes.to_vec();
    codes.sort_unstable();
    codes.dedup();

    codes
}
