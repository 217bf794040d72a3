//! Serde adapter serializing `HashMap<K, V>` as a sequence of pairs.
//!
//! JSON object keys must be strings, which rules out composite struct keys
//! like (sport, platform). Persisting as `[[key, value], ...]` keeps the
//! composite key typed end to end instead of re-encoding it into a
//! delimiter-joined string.

use std::collections::HashMap;
use std::hash::Hash;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

pub fn serialize<S, K, V>(map: &HashMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    K: Serialize,
    V: Serialize,
{
    let pairs: Vec<(&K, &V)> = map.iter().collect();
    pairs.serialize(serializer)
}

pub fn deserialize<'de, D, K, V>(deserializer: D) -> Result<HashMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
{
    let pairs: Vec<(K, V)> = Vec::deserialize(deserializer)?;
    Ok(pairs.into_iter().collect())
}
