mod hashes;
mod lists;
mod sets;
mod strings;
pub mod zset;

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use glob_match::glob_match;
use thiserror::Error as ThisError;

use zset::SortedSet;

#[derive(Debug, ThisError, PartialEq)]
pub enum Error {
    #[error("WRONGTYPE Operation against a key holding the wrong kind of value")]
    WrongType,
    #[error("ERR value is not an integer or out of range")]
    InvalidInt,
    #[error("ERR value is not a valid float")]
    InvalidFloat,
    #[error("ERR increment or decrement would overflow")]
    Overflow,
    #[error("ERR invalid expire time in setex")]
    InvalidExpireTime,
    #[error("ERR string exceeds maximum allowed size (512MB)")]
    StringTooLong,
    #[error("ERR bit is not an integer or out of range")]
    InvalidBit,
    #[error("ERR bit offset is not an integer or out of range")]
    BitOffsetOutOfRange,
    #[error("ERR offset is out of range")]
    OffsetOutOfRange,
    #[error("ERR no such key")]
    NoSuchKey,
    #[error("ERR index out of range")]
    IndexOutOfRange,
    #[error("ERR hash value is not an integer")]
    HashValueNotInt,
    #[error("ERR hash value is not a float")]
    HashValueNotFloat,
}

/// The payload of a keyspace entry, one variant per supported kind. Every
/// typed operation checks the variant at its entry point and fails with
/// `Error::WrongType` before mutating anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    String(Bytes),
    Hash(HashMap<String, String>),
    List(VecDeque<String>),
    Set(HashSet<String>),
    SortedSet(SortedSet),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub data: Data,
    /// Unix timestamp (seconds) after which the value is dead. `None` means
    /// the key never expires.
    pub expire_at: Option<i64>,
}

impl Value {
    fn new(data: Data) -> Value {
        Value {
            data,
            expire_at: None,
        }
    }

    /// A value is alive iff it has not expired and it is not an empty
    /// collection. An emptied collection and an expired key are the same
    /// kind of absent.
    pub fn is_alive(&self) -> bool {
        let expired = match self.expire_at {
            None => false,
            Some(at) => at < now(),
        };

        let empty = match &self.data {
            Data::String(_) => false,
            Data::Hash(hash) => hash.is_empty(),
            Data::List(list) => list.is_empty(),
            Data::Set(set) => set.is_empty(),
            Data::SortedSet(zset) => zset.is_empty(),
        };

        !expired && !empty
    }

    fn ttl(&self) -> i64 {
        match self.expire_at {
            // -1: the key exists but has no associated expire.
            None => -1,
            Some(at) => {
                let remaining = at - now();
                if remaining >= 0 {
                    remaining
                } else {
                    -2
                }
            }
        }
    }

    pub fn type_name(&self) -> &'static str {
        match &self.data {
            Data::String(_) => "string",
            Data::Hash(_) => "hash",
            Data::List(_) => "list",
            Data::Set(_) => "set",
            Data::SortedSet(_) => "zset",
        }
    }
}

pub(crate) fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}

/// The keyspace. Owned exclusively by the executor's worker task, which is
/// what makes the mutations below safe without any locking.
#[derive(Default)]
pub struct Store {
    keys: HashMap<String, Value>,
}

impl Store {
    pub fn new() -> Store {
        Store::default()
    }

    /// Fetches a live entry, removing it first if it turns out to be dead.
    /// All keyed access funnels through here, so an expired or emptied value
    /// is never observable.
    pub(crate) fn live_entry(&mut self, key: &str) -> Option<&mut Value> {
        let dead = self.keys.get(key).is_some_and(|value| !value.is_alive());
        if dead {
            self.keys.remove(key);
        }
        self.keys.get_mut(key)
    }

    /// Inserts a fresh value with no expiration, replacing whatever was
    /// stored before.
    pub(crate) fn insert(&mut self, key: &str, data: Data) {
        self.keys.insert(key.to_string(), Value::new(data));
    }

    /// Collections never linger empty: once a mutation empties one, the key
    /// is dropped from the keyspace.
    pub(crate) fn drop_if_empty(&mut self, key: &str) {
        if self.keys.get(key).is_some_and(|value| !value.is_alive()) {
            self.keys.remove(key);
        }
    }

    /// Remaining time to live in seconds: -2 if the key does not exist, -1
    /// if it exists but has no associated expire.
    pub fn ttl(&mut self, key: &str) -> i64 {
        match self.live_entry(key) {
            None => -2,
            Some(value) => value.ttl(),
        }
    }

    /// The deadline saturates at the i64 limits, so an extreme `seconds`
    /// means "never expires" rather than a wrapped-around past timestamp.
    pub fn expire(&mut self, key: &str, seconds: i64) -> bool {
        self.expire_at(key, now().saturating_add(seconds))
    }

    pub fn expire_at(&mut self, key: &str, timestamp: i64) -> bool {
        match self.live_entry(key) {
            None => false,
            Some(value) => {
                value.expire_at = Some(timestamp);
                true
            }
        }
    }

    /// All live keys matching a glob pattern, in no particular order.
    pub fn pattern_keys(&self, pattern: &str) -> Vec<String> {
        self.keys
            .iter()
            .filter(|(key, value)| value.is_alive() && glob_match(pattern, key))
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn exists(&self, key: &str) -> bool {
        self.keys.get(key).is_some_and(|value| value.is_alive())
    }

    /// Removes a key. Returns whether a live value was actually deleted;
    /// removing an already-dead entry counts as a miss.
    pub fn del(&mut self, key: &str) -> bool {
        match self.keys.remove(key) {
            Some(value) => value.is_alive(),
            None => false,
        }
    }

    pub fn type_name(&mut self, key: &str) -> &'static str {
        match self.live_entry(key) {
            None => "none",
            Some(value) => value.type_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_reports_absent_and_persistent_keys() {
        let mut store = Store::new();
        assert_eq!(store.ttl("missing"), -2);

        store.set("key", Bytes::from("value"));
        assert_eq!(store.ttl("key"), -1);
    }

    #[test]
    fn expire_sets_a_deadline() {
        let mut store = Store::new();
        assert!(!store.expire("missing", 100));

        store.set("key", Bytes::from("value"));
        assert!(store.expire("key", 100));

        let ttl = store.ttl("key");
        assert!(ttl > 0 && ttl <= 100);
    }

    #[test]
    fn expire_with_extreme_seconds_saturates() {
        let mut store = Store::new();
        store.set("key", Bytes::from("value"));

        assert!(store.expire("key", i64::MAX));
        assert!(store.exists("key"));
        assert!(store.ttl("key") > 0);
    }

    #[test]
    fn expired_value_is_absent_everywhere() {
        let mut store = Store::new();
        store.set("key", Bytes::from("value"));
        assert!(store.expire_at("key", now() - 1));

        assert_eq!(store.get("key"), Ok(None));
        assert!(!store.exists("key"));
        assert_eq!(store.ttl("key"), -2);
        assert_eq!(store.type_name("key"), "none");
    }

    #[test]
    fn del_on_expired_key_reports_a_miss() {
        let mut store = Store::new();
        store.set("key", Bytes::from("value"));
        store.expire_at("key", now() - 1);

        assert!(!store.del("key"));
        assert!(!store.del("key"));
    }

    #[test]
    fn pattern_keys_matches_globs() {
        let mut store = Store::new();
        store.set("user:1", Bytes::from("a"));
        store.set("user:2", Bytes::from("b"));
        store.set("other", Bytes::from("c"));

        let mut keys = store.pattern_keys("user:*");
        keys.sort();
        assert_eq!(keys, vec!["user:1", "user:2"]);

        assert_eq!(store.pattern_keys("*").len(), 3);
        assert!(store.pattern_keys("nope*").is_empty());
    }

    #[test]
    fn type_name_per_kind() {
        let mut store = Store::new();
        store.set("s", Bytes::from("v"));
        store.hset("h", "f", "v").unwrap();
        store.rpush("l", vec!["a".to_string()]).unwrap();
        store.sadd("set", vec!["a".to_string()]).unwrap();
        store.zadd("z", vec![(1.0, "a".to_string())]).unwrap();

        assert_eq!(store.type_name("s"), "string");
        assert_eq!(store.type_name("h"), "hash");
        assert_eq!(store.type_name("l"), "list");
        assert_eq!(store.type_name("set"), "set");
        assert_eq!(store.type_name("z"), "zset");
        assert_eq!(store.type_name("missing"), "none");
    }
}
