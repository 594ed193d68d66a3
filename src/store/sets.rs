use std::collections::HashSet;

use super::{Data, Error, Store, Value};

impl Store {
    fn set_ref(&mut self, key: &str) -> Result<Option<&mut HashSet<String>>, Error> {
        match self.live_entry(key) {
            None => Ok(None),
            Some(Value {
                data: Data::Set(set),
                ..
            }) => Ok(Some(set)),
            Some(_) => Err(Error::WrongType),
        }
    }

    /// A snapshot of the members at `key`; empty when the key is missing.
    fn set_members(&mut self, key: &str) -> Result<HashSet<String>, Error> {
        Ok(self.set_ref(key)?.map_or_else(HashSet::new, |s| s.clone()))
    }

    /// Adds the given members, returning how many were not already present.
    pub fn sadd(&mut self, key: &str, members: Vec<String>) -> Result<i64, Error> {
        if let Some(set) = self.set_ref(key)? {
            let added = members.into_iter().filter(|m| set.insert(m.clone())).count();
            return Ok(added as i64);
        }

        let set: HashSet<String> = members.into_iter().collect();
        let added = set.len() as i64;
        self.insert(key, Data::Set(set));
        Ok(added)
    }

    pub fn scard(&mut self, key: &str) -> Result<usize, Error> {
        Ok(self.set_ref(key)?.map_or(0, |set| set.len()))
    }

    pub fn smembers(&mut self, key: &str) -> Result<Vec<String>, Error> {
        Ok(self
            .set_ref(key)?
            .map_or_else(Vec::new, |set| set.iter().cloned().collect()))
    }

    pub fn sismember(&mut self, key: &str, member: &str) -> Result<bool, Error> {
        Ok(self.set_ref(key)?.is_some_and(|set| set.contains(member)))
    }

    /// Removes the given members, returning how many actually existed. The
    /// key itself goes away once its last member does.
    pub fn srem(&mut self, key: &str, members: &[String]) -> Result<i64, Error> {
        let removed = match self.set_ref(key)? {
            None => 0,
            Some(set) => members.iter().filter(|m| set.remove(*m)).count() as i64,
        };
        self.drop_if_empty(key);
        Ok(removed)
    }

    /// Removes and returns up to `count` arbitrary members, `None` when the
    /// key is missing. Which members come out is unspecified.
    pub fn spop(&mut self, key: &str, count: usize) -> Result<Option<Vec<String>>, Error> {
        let popped = match self.set_ref(key)? {
            None => None,
            Some(set) => {
                let members: Vec<String> = set.iter().take(count).cloned().collect();
                for member in &members {
                    set.remove(member);
                }
                Some(members)
            }
        };
        self.drop_if_empty(key);
        Ok(popped)
    }

    /// Moves `member` from one set to another, reporting whether it was
    /// present in the source. Destination type is checked before the source
    /// is touched.
    pub fn smove(&mut self, source: &str, destination: &str, member: &str) -> Result<bool, Error> {
        // Validates the destination kind up front so a wrong-type error
        // cannot leave the member removed but not added.
        self.set_ref(destination)?;

        let present = self
            .set_ref(source)?
            .is_some_and(|set| set.remove(member));
        self.drop_if_empty(source);

        if present {
            self.sadd(destination, vec![member.to_string()])?;
        }
        Ok(present)
    }

    /// Members of the first set that appear in none of the others.
    pub fn sdiff(&mut self, keys: &[String]) -> Result<Vec<String>, Error> {
        let (first, rest) = match keys.split_first() {
            None => return Ok(vec![]),
            Some(split) => split,
        };

        let mut result = self.set_members(first)?;
        for key in rest {
            for member in self.set_members(key)? {
                result.remove(&member);
            }
        }
        Ok(result.into_iter().collect())
    }

    /// Members present in every given set.
    pub fn sinter(&mut self, keys: &[String]) -> Result<Vec<String>, Error> {
        let (first, rest) = match keys.split_first() {
            None => return Ok(vec![]),
            Some(split) => split,
        };

        let mut result = self.set_members(first)?;
        for key in rest {
            let other = self.set_members(key)?;
            result.retain(|member| other.contains(member));
            if result.is_empty() {
                break;
            }
        }
        Ok(result.into_iter().collect())
    }

    /// Members present in at least one of the given sets.
    pub fn sunion(&mut self, keys: &[String]) -> Result<Vec<String>, Error> {
        let mut result = HashSet::new();
        for key in keys {
            result.extend(self.set_members(key)?);
        }
        Ok(result.into_iter().collect())
    }

    pub fn sdiffstore(&mut self, destination: &str, keys: &[String]) -> Result<i64, Error> {
        let members = self.sdiff(keys)?;
        Ok(self.store_set(destination, members))
    }

    pub fn sinterstore(&mut self, destination: &str, keys: &[String]) -> Result<i64, Error> {
        let members = self.sinter(keys)?;
        Ok(self.store_set(destination, members))
    }

    pub fn sunionstore(&mut self, destination: &str, keys: &[String]) -> Result<i64, Error> {
        let members = self.sunion(keys)?;
        Ok(self.store_set(destination, members))
    }

    /// Replaces `destination` with the computed members. An empty result
    /// deletes the destination instead of storing an empty set.
    fn store_set(&mut self, destination: &str, members: Vec<String>) -> i64 {
        if members.is_empty() {
            self.keys.remove(destination);
            return 0;
        }

        let set: HashSet<String> = members.into_iter().collect();
        let cardinality = set.len() as i64;
        self.insert(destination, Data::Set(set));
        cardinality
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn sorted(mut values: Vec<String>) -> Vec<String> {
        values.sort();
        values
    }

    #[test]
    fn sadd_counts_new_members_only() {
        let mut store = Store::new();
        assert_eq!(store.sadd("s", strings(&["a", "b", "a"])), Ok(2));
        assert_eq!(store.sadd("s", strings(&["b", "c"])), Ok(1));
        assert_eq!(store.scard("s"), Ok(3));
    }

    #[test]
    fn sadd_on_wrong_kind_fails() {
        let mut store = Store::new();
        store.set("k", Bytes::from("v"));
        assert_eq!(store.sadd("k", strings(&["a"])), Err(Error::WrongType));
    }

    #[test]
    fn smembers_and_sismember() {
        let mut store = Store::new();
        store.sadd("s", strings(&["a", "b"])).unwrap();

        assert_eq!(sorted(store.smembers("s").unwrap()), strings(&["a", "b"]));
        assert_eq!(store.sismember("s", "a"), Ok(true));
        assert_eq!(store.sismember("s", "x"), Ok(false));
        assert_eq!(store.sismember("missing", "a"), Ok(false));
        assert_eq!(store.smembers("missing"), Ok(vec![]));
    }

    #[test]
    fn srem_drops_the_key_with_the_last_member() {
        let mut store = Store::new();
        store.sadd("s", strings(&["a", "b"])).unwrap();

        assert_eq!(store.srem("s", &strings(&["a", "x"])), Ok(1));
        assert_eq!(store.srem("s", &strings(&["b"])), Ok(1));
        assert!(!store.exists("s"));
    }

    #[test]
    fn spop_removes_distinct_members() {
        let mut store = Store::new();
        store.sadd("s", strings(&["a", "b", "c", "d", "e"])).unwrap();

        let popped = store.spop("s", 2).unwrap().unwrap();
        assert_eq!(popped.len(), 2);
        assert_ne!(popped[0], popped[1]);
        assert_eq!(store.scard("s"), Ok(3));
        for member in &popped {
            assert_eq!(store.sismember("s", member), Ok(false));
        }
    }

    #[test]
    fn spop_drains_and_drops_the_key() {
        let mut store = Store::new();
        store.sadd("s", strings(&["a", "b"])).unwrap();

        assert_eq!(store.spop("s", 10).unwrap().unwrap().len(), 2);
        assert!(!store.exists("s"));
        assert_eq!(store.spop("s", 1), Ok(None));
    }

    #[test]
    fn smove_transfers_membership() {
        let mut store = Store::new();
        store.sadd("src", strings(&["a", "b"])).unwrap();

        assert_eq!(store.smove("src", "dst", "a"), Ok(true));
        assert_eq!(store.sismember("src", "a"), Ok(false));
        assert_eq!(store.sismember("dst", "a"), Ok(true));

        assert_eq!(store.smove("src", "dst", "missing"), Ok(false));
        assert_eq!(store.smove("nope", "dst", "a"), Ok(false));
    }

    #[test]
    fn sdiff_subtracts_later_sets() {
        let mut store = Store::new();
        store.sadd("a", strings(&["1", "2", "3"])).unwrap();
        store.sadd("b", strings(&["2"])).unwrap();
        store.sadd("c", strings(&["3", "4"])).unwrap();

        let keys = strings(&["a", "b", "c"]);
        assert_eq!(sorted(store.sdiff(&keys).unwrap()), strings(&["1"]));
    }

    #[test]
    fn sinter_and_sunion() {
        let mut store = Store::new();
        store.sadd("a", strings(&["1", "2", "3"])).unwrap();
        store.sadd("b", strings(&["2", "3", "4"])).unwrap();

        let keys = strings(&["a", "b"]);
        assert_eq!(sorted(store.sinter(&keys).unwrap()), strings(&["2", "3"]));
        assert_eq!(
            sorted(store.sunion(&keys).unwrap()),
            strings(&["1", "2", "3", "4"])
        );

        let with_missing = strings(&["a", "missing"]);
        assert_eq!(store.sinter(&with_missing), Ok(vec![]));
    }

    #[test]
    fn store_variants_replace_the_destination() {
        let mut store = Store::new();
        store.sadd("a", strings(&["1", "2"])).unwrap();
        store.sadd("b", strings(&["2", "3"])).unwrap();
        store.sadd("dst", strings(&["old"])).unwrap();

        let keys = strings(&["a", "b"]);
        assert_eq!(store.sunionstore("dst", &keys), Ok(3));
        assert_eq!(
            sorted(store.smembers("dst").unwrap()),
            strings(&["1", "2", "3"])
        );

        // An empty result removes the destination entirely.
        assert_eq!(store.sdiffstore("dst", &strings(&["a", "a"])), Ok(0));
        assert!(!store.exists("dst"));
    }
}
