use std::collections::VecDeque;

use super::strings::clamp_range;
use super::{Data, Error, Store, Value};

impl Store {
    fn list(&mut self, key: &str) -> Result<Option<&mut VecDeque<String>>, Error> {
        match self.live_entry(key) {
            None => Ok(None),
            Some(Value {
                data: Data::List(list),
                ..
            }) => Ok(Some(list)),
            Some(_) => Err(Error::WrongType),
        }
    }

    /// Pushes values at the head, one by one, so the last argument ends up
    /// first. Returns the resulting length.
    pub fn lpush(&mut self, key: &str, values: Vec<String>) -> Result<usize, Error> {
        if let Some(list) = self.list(key)? {
            for value in values {
                list.push_front(value);
            }
            return Ok(list.len());
        }

        let mut list = VecDeque::new();
        for value in values {
            list.push_front(value);
        }
        let len = list.len();
        self.insert(key, Data::List(list));
        Ok(len)
    }

    /// Appends values at the tail. Returns the resulting length.
    pub fn rpush(&mut self, key: &str, values: Vec<String>) -> Result<usize, Error> {
        if let Some(list) = self.list(key)? {
            list.extend(values);
            return Ok(list.len());
        }

        let list: VecDeque<String> = values.into();
        let len = list.len();
        self.insert(key, Data::List(list));
        Ok(len)
    }

    /// Head push that refuses to create the key. Returns 0 when the key does
    /// not hold a list.
    pub fn lpushx(&mut self, key: &str, values: Vec<String>) -> Result<usize, Error> {
        match self.list(key)? {
            None => Ok(0),
            Some(list) => {
                for value in values {
                    list.push_front(value);
                }
                Ok(list.len())
            }
        }
    }

    pub fn rpushx(&mut self, key: &str, values: Vec<String>) -> Result<usize, Error> {
        match self.list(key)? {
            None => Ok(0),
            Some(list) => {
                list.extend(values);
                Ok(list.len())
            }
        }
    }

    pub fn lpop(&mut self, key: &str) -> Result<Option<String>, Error> {
        let popped = self.list(key)?.and_then(|list| list.pop_front());
        self.drop_if_empty(key);
        Ok(popped)
    }

    pub fn rpop(&mut self, key: &str) -> Result<Option<String>, Error> {
        let popped = self.list(key)?.and_then(|list| list.pop_back());
        self.drop_if_empty(key);
        Ok(popped)
    }

    pub fn llen(&mut self, key: &str) -> Result<usize, Error> {
        Ok(self.list(key)?.map_or(0, |list| list.len()))
    }

    /// The element at `index`, counting from the tail when negative.
    pub fn lindex(&mut self, key: &str, index: i64) -> Result<Option<String>, Error> {
        let list = match self.list(key)? {
            None => return Ok(None),
            Some(list) => list,
        };

        let index = if index < 0 {
            list.len() as i64 + index
        } else {
            index
        };
        if index < 0 {
            return Ok(None);
        }
        Ok(list.get(index as usize).cloned())
    }

    /// Overwrites the element at `index`. Unlike the push family this fails
    /// loudly: a missing key and an out-of-bounds index are both errors.
    pub fn lset(&mut self, key: &str, index: i64, value: String) -> Result<(), Error> {
        let list = match self.list(key)? {
            None => return Err(Error::NoSuchKey),
            Some(list) => list,
        };

        let index = if index < 0 {
            list.len() as i64 + index
        } else {
            index
        };
        if index < 0 || index as usize >= list.len() {
            return Err(Error::IndexOutOfRange);
        }

        list[index as usize] = value;
        Ok(())
    }

    /// Elements between the inclusive, possibly-negative offsets, head first.
    pub fn lrange(&mut self, key: &str, start: i64, end: i64) -> Result<Vec<String>, Error> {
        let list = match self.list(key)? {
            None => return Ok(vec![]),
            Some(list) => list,
        };

        match clamp_range(start, end, list.len() as i64) {
            None => Ok(vec![]),
            Some((start, end)) => Ok(list.range(start..end + 1).cloned().collect()),
        }
    }

    /// Removes up to `count` occurrences of `value`: from the head when
    /// positive, from the tail when negative, all of them when zero. Returns
    /// how many were removed.
    pub fn lrem(&mut self, key: &str, count: i64, value: &str) -> Result<i64, Error> {
        let removed = match self.list(key)? {
            None => 0,
            Some(list) => {
                let limit = if count == 0 {
                    usize::MAX
                } else {
                    count.unsigned_abs() as usize
                };

                let mut removed = 0;
                let mut kept = VecDeque::with_capacity(list.len());
                if count < 0 {
                    while let Some(element) = list.pop_back() {
                        if removed < limit && element == value {
                            removed += 1;
                        } else {
                            kept.push_front(element);
                        }
                    }
                } else {
                    while let Some(element) = list.pop_front() {
                        if removed < limit && element == value {
                            removed += 1;
                        } else {
                            kept.push_back(element);
                        }
                    }
                }
                *list = kept;
                removed as i64
            }
        };
        self.drop_if_empty(key);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lpush_reverses_argument_order() {
        let mut store = Store::new();
        assert_eq!(store.lpush("l", strings(&["a", "b", "c"])), Ok(3));
        assert_eq!(store.lrange("l", 0, -1), Ok(strings(&["c", "b", "a"])));
    }

    #[test]
    fn rpush_appends_in_order() {
        let mut store = Store::new();
        assert_eq!(store.rpush("l", strings(&["a", "b"])), Ok(2));
        assert_eq!(store.rpush("l", strings(&["c"])), Ok(3));
        assert_eq!(store.lrange("l", 0, -1), Ok(strings(&["a", "b", "c"])));
    }

    #[test]
    fn push_on_wrong_kind_fails() {
        let mut store = Store::new();
        store.set("s", Bytes::from("v"));
        assert_eq!(store.lpush("s", strings(&["a"])), Err(Error::WrongType));
        assert_eq!(store.rpush("s", strings(&["a"])), Err(Error::WrongType));
    }

    #[test]
    fn pushx_requires_an_existing_list() {
        let mut store = Store::new();
        assert_eq!(store.lpushx("l", strings(&["a"])), Ok(0));
        assert_eq!(store.rpushx("l", strings(&["a"])), Ok(0));
        assert!(!store.exists("l"));

        store.rpush("l", strings(&["a"])).unwrap();
        assert_eq!(store.lpushx("l", strings(&["b"])), Ok(2));
        assert_eq!(store.rpushx("l", strings(&["c"])), Ok(3));
    }

    #[test]
    fn pop_drains_and_drops_the_key() {
        let mut store = Store::new();
        store.rpush("l", strings(&["a", "b"])).unwrap();

        assert_eq!(store.lpop("l"), Ok(Some("a".to_string())));
        assert_eq!(store.rpop("l"), Ok(Some("b".to_string())));
        assert!(!store.exists("l"));
        assert_eq!(store.lpop("l"), Ok(None));
    }

    #[test]
    fn lindex_supports_negative_offsets() {
        let mut store = Store::new();
        store.rpush("l", strings(&["a", "b", "c"])).unwrap();

        assert_eq!(store.lindex("l", 0), Ok(Some("a".to_string())));
        assert_eq!(store.lindex("l", -1), Ok(Some("c".to_string())));
        assert_eq!(store.lindex("l", 3), Ok(None));
        assert_eq!(store.lindex("l", -4), Ok(None));
        assert_eq!(store.lindex("missing", 0), Ok(None));
    }

    #[test]
    fn lset_validates_key_and_index() {
        let mut store = Store::new();
        assert_eq!(
            store.lset("missing", 0, "x".to_string()),
            Err(Error::NoSuchKey)
        );

        store.rpush("l", strings(&["a", "b", "c"])).unwrap();
        assert_eq!(store.lset("l", 1, "B".to_string()), Ok(()));
        assert_eq!(store.lset("l", -1, "C".to_string()), Ok(()));
        assert_eq!(
            store.lset("l", 3, "x".to_string()),
            Err(Error::IndexOutOfRange)
        );
        assert_eq!(store.lrange("l", 0, -1), Ok(strings(&["a", "B", "C"])));
    }

    #[test]
    fn lrange_clamps_offsets() {
        let mut store = Store::new();
        store.rpush("l", strings(&["a", "b", "c"])).unwrap();

        assert_eq!(store.lrange("l", 0, 0), Ok(strings(&["a"])));
        assert_eq!(store.lrange("l", -2, -1), Ok(strings(&["b", "c"])));
        assert_eq!(store.lrange("l", 0, 100), Ok(strings(&["a", "b", "c"])));
        assert_eq!(store.lrange("l", 2, 1), Ok(vec![]));
        assert_eq!(store.lrange("missing", 0, -1), Ok(vec![]));
    }

    #[test]
    fn lrem_honors_direction_and_count() {
        let mut store = Store::new();
        store
            .rpush("l", strings(&["a", "b", "a", "c", "a"]))
            .unwrap();
        assert_eq!(store.lrem("l", 2, "a"), Ok(2));
        assert_eq!(store.lrange("l", 0, -1), Ok(strings(&["b", "c", "a"])));

        let mut store = Store::new();
        store
            .rpush("l", strings(&["a", "b", "a", "c", "a"]))
            .unwrap();
        assert_eq!(store.lrem("l", -2, "a"), Ok(2));
        assert_eq!(store.lrange("l", 0, -1), Ok(strings(&["a", "b", "c"])));

        let mut store = Store::new();
        store
            .rpush("l", strings(&["a", "b", "a", "c", "a"]))
            .unwrap();
        assert_eq!(store.lrem("l", 0, "a"), Ok(3));
        assert_eq!(store.lrange("l", 0, -1), Ok(strings(&["b", "c"])));
    }

    #[test]
    fn lrem_of_every_element_drops_the_key() {
        let mut store = Store::new();
        store.rpush("l", strings(&["a", "a"])).unwrap();
        assert_eq!(store.lrem("l", 0, "a"), Ok(2));
        assert!(!store.exists("l"));
    }
}
