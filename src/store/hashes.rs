use std::collections::HashMap;

use super::{Data, Error, Store, Value};

impl Store {
    fn hash_map(&mut self, key: &str) -> Result<Option<&mut HashMap<String, String>>, Error> {
        match self.live_entry(key) {
            None => Ok(None),
            Some(Value {
                data: Data::Hash(hash),
                ..
            }) => Ok(Some(hash)),
            Some(_) => Err(Error::WrongType),
        }
    }

    /// Sets a single field. Returns 1 when the field was added, 0 when an
    /// existing field was overwritten.
    pub fn hset(&mut self, key: &str, field: &str, value: &str) -> Result<i64, Error> {
        if let Some(hash) = self.hash_map(key)? {
            let added = hash.insert(field.to_string(), value.to_string()).is_none();
            return Ok(i64::from(added));
        }

        let mut hash = HashMap::new();
        hash.insert(field.to_string(), value.to_string());
        self.insert(key, Data::Hash(hash));
        Ok(1)
    }

    /// Sets the field only if it does not exist yet.
    pub fn hsetnx(&mut self, key: &str, field: &str, value: &str) -> Result<bool, Error> {
        if let Some(hash) = self.hash_map(key)? {
            if hash.contains_key(field) {
                return Ok(false);
            }
            hash.insert(field.to_string(), value.to_string());
            return Ok(true);
        }

        let mut hash = HashMap::new();
        hash.insert(field.to_string(), value.to_string());
        self.insert(key, Data::Hash(hash));
        Ok(true)
    }

    pub fn hget(&mut self, key: &str, field: &str) -> Result<Option<String>, Error> {
        Ok(self
            .hash_map(key)?
            .and_then(|hash| hash.get(field).cloned()))
    }

    /// Values for all requested fields, nil for each missing one. A missing
    /// key reads as an empty hash.
    pub fn hmget(&mut self, key: &str, fields: &[String]) -> Result<Vec<Option<String>>, Error> {
        match self.hash_map(key)? {
            None => Ok(vec![None; fields.len()]),
            Some(hash) => Ok(fields
                .iter()
                .map(|field| hash.get(field).cloned())
                .collect()),
        }
    }

    pub fn hgetall(&mut self, key: &str) -> Result<Vec<(String, String)>, Error> {
        match self.hash_map(key)? {
            None => Ok(vec![]),
            Some(hash) => Ok(hash
                .iter()
                .map(|(field, value)| (field.clone(), value.clone()))
                .collect()),
        }
    }

    pub fn hkeys(&mut self, key: &str) -> Result<Vec<String>, Error> {
        match self.hash_map(key)? {
            None => Ok(vec![]),
            Some(hash) => Ok(hash.keys().cloned().collect()),
        }
    }

    pub fn hvals(&mut self, key: &str) -> Result<Vec<String>, Error> {
        match self.hash_map(key)? {
            None => Ok(vec![]),
            Some(hash) => Ok(hash.values().cloned().collect()),
        }
    }

    pub fn hlen(&mut self, key: &str) -> Result<usize, Error> {
        Ok(self.hash_map(key)?.map_or(0, |hash| hash.len()))
    }

    pub fn hexists(&mut self, key: &str, field: &str) -> Result<bool, Error> {
        Ok(self
            .hash_map(key)?
            .is_some_and(|hash| hash.contains_key(field)))
    }

    pub fn hstrlen(&mut self, key: &str, field: &str) -> Result<usize, Error> {
        Ok(self
            .hash_map(key)?
            .and_then(|hash| hash.get(field))
            .map_or(0, |value| value.len()))
    }

    /// Removes the given fields, returning how many actually existed. The
    /// key itself goes away once its last field does.
    pub fn hdel(&mut self, key: &str, fields: &[String]) -> Result<i64, Error> {
        let removed = match self.hash_map(key)? {
            None => 0,
            Some(hash) => fields
                .iter()
                .filter(|field| hash.remove(*field).is_some())
                .count() as i64,
        };
        self.drop_if_empty(key);
        Ok(removed)
    }

    /// Adds `increment` to the integer stored in a hash field, treating a
    /// missing key or field as 0.
    pub fn hincr_by(&mut self, key: &str, field: &str, increment: i64) -> Result<i64, Error> {
        if let Some(hash) = self.hash_map(key)? {
            let current = match hash.get(field) {
                None => 0,
                Some(value) => value.parse::<i64>().map_err(|_| Error::HashValueNotInt)?,
            };
            let next = current.checked_add(increment).ok_or(Error::Overflow)?;
            hash.insert(field.to_string(), next.to_string());
            return Ok(next);
        }

        let mut hash = HashMap::new();
        hash.insert(field.to_string(), increment.to_string());
        self.insert(key, Data::Hash(hash));
        Ok(increment)
    }

    /// Float counterpart of `hincr_by`. Returns the new value as stored.
    pub fn hincr_by_float(
        &mut self,
        key: &str,
        field: &str,
        increment: f64,
    ) -> Result<String, Error> {
        if let Some(hash) = self.hash_map(key)? {
            let current = match hash.get(field) {
                None => 0.0,
                Some(value) => value.parse::<f64>().map_err(|_| Error::HashValueNotFloat)?,
            };
            let next = (current + increment).to_string();
            hash.insert(field.to_string(), next.clone());
            return Ok(next);
        }

        let next = increment.to_string();
        let mut hash = HashMap::new();
        hash.insert(field.to_string(), next.clone());
        self.insert(key, Data::Hash(hash));
        Ok(next)
    }
}
