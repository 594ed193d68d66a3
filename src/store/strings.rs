use bytes::Bytes;

use super::{Data, Error, Store, Value};

/// The limit of bytes a string value can hold, 512MB like Redis.
const MAX_STRING_LENGTH: usize = 536_870_911; // 2^29-1
/// The max offset of a bit operation, which limits bitmaps to 512MB.
const MAX_BIT_OFFSET: u64 = 4_294_967_295; // 2^32-1

impl Store {
    /// Fetches the payload of a live string value, failing when the key
    /// holds another kind.
    fn string_bytes(&mut self, key: &str) -> Result<Option<&mut Bytes>, Error> {
        match self.live_entry(key) {
            None => Ok(None),
            Some(Value {
                data: Data::String(bytes),
                ..
            }) => Ok(Some(bytes)),
            Some(_) => Err(Error::WrongType),
        }
    }

    pub fn get(&mut self, key: &str) -> Result<Option<Bytes>, Error> {
        Ok(self.string_bytes(key)?.map(|bytes| bytes.clone()))
    }

    pub fn set(&mut self, key: &str, val: Bytes) {
        self.insert(key, Data::String(val));
    }

    /// Swaps in a new payload and returns the previous one. The expiration
    /// of an existing key is left untouched.
    pub fn getset(&mut self, key: &str, val: Bytes) -> Result<Option<Bytes>, Error> {
        if let Some(bytes) = self.string_bytes(key)? {
            let old = bytes.clone();
            *bytes = val;
            return Ok(Some(old));
        }
        self.insert(key, Data::String(val));
        Ok(None)
    }

    pub fn setex(&mut self, key: &str, val: Bytes, ttl: i64) -> Result<(), Error> {
        if ttl <= 0 {
            return Err(Error::InvalidExpireTime);
        }
        let value = Value {
            data: Data::String(val),
            // Saturating: an extreme ttl pins the deadline at the far future
            // instead of wrapping into the past.
            expire_at: Some(super::now().saturating_add(ttl)),
        };
        self.keys.insert(key.to_string(), value);
        Ok(())
    }

    pub fn setnx(&mut self, key: &str, val: Bytes) -> bool {
        if self.live_entry(key).is_some() {
            return false;
        }
        self.insert(key, Data::String(val));
        true
    }

    pub fn strlen(&mut self, key: &str) -> Result<usize, Error> {
        Ok(self.string_bytes(key)?.map_or(0, |bytes| bytes.len()))
    }

    /// Adds `increment` to the integer stored at `key`, vivifying a missing
    /// key as the increment itself. The stored value is left untouched when
    /// it does not parse as an integer.
    pub fn incr_by(&mut self, key: &str, increment: i64) -> Result<i64, Error> {
        if let Some(bytes) = self.string_bytes(key)? {
            let current = std::str::from_utf8(bytes)
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or(Error::InvalidInt)?;
            let next = current.checked_add(increment).ok_or(Error::Overflow)?;
            *bytes = Bytes::from(next.to_string());
            return Ok(next);
        }
        self.insert(key, Data::String(Bytes::from(increment.to_string())));
        Ok(increment)
    }

    /// Appends to an existing string, or behaves like `set` when the key is
    /// missing. Returns the resulting length.
    pub fn append(&mut self, key: &str, val: &[u8]) -> Result<usize, Error> {
        if let Some(bytes) = self.string_bytes(key)? {
            let mut buf = Vec::with_capacity(bytes.len() + val.len());
            buf.extend_from_slice(bytes);
            buf.extend_from_slice(val);
            let len = buf.len();
            *bytes = Bytes::from(buf);
            return Ok(len);
        }
        self.insert(key, Data::String(Bytes::copy_from_slice(val)));
        Ok(val.len())
    }

    /// Overwrites part of the string at `key` starting at the given byte
    /// offset. A missing key or a too-short value is zero-padded up to the
    /// offset first.
    pub fn setrange(&mut self, key: &str, offset: usize, val: &[u8]) -> Result<usize, Error> {
        if offset + val.len() > MAX_STRING_LENGTH {
            return Err(Error::StringTooLong);
        }

        if let Some(bytes) = self.string_bytes(key)? {
            let mut buf = bytes.to_vec();
            if offset + val.len() > buf.len() {
                buf.resize(offset + val.len(), 0);
            }
            buf[offset..offset + val.len()].copy_from_slice(val);
            let len = buf.len();
            *bytes = Bytes::from(buf);
            return Ok(len);
        }

        let mut buf = vec![0u8; offset + val.len()];
        buf[offset..].copy_from_slice(val);
        let len = buf.len();
        self.insert(key, Data::String(Bytes::from(buf)));
        Ok(len)
    }

    /// Substring by inclusive byte offsets; negative offsets count from the
    /// end. Out of range requests are clamped to the actual length.
    pub fn getrange(&mut self, key: &str, start: i64, end: i64) -> Result<Bytes, Error> {
        let bytes = match self.string_bytes(key)? {
            None => return Ok(Bytes::new()),
            Some(bytes) => bytes,
        };

        match clamp_range(start, end, bytes.len() as i64) {
            None => Ok(Bytes::new()),
            Some((start, end)) => Ok(bytes.slice(start..end + 1)),
        }
    }

    /// Values for all given keys; nil for every key that is missing or does
    /// not hold a string. Never fails.
    pub fn mget(&mut self, keys: &[String]) -> Vec<Option<Bytes>> {
        keys.iter()
            .map(|key| self.get(key).unwrap_or(None))
            .collect()
    }

    pub fn mset(&mut self, pairs: Vec<(String, Bytes)>) {
        for (key, val) in pairs {
            self.set(&key, val);
        }
    }

    /// Sets or clears one bit, growing the string as needed (added bytes are
    /// zero). Returns the original bit value at the offset.
    pub fn setbit(&mut self, key: &str, offset: u64, bit: i64) -> Result<i64, Error> {
        if offset > MAX_BIT_OFFSET {
            return Err(Error::BitOffsetOutOfRange);
        }
        if bit != 0 && bit != 1 {
            return Err(Error::InvalidBit);
        }

        let byte_index = (offset / 8) as usize;
        let mask = 1u8 << (7 - offset % 8);

        if let Some(bytes) = self.string_bytes(key)? {
            let mut buf = bytes.to_vec();
            if byte_index >= buf.len() {
                buf.resize(byte_index + 1, 0);
            }
            let old = i64::from(buf[byte_index] & mask != 0);
            if bit == 1 {
                buf[byte_index] |= mask;
            } else {
                buf[byte_index] &= !mask;
            }
            *bytes = Bytes::from(buf);
            return Ok(old);
        }

        let mut buf = vec![0u8; byte_index + 1];
        if bit == 1 {
            buf[byte_index] |= mask;
        }
        self.insert(key, Data::String(Bytes::from(buf)));
        Ok(0)
    }

    /// The bit at `offset`; positions beyond the stored length (or a missing
    /// key) read as 0.
    pub fn getbit(&mut self, key: &str, offset: u64) -> Result<i64, Error> {
        if offset > MAX_BIT_OFFSET {
            return Err(Error::BitOffsetOutOfRange);
        }

        let bytes = match self.string_bytes(key)? {
            None => return Ok(0),
            Some(bytes) => bytes,
        };

        let byte_index = (offset / 8) as usize;
        if byte_index >= bytes.len() {
            return Ok(0);
        }
        Ok(i64::from(bytes[byte_index] & (1 << (7 - offset % 8)) != 0))
    }

    /// Number of set bits within the inclusive bit-offset range; negative
    /// offsets count from the end of the bitmap.
    pub fn bitcount(&mut self, key: &str, start: i64, end: i64) -> Result<i64, Error> {
        let bytes = match self.string_bytes(key)? {
            None => return Ok(0),
            Some(bytes) => bytes,
        };

        let (start, end) = match clamp_range(start, end, bytes.len() as i64 * 8) {
            None => return Ok(0),
            Some(range) => range,
        };

        let mut total = 0;
        for offset in start..=end {
            if bytes[offset / 8] & (1 << (7 - offset % 8)) != 0 {
                total += 1;
            }
        }
        Ok(total)
    }
}

/// Translates an inclusive, possibly-negative index pair into concrete
/// offsets within `0..len`, or `None` when the range selects nothing.
pub(crate) fn clamp_range(start: i64, end: i64, len: i64) -> Option<(usize, usize)> {
    let mut start = if start < 0 { len + start } else { start };
    let mut end = if end < 0 { len + end } else { end };

    if start > end || start > len - 1 || end < 0 {
        return None;
    }
    if start < 0 {
        start = 0;
    }
    if end > len - 1 {
        end = len - 1;
    }

    Some((start as usize, end as usize))
}
