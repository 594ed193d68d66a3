use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::{self, Store};
use crate::Error;

/// Overwrites part of a string starting at a byte offset, zero-padding any
/// gap. Replies with the resulting length.
///
/// Ref: <https://redis.io/docs/latest/commands/setrange/>
#[derive(Debug, PartialEq)]
pub struct Setrange {
    pub key: String,
    pub offset: i64,
    pub value: Bytes,
}

impl Executable for Setrange {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        if self.offset < 0 {
            return Ok(Frame::Error(store::Error::OffsetOutOfRange.to_string()));
        }

        match store.setrange(&self.key, self.offset as usize, &self.value) {
            Ok(len) => Ok(Frame::Integer(len as i64)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Setrange {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let offset = parser.next_integer()?;
        let value = parser.next_bytes()?;
        parser.finish()?;

        Ok(Self { key, offset, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn pads_missing_prefix_with_zero_bytes() {
        let mut store = Store::new();
        let result = parse(&["SETRANGE", "key", "5", "redis"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(10));
    }

    #[test]
    fn negative_offset_is_an_error_reply() {
        let mut store = Store::new();
        let result = parse(&["SETRANGE", "key", "-1", "x"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(
            result,
            Frame::Error("ERR offset is out of range".to_string())
        );
        assert!(!store.exists("key"));
    }
}
