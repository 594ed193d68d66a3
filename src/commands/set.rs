use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Stores a string value, replacing whatever was there (including any
/// expiration).
///
/// Ref: <https://redis.io/docs/latest/commands/set/>
#[derive(Debug, PartialEq)]
pub struct Set {
    pub key: String,
    pub value: Bytes,
}

impl Executable for Set {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        store.set(&self.key, self.value);
        Ok(Frame::Simple("OK".to_string()))
    }
}

impl TryFrom<&mut CommandParser> for Set {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let value = parser.next_bytes()?;
        parser.finish()?;

        Ok(Self { key, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn overwrites_any_previous_value() {
        let mut store = Store::new();
        store.hset("key", "f", "v").unwrap();

        let result = parse(&["SET", "key", "value"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Simple("OK".to_string()));
        assert_eq!(store.get("key"), Ok(Some(Bytes::from("value"))));
    }

    #[test]
    fn overwrite_clears_the_expiration() {
        let mut store = Store::new();
        store.set("key", Bytes::from("old"));
        store.expire("key", 100);

        parse(&["SET", "key", "new"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(store.ttl("key"), -1);
    }
}
