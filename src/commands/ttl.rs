use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Remaining time to live in seconds: -2 for a missing key, -1 for a key
/// with no expiration.
///
/// Ref: <https://redis.io/docs/latest/commands/ttl/>
#[derive(Debug, PartialEq)]
pub struct Ttl {
    pub key: String,
}

impl Executable for Ttl {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        Ok(Frame::Integer(store.ttl(&self.key)))
    }
}

impl TryFrom<&mut CommandParser> for Ttl {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::parse;

    #[test]
    fn missing_and_persistent_keys() {
        let mut store = Store::new();
        let result = parse(&["TTL", "key"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Integer(-2));

        store.set("key", Bytes::from("value"));
        let result = parse(&["TTL", "key"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Integer(-1));
    }
}
