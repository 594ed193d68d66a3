use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// The string value at a key, or nil when it is missing.
///
/// Ref: <https://redis.io/docs/latest/commands/get/>
#[derive(Debug, PartialEq)]
pub struct Get {
    pub key: String,
}

impl Executable for Get {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.get(&self.key) {
            Ok(Some(value)) => Ok(Frame::Bulk(value)),
            Ok(None) => Ok(Frame::Null),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Get {
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
    fn existing_key() {
        let mut store = Store::new();
        store.set("key", Bytes::from("value"));

        let result = parse(&["GET", "key"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Bulk(Bytes::from("value")));
    }

    #[test]
    fn missing_key_is_nil() {
        let mut store = Store::new();
        let result = parse(&["GET", "key"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Null);
    }

    #[test]
    fn wrong_kind_is_an_error_reply() {
        let mut store = Store::new();
        store.hset("key", "f", "v").unwrap();

        let result = parse(&["GET", "key"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(
            result,
            Frame::Error(
                "WRONGTYPE Operation against a key holding the wrong kind of value".to_string()
            )
        );
    }
}
