use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Increments the integer at a key by one, creating it as 1 when missing.
/// Replies with the new value.
///
/// Ref: <https://redis.io/docs/latest/commands/incr/>
#[derive(Debug, PartialEq)]
pub struct Incr {
    pub key: String,
}

impl Executable for Incr {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.incr_by(&self.key, 1) {
            Ok(value) => Ok(Frame::Integer(value)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Incr {
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
    fn counts_from_zero() {
        let mut store = Store::new();
        let result = parse(&["INCR", "key"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Integer(1));

        let result = parse(&["INCR", "key"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Integer(2));
    }

    #[test]
    fn non_numeric_value_is_an_error_reply() {
        let mut store = Store::new();
        store.set("key", Bytes::from("abc"));

        let result = parse(&["INCR", "key"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(
            result,
            Frame::Error("ERR value is not an integer or out of range".to_string())
        );
    }
}
