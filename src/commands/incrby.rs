use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// INCR with an explicit increment.
///
/// Ref: <https://redis.io/docs/latest/commands/incrby/>
#[derive(Debug, PartialEq)]
pub struct IncrBy {
    pub key: String,
    pub increment: i64,
}

impl Executable for IncrBy {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.incr_by(&self.key, self.increment) {
            Ok(value) => Ok(Frame::Integer(value)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for IncrBy {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let increment = parser.next_integer()?;
        parser.finish()?;

        Ok(Self { key, increment })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::parse;

    #[test]
    fn adds_the_increment() {
        let mut store = Store::new();
        store.set("key", Bytes::from("10"));

        let result = parse(&["INCRBY", "key", "5"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(15));
    }

    #[test]
    fn overflow_is_an_error_reply() {
        let mut store = Store::new();
        store.set("key", Bytes::from(i64::MAX.to_string()));

        let result = parse(&["INCRBY", "key", "1"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(
            result,
            Frame::Error("ERR increment or decrement would overflow".to_string())
        );
    }
}
