use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// DECR with an explicit decrement.
///
/// Ref: <https://redis.io/docs/latest/commands/decrby/>
#[derive(Debug, PartialEq)]
pub struct DecrBy {
    pub key: String,
    pub decrement: i64,
}

impl Executable for DecrBy {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        // i64::MIN has no positive counterpart; its negation overflows.
        let Some(increment) = self.decrement.checked_neg() else {
            return Ok(Frame::Error(
                "ERR increment or decrement would overflow".to_string(),
            ));
        };

        match store.incr_by(&self.key, increment) {
            Ok(value) => Ok(Frame::Integer(value)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for DecrBy {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let decrement = parser.next_integer()?;
        parser.finish()?;

        Ok(Self { key, decrement })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::parse;

    #[test]
    fn subtracts_the_decrement() {
        let mut store = Store::new();
        store.set("key", Bytes::from("10"));

        let result = parse(&["DECRBY", "key", "3"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(7));
    }
}
