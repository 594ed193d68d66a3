use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Adds an integer to a hash field, treating a missing key or field as 0.
///
/// Ref: <https://redis.io/docs/latest/commands/hincrby/>
#[derive(Debug, PartialEq)]
pub struct HincrBy {
    pub key: String,
    pub field: String,
    pub increment: i64,
}

impl Executable for HincrBy {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.hincr_by(&self.key, &self.field, self.increment) {
            Ok(value) => Ok(Frame::Integer(value)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for HincrBy {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let field = parser.next_string()?;
        let increment = parser.next_integer()?;
        parser.finish()?;

        Ok(Self {
            key,
            field,
            increment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn treats_missing_field_as_zero() {
        let mut store = Store::new();
        let result = parse(&["HINCRBY", "h", "f", "-3"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(-3));
    }

    #[test]
    fn non_numeric_field_is_an_error_reply() {
        let mut store = Store::new();
        store.hset("h", "f", "abc").unwrap();

        let result = parse(&["HINCRBY", "h", "f", "1"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(
            result,
            Frame::Error("ERR hash value is not an integer".to_string())
        );
    }
}
