use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Appends values at the tail of a list, creating it when missing. Replies
/// with the resulting length.
///
/// Ref: <https://redis.io/docs/latest/commands/rpush/>
#[derive(Debug, PartialEq)]
pub struct Rpush {
    pub key: String,
    pub values: Vec<String>,
}

impl Executable for Rpush {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.rpush(&self.key, self.values) {
            Ok(len) => Ok(Frame::Integer(len as i64)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Rpush {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let first = parser.next_string()?;
        let mut values = vec![first];
        values.extend(parser.remaining_strings()?);

        Ok(Self { key, values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn appends_in_argument_order() {
        let mut store = Store::new();
        let result = parse(&["RPUSH", "l", "a", "b"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(2));
        assert_eq!(store.lindex("l", 0), Ok(Some("a".to_string())));
    }
}
