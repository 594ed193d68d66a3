use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Pushes values at the head of a list, creating it when missing. Values
/// land one by one, so the last argument ends up first. Replies with the
/// resulting length.
///
/// Ref: <https://redis.io/docs/latest/commands/lpush/>
#[derive(Debug, PartialEq)]
pub struct Lpush {
    pub key: String,
    pub values: Vec<String>,
}

impl Executable for Lpush {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.lpush(&self.key, self.values) {
            Ok(len) => Ok(Frame::Integer(len as i64)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Lpush {
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
    fn last_argument_ends_up_first() {
        let mut store = Store::new();
        let result = parse(&["LPUSH", "l", "a", "b", "c"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(3));
        assert_eq!(store.lindex("l", 0), Ok(Some("c".to_string())));
    }
}
