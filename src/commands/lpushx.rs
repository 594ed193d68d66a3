use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// LPUSH that refuses to create the key: replies 0 and stores nothing when
/// the list does not exist.
///
/// Ref: <https://redis.io/docs/latest/commands/lpushx/>
#[derive(Debug, PartialEq)]
pub struct Lpushx {
    pub key: String,
    pub values: Vec<String>,
}

impl Executable for Lpushx {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.lpushx(&self.key, self.values) {
            Ok(len) => Ok(Frame::Integer(len as i64)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Lpushx {
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
    fn does_not_create_missing_lists() {
        let mut store = Store::new();
        let result = parse(&["LPUSHX", "l", "a"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(0));
        assert!(!store.exists("l"));
    }
}
