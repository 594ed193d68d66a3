use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Removes members from a set, replying with how many actually existed.
/// Removing the last member deletes the key.
///
/// Ref: <https://redis.io/docs/latest/commands/srem/>
#[derive(Debug, PartialEq)]
pub struct Srem {
    pub key: String,
    pub members: Vec<String>,
}

impl Executable for Srem {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.srem(&self.key, &self.members) {
            Ok(removed) => Ok(Frame::Integer(removed)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Srem {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let first = parser.next_string()?;
        let mut members = vec![first];
        members.extend(parser.remaining_strings()?);

        Ok(Self { key, members })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn removing_the_last_member_deletes_the_key() {
        let mut store = Store::new();
        store.sadd("s", vec!["a".to_string()]).unwrap();

        let result = parse(&["SREM", "s", "a", "nope"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(1));
        assert!(!store.exists("s"));
    }
}
