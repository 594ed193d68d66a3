use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Adds members to a set, replying with how many were not already present.
///
/// Ref: <https://redis.io/docs/latest/commands/sadd/>
#[derive(Debug, PartialEq)]
pub struct Sadd {
    pub key: String,
    pub members: Vec<String>,
}

impl Executable for Sadd {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.sadd(&self.key, self.members) {
            Ok(added) => Ok(Frame::Integer(added)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Sadd {
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
    fn counts_new_members_only() {
        let mut store = Store::new();

        let result = parse(&["SADD", "s", "a", "b", "a"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(2));

        let result = parse(&["SADD", "s", "b", "c"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(1));
    }
}
