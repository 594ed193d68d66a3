use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Moves a member between two sets: 1 when it was moved, 0 when it was not
/// in the source.
///
/// Ref: <https://redis.io/docs/latest/commands/smove/>
#[derive(Debug, PartialEq)]
pub struct Smove {
    pub source: String,
    pub destination: String,
    pub member: String,
}

impl Executable for Smove {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.smove(&self.source, &self.destination, &self.member) {
            Ok(moved) => Ok(Frame::Integer(i64::from(moved))),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Smove {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let source = parser.next_string()?;
        let destination = parser.next_string()?;
        let member = parser.next_string()?;
        parser.finish()?;

        Ok(Self {
            source,
            destination,
            member,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn moves_membership() {
        let mut store = Store::new();
        store.sadd("src", vec!["a".to_string()]).unwrap();

        let result = parse(&["SMOVE", "src", "dst", "a"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(1));
        assert_eq!(store.sismember("dst", "a"), Ok(true));
        assert!(!store.exists("src"));
    }
}
