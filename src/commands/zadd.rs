use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Adds or rescores score/member pairs, replying with how many members were
/// newly added. Every score must parse as a float before anything is
/// written.
///
/// Ref: <https://redis.io/docs/latest/commands/zadd/>
#[derive(Debug, PartialEq)]
pub struct Zadd {
    pub key: String,
    pub entries: Vec<(f64, String)>,
}

impl Executable for Zadd {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.zadd(&self.key, self.entries) {
            Ok(added) => Ok(Frame::Integer(added)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Zadd {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let mut entries = vec![(parser.next_float()?, parser.next_string()?)];
        while parser.has_more() {
            entries.push((parser.next_float()?, parser.next_string()?));
        }

        Ok(Self { key, entries })
    }
}
