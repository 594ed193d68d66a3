use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Removes the given keys, replying with how many actually existed.
///
/// Ref: <https://redis.io/docs/latest/commands/del/>
#[derive(Debug, PartialEq)]
pub struct Del {
    pub keys: Vec<String>,
}

impl Executable for Del {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        let deleted = self.keys.iter().filter(|key| store.del(key)).count();
        Ok(Frame::Integer(deleted as i64))
    }
}

impl TryFrom<&mut CommandParser> for Del {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let first = parser.next_string()?;
        let mut keys = vec![first];
        keys.extend(parser.remaining_strings()?);

        Ok(Self { keys })
    }
}
