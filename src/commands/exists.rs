use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Counts how many of the given keys exist; a key repeated in the arguments
/// is counted every time.
///
/// Ref: <https://redis.io/docs/latest/commands/exists/>
#[derive(Debug, PartialEq)]
pub struct Exists {
    pub keys: Vec<String>,
}

impl Executable for Exists {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        let count = self.keys.iter().filter(|key| store.exists(key)).count();
        Ok(Frame::Integer(count as i64))
    }
}

impl TryFrom<&mut CommandParser> for Exists {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let first = parser.next_string()?;
        let mut keys = vec![first];
        keys.extend(parser.remaining_strings()?);

        Ok(Self { keys })
    }
}
