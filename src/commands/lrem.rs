use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Removes occurrences of a value: from the head when count is positive,
/// from the tail when negative, all of them when zero. Replies with how
/// many were removed.
///
/// Ref: <https://redis.io/docs/latest/commands/lrem/>
#[derive(Debug, PartialEq)]
pub struct Lrem {
    pub key: String,
    pub count: i64,
    pub value: String,
}

impl Executable for Lrem {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.lrem(&self.key, self.count, &self.value) {
            Ok(removed) => Ok(Frame::Integer(removed)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Lrem {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let count = parser.next_integer()?;
        let value = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key, count, value })
    }
}
