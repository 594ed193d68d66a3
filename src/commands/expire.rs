use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Sets a relative expiration. Replies 1 when the deadline was set, 0 when
/// the key does not exist.
///
/// Ref: <https://redis.io/docs/latest/commands/expire/>
#[derive(Debug, PartialEq)]
pub struct Expire {
    pub key: String,
    pub seconds: i64,
}

impl Executable for Expire {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        let set = store.expire(&self.key, self.seconds);
        Ok(Frame::Integer(i64::from(set)))
    }
}

impl TryFrom<&mut CommandParser> for Expire {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let seconds = parser.next_integer()?;
        parser.finish()?;

        Ok(Self { key, seconds })
    }
}
