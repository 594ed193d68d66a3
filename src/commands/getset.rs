use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Atomically swaps in a new value and replies with the old one, or nil if
/// the key was missing.
///
/// Ref: <https://redis.io/docs/latest/commands/getset/>
#[derive(Debug, PartialEq)]
pub struct GetSet {
    pub key: String,
    pub value: Bytes,
}

impl Executable for GetSet {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.getset(&self.key, self.value) {
            Ok(Some(old)) => Ok(Frame::Bulk(old)),
            Ok(None) => Ok(Frame::Null),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for GetSet {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let value = parser.next_bytes()?;
        parser.finish()?;

        Ok(Self { key, value })
    }
}
