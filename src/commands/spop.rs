use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::{self, Store};
use crate::Error;

/// Removes and returns up to `count` arbitrary members (default one); which
/// members come out is unspecified. Nil when the set is missing.
///
/// Ref: <https://redis.io/docs/latest/commands/spop/>
#[derive(Debug, PartialEq)]
pub struct Spop {
    pub key: String,
    pub count: i64,
}

impl Executable for Spop {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        if self.count < 0 {
            return Ok(Frame::Error(store::Error::IndexOutOfRange.to_string()));
        }

        match store.spop(&self.key, self.count as usize) {
            Ok(Some(members)) => Ok(Frame::Array(
                members.into_iter().map(|m| Frame::Bulk(Bytes::from(m))).collect(),
            )),
            Ok(None) => Ok(Frame::Null),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Spop {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let count = if parser.has_more() {
            parser.next_integer()?
        } else {
            1
        };
        parser.finish()?;

        Ok(Self { key, count })
    }
}
