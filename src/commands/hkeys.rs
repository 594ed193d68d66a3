use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// All field names of a hash.
///
/// Ref: <https://redis.io/docs/latest/commands/hkeys/>
#[derive(Debug, PartialEq)]
pub struct Hkeys {
    pub key: String,
}

impl Executable for Hkeys {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.hkeys(&self.key) {
            Ok(fields) => Ok(Frame::Array(
                fields
                    .into_iter()
                    .map(|field| Frame::Bulk(Bytes::from(field)))
                    .collect(),
            )),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Hkeys {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key })
    }
}
