use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// All values of a hash.
///
/// Ref: <https://redis.io/docs/latest/commands/hvals/>
#[derive(Debug, PartialEq)]
pub struct Hvals {
    pub key: String,
}

impl Executable for Hvals {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.hvals(&self.key) {
            Ok(values) => Ok(Frame::Array(
                values
                    .into_iter()
                    .map(|value| Frame::Bulk(Bytes::from(value)))
                    .collect(),
            )),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Hvals {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key })
    }
}
