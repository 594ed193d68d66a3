use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Members present in every given set.
///
/// Ref: <https://redis.io/docs/latest/commands/sinter/>
#[derive(Debug, PartialEq)]
pub struct Sinter {
    pub keys: Vec<String>,
}

impl Executable for Sinter {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.sinter(&self.keys) {
            Ok(members) => Ok(Frame::Array(
                members
                    .into_iter()
                    .map(|member| Frame::Bulk(Bytes::from(member)))
                    .collect(),
            )),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Sinter {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let first = parser.next_string()?;
        let mut keys = vec![first];
        keys.extend(parser.remaining_strings()?);

        Ok(Self { keys })
    }
}
