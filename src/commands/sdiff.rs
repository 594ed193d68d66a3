use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Members of the first set that appear in none of the others. Missing
/// keys read as empty sets.
///
/// Ref: <https://redis.io/docs/latest/commands/sdiff/>
#[derive(Debug, PartialEq)]
pub struct Sdiff {
    pub keys: Vec<String>,
}

impl Executable for Sdiff {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.sdiff(&self.keys) {
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

impl TryFrom<&mut CommandParser> for Sdiff {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let first = parser.next_string()?;
        let mut keys = vec![first];
        keys.extend(parser.remaining_strings()?);

        Ok(Self { keys })
    }
}
