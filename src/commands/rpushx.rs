use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// RPUSH that refuses to create the key.
///
/// Ref: <https://redis.io/docs/latest/commands/rpushx/>
#[derive(Debug, PartialEq)]
pub struct Rpushx {
    pub key: String,
    pub values: Vec<String>,
}

impl Executable for Rpushx {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.rpushx(&self.key, self.values) {
            Ok(len) => Ok(Frame::Integer(len as i64)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Rpushx {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let first = parser.next_string()?;
        let mut values = vec![first];
        values.extend(parser.remaining_strings()?);

        Ok(Self { key, values })
    }
}
