use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Whether a hash field exists: 1 or 0.
///
/// Ref: <https://redis.io/docs/latest/commands/hexists/>
#[derive(Debug, PartialEq)]
pub struct Hexists {
    pub key: String,
    pub field: String,
}

impl Executable for Hexists {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.hexists(&self.key, &self.field) {
            Ok(exists) => Ok(Frame::Integer(i64::from(exists))),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Hexists {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let field = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key, field })
    }
}
