use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Sets a hash field only when it does not exist yet: 1 when written, 0
/// when the field was already there.
///
/// Ref: <https://redis.io/docs/latest/commands/hsetnx/>
#[derive(Debug, PartialEq)]
pub struct Hsetnx {
    pub key: String,
    pub field: String,
    pub value: String,
}

impl Executable for Hsetnx {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.hsetnx(&self.key, &self.field, &self.value) {
            Ok(set) => Ok(Frame::Integer(i64::from(set))),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Hsetnx {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let field = parser.next_string()?;
        let value = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key, field, value })
    }
}
