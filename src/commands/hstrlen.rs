use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Byte length of the value stored in a hash field; 0 when the key or
/// field is missing.
///
/// Ref: <https://redis.io/docs/latest/commands/hstrlen/>
#[derive(Debug, PartialEq)]
pub struct Hstrlen {
    pub key: String,
    pub field: String,
}

impl Executable for Hstrlen {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.hstrlen(&self.key, &self.field) {
            Ok(len) => Ok(Frame::Integer(len as i64)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Hstrlen {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let field = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key, field })
    }
}
