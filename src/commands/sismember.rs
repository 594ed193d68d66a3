use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Membership test: 1 when the member is in the set, 0 otherwise.
///
/// Ref: <https://redis.io/docs/latest/commands/sismember/>
#[derive(Debug, PartialEq)]
pub struct Sismember {
    pub key: String,
    pub member: String,
}

impl Executable for Sismember {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.sismember(&self.key, &self.member) {
            Ok(present) => Ok(Frame::Integer(i64::from(present))),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Sismember {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let member = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key, member })
    }
}
