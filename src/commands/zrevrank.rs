use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Zero-based rank of a member, ordered by descending score. Nil when the
/// member or key is missing.
///
/// Ref: <https://redis.io/docs/latest/commands/zrevrank/>
#[derive(Debug, PartialEq)]
pub struct ZrevRank {
    pub key: String,
    pub member: String,
}

impl Executable for ZrevRank {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.zrevrank(&self.key, &self.member) {
            Ok(Some(rank)) => Ok(Frame::Integer(rank as i64)),
            Ok(None) => Ok(Frame::Null),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for ZrevRank {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let member = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key, member })
    }
}
