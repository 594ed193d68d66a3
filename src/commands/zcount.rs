use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Number of members with a score in an inclusive range.
///
/// Ref: <https://redis.io/docs/latest/commands/zcount/>
#[derive(Debug, PartialEq)]
pub struct Zcount {
    pub key: String,
    pub min: f64,
    pub max: f64,
}

impl Executable for Zcount {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.zcount(&self.key, self.min, self.max) {
            Ok(count) => Ok(Frame::Integer(count as i64)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Zcount {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let min = parser.next_float()?;
        let max = parser.next_float()?;
        parser.finish()?;

        Ok(Self { key, min, max })
    }
}
