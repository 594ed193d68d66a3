use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Returns PONG, or echoes the optional message back as a bulk string.
///
/// Ref: <https://redis.io/docs/latest/commands/ping/>
#[derive(Debug, PartialEq)]
pub struct Ping {
    pub message: Option<Bytes>,
}

impl Executable for Ping {
    fn exec(self, _store: &mut Store) -> Result<Frame, Error> {
        match self.message {
            None => Ok(Frame::Simple("PONG".to_string())),
            Some(message) => Ok(Frame::Bulk(message)),
        }
    }
}

impl TryFrom<&mut CommandParser> for Ping {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let message = if parser.has_more() {
            Some(parser.next_bytes()?)
        } else {
            None
        };
        parser.finish()?;

        Ok(Self { message })
    }
}
