use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Introspection stub. Clients issue COMMAND (often `COMMAND DOCS`) on
/// connect; the subcommands and their arguments are accepted and ignored.
///
/// Ref: <https://redis.io/docs/latest/commands/command/>
#[derive(Debug, PartialEq)]
pub struct Command;

impl Executable for Command {
    fn exec(self, _store: &mut Store) -> Result<Frame, Error> {
        Ok(Frame::Array(vec![]))
    }
}

impl TryFrom<&mut CommandParser> for Command {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        while parser.has_more() {
            parser.next_bytes()?;
        }
        Ok(Self)
    }
}
