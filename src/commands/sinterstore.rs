use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// SINTER with a stored destination, like SDIFFSTORE.
///
/// Ref: <https://redis.io/docs/latest/commands/sinterstore/>
#[derive(Debug, PartialEq)]
pub struct SinterStore {
    pub destination: String,
    pub keys: Vec<String>,
}

impl Executable for SinterStore {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.sinterstore(&self.destination, &self.keys) {
            Ok(cardinality) => Ok(Frame::Integer(cardinality)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for SinterStore {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let destination = parser.next_string()?;
        let first = parser.next_string()?;
        let mut keys = vec![first];
        keys.extend(parser.remaining_strings()?);

        Ok(Self { destination, keys })
    }
}
