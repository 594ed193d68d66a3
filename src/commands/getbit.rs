use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::{self, Store};
use crate::Error;

/// The bit at an offset; positions past the end of the string read as 0.
///
/// Ref: <https://redis.io/docs/latest/commands/getbit/>
#[derive(Debug, PartialEq)]
pub struct GetBit {
    pub key: String,
    pub offset: i64,
}

impl Executable for GetBit {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        if self.offset < 0 {
            return Ok(Frame::Error(store::Error::BitOffsetOutOfRange.to_string()));
        }

        match store.getbit(&self.key, self.offset as u64) {
            Ok(bit) => Ok(Frame::Integer(bit)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for GetBit {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let offset = parser.next_integer()?;
        parser.finish()?;

        Ok(Self { key, offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn reads_bits_past_the_end_as_zero() {
        let mut store = Store::new();
        store.setbit("key", 7, 1).unwrap();

        let result = parse(&["GETBIT", "key", "7"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(1));

        let result = parse(&["GETBIT", "key", "100"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(0));
    }
}
