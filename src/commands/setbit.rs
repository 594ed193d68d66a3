use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::{self, Store};
use crate::Error;

/// Sets or clears one bit of the string at a key, growing it as needed.
/// Replies with the previous bit value.
///
/// Ref: <https://redis.io/docs/latest/commands/setbit/>
#[derive(Debug, PartialEq)]
pub struct SetBit {
    pub key: String,
    pub offset: i64,
    pub bit: i64,
}

impl Executable for SetBit {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        if self.offset < 0 {
            return Ok(Frame::Error(store::Error::BitOffsetOutOfRange.to_string()));
        }

        match store.setbit(&self.key, self.offset as u64, self.bit) {
            Ok(old) => Ok(Frame::Integer(old)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for SetBit {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let offset = parser.next_integer()?;
        let bit = parser.next_integer()?;
        parser.finish()?;

        Ok(Self { key, offset, bit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn returns_the_previous_bit() {
        let mut store = Store::new();

        let result = parse(&["SETBIT", "key", "7", "1"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(0));

        let result = parse(&["SETBIT", "key", "7", "0"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(1));
    }

    #[test]
    fn bit_must_be_zero_or_one() {
        let mut store = Store::new();
        let result = parse(&["SETBIT", "key", "0", "2"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(
            result,
            Frame::Error("ERR bit is not an integer or out of range".to_string())
        );
    }
}
