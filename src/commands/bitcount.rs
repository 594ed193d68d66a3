use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Number of set bits, optionally restricted to an inclusive range of bit
/// offsets (negative offsets count from the end of the bitmap).
///
/// Ref: <https://redis.io/docs/latest/commands/bitcount/>
#[derive(Debug, PartialEq)]
pub struct BitCount {
    pub key: String,
    pub start: i64,
    pub end: i64,
}

impl Executable for BitCount {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.bitcount(&self.key, self.start, self.end) {
            Ok(count) => Ok(Frame::Integer(count)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for BitCount {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let (start, end) = if parser.has_more() {
            (parser.next_integer()?, parser.next_integer()?)
        } else {
            (0, -1)
        };
        parser.finish()?;

        Ok(Self { key, start, end })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::parse;

    #[test]
    fn counts_the_whole_bitmap_by_default() {
        let mut store = Store::new();
        store.set("key", Bytes::from("foobar"));

        let result = parse(&["BITCOUNT", "key"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(26));
    }

    #[test]
    fn range_without_end_is_an_arity_error() {
        let err = parse(&["BITCOUNT", "key", "0"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERR wrong number of arguments for 'bitcount' command"
        );
    }
}
