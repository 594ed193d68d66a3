use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Substring by inclusive byte offsets; negative offsets count from the
/// end. Always replies with a bulk string, possibly empty.
///
/// Ref: <https://redis.io/docs/latest/commands/getrange/>
#[derive(Debug, PartialEq)]
pub struct Getrange {
    pub key: String,
    pub start: i64,
    pub end: i64,
}

impl Executable for Getrange {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.getrange(&self.key, self.start, self.end) {
            Ok(bytes) => Ok(Frame::Bulk(bytes)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Getrange {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let start = parser.next_integer()?;
        let end = parser.next_integer()?;
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
    fn slices_with_negative_offsets() {
        let mut store = Store::new();
        store.set("key", Bytes::from("This is a string"));

        let result = parse(&["GETRANGE", "key", "-3", "-1"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Bulk(Bytes::from("ing")));

        let result = parse(&["GETRANGE", "key", "5", "2"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Bulk(Bytes::new()));
    }
}
