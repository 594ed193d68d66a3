use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Appends to the string at a key (creating it when missing) and replies
/// with the resulting length.
///
/// Ref: <https://redis.io/docs/latest/commands/append/>
#[derive(Debug, PartialEq)]
pub struct Append {
    pub key: String,
    pub value: Bytes,
}

impl Executable for Append {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.append(&self.key, &self.value) {
            Ok(len) => Ok(Frame::Integer(len as i64)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Append {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let value = parser.next_bytes()?;
        parser.finish()?;

        Ok(Self { key, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn appends_and_reports_length() {
        let mut store = Store::new();

        let result = parse(&["APPEND", "key", "Hello"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(5));

        let result = parse(&["APPEND", "key", " World"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(11));
        assert_eq!(store.get("key"), Ok(Some(Bytes::from("Hello World"))));
    }
}
