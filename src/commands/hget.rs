use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// The value of one hash field, or nil when the key or field is missing.
///
/// Ref: <https://redis.io/docs/latest/commands/hget/>
#[derive(Debug, PartialEq)]
pub struct Hget {
    pub key: String,
    pub field: String,
}

impl Executable for Hget {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.hget(&self.key, &self.field) {
            Ok(Some(value)) => Ok(Frame::Bulk(Bytes::from(value))),
            Ok(None) => Ok(Frame::Null),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Hget {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let field = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key, field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn present_and_missing_fields() {
        let mut store = Store::new();
        store.hset("h", "f", "v").unwrap();

        let result = parse(&["HGET", "h", "f"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Bulk(Bytes::from("v")));

        let result = parse(&["HGET", "h", "g"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Null);
    }
}
