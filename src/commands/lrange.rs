use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// List elements between two inclusive, possibly-negative offsets, head
/// first.
///
/// Ref: <https://redis.io/docs/latest/commands/lrange/>
#[derive(Debug, PartialEq)]
pub struct Lrange {
    pub key: String,
    pub start: i64,
    pub end: i64,
}

impl Executable for Lrange {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.lrange(&self.key, self.start, self.end) {
            Ok(values) => Ok(Frame::Array(
                values
                    .into_iter()
                    .map(|value| Frame::Bulk(Bytes::from(value)))
                    .collect(),
            )),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Lrange {
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
    use super::*;
    use crate::commands::parse;

    #[test]
    fn full_range_with_negative_end() {
        let mut store = Store::new();
        store
            .rpush("l", vec!["a".to_string(), "b".to_string()])
            .unwrap();

        let result = parse(&["LRANGE", "l", "0", "-1"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(
            result,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("a")),
                Frame::Bulk(Bytes::from("b"))
            ])
        );
    }
}
