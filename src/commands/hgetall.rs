use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Every field and value of a hash, flattened into a single array.
///
/// Ref: <https://redis.io/docs/latest/commands/hgetall/>
#[derive(Debug, PartialEq)]
pub struct Hgetall {
    pub key: String,
}

impl Executable for Hgetall {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.hgetall(&self.key) {
            Ok(pairs) => {
                let mut frames = Vec::with_capacity(pairs.len() * 2);
                for (field, value) in pairs {
                    frames.push(Frame::Bulk(Bytes::from(field)));
                    frames.push(Frame::Bulk(Bytes::from(value)));
                }
                Ok(Frame::Array(frames))
            }
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Hgetall {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn flattens_pairs() {
        let mut store = Store::new();
        store.hset("h", "a", "1").unwrap();

        let result = parse(&["HGETALL", "h"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(
            result,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("a")),
                Frame::Bulk(Bytes::from("1"))
            ])
        );
    }

    #[test]
    fn missing_key_is_an_empty_array() {
        let mut store = Store::new();
        let result = parse(&["HGETALL", "h"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Array(vec![]));
    }
}
