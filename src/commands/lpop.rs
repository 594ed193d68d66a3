use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Removes and returns the head of a list, nil when it is missing. Popping
/// the last element deletes the key.
///
/// Ref: <https://redis.io/docs/latest/commands/lpop/>
#[derive(Debug, PartialEq)]
pub struct Lpop {
    pub key: String,
}

impl Executable for Lpop {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.lpop(&self.key) {
            Ok(Some(value)) => Ok(Frame::Bulk(Bytes::from(value))),
            Ok(None) => Ok(Frame::Null),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Lpop {
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
    fn pops_from_the_head() {
        let mut store = Store::new();
        store
            .rpush("l", vec!["a".to_string(), "b".to_string()])
            .unwrap();

        let result = parse(&["LPOP", "l"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Bulk(Bytes::from("a")));

        parse(&["LPOP", "l"]).unwrap().exec(&mut store).unwrap();
        let result = parse(&["LPOP", "l"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Null);
        assert!(!store.exists("l"));
    }
}
