use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Overwrites the element at an index. Unlike the push family this fails
/// loudly on a missing key or an out-of-range index.
///
/// Ref: <https://redis.io/docs/latest/commands/lset/>
#[derive(Debug, PartialEq)]
pub struct Lset {
    pub key: String,
    pub index: i64,
    pub value: String,
}

impl Executable for Lset {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.lset(&self.key, self.index, self.value) {
            Ok(()) => Ok(Frame::Simple("OK".to_string())),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Lset {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let index = parser.next_integer()?;
        let value = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key, index, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn missing_key_is_an_error_reply() {
        let mut store = Store::new();
        let result = parse(&["LSET", "l", "0", "x"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Error("ERR no such key".to_string()));
    }

    #[test]
    fn out_of_range_index_is_an_error_reply() {
        let mut store = Store::new();
        store.rpush("l", vec!["a".to_string()]).unwrap();

        let result = parse(&["LSET", "l", "3", "x"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Error("ERR index out of range".to_string()));
    }
}
