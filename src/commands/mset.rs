use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Stores several key/value pairs in one request. An odd argument count is
/// rejected before anything is written.
///
/// Ref: <https://redis.io/docs/latest/commands/mset/>
#[derive(Debug, PartialEq)]
pub struct Mset {
    pub pairs: Vec<(String, Bytes)>,
}

impl Executable for Mset {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        store.mset(self.pairs);
        Ok(Frame::Simple("OK".to_string()))
    }
}

impl TryFrom<&mut CommandParser> for Mset {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let mut pairs = vec![(parser.next_string()?, parser.next_bytes()?)];
        while parser.has_more() {
            pairs.push((parser.next_string()?, parser.next_bytes()?));
        }

        Ok(Self { pairs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn stores_every_pair() {
        let mut store = Store::new();
        let result = parse(&["MSET", "a", "1", "b", "2"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Simple("OK".to_string()));
        assert_eq!(store.get("a"), Ok(Some(Bytes::from("1"))));
        assert_eq!(store.get("b"), Ok(Some(Bytes::from("2"))));
    }

    #[test]
    fn odd_argument_count_is_an_arity_error() {
        let err = parse(&["MSET", "a", "1", "b"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERR wrong number of arguments for 'mset' command"
        );
    }
}
