use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Sets one or more hash fields, replying with how many were newly added
/// (overwrites do not count). An odd field/value count is rejected before
/// anything is written.
///
/// Ref: <https://redis.io/docs/latest/commands/hset/>
#[derive(Debug, PartialEq)]
pub struct Hset {
    pub key: String,
    pub pairs: Vec<(String, String)>,
}

impl Executable for Hset {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        let mut added = 0;
        for (field, value) in &self.pairs {
            match store.hset(&self.key, field, value) {
                Ok(n) => added += n,
                Err(err) => return Ok(Frame::Error(err.to_string())),
            }
        }
        Ok(Frame::Integer(added))
    }
}

impl TryFrom<&mut CommandParser> for Hset {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let mut pairs = vec![(parser.next_string()?, parser.next_string()?)];
        while parser.has_more() {
            pairs.push((parser.next_string()?, parser.next_string()?));
        }

        Ok(Self { key, pairs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn counts_added_fields_only() {
        let mut store = Store::new();

        let result = parse(&["HSET", "h", "a", "1", "b", "2"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(2));

        let result = parse(&["HSET", "h", "a", "9", "c", "3"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(1));
        assert_eq!(store.hget("h", "a"), Ok(Some("9".to_string())));
    }

    #[test]
    fn repeated_field_in_one_call_counts_once() {
        let mut store = Store::new();

        let result = parse(&["HSET", "h", "f", "v1", "f", "v2"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(1));
        assert_eq!(store.hget("h", "f"), Ok(Some("v2".to_string())));
    }

    #[test]
    fn odd_pair_count_is_an_arity_error() {
        let err = parse(&["HSET", "h", "a", "1", "b"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERR wrong number of arguments for 'hset' command"
        );
    }
}
