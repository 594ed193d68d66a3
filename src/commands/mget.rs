use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Values for all given keys, nil for every key that is missing or holds a
/// non-string. MGET never fails.
///
/// Ref: <https://redis.io/docs/latest/commands/mget/>
#[derive(Debug, PartialEq)]
pub struct Mget {
    pub keys: Vec<String>,
}

impl Executable for Mget {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        let values = store
            .mget(&self.keys)
            .into_iter()
            .map(|value| match value {
                Some(bytes) => Frame::Bulk(bytes),
                None => Frame::Null,
            })
            .collect();
        Ok(Frame::Array(values))
    }
}

impl TryFrom<&mut CommandParser> for Mget {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let first = parser.next_string()?;
        let mut keys = vec![first];
        keys.extend(parser.remaining_strings()?);

        Ok(Self { keys })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::parse;

    #[test]
    fn nil_for_missing_and_non_string_keys() {
        let mut store = Store::new();
        store.set("a", Bytes::from("1"));
        store.hset("h", "f", "v").unwrap();

        let result = parse(&["MGET", "a", "h", "missing"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(
            result,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("1")),
                Frame::Null,
                Frame::Null
            ])
        );
    }
}
