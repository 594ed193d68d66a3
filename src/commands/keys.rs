use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// All live keys matching a glob pattern, in no particular order.
///
/// Ref: <https://redis.io/docs/latest/commands/keys/>
#[derive(Debug, PartialEq)]
pub struct Keys {
    pub pattern: String,
}

impl Executable for Keys {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        let keys = store
            .pattern_keys(&self.pattern)
            .into_iter()
            .map(|key| Frame::Bulk(Bytes::from(key)))
            .collect();
        Ok(Frame::Array(keys))
    }
}

impl TryFrom<&mut CommandParser> for Keys {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let pattern = parser.next_string()?;
        parser.finish()?;

        Ok(Self { pattern })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn matches_globs() {
        let mut store = Store::new();
        store.set("user:1", Bytes::from("a"));
        store.set("user:2", Bytes::from("b"));
        store.set("other", Bytes::from("c"));

        let result = parse(&["KEYS", "user:*"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        match result {
            Frame::Array(keys) => assert_eq!(keys.len(), 2),
            frame => panic!("expected array, got {frame:?}"),
        }
    }
}
