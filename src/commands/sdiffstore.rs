use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// SDIFF that overwrites a destination key with the result instead of
/// returning it. An empty result deletes the destination. Replies with the
/// stored cardinality.
///
/// Ref: <https://redis.io/docs/latest/commands/sdiffstore/>
#[derive(Debug, PartialEq)]
pub struct SdiffStore {
    pub destination: String,
    pub keys: Vec<String>,
}

impl Executable for SdiffStore {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.sdiffstore(&self.destination, &self.keys) {
            Ok(cardinality) => Ok(Frame::Integer(cardinality)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for SdiffStore {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let destination = parser.next_string()?;
        let first = parser.next_string()?;
        let mut keys = vec![first];
        keys.extend(parser.remaining_strings()?);

        Ok(Self { destination, keys })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn empty_result_deletes_the_destination() {
        let mut store = Store::new();
        store.sadd("a", vec!["1".to_string()]).unwrap();
        store.sadd("dst", vec!["old".to_string()]).unwrap();

        let result = parse(&["SDIFFSTORE", "dst", "a", "a"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(0));
        assert!(!store.exists("dst"));
    }
}
