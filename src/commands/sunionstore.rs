use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// SUNION with a stored destination, like SDIFFSTORE.
///
/// Ref: <https://redis.io/docs/latest/commands/sunionstore/>
#[derive(Debug, PartialEq)]
pub struct SunionStore {
    pub destination: String,
    pub keys: Vec<String>,
}

impl Executable for SunionStore {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.sunionstore(&self.destination, &self.keys) {
            Ok(cardinality) => Ok(Frame::Integer(cardinality)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for SunionStore {
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
    fn stores_the_union() {
        let mut store = Store::new();
        store.sadd("a", vec!["1".to_string()]).unwrap();
        store.sadd("b", vec!["2".to_string()]).unwrap();

        let result = parse(&["SUNIONSTORE", "dst", "a", "b"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(2));
        assert_eq!(store.scard("dst"), Ok(2));
    }
}
