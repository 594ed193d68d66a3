use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Removes hash fields, replying with how many actually existed. Deleting
/// the last field deletes the key.
///
/// Ref: <https://redis.io/docs/latest/commands/hdel/>
#[derive(Debug, PartialEq)]
pub struct Hdel {
    pub key: String,
    pub fields: Vec<String>,
}

impl Executable for Hdel {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.hdel(&self.key, &self.fields) {
            Ok(removed) => Ok(Frame::Integer(removed)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Hdel {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let first = parser.next_string()?;
        let mut fields = vec![first];
        fields.extend(parser.remaining_strings()?);

        Ok(Self { key, fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn deleting_the_last_field_deletes_the_key() {
        let mut store = Store::new();
        store.hset("h", "a", "1").unwrap();

        let result = parse(&["HDEL", "h", "a", "nope"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(1));
        assert!(!store.exists("h"));
    }
}
