use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Removes members from a sorted set, replying with how many existed.
///
/// Ref: <https://redis.io/docs/latest/commands/zrem/>
#[derive(Debug, PartialEq)]
pub struct Zrem {
    pub key: String,
    pub members: Vec<String>,
}

impl Executable for Zrem {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.zrem(&self.key, &self.members) {
            Ok(removed) => Ok(Frame::Integer(removed)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Zrem {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let first = parser.next_string()?;
        let mut members = vec![first];
        members.extend(parser.remaining_strings()?);

        Ok(Self { key, members })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn removes_and_counts_existing_members() {
        let mut store = Store::new();
        store
            .zadd("z", vec![(1.0, "a".to_string()), (2.0, "b".to_string())])
            .unwrap();

        let result = parse(&["ZREM", "z", "a", "missing"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(1));
        assert_eq!(store.zcard("z"), Ok(1));
    }

    #[test]
    fn emptied_set_deletes_the_key() {
        let mut store = Store::new();
        store.zadd("z", vec![(1.0, "a".to_string())]).unwrap();

        parse(&["ZREM", "z", "a"]).unwrap().exec(&mut store).unwrap();
        assert!(!store.exists("z"));
    }
}
