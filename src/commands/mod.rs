pub mod executable;

pub mod command;
pub mod ping;
pub mod quit;

pub mod del;
pub mod exists;
pub mod expire;
pub mod expireat;
pub mod keys;
pub mod ttl;
pub mod type_;

pub mod append;
pub mod bitcount;
pub mod decr;
pub mod decrby;
pub mod get;
pub mod getbit;
pub mod getrange;
pub mod getset;
pub mod incr;
pub mod incrby;
pub mod mget;
pub mod mset;
pub mod set;
pub mod setbit;
pub mod setex;
pub mod setnx;
pub mod setrange;
pub mod strlen;

pub mod hdel;
pub mod hexists;
pub mod hget;
pub mod hgetall;
pub mod hincrby;
pub mod hincrbyfloat;
pub mod hkeys;
pub mod hlen;
pub mod hmget;
pub mod hmset;
pub mod hset;
pub mod hsetnx;
pub mod hstrlen;
pub mod hvals;

pub mod lindex;
pub mod llen;
pub mod lpop;
pub mod lpush;
pub mod lpushx;
pub mod lrange;
pub mod lrem;
pub mod lset;
pub mod rpop;
pub mod rpush;
pub mod rpushx;

pub mod sadd;
pub mod scard;
pub mod sdiff;
pub mod sdiffstore;
pub mod sinter;
pub mod sinterstore;
pub mod sismember;
pub mod smembers;
pub mod smove;
pub mod spop;
pub mod srem;
pub mod sunion;
pub mod sunionstore;

pub mod zadd;
pub mod zcard;
pub mod zcount;
pub mod zrange;
pub mod zrangebyscore;
pub mod zrank;
pub mod zrem;
pub mod zrevrank;
pub mod zscore;

use std::vec;

use bytes::Bytes;
use itertools::Itertools;
use thiserror::Error as ThisError;

use crate::commands::executable::Executable;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

use append::Append;
use bitcount::BitCount;
use command::Command as Command_;
use decr::Decr;
use decrby::DecrBy;
use del::Del;
use exists::Exists;
use expire::Expire;
use expireat::ExpireAt;
use get::Get;
use getbit::GetBit;
use getrange::Getrange;
use getset::GetSet;
use hdel::Hdel;
use hexists::Hexists;
use hget::Hget;
use hgetall::Hgetall;
use hincrby::HincrBy;
use hincrbyfloat::HincrByFloat;
use hkeys::Hkeys;
use hlen::Hlen;
use hmget::Hmget;
use hmset::Hmset;
use hset::Hset;
use hsetnx::Hsetnx;
use hstrlen::Hstrlen;
use hvals::Hvals;
use incr::Incr;
use incrby::IncrBy;
use keys::Keys;
use lindex::Lindex;
use llen::Llen;
use lpop::Lpop;
use lpush::Lpush;
use lpushx::Lpushx;
use lrange::Lrange;
use lrem::Lrem;
use lset::Lset;
use mget::Mget;
use mset::Mset;
use ping::Ping;
use quit::Quit;
use rpop::Rpop;
use rpush::Rpush;
use rpushx::Rpushx;
use sadd::Sadd;
use scard::Scard;
use sdiff::Sdiff;
use sdiffstore::SdiffStore;
use set::Set;
use setbit::SetBit;
use setex::SetEx;
use setnx::Setnx;
use setrange::Setrange;
use sinter::Sinter;
use sinterstore::SinterStore;
use sismember::Sismember;
use smembers::Smembers;
use smove::Smove;
use spop::Spop;
use srem::Srem;
use strlen::Strlen;
use sunion::Sunion;
use sunionstore::SunionStore;
use ttl::Ttl;
use type_::Type;
use zadd::Zadd;
use zcard::Zcard;
use zcount::Zcount;
use zrange::Zrange;
use zrangebyscore::ZrangeByScore;
use zrank::Zrank;
use zrem::Zrem;
use zrevrank::ZrevRank;
use zscore::Zscore;

#[derive(Debug, PartialEq)]
pub enum Command {
    Append(Append),
    BitCount(BitCount),
    Decr(Decr),
    DecrBy(DecrBy),
    Del(Del),
    Exists(Exists),
    Expire(Expire),
    ExpireAt(ExpireAt),
    Get(Get),
    GetBit(GetBit),
    Getrange(Getrange),
    GetSet(GetSet),
    Hdel(Hdel),
    Hexists(Hexists),
    Hget(Hget),
    Hgetall(Hgetall),
    HincrBy(HincrBy),
    HincrByFloat(HincrByFloat),
    Hkeys(Hkeys),
    Hlen(Hlen),
    Hmget(Hmget),
    Hmset(Hmset),
    Hset(Hset),
    Hsetnx(Hsetnx),
    Hstrlen(Hstrlen),
    Hvals(Hvals),
    Incr(Incr),
    IncrBy(IncrBy),
    Keys(Keys),
    Lindex(Lindex),
    Llen(Llen),
    Lpop(Lpop),
    Lpush(Lpush),
    Lpushx(Lpushx),
    Lrange(Lrange),
    Lrem(Lrem),
    Lset(Lset),
    Mget(Mget),
    Mset(Mset),
    Rpop(Rpop),
    Rpush(Rpush),
    Rpushx(Rpushx),
    Sadd(Sadd),
    Scard(Scard),
    Sdiff(Sdiff),
    SdiffStore(SdiffStore),
    Set(Set),
    SetBit(SetBit),
    SetEx(SetEx),
    Setnx(Setnx),
    Setrange(Setrange),
    Sinter(Sinter),
    SinterStore(SinterStore),
    Sismember(Sismember),
    Smembers(Smembers),
    Smove(Smove),
    Spop(Spop),
    Srem(Srem),
    Strlen(Strlen),
    Sunion(Sunion),
    SunionStore(SunionStore),
    Ttl(Ttl),
    Type(Type),
    Zadd(Zadd),
    Zcard(Zcard),
    Zcount(Zcount),
    Zrange(Zrange),
    ZrangeByScore(ZrangeByScore),
    Zrank(Zrank),
    Zrem(Zrem),
    ZrevRank(ZrevRank),
    Zscore(Zscore),

    Command(Command_),
    Ping(Ping),
    Quit(Quit),
}

impl Executable for Command {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match self {
            Command::Append(cmd) => cmd.exec(store),
            Command::BitCount(cmd) => cmd.exec(store),
            Command::Command(cmd) => cmd.exec(store),
            Command::Decr(cmd) => cmd.exec(store),
            Command::DecrBy(cmd) => cmd.exec(store),
            Command::Del(cmd) => cmd.exec(store),
            Command::Exists(cmd) => cmd.exec(store),
            Command::Expire(cmd) => cmd.exec(store),
            Command::ExpireAt(cmd) => cmd.exec(store),
            Command::Get(cmd) => cmd.exec(store),
            Command::GetBit(cmd) => cmd.exec(store),
            Command::Getrange(cmd) => cmd.exec(store),
            Command::GetSet(cmd) => cmd.exec(store),
            Command::Hdel(cmd) => cmd.exec(store),
            Command::Hexists(cmd) => cmd.exec(store),
            Command::Hget(cmd) => cmd.exec(store),
            Command::Hgetall(cmd) => cmd.exec(store),
            Command::HincrBy(cmd) => cmd.exec(store),
            Command::HincrByFloat(cmd) => cmd.exec(store),
            Command::Hkeys(cmd) => cmd.exec(store),
            Command::Hlen(cmd) => cmd.exec(store),
            Command::Hmget(cmd) => cmd.exec(store),
            Command::Hmset(cmd) => cmd.exec(store),
            Command::Hset(cmd) => cmd.exec(store),
            Command::Hsetnx(cmd) => cmd.exec(store),
            Command::Hstrlen(cmd) => cmd.exec(store),
            Command::Hvals(cmd) => cmd.exec(store),
            Command::Incr(cmd) => cmd.exec(store),
            Command::IncrBy(cmd) => cmd.exec(store),
            Command::Keys(cmd) => cmd.exec(store),
            Command::Lindex(cmd) => cmd.exec(store),
            Command::Llen(cmd) => cmd.exec(store),
            Command::Lpop(cmd) => cmd.exec(store),
            Command::Lpush(cmd) => cmd.exec(store),
            Command::Lpushx(cmd) => cmd.exec(store),
            Command::Lrange(cmd) => cmd.exec(store),
            Command::Lrem(cmd) => cmd.exec(store),
            Command::Lset(cmd) => cmd.exec(store),
            Command::Mget(cmd) => cmd.exec(store),
            Command::Mset(cmd) => cmd.exec(store),
            Command::Ping(cmd) => cmd.exec(store),
            Command::Quit(cmd) => cmd.exec(store),
            Command::Rpop(cmd) => cmd.exec(store),
            Command::Rpush(cmd) => cmd.exec(store),
            Command::Rpushx(cmd) => cmd.exec(store),
            Command::Sadd(cmd) => cmd.exec(store),
            Command::Scard(cmd) => cmd.exec(store),
            Command::Sdiff(cmd) => cmd.exec(store),
            Command::SdiffStore(cmd) => cmd.exec(store),
            Command::Set(cmd) => cmd.exec(store),
            Command::SetBit(cmd) => cmd.exec(store),
            Command::SetEx(cmd) => cmd.exec(store),
            Command::Setnx(cmd) => cmd.exec(store),
            Command::Setrange(cmd) => cmd.exec(store),
            Command::Sinter(cmd) => cmd.exec(store),
            Command::SinterStore(cmd) => cmd.exec(store),
            Command::Sismember(cmd) => cmd.exec(store),
            Command::Smembers(cmd) => cmd.exec(store),
            Command::Smove(cmd) => cmd.exec(store),
            Command::Spop(cmd) => cmd.exec(store),
            Command::Srem(cmd) => cmd.exec(store),
            Command::Strlen(cmd) => cmd.exec(store),
            Command::Sunion(cmd) => cmd.exec(store),
            Command::SunionStore(cmd) => cmd.exec(store),
            Command::Ttl(cmd) => cmd.exec(store),
            Command::Type(cmd) => cmd.exec(store),
            Command::Zadd(cmd) => cmd.exec(store),
            Command::Zcard(cmd) => cmd.exec(store),
            Command::Zcount(cmd) => cmd.exec(store),
            Command::Zrange(cmd) => cmd.exec(store),
            Command::ZrangeByScore(cmd) => cmd.exec(store),
            Command::Zrank(cmd) => cmd.exec(store),
            Command::Zrem(cmd) => cmd.exec(store),
            Command::ZrevRank(cmd) => cmd.exec(store),
            Command::Zscore(cmd) => cmd.exec(store),
        }
    }
}

impl TryFrom<Vec<Bytes>> for Command {
    type Error = Error;

    /// Maps a decoded request (command name plus arguments) to its parsed
    /// command. The name is matched case-insensitively.
    fn try_from(parts: Vec<Bytes>) -> Result<Self, Self::Error> {
        let parser = &mut CommandParser::new(parts)?;

        match parser.name().to_string().as_str() {
            "append" => Append::try_from(parser).map(Command::Append),
            "bitcount" => BitCount::try_from(parser).map(Command::BitCount),
            "command" => Command_::try_from(parser).map(Command::Command),
            "decr" => Decr::try_from(parser).map(Command::Decr),
            "decrby" => DecrBy::try_from(parser).map(Command::DecrBy),
            "del" => Del::try_from(parser).map(Command::Del),
            "exists" => Exists::try_from(parser).map(Command::Exists),
            "expire" => Expire::try_from(parser).map(Command::Expire),
            "expireat" => ExpireAt::try_from(parser).map(Command::ExpireAt),
            "get" => Get::try_from(parser).map(Command::Get),
            "getbit" => GetBit::try_from(parser).map(Command::GetBit),
            "getrange" => Getrange::try_from(parser).map(Command::Getrange),
            "getset" => GetSet::try_from(parser).map(Command::GetSet),
            "hdel" => Hdel::try_from(parser).map(Command::Hdel),
            "hexists" => Hexists::try_from(parser).map(Command::Hexists),
            "hget" => Hget::try_from(parser).map(Command::Hget),
            "hgetall" => Hgetall::try_from(parser).map(Command::Hgetall),
            "hincrby" => HincrBy::try_from(parser).map(Command::HincrBy),
            "hincrbyfloat" => HincrByFloat::try_from(parser).map(Command::HincrByFloat),
            "hkeys" => Hkeys::try_from(parser).map(Command::Hkeys),
            "hlen" => Hlen::try_from(parser).map(Command::Hlen),
            "hmget" => Hmget::try_from(parser).map(Command::Hmget),
            "hmset" => Hmset::try_from(parser).map(Command::Hmset),
            "hset" => Hset::try_from(parser).map(Command::Hset),
            "hsetnx" => Hsetnx::try_from(parser).map(Command::Hsetnx),
            "hstrlen" => Hstrlen::try_from(parser).map(Command::Hstrlen),
            "hvals" => Hvals::try_from(parser).map(Command::Hvals),
            "incr" => Incr::try_from(parser).map(Command::Incr),
            "incrby" => IncrBy::try_from(parser).map(Command::IncrBy),
            "keys" => Keys::try_from(parser).map(Command::Keys),
            "lindex" => Lindex::try_from(parser).map(Command::Lindex),
            "llen" => Llen::try_from(parser).map(Command::Llen),
            "lpop" => Lpop::try_from(parser).map(Command::Lpop),
            "lpush" => Lpush::try_from(parser).map(Command::Lpush),
            "lpushx" => Lpushx::try_from(parser).map(Command::Lpushx),
            "lrange" => Lrange::try_from(parser).map(Command::Lrange),
            "lrem" => Lrem::try_from(parser).map(Command::Lrem),
            "lset" => Lset::try_from(parser).map(Command::Lset),
            "mget" => Mget::try_from(parser).map(Command::Mget),
            "mset" => Mset::try_from(parser).map(Command::Mset),
            "ping" => Ping::try_from(parser).map(Command::Ping),
            "quit" => Quit::try_from(parser).map(Command::Quit),
            "rpop" => Rpop::try_from(parser).map(Command::Rpop),
            "rpush" => Rpush::try_from(parser).map(Command::Rpush),
            "rpushx" => Rpushx::try_from(parser).map(Command::Rpushx),
            "sadd" => Sadd::try_from(parser).map(Command::Sadd),
            "scard" => Scard::try_from(parser).map(Command::Scard),
            "sdiff" => Sdiff::try_from(parser).map(Command::Sdiff),
            "sdiffstore" => SdiffStore::try_from(parser).map(Command::SdiffStore),
            "set" => Set::try_from(parser).map(Command::Set),
            "setbit" => SetBit::try_from(parser).map(Command::SetBit),
            "setex" => SetEx::try_from(parser).map(Command::SetEx),
            "setnx" => Setnx::try_from(parser).map(Command::Setnx),
            "setrange" => Setrange::try_from(parser).map(Command::Setrange),
            "sinter" => Sinter::try_from(parser).map(Command::Sinter),
            "sinterstore" => SinterStore::try_from(parser).map(Command::SinterStore),
            "sismember" => Sismember::try_from(parser).map(Command::Sismember),
            "smembers" => Smembers::try_from(parser).map(Command::Smembers),
            "smove" => Smove::try_from(parser).map(Command::Smove),
            "spop" => Spop::try_from(parser).map(Command::Spop),
            "srem" => Srem::try_from(parser).map(Command::Srem),
            "strlen" => Strlen::try_from(parser).map(Command::Strlen),
            "sunion" => Sunion::try_from(parser).map(Command::Sunion),
            "sunionstore" => SunionStore::try_from(parser).map(Command::SunionStore),
            "ttl" => Ttl::try_from(parser).map(Command::Ttl),
            "type" => Type::try_from(parser).map(Command::Type),
            "zadd" => Zadd::try_from(parser).map(Command::Zadd),
            "zcard" => Zcard::try_from(parser).map(Command::Zcard),
            "zcount" => Zcount::try_from(parser).map(Command::Zcount),
            "zrange" => Zrange::try_from(parser).map(Command::Zrange),
            "zrangebyscore" => ZrangeByScore::try_from(parser).map(Command::ZrangeByScore),
            "zrank" => Zrank::try_from(parser).map(Command::Zrank),
            "zrem" => Zrem::try_from(parser).map(Command::Zrem),
            "zrevrank" => ZrevRank::try_from(parser).map(Command::ZrevRank),
            "zscore" => Zscore::try_from(parser).map(Command::Zscore),
            name => {
                let args = parser
                    .remaining_lossy()
                    .iter()
                    .map(|arg| format!("`{arg}`"))
                    .join(", ");
                Err(CommandParserError::UnknownCommand {
                    command: name.to_string(),
                    args,
                }
                .into())
            }
        }
    }
}

/// Pulls typed arguments off a decoded request, one at a time. Exhausting
/// the arguments early, or leaving some behind (see `finish`), is an arity
/// error carrying the command name.
pub struct CommandParser {
    name: String,
    parts: vec::IntoIter<Bytes>,
}

impl CommandParser {
    fn new(parts: Vec<Bytes>) -> Result<CommandParser, CommandParserError> {
        let mut parts = parts.into_iter();
        let name = match parts.next() {
            None => return Err(CommandParserError::EmptyCommand),
            Some(bytes) => String::from_utf8_lossy(&bytes).to_lowercase(),
        };
        Ok(CommandParser { name, parts })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    fn wrong_arity(&self) -> CommandParserError {
        CommandParserError::WrongArity {
            command: self.name.clone(),
        }
    }

    pub(crate) fn next_bytes(&mut self) -> Result<Bytes, CommandParserError> {
        match self.parts.next() {
            Some(bytes) => Ok(bytes),
            None => Err(self.wrong_arity()),
        }
    }

    pub(crate) fn next_string(&mut self) -> Result<String, CommandParserError> {
        let bytes = self.next_bytes()?;
        String::from_utf8(bytes.to_vec()).map_err(|_| CommandParserError::InvalidUtf8)
    }

    pub(crate) fn next_integer(&mut self) -> Result<i64, CommandParserError> {
        self.next_string()?
            .parse::<i64>()
            .map_err(|_| CommandParserError::InvalidInteger)
    }

    pub(crate) fn next_float(&mut self) -> Result<f64, CommandParserError> {
        let value = self
            .next_string()?
            .parse::<f64>()
            .map_err(|_| CommandParserError::InvalidFloat)?;
        if value.is_nan() {
            return Err(CommandParserError::InvalidFloat);
        }
        Ok(value)
    }

    /// Drains the remaining arguments. Commands with a variadic tail use
    /// this instead of `finish`.
    pub(crate) fn remaining_strings(&mut self) -> Result<Vec<String>, CommandParserError> {
        self.parts
            .by_ref()
            .map(|bytes| {
                String::from_utf8(bytes.to_vec()).map_err(|_| CommandParserError::InvalidUtf8)
            })
            .collect()
    }

    fn remaining_lossy(&mut self) -> Vec<String> {
        self.parts
            .by_ref()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .collect()
    }

    pub(crate) fn has_more(&self) -> bool {
        self.parts.len() > 0
    }

    /// Asserts all arguments were consumed. Fixed-arity commands call this
    /// last so trailing garbage is rejected before any side effect.
    pub(crate) fn finish(&mut self) -> Result<(), CommandParserError> {
        if self.parts.next().is_some() {
            return Err(self.wrong_arity());
        }
        Ok(())
    }
}

#[derive(Debug, ThisError, PartialEq)]
pub enum CommandParserError {
    #[error("ERR wrong number of arguments for '{command}' command")]
    WrongArity { command: String },
    #[error("ERR value is not an integer or out of range")]
    InvalidInteger,
    #[error("ERR value is not a valid float")]
    InvalidFloat,
    #[error("ERR syntax error")]
    Syntax,
    #[error("ERR invalid UTF-8 in argument")]
    InvalidUtf8,
    #[error("ERR unknown command `{command}`, with args beginning with: {args}")]
    UnknownCommand { command: String, args: String },
    #[error("ERR empty command")]
    EmptyCommand,
}

/// Builds a command from string parts the way the decoder would deliver
/// them. Test helper shared by the per-command test modules.
#[cfg(test)]
pub(crate) fn parse(parts: &[&str]) -> Result<Command, Error> {
    let parts = parts
        .iter()
        .map(|part| Bytes::copy_from_slice(part.as_bytes()))
        .collect::<Vec<_>>();
    Command::try_from(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_are_case_insensitive() {
        let command = parse(&["GeT", "foo"]).unwrap();
        assert_eq!(
            command,
            Command::Get(Get {
                key: "foo".to_string()
            })
        );
    }

    #[test]
    fn unknown_command_echoes_name_and_args() {
        let err = parse(&["NOSUCH", "a", "b"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERR unknown command `nosuch`, with args beginning with: `a`, `b`"
        );
    }

    #[test]
    fn missing_argument_is_an_arity_error() {
        let err = parse(&["get"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERR wrong number of arguments for 'get' command"
        );
    }

    #[test]
    fn trailing_argument_is_an_arity_error() {
        let err = parse(&["get", "foo", "bar"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERR wrong number of arguments for 'get' command"
        );
    }

    #[test]
    fn empty_request_is_rejected() {
        let err = Command::try_from(Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "ERR empty command");
    }
}
