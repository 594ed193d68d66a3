use std::collections::HashMap;

use super::{Data, Error, Store, Value};

/// One distinct score and every member currently holding it, kept
/// lexicographically sorted.
#[derive(Debug, Clone)]
struct Bucket {
    score: f64,
    members: Vec<String>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Score-ordered index over a sorted set: a doubly linked sequence of
/// score buckets in strictly ascending order, backed by an arena so links
/// are plain indices instead of pointers. Freed slots are recycled through
/// a free list.
///
/// Mutations scan linearly from the tail, which favors workloads that
/// mostly touch recent, high scores.
#[derive(Debug, Clone, Default)]
pub struct ScoreIndex {
    slots: Vec<Option<Bucket>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl ScoreIndex {
    fn get(&self, index: usize) -> Option<&Bucket> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut Bucket> {
        self.slots.get_mut(index).and_then(|slot| slot.as_mut())
    }

    fn alloc(&mut self, bucket: Bucket) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(bucket);
                index
            }
            None => {
                self.slots.push(Some(bucket));
                self.slots.len() - 1
            }
        }
    }

    /// Buckets in ascending score order.
    fn buckets(&self) -> impl Iterator<Item = &Bucket> + '_ {
        std::iter::successors(self.head.and_then(|i| self.get(i)), move |bucket| {
            bucket.next.and_then(|i| self.get(i))
        })
    }

    /// The flattened sequence: every member with its score, lowest score
    /// first, lexicographic among ties.
    fn entries(&self) -> impl Iterator<Item = (&String, f64)> + '_ {
        self.buckets()
            .flat_map(|bucket| bucket.members.iter().map(move |m| (m, bucket.score)))
    }

    pub fn len(&self) -> usize {
        self.buckets().map(|bucket| bucket.members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Places `member` at `score`, splicing in a new bucket when no bucket
    /// holds that score yet. Inserting a member already present at the same
    /// score is a no-op.
    pub fn insert(&mut self, score: f64, member: &str) {
        let mut cursor = self.tail;
        while let Some(index) = cursor {
            let (bucket_score, prev) = match self.get(index) {
                None => return,
                Some(bucket) => (bucket.score, bucket.prev),
            };

            if bucket_score == score {
                if let Some(bucket) = self.get_mut(index) {
                    if let Err(position) = bucket.members.binary_search_by(|m| m.as_str().cmp(member)) {
                        bucket.members.insert(position, member.to_string());
                    }
                }
                return;
            }
            if bucket_score < score {
                self.splice_after(index, score, member);
                return;
            }
            cursor = prev;
        }

        // Lower than every existing score (or the index is empty): the new
        // bucket becomes the head.
        let old_head = self.head;
        let new_index = self.alloc(Bucket {
            score,
            members: vec![member.to_string()],
            prev: None,
            next: old_head,
        });
        match old_head {
            Some(index) => {
                if let Some(bucket) = self.get_mut(index) {
                    bucket.prev = Some(new_index);
                }
            }
            None => self.tail = Some(new_index),
        }
        self.head = Some(new_index);
    }

    fn splice_after(&mut self, prev_index: usize, score: f64, member: &str) {
        let next_index = self.get(prev_index).and_then(|bucket| bucket.next);
        let new_index = self.alloc(Bucket {
            score,
            members: vec![member.to_string()],
            prev: Some(prev_index),
            next: next_index,
        });
        if let Some(bucket) = self.get_mut(prev_index) {
            bucket.next = Some(new_index);
        }
        match next_index {
            Some(index) => {
                if let Some(bucket) = self.get_mut(index) {
                    bucket.prev = Some(new_index);
                }
            }
            None => self.tail = Some(new_index),
        }
    }

    /// Removes `member` from the bucket holding exactly `score`, unlinking
    /// the bucket once its last member is gone. Returns whether the member
    /// was present.
    pub fn remove(&mut self, score: f64, member: &str) -> bool {
        let mut cursor = self.tail;
        while let Some(index) = cursor {
            let (bucket_score, prev) = match self.get(index) {
                None => return false,
                Some(bucket) => (bucket.score, bucket.prev),
            };

            if bucket_score < score {
                return false;
            }
            if bucket_score == score {
                let emptied = match self.get_mut(index) {
                    None => return false,
                    Some(bucket) => {
                        match bucket.members.binary_search_by(|m| m.as_str().cmp(member)) {
                            Err(_) => return false,
                            Ok(position) => {
                                bucket.members.remove(position);
                                bucket.members.is_empty()
                            }
                        }
                    }
                };
                if emptied {
                    self.unlink(index);
                }
                return true;
            }
            cursor = prev;
        }
        false
    }

    fn unlink(&mut self, index: usize) {
        let (prev, next) = match self.slots.get_mut(index).and_then(|slot| slot.take()) {
            None => return,
            Some(bucket) => (bucket.prev, bucket.next),
        };
        self.free.push(index);

        match prev {
            Some(i) => {
                if let Some(bucket) = self.get_mut(i) {
                    bucket.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(i) => {
                if let Some(bucket) = self.get_mut(i) {
                    bucket.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// All members at exactly `score`, in lexicographic order.
    pub fn members_at(&self, score: f64) -> Vec<String> {
        self.buckets()
            .take_while(|bucket| bucket.score <= score)
            .filter(|bucket| bucket.score == score)
            .flat_map(|bucket| bucket.members.iter().cloned())
            .collect()
    }

    /// 0-based position from the lowest score; lexicographic within a tie.
    pub fn rank(&self, member: &str) -> Option<usize> {
        let mut position = 0;
        for bucket in self.buckets() {
            match bucket.members.iter().position(|m| m == member) {
                Some(offset) => return Some(position + offset),
                None => position += bucket.members.len(),
            }
        }
        None
    }

    /// 0-based position from the highest score, the mirror of `rank`.
    pub fn rev_rank(&self, member: &str) -> Option<usize> {
        let mut position = 0;
        let mut cursor = self.tail;
        while let Some(index) = cursor {
            let bucket = self.get(index)?;
            match bucket.members.iter().rev().position(|m| m == member) {
                Some(offset) => return Some(position + offset),
                None => {
                    position += bucket.members.len();
                    cursor = bucket.prev;
                }
            }
        }
        None
    }

    /// Number of members with a score in `[min, max]`, both inclusive. The
    /// scan stops at the first bucket past `max`.
    pub fn count(&self, min: f64, max: f64) -> usize {
        self.buckets()
            .take_while(|bucket| bucket.score <= max)
            .filter(|bucket| bucket.score >= min)
            .map(|bucket| bucket.members.len())
            .sum()
    }

    /// Slice of the flattened sequence by inclusive, possibly-negative
    /// offsets. A negative `start` clamps to the front, an oversized `stop`
    /// to the back; an inverted range selects nothing.
    pub fn range_by_index(&self, start: i64, stop: i64) -> Vec<(String, f64)> {
        let len = self.len() as i64;

        let mut start = if start < 0 { len + start } else { start };
        if start < 0 {
            start = 0;
        }
        let mut stop = if stop < 0 { len + stop } else { stop };
        if stop > len - 1 {
            stop = len - 1;
        }
        if start > stop || start > len - 1 {
            return vec![];
        }

        self.entries()
            .skip(start as usize)
            .take((stop - start + 1) as usize)
            .map(|(member, score)| (member.clone(), score))
            .collect()
    }

    /// Members whose score lies in `[min, max]` inclusive, ascending.
    pub fn range_by_score(&self, min: f64, max: f64) -> Vec<(String, f64)> {
        self.buckets()
            .take_while(|bucket| bucket.score <= max)
            .filter(|bucket| bucket.score >= min)
            .flat_map(|bucket| bucket.members.iter().map(move |m| (m.clone(), bucket.score)))
            .collect()
    }
}

// Arena layout is an artifact of operation order; equality is over the
// flattened sequence.
impl PartialEq for ScoreIndex {
    fn eq(&self, other: &Self) -> bool {
        self.entries().eq(other.entries())
    }
}

/// A sorted set: the member-to-score mapping plus its score-ordered index.
/// Every mutation keeps the two in lockstep.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortedSet {
    scores: HashMap<String, f64>,
    index: ScoreIndex,
}

impl SortedSet {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Adds the member or moves it to a new score. Returns whether the
    /// member was new.
    pub fn add(&mut self, score: f64, member: &str) -> bool {
        match self.scores.insert(member.to_string(), score) {
            None => {
                self.index.insert(score, member);
                true
            }
            Some(old) => {
                if old != score {
                    self.index.remove(old, member);
                    self.index.insert(score, member);
                }
                false
            }
        }
    }

    pub fn remove(&mut self, member: &str) -> bool {
        match self.scores.remove(member) {
            Some(score) => {
                self.index.remove(score, member);
                true
            }
            None => false,
        }
    }

    pub fn score(&self, member: &str) -> Option<f64> {
        self.scores.get(member).copied()
    }

    pub fn rank(&self, member: &str) -> Option<usize> {
        self.index.rank(member)
    }

    pub fn rev_rank(&self, member: &str) -> Option<usize> {
        self.index.rev_rank(member)
    }

    pub fn count(&self, min: f64, max: f64) -> usize {
        self.index.count(min, max)
    }

    pub fn range_by_index(&self, start: i64, stop: i64) -> Vec<(String, f64)> {
        self.index.range_by_index(start, stop)
    }

    pub fn range_by_score(&self, min: f64, max: f64) -> Vec<(String, f64)> {
        self.index.range_by_score(min, max)
    }
}

impl Store {
    fn sorted_set(&mut self, key: &str) -> Result<Option<&mut SortedSet>, Error> {
        match self.live_entry(key) {
            None => Ok(None),
            Some(Value {
                data: Data::SortedSet(zset),
                ..
            }) => Ok(Some(zset)),
            Some(_) => Err(Error::WrongType),
        }
    }

    /// Adds or rescores each `(score, member)` pair, returning how many
    /// members were newly added.
    pub fn zadd(&mut self, key: &str, entries: Vec<(f64, String)>) -> Result<i64, Error> {
        if let Some(zset) = self.sorted_set(key)? {
            let added = entries
                .into_iter()
                .filter(|(score, member)| zset.add(*score, member))
                .count();
            return Ok(added as i64);
        }

        let mut zset = SortedSet::default();
        let added = entries
            .into_iter()
            .filter(|(score, member)| zset.add(*score, member))
            .count();
        self.insert(key, Data::SortedSet(zset));
        Ok(added as i64)
    }

    pub fn zcard(&mut self, key: &str) -> Result<usize, Error> {
        Ok(self.sorted_set(key)?.map_or(0, |zset| zset.len()))
    }

    pub fn zscore(&mut self, key: &str, member: &str) -> Result<Option<f64>, Error> {
        Ok(self.sorted_set(key)?.and_then(|zset| zset.score(member)))
    }

    pub fn zcount(&mut self, key: &str, min: f64, max: f64) -> Result<usize, Error> {
        Ok(self.sorted_set(key)?.map_or(0, |zset| zset.count(min, max)))
    }

    pub fn zrank(&mut self, key: &str, member: &str) -> Result<Option<usize>, Error> {
        Ok(self.sorted_set(key)?.and_then(|zset| zset.rank(member)))
    }

    pub fn zrevrank(&mut self, key: &str, member: &str) -> Result<Option<usize>, Error> {
        Ok(self.sorted_set(key)?.and_then(|zset| zset.rev_rank(member)))
    }

    /// Removes the given members, returning how many actually existed. The
    /// key itself goes away once its last member does.
    pub fn zrem(&mut self, key: &str, members: &[String]) -> Result<i64, Error> {
        let removed = match self.sorted_set(key)? {
            None => 0,
            Some(zset) => members.iter().filter(|m| zset.remove(m)).count() as i64,
        };
        self.drop_if_empty(key);
        Ok(removed)
    }

    pub fn zrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<(String, f64)>, Error> {
        Ok(self
            .sorted_set(key)?
            .map_or_else(Vec::new, |zset| zset.range_by_index(start, stop)))
    }

    pub fn zrange_by_score(
        &mut self,
        key: &str,
        min: f64,
        max: f64,
    ) -> Result<Vec<(String, f64)>, Error> {
        Ok(self
            .sorted_set(key)?
            .map_or_else(Vec::new, |zset| zset.range_by_score(min, max)))
    }
}
