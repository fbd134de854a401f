use alloc::alloc::handle_alloc_error;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt::Debug;

use crate::Config;
use crate::Error;

/// Link to the next node in a chain, as an index into the node arena. `None`
/// terminates the chain.
type Link = Option<usize>;

#[inline(always)]
fn bucket_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

/// Layout of a bucket array with `capacity` heads, or `None` if it cannot
/// be allocated on this target.
pub(crate) fn bucket_layout(capacity: usize) -> Option<Layout> {
    Layout::array::<Link>(capacity).ok()
}

/// Doubled bucket count and its layout, or `None` if doubling `old` overflows.
fn grown_capacity(old: usize) -> Option<(usize, Layout)> {
    let capacity = old.checked_mul(2)?;
    Some((capacity, bucket_layout(capacity)?))
}

#[inline(always)]
fn exceeds_load_factor(len: usize, capacity: usize, load_factor: f64) -> bool {
    len as f64 / capacity as f64 > load_factor
}

/// A chain node. The hash is cached at insertion so that lookups can reject
/// unequal keys without calling the equality predicate, and so that growth
/// never has to rehash a value.
#[derive(Clone)]
struct Node<V> {
    hash: u64,
    value: V,
    next: Link,
}

/// Walks one chain from head to tail, yielding arena slots.
struct ChainSlots<'a, V> {
    nodes: &'a [Node<V>],
    link: Link,
}

impl<V> Iterator for ChainSlots<'_, V> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.link?;
        self.link = self.nodes[slot].next;
        Some(slot)
    }
}

/// Chain-length statistics for a [`HashTable`].
///
/// Available in tests or with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainHistogram {
    /// `counts[n]` is the number of buckets whose chain holds exactly `n`
    /// entries.
    pub counts: Vec<usize>,
}

#[cfg(any(test, feature = "stats"))]
impl ChainHistogram {
    /// Length of the longest chain in the table.
    pub fn longest_chain(&self) -> usize {
        self.counts.len().saturating_sub(1)
    }

    /// Pretty-prints the histogram horizontally using stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!("chain histogram ({} buckets):", self.counts.iter().sum::<usize>());

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            match units % 8 {
                1 => bar.push('▏'),
                2 => bar.push('▎'),
                3 => bar.push('▍'),
                4 => bar.push('▌'),
                5 => bar.push('▋'),
                6 => bar.push('▊'),
                7 => bar.push('▉'),
                _ => {}
            }
            bar
        };

        for (len, &count) in self.counts.iter().enumerate() {
            println!("{:>3} | {} ({})", len, make_bar(count), count);
        }
    }
}

/// Debug statistics for hash table analysis.
///
/// Available in tests or with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of entries currently in the table
    pub populated: usize,
    /// Number of buckets
    pub capacity: usize,
    /// Number of buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Configured growth threshold
    pub max_load_factor: f64,
    /// Current load factor (populated / capacity)
    pub load_factor: f64,
    /// Bucket utilization (occupied_buckets / capacity)
    pub bucket_utilization: f64,
    /// Bytes reserved for buckets and nodes
    pub total_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {} entries in {} buckets ({:.2} load factor, grows above {:.2})",
            self.populated, self.capacity, self.load_factor, self.max_load_factor
        );
        println!(
            "Bucket Usage: {}/{} ({:.2}% utilization)",
            self.occupied_buckets,
            self.capacity,
            self.bucket_utilization * 100.0
        );
        println!("Longest Chain: {}", self.longest_chain);
        println!("Total Allocated: {} bytes", self.total_bytes);
    }
}

/// A hash table using separate chaining.
///
/// `HashTable<V>` stores values of type `V` in an array of buckets, each the
/// head of a singly linked chain. Like a raw table, it requires you to provide
/// both the hash value and an equality predicate for each operation; the hash
/// is reduced to a bucket as `hash % capacity`.
///
/// Nodes live in a single arena and chains link them by index, so every node
/// is owned by exactly one slot of the arena and reachable from exactly one
/// bucket.
///
/// The table doubles its bucket count when an insertion would raise
/// `len / capacity` above the configured load factor. It never shrinks.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::Entry;
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::new();
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    buckets: Vec<Link>,
    nodes: Vec<Node<V>>,
    load_factor: f64,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::format;
        use alloc::string::ToString;

        f.debug_struct("HashTable")
            .field(
                "chains",
                &(0..self.buckets.len())
                    .map(|bucket| {
                        let items = self
                            .chain(bucket)
                            .map(|slot| format!("{:016x}", self.nodes[slot].hash))
                            .collect::<Vec<_>>();
                        if items.is_empty() {
                            "..".to_string()
                        } else {
                            items.join(" -> ")
                        }
                    })
                    .collect::<Vec<_>>(),
            )
            .field("populated", &self.nodes.len())
            .field("capacity", &self.buckets.len())
            .field("load_factor", &self.load_factor)
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with 8 buckets and a 0.75 load factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::new();
    /// assert_eq!(table.capacity(), 8);
    /// assert!(table.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// Creates an empty table with `capacity` buckets and the default load
    /// factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is zero or too large
    /// for a bucket array on this target.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(100).unwrap();
    /// assert_eq!(table.capacity(), 100);
    ///
    /// assert!(HashTable::<String>::with_capacity(0).is_err());
    /// assert!(HashTable::<String>::with_capacity(usize::MAX).is_err());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::with_config(Config::default().with_initial_capacity(capacity))
    }

    /// Creates an empty table from a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the config fails
    /// [`Config::validate`].
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: Config) -> Self {
        debug_assert!(config.validate().is_ok());
        Self {
            buckets: alloc::vec![None; config.initial_capacity],
            nodes: Vec::new(),
            load_factor: config.load_factor,
        }
    }

    fn chain(&self, bucket: usize) -> ChainSlots<'_, V> {
        ChainSlots {
            nodes: &self.nodes,
            link: self.buckets[bucket],
        }
    }

    /// Returns an iterator over all values in the table.
    ///
    /// Values are yielded in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// table
    ///     .entry(hash_str("a"), |s: &String| s == "a")
    ///     .or_insert("a".to_string());
    /// table
    ///     .entry(hash_str("b"), |s: &String| s == "b")
    ///     .or_insert("b".to_string());
    ///
    /// let mut values: Vec<_> = table.iter().cloned().collect();
    /// values.sort();
    /// assert_eq!(values, vec!["a".to_string(), "b".to_string()]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.nodes.iter(),
        }
    }

    /// Removes all values from the table, returning them in an iterator.
    ///
    /// The bucket count is kept. Values not consumed by the iterator are
    /// dropped with it.
    pub fn drain(&mut self) -> Drain<'_, V> {
        self.buckets.fill(None);
        Drain {
            inner: self.nodes.drain(..),
        }
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the load factor above which the table grows.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Removes all elements from the table.
    ///
    /// Every bucket is reset to empty and every value is dropped. The bucket
    /// count is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(1, |&n: &u64| n == 1).or_insert(1);
    /// table.entry(2, |&n: &u64| n == 2).or_insert(2);
    /// assert_eq!(table.len(), 2);
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 8);
    /// ```
    pub fn clear(&mut self) {
        self.buckets.fill(None);
        self.nodes.clear();
        log::trace!("cleared hash table, keeping {} buckets", self.buckets.len());
    }

    /// Returns a reference to the value matching `hash` and `eq`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.find(42, |&n| n == 42), Some(&42));
    /// assert_eq!(table.find(7, |&n| n == 7), None);
    /// ```
    #[inline]
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let slot = self.locate(hash, eq)?;
        Some(&self.nodes[slot].value)
    }

    /// Returns a mutable reference to the value matching `hash` and `eq`, if
    /// any.
    #[inline]
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let slot = self.locate(hash, eq)?;
        Some(&mut self.nodes[slot].value)
    }

    /// Removes and returns the value matching `hash` and `eq`.
    ///
    /// The node is spliced out of its chain. Removal never shrinks the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(42, |&n| n == 42), Some(42));
    /// assert!(table.is_empty());
    /// assert_eq!(table.remove(42, |&n| n == 42), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let slot = self.locate(hash, eq)?;
        Some(self.remove_slot(slot))
    }

    /// Returns the entry matching `hash` and `eq` for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    ///
    /// match table.entry(5, |&(k, _): &(u64, &str)| k == 5) {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert((5, "five"));
    ///     }
    ///     Entry::Occupied(_) => unreachable!(),
    /// }
    ///
    /// match table.entry(5, |&(k, _)| k == 5) {
    ///     Entry::Occupied(mut entry) => entry.get_mut().1 = "FIVE",
    ///     Entry::Vacant(_) => unreachable!(),
    /// }
    /// assert_eq!(table.find(5, |&(k, _)| k == 5), Some(&(5, "FIVE")));
    /// ```
    #[inline]
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        match self.locate(hash, eq) {
            Some(slot) => Entry::Occupied(OccupiedEntry { table: self, slot }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Scans the chain of `hash`'s bucket, comparing the cached hash before
    /// calling `eq`.
    #[inline]
    fn locate(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        self.chain(bucket_index(hash, self.buckets.len()))
            .find(|&slot| {
                let node = &self.nodes[slot];
                node.hash == hash && eq(&node.value)
            })
    }

    /// Links a new node at the head of its bucket's chain, growing first if
    /// this insertion takes the table past its load factor.
    fn insert_new(&mut self, hash: u64, value: V) -> usize {
        if exceeds_load_factor(self.nodes.len() + 1, self.buckets.len(), self.load_factor) {
            self.grow();
        }

        let bucket = bucket_index(hash, self.buckets.len());
        let slot = self.nodes.len();
        self.nodes.push(Node {
            hash,
            value,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(slot);
        slot
    }

    /// Points whichever link currently refers to `from` at `to` instead.
    fn redirect(&mut self, bucket: usize, from: usize, to: Link) {
        match self.chain(bucket).take_while(|&slot| slot != from).last() {
            Some(prev) => {
                debug_assert_eq!(self.nodes[prev].next, Some(from));
                self.nodes[prev].next = to;
            }
            None => {
                debug_assert_eq!(self.buckets[bucket], Some(from));
                self.buckets[bucket] = to;
            }
        }
    }

    fn remove_slot(&mut self, slot: usize) -> V {
        let capacity = self.buckets.len();
        let next = self.nodes[slot].next;
        self.redirect(bucket_index(self.nodes[slot].hash, capacity), slot, next);

        // `swap_remove` moves the last node into `slot`; its predecessor has to
        // follow it.
        let last = self.nodes.len() - 1;
        if slot != last {
            let bucket = bucket_index(self.nodes[last].hash, capacity);
            self.redirect(bucket, last, Some(slot));
        }

        self.nodes.swap_remove(slot).value
    }

    /// Doubles the bucket count and relinks every node under the new capacity.
    ///
    /// Old buckets are visited in ascending order, each chain from head to
    /// tail. Nodes are relinked, never reallocated or rehashed, and the load
    /// factor is not re-checked. The new bucket array is allocated before any
    /// state changes, so an allocation failure leaves the table untouched.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let old_capacity = self.buckets.len();
        let Some((new_capacity, layout)) = grown_capacity(old_capacity) else {
            log::warn!(
                "cannot grow hash table beyond {old_capacity} buckets, chains will lengthen instead"
            );
            return;
        };

        let mut buckets = Vec::new();
        if buckets.try_reserve_exact(new_capacity).is_err() {
            handle_alloc_error(layout);
        }
        buckets.resize(new_capacity, None);

        let old_buckets = core::mem::replace(&mut self.buckets, buckets);
        for head in old_buckets {
            let mut link = head;
            while let Some(slot) = link {
                let node = &mut self.nodes[slot];
                link = node.next;

                let bucket = bucket_index(node.hash, new_capacity);
                node.next = self.buckets[bucket];
                self.buckets[bucket] = Some(slot);
            }
        }

        log::debug!(
            "grew hash table from {old_capacity} to {new_capacity} buckets ({} entries)",
            self.nodes.len()
        );
    }

    /// Counts buckets by chain length.
    ///
    /// Available in tests or with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> ChainHistogram {
        let mut counts = alloc::vec![0usize];
        for bucket in 0..self.buckets.len() {
            let len = self.chain(bucket).count();
            if len >= counts.len() {
                counts.resize(len + 1, 0);
            }
            counts[len] += 1;
        }
        ChainHistogram { counts }
    }

    /// Returns detailed utilization statistics for debugging.
    ///
    /// Available in tests or with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let histogram = self.chain_histogram();
        let capacity = self.buckets.len();
        let occupied_buckets = capacity - histogram.counts[0];

        DebugStats {
            populated: self.nodes.len(),
            capacity,
            occupied_buckets,
            longest_chain: histogram.longest_chain(),
            max_load_factor: self.load_factor,
            load_factor: self.nodes.len() as f64 / capacity as f64,
            bucket_utilization: occupied_buckets as f64 / capacity as f64,
            total_bytes: self.buckets.capacity() * core::mem::size_of::<Link>()
                + self.nodes.capacity() * core::mem::size_of::<Node<V>>(),
        }
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
///
/// # Examples
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::Entry;
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # fn hash_str(s: &str) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     s.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::new();
/// let hash = hash_str("key");
///
/// match table.entry(hash, |s: &String| s == "key") {
///     Entry::Vacant(entry) => {
///         entry.insert("key".to_string());
///     }
///     Entry::Occupied(entry) => {
///         println!("Key already exists: {}", entry.get());
///     }
/// }
/// ```
pub enum Entry<'a, V> {
    /// An entry with a matching value.
    Occupied(OccupiedEntry<'a, V>),
    /// An entry with no matching value.
    Vacant(VacantEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the value returned by `default` if the entry is vacant and
    /// returns a mutable reference to the value.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to the value if the entry is occupied.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Self {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }
}

impl<'a, V> Entry<'a, V>
where
    V: Default,
{
    /// Inserts `V::default()` if the entry is vacant and returns a mutable
    /// reference to the value.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    slot: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.table.nodes[self.slot].value
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.table.nodes[self.slot].value
    }

    /// Converts the entry into a mutable reference bound to the table.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.table.nodes[self.slot].value
    }

    /// Removes the entry from the table and returns its value.
    pub fn remove(self) -> V {
        self.table.remove_slot(self.slot)
    }
}

/// A view into a vacant entry in a [`HashTable`].
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts `value` at the head of the bucket's chain and returns a mutable
    /// reference to it.
    ///
    /// If the insertion raises `len / capacity` above the load factor, the
    /// table doubles its bucket count first.
    pub fn insert(self, value: V) -> &'a mut V {
        let table = self.table;
        let slot = table.insert_new(self.hash, value);
        &mut table.nodes[slot].value
    }
}

/// An iterator over the values in a [`HashTable`], in arbitrary order.
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, V> {
    inner: core::slice::Iter<'a, Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| &node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// A draining iterator over the values in a [`HashTable`].
///
/// This struct is created by the [`drain`] method on [`HashTable`].
///
/// [`drain`]: HashTable::drain
pub struct Drain<'a, V> {
    inner: alloc::vec::Drain<'a, Node<V>>,
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Drain<'_, V> {}
