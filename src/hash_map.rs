use core::borrow::Borrow;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::Config;
use crate::Error;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used by [`DefaultHashMap`].
        ///
        /// With the `foldhash` feature this is foldhash's fixed-seed
        /// `FoldHasher` builder: fast, non-cryptographic, and identical
        /// across runs. It offers no protection against collision attacks.
        pub type DefaultHashBuilder = foldhash::fast::FixedState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used by [`DefaultHashMap`].
        ///
        /// Without the `foldhash` feature this is SipHash-1-3 with zero keys,
        /// identical across runs. It offers no protection against collision
        /// attacks.
        pub type DefaultHashBuilder =
            std::hash::BuildHasherDefault<std::hash::DefaultHasher>;
    }
}

/// A [`HashMap`] using [`DefaultHashBuilder`].
#[cfg(any(feature = "foldhash", feature = "std"))]
pub type DefaultHashMap<K, V> = HashMap<K, V, DefaultHashBuilder>;

/// A hash map implemented using the chained [`HashTable`] as the underlying
/// storage.
///
/// `HashMap<K, V, S>` stores key-value pairs where keys implement `Hash + Eq`
/// and uses a hasher builder `S` to hash keys. Each key's hash is reduced to
/// a bucket as `hash % capacity`; colliding keys share that bucket's chain.
///
/// Lookups and removals of missing keys fail with [`Error::KeyNotFound`].
///
/// # Growth
///
/// The map starts with 8 buckets and a 0.75 load factor unless configured
/// otherwise. When an insertion of a new key raises `len / capacity` above
/// the load factor, the bucket count doubles and every entry is relinked
/// under the new capacity. Removals and [`clear`](Self::clear) never shrink
/// the map.
///
/// # Examples
///
/// ```rust
/// use chain_hash::DefaultHashMap;
/// use chain_hash::Error;
///
/// let mut m = DefaultHashMap::new();
/// m.insert("a", 1);
/// m.insert("b", 2);
/// m.insert("a", 3);
/// assert_eq!(m.get("a"), Ok(&3));
/// assert_eq!(m.len(), 2);
///
/// m.remove("b").unwrap();
/// assert_eq!(m.len(), 1);
/// assert_eq!(m.get("b"), Err(Error::KeyNotFound));
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, S> {
    table: HashTable<(K, V)>,
    hash_builder: S,
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug + Hash + Eq,
    V: Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(k, v)| other.get(k).is_ok_and(|other_v| v == other_v))
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map with the default configuration and the given
    /// hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use chain_hash::HashMap;
    /// #
    /// # struct SimpleHasher;
    /// # impl BuildHasher for SimpleHasher {
    /// #     type Hasher = SipHasher;
    /// #
    /// #     fn build_hasher(&self) -> Self::Hasher {
    /// #         SipHasher::new()
    /// #     }
    /// # }
    /// #
    /// let map: HashMap<i32, String, _> = HashMap::with_hasher(SimpleHasher);
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 8);
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
        }
    }

    /// Creates an empty map with `capacity` buckets and the given hasher
    /// builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is zero or too large
    /// for a bucket array on this target.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Result<Self, Error> {
        Self::with_config_and_hasher(
            Config::default().with_initial_capacity(capacity),
            hash_builder,
        )
    }

    /// Creates an empty map from a [`Config`] and the given hasher builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the config fails
    /// [`Config::validate`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use chain_hash::Config;
    /// # use chain_hash::HashMap;
    /// #
    /// # struct SimpleHasher;
    /// # impl BuildHasher for SimpleHasher {
    /// #     type Hasher = SipHasher;
    /// #
    /// #     fn build_hasher(&self) -> Self::Hasher {
    /// #         SipHasher::new()
    /// #     }
    /// # }
    /// #
    /// let config = Config::default()
    ///     .with_initial_capacity(4)
    ///     .with_load_factor(2.0);
    /// let map: HashMap<i32, String, _> =
    ///     HashMap::with_config_and_hasher(config, SimpleHasher).unwrap();
    /// assert_eq!(map.capacity(), 4);
    /// assert_eq!(map.load_factor(), 2.0);
    ///
    /// let bad = Config::default().with_load_factor(0.0);
    /// assert!(HashMap::<i32, String, _>::with_config_and_hasher(bad, SimpleHasher).is_err());
    /// ```
    pub fn with_config_and_hasher(config: Config, hash_builder: S) -> Result<Self, Error> {
        Ok(Self {
            table: HashTable::with_config(config)?,
            hash_builder,
        })
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the load factor above which the map grows.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Removes all elements from the map.
    ///
    /// This operation preserves the map's bucket count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::DefaultHashMap;
    ///
    /// let mut map = DefaultHashMap::new();
    /// for i in 0..20 {
    ///     map.insert(i, i);
    /// }
    /// let capacity = map.capacity();
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert!(map.get(&3).is_err());
    /// assert_eq!(map.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned and the
    /// map may grow. If the map did have this key present, the value is
    /// updated in place and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::DefaultHashMap;
    ///
    /// let mut map = DefaultHashMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Ok(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(mut entry) => {
                let old_value = core::mem::replace(&mut entry.get_mut().1, value);
                Some(old_value)
            }
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is not present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::DefaultHashMap;
    /// use chain_hash::Error;
    ///
    /// let mut map = DefaultHashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Ok(&"a"));
    /// assert_eq!(map.get(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .find(hash, |(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
            .ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is not present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, Error>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .find_mut(hash, |(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
            .ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_ok()
    }

    /// Removes a key from the map, returning its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is not present; the map is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::DefaultHashMap;
    /// use chain_hash::Error;
    ///
    /// let mut map = DefaultHashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Ok("a"));
    /// assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, Error>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is not present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V), Error>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .remove(hash, |(k, _)| k.borrow() == key)
            .ok_or(Error::KeyNotFound)
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::DefaultHashMap;
    ///
    /// let mut counts = DefaultHashMap::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.entry(word).or_insert(0) += 1;
    /// }
    ///
    /// assert_eq!(counts.get("a"), Ok(&2));
    /// assert_eq!(counts.get("b"), Ok(&1));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }

    /// Returns an iterator over the key-value pairs of the map, in arbitrary
    /// order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator that removes and yields all key-value pairs from the
    /// map.
    ///
    /// After calling `drain()`, the map will be empty with its bucket count
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::DefaultHashMap;
    ///
    /// let mut map = DefaultHashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let mut pairs: Vec<_> = map.drain().collect();
    /// pairs.sort();
    /// assert!(map.is_empty());
    /// assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Counts buckets by chain length.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> crate::hash_table::ChainHistogram {
        self.table.chain_histogram()
    }

    /// Returns detailed utilization statistics for debugging.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> crate::hash_table::DebugStats {
        self.table.debug_stats()
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates an empty map with 8 buckets, a 0.75 load factor and the
    /// default hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::DefaultHashMap;
    ///
    /// let map: DefaultHashMap<i32, String> = DefaultHashMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 8);
    /// assert_eq!(map.load_factor(), 0.75);
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates an empty map with `capacity` buckets using the default hasher
    /// builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is zero or too large
    /// for a bucket array on this target.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::DefaultHashMap;
    ///
    /// let map: DefaultHashMap<i32, String> = DefaultHashMap::with_capacity(100).unwrap();
    /// assert_eq!(map.capacity(), 100);
    ///
    /// assert!(DefaultHashMap::<i32, String>::with_capacity(0).is_err());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    /// Creates an empty map from a [`Config`] using the default hasher
    /// builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the config fails
    /// [`Config::validate`].
    pub fn with_config(config: Config) -> Result<Self, Error> {
        Self::with_config_and_hasher(config, S::default())
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A view into a single entry in the map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashMap`].
///
/// [`entry`]: HashMap::entry
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the map.
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value into the map and returns a mutable reference to it.
    ///
    /// The map may grow before the entry is linked.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A view into an occupied entry in the map.
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Inserts a value into the entry and returns the old value.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.entry.get_mut().1, value)
    }

    /// Removes the entry from the map and returns the value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry from the map and returns the key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

/// An iterator over the key-value pairs of a `HashMap`.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a `HashMap`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// An iterator over the values of a `HashMap`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// A draining iterator over the key-value pairs of a `HashMap`.
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Drain<'_, K, V> {}

#[cfg(test)]
mod tests {
    use core::hash::BuildHasher;

    use proptest::prelude::*;
    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use siphasher::sip::SipHasher;

    use super::*;

    #[derive(Clone)]
    struct SipHashBuilder {
        k1: u64,
        k2: u64,
    }

    impl BuildHasher for SipHashBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(self.k1, self.k2)
        }
    }

    impl Default for SipHashBuilder {
        fn default() -> Self {
            let mut rng = OsRng;
            Self {
                k1: rng.try_next_u64().unwrap_or(0),
                k2: rng.try_next_u64().unwrap_or(0),
            }
        }
    }

    /// Sends every key to the same bucket.
    #[derive(Clone, Default)]
    struct ConstantHasher;

    impl core::hash::Hasher for ConstantHasher {
        fn finish(&self) -> u64 {
            0
        }

        fn write(&mut self, _bytes: &[u8]) {}
    }

    impl BuildHasher for ConstantHasher {
        type Hasher = ConstantHasher;

        fn build_hasher(&self) -> Self::Hasher {
            ConstantHasher
        }
    }

    #[test]
    fn test_new_and_with_hasher() {
        let map: HashMap<i32, String, SipHashBuilder> = HashMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.capacity(), 8);
        assert_eq!(map.load_factor(), 0.75);

        let map2 = HashMap::<i32, String, _>::with_hasher(SipHashBuilder::default());
        assert!(map2.is_empty());
        assert_eq!(map2.len(), 0);
    }

    #[test]
    fn test_with_capacity() {
        let map: HashMap<i32, String, SipHashBuilder> = HashMap::with_capacity(100).unwrap();
        assert_eq!(map.capacity(), 100);
        assert!(map.is_empty());

        let map2 =
            HashMap::<i32, String, _>::with_capacity_and_hasher(200, SipHashBuilder::default())
                .unwrap();
        assert_eq!(map2.capacity(), 200);
        assert!(map2.is_empty());
    }

    #[test]
    fn test_invalid_arguments() {
        let err = HashMap::<i32, i32, SipHashBuilder>::with_capacity(0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                argument: "initial_capacity",
                ..
            }
        ));

        for lf in [0.0, -1.0, f64::NAN] {
            let config = Config::default().with_load_factor(lf);
            let err = HashMap::<i32, i32, SipHashBuilder>::with_config(config).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidArgument {
                    argument: "load_factor",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        assert_eq!(map.insert(1, "hello".to_string()), None);
        assert_eq!(map.len(), 1);
        assert!(!map.is_empty());

        assert_eq!(map.get(&1), Ok(&"hello".to_string()));
        assert_eq!(map.get(&2), Err(Error::KeyNotFound));

        assert_eq!(
            map.insert(1, "world".to_string()),
            Some("hello".to_string())
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Ok(&"world".to_string()));
    }

    #[test]
    fn test_concrete_scenario() {
        let mut m: HashMap<&str, i32, SipHashBuilder> = HashMap::new();
        m.insert("a", 1);
        m.insert("b", 2);
        m.insert("a", 3);
        assert_eq!(m.get("a"), Ok(&3));
        assert_eq!(m.len(), 2);

        assert_eq!(m.remove("b"), Ok(2));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("b"), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_get_mut() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "hello".to_string());

        if let Ok(value) = map.get_mut(&1) {
            value.push_str(" world");
        }

        assert_eq!(map.get(&1), Ok(&"hello world".to_string()));
        assert_eq!(map.get_mut(&2), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_contains_key() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        assert!(!map.contains_key(&1));

        map.insert(1, "value".to_string());
        assert!(map.contains_key(&1));
        assert!(!map.contains_key(&2));
    }

    #[test]
    fn test_remove() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "hello".to_string());
        map.insert(2, "world".to_string());

        assert_eq!(map.remove(&1), Ok("hello".to_string()));
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key(&1));
        assert!(map.contains_key(&2));

        assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
        assert_eq!(map.remove(&3), Err(Error::KeyNotFound));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&2), Ok(&"world".to_string()));
    }

    #[test]
    fn test_remove_entry() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "hello".to_string());

        assert_eq!(map.remove_entry(&1), Ok((1, "hello".to_string())));
        assert_eq!(map.len(), 0);
        assert_eq!(map.remove_entry(&1), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_clear() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "hello".to_string());
        map.insert(2, "world".to_string());

        assert_eq!(map.len(), 2);
        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(!map.contains_key(&1));
        assert!(!map.contains_key(&2));
        assert_eq!(map.capacity(), 8);
    }

    #[test]
    fn test_growth_doubles_capacity() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        for i in 0..6 {
            map.insert(i, i * 10);
        }
        assert_eq!(map.capacity(), 8);

        // 7 / 8 > 0.75
        map.insert(6, 60);
        assert_eq!(map.capacity(), 16);
        assert_eq!(map.len(), 7);
        for i in 0..7 {
            assert_eq!(map.get(&i), Ok(&(i * 10)));
        }
    }

    #[test]
    fn test_update_does_not_grow() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        for i in 0..6 {
            map.insert(i, 0);
        }
        for i in 0..6 {
            assert_eq!(map.insert(i, 1), Some(0));
        }
        assert_eq!(map.capacity(), 8);
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn test_get_is_idempotent() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert("k", 5);
        map.insert("j", 6);
        for _ in 0..10 {
            assert_eq!(map.get("k"), Ok(&5));
            assert_eq!(map.get("missing"), Err(Error::KeyNotFound));
        }
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("j"), Ok(&6));
    }

    #[test]
    fn test_entry_api() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        let value = map.entry(1).or_insert("hello".to_string());
        assert_eq!(value, &"hello".to_string());
        assert_eq!(map.len(), 1);

        let value = map.entry(1).or_insert("world".to_string());
        assert_eq!(value, &"hello".to_string());
        assert_eq!(map.len(), 1);

        map.entry(2).or_insert_with(|| "computed".to_string());
        assert_eq!(map.get(&2), Ok(&"computed".to_string()));

        map.entry(1)
            .and_modify(|v| v.push_str(" world"))
            .or_insert("default".to_string());
        assert_eq!(map.get(&1), Ok(&"hello world".to_string()));

        assert_eq!(map.entry(3).key(), &3);
    }

    #[test]
    fn test_entry_or_default() {
        let mut map: HashMap<i32, Vec<i32>, SipHashBuilder> =
            HashMap::with_hasher(SipHashBuilder::default());

        map.entry(1).or_default().push(42);
        assert_eq!(map.get(&1), Ok(&vec![42]));

        map.entry(1).or_default().push(24);
        assert_eq!(map.get(&1), Ok(&vec![42, 24]));
    }

    #[test]
    fn test_occupied_entry() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "hello".to_string());

        match map.entry(1) {
            Entry::Occupied(mut entry) => {
                assert_eq!(entry.key(), &1);
                assert_eq!(entry.get(), &"hello".to_string());

                *entry.get_mut() = "world".to_string();
                assert_eq!(entry.get(), &"world".to_string());

                let old_value = entry.insert("new".to_string());
                assert_eq!(old_value, "world".to_string());
                assert_eq!(entry.get(), &"new".to_string());

                let (key, value) = entry.remove_entry();
                assert_eq!(key, 1);
                assert_eq!(value, "new".to_string());
            }
            Entry::Vacant(_) => panic!("Expected occupied entry"),
        }

        assert!(map.is_empty());
    }

    #[test]
    fn test_vacant_entry() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        match map.entry(1) {
            Entry::Vacant(entry) => {
                assert_eq!(entry.key(), &1);

                let value = entry.insert("hello".to_string());
                assert_eq!(value, &"hello".to_string());
            }
            Entry::Occupied(_) => panic!("Expected vacant entry"),
        }

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Ok(&"hello".to_string()));
    }

    #[test]
    fn test_vacant_entry_insert_grows() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        for i in 0..6 {
            map.entry(i).or_insert(i);
        }
        assert_eq!(map.capacity(), 8);

        *map.entry(6).or_insert(0) += 100;
        assert_eq!(map.capacity(), 16);
        assert_eq!(map.get(&6), Ok(&100));
    }

    #[test]
    fn test_iterators() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());
        map.insert(3, "three".to_string());

        assert_eq!(map.iter().len(), 3);
        assert_eq!(map.keys().len(), 3);
        assert_eq!(map.values().len(), 3);
        let mut keys = map.keys();
        keys.next();
        assert_eq!(keys.size_hint(), (2, Some(2)));

        let pairs: std::collections::HashMap<i32, String> =
            map.iter().map(|(k, v)| (*k, v.clone())).collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.get(&1), Some(&"one".to_string()));
        assert_eq!(pairs.get(&2), Some(&"two".to_string()));
        assert_eq!(pairs.get(&3), Some(&"three".to_string()));

        let keys: std::collections::HashSet<i32> = map.keys().copied().collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&1));
        assert!(keys.contains(&2));
        assert!(keys.contains(&3));

        let values: std::collections::HashSet<String> = map.values().cloned().collect();
        assert_eq!(values.len(), 3);
        assert!(values.contains("one"));
        assert!(values.contains("two"));
        assert!(values.contains("three"));

        assert_eq!((&map).into_iter().count(), 3);
    }

    #[test]
    fn test_drain() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());
        map.insert(3, "three".to_string());

        let mut drain = map.drain();
        assert_eq!(drain.len(), 3);
        let first = drain.next().unwrap();
        assert_eq!(drain.len(), 2);
        let drained: std::collections::HashMap<i32, String> =
            core::iter::once(first).chain(drain).collect();
        assert_eq!(drained.len(), 3);
        assert!(map.is_empty());

        assert_eq!(drained.get(&1), Some(&"one".to_string()));
        assert_eq!(drained.get(&2), Some(&"two".to_string()));
        assert_eq!(drained.get(&3), Some(&"three".to_string()));

        map.insert(4, "four".to_string());
        assert_eq!(map.get(&4), Ok(&"four".to_string()));
    }

    #[test]
    fn test_collision_handling() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        for i in 0..1000 {
            map.insert(i, i * 2);
        }

        assert_eq!(map.len(), 1000);

        for i in 0..1000 {
            assert_eq!(map.get(&i), Ok(&(i * 2)));
        }

        for i in (0..1000).step_by(2) {
            assert_eq!(map.remove(&i), Ok(i * 2));
        }

        assert_eq!(map.len(), 500);

        for i in (1..1000).step_by(2) {
            assert_eq!(map.get(&i), Ok(&(i * 2)));
        }
    }

    #[test]
    fn test_single_chain() {
        let mut map: HashMap<i32, i32, ConstantHasher> = HashMap::new();
        for i in 0..50 {
            map.insert(i, -i);
        }
        assert_eq!(map.chain_histogram().longest_chain(), 50);

        for i in [0, 25, 49] {
            assert_eq!(map.remove(&i), Ok(-i));
        }
        assert_eq!(map.len(), 47);
        for i in 0..50 {
            if [0, 25, 49].contains(&i) {
                assert_eq!(map.get(&i), Err(Error::KeyNotFound));
            } else {
                assert_eq!(map.get(&i), Ok(&-i));
            }
        }
    }

    #[test]
    fn test_string_keys() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        map.insert("hello".to_string(), 1);
        map.insert("world".to_string(), 2);
        map.insert("rust".to_string(), 3);

        assert_eq!(map.get("hello"), Ok(&1));
        assert_eq!(map.get(&"world".to_string()), Ok(&2));
        assert_eq!(map.get("rust"), Ok(&3));
        assert_eq!(map.get("missing"), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_default_trait() {
        let map: HashMap<i32, String, SipHashBuilder> = HashMap::default();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_complex_values() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        let vec1 = vec![1, 2, 3];
        let vec2 = vec![4, 5, 6];

        map.insert("first".to_string(), vec1.clone());
        map.insert("second".to_string(), vec2.clone());

        assert_eq!(map.get("first"), Ok(&vec1));
        assert_eq!(map.get("second"), Ok(&vec2));

        if let Ok(v) = map.get_mut("first") {
            v.push(4);
        }

        assert_eq!(map.get("first"), Ok(&vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_clone_and_eq() {
        let mut original: HashMap<i32, i32, SipHashBuilder> = (0..20).map(|i| (i, i)).collect();
        let cloned = original.clone();
        assert_eq!(original, cloned);

        original.insert(0, 100);
        assert_ne!(original, cloned);
        assert_eq!(cloned.get(&0), Ok(&0));
    }

    #[test]
    fn test_extend_and_debug() {
        let mut map: HashMap<i32, &str, SipHashBuilder> = HashMap::new();
        map.extend([(1, "one")]);
        assert_eq!(format!("{map:?}"), r#"{1: "one"}"#);
    }

    #[test]
    #[cfg(any(feature = "foldhash", feature = "std"))]
    fn test_default_hasher_is_deterministic() {
        let a = DefaultHashBuilder::default().hash_one("key");
        let b = DefaultHashBuilder::default().hash_one("key");
        assert_eq!(a, b);

        let mut map: DefaultHashMap<&str, i32> = DefaultHashMap::new();
        map.insert("key", 1);
        assert_eq!(map.get("key"), Ok(&1));
    }

    #[derive(Debug, Clone)]
    enum Action {
        Insert(u16, u32),
        Get(u16),
        Remove(u16),
        Clear,
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            6 => (0u16..256, any::<u32>()).prop_map(|(k, v)| Action::Insert(k, v)),
            3 => (0u16..256).prop_map(Action::Get),
            3 => (0u16..256).prop_map(Action::Remove),
            1 => Just(Action::Clear),
        ]
    }

    proptest! {
        #[test]
        fn matches_std_hashmap(
            actions in proptest::collection::vec(action_strategy(), 1..500),
            initial_capacity in 1usize..32,
            load_factor in 0.25f64..4.0,
        ) {
            let config = Config::default()
                .with_initial_capacity(initial_capacity)
                .with_load_factor(load_factor);
            let mut ours: HashMap<u16, u32, SipHashBuilder> = HashMap::with_config(config).unwrap();
            let mut model = std::collections::HashMap::<u16, u32>::new();

            for action in actions {
                match action {
                    Action::Insert(k, v) => {
                        let capacity = ours.capacity();
                        let is_new = !model.contains_key(&k);
                        prop_assert_eq!(ours.insert(k, v), model.insert(k, v));
                        if is_new && model.len() as f64 / capacity as f64 > load_factor {
                            prop_assert_eq!(ours.capacity(), capacity * 2);
                        } else {
                            prop_assert_eq!(ours.capacity(), capacity);
                        }
                    }
                    Action::Get(k) => {
                        prop_assert_eq!(ours.get(&k).ok(), model.get(&k));
                    }
                    Action::Remove(k) => {
                        let capacity = ours.capacity();
                        prop_assert_eq!(ours.remove(&k).ok(), model.remove(&k));
                        prop_assert_eq!(ours.capacity(), capacity);
                    }
                    Action::Clear => {
                        let capacity = ours.capacity();
                        ours.clear();
                        model.clear();
                        prop_assert_eq!(ours.capacity(), capacity);
                    }
                }
                prop_assert_eq!(ours.len(), model.len());
            }

            for (k, v) in &model {
                prop_assert_eq!(ours.get(k), Ok(v));
            }
        }
    }
}
