//! Memoization of rendered marker URIs.
//!
//! A live map redraws every vehicle marker on each position update. Most
//! redraws repeat a recent (color, heading) pair, so [`MarkerCache`] keeps the
//! encoded URI for recently used pairs. GPS headings are fractional and rarely
//! repeat exactly over a long session, so the cache is bounded and evicts the
//! least recently used entry once full.

use std::collections::HashMap;

use crate::color::MarkerColor;
use crate::heading::Heading;
use crate::marker::MarkerIcon;
use crate::template::MarkerTemplate;

/// Entry bound used by [`MarkerCache::new`].
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

// ============================================================================
// CacheKey
// ============================================================================

/// Key for cached marker URIs.
///
/// Uses the heading's bit pattern so that `0.0` and `-0.0`, or two NaNs with
/// different payloads, are distinct keys. Both still render identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    color: MarkerColor,
    heading_bits: u64,
    template: MarkerTemplate,
}

impl CacheKey {
    /// Key for a marker drawn with the built-in shuttle template.
    pub fn new(color: MarkerColor, heading: Heading) -> Self {
        Self::with_template(color, heading, MarkerTemplate::shuttle())
    }

    pub fn with_template(color: MarkerColor, heading: Heading, template: MarkerTemplate) -> Self {
        Self {
            color,
            heading_bits: heading.to_bits(),
            template,
        }
    }

    pub fn from_icon(icon: &MarkerIcon) -> Self {
        Self::with_template(icon.color.clone(), icon.heading, *icon.template())
    }
}

// ============================================================================
// MarkerCache
// ============================================================================

/// A bounded cache of SVG data URIs keyed by color, heading and template.
///
/// # Example
///
/// ```
/// use shuttle_marker::{render_marker_icon, MarkerCache};
///
/// let mut cache = MarkerCache::new();
/// let uri = cache.get_or_render("#FF0000", 90.0).to_string();
/// assert_eq!(uri, render_marker_icon("#FF0000", 90.0));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug)]
pub struct MarkerCache {
    /// URI and the tick of its last use.
    entries: HashMap<CacheKey, (String, u64)>,
    capacity: usize,
    tick: u64,
    hits: u64,
    misses: u64,
}

impl Default for MarkerCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl MarkerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache holding at most `capacity` URIs (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            tick: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the URI for the marker, rendering it on first use.
    pub fn get_or_render(
        &mut self,
        color: impl Into<MarkerColor>,
        heading: impl Into<Heading>,
    ) -> &str {
        let icon = MarkerIcon::new(color, heading);
        self.get_or_render_icon(&icon)
    }

    /// Returns the URI for an existing [`MarkerIcon`], rendering it on first use.
    pub fn get_or_render_icon(&mut self, icon: &MarkerIcon) -> &str {
        let key = CacheKey::from_icon(icon);
        self.tick += 1;

        if self.entries.contains_key(&key) {
            self.hits += 1;
            log::trace!("marker cache hit for {} @ {}", icon.color, icon.heading);
        } else {
            self.misses += 1;
            log::debug!("marker cache miss for {} @ {}", icon.color, icon.heading);
            if self.entries.len() >= self.capacity {
                self.evict_least_recent();
            }
        }

        let tick = self.tick;
        let entry = self
            .entries
            .entry(key)
            .or_insert_with(|| (icon.data_uri(), tick));
        entry.1 = tick;
        entry.0.as_str()
    }

    /// Returns the cached URI for a shuttle marker without rendering.
    ///
    /// Does not count as a use for eviction.
    pub fn get(&self, color: &MarkerColor, heading: Heading) -> Option<&str> {
        self.entries
            .get(&CacheKey::new(color.clone(), heading))
            .map(|(uri, _)| uri.as_str())
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, (_, used))| *used)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            log::trace!("marker cache evicting {} @ {:#x}", key.color, key.heading_bits);
            self.entries.remove(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops all cached URIs. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::render_marker_icon;

    #[test]
    fn cached_uri_matches_direct_render() {
        let mut cache = MarkerCache::new();
        let uri = cache.get_or_render("#00FF00", 12.5).to_string();
        assert_eq!(uri, render_marker_icon("#00FF00", 12.5));
    }

    #[test]
    fn repeated_render_hits_cache() {
        let mut cache = MarkerCache::new();
        let first = cache.get_or_render("red", 45.0).to_string();
        let second = cache.get_or_render("red", 45.0).to_string();

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn distinct_inputs_are_distinct_entries() {
        let mut cache = MarkerCache::new();
        cache.get_or_render("red", 0.0);
        cache.get_or_render("red", 360.0);
        cache.get_or_render("blue", 0.0);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.hits(), 0);
    }

    #[test]
    fn templates_are_part_of_the_key() {
        let custom = MarkerTemplate::custom(r#"<svg fill="C" r="H"/>"#, "C", "H");
        let stock = MarkerIcon::new("red", 10.0);
        let other = MarkerIcon::new("red", 10.0).with_template(custom);

        let mut cache = MarkerCache::new();
        let stock_uri = cache.get_or_render_icon(&stock).to_string();
        let other_uri = cache.get_or_render_icon(&other).to_string();

        assert_eq!(stock_uri, stock.data_uri());
        assert_eq!(other_uri, other.data_uri());
        assert_ne!(stock_uri, other_uri);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn fractional_headings_stay_within_capacity() {
        let mut cache = MarkerCache::with_capacity(100);
        for i in 0..10_000 {
            cache.get_or_render("red", i as f64 * 0.01);
        }
        assert_eq!(cache.len(), 100);
        assert_eq!(cache.misses(), 10_000);
    }

    #[test]
    fn default_cache_is_bounded() {
        let mut cache = MarkerCache::new();
        for i in 0..(DEFAULT_CACHE_CAPACITY * 2) {
            cache.get_or_render("red", i as f64 + 0.5);
        }
        assert_eq!(cache.len(), DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = MarkerCache::with_capacity(2);
        let red = MarkerColor::new("red");

        cache.get_or_render(red.clone(), 1.0);
        cache.get_or_render(red.clone(), 2.0);
        // Touch 1.0 so 2.0 becomes the oldest.
        cache.get_or_render(red.clone(), 1.0);
        cache.get_or_render(red.clone(), 3.0);

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&red, Heading::new(1.0)).is_some());
        assert!(cache.get(&red, Heading::new(2.0)).is_none());
        assert!(cache.get(&red, Heading::new(3.0)).is_some());
    }

    #[test]
    fn zero_capacity_holds_one_entry() {
        let mut cache = MarkerCache::with_capacity(0);
        assert_eq!(cache.capacity(), 1);
        cache.get_or_render("red", 1.0);
        cache.get_or_render("red", 2.0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_does_not_render() {
        let mut cache = MarkerCache::new();
        let color = MarkerColor::new("red");
        assert!(cache.get(&color, Heading::new(10.0)).is_none());

        cache.get_or_render(color.clone(), 10.0);
        assert_eq!(
            cache.get(&color, Heading::new(10.0)),
            Some(render_marker_icon("red", 10.0).as_str())
        );
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = MarkerCache::new();
        cache.get_or_render("red", 1.0);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 1);
    }
}
