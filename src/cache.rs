//! Parsed mask caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::ast::Mask;
use crate::error::ParseError;

/// Global cache for parsed masks.
static CACHE: Mutex<Option<LruCache<String, Mask>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Get or parse a mask, using the cache.
pub fn get_or_parse(mask: &str) -> Result<Mask, ParseError> {
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(parsed) = cache.get(mask) {
        return Ok(parsed.clone());
    }

    let parsed = Mask::parse(mask)?;
    tracing::debug!("parsed mask {:?} into {} part(s)", mask, parsed.parts().len());
    cache.put(mask.to_string(), parsed.clone());
    Ok(parsed)
}
