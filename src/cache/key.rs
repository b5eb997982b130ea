//! Cache Key Module
//!
//! Derives fixed-length, filesystem-safe keys from ordered identifier tuples.

use crate::cache::KEY_SEPARATOR;

// == Derive Key ==
/// Derives the cache key for an ordered sequence of parts.
///
/// Parts are joined with `|` and digested with MD5, rendered as 32 lowercase
/// hex characters. The output matches keys already written by earlier
/// deployments of the store, so the digest must not change.
///
/// # Arguments
/// * `parts` - Ordered identifying parts; an empty sequence is legal
pub fn derive_key<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            joined.push(KEY_SEPARATOR);
        }
        joined.push_str(part.as_ref());
    }
    format!("{:x}", md5::compute(joined.as_bytes()))
}
