//! Version selection helpers.
//!
//! Lifecycle descriptors may carry sparse version lists (entries that failed
//! to parse upstream, or sets that were never declared). The helpers here skip
//! absent entries instead of inventing defaults, so callers can tell "unknown"
//! apart from a real version.

use super::ApiVersion;

/// Return the lowest version, ignoring `None` entries.
///
/// Returns `None` when the input is empty or holds only `None`s; callers must
/// treat that as "unknown" rather than substituting a default. When several
/// entries compare equal, the first one wins.
///
/// # Examples
///
/// ```rust
/// use builder_inspect::version::{ApiVersion, earliest_version};
///
/// let a: ApiVersion = "1.2".parse().unwrap();
/// let b: ApiVersion = "0.9".parse().unwrap();
/// assert_eq!(earliest_version([Some(&a), None, Some(&b)]), Some(&b));
/// assert_eq!(earliest_version(Vec::<Option<&ApiVersion>>::new()), None);
/// ```
pub fn earliest_version<'a, I>(versions: I) -> Option<&'a ApiVersion>
where
    I: IntoIterator<Item = Option<&'a ApiVersion>>,
{
    let mut earliest: Option<&'a ApiVersion> = None;
    for version in versions.into_iter().flatten() {
        match earliest {
            Some(current) if current <= version => {}
            _ => earliest = Some(version),
        }
    }
    earliest
}
