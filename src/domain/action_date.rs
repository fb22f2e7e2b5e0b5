//! Timezone-local action timestamp computation.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Returns the current instant expressed in the named timezone.
///
/// An absent name, or a name unknown to the bundled tz database, yields
/// `None` rather than failing the request.
pub fn action_date(timezone: Option<&str>) -> Option<DateTime<Tz>> {
    let tz: Tz = timezone?.parse().ok()?;
    Some(Utc::now().with_timezone(&tz))
}
