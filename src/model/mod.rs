//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod order;
pub mod produce;
pub mod vendor;

pub use order::*;
pub use produce::*;
pub use vendor::*;

use chrono::{DateTime, TimeDelta, Utc};

/// Next `updated_at` value for a record last touched at `previous`.
///
/// Always strictly later than `previous`, even when the clock has not ticked
/// since the last mutation.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::nanoseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_timestamp_is_strictly_later() {
        let future = Utc::now() + TimeDelta::seconds(60);
        assert_eq!(next_timestamp(future), future + TimeDelta::nanoseconds(1));

        let past = Utc::now() - TimeDelta::seconds(60);
        assert!(next_timestamp(past) > past);
    }
}
