use chrono::Utc;

/// Source of order ids. Uniqueness is the source's responsibility.
pub trait OrderIdSource: Send + Sync {
    fn next_id(&mut self) -> String;
}

/// Epoch-millisecond ids, bumped past the last issued value so two checkouts
/// within the same millisecond still get distinct, increasing ids.
#[derive(Debug, Default)]
pub struct TimestampOrderIds {
    last: i64,
}

impl TimestampOrderIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderIdSource for TimestampOrderIds {
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}
