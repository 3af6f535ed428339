use derive_more::Display;

/// A day of the week, numbered the way the host date numbers them
/// (sunday is the first day of the week).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display)]
pub enum WeekDay {
    #[display("Sun")]
    Sunday = 0,
    #[display("Mon")]
    Monday = 1,
    #[display("Tue")]
    Tuesday = 2,
    #[display("Wed")]
    Wednesday = 3,
    #[display("Thu")]
    Thursday = 4,
    #[display("Fri")]
    Friday = 5,
    #[display("Sat")]
    Saturday = 6,
}

impl WeekDay {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    pub const fn as_number(&self) -> u32 {
        *self as u32
    }

    /// The week day of a day counted from 1970-01-01, which was a thursday.
    #[must_use]
    pub const fn from_days_since_epoch(days: i64) -> Self {
        Self::ALL[(days + 4).rem_euclid(7) as usize]
    }
}
