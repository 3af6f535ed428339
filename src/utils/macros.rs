/// Creates an [`ImmutableDate`](crate::ImmutableDate) in local time from
/// literals, rejecting impossible calendar dates at compile time.
///
/// ```
/// use immutable_date::date;
///
/// let date = date!(2023:8:4);
/// assert_eq!(date.month(), Some(8));
///
/// let date = date!(2023:8:4, 13:30:00);
/// assert_eq!(date.hours(), Some(13));
/// ```
///
/// ```compile_fail
/// use immutable_date::date;
///
/// let date = date!(2023:2:29);
/// ```
#[macro_export]
macro_rules! date {
    ( $year:literal : $month:literal : $day:literal ) => {
        $crate::date!($year:$month:$day, 0:0:0)
    };
    ( $year:literal : $month:literal : $day:literal, $hours:literal : $mins:literal : $secs:literal ) => {{
        $crate::static_assertions::const_assert!($month >= 1 && $month <= 12);
        $crate::static_assertions::const_assert!(
            $day >= 1
                && $day
                    <= $crate::time::Year::new($year)
                        .number_of_days_in_month($crate::time::Month::from_index($month - 1))
        );
        $crate::static_assertions::const_assert!($hours < 24);
        $crate::static_assertions::const_assert!($mins < 60);
        $crate::static_assertions::const_assert!($secs < 60);

        $crate::ImmutableDate::from_components($year, $month, $day, $hours, $mins, $secs, 0)
    }};
}
