use time::OffsetDateTime;

/// Wall-clock instant in the local offset, falling back to UTC when the
/// platform cannot report one. Only UI code calls this; domain functions
/// take `now` as an argument.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
