#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Invalid hour '{0}': must be between 0 and 23")]
    InvalidHour(i64),

    #[error(
        "Invalid day '{0}': expected one of Lundi, Mardi, Mercredi, Jeudi, Vendredi, Samedi, Dimanche"
    )]
    InvalidDay(String),

    #[error("Unknown preset '{0}': expected one of day, morning, afternoon, night, 24h")]
    UnknownPreset(String),

    #[error("No task at position {index} (list has {len} task(s))")]
    TaskIndexOutOfRange { index: usize, len: usize },
}
