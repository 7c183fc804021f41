use std::fmt;

use crate::{
    location::Location,
    stamp::Stamper,
    workout::{ActivityKind, UnknownActivityKind, Workout},
};

/// Alert text shown for any rejected submission.
pub const INVALID_INPUT_MESSAGE: &str = "Please check your input: all values must be valid positive numbers.";

/// Raw values of the workout form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Distance => "distance",
            Field::Duration => "duration",
            Field::Cadence => "cadence",
            Field::Elevation => "elevation",
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    UnknownKind(#[from] UnknownActivityKind),
    #[error("{field} is not a number: {raw:?}")]
    NotANumber { field: Field, raw: String },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: Field, value: f64 },
    #[error("cadence must be a whole number of steps per minute, got {0}")]
    FractionalCadence(f64),
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

/// Which of the two kind specific rows are hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricRows {
    pub cadence_hidden: bool,
    pub elevation_hidden: bool,
}

impl MetricRows {
    pub fn for_kind(kind: ActivityKind) -> Self {
        Self {
            cadence_hidden: kind != ActivityKind::Running,
            elevation_hidden: kind != ActivityKind::Cycling,
        }
    }
}

/// Pending deferred work on the form, such as restoring its layout after it was hidden.
/// The handle cancels the work when dropped, so replacing or cancelling it never lets two
/// resets race.
#[derive(Debug)]
pub struct ScheduledReset<H> {
    pending: Option<H>,
}

impl<H> Default for ScheduledReset<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> ScheduledReset<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces (and so cancels) whatever was pending.
    pub fn schedule(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    /// Returns whether something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Turns a field value into a number much like a browser's unary plus: blank input is zero,
/// anything unparsable is NaN. Only decimal notation is read; the `0x`, `0b` and `0o`
/// literals unary plus also takes come out as NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn finite(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let value = coerce_number(raw);
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            raw: raw.to_owned(),
        });
    }

    Ok(value)
}

fn positive(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let value = finite(field, raw)?;
    if value <= 0. {
        return Err(ValidationError::NotPositive { field, value });
    }

    Ok(value)
}

fn whole_cadence(value: f64) -> Result<u32, ValidationError> {
    if value.fract() != 0. || value > u32::MAX as f64 {
        return Err(ValidationError::FractionalCadence(value));
    }

    Ok(value as u32)
}

/// Validates the form and builds the workout it describes.
///
/// Distance and duration must be positive for both kinds. Running also needs a
/// positive whole cadence. Cycling elevation only has to be a number: flat rides
/// and net descents are real workouts.
pub fn submit<S: Stamper + ?Sized>(fields: &FormFields, location: Location, stamper: &mut S) -> Result<Workout, ValidationError> {
    let kind: ActivityKind = fields.kind.parse()?;
    let distance = positive(Field::Distance, &fields.distance)?;
    let duration = positive(Field::Duration, &fields.duration)?;

    let workout = match kind {
        ActivityKind::Running => {
            let cadence = whole_cadence(positive(Field::Cadence, &fields.cadence)?)?;
            Workout::running(stamper.stamp(), location, distance, duration, cadence)
        }
        ActivityKind::Cycling => {
            let elevation = finite(Field::Elevation, &fields.elevation)?;
            Workout::cycling(stamper.stamp(), location, distance, duration, elevation)
        }
    };

    Ok(workout)
}
