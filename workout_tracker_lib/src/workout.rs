use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::{
    location::Location,
    stamp::{RecordStamp, WorkoutId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Running,
    Cycling,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity kind: {0:?}")]
pub struct UnknownActivityKind(pub String);

impl ActivityKind {
    /// Value used by the type selector and in css class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Running => "🏃‍♂️",
            Self::Cycling => "🚴‍♀️",
        }
    }

    /// Name of the form input holding this kind's specific metric.
    pub fn metric_input(&self) -> &'static str {
        match self {
            Self::Running => "cadence",
            Self::Cycling => "elevation",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = UnknownActivityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            _ => Err(UnknownActivityKind(s.to_owned())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind specific part of a workout, with its derived metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Activity {
    Running {
        cadence_spm: u32,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::Running { .. } => ActivityKind::Running,
            Self::Cycling { .. } => ActivityKind::Cycling,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<FixedOffset>,
    location: Location,
    distance_km: f64,
    duration_min: f64,
    description: String,
    activity: Activity,
}

impl Workout {
    /// Distance and duration are expected to be positive, otherwise the pace is meaningless.
    pub fn running(stamp: RecordStamp, location: Location, distance_km: f64, duration_min: f64, cadence_spm: u32) -> Self {
        let activity = Activity::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };

        Self::new(stamp, location, distance_km, duration_min, activity)
    }

    /// Distance and duration are expected to be positive, otherwise the speed is meaningless.
    pub fn cycling(stamp: RecordStamp, location: Location, distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> Self {
        let activity = Activity::Cycling {
            elevation_gain_m,
            speed_km_per_h: distance_km / duration_min * 60.,
        };

        Self::new(stamp, location, distance_km, duration_min, activity)
    }

    fn new(stamp: RecordStamp, location: Location, distance_km: f64, duration_min: f64, activity: Activity) -> Self {
        // %B is the full english month name
        let description = format!("{} on {}", activity.kind().label(), stamp.created_at.format("%B"));

        Self {
            id: stamp.id,
            created_at: stamp.created_at,
            location,
            distance_km,
            duration_min,
            description,
            activity,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn kind(&self) -> ActivityKind {
        self.activity.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const EPSILON: f64 = 1e-9;

    fn stamp(id: &str, month: u32) -> RecordStamp {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        RecordStamp {
            id: WorkoutId::new(id),
            created_at: offset.with_ymd_and_hms(2025, month, 10, 12, 0, 0).unwrap(),
        }
    }

    fn here() -> Location {
        Location::new(56.175188, 10.196123)
    }

    #[test]
    fn running_pace_is_duration_over_distance() {
        for (distance, duration) in [(5., 30.), (5.2, 23.), (0.4, 2.5), (42.195, 181.7)] {
            let workout = Workout::running(stamp("1", 5), here(), distance, duration, 178);
            let Activity::Running { pace_min_per_km, cadence_spm } = workout.activity() else {
                panic!("expected a running workout");
            };
            assert!((pace_min_per_km - duration / distance).abs() < EPSILON);
            assert_eq!(*cadence_spm, 178);
        }
    }

    #[test]
    fn cycling_speed_is_km_per_hour() {
        for (distance, duration) in [(20., 60.), (27., 97.3), (1., 1.)] {
            let workout = Workout::cycling(stamp("1", 5), here(), distance, duration, 523.);
            let Activity::Cycling { speed_km_per_h, elevation_gain_m } = workout.activity() else {
                panic!("expected a cycling workout");
            };
            assert!((speed_km_per_h - distance / duration * 60.).abs() < EPSILON);
            assert_eq!(*elevation_gain_m, 523.);
        }
    }

    #[test]
    fn description_names_kind_and_month() {
        let run = Workout::running(stamp("1", 1), here(), 5., 30., 180);
        let ride = Workout::cycling(stamp("2", 9), here(), 20., 60., 0.);

        assert_eq!(run.description(), "Running on January");
        assert_eq!(ride.description(), "Cycling on September");
    }

    #[test]
    fn description_uses_local_month_not_utc() {
        // 00:30 on the first of June at +02:00 is still May in UTC
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let stamp = RecordStamp {
            id: WorkoutId::new("1"),
            created_at: offset.with_ymd_and_hms(2025, 6, 1, 0, 30, 0).unwrap(),
        };

        let workout = Workout::running(stamp, here(), 5., 30., 180);
        assert_eq!(workout.description(), "Running on June");
    }

    #[test]
    fn zero_distance_gives_non_finite_pace() {
        let workout = Workout::running(stamp("1", 1), here(), 0., 30., 180);
        let Activity::Running { pace_min_per_km, .. } = workout.activity() else {
            panic!("expected a running workout");
        };
        assert!(!pace_min_per_km.is_finite());
    }

    #[test]
    fn parses_selector_values() {
        assert_eq!("running".parse::<ActivityKind>(), Ok(ActivityKind::Running));
        assert_eq!(" Cycling ".parse::<ActivityKind>(), Ok(ActivityKind::Cycling));
        assert!("swimming".parse::<ActivityKind>().is_err());
        assert_eq!(ActivityKind::Cycling.to_string(), "cycling");
        assert_eq!(ActivityKind::Running.metric_input(), "cadence");
    }
}
