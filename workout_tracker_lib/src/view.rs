//! What the map and the workout list show for a workout, independent of how it is drawn.

use crate::{
    config::TrackerConfig,
    stamp::WorkoutId,
    workout::{Activity, ActivityKind, Workout},
    workout_log::LogTotals,
};

/// Content and options of the popup bound to a workout's marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub content: String,
    pub max_width: f64,
    pub min_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

impl MarkerPopup {
    pub fn for_workout(workout: &Workout, config: &TrackerConfig) -> Self {
        let kind = workout.kind();
        Self {
            content: format!("{} {}", kind.icon(), workout.description()),
            max_width: config.popup_max_width,
            min_width: config.popup_min_width,
            // Popups stay open so every workout on the map stays labelled
            auto_close: false,
            close_on_click: false,
            class_name: format!("{}-popup", kind.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailCell {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl DetailCell {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// One item of the workout list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: WorkoutId,
    pub kind: ActivityKind,
    pub title: String,
    pub details: [DetailCell; 4],
}

impl ListEntry {
    pub fn for_workout(workout: &Workout) -> Self {
        let kind = workout.kind();
        let (metric, companion) = match workout.activity() {
            Activity::Running { cadence_spm, pace_min_per_km } => (
                DetailCell::new("⚡️", one_decimal(*pace_min_per_km), "min/km"),
                DetailCell::new("🦶🏼", cadence_spm.to_string(), "spm"),
            ),
            Activity::Cycling { elevation_gain_m, speed_km_per_h } => (
                DetailCell::new("⚡️", one_decimal(*speed_km_per_h), "km/h"),
                DetailCell::new("⛰", plain_number(*elevation_gain_m), "m"),
            ),
        };

        Self {
            id: workout.id().clone(),
            kind,
            title: workout.description().to_owned(),
            details: [
                DetailCell::new(kind.icon(), plain_number(workout.distance_km()), "km"),
                DetailCell::new("⏱", plain_number(workout.duration_min()), "min"),
                metric,
                companion,
            ],
        }
    }
}

/// Sidebar line summarising the whole session.
pub fn totals_line(totals: &LogTotals) -> String {
    match totals.count {
        0 => "No workouts yet. Click the map to add one.".into(),
        1 => format!("1 workout, {} km in {} min", one_decimal(totals.distance_km), plain_number(totals.duration_min)),
        n => format!("{} workouts, {} km in {} min", n, one_decimal(totals.distance_km), plain_number(totals.duration_min)),
    }
}

/// Prints a number without a trailing `.0` when it is whole. Unlike the browser this never
/// switches to exponent notation, so 1e21 prints all of its digits.
fn plain_number(value: f64) -> String {
    format!("{}", value)
}

/// One decimal, with ties rounded away from zero as the browser's `toFixed(1)` does for exact halves.
fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.).round() / 10.)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{location::Location, stamp::RecordStamp};
    use chrono::{FixedOffset, TimeZone};

    fn stamp(id: &str) -> RecordStamp {
        RecordStamp {
            id: WorkoutId::new(id),
            created_at: FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2025, 4, 20, 7, 15, 0).unwrap(),
        }
    }

    fn run() -> Workout {
        Workout::running(stamp("1745133300"), Location::new(1., 2.), 5.2, 24., 178)
    }

    fn ride() -> Workout {
        Workout::cycling(stamp("1745133301"), Location::new(1., 2.), 27., 95., 523.)
    }

    #[test]
    fn popup_shows_icon_and_description() {
        let popup = MarkerPopup::for_workout(&run(), &TrackerConfig::default());

        assert_eq!(popup.content, "🏃‍♂️ Running on April");
        assert_eq!(popup.class_name, "running-popup");
        assert_eq!(popup.max_width, 250.);
        assert_eq!(popup.min_width, 100.);
        assert!(!popup.auto_close);
        assert!(!popup.close_on_click);

        let popup = MarkerPopup::for_workout(&ride(), &TrackerConfig::default());
        assert_eq!(popup.content, "🚴‍♀️ Cycling on April");
        assert_eq!(popup.class_name, "cycling-popup");
    }

    #[test]
    fn running_entry_rounds_pace() {
        let entry = ListEntry::for_workout(&run());
        let values: Vec<(&str, &str)> = entry.details.iter().map(|c| (c.value.as_str(), c.unit)).collect();

        // 24 / 5.2 = 4.615...
        assert_eq!(values, [("5.2", "km"), ("24", "min"), ("4.6", "min/km"), ("178", "spm")]);
        assert_eq!(entry.title, "Running on April");
    }

    #[test]
    fn cycling_entry_rounds_speed() {
        let entry = ListEntry::for_workout(&ride());
        let values: Vec<(&str, &str)> = entry.details.iter().map(|c| (c.value.as_str(), c.unit)).collect();

        // 27 / 95 * 60 = 17.05...
        assert_eq!(values, [("27", "km"), ("95", "min"), ("17.1", "km/h"), ("523", "m")]);
        assert_eq!(entry.details[0].icon, "🚴‍♀️");
    }

    #[test]
    fn derived_metrics_round_ties_up() {
        // 25 / 4 = 6.25 exactly
        let run = Workout::running(stamp("1"), Location::new(1., 2.), 4., 25., 170);
        assert_eq!(ListEntry::for_workout(&run).details[2].value, "6.3");

        // 3.75 / 60 * 60 = 3.75 exactly
        let ride = Workout::cycling(stamp("2"), Location::new(1., 2.), 3.75, 60., 0.);
        assert_eq!(ListEntry::for_workout(&ride).details[2].value, "3.8");
    }

    #[test]
    fn one_decimal_keeps_trailing_zero() {
        assert_eq!(one_decimal(6.), "6.0");
        assert_eq!(one_decimal(0.05), "0.1");
        assert_eq!(one_decimal(17.0526), "17.1");
    }

    #[test]
    fn plain_number_never_uses_exponents() {
        assert_eq!(plain_number(5.), "5");
        assert_eq!(plain_number(5.2), "5.2");
        assert_eq!(plain_number(-150.), "-150");
        assert_eq!(plain_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn summarises_totals() {
        assert_eq!(totals_line(&LogTotals::default()), "No workouts yet. Click the map to add one.");
        assert_eq!(
            totals_line(&LogTotals { count: 1, distance_km: 5., duration_min: 30. }),
            "1 workout, 5.0 km in 30 min"
        );
        assert_eq!(
            totals_line(&LogTotals { count: 2, distance_km: 32.2, duration_min: 119. }),
            "2 workouts, 32.2 km in 119 min"
        );
    }
}
