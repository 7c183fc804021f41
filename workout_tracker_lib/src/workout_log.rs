use crate::{stamp::WorkoutId, workout::Workout};

/// All workouts recorded this session, oldest first. Append only.
#[derive(Debug, Default)]
pub struct WorkoutLog {
    workouts: Vec<Workout>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogTotals {
    pub count: usize,
    pub distance_km: f64,
    pub duration_min: f64,
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, workout: Workout) -> &Workout {
        self.workouts.push(workout);
        &self.workouts[self.workouts.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn last(&self) -> Option<&Workout> {
        self.workouts.last()
    }

    pub fn get(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id() == id)
    }

    pub fn totals(&self) -> LogTotals {
        self.workouts.iter().fold(LogTotals::default(), |totals, workout| LogTotals {
            count: totals.count + 1,
            distance_km: totals.distance_km + workout.distance_km(),
            duration_min: totals.duration_min + workout.duration_min(),
        })
    }
}
