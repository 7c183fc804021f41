use crate::{
    config::TrackerConfig,
    form::{self, FormFields, MetricRows, ValidationError},
    location::Location,
    stamp::{Stamper, WorkoutId},
    view::{ListEntry, MarkerPopup},
    workout::ActivityKind,
    workout_log::{LogTotals, WorkoutLog},
};

/// The interactive map.
pub trait MapPort {
    type Marker;

    /// Centers the map and adds its tile layer. Clicks are only reported after this.
    fn init(&mut self, center: Location, config: &TrackerConfig);

    /// Places a marker with an already opened popup.
    fn place_marker(&mut self, location: Location, popup: &MarkerPopup) -> Self::Marker;
}

/// The workout form in the sidebar.
pub trait FormPort {
    fn read_fields(&self) -> FormFields;
    fn show(&mut self);
    /// Empties the four inputs, leaving the type selector as is.
    fn clear_fields(&mut self);
    fn hide(&mut self);
    fn set_metric_rows(&mut self, rows: MetricRows);
}

/// The workout list in the sidebar.
pub trait ListPort {
    fn insert_entry(&mut self, entry: &ListEntry);
    fn show_totals(&mut self, totals: &LogTotals);
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("no location selected on the map")]
    NoLocation,
}

impl SubmitError {
    /// Message to alert the user with, if any.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            SubmitError::Invalid(err) => Some(err.user_message()),
            SubmitError::NoLocation => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unable to get your location, please check your permissions and try again.")]
pub struct LocationError;

/// Lifecycle of the map. `Failed` is final for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Hidden,
    Editing,
}

/// Owns the session: the map, the form, the list and every workout recorded so far.
pub struct Tracker<M: MapPort, F: FormPort, L: ListPort, S: Stamper> {
    config: TrackerConfig,
    map: M,
    map_state: MapState,
    form: F,
    list: L,
    stamper: S,
    log: WorkoutLog,
    markers: Vec<M::Marker>,
    last_click: Option<Location>,
    form_state: FormState,
}

impl<M: MapPort, F: FormPort, L: ListPort, S: Stamper> Tracker<M, F, L, S> {
    pub fn new(config: TrackerConfig, map: M, form: F, list: L, stamper: S) -> Self {
        Self {
            config,
            map,
            map_state: MapState::Pending,
            form,
            list,
            stamper,
            log: WorkoutLog::new(),
            markers: Vec::new(),
            last_click: None,
            form_state: FormState::Hidden,
        }
    }

    /// The user's position is known: bring up the map around it.
    /// Ignored once the map is up, or once locating has failed.
    pub fn located(&mut self, location: Location) {
        if self.map_state != MapState::Pending {
            return;
        }

        self.map.init(location, &self.config);
        self.map_state = MapState::Ready;
        self.list.show_totals(&self.log.totals());
    }

    /// The position could not be determined. The map stays blank for the rest of the session.
    pub fn location_unavailable(&mut self) -> LocationError {
        if self.map_state == MapState::Pending {
            self.map_state = MapState::Failed;
        }
        LocationError
    }

    pub fn map_clicked(&mut self, location: Location) {
        if self.map_state != MapState::Ready {
            return;
        }

        self.last_click = Some(location);
        self.form.show();
        self.form_state = FormState::Editing;
    }

    pub fn kind_changed(&mut self, kind: ActivityKind) {
        self.form.set_metric_rows(MetricRows::for_kind(kind));
    }

    /// Records the workout described by the form at the last clicked location.
    /// A rejected submission leaves the form open and the log untouched.
    pub fn submit(&mut self) -> Result<WorkoutId, SubmitError> {
        let Some(location) = self.last_click else {
            return Err(SubmitError::NoLocation);
        };

        let workout = form::submit(&self.form.read_fields(), location, &mut self.stamper)?;

        let workout = self.log.push(workout);
        let marker = self.map.place_marker(workout.location(), &MarkerPopup::for_workout(workout, &self.config));
        self.markers.push(marker);
        self.list.insert_entry(&ListEntry::for_workout(workout));
        let id = workout.id().clone();
        self.list.show_totals(&self.log.totals());

        self.form.clear_fields();
        self.form.hide();
        self.form_state = FormState::Hidden;
        self.last_click = None;

        Ok(id)
    }

    pub fn log(&self) -> &WorkoutLog {
        &self.log
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn markers(&self) -> &[M::Marker] {
        &self.markers
    }

    pub fn form_state(&self) -> FormState {
        self.form_state
    }

    pub fn map_state(&self) -> MapState {
        self.map_state
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
