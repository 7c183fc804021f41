use workout_tracker_lib::{tracker::ListPort, view::ListEntry, workout_log::LogTotals};
use yew::prelude::*;

/// Workouts listed in the sidebar, rendered by the root component below the form.
#[derive(Default)]
pub struct WorkoutList {
    entries: Vec<ListEntry>,
    totals: LogTotals,
}

impl WorkoutList {
    /// Newest entry first, the order they are shown in.
    pub fn newest_first(&self) -> impl Iterator<Item = &ListEntry> {
        self.entries.iter().rev()
    }

    pub fn totals(&self) -> &LogTotals {
        &self.totals
    }
}

impl ListPort for WorkoutList {
    fn insert_entry(&mut self, entry: &ListEntry) {
        self.entries.push(entry.clone());
    }

    fn show_totals(&mut self, totals: &LogTotals) {
        self.totals = *totals;
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutItemProps {
    pub entry: ListEntry,
}

#[function_component]
pub fn WorkoutItem(props: &WorkoutItemProps) -> Html {
    let entry = &props.entry;

    html! {
        <li class={format!("workout workout--{}", entry.kind.as_str())} data-id={entry.id.to_string()}>
            <h2 class="workout__title">{&entry.title}</h2>
            {for entry.details.iter().map(|cell| html! {
                <div class="workout__details">
                    <span class="workout__icon">{cell.icon}</span>
                    <span class="workout__value">{&cell.value}</span>
                    <span class="workout__unit">{cell.unit}</span>
                </div>
            })}
        </li>
    }
}
