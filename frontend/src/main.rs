use crate::components::{
    map_component::LeafletMap,
    workout_form::{DomForm, FormRefs, WorkoutForm},
    workout_list::{WorkoutItem, WorkoutList},
};
use gloo_console::{error, info};
use workout_tracker_lib::{
    location::Location,
    stamp::SystemStamper,
    tracker::Tracker,
    view::totals_line,
    workout::ActivityKind,
};
use yew::prelude::*;

mod components;
mod util;

enum MainMsg {
    Located(Location),
    LocationFailed,
    MapClicked(Location),
    Submit,
    KindChanged(String),
}

type WorkoutTracker = Tracker<LeafletMap, DomForm, WorkoutList, SystemStamper>;

struct Model {
    tracker: Option<WorkoutTracker>,
    form_refs: FormRefs,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let config = util::load_config();
        let form_refs = FormRefs::default();

        let tracker = match LeafletMap::new(link.callback(MainMsg::MapClicked)) {
            Ok(map) => {
                let form = DomForm::new(form_refs.clone(), config.form_reset_delay_ms);
                Some(Tracker::new(config, map, form, WorkoutList::default(), SystemStamper::default()))
            }
            Err(err) => {
                error!(err);
                None
            }
        };

        if tracker.is_some() {
            info!("Requesting position");
            util::request_position(link.callback(MainMsg::Located), link.callback(|()| MainMsg::LocationFailed));
        }

        Self { tracker, form_refs }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(tracker) = &mut self.tracker else {
            return false;
        };

        // The form and map are driven in place, only a new workout needs a render
        match msg {
            MainMsg::Located(location) => {
                tracker.located(location);
                false
            }
            MainMsg::LocationFailed => {
                let err = tracker.location_unavailable();
                error!(err.to_string());
                util::alert(&err.to_string());
                false
            }
            MainMsg::MapClicked(location) => {
                tracker.map_clicked(location);
                false
            }
            MainMsg::Submit => match tracker.submit() {
                Ok(id) => {
                    info!(format!("Recorded workout {} ({} this session)", id, tracker.log().len()));
                    true
                }
                Err(err) => {
                    error!(format!("Rejected workout: {}", err));
                    if let Some(message) = err.user_message() {
                        util::alert(message);
                    }
                    false
                }
            },
            MainMsg::KindChanged(value) => {
                match value.parse::<ActivityKind>() {
                    Ok(kind) => tracker.kind_changed(kind),
                    Err(err) => error!(err.to_string()),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_submit = link.callback(|()| MainMsg::Submit);
        let on_kind_change = link.callback(MainMsg::KindChanged);

        html! {
            <>
                <div class="sidebar">
                    <ul class="workouts">
                        <WorkoutForm refs={self.form_refs.clone()} {on_submit} {on_kind_change} />
                        if let Some(tracker) = &self.tracker {
                            {for tracker.list().newest_first().map(|entry| html! {
                                <WorkoutItem key={entry.id.to_string()} entry={entry.clone()} />
                            })}
                        }
                    </ul>
                    if let Some(tracker) = &self.tracker {
                        <p class="totals">{totals_line(tracker.list().totals())}</p>
                    }
                </div>
                <div id="map">
                    if let Some(tracker) = &self.tracker {
                        {tracker.map().render()}
                    } else {
                        <p class="map-error">{"The map could not be created."}</p>
                    }
                </div>
            </>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
