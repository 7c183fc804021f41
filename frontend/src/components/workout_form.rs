use gloo_console::error;
use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::{
    form::{FormFields, MetricRows, ScheduledReset},
    tracker::FormPort,
};
use yew::prelude::*;

const HIDDEN_CLASS: &str = "hidden";
const HIDDEN_ROW_CLASS: &str = "form__row--hidden";

#[derive(Clone, Default, PartialEq)]
pub struct FormRefs {
    pub form: NodeRef,
    pub kind: NodeRef,
    pub distance: NodeRef,
    pub duration: NodeRef,
    pub cadence: NodeRef,
    pub elevation: NodeRef,
}

impl FormRefs {
    fn input(node: &NodeRef) -> Option<HtmlInputElement> {
        node.cast::<HtmlInputElement>()
    }

    fn numeric_inputs(&self) -> [&NodeRef; 4] {
        [&self.distance, &self.duration, &self.cadence, &self.elevation]
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutFormProps {
    pub refs: FormRefs,
    pub on_submit: Callback<()>,
    pub on_kind_change: Callback<String>,
}

#[function_component]
pub fn WorkoutForm(props: &WorkoutFormProps) -> Html {
    let on_submit = props.on_submit.clone();
    let onsubmit = Callback::from(move |e: SubmitEvent| {
        // No page reload
        e.prevent_default();
        on_submit.emit(());
    });

    let on_kind_change = props.on_kind_change.clone();
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_kind_change.emit(select.value());
    });

    let refs = &props.refs;

    html! {
        <form class="form hidden" ref={refs.form.clone()} {onsubmit}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" ref={refs.kind.clone()} {onchange}>
                    <option value="running">{"Running"}</option>
                    <option value="cycling">{"Cycling"}</option>
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input class="form__input form__input--distance" placeholder="km" ref={refs.distance.clone()} />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input class="form__input form__input--duration" placeholder="min" ref={refs.duration.clone()} />
            </div>
            <div class="form__row">
                <label class="form__label">{"Cadence"}</label>
                <input class="form__input form__input--cadence" placeholder="step/min" ref={refs.cadence.clone()} />
            </div>
            <div class="form__row form__row--hidden">
                <label class="form__label">{"Elev Gain"}</label>
                <input class="form__input form__input--elevation" placeholder="meters" ref={refs.elevation.clone()} />
            </div>
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}

/// The rendered form, driven directly through the dom.
pub struct DomForm {
    refs: FormRefs,
    reset_delay_ms: u32,
    pending_reset: ScheduledReset<Timeout>,
}

impl DomForm {
    pub fn new(refs: FormRefs, reset_delay_ms: u32) -> Self {
        Self {
            refs,
            reset_delay_ms,
            pending_reset: ScheduledReset::new(),
        }
    }

    fn form(&self) -> Option<HtmlElement> {
        let form = self.refs.form.cast::<HtmlElement>();
        if form.is_none() {
            error!("Workout form is not mounted");
        }
        form
    }

    fn set_display(form: &HtmlElement, display: &str) {
        if let Err(err) = form.style().set_property("display", display) {
            error!(err);
        }
    }

    fn set_row_hidden(input: &NodeRef, hidden: bool) {
        let Some(row) = input.cast::<Element>().and_then(|input| input.closest(".form__row").ok().flatten()) else {
            error!("Form row not found");
            return;
        };

        if let Err(err) = row.class_list().toggle_with_force(HIDDEN_ROW_CLASS, hidden) {
            error!(err);
        }
    }
}

impl FormPort for DomForm {
    fn read_fields(&self) -> FormFields {
        let value = |node: &NodeRef| FormRefs::input(node).map(|input| input.value()).unwrap_or_default();

        FormFields {
            kind: self.refs.kind.cast::<HtmlSelectElement>().map(|select| select.value()).unwrap_or_default(),
            distance: value(&self.refs.distance),
            duration: value(&self.refs.duration),
            cadence: value(&self.refs.cadence),
            elevation: value(&self.refs.elevation),
        }
    }

    fn show(&mut self) {
        let Some(form) = self.form() else {
            return;
        };

        // Reopened before the layout was restored, restore it now instead
        if self.pending_reset.cancel() {
            Self::set_display(&form, "grid");
        }

        if let Err(err) = form.class_list().remove_1(HIDDEN_CLASS) {
            error!(err);
        }

        if let Some(distance) = FormRefs::input(&self.refs.distance) {
            if let Err(err) = distance.focus() {
                error!(err);
            }
        }
    }

    fn clear_fields(&mut self) {
        for node in self.refs.numeric_inputs() {
            if let Some(input) = FormRefs::input(node) {
                input.set_value("");
            }
        }
    }

    fn hide(&mut self) {
        let Some(form) = self.form() else {
            return;
        };

        // Skip the slide-out transition, then give the form its layout back once it is out of view
        Self::set_display(&form, "none");
        if let Err(err) = form.class_list().add_1(HIDDEN_CLASS) {
            error!(err);
        }

        self.pending_reset.schedule(Timeout::new(self.reset_delay_ms, move || {
            Self::set_display(&form, "grid");
        }));
    }

    fn set_metric_rows(&mut self, rows: MetricRows) {
        Self::set_row_hidden(&self.refs.cadence, rows.cadence_hidden);
        Self::set_row_hidden(&self.refs.elevation, rows.elevation_hidden);
    }
}
