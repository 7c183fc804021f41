use gloo_console::{error, info};
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{HtmlElement, Node};
use workout_tracker_lib::{config::TrackerConfig, location::Location, tracker::MapPort, view::MarkerPopup};
use yew::prelude::*;

/// Leaflet map living in its own detached container, mounted into the page with `render`.
pub struct LeafletMap {
    map: Map,
    container: HtmlElement,
    on_click: Callback<Location>,
    // Kept alive for as long as leaflet may call it
    click_handler: Option<Closure<dyn Fn(MouseEvent)>>,
}

impl LeafletMap {
    pub fn new(on_click: Callback<Location>) -> Result<Self, JsValue> {
        let container: HtmlElement = document().create_element("div")?.dyn_into()?;
        container.set_class_name("map");

        let map = Map::new_with_element(&container, &MapOptions::default());

        Ok(Self {
            map,
            container,
            on_click,
            click_handler: None,
        })
    }

    pub fn render(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }
}

impl MapPort for LeafletMap {
    type Marker = Marker;

    fn init(&mut self, center: Location, config: &TrackerConfig) {
        // The container was sized after the map was created
        self.map.invalidate_size(false);
        self.map.set_view(&LatLng::new(center.latitude(), center.longitude()), config.zoom);
        add_tile_layer(&self.map, config);

        let on_click = self.on_click.clone();
        let handler = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
            let lat_lng = event.lat_lng();
            on_click.emit(Location::new(lat_lng.lat(), lat_lng.lng()));
        });
        self.map.on("click", handler.as_ref());
        self.click_handler = Some(handler);

        info!(format!("Map centered on {:.5}, {:.5}", center.latitude(), center.longitude()));
    }

    fn place_marker(&mut self, location: Location, marker_popup: &MarkerPopup) -> Marker {
        let marker = Marker::new(&LatLng::new(location.latitude(), location.longitude()));
        marker.add_to(&self.map);

        let popup_opts = PopupOptions::default();
        popup_opts.set_max_width(marker_popup.max_width);
        popup_opts.set_min_width(marker_popup.min_width);
        popup_opts.set_auto_close(marker_popup.auto_close);
        popup_opts.set_close_on_click(marker_popup.close_on_click);
        popup_opts.set_class_name(marker_popup.class_name.clone());

        let popup = Popup::new(&popup_opts, None);
        popup.set_content(&marker_popup.content.as_str().into());

        marker.bind_popup(&popup);
        marker.open_popup();

        marker
    }
}

fn add_tile_layer(map: &Map, config: &TrackerConfig) {
    if config.tile_url.is_empty() {
        error!("No tile url configured, the map will stay blank");
        return;
    }

    let opts = TileLayerOptions::new();
    opts.set_attribution(config.tile_attribution.clone());
    opts.set_update_when_idle(true);
    TileLayer::new_options(&config.tile_url, &opts).add_to(map);
}
