use std::sync::{Mutex, OnceLock};

use anyhow::Result;

use crate::api::bridge::{
    CommandGeocoder, CommandLocationSource, CommandMap, GeocodeRequest, LocationCommand,
    MapCommand, SharedQueue,
};
use crate::controller::{DisplayState, LocationDisplayController, STARTUP_REGION};
use crate::geocoder::{GeocodeError, Placemark};
use crate::location::LocationFix;
use crate::logs;

type Controller = LocationDisplayController<CommandLocationSource, CommandMap, CommandGeocoder>;

struct MainState {
    controller: Mutex<Controller>,
    location_commands: SharedQueue<LocationCommand>,
    map_commands: SharedQueue<MapCommand>,
    geocode_requests: SharedQueue<GeocodeRequest>,
}

static MAIN_STATE: OnceLock<MainState> = OnceLock::new();

pub fn init(cache_dir: String) {
    let mut already_initialized = true;
    MAIN_STATE.get_or_init(|| {
        already_initialized = false;

        if let Err(err) = logs::init(&cache_dir) {
            eprintln!("failed to initialize logging: {err}");
        }

        let location_commands = SharedQueue::new();
        let map_commands = SharedQueue::new();
        let geocode_requests = SharedQueue::new();

        let controller = LocationDisplayController::new(
            CommandLocationSource::new(location_commands.clone()),
            CommandMap::new(map_commands.clone(), STARTUP_REGION),
            CommandGeocoder::new(geocode_requests.clone()),
        );
        info!("initialized");

        MainState {
            controller: Mutex::new(controller),
            location_commands,
            map_commands,
            geocode_requests,
        }
    });
    if already_initialized {
        warn!("`init` is called multiple times");
    }
}

fn get() -> &'static MainState {
    MAIN_STATE.get().expect("main state is not initialized")
}

pub fn on_location_update(fixes: Vec<LocationFix>) {
    get().controller.lock().unwrap().on_location_update(&fixes);
}

/// Reports a reverse-geocoding completion from the shell. A service failure is
/// passed as `error`; empty `placemarks` with no error means the geocoder
/// found nothing.
pub fn on_geocode_completed(request_id: u64, placemarks: Vec<Placemark>, error: Option<String>) {
    let outcome = match error {
        Some(message) => Err(GeocodeError(message)),
        None => Ok(placemarks),
    };
    get()
        .controller
        .lock()
        .unwrap()
        .on_geocode_completed(request_id, outcome);
}

pub fn set_map_type(index: i32) {
    get().controller.lock().unwrap().set_map_type(index);
}

pub fn take_location_commands() -> Vec<LocationCommand> {
    get().location_commands.take()
}

pub fn take_map_commands() -> Vec<MapCommand> {
    get().map_commands.take()
}

pub fn take_geocode_requests() -> Vec<GeocodeRequest> {
    get().geocode_requests.take()
}

pub fn display_state() -> DisplayState {
    get().controller.lock().unwrap().display().clone()
}

pub fn display_state_json() -> Result<String> {
    Ok(serde_json::to_string(&display_state())?)
}
