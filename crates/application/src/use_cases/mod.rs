mod advertise_preferences;
mod resolve_controller;

pub use advertise_preferences::AdvertisePreferencesUseCase;
pub use resolve_controller::{ControllerResolution, ResolveControllerUseCase};
