mod controller_resolver;
mod preference_advertiser;

pub use controller_resolver::ControllerResolver;
pub use preference_advertiser::PreferenceAdvertiser;
