mod reference;
mod settings;
mod sizing;
mod sse;
mod status;

pub(super) use reference::{get_scaling, get_schemes, get_tables};
pub(super) use settings::{get_settings, update_settings};
pub(super) use sizing::{handle_estimate, handle_validate};
pub(super) use sse::sse_events;
pub(super) use status::get_status;
