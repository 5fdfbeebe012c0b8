pub mod json_api;

pub use json_api::{
    error_codes, simulate_series_json, simulate_set_json, SeriesRequest, SeriesResponse, SetRequest,
    SetResponse, TeamData,
};
