//! Response types

mod record;

pub use record::{
    NETWORK_ERROR, Response, StatusCategory, StatusCode, format_size, round_millis,
    serialized_size,
};
