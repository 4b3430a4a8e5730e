//! Query-string representation of filter criteria.

mod codec;
mod sync;

pub use codec::{
    encode_query, parse_query, PARAM_CATEGORY, PARAM_PRICING, PARAM_SEARCH, PARAM_STATUS,
};
pub use sync::{QueryHistory, UrlSync};
