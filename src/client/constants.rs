use std::num::{NonZero, NonZeroU32};

pub(super) const BASE_URL: &str = "https://universalis.app";
// Hard ceiling the API places on one multi-item call
pub(super) const MAX_IDS_PER_REQUEST: usize = 100;
pub(super) const REQUESTS_PER_SECOND: NonZeroU32 = NonZero::new(25).unwrap();
