mod fixtures;

mod ratelimit;
mod stats;
