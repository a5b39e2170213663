/*!
# Universalis API Structures
Typed representations of the payloads returned by the Universalis endpoints,
plus the request option structs sent to them
*/

pub mod current;
pub mod history;
pub mod multi;
pub mod request;
pub mod stats;
pub mod extra;
