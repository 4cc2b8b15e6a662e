pub mod geolocation;
pub mod storage;
pub mod time;
pub mod timer;
pub mod url;
pub mod validation;
