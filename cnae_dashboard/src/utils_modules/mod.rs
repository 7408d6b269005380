pub mod io_utils;
pub mod logger_utils;
pub mod number_utils;
pub mod time_utils;
pub mod traits;
