pub mod check_result;
pub mod credential;
pub mod util;
