#[cfg(test)]
pub mod endpoint_tests;
#[cfg(test)]
pub mod request_flow_tests;
#[cfg(test)]
pub mod utils;
