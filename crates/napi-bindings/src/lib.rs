#[macro_use]
extern crate napi_derive;

pub mod defined_api;

#[napi]
pub fn version() -> String {
    defined_core::DEFINED_VERSION.to_string()
}
