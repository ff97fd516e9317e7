use std::ffi::CStr;
use std::os::raw::c_char;
use crate::api::types::ApiResult;

pub fn parse_c_string(ptr: *const c_char, field_name: &str) -> Result<String, *mut ApiResult> {
    if ptr.is_null() {
        return Err(ApiResult::error(format!("{} is null", field_name)).into_raw());
    }

    unsafe {
        match CStr::from_ptr(ptr).to_str() {
            Ok(s) => Ok(s.to_string()),
            Err(_) => Err(ApiResult::error(format!("Invalid UTF-8 string for {}", field_name)).into_raw()),
        }
    }
}

/// A null key means "use the default"; invalid UTF-8 is still an error.
pub fn parse_optional_key(ptr: *const c_char, field_name: &str) -> Result<Option<String>, *mut ApiResult> {
    if ptr.is_null() {
        return Ok(None);
    }

    parse_c_string(ptr, field_name).map(Some)
}
