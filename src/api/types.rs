use std::ffi::CString;
use std::os::raw::c_char;

/// Result record handed across the C ABI. Release with `neko_free_api_result`.
#[repr(C)]
pub struct ApiResult {
    pub success: u8,
    pub data: *mut c_char,
    pub error: *mut c_char,
}

fn into_c_string(text: String, fallback: &str) -> *mut c_char {
    match CString::new(text) {
        Ok(cstring) => cstring.into_raw(),
        Err(_) => CString::new(fallback).unwrap_or_default().into_raw(),
    }
}

impl ApiResult {
    pub fn success(data: impl Into<String>) -> Self {
        Self {
            success: 1,
            data: into_c_string(data.into(), "Data contains invalid characters"),
            error: std::ptr::null_mut(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: 0,
            data: std::ptr::null_mut(),
            error: into_c_string(error.into(), "Error message contains invalid characters"),
        }
    }

    pub fn into_raw(self) -> *mut ApiResult {
        Box::into_raw(Box::new(self))
    }

    pub fn is_success(&self) -> bool {
        self.success == 1
    }
}
