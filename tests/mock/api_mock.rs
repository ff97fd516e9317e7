#![allow(dead_code)]

use nekoapi::api::{neko_free_api_result, ApiResult};
use std::ffi::{CStr, CString};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiOutcome {
    pub success: bool,
    pub data: Option<String>,
    pub error: Option<String>,
}

impl ApiOutcome {
    pub fn expect_data(self) -> String {
        assert!(self.success, "Expected success, got error: {:?}", self.error);
        self.data.expect("successful result carries data")
    }

    pub fn expect_error(self) -> String {
        assert!(!self.success, "Expected error, got data: {:?}", self.data);
        self.error.expect("failed result carries an error")
    }
}

/// Copy an endpoint's result into owned strings and release it.
pub fn take_result(result: *mut ApiResult) -> ApiOutcome {
    assert!(!result.is_null());

    let outcome = unsafe {
        let record = &*result;
        ApiOutcome {
            success: record.success == 1,
            data: read_c_string(record.data),
            error: read_c_string(record.error),
        }
    };

    neko_free_api_result(result);
    outcome
}

unsafe fn read_c_string(ptr: *mut std::os::raw::c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

pub fn c_string(text: &str) -> CString {
    CString::new(text).expect("test strings contain no NUL")
}

pub struct TestCatData;

impl TestCatData {
    pub fn mixed_case_moods() -> Vec<(&'static str, &'static str)> {
        vec![
            ("HAPPY", "happy"),
            ("Sad", "sad"),
            ("sLeEpY", "sleepy"),
            ("Surprised", "surprised"),
        ]
    }

    pub fn unknown_keys() -> Vec<&'static str> {
        vec!["nonexistent", "grumpy", "", " happy", "happy "]
    }
}
