use std::os::raw::c_char;
use crate::api::{
    types::ApiResult,
    services::{
        validation_service::*,
        catalog_service::{configure_neko, format_json, with_neko},
    },
};
use crate::neko::{get_all_cats_by_type, list_actions, list_cat_types, list_moods};

#[no_mangle]
pub extern "C" fn neko_configure(config_toml: *const c_char) -> *mut ApiResult {
    let config_str = match parse_c_string(config_toml, "Config string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    match configure_neko(&config_str) {
        Ok(()) => ApiResult::success("Neko configured successfully").into_raw(),
        Err(result) => result,
    }
}

#[no_mangle]
pub extern "C" fn neko_random_cat() -> *mut ApiResult {
    with_neko(|neko| Ok(neko.random_cat()))
}

#[no_mangle]
pub extern "C" fn neko_cat_by_mood(mood: *const c_char) -> *mut ApiResult {
    let mood_str = match parse_optional_key(mood, "Mood string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    with_neko(|neko| neko.cat_by_mood(mood_str.as_deref()))
}

#[no_mangle]
pub extern "C" fn neko_cat_with_message(message: *const c_char, mood: *const c_char) -> *mut ApiResult {
    let message_str = match parse_c_string(message, "Message string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let mood_str = match parse_optional_key(mood, "Mood string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    with_neko(|neko| neko.cat_with_message(&message_str, mood_str.as_deref()))
}

#[no_mangle]
pub extern "C" fn neko_cat_face(kind: *const c_char) -> *mut ApiResult {
    let kind_str = match parse_optional_key(kind, "Face type string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    with_neko(|neko| neko.cat_face(kind_str.as_deref()))
}

#[no_mangle]
pub extern "C" fn neko_kitten(kind: *const c_char) -> *mut ApiResult {
    let kind_str = match parse_optional_key(kind, "Kitten type string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    with_neko(|neko| neko.kitten(kind_str.as_deref()))
}

#[no_mangle]
pub extern "C" fn neko_big_cat(pose: *const c_char) -> *mut ApiResult {
    let pose_str = match parse_optional_key(pose, "Pose string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    with_neko(|neko| neko.big_cat(pose_str.as_deref()))
}

#[no_mangle]
pub extern "C" fn neko_action_cat(action: *const c_char) -> *mut ApiResult {
    let action_str = match parse_optional_key(action, "Action string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    with_neko(|neko| neko.action_cat(action_str.as_deref()))
}

#[no_mangle]
pub extern "C" fn neko_sleeping_cat() -> *mut ApiResult {
    with_neko(|neko| Ok(neko.sleeping_cat()))
}

#[no_mangle]
pub extern "C" fn neko_cat_parade(count: i64) -> *mut ApiResult {
    with_neko(|neko| Ok(neko.cat_parade(Some(count))))
}

#[no_mangle]
pub extern "C" fn neko_list_moods() -> *mut ApiResult {
    format_json(&list_moods())
}

#[no_mangle]
pub extern "C" fn neko_list_actions() -> *mut ApiResult {
    format_json(&list_actions())
}

#[no_mangle]
pub extern "C" fn neko_list_cat_types() -> *mut ApiResult {
    format_json(&list_cat_types())
}

#[no_mangle]
pub extern "C" fn neko_all_cats_by_type(cat_type: *const c_char) -> *mut ApiResult {
    let type_str = match parse_c_string(cat_type, "Cat type string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    match get_all_cats_by_type(&type_str) {
        Ok(entries) => format_json(&entries),
        Err(e) => ApiResult::error(e.to_string()).into_raw(),
    }
}

#[no_mangle]
pub extern "C" fn neko_free_api_result(result: *mut ApiResult) {
    if result.is_null() {
        return;
    }

    unsafe {
        let result = Box::from_raw(result);
        if !result.data.is_null() {
            let _ = std::ffi::CString::from_raw(result.data);
        }
        if !result.error.is_null() {
            let _ = std::ffi::CString::from_raw(result.error);
        }
    }
}
