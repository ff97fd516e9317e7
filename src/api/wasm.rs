//! JavaScript bindings, using the camelCase names JS callers expect.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::neko;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn to_array(values: Vec<String>) -> Array {
    values.into_iter().map(JsValue::from).collect()
}

#[wasm_bindgen(js_name = getRandomCat)]
pub fn get_random_cat() -> String {
    neko::get_random_cat().to_string()
}

#[wasm_bindgen(js_name = getCatByMood)]
pub fn get_cat_by_mood(mood: Option<String>) -> Result<String, JsError> {
    Ok(neko::get_cat_by_mood(mood.as_deref())?.to_string())
}

#[wasm_bindgen(js_name = getCatWithMessage)]
pub fn get_cat_with_message(message: &str, mood: Option<String>) -> Result<String, JsError> {
    Ok(neko::get_cat_with_message(message, mood.as_deref())?)
}

#[wasm_bindgen(js_name = getCatFace)]
pub fn get_cat_face(kind: Option<String>) -> Result<String, JsError> {
    Ok(neko::get_cat_face(kind.as_deref())?.to_string())
}

#[wasm_bindgen(js_name = getKitten)]
pub fn get_kitten(kind: Option<String>) -> Result<String, JsError> {
    Ok(neko::get_kitten(kind.as_deref())?.to_string())
}

#[wasm_bindgen(js_name = getBigCat)]
pub fn get_big_cat(pose: Option<String>) -> Result<String, JsError> {
    Ok(neko::get_big_cat(pose.as_deref())?.to_string())
}

#[wasm_bindgen(js_name = getActionCat)]
pub fn get_action_cat(action: Option<String>) -> Result<String, JsError> {
    Ok(neko::get_action_cat(action.as_deref())?.to_string())
}

#[wasm_bindgen(js_name = getSleepingCat)]
pub fn get_sleeping_cat() -> String {
    neko::get_sleeping_cat().to_string()
}

#[wasm_bindgen(js_name = getCatParade)]
pub fn get_cat_parade(count: Option<i32>) -> String {
    neko::get_cat_parade(count.map(i64::from))
}

#[wasm_bindgen(js_name = listMoods)]
pub fn list_moods() -> Array {
    to_array(neko::list_moods())
}

#[wasm_bindgen(js_name = listActions)]
pub fn list_actions() -> Array {
    to_array(neko::list_actions())
}

#[wasm_bindgen(js_name = listCatTypes)]
pub fn list_cat_types() -> Array {
    to_array(neko::list_cat_types())
}

#[wasm_bindgen(js_name = getAllCatsByType)]
pub fn get_all_cats_by_type(cat_type: &str) -> Result<Object, JsError> {
    let object = Object::new();
    for (key, art) in neko::get_all_cats_by_type(cat_type)? {
        Reflect::set(&object, &JsValue::from(key), &JsValue::from(art))
            .map_err(|_| JsError::new("Failed to build cat mapping"))?;
    }
    Ok(object)
}
