use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::types::Food;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct NoArgs {}

#[derive(Serialize)]
struct FoodIdArgs {
    id: String,
}

#[derive(Serialize)]
struct SaveFoodArgs {
    food: Food,
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

// -- Food journal invoke wrappers --

/// All food and drink entries, newest first.
pub async fn list_foods() -> Result<Vec<Food>, String> {
    let args = serde_wasm_bindgen::to_value(&NoArgs {}).map_err(|e| e.to_string())?;

    let result = invoke("list_foods", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_food(id: &str) -> Result<Food, String> {
    let args = serde_wasm_bindgen::to_value(&FoodIdArgs { id: id.to_string() })
        .map_err(|e| e.to_string())?;

    let result = invoke("get_food", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Insert or update an entry. The stored record comes back with its id.
pub async fn save_food(food: Food) -> Result<Food, String> {
    let args = serde_wasm_bindgen::to_value(&SaveFoodArgs { food }).map_err(|e| e.to_string())?;

    let result = invoke("save_food", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_food(id: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&FoodIdArgs { id: id.to_string() })
        .map_err(|e| e.to_string())?;

    invoke("delete_food", args).await.map(|_| ()).map_err(js_error)
}
