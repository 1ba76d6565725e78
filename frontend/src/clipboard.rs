use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

// navigator.clipboard is looked up dynamically; web-sys gates its binding
// behind an unstable cfg.
pub async fn write_text(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = Reflect::get(&window.navigator(), &"clipboard".into())?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard API unavailable"));
    }
    let write = Reflect::get(&clipboard, &"writeText".into())?.dyn_into::<Function>()?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}
