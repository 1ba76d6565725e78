use js_sys::{Object, Reflect};
use shared::capture::MediaTracks;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

pub struct CameraStream(pub MediaStream);

impl MediaTracks for CameraStream {
    fn stop_all(&self) {
        for track in self.0.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

/// Asks for a video stream, preferring the rear-facing camera.
pub async fn request_stream() -> Result<MediaStream, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;

    let video = Object::new();
    Reflect::set(&video, &"facingMode".into(), &"environment".into())?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video);

    let promise = devices.get_user_media_with_constraints(&constraints)?;
    let stream = JsFuture::from(promise).await?;
    stream.dyn_into::<MediaStream>()
}

pub fn attach(video: &HtmlVideoElement, stream: Option<&MediaStream>) {
    video.set_src_object(stream);
}

/// Freezes the current video frame into a PNG data URL.
pub fn snapshot(video: &HtmlVideoElement, canvas: &HtmlCanvasElement) -> Result<String, JsValue> {
    let (width, height) = (video.video_width(), video.video_height());
    if width == 0 || height == 0 {
        return Err(JsValue::from_str("camera has not produced a frame yet"));
    }
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    ctx.draw_image_with_html_video_element_and_dw_and_dh(
        video,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )?;
    canvas.to_data_url_with_type("image/png")
}
