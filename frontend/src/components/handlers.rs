use super::super::{CaptureTab, Model, Msg, build_backend};
use super::utils::time_label;
use crate::camera::{self, CameraStream};
use crate::clipboard;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use shared::capture::{CameraLease, validate_image_file};
use shared::classifier::ClassificationOutcome;
use shared::error::CaptureError;
use shared::notice::Notice;
use shared::session::AnalysisTicket;
use shared::tips::TipCarousel;
use shared::{AnalysisState, CaptureSource, Catalog, RequestToken, Resolution};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList, HtmlCanvasElement, HtmlVideoElement};
use yew::prelude::*;

pub fn push_notice(model: &mut Model, ctx: &Context<Model>, notice: Notice) {
    let id = model.notices.push(notice);
    let link = ctx.link().clone();
    let timeout = Timeout::new(model.settings.notices.duration_ms, move || {
        link.send_message(Msg::DismissNotice(id));
    });
    model.notice_timeouts.insert(id, timeout);
}

// Capture

pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let name = file.name();
    let mime = file.raw_mime_type();

    if let Err(e) = validate_image_file(&name, &mime) {
        return handle_capture_error(model, ctx, e);
    }

    let preview = ObjectUrl::from(file);
    let url = preview.to_string();
    select_image(model, ctx, &name, &mime, CaptureSource::Upload, url, Some(preview))
}

fn handle_file_rejected(model: &mut Model, ctx: &Context<Model>, reason: String) -> bool {
    model.capture_error = Some(reason.clone());
    push_notice(model, ctx, Notice::invalid_file(reason));
    true
}

fn handle_capture_error(model: &mut Model, ctx: &Context<Model>, error: CaptureError) -> bool {
    match error {
        CaptureError::InvalidFileType { .. } => {
            handle_file_rejected(model, ctx, error.to_string())
        }
        CaptureError::CameraAccessDenied(message) => handle_camera_failed(model, message),
    }
}

/// Makes `url` the current image, superseding any earlier one and whatever
/// analysis it had in flight.
fn select_image(
    model: &mut Model,
    ctx: &Context<Model>,
    name: &str,
    mime: &str,
    source: CaptureSource,
    url: String,
    preview: Option<ObjectUrl>,
) -> bool {
    match model.slot.select(name, mime, source, url) {
        Ok((handle, previous)) => {
            if let Some(previous) = previous {
                log::info!("Releasing image {} ({})", previous.id, previous.name);
            }
            // Dropping the old ObjectUrl revokes it.
            model.preview_url = preview;
            model.capture_error = None;
            model.session.select_image(handle);

            if model.settings.analysis.auto_classify {
                handle_classify(model, ctx);
            }
            true
        }
        Err(e) => handle_capture_error(model, ctx, e),
    }
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            process_file_list(ctx, file_list);
        }
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            if file_list.length() > 0 {
                event.prevent_default();
                process_file_list(ctx, file_list);
                return true;
            }
        }
    }
    false
}

/// Only the first file counts; a single image is analysed at a time.
pub fn process_file_list(ctx: &Context<Model>, file_list: FileList) {
    if let Some(file) = file_list.item(0) {
        if file_list.length() > 1 {
            log::warn!("{} files dropped, using {}", file_list.length(), file.name());
        }
        ctx.link().send_message(Msg::FileChosen(GlooFile::from(file)));
    }
}

pub fn handle_set_capture_tab(model: &mut Model, tab: CaptureTab) -> bool {
    if model.capture_tab == tab {
        return false;
    }
    if tab == CaptureTab::Upload {
        stop_camera(model);
    }
    model.capture_tab = tab;
    true
}

pub fn handle_toggle_camera(model: &mut Model, ctx: &Context<Model>) -> bool {
    model.camera_error = None;

    if model.camera_on {
        stop_camera(model);
        return true;
    }

    // A snapshot is on screen instead of the <video>; start over as Retake does.
    if model.slot.captured_frame().is_some() {
        handle_reset(model);
    }

    model.camera_on = true;
    let link = ctx.link().clone();
    spawn_local(async move {
        match camera::request_stream().await {
            // Leased before sending so the tracks stop even if the message
            // is never delivered.
            Ok(stream) => {
                link.send_message(Msg::CameraStarted(CameraLease::new(CameraStream(stream))))
            }
            Err(e) => {
                log::error!("Error accessing camera: {:?}", e);
                link.send_message(Msg::CameraFailed(CaptureError::camera_denied().to_string()));
            }
        }
    });
    true
}

pub fn handle_camera_started(model: &mut Model, lease: CameraLease<CameraStream>) -> bool {
    // Camera was switched off while the permission prompt was open.
    if !model.camera_on {
        drop(lease);
        return false;
    }

    let Some(video) = model.video_ref.cast::<HtmlVideoElement>() else {
        log::warn!("No video element to preview the camera; releasing it");
        model.camera_on = false;
        return true;
    };
    camera::attach(&video, lease.stream().map(|s| &s.0));
    model.camera = Some(lease);
    true
}

pub fn handle_camera_failed(model: &mut Model, message: String) -> bool {
    stop_camera(model);
    model.camera_error = Some(message);
    true
}

pub fn stop_camera(model: &mut Model) {
    if let Some(video) = model.video_ref.cast::<HtmlVideoElement>() {
        camera::attach(&video, None);
    }
    model.camera = None;
    model.camera_on = false;
}

pub fn handle_capture_frame(model: &mut Model, ctx: &Context<Model>) -> bool {
    let (Some(video), Some(canvas)) = (
        model.video_ref.cast::<HtmlVideoElement>(),
        model.canvas_ref.cast::<HtmlCanvasElement>(),
    ) else {
        return false;
    };

    match camera::snapshot(&video, &canvas) {
        Ok(data_url) => {
            stop_camera(model);
            select_image(
                model,
                ctx,
                "camera-capture.png",
                "image/png",
                CaptureSource::Camera,
                data_url,
                None,
            )
        }
        Err(e) => {
            log::warn!("Snapshot failed: {:?}", e);
            false
        }
    }
}

pub fn handle_retake(model: &mut Model, ctx: &Context<Model>) -> bool {
    handle_reset(model);
    handle_toggle_camera(model, ctx)
}

// Analysis

pub fn handle_classify(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.session.begin() {
        Ok(ticket) => {
            send_analysis_request(model, ctx, ticket);
            true
        }
        Err(e) => {
            model.capture_error = Some(e.to_string());
            true
        }
    }
}

pub fn handle_retry(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.session.retry() {
        Ok(ticket) => {
            send_analysis_request(model, ctx, ticket);
            true
        }
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    }
}

pub fn send_analysis_request(model: &Model, ctx: &Context<Model>, ticket: AnalysisTicket) {
    let backend = Rc::clone(&model.backend);
    let delay_ms = backend.borrow().delay().as_millis() as u32;
    let link = ctx.link().clone();

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let outcome = backend.borrow_mut().classify(&ticket.image);
        link.send_message(Msg::AnalysisResolved(ticket.token, outcome));
    });
}

pub fn handle_analysis_resolved(
    model: &mut Model,
    ctx: &Context<Model>,
    token: RequestToken,
    outcome: ClassificationOutcome,
) -> bool {
    if model.session.resolve(token, outcome) == Resolution::Stale {
        return false;
    }

    let notice = match model.session.state() {
        AnalysisState::Completed(result) => Notice::classification_complete(result.primary_category),
        AnalysisState::Failed(error) => Notice::classification_failed(&error.message),
        _ => return true,
    };
    push_notice(model, ctx, notice);
    true
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.slot.clear();
    model.session.reset();
    model.preview_url = None;
    model.capture_error = None;
    true
}

// Result actions

pub fn handle_save_result(model: &mut Model, ctx: &Context<Model>) -> bool {
    let AnalysisState::Completed(result) = model.session.state() else {
        return false;
    };
    model.saved.save(result);
    push_notice(model, ctx, Notice::result_saved());
    true
}

pub fn handle_share_result(model: &mut Model, ctx: &Context<Model>) -> bool {
    let AnalysisState::Completed(result) = model.session.state() else {
        return false;
    };
    let text = shared::presenter::share_text(result);
    let link = ctx.link().clone();

    spawn_local(async move {
        let ok = match clipboard::write_text(&text).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Clipboard write failed: {:?}", e);
                false
            }
        };
        link.send_message(Msg::ShareCompleted(ok));
    });
    false
}

pub fn handle_share_completed(model: &mut Model, ctx: &Context<Model>, ok: bool) -> bool {
    let notice = if ok {
        Notice::copied_to_clipboard()
    } else {
        Notice::clipboard_failed()
    };
    push_notice(model, ctx, notice);
    true
}

// Sidebar and chrome

pub fn handle_catalog_loaded(model: &mut Model, catalog: Catalog) -> bool {
    if *model.catalog == catalog {
        return false;
    }
    log::info!("Catalog loaded from server");
    *model.backend.borrow_mut() = build_backend(&catalog, &model.settings);
    model.tips = TipCarousel::new(catalog.tips.len());
    model.catalog = Rc::new(catalog);
    true
}

pub fn handle_chat_send(model: &mut Model, ctx: &Context<Model>) -> bool {
    let text = std::mem::take(&mut model.chat_input);
    if !model.chat.submit(&text, time_label()) {
        model.chat_input = text;
        return false;
    }

    let link = ctx.link().clone();
    model.chat_timeout = Some(Timeout::new(
        model.settings.assistant.reply_delay_ms,
        move || link.send_message(Msg::ChatReply),
    ));
    true
}

pub fn handle_chat_reply(model: &mut Model, ctx: &Context<Model>) -> bool {
    model.chat_timeout = None;
    let replied = model
        .chat
        .reply(&model.catalog.assistant, &mut model.chat_rng, time_label())
        .is_some();
    if replied {
        push_notice(model, ctx, Notice::assistant_replied());
    }
    replied
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return false;
    };

    let result = if model.theme == "light" {
        model.theme = "dark".to_string();
        body.class_list().add_1("dark-mode")
    } else {
        model.theme = "light".to_string();
        body.class_list().remove_1("dark-mode")
    };
    if let Err(e) = result {
        log::warn!("Failed to toggle theme class: {:?}", e);
    }

    true
}
