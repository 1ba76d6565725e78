use super::super::{CaptureTab, Model, Msg};
use super::utils::{debounce, open_file_picker, render_error_message};
use gloo_file::File as GlooFile;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

const FILE_INPUT_ID: &str = "file-input";

pub fn render_capture_card(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let tab = model.capture_tab;

    html! {
        <div class="card capture-card">
            <div class="card-header">
                <h2><i class="fa-solid fa-camera-retro"></i>{" Classify Waste"}</h2>
                <p>{"Upload a photo or use your camera to identify the item"}</p>
            </div>

            <div class="tabs">
                <button
                    class={classes!("tab", (tab == CaptureTab::Upload).then_some("active"))}
                    onclick={link.callback(|_| Msg::SetCaptureTab(CaptureTab::Upload))}
                >
                    <i class="fa-solid fa-upload"></i>{" Upload"}
                </button>
                <button
                    class={classes!("tab", (tab == CaptureTab::Camera).then_some("active"))}
                    onclick={link.callback(|_| Msg::SetCaptureTab(CaptureTab::Camera))}
                >
                    <i class="fa-solid fa-camera"></i>{" Camera"}
                </button>
            </div>

            {
                match tab {
                    CaptureTab::Upload => render_upload_tab(model, ctx),
                    CaptureTab::Camera => render_camera_tab(model, ctx),
                }
            }
        </div>
    }
}

fn render_upload_tab(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.item(0));
        input.set_value("");
        file.map(|f| Msg::FileChosen(GlooFile::from(f)))
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <div class="upload-tab">
            <input
                type="file"
                id={FILE_INPUT_ID}
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            {
                if model.slot.current().is_some() {
                    render_preview(model, ctx)
                } else {
                    html! {
                        <div
                            id="drop-zone"
                            class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                            ondragover={handle_drag_over}
                            ondragleave={handle_drag_leave}
                            ondrop={handle_drop}
                            onclick={debounce(300, || open_file_picker(FILE_INPUT_ID))}
                        >
                            <div class="upload-placeholder">
                                <i class="fa-solid fa-cloud-arrow-up"></i>
                                <p>{"Drag & drop an image here, paste, or click to browse"}</p>
                                <p class="file-types">
                                    { format!("Supported formats: JPG, PNG, GIF (max {}MB)", model.settings.upload.max_upload_mb) }
                                </p>
                            </div>
                        </div>
                    }
                }
            }

            { render_error_message(model.capture_error.as_ref()) }
        </div>
    }
}

fn render_preview(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(image) = model.slot.current() else {
        return html! {};
    };
    let link = ctx.link();
    let busy = model.session.is_analyzing();

    html! {
        <div class="preview-area">
            <img class="preview-image" src={image.url.clone()} alt={image.name.clone()} />
            <p class="preview-name">{ &image.name }</p>
            <div class="preview-actions">
                <button
                    class="secondary-btn"
                    disabled={busy}
                    onclick={debounce(300, || open_file_picker(FILE_INPUT_ID))}
                >
                    <i class="fa-solid fa-arrows-rotate"></i>{" Change"}
                </button>
                <button class="secondary-btn" onclick={link.callback(|_| Msg::Reset)}>
                    <i class="fa-solid fa-xmark"></i>{" Reset"}
                </button>
                <button
                    class="primary-btn"
                    disabled={busy}
                    onclick={link.callback(|_| Msg::Classify)}
                >
                    <i class="fa-solid fa-magnifying-glass"></i>{" Classify"}
                </button>
            </div>
        </div>
    }
}

fn render_camera_tab(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="camera-tab">
            {
                match model.slot.captured_frame() {
                    Some(image) => render_captured_frame(model, ctx, &image.url),
                    None => render_live_view(model, ctx),
                }
            }

            <canvas ref={model.canvas_ref.clone()} style="display: none;" />

            { render_error_message(model.camera_error.as_ref()) }
        </div>
    }
}

// Only Retake restarts the camera from here; the <video> is not mounted.
fn render_captured_frame(model: &Model, ctx: &Context<Model>, url: &str) -> Html {
    let link = ctx.link();
    html! {
        <div class="preview-area">
            <img class="preview-image" src={url.to_string()} alt="Captured frame" />
            <div class="preview-actions">
                <button class="secondary-btn" onclick={link.callback(|_| Msg::Retake)}>
                    <i class="fa-solid fa-rotate-left"></i>{" Retake"}
                </button>
                <button
                    class="primary-btn"
                    disabled={model.session.is_analyzing()}
                    onclick={link.callback(|_| Msg::Classify)}
                >
                    <i class="fa-solid fa-magnifying-glass"></i>{" Classify"}
                </button>
            </div>
        </div>
    }
}

fn render_live_view(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    html! {
        <>
            <div class={classes!("camera-view", model.camera_on.then_some("live"))}>
                <video
                    ref={model.video_ref.clone()}
                    autoplay=true
                    playsinline=true
                    muted=true
                    class="camera-video"
                />
                {
                    if !model.camera_on {
                        html! {
                            <div class="camera-placeholder">
                                <i class="fa-solid fa-video-slash"></i>
                                <p>{"Camera is off"}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="camera-actions">
                <button class="secondary-btn" onclick={link.callback(|_| Msg::ToggleCamera)}>
                    {
                        if model.camera_on {
                            html! { <><i class="fa-solid fa-video-slash"></i>{" Turn Off Camera"}</> }
                        } else {
                            html! { <><i class="fa-solid fa-video"></i>{" Turn On Camera"}</> }
                        }
                    }
                </button>
                <button
                    class="primary-btn"
                    disabled={model.camera.is_none()}
                    onclick={link.callback(|_| Msg::CaptureFrame)}
                >
                    <i class="fa-solid fa-circle-dot"></i>{" Capture Image"}
                </button>
            </div>
        </>
    }
}
