mod api;
mod camera;
mod clipboard;
mod components;

use camera::CameraStream;
use components::handlers;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::StdRng;
use shared::assistant::ChatTranscript;
use shared::capture::{CameraLease, ImageSlot};
use shared::leaderboard::LeaderboardPeriod;
use shared::notice::NoticeBoard;
use shared::presenter::SavedResults;
use shared::tips::TipCarousel;
use shared::{
    AnalysisSession, Catalog, CatalogRepository, ClassificationBackend, ClassificationOutcome,
    EmbeddedCatalog, MockClassifier, RequestToken, Settings,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum CaptureTab {
    Upload,
    Camera,
}

type SharedBackend = Rc<RefCell<Box<dyn ClassificationBackend>>>;

// Yew msg components
enum Msg {
    // Capture
    FileChosen(GlooFile),
    SetDragging(bool),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
    SetCaptureTab(CaptureTab),
    ToggleCamera,
    CameraStarted(CameraLease<CameraStream>),
    CameraFailed(String),
    CaptureFrame,
    Retake,

    // Analysis
    Classify,
    AnalysisResolved(RequestToken, ClassificationOutcome),
    Retry,
    Reset,

    // Result actions
    SaveResult,
    ShareResult,
    ShareCompleted(bool),

    // Sidebar and chrome
    CatalogLoaded(Catalog),
    DismissNotice(u64),
    NextTip,
    PrevTip,
    SetPeriod(LeaderboardPeriod),
    ChatInput(String),
    ChatSend,
    ChatReply,
    ToggleTheme,
}

// Main component
struct Model {
    settings: Settings,
    catalog: Rc<Catalog>,
    backend: SharedBackend,

    slot: ImageSlot,
    preview_url: Option<ObjectUrl>,
    session: AnalysisSession,
    saved: SavedResults,
    capture_error: Option<String>,

    capture_tab: CaptureTab,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
    camera_on: bool,
    camera: Option<CameraLease<CameraStream>>,
    camera_error: Option<String>,
    video_ref: NodeRef,
    canvas_ref: NodeRef,

    notices: NoticeBoard,
    notice_timeouts: HashMap<u64, Timeout>,

    tips: TipCarousel,
    period: LeaderboardPeriod,
    chat: ChatTranscript,
    chat_input: String,
    chat_rng: StdRng,
    chat_timeout: Option<Timeout>,
    theme: String,
}

fn build_backend(catalog: &Catalog, settings: &Settings) -> Box<dyn ClassificationBackend> {
    Box::new(MockClassifier::new(catalog, settings, StdRng::from_entropy()))
}

fn fallback_catalog() -> Catalog {
    EmbeddedCatalog
        .load()
        .expect("embedded catalog should always parse")
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let settings = Settings::embedded();
        let catalog = fallback_catalog();
        let backend: SharedBackend = Rc::new(RefCell::new(build_backend(&catalog, &settings)));

        let mut model = Self {
            notices: NoticeBoard::new(settings.notices.max_visible),
            tips: TipCarousel::new(catalog.tips.len()),
            chat: ChatTranscript::new(&catalog.assistant, components::utils::time_label()),
            catalog: Rc::new(catalog),
            backend,
            settings,
            slot: ImageSlot::new(),
            preview_url: None,
            session: AnalysisSession::new(),
            saved: SavedResults::default(),
            capture_error: None,
            capture_tab: CaptureTab::Upload,
            is_dragging: false,
            paste_listener: None,
            camera_on: false,
            camera: None,
            camera_error: None,
            video_ref: NodeRef::default(),
            canvas_ref: NodeRef::default(),
            notice_timeouts: HashMap::new(),
            period: LeaderboardPeriod::default(),
            chat_input: String::new(),
            chat_rng: StdRng::from_entropy(),
            chat_timeout: None,
            theme: "light".to_string(),
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        }

        api::load_catalog(ctx.link().clone());
        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Capture
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
            Msg::SetCaptureTab(tab) => handlers::handle_set_capture_tab(self, tab),
            Msg::ToggleCamera => handlers::handle_toggle_camera(self, ctx),
            Msg::CameraStarted(lease) => handlers::handle_camera_started(self, lease),
            Msg::CameraFailed(message) => handlers::handle_camera_failed(self, message),
            Msg::CaptureFrame => handlers::handle_capture_frame(self, ctx),
            Msg::Retake => handlers::handle_retake(self, ctx),

            // Analysis
            Msg::Classify => handlers::handle_classify(self, ctx),
            Msg::AnalysisResolved(token, outcome) => {
                handlers::handle_analysis_resolved(self, ctx, token, outcome)
            }
            Msg::Retry => handlers::handle_retry(self, ctx),
            Msg::Reset => handlers::handle_reset(self),

            // Result actions
            Msg::SaveResult => handlers::handle_save_result(self, ctx),
            Msg::ShareResult => handlers::handle_share_result(self, ctx),
            Msg::ShareCompleted(ok) => handlers::handle_share_completed(self, ctx, ok),

            // Sidebar and chrome
            Msg::CatalogLoaded(catalog) => handlers::handle_catalog_loaded(self, catalog),
            Msg::DismissNotice(id) => {
                self.notice_timeouts.remove(&id);
                self.notices.dismiss(id)
            }
            Msg::NextTip => {
                self.tips.next();
                true
            }
            Msg::PrevTip => {
                self.tips.prev();
                true
            }
            Msg::SetPeriod(period) => {
                let changed = self.period != period;
                self.period = period;
                changed
            }
            Msg::ChatInput(text) => {
                self.chat_input = text;
                true
            }
            Msg::ChatSend => handlers::handle_chat_send(self, ctx),
            Msg::ChatReply => handlers::handle_chat_reply(self, ctx),
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { components::header::render_header(self) }
                <div class="top-right">
                    { components::theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }
                </div>

                <main class="main-content">
                    <section class="classify-column">
                        { components::upload_section::render_capture_card(self, ctx) }
                        { components::status_indicator::render_status(self, ctx) }
                        { components::results::render_results(self, ctx) }
                    </section>
                    <aside class="sidebar">
                        { components::profile::render_profile_card(self) }
                        { components::tips::render_tips(self, ctx) }
                        { components::rewards::render_rewards(self) }
                        { components::assistant::render_assistant(self, ctx) }
                    </aside>
                </main>
                { components::leaderboard::render_leaderboard(self, ctx) }
                { components::notices::render_notices(self, ctx) }

                <footer class="app-footer">
                    <p>{"© 2025 EcoSnap - Making waste classification smarter for a greener planet"}</p>
                </footer>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        handlers::stop_camera(self);
        self.notice_timeouts.clear();
        self.chat_timeout = None;
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("EcoSnap starting...");
    yew::Renderer::<Model>::new().render();
}
