//! End-to-end smoke tests for the stormwatchd stack.
//!
//! The HTTP layer is exercised via `tower::ServiceExt::oneshot` (no port is
//! bound). The headless dashboard runs the real ureq client against a
//! throwaway backend on `127.0.0.1:0`.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use http_body_util::BodyExt;
use stormwatch_adapter_http_axum::router;
use stormwatch_adapter_http_axum::state::{AppState, PageConfig};
use stormwatch_adapter_http_ureq::HttpSurveillanceApi;
use stormwatch_app::dashboard::{DashboardClient, DashboardConfig};
use stormwatch_app::ports::DashboardView;
use stormwatch_domain::clip::ClipListItem;
use stormwatch_domain::endpoint::Endpoints;
use stormwatch_domain::settings::{SettingField, SettingsForm};
use tower::ServiceExt;

async fn body_string(resp: axum::response::Response) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Host page
// ---------------------------------------------------------------------------

fn app(assets_dir: &std::path::Path) -> Router {
    let page = PageConfig {
        title: "stormwatch".to_string(),
        endpoints: Endpoints::new("http://camera.local:8080/api").unwrap(),
        dashboard: DashboardConfig::default(),
    };
    router::build(AppState::new(page, assets_dir))
}

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let dir = tempfile::tempdir().unwrap();
    let resp = app(dir.path())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_render_host_page_pointing_at_backend() {
    let dir = tempfile::tempdir().unwrap();
    let resp = app(dir.path())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"content="http://camera.local:8080/api/""#));
    assert!(body.contains("stormwatch_dashboard_bg.wasm"));
}

#[tokio::test]
async fn should_serve_compiled_bundle() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("stormwatch_dashboard.js"), "export default 1;").unwrap();

    let resp = app(dir.path())
        .oneshot(
            Request::builder()
                .uri("/pkg/stormwatch_dashboard.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "export default 1;");
}

// ---------------------------------------------------------------------------
// Headless dashboard against a live backend
// ---------------------------------------------------------------------------

#[derive(Default)]
struct PageState {
    live: Vec<String>,
    loader: bool,
    clips: Vec<ClipListItem>,
    settings: SettingsForm,
}

#[derive(Default)]
struct Page(Mutex<PageState>);

impl DashboardView for Page {
    fn set_live_source(&self, src: &str) {
        self.0.lock().unwrap().live.push(src.to_string());
    }

    fn show_loader(&self) {
        self.0.lock().unwrap().loader = true;
    }

    fn hide_loader(&self) {
        self.0.lock().unwrap().loader = false;
    }

    fn clear_clips(&self) {
        self.0.lock().unwrap().clips.clear();
    }

    fn render_clips(&self, items: Vec<ClipListItem>) {
        self.0.lock().unwrap().clips = items;
    }

    fn populate_settings(&self, form: &SettingsForm) {
        self.0.lock().unwrap().settings = form.clone();
    }

    fn read_settings(&self) -> SettingsForm {
        self.0.lock().unwrap().settings.clone()
    }
}

async fn backend() -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    let posts = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&posts);
    let app = Router::new()
        .route(
            "/clips",
            get(|| async {
                r#"[{"title":"MjAyMC0wNi0wMVQyMTowNDowNQ==","thumbnail":"clips/a.jpeg","video":"clips/a.mp4"},
                    {"title":"2020-06-01T21:10:00","thumbnail":"clips/b.jpeg","video":"clips/b.mp4"}]"#
            }),
        )
        .route(
            "/settings",
            get(|| async {
                r#"{"EdgeDetectionSeconds":5,"DebounceSeconds":2,"TriggerDelay":10,"TriggerThreshold":30}"#
            })
            .post(move |body: String| async move {
                recorded.lock().unwrap().push(body);
                "{}"
            }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    (addr, posts)
}

async fn wait_for(page: &Page, ready: impl Fn(&PageState) -> bool) {
    for _ in 0..100 {
        if ready(&page.0.lock().unwrap()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("dashboard did not reach the expected state");
}

#[tokio::test(flavor = "multi_thread")]
async fn should_run_dashboard_loops_against_backend() {
    let (addr, posts) = backend().await;
    let endpoints = Endpoints::new(&format!("http://{addr}")).unwrap();
    let api = HttpSurveillanceApi::new(endpoints).unwrap();
    let page = Arc::new(Page::default());
    let config = DashboardConfig {
        live_interval: Duration::from_millis(50),
        clips_interval: Duration::from_secs(60),
    };
    let client = DashboardClient::new(api, Arc::clone(&page), config);

    let handle = client.start();
    wait_for(&page, |state| {
        state.clips.len() == 2 && !state.settings.get(SettingField::TriggerDelay).is_empty()
    })
    .await;
    wait_for(&page, |state| state.live.len() >= 2).await;

    {
        let state = page.0.lock().unwrap();
        assert!(!state.loader);
        assert_eq!(state.clips[0].thumbnail_id, "thumbnail0");
        assert_eq!(state.clips[1].title_id, "title1");
        assert_eq!(state.clips[0].title, "Mon Jun 01 2020 21:04:05");
        assert_eq!(state.clips[1].video, format!("http://{addr}/clips/b.mp4"));
        assert_ne!(state.live[0], state.live[1]);
        assert!(state.live[0].starts_with(&format!("http://{addr}/live.jpeg?")));
        assert_eq!(state.settings.get(SettingField::EdgeDetectionSeconds), "5");
        assert_eq!(state.settings.get(SettingField::TriggerThreshold), "30");
    }

    page.0.lock().unwrap().settings.set(SettingField::DebounceSeconds, "3");
    client.save_settings().await.unwrap();
    handle.shutdown();

    let body = posts.lock().unwrap()[0].clone();
    let sent = SettingsForm::from_form_body(&body).unwrap();
    assert_eq!(sent.get(SettingField::DebounceSeconds), "3");
    assert_eq!(sent.get(SettingField::TriggerDelay), "10");
}
