use {
    crate::{BOUNDARY, FrameReceiver, Renderer},
    axum::{
        Json, Router,
        body::Body,
        extract::State,
        http::{StatusCode, header},
        response::{Html, IntoResponse, Response},
        routing::{get, post},
    },
    game::{Game, GameData},
    pose::SharedPoseSource,
    std::time::Instant,
};

const INDEX_HTML: &str = include_str!("../static/index.html");
const SCRIPT_JS: &str = include_str!("../static/script.js");

/// Everything the handlers share.
#[derive(Clone)]
pub struct AppState {
    pub frames: FrameReceiver,
    pub pose: SharedPoseSource,
    pub game: Game,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/video_feed", get(video_feed))
        .route("/get_game_data", get(game_data))
        .route("/restart_game", post(restart_game))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

async fn video_feed(State(state): State<AppState>) -> Response {
    log::debug!("video stream opened");
    let renderer = Renderer::new(state.frames.clone(), state.pose, state.game);
    (
        [
            (
                header::CONTENT_TYPE,
                format!("multipart/x-mixed-replace; boundary={}", BOUNDARY),
            ),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        Body::from_stream(renderer.into_stream()),
    )
        .into_response()
}

async fn game_data(State(state): State<AppState>) -> Json<GameData> {
    Json(state.game.poll(Instant::now()))
}

async fn restart_game(State(state): State<AppState>) -> StatusCode {
    state.game.reset(Instant::now());
    StatusCode::NO_CONTENT
}
