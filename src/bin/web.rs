//! Single binary web server: JSON REST API over days, annual ranking, exports and the player hall.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Days and the player hall are stored as JSON under DATA_DIR (default `data`).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use arena_volley_day::{
    annual_ranking, export,
    storage::{saved_day_summaries, DayStore, JsonFileStore, StorageError},
    AnnualRankingEntry, DayError, DayPhase, GameDay, GameFormat, MatchId, ParticipantId,
    RoundType, Standing, TeamId,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

/// Working copy of a day + last activity time (for auto-cleanup).
/// Days with teams are also on disk; only setup rosters live here alone.
struct DayEntry {
    day: GameDay,
    last_activity: Instant,
}

struct ServerState {
    days: RwLock<HashMap<NaiveDate, DayEntry>>,
    store: Arc<Mutex<JsonFileStore>>,
    /// Held from a day change until it is persisted; stores land in the order changes happen.
    day_writes: tokio::sync::Mutex<()>,
}

impl ServerState {
    fn new(store: JsonFileStore) -> Self {
        Self {
            days: RwLock::new(HashMap::new()),
            store: Arc::new(Mutex::new(store)),
            day_writes: tokio::sync::Mutex::new(()),
        }
    }
}

type AppState = Data<ServerState>;

/// Inactivity threshold: cached days not accessed for this long are dropped from memory.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// A day plus everything derived from it.
#[derive(Serialize)]
struct DayView<'a> {
    day: &'a GameDay,
    phase: DayPhase,
    standings: Vec<Standing>,
    winner: Option<TeamId>,
    can_draw: bool,
    validation_message: Option<String>,
}

impl<'a> DayView<'a> {
    fn new(day: &'a GameDay) -> Self {
        Self {
            day,
            phase: day.phase(),
            standings: day.standings(),
            winner: day.winner().map(|t| t.id),
            can_draw: day.can_draw(),
            validation_message: day.validation_message(),
        }
    }
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct SettingsBody {
    format: Option<GameFormat>,
    round_type: Option<RoundType>,
}

#[derive(Deserialize)]
struct ManualTeamsBody {
    teams: Vec<Vec<ParticipantId>>,
}

#[derive(Deserialize)]
struct ScoreBody {
    score_1: Option<u32>,
    score_2: Option<u32>,
}

#[derive(Deserialize)]
struct FinishBody {
    #[serde(default)]
    timer_seconds: u32,
}

#[derive(Deserialize)]
struct DayPath {
    date: NaiveDate,
}

#[derive(Deserialize)]
struct DayPlayerPath {
    date: NaiveDate,
    player_id: ParticipantId,
}

#[derive(Deserialize)]
struct DayMatchPath {
    date: NaiveDate,
    match_id: MatchId,
}

#[derive(Deserialize)]
struct HallNamePath {
    name: String,
}

#[derive(Deserialize)]
struct YearQuery {
    year: Option<i32>,
}

#[derive(Deserialize, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
enum ShareMode {
    #[default]
    All,
    Standings,
}

#[derive(Deserialize)]
struct ShareQuery {
    #[serde(default)]
    mode: ShareMode,
}

fn error_json(e: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": e.to_string() })
}

fn storage_failure(e: String) -> HttpResponse {
    log::error!("Storage failure: {}", e);
    HttpResponse::InternalServerError().json(error_json(e))
}

/// Run a store operation on the blocking pool, one at a time.
async fn run_store<T, F>(state: &ServerState, op: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce(&mut JsonFileStore) -> Result<T, StorageError> + Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || {
        let mut guard = store.lock().map_err(|_| "store lock error".to_string())?;
        op(&mut guard).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| e.to_string())?
}

/// Make sure the day is in the working map, loading it from disk (or starting fresh).
async fn ensure_loaded(state: &ServerState, date: NaiveDate) -> Result<(), HttpResponse> {
    let cached = match state.days.read() {
        Ok(g) => g.contains_key(&date),
        Err(_) => return Err(HttpResponse::InternalServerError().body("lock error")),
    };
    if cached {
        return Ok(());
    }
    let loaded = run_store(state, move |s| s.load_day(date))
        .await
        .map_err(storage_failure)?;
    let mut g = state
        .days
        .write()
        .map_err(|_| HttpResponse::InternalServerError().body("lock error"))?;
    g.entry(date).or_insert_with(|| DayEntry {
        day: loaded.unwrap_or_else(|| GameDay::new(date)),
        last_activity: Instant::now(),
    });
    Ok(())
}

/// Apply `op` to the day, persist it once it has teams, and respond with the day view.
async fn update_day<F>(state: &ServerState, date: NaiveDate, op: F) -> HttpResponse
where
    F: FnOnce(&mut GameDay) -> Result<(), DayError>,
{
    let _write = state.day_writes.lock().await;
    if let Err(resp) = ensure_loaded(state, date).await {
        return resp;
    }
    let (body, to_save) = {
        let mut g = match state.days.write() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        let entry = g.entry(date).or_insert_with(|| DayEntry {
            day: GameDay::new(date),
            last_activity: Instant::now(),
        });
        entry.last_activity = Instant::now();
        if let Err(e) = op(&mut entry.day) {
            return HttpResponse::BadRequest().json(error_json(e));
        }
        let body = serde_json::to_value(DayView::new(&entry.day));
        let to_save = (!entry.day.teams.is_empty()).then(|| entry.day.clone());
        (body, to_save)
    };
    if let Some(day) = to_save {
        if let Err(e) = run_store(state, move |s| s.save_day(&day)).await {
            return storage_failure(e);
        }
    }
    match body {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => HttpResponse::InternalServerError().json(error_json(e)),
    }
}

/// Read-only access to the (loaded) day.
async fn with_day<F>(state: &ServerState, date: NaiveDate, f: F) -> HttpResponse
where
    F: FnOnce(&GameDay) -> HttpResponse,
{
    if let Err(resp) = ensure_loaded(state, date).await {
        return resp;
    }
    let mut g = match state.days.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&date) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&entry.day)
        }
        None => HttpResponse::NotFound().json(error_json("No day")),
    }
}

async fn load_ranking(state: &ServerState, year: i32) -> Result<Vec<AnnualRankingEntry>, HttpResponse> {
    let days = run_store(state, |s| s.load_all_days())
        .await
        .map_err(storage_failure)?;
    Ok(annual_ranking(&days, year))
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "arena-volley-day",
    })
}

/// Saved days for the calendar (days with teams, newest first).
#[get("/api/days")]
async fn api_list_days(state: AppState) -> HttpResponse {
    match run_store(&state, |s| s.load_all_days()).await {
        Ok(days) => HttpResponse::Ok().json(saved_day_summaries(&days)),
        Err(e) => storage_failure(e),
    }
}

/// Get a day (a fresh setup day if nothing is stored for that date).
#[get("/api/days/{date}")]
async fn api_get_day(state: AppState, path: Path<DayPath>) -> HttpResponse {
    with_day(&state, path.date, |day| HttpResponse::Ok().json(DayView::new(day))).await
}

/// Back to setup: stored entry deleted, cached copy reset.
async fn reset_day(state: &ServerState, date: NaiveDate) -> HttpResponse {
    let _write = state.day_writes.lock().await;
    if let Err(e) = run_store(state, move |s| s.delete_day(date)).await {
        return storage_failure(e);
    }
    let mut g = match state.days.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(date).or_insert_with(|| DayEntry {
        day: GameDay::new(date),
        last_activity: Instant::now(),
    });
    entry.day.reset();
    entry.last_activity = Instant::now();
    HttpResponse::Ok().json(DayView::new(&entry.day))
}

/// Reset the day: back to setup, stored entry deleted.
#[delete("/api/days/{date}")]
async fn api_reset_day(state: AppState, path: Path<DayPath>) -> HttpResponse {
    reset_day(&state, path.date).await
}

/// Add a player to the day's roster (also remembered in the player hall).
#[post("/api/days/{date}/players")]
async fn api_add_player(state: AppState, path: Path<DayPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    let name = body.into_inner().name;
    let hall_name = name.trim().to_string();
    let resp = update_day(&state, path.date, |day| day.add_player(name).map(|_| ())).await;
    if resp.status().is_success() {
        if let Err(e) = run_store(&state, move |s| s.add_to_player_hall(&hall_name)).await {
            log::warn!("Could not update player hall: {}", e);
        }
    }
    resp
}

#[delete("/api/days/{date}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<DayPlayerPath>) -> HttpResponse {
    let player_id = path.player_id;
    update_day(&state, path.date, |day| day.remove_player(player_id)).await
}

#[post("/api/days/{date}/players/{player_id}/captain")]
async fn api_toggle_captain(state: AppState, path: Path<DayPlayerPath>) -> HttpResponse {
    let player_id = path.player_id;
    update_day(&state, path.date, |day| day.toggle_captain(player_id)).await
}

/// Change format and/or round type (setup only).
#[put("/api/days/{date}/settings")]
async fn api_set_settings(state: AppState, path: Path<DayPath>, body: Json<SettingsBody>) -> HttpResponse {
    let SettingsBody { format, round_type } = body.into_inner();
    update_day(&state, path.date, |day| {
        if let Some(f) = format {
            day.set_format(f)?;
        }
        if let Some(r) = round_type {
            day.set_round_type(r)?;
        }
        Ok(())
    })
    .await
}

/// Draw teams at random and generate the schedule.
#[post("/api/days/{date}/draw")]
async fn api_draw_teams(state: AppState, path: Path<DayPath>) -> HttpResponse {
    update_day(&state, path.date, |day| day.draw_teams(&mut rand::thread_rng())).await
}

/// Build teams by hand and generate the schedule.
#[post("/api/days/{date}/teams")]
async fn api_manual_teams(state: AppState, path: Path<DayPath>, body: Json<ManualTeamsBody>) -> HttpResponse {
    let teams = body.into_inner().teams;
    update_day(&state, path.date, |day| day.assign_teams_manually(&teams)).await
}

#[put("/api/days/{date}/matches/{match_id}/score")]
async fn api_update_score(state: AppState, path: Path<DayMatchPath>, body: Json<ScoreBody>) -> HttpResponse {
    let match_id = path.match_id;
    update_day(&state, path.date, |day| day.update_score(match_id, body.score_1, body.score_2)).await
}

#[post("/api/days/{date}/matches/{match_id}/finish")]
async fn api_finish_match(state: AppState, path: Path<DayMatchPath>, body: Json<FinishBody>) -> HttpResponse {
    let match_id = path.match_id;
    update_day(&state, path.date, |day| day.finish_match(match_id, body.timer_seconds)).await
}

/// Share text for the day (`?mode=all` or `?mode=standings`).
#[get("/api/days/{date}/export/text")]
async fn api_export_day_text(state: AppState, path: Path<DayPath>, query: Query<ShareQuery>) -> HttpResponse {
    let mode = query.mode;
    with_day(&state, path.date, |day| {
        let text = match mode {
            ShareMode::All => export::results_message(day),
            ShareMode::Standings => export::standings_message(day),
        };
        HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(text)
    })
    .await
}

#[get("/api/days/{date}/export/standings.csv")]
async fn api_export_standings_csv(state: AppState, path: Path<DayPath>) -> HttpResponse {
    with_day(&state, path.date, |day| match export::standings_csv(&day.standings()) {
        Ok(bytes) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(bytes),
        Err(e) => HttpResponse::InternalServerError().json(error_json(e)),
    })
    .await
}

/// Annual ranking (`?year=`, default current year).
#[get("/api/ranking")]
async fn api_ranking(state: AppState, query: Query<YearQuery>) -> HttpResponse {
    match load_ranking(&state, query.year.unwrap_or_else(current_year)).await {
        Ok(ranking) => HttpResponse::Ok().json(ranking),
        Err(resp) => resp,
    }
}

#[get("/api/ranking/export/text")]
async fn api_ranking_text(state: AppState, query: Query<YearQuery>) -> HttpResponse {
    let year = query.year.unwrap_or_else(current_year);
    match load_ranking(&state, year).await {
        Ok(ranking) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(export::ranking_message(&ranking, year)),
        Err(resp) => resp,
    }
}

#[get("/api/ranking/export.csv")]
async fn api_ranking_csv(state: AppState, query: Query<YearQuery>) -> HttpResponse {
    let ranking = match load_ranking(&state, query.year.unwrap_or_else(current_year)).await {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    match export::ranking_csv(&ranking) {
        Ok(bytes) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(bytes),
        Err(e) => HttpResponse::InternalServerError().json(error_json(e)),
    }
}

#[get("/api/hall")]
async fn api_get_hall(state: AppState) -> HttpResponse {
    match run_store(&state, |s| s.load_player_hall()).await {
        Ok(hall) => HttpResponse::Ok().json(hall),
        Err(e) => storage_failure(e),
    }
}

#[post("/api/hall")]
async fn api_add_to_hall(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let name = body.into_inner().name;
    match run_store(&state, move |s| s.add_to_player_hall(&name)).await {
        Ok(hall) => HttpResponse::Ok().json(hall),
        Err(e) => storage_failure(e),
    }
}

#[delete("/api/hall/{name}")]
async fn api_remove_from_hall(state: AppState, path: Path<HallNamePath>) -> HttpResponse {
    let name = path.into_inner().name;
    match run_store(&state, move |s| s.remove_from_player_hall(&name)).await {
        Ok(hall) => HttpResponse::Ok().json(hall),
        Err(e) => storage_failure(e),
    }
}

#[delete("/api/hall")]
async fn api_clear_hall(state: AppState) -> HttpResponse {
    match run_store(&state, |s| s.clear_player_hall()).await {
        Ok(()) => HttpResponse::Ok().json(Vec::<String>::new()),
        Err(e) => storage_failure(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| default_data_dir());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!("Storing data in {}", data_dir);

    let state = Data::new(ServerState::new(JsonFileStore::new(data_dir)));

    // Background task: every 30 minutes, drop cached days inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.days.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Dropped {} inactive day(s) from memory (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_days)
            .service(api_get_day)
            .service(api_reset_day)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_toggle_captain)
            .service(api_set_settings)
            .service(api_draw_teams)
            .service(api_manual_teams)
            .service(api_update_score)
            .service(api_finish_match)
            .service(api_export_day_text)
            .service(api_export_standings_csv)
            .service(api_ranking)
            .service(api_ranking_text)
            .service(api_ranking_csv)
            .service(api_get_hall)
            .service(api_add_to_hall)
            .service(api_remove_from_hall)
            .service(api_clear_hall)
    })
    .bind(bind)?
    .run()
    .await
}
