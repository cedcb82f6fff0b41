//! REST API: tournaments, teams, players, schedule, match admin, results, standings, predictions
//! and announcements.
//! Mount with `App::new().app_data(state).configure(api::configure)`.

use crate::league::League;
use crate::logic::{
    create_fixture, delete_fixture, edit_fixture, generate_schedule, matchday_schedule,
    player_leaderboard, prediction_leaderboard, predictions_for_user, ranked_standings,
    report_result, standings_announcement, standings_csv, submit_prediction, PlayerSortKey,
    DEFAULT_LEADERBOARD_LIMIT,
};
use crate::models::{
    ErrorKind, Fixture, FixtureId, FixtureUpdate, NewTournament, Player, PlayerId,
    PlayerPerformance, PlayerUpdate, Prediction, TeamId, TeamUpdate, Tournament, TournamentError,
};
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path, Query},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Shared league state.
pub type AppState = Data<RwLock<League>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddTeamBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    short_name: Option<String>,
}

#[derive(Deserialize, Default)]
struct GenerateBody {
    #[serde(default)]
    shuffle: bool,
}

#[derive(Deserialize)]
struct ReportBody {
    score_home: Option<i64>,
    score_away: Option<i64>,
}

#[derive(Deserialize)]
struct PredictionBody {
    fixture_id: FixtureId,
    #[serde(default)]
    user: String,
    score_home: i64,
    score_away: i64,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    team_id: TeamId,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    discord_id: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

#[derive(Deserialize)]
struct AddFixtureBody {
    round: u32,
    home: TeamId,
    away: TeamId,
}

#[derive(Deserialize)]
struct PlayerLeaderboardQuery {
    sort_by: Option<String>,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct RoundQuery {
    round: Option<u32>,
}

#[derive(Deserialize)]
struct MatchdayQuery {
    matchday: Option<u32>,
}

/// Path segment: tournament slug (e.g. /api/tournaments/{slug})
#[derive(Deserialize)]
struct SlugPath {
    slug: String,
}

/// Path segments: tournament slug and team id
#[derive(Deserialize)]
struct SlugTeamPath {
    slug: String,
    team_id: TeamId,
}

/// Path segments: tournament slug and fixture id
#[derive(Deserialize)]
struct SlugFixturePath {
    slug: String,
    fixture_id: FixtureId,
}

/// Path segments: tournament slug and player id
#[derive(Deserialize)]
struct SlugPlayerPath {
    slug: String,
    player_id: PlayerId,
}

/// Path segments: tournament slug and predicting user
#[derive(Deserialize)]
struct SlugUserPath {
    slug: String,
    user: String,
}

/// Path segments: tournament slug and round number
#[derive(Deserialize)]
struct SlugRoundPath {
    slug: String,
    round: u32,
}

/// A fixture with its team names resolved (for API responses).
#[derive(Serialize)]
struct FixtureView<'a> {
    #[serde(flatten)]
    fixture: &'a Fixture,
    home_team: &'a str,
    away_team: &'a str,
}

impl<'a> FixtureView<'a> {
    fn new(tournament: &'a Tournament, fixture: &'a Fixture) -> Self {
        Self {
            fixture,
            home_team: tournament.team_name(fixture.home),
            away_team: tournament.team_name(fixture.away),
        }
    }
}

/// A player with team name and derived performance.
#[derive(Serialize)]
struct PlayerView<'a> {
    #[serde(flatten)]
    player: &'a Player,
    team: &'a str,
    performance: PlayerPerformance,
}

impl<'a> PlayerView<'a> {
    fn new(tournament: &'a Tournament, player: &'a Player) -> Self {
        Self {
            player,
            team: tournament.team_name(player.team_id),
            performance: player.performance(),
        }
    }
}

/// A prediction together with the fixture it is about.
#[derive(Serialize)]
struct PredictionView<'a> {
    #[serde(flatten)]
    prediction: &'a Prediction,
    #[serde(rename = "match")]
    fixture: Option<FixtureView<'a>>,
}

/// Map a library error to a JSON `{ "error": ... }` response with a matching status.
fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e.kind() {
        ErrorKind::InvalidInput => HttpResponse::BadRequest().json(body),
        ErrorKind::NotFound => HttpResponse::NotFound().json(body),
        ErrorKind::Conflict => HttpResponse::Conflict().json(body),
        ErrorKind::Inconsistent => HttpResponse::UnprocessableEntity().json(body),
        ErrorKind::Internal => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let league = state.read().await;
    HttpResponse::Ok().json(league.list())
}

/// Create a tournament (`name` and `slug` required).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<NewTournament>) -> HttpResponse {
    let mut league = state.write().await;
    match league.create_tournament(body.into_inner()) {
        Ok(t) => HttpResponse::Created().json(t),
        Err(e) => error_response(&e),
    }
}

#[get("/api/tournaments/{slug}")]
async fn api_get_tournament(state: AppState, path: Path<SlugPath>) -> HttpResponse {
    let league = state.read().await;
    match league.get(&path.slug) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

#[get("/api/tournaments/{slug}/teams")]
async fn api_list_teams(state: AppState, path: Path<SlugPath>) -> HttpResponse {
    let league = state.read().await;
    match league.get(&path.slug) {
        Ok(t) => HttpResponse::Ok().json(&t.teams),
        Err(e) => error_response(&e),
    }
}

/// Register a team (before the round robin is generated).
#[post("/api/tournaments/{slug}/teams")]
async fn api_add_team(
    state: AppState,
    path: Path<SlugPath>,
    body: Json<AddTeamBody>,
) -> HttpResponse {
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let body = body.into_inner();
    match t.add_team(body.name, body.short_name) {
        Ok(id) => match t.team(id) {
            Some(team) => HttpResponse::Created().json(team),
            None => error_response(&TournamentError::TeamNotFound(id)),
        },
        Err(e) => error_response(&e),
    }
}

/// Rename a team or change its short name.
#[put("/api/tournaments/{slug}/teams/{team_id}")]
async fn api_update_team(
    state: AppState,
    path: Path<SlugTeamPath>,
    body: Json<TeamUpdate>,
) -> HttpResponse {
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match t.update_team(path.team_id, body.into_inner()) {
        Ok(team) => HttpResponse::Ok().json(team),
        Err(e) => error_response(&e),
    }
}

/// Remove a team by id (before the round robin is generated). Its players go with it.
#[delete("/api/tournaments/{slug}/teams/{team_id}")]
async fn api_remove_team(state: AppState, path: Path<SlugTeamPath>) -> HttpResponse {
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match t.remove_team(path.team_id) {
        Ok(()) => HttpResponse::Ok().json(&t.teams),
        Err(e) => error_response(&e),
    }
}

/// Generate the round robin and create empty standings.
#[post("/api/tournaments/{slug}/generate")]
async fn api_generate(
    state: AppState,
    path: Path<SlugPath>,
    body: Option<Json<GenerateBody>>,
) -> HttpResponse {
    let shuffle = body.map(|b| b.shuffle).unwrap_or_default();
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match generate_schedule(t, shuffle) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => error_response(&e),
    }
}

/// Fixtures ordered by round; `?round=n` limits to one matchday.
#[get("/api/tournaments/{slug}/matches")]
async fn api_list_matches(
    state: AppState,
    path: Path<SlugPath>,
    query: Query<RoundQuery>,
) -> HttpResponse {
    let league = state.read().await;
    let t = match league.get(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let mut fixtures: Vec<&Fixture> = t
        .fixtures
        .iter()
        .filter(|f| query.round.map_or(true, |r| f.round == r))
        .collect();
    fixtures.sort_by_key(|f| f.round);
    let views: Vec<FixtureView<'_>> = fixtures
        .into_iter()
        .map(|f| FixtureView::new(t, f))
        .collect();
    HttpResponse::Ok().json(views)
}

/// Add a single fixture between two registered teams.
#[post("/api/tournaments/{slug}/matches")]
async fn api_create_match(
    state: AppState,
    path: Path<SlugPath>,
    body: Json<AddFixtureBody>,
) -> HttpResponse {
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match create_fixture(t, body.round, body.home, body.away) {
        Ok(fixture) => HttpResponse::Created().json(FixtureView::new(t, &fixture)),
        Err(e) => error_response(&e),
    }
}

/// Move a fixture to another round or change its teams; standings are recalculated.
#[put("/api/tournaments/{slug}/matches/{fixture_id}")]
async fn api_update_match(
    state: AppState,
    path: Path<SlugFixturePath>,
    body: Json<FixtureUpdate>,
) -> HttpResponse {
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match edit_fixture(t, path.fixture_id, body.into_inner()) {
        Ok(fixture) => HttpResponse::Ok().json(FixtureView::new(t, &fixture)),
        Err(e) => error_response(&e),
    }
}

#[delete("/api/tournaments/{slug}/matches/{fixture_id}")]
async fn api_delete_match(state: AppState, path: Path<SlugFixturePath>) -> HttpResponse {
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match delete_fixture(t, path.fixture_id) {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => error_response(&e),
    }
}

/// Report a final score; standings are recalculated.
#[post("/api/tournaments/{slug}/matches/{fixture_id}/report")]
async fn api_report_result(
    state: AppState,
    path: Path<SlugFixturePath>,
    body: Json<ReportBody>,
) -> HttpResponse {
    let (home, away) = match (body.score_home, body.score_away) {
        (Some(h), Some(a)) => (h, a),
        _ => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "Scores required" }))
        }
    };
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match report_result(t, path.fixture_id, home, away) {
        Ok(fixture) => HttpResponse::Ok().json(FixtureView::new(t, &fixture)),
        Err(e) => error_response(&e),
    }
}

#[post("/api/tournaments/{slug}/recalculate")]
async fn api_recalculate(state: AppState, path: Path<SlugPath>) -> HttpResponse {
    let mut league = state.write().await;
    if let Err(e) = league.recalculate(&path.slug) {
        return error_response(&e);
    }
    match league.get(&path.slug) {
        Ok(t) => HttpResponse::Ok().json(ranked_standings(t)),
        Err(e) => error_response(&e),
    }
}

#[get("/api/tournaments/{slug}/standings")]
async fn api_standings(state: AppState, path: Path<SlugPath>) -> HttpResponse {
    let league = state.read().await;
    match league.get(&path.slug) {
        Ok(t) => HttpResponse::Ok().json(ranked_standings(t)),
        Err(e) => error_response(&e),
    }
}

#[get("/api/tournaments/{slug}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<SlugPath>) -> HttpResponse {
    let league = state.read().await;
    let t = match league.get(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match standings_csv(&ranked_standings(t)) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => error_response(&e),
    }
}

/// Standings table as posted to Discord (`?matchday=n` adds it to the title).
#[get("/api/tournaments/{slug}/announcements/standings")]
async fn api_standings_announcement(
    state: AppState,
    path: Path<SlugPath>,
    query: Query<MatchdayQuery>,
) -> HttpResponse {
    let league = state.read().await;
    match league.get(&path.slug) {
        Ok(t) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(standings_announcement(t, query.matchday)),
        Err(e) => error_response(&e),
    }
}

#[get("/api/tournaments/{slug}/announcements/matchday/{round}")]
async fn api_matchday_announcement(state: AppState, path: Path<SlugRoundPath>) -> HttpResponse {
    let league = state.read().await;
    let t = match league.get(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match matchday_schedule(t, path.round) {
        Ok(text) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(text),
        Err(e) => error_response(&e),
    }
}

#[post("/api/tournaments/{slug}/predictions")]
async fn api_submit_prediction(
    state: AppState,
    path: Path<SlugPath>,
    body: Json<PredictionBody>,
) -> HttpResponse {
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match submit_prediction(t, body.fixture_id, &body.user, body.score_home, body.score_away) {
        Ok(p) => HttpResponse::Created().json(p),
        Err(e) => error_response(&e),
    }
}

#[get("/api/tournaments/{slug}/predictions/leaderboard")]
async fn api_prediction_leaderboard(state: AppState, path: Path<SlugPath>) -> HttpResponse {
    let league = state.read().await;
    match league.get(&path.slug) {
        Ok(t) => HttpResponse::Ok().json(prediction_leaderboard(t)),
        Err(e) => error_response(&e),
    }
}

/// One user's predictions, newest first, each with its match.
#[get("/api/tournaments/{slug}/predictions/user/{user}")]
async fn api_user_predictions(state: AppState, path: Path<SlugUserPath>) -> HttpResponse {
    let league = state.read().await;
    let t = match league.get(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let views: Vec<PredictionView<'_>> = predictions_for_user(t, &path.user)
        .into_iter()
        .map(|p| PredictionView {
            prediction: p,
            fixture: t.fixture(p.fixture_id).map(|f| FixtureView::new(t, f)),
        })
        .collect();
    HttpResponse::Ok().json(views)
}

/// All players, by display name.
#[get("/api/tournaments/{slug}/players")]
async fn api_list_players(state: AppState, path: Path<SlugPath>) -> HttpResponse {
    let league = state.read().await;
    let t = match league.get(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let mut players: Vec<&Player> = t.players.iter().collect();
    players.sort_by_key(|p| p.display_name.to_lowercase());
    let views: Vec<PlayerView<'_>> = players
        .into_iter()
        .map(|p| PlayerView::new(t, p))
        .collect();
    HttpResponse::Ok().json(views)
}

#[post("/api/tournaments/{slug}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<SlugPath>,
    body: Json<AddPlayerBody>,
) -> HttpResponse {
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let body = body.into_inner();
    let added = t.add_player(body.team_id, &body.display_name, body.discord_id, body.role);
    match added.map(|p| p.id) {
        Ok(id) => match t.player(id) {
            Some(player) => HttpResponse::Created().json(PlayerView::new(t, player)),
            None => error_response(&TournamentError::PlayerNotFound(id)),
        },
        Err(e) => error_response(&e),
    }
}

/// One player with performance figures and the team's fixtures.
#[get("/api/tournaments/{slug}/players/{player_id}")]
async fn api_get_player(state: AppState, path: Path<SlugPlayerPath>) -> HttpResponse {
    let league = state.read().await;
    let t = match league.get(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let player = match t.player(path.player_id) {
        Some(p) => p,
        None => return error_response(&TournamentError::PlayerNotFound(path.player_id)),
    };
    let matches: Vec<FixtureView<'_>> = t
        .fixtures
        .iter()
        .filter(|f| f.involves(player.team_id))
        .map(|f| FixtureView::new(t, f))
        .collect();
    HttpResponse::Ok().json(serde_json::json!({
        "player": PlayerView::new(t, player),
        "matches": matches,
    }))
}

/// Update profile fields, transfer to another team, or set stat counters.
#[put("/api/tournaments/{slug}/players/{player_id}")]
async fn api_update_player(
    state: AppState,
    path: Path<SlugPlayerPath>,
    body: Json<PlayerUpdate>,
) -> HttpResponse {
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    if let Err(e) = t.update_player(path.player_id, body.into_inner()) {
        return error_response(&e);
    }
    match t.player(path.player_id) {
        Some(player) => HttpResponse::Ok().json(PlayerView::new(t, player)),
        None => error_response(&TournamentError::PlayerNotFound(path.player_id)),
    }
}

#[delete("/api/tournaments/{slug}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<SlugPlayerPath>) -> HttpResponse {
    let mut league = state.write().await;
    let t = match league.get_mut(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match t.remove_player(path.player_id) {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => error_response(&e),
    }
}

/// Player leaderboard: `?sort_by=goals|assists|saves|wins` (default goals) and `?limit=n`
/// (default 50).
#[get("/api/tournaments/{slug}/leaderboard/players")]
async fn api_player_leaderboard(
    state: AppState,
    path: Path<SlugPath>,
    query: Query<PlayerLeaderboardQuery>,
) -> HttpResponse {
    let league = state.read().await;
    let t = match league.get(&path.slug) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let sort_by = query
        .sort_by
        .as_deref()
        .map(PlayerSortKey::parse)
        .unwrap_or_default();
    let limit = query.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
    HttpResponse::Ok().json(player_leaderboard(t, sort_by, limit))
}

/// Register every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(favicon)
        .service(api_list_tournaments)
        .service(api_create_tournament)
        .service(api_get_tournament)
        .service(api_list_teams)
        .service(api_add_team)
        .service(api_update_team)
        .service(api_remove_team)
        .service(api_list_players)
        .service(api_add_player)
        .service(api_get_player)
        .service(api_update_player)
        .service(api_remove_player)
        .service(api_player_leaderboard)
        .service(api_generate)
        .service(api_list_matches)
        .service(api_create_match)
        .service(api_update_match)
        .service(api_delete_match)
        .service(api_report_result)
        .service(api_recalculate)
        .service(api_standings)
        .service(api_standings_csv)
        .service(api_standings_announcement)
        .service(api_matchday_announcement)
        .service(api_submit_prediction)
        .service(api_user_predictions)
        .service(api_prediction_leaderboard);
}
