//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Path, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    routing::{get, post, put},
    Form, Json, Router,
};
use charsheets_domain::{Ability, Armor, Attack, Character, CharacterId};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;

use super::requester::Requester;
use super::ApiError;
use crate::app::App;
use crate::forms::RegistrationForm;
use crate::infrastructure::ports::User;
use crate::use_cases::{CharacterInput, RegistrationOutcome};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/register", post(register))
        .route(
            "/api/characters",
            get(list_characters).post(create_character),
        )
        .route(
            "/api/characters/{id}",
            get(get_character)
                .put(update_character)
                .delete(delete_character),
        )
        .route("/api/characters/{id}/armor", post(add_armor))
        .route(
            "/api/characters/{id}/armor/{index}",
            put(update_armor).delete(remove_armor),
        )
        .route("/api/characters/{id}/attacks", post(add_attack))
        .route(
            "/api/characters/{id}/attacks/{index}",
            put(update_attack).delete(remove_attack),
        )
        .route("/api/characters/{id}/abilities", post(add_ability))
        .route(
            "/api/characters/{id}/abilities/{index}",
            put(update_ability).delete(remove_ability),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Registration
// =============================================================================

async fn register(
    State(app): State<Arc<App>>,
    request: Request,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let form: RegistrationForm = read_submission(request).await?;
    match app.use_cases.register.execute(&form).await? {
        RegistrationOutcome::Registered(user) => Ok((StatusCode::CREATED, Json(user))),
        RegistrationOutcome::Rejected(validation) => Err(ApiError::Validation(validation)),
    }
}

/// Read a body sent either as JSON or as an urlencoded form post.
async fn read_submission<T>(request: Request) -> Result<T, ApiError>
where
    T: DeserializeOwned + Send + 'static,
{
    let is_json = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));

    if is_json {
        let Json(value) = Json::<T>::from_request(request, &()).await?;
        Ok(value)
    } else {
        let Form(value) = Form::<T>::from_request(request, &())
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(value)
    }
}

// =============================================================================
// Character Sheets
// =============================================================================

async fn list_characters(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
) -> Result<Json<Vec<Character>>, ApiError> {
    let characters = app.use_cases.character_sheet.list(user_id).await?;
    Ok(Json(characters))
}

async fn create_character(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    payload: Result<Json<CharacterInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let Json(input) = payload?;
    let character = app.use_cases.character_sheet.create(user_id, input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

async fn get_character(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path(id): Path<Uuid>,
) -> Result<Json<Character>, ApiError> {
    let character = app
        .use_cases
        .character_sheet
        .get(user_id, CharacterId::from_uuid(id))
        .await?;
    Ok(Json(character))
}

async fn update_character(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path(id): Path<Uuid>,
    payload: Result<Json<CharacterInput>, JsonRejection>,
) -> Result<Json<Character>, ApiError> {
    let Json(input) = payload?;
    let character = app
        .use_cases
        .character_sheet
        .update(user_id, CharacterId::from_uuid(id), input)
        .await?;
    Ok(Json(character))
}

async fn delete_character(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .character_sheet
        .delete(user_id, CharacterId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Armor
// =============================================================================

async fn add_armor(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path(id): Path<Uuid>,
    payload: Result<Json<Armor>, JsonRejection>,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let Json(armor) = payload?;
    let character = app
        .use_cases
        .character_sheet
        .add_armor(user_id, CharacterId::from_uuid(id), armor)
        .await?;
    Ok((StatusCode::CREATED, Json(character)))
}

async fn update_armor(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path((id, index)): Path<(Uuid, usize)>,
    payload: Result<Json<Armor>, JsonRejection>,
) -> Result<Json<Character>, ApiError> {
    let Json(armor) = payload?;
    let character = app
        .use_cases
        .character_sheet
        .update_armor(user_id, CharacterId::from_uuid(id), index, armor)
        .await?;
    Ok(Json(character))
}

async fn remove_armor(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<Character>, ApiError> {
    let character = app
        .use_cases
        .character_sheet
        .remove_armor(user_id, CharacterId::from_uuid(id), index)
        .await?;
    Ok(Json(character))
}

// =============================================================================
// Attacks
// =============================================================================

async fn add_attack(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path(id): Path<Uuid>,
    payload: Result<Json<Attack>, JsonRejection>,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let Json(attack) = payload?;
    let character = app
        .use_cases
        .character_sheet
        .add_attack(user_id, CharacterId::from_uuid(id), attack)
        .await?;
    Ok((StatusCode::CREATED, Json(character)))
}

async fn update_attack(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path((id, index)): Path<(Uuid, usize)>,
    payload: Result<Json<Attack>, JsonRejection>,
) -> Result<Json<Character>, ApiError> {
    let Json(attack) = payload?;
    let character = app
        .use_cases
        .character_sheet
        .update_attack(user_id, CharacterId::from_uuid(id), index, attack)
        .await?;
    Ok(Json(character))
}

async fn remove_attack(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<Character>, ApiError> {
    let character = app
        .use_cases
        .character_sheet
        .remove_attack(user_id, CharacterId::from_uuid(id), index)
        .await?;
    Ok(Json(character))
}

// =============================================================================
// Abilities
// =============================================================================

async fn add_ability(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path(id): Path<Uuid>,
    payload: Result<Json<Ability>, JsonRejection>,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let Json(ability) = payload?;
    let character = app
        .use_cases
        .character_sheet
        .add_ability(user_id, CharacterId::from_uuid(id), ability)
        .await?;
    Ok((StatusCode::CREATED, Json(character)))
}

async fn update_ability(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path((id, index)): Path<(Uuid, usize)>,
    payload: Result<Json<Ability>, JsonRejection>,
) -> Result<Json<Character>, ApiError> {
    let Json(ability) = payload?;
    let character = app
        .use_cases
        .character_sheet
        .update_ability(user_id, CharacterId::from_uuid(id), index, ability)
        .await?;
    Ok(Json(character))
}

async fn remove_ability(
    State(app): State<Arc<App>>,
    Requester(user_id): Requester,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<Character>, ApiError> {
    let character = app
        .use_cases
        .character_sheet
        .remove_ability(user_id, CharacterId::from_uuid(id), index)
        .await?;
    Ok(Json(character))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request as HttpRequest};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        routes().with_state(Arc::new(App::in_memory()))
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = HttpRequest::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("x-user-id", user);
        }
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn register_user(router: &Router, email: &str) -> String {
        let (status, body) = send(
            router,
            Method::POST,
            "/api/register",
            None,
            Some(json!({"email": email, "password": "longsword1"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["_id"].as_str().unwrap().to_string()
    }

    async fn create_sheet(router: &Router, user: &str, body: Value) -> String {
        let (status, body) =
            send(router, Method::POST, "/api/characters", Some(user), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        body["_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_check() {
        let response = app()
            .oneshot(HttpRequest::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn registration_accepts_urlencoded_forms() {
        let request = HttpRequest::post("/api/register")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("email=mialee%40example.com&password=magicmissile"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn invalid_registration_returns_field_errors() {
        let request = HttpRequest::post("/api/register")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("email=not-an-email&password=short"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["valid"], json!(false));
        assert_eq!(body["errors"]["email"], json!(["Invalid email"]));
        assert_eq!(
            body["errors"]["password"],
            json!(["Field must be between 8 and 20 characters long."])
        );
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let router = app();
        register_user(&router, "tordek@example.com").await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/register",
            None,
            Some(json!({"email": "Tordek@example.com", "password": "waraxe123"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"]["email"], json!(["Email is already registered"]));
    }

    #[tokio::test]
    async fn minimal_sheet_is_created_with_defaults() {
        let router = app();
        let user = register_user(&router, "lidda@example.com").await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/characters",
            Some(&user),
            Some(json!({"Name": "Lidda"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["Name"], "Lidda");
        assert_eq!(body["owner"], json!(user));
        assert_eq!(body["AttributeList"]["dexterity"], 10);
        assert_eq!(body["ArmorObjList"], json!([]));
        assert_eq!(body["AttacksList"], json!([]));
        assert_eq!(body["AbilityObjsList"], json!([]));
    }

    #[tokio::test]
    async fn out_of_range_attribute_is_unprocessable() {
        let router = app();
        let user = register_user(&router, "krusk@example.com").await;

        let (status, _) = send(
            &router,
            Method::POST,
            "/api/characters",
            Some(&user),
            Some(json!({"Name": "Krusk", "AttributeList": {"strength": 21}})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, list) = send(&router, Method::GET, "/api/characters", Some(&user), None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn requests_without_user_header_are_unauthorized() {
        let (status, _) = send(&app(), Method::GET, "/api/characters", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app(),
            Method::GET,
            "/api/characters",
            Some("not-a-uuid"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_user_cannot_create_sheets() {
        let stranger = Uuid::new_v4().to_string();
        let (status, _) = send(
            &app(),
            Method::POST,
            "/api/characters",
            Some(&stranger),
            Some(json!({"Name": "Nobody"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn other_users_cannot_read_or_delete_a_sheet() {
        let router = app();
        let owner = register_user(&router, "jozan@example.com").await;
        let other = register_user(&router, "vadania@example.com").await;
        let id = create_sheet(&router, &owner, json!({"Name": "Jozan"})).await;
        let uri = format!("/api/characters/{id}");

        let (status, _) = send(&router, Method::GET, &uri, Some(&other), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&router, Method::DELETE, &uri, Some(&other), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = send(&router, Method::GET, &uri, Some(&owner), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Name"], "Jozan");
    }

    #[tokio::test]
    async fn sheet_update_and_delete() {
        let router = app();
        let user = register_user(&router, "eberk@example.com").await;
        let id = create_sheet(&router, &user, json!({"Name": "Eberk"})).await;
        let uri = format!("/api/characters/{id}");

        let (status, body) = send(
            &router,
            Method::PUT,
            &uri,
            Some(&user),
            Some(json!({
                "Name": "Eberk",
                "CharClass": "Cleric",
                "SavesList": {"WisSave": true},
                "SkillsList": {"Religion": true}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["CharClass"], "Cleric");
        assert_eq!(body["SavesList"]["WisSave"], true);
        assert_eq!(body["SkillsList"]["Religion"], true);

        let (status, _) = send(&router, Method::DELETE, &uri, Some(&user), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&router, Method::GET, &uri, Some(&user), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn equipment_lists_are_edited_by_index() {
        let router = app();
        let user = register_user(&router, "regdar@example.com").await;
        let id = create_sheet(&router, &user, json!({"Name": "Regdar"})).await;

        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/characters/{id}/armor"),
            Some(&user),
            Some(json!({"Name": "Chain mail", "ACValue": 16, "HeavyArmor": true})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["ArmorObjList"][0]["ACValue"], 16);

        let (status, body) = send(
            &router,
            Method::PUT,
            &format!("/api/characters/{id}/armor/0"),
            Some(&user),
            Some(json!({"Name": "Full plate", "ACValue": 18, "HeavyArmor": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ArmorObjList"][0]["Name"], "Full plate");

        let (status, _) = send(
            &router,
            Method::POST,
            &format!("/api/characters/{id}/attacks"),
            Some(&user),
            Some(json!({"Name": "Greatsword", "DmgDie": 6})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/characters/{id}/abilities"),
            Some(&user),
            Some(json!({"Name": "Second Wind", "DieType": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["AbilityObjsList"][0]["Name"], "Second Wind");

        let (status, _) = send(
            &router,
            Method::DELETE,
            &format!("/api/characters/{id}/attacks/3"),
            Some(&user),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &router,
            Method::DELETE,
            &format!("/api/characters/{id}/armor/0"),
            Some(&user),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ArmorObjList"], json!([]));
        assert_eq!(body["AttacksList"][0]["Name"], "Greatsword");
    }

    #[tokio::test]
    async fn list_returns_only_own_sheets() {
        let router = app();
        let owner = register_user(&router, "soveliss@example.com").await;
        let other = register_user(&router, "nebin@example.com").await;
        create_sheet(&router, &owner, json!({"Name": "Soveliss"})).await;
        create_sheet(&router, &other, json!({"Name": "Nebin"})).await;

        let (status, body) =
            send(&router, Method::GET, "/api/characters", Some(&owner), None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["Name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Soveliss"]);
    }
}
