pub mod atsukai;
pub mod atsukai_type;
pub mod health;
pub mod jyoukyou;
pub mod kiji1;
pub mod kiji2;
pub mod memo;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /atsukai                       list, create
/// /atsukai/reorder               swap two orders (PUT)
/// /atsukai/{id}                  get, update, delete
/// /atsukai/{id}/order            set order (PUT)
///
/// /type                          list (?atsukai_order), create
/// /type/reorder                  swap two orders within a category (PUT)
/// /type/{id}                     get, update, delete
///
/// /memo                          lookup by (?type_id, ?atsukai_id), create
/// /memo/list                     list (?atsukai_id, ?type_id)
/// /memo/{id}                     get, update, delete
///
/// /kiji1                         list (?atsukai_id, ?type_id), create
/// /kiji1/{id}                    get, update, delete
///
/// /kiji2                         list (?atsukai_id, ?type_id, ?jyoukyou_id), create
/// /kiji2/{id}                    get, update, delete
///
/// /jyoukyou                      list, create
/// /jyoukyou/{id}                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/atsukai", atsukai::router())
        .nest("/type", atsukai_type::router())
        .nest("/memo", memo::router())
        .nest("/kiji1", kiji1::router())
        .nest("/kiji2", kiji2::router())
        .nest("/jyoukyou", jyoukyou::router())
}
