pub mod health;
pub mod moderation;
pub mod project;
pub mod question;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                 search (GET), create (POST)
/// /projects/{id}                            get by slug-or-id, owner update (PUT),
///                                           delete (DELETE)
/// /projects/{id}/admin                      admin update (PUT)
/// /projects/{id}/approve                    approve (POST, admin)
/// /projects/{id}/deny                       deny (POST, admin)
/// /projects/{id}/favorite                   add (POST), remove (DELETE)
/// /projects/{id}/favorited-by               list favoriting users (GET)
///
/// /moderation/unapproved                    pending queue (GET, admin)
/// /moderation/denied                        denied listing (GET, admin)
///
/// /questions                                list (GET), register (POST, admin)
/// /questions/current                        active set (GET)
/// /questions/{id}                           amend (PUT, admin)
///
/// /users/{id}/favorites                     a user's favorited projects (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/moderation", moderation::router())
        .nest("/questions", question::router())
        .nest("/users", user::router())
}
