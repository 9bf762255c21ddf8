use super::*;

#[test]
fn parse_recipe_id_accepts_digits() {
    assert_eq!(parse_recipe_id("42"), Some(42));
    assert_eq!(parse_recipe_id("007"), Some(7));
}

#[test]
fn parse_recipe_id_rejects_non_digits() {
    for raw in ["", "-1", "+1", "abc", "4.2", " 4", "42/"] {
        assert_eq!(parse_recipe_id(raw), None, "{raw:?} should be rejected");
    }
}

#[test]
fn parse_recipe_id_rejects_overflow() {
    assert_eq!(parse_recipe_id("99999999999999999999"), None);
}

#[test]
fn recipe_error_to_status_maps_not_found() {
    assert_eq!(recipe_error_to_status(RecipeError::NotFound(1)), StatusCode::NOT_FOUND);
}

#[test]
fn recipe_error_to_status_maps_database_error() {
    let err = RecipeError::Database(sqlx::Error::PoolTimedOut);
    assert_eq!(recipe_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}
