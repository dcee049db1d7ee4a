//! Ratings & Reviews endpoint table
//!
//! Method names and their declared parameters, in wire order.

use wrservices_core::EndpointRegistry;

pub const SERVICE: &str = "ratereview";
pub const VERSION: &str = "v1";

pub const GET_AVERAGE_RATING: &str = "getAverageRating";
pub const GET_TOP_ENTITIES: &str = "getTopEntities";
pub const GET_RATINGS_FOR_ENTITY: &str = "getRatingsForEntity";
pub const GET_RATINGS_BY_USER: &str = "getRatingsByUser";
pub const SET_RATING: &str = "setRating";
pub const DELETE_RATING: &str = "deleteRating";
pub const GET_REVIEW_COUNT: &str = "getReviewCount";
pub const GET_REVIEWS_FOR_ENTITY: &str = "getReviewsForEntity";
pub const GET_REVIEWS_BY_USER: &str = "getReviewsByUser";
pub const SUBMIT_REVIEW: &str = "submitReview";
pub const DELETE_REVIEW: &str = "deleteReview";
pub const DELETE_REVIEW_BY_ID: &str = "deleteReviewById";
pub const GET_RATING_DISTRIBUTION: &str = "getRatingDistribution";

/// (method, parameters)
pub const ENDPOINTS: [(&str, &[&str]); 13] = [
    (GET_AVERAGE_RATING, &["entities", "options"]),
    (GET_TOP_ENTITIES, &["entity_type", "options"]),
    (GET_RATINGS_FOR_ENTITY, &["entities", "options"]),
    (GET_RATINGS_BY_USER, &["users", "options"]),
    (SET_RATING, &["entity", "userid", "rating"]),
    (DELETE_RATING, &["entity", "userid"]),
    (GET_REVIEW_COUNT, &["entities", "options"]),
    (GET_REVIEWS_FOR_ENTITY, &["entities", "options"]),
    (GET_REVIEWS_BY_USER, &["users", "options"]),
    (SUBMIT_REVIEW, &["in_review"]),
    (DELETE_REVIEW, &["entity", "userid"]),
    (DELETE_REVIEW_BY_ID, &["reviewid"]),
    (GET_RATING_DISTRIBUTION, &["entities", "reviews_only", "locale"]),
];

pub fn registry() -> EndpointRegistry {
    ENDPOINTS
        .iter()
        .map(|(method, params)| (*method, params.iter().copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrservices_core::Framing;

    #[test]
    fn test_registry_has_every_endpoint() {
        let registry = registry();
        assert_eq!(registry.len(), ENDPOINTS.len());
        assert_eq!(
            registry.describe(GET_RATING_DISTRIBUTION).as_deref(),
            Some("getRatingDistribution(entities, reviews_only, locale)")
        );
    }

    #[test]
    fn test_mutating_endpoints() {
        let mutating: Vec<&str> = ENDPOINTS
            .iter()
            .map(|(method, _)| *method)
            .filter(|method| Framing::classify(method).is_mutating())
            .collect();

        assert_eq!(
            mutating,
            vec![SET_RATING, DELETE_RATING, SUBMIT_REVIEW, DELETE_REVIEW, DELETE_REVIEW_BY_ID]
        );
    }
}
