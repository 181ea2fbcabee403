use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Session endpoints
        crate::api::handlers::premium::get_session,
        crate::api::handlers::premium::update_profile,
        crate::api::handlers::premium::predict_session,
        crate::api::handlers::premium::reset_session,

        // Stateless endpoints
        crate::api::handlers::premium::estimate_premium,
        crate::api::handlers::premium::calculate_bmi,
    ),
    components(
        schemas(
            // Domain entities
            premium_guide_domain::entities::profile::ProfileInput,
            premium_guide_domain::entities::profile::UserProfile,
            premium_guide_domain::entities::profile::Sex,
            premium_guide_domain::entities::profile::Smoker,
            premium_guide_domain::entities::profile::BmiMode,
            premium_guide_domain::entities::profile::BmiCategory,
            premium_guide_domain::entities::premium::PremiumPrediction,
            premium_guide_domain::entities::premium::PremiumComparison,
            premium_guide_domain::entities::premium::ComparisonTier,
            premium_guide_domain::entities::premium::DatasetComparison,
            premium_guide_domain::entities::premium::MessageLevel,
            premium_guide_domain::entities::insights::InsightPanel,
            premium_guide_domain::entities::insights::InputEchoRow,
            premium_guide_domain::services::SessionView,

            // API entities
            crate::entities::bmi::BmiQuery,
            crate::entities::bmi::BmiResponse,
            crate::api::handlers::errors::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "session", description = "The interactive form session"),
        (name = "premium", description = "Stateless premium and BMI calculators")
    ),
    info(
        title = "PremiumGuide API",
        version = "0.1.0",
        description = "Health insurance premium estimator",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
