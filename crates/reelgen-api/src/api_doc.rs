//! OpenAPI documentation

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reelgen API",
        description = "Upload a 3D asset and receive a generated-video job record"
    ),
    paths(
        crate::handlers::generate::generate_video,
        crate::handlers::health::health,
    ),
    components(schemas(
        reelgen_core::models::GenerationResponse,
        reelgen_core::models::JobStatus,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "generate", description = "Video generation from 3D assets"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
