use core_common::MessageResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(MessageResponse)),
    info(
        title = "Poupa API",
        version = "0.1.0",
        description = "Users and their income and expense categories"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/category", api = domain_categories::handlers::ApiDoc),
        (path = "/user", api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
